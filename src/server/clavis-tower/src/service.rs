//! Tower Service implementation for authentication.

use std::sync::Arc;
use std::task::{Context, Poll};

use bytes::Bytes;
use clavis_auth::{check_request, AuthConfig, AuthError, AuthUser, RequestView, VerifyError};
use futures_util::future::BoxFuture;
use http::header::{self, HeaderValue};
use http::{Request, Response, StatusCode};
use tower::{BoxError, Service};

/// Tower Service that performs authentication.
///
/// Generic over the inner service's request and response body types; the
/// response body only needs `From<Bytes>` so the service can fabricate the
/// `401` JSON body itself without ever polling a body.
#[derive(Debug, Clone)]
pub struct AuthService<S> {
    inner: S,
    config: Arc<AuthConfig>,
}

impl<S> AuthService<S> {
    /// Creates a new auth service around an inner service.
    pub fn new(inner: S, config: Arc<AuthConfig>) -> Self {
        Self { inner, config }
    }

    /// The configuration this service checks requests against.
    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Consumes the service, returning the inner service.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

/// Builds the `401` response for a classified failure: JSON body
/// `{"error": <message>}`, matching the contract callers branch on.
fn unauthorized<B: From<Bytes>>(err: &AuthError) -> Response<B> {
    let body = serde_json::json!({ "error": err.message() }).to_string();

    let mut response = Response::new(B::from(Bytes::from(body)));
    *response.status_mut() = StatusCode::UNAUTHORIZED;
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    response
}

impl<S, ReqBody, ResBody> Service<Request<ReqBody>> for AuthService<S>
where
    S: Service<Request<ReqBody>, Response = Response<ResBody>> + Clone + Send + 'static,
    S::Future: Send,
    S::Error: Into<BoxError>,
    ReqBody: Send + 'static,
    ResBody: From<Bytes> + Send + 'static,
{
    type Response = Response<ResBody>;
    type Error = BoxError;
    type Future = BoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx).map_err(Into::into)
    }

    fn call(&mut self, mut req: Request<ReqBody>) -> Self::Future {
        let config = Arc::clone(&self.config);
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);

        let checked = check_request(&RequestView::from(&req), &config);

        Box::pin(async move {
            match checked {
                Ok(Some(claims)) => {
                    req.extensions_mut().insert(AuthUser(claims));
                    inner.call(req).await.map_err(Into::into)
                }
                Ok(None) => inner.call(req).await.map_err(Into::into),
                Err(VerifyError::Auth(err)) => Ok(unauthorized(&err)),
                Err(err) => Err(err.into()),
            }
        })
    }
}
