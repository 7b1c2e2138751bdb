//! Middleware-hook adapter and the router-group guard built on it.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::Router;
use clavis_auth::{check_request, AuthConfig, AuthUser, RequestView};

use crate::rejection::AuthRejection;

/// Middleware hook that authenticates the request before it proceeds.
///
/// Use with `axum::middleware::from_fn_with_state`. A verified payload is
/// attached to the request extensions as [`AuthUser`]; an absent token with
/// optional credentials passes through untouched.
///
/// # Errors
///
/// Returns [`AuthRejection`] for the host framework to render.
pub async fn require_auth(
    State(config): State<Arc<AuthConfig>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthRejection> {
    let checked = check_request(&RequestView::from(&req), &config);

    match checked {
        Ok(Some(claims)) => {
            req.extensions_mut().insert(AuthUser(claims));
            Ok(next.run(req).await)
        }
        Ok(None) => Ok(next.run(req).await),
        Err(err) => Err(err.into()),
    }
}

/// Applies the authentication guard to a whole router at once.
pub trait RouterExt {
    /// Guards every route currently in the router with [`require_auth`].
    #[must_use]
    fn require_auth(self, config: Arc<AuthConfig>) -> Self;
}

impl<S> RouterExt for Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn require_auth(self, config: Arc<AuthConfig>) -> Self {
        self.route_layer(middleware::from_fn_with_state(config, require_auth))
    }
}
