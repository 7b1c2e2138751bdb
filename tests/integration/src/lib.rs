//! Integration tests for the Clavis adapters.
//!
//! These tests drive complete request flows in-process: an axum application
//! guarded by the middleware hook and the handler extractors, the generic
//! tower layer over a plain service, and the raw request verifier — all
//! sharing one configuration surface.

use std::sync::Arc;

use axum::body::Body;
use axum::extract::Request;
use axum::routing::get;
use axum::Router;
use clavis_auth::{AuthConfig, AuthUser};
use clavis_extract::{BearerExtractor, CookieExtractor, ExtractorChain, QueryExtractor};
use clavis_token::{sign, SignOptions};
use serde_json::{json, Value};

// ============================================================================
// Helpers
// ============================================================================

/// Initializes tracing once for the whole test binary.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

/// Signs a payload with the test defaults.
pub fn token_for(secret: &str, claims: Value) -> String {
    sign(&claims, &SignOptions::new(secret)).expect("signing failed")
}

/// A request against `uri`, optionally carrying a bearer token.
pub fn bearer_request(uri: &str, token: Option<&str>) -> http::Request<Body> {
    let builder = http::Request::builder().uri(uri);
    let builder = match token {
        Some(token) => builder.header("authorization", format!("Bearer {token}")),
        None => builder,
    };
    builder.body(Body::empty()).expect("valid request")
}

/// Reads a JSON response body to a value.
pub async fn read_json(response: http::Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body read failed");
    serde_json::from_slice(&bytes).expect("body is JSON")
}

/// Reads a plain response body to a string.
pub async fn read_text(response: http::Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body read failed");
    String::from_utf8(bytes.to_vec()).expect("body is UTF-8")
}

/// Handler that reports the attached user, if any.
pub async fn whoami(req: Request) -> String {
    match req.extensions().get::<AuthUser>() {
        Some(AuthUser(claims)) => format!("user:{}", claims["userId"]),
        None => "anonymous".to_owned(),
    }
}

/// An application with every route guarded by the middleware hook.
pub fn guarded_app(config: AuthConfig) -> Router {
    use clavis_axum::RouterExt;

    Router::new()
        .route("/whoami", get(whoami))
        .require_auth(Arc::new(config))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use axum::http::StatusCode;
    use bytes::Bytes;
    use clavis_auth::{verify_request, AuthError, RequestView};
    use clavis_axum::{Claims, OptionalClaims, RouterExt};
    use clavis_tower::AuthLayer;
    use jsonwebtoken::{encode, get_current_timestamp, EncodingKey, Header};
    use std::convert::Infallible;
    use tower::{service_fn, Layer, Service, ServiceExt};

    const SECRET: &str = "integration-secret";

    fn config() -> AuthConfig {
        AuthConfig::new(SECRET)
    }

    // ------------------------------------------------------------------
    // Middleware hook, full denial matrix
    // ------------------------------------------------------------------

    #[tokio::test]
    async fn test_guarded_app_accepts_valid_token() {
        init_tracing();
        let token = token_for(SECRET, json!({"userId": 1}));

        let response = guarded_app(config())
            .oneshot(bearer_request("/whoami", Some(&token)))
            .await
            .expect("infallible");

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(read_text(response).await, "user:1");
    }

    #[tokio::test]
    async fn test_guarded_app_missing_token() {
        let response = guarded_app(config())
            .oneshot(bearer_request("/whoami", None))
            .await
            .expect("infallible");

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = read_json(response).await;
        assert_eq!(body["code"], "TOKEN_MISSING");
        assert_eq!(body["error"], "No authorization token was found");
    }

    #[tokio::test]
    async fn test_guarded_app_expired_token() {
        let now = get_current_timestamp();
        let token = encode(
            &Header::default(),
            &json!({"userId": 1, "iat": now - 7200, "exp": now - 3600}),
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .expect("failed to encode token");

        let response = guarded_app(config())
            .oneshot(bearer_request("/whoami", Some(&token)))
            .await
            .expect("infallible");

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = read_json(response).await;
        assert_eq!(body["code"], "TOKEN_EXPIRED");
        assert_eq!(body["error"], "Token has expired");
    }

    #[tokio::test]
    async fn test_guarded_app_wrong_secret() {
        let token = token_for("some-other-secret", json!({"userId": 1}));

        let response = guarded_app(config())
            .oneshot(bearer_request("/whoami", Some(&token)))
            .await
            .expect("infallible");

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = read_json(response).await;
        assert_eq!(body["code"], "TOKEN_INVALID");
        assert_eq!(body["error"], "Invalid token signature");
    }

    #[tokio::test]
    async fn test_guarded_app_malformed_token() {
        let response = guarded_app(config())
            .oneshot(bearer_request("/whoami", Some("not.a.validtoken")))
            .await
            .expect("infallible");

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = read_json(response).await;
        assert_eq!(body["code"], "TOKEN_MALFORMED");
        assert_eq!(body["error"], "Malformed token");
    }

    #[tokio::test]
    async fn test_guarded_app_optional_credentials() {
        let response = guarded_app(config().credentials_required(false))
            .oneshot(bearer_request("/whoami", None))
            .await
            .expect("infallible");

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(read_text(response).await, "anonymous");
    }

    // ------------------------------------------------------------------
    // Extraction precedence, end to end
    // ------------------------------------------------------------------

    #[tokio::test]
    async fn test_extraction_order_decides_which_token_wins() {
        let query_token = token_for(SECRET, json!({"userId": "fromQuery"}));
        let cookie_token = token_for(SECRET, json!({"userId": "fromCookie"}));
        let bearer_token = token_for(SECRET, json!({"userId": "fromBearer"}));

        let config = config().extractors(
            ExtractorChain::new()
                .with(QueryExtractor::default())
                .with(CookieExtractor::default())
                .with(BearerExtractor),
        );

        let request = http::Request::builder()
            .uri(format!("/whoami?token={query_token}"))
            .header("cookie", format!("token={cookie_token}"))
            .header("authorization", format!("Bearer {bearer_token}"))
            .body(Body::empty())
            .expect("valid request");

        let response = guarded_app(config)
            .oneshot(request)
            .await
            .expect("infallible");

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(read_text(response).await, "user:\"fromQuery\"");
    }

    #[tokio::test]
    async fn test_cookie_only_chain() {
        let cookie_token = token_for(SECRET, json!({"userId": 5}));
        let config =
            config().extractors(ExtractorChain::new().with(CookieExtractor::default()));

        let request = http::Request::builder()
            .uri("/whoami")
            .header("cookie", format!("session=abc; token={cookie_token}"))
            .body(Body::empty())
            .expect("valid request");

        let response = guarded_app(config)
            .oneshot(request)
            .await
            .expect("infallible");

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(read_text(response).await, "user:5");
    }

    // ------------------------------------------------------------------
    // Middleware + handler guard cooperation
    // ------------------------------------------------------------------

    #[tokio::test]
    async fn test_middleware_attachment_feeds_claims_guard() {
        async fn me(Claims(claims): Claims) -> String {
            claims["userId"].to_string()
        }

        let shared = Arc::new(config());
        let app = Router::new()
            .route("/me", get(me))
            .require_auth(Arc::clone(&shared))
            .with_state(Arc::clone(&shared));

        let token = token_for(SECRET, json!({"userId": 11}));
        let response = app
            .oneshot(bearer_request("/me", Some(&token)))
            .await
            .expect("infallible");

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(read_text(response).await, "11");
    }

    #[tokio::test]
    async fn test_optional_claims_without_middleware() {
        async fn greet(OptionalClaims(claims): OptionalClaims) -> String {
            match claims {
                Some(claims) => format!("hello {}", claims["userId"]),
                None => "hello stranger".to_owned(),
            }
        }

        let app = Router::new()
            .route("/greet", get(greet))
            .with_state(Arc::new(config().credentials_required(false)));

        let response = app
            .oneshot(bearer_request("/greet", None))
            .await
            .expect("infallible");

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(read_text(response).await, "hello stranger");
    }

    // ------------------------------------------------------------------
    // Generic tower layer
    // ------------------------------------------------------------------

    async fn echo_user(req: http::Request<Bytes>) -> Result<http::Response<Bytes>, Infallible> {
        let body = match req.extensions().get::<AuthUser>() {
            Some(AuthUser(claims)) => Bytes::from(format!("user:{}", claims["userId"])),
            None => Bytes::from_static(b"anonymous"),
        };
        Ok(http::Response::new(body))
    }

    #[tokio::test]
    async fn test_tower_layer_attaches_user() {
        let token = token_for(SECRET, json!({"userId": 8}));
        let mut service = AuthLayer::new(config()).layer(service_fn(echo_user));

        let request = http::Request::builder()
            .uri("/")
            .header("authorization", format!("Bearer {token}"))
            .body(Bytes::new())
            .expect("valid request");

        let response = service.ready().await.expect("ready").call(request).await
            .expect("service failed");
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.into_body(), Bytes::from_static(b"user:8"));
    }

    #[tokio::test]
    async fn test_tower_layer_denies_with_exact_json_body() {
        let service = AuthLayer::new(config()).layer(service_fn(echo_user));

        let request = http::Request::builder()
            .uri("/")
            .body(Bytes::new())
            .expect("valid request");

        let response = service.oneshot(request).await.expect("service failed");
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.into_body(),
            Bytes::from_static(br#"{"error":"No authorization token was found"}"#)
        );
    }

    // ------------------------------------------------------------------
    // Raw request verifier
    // ------------------------------------------------------------------

    #[tokio::test]
    async fn test_raw_verifier_over_cookie_request() {
        let token = token_for(SECRET, json!({"userId": 21}));
        let config =
            config().extractors(ExtractorChain::new().with(CookieExtractor::default()));

        let request = http::Request::builder()
            .uri("/")
            .header("cookie", format!("token={token}"))
            .body(())
            .expect("valid request");

        let outcome = verify_request(&RequestView::from(&request), &config)
            .expect("raw verification failed");
        assert!(outcome.is_authenticated);
        assert_eq!(outcome.claims.expect("claims")["userId"], 21);
    }

    #[tokio::test]
    async fn test_raw_verifier_reports_denial_as_value() {
        let request = http::Request::builder()
            .uri("/")
            .header("authorization", "Bearer not.a.validtoken")
            .body(())
            .expect("valid request");

        let outcome = verify_request(&RequestView::from(&request), &config())
            .expect("raw verification failed");
        assert!(!outcome.is_authenticated);

        let error = outcome.error.expect("error expected");
        assert_eq!(error, AuthError::MalformedToken);
        assert_eq!(error.code(), "TOKEN_MALFORMED");
        assert_eq!(error.message(), "Malformed token");
    }
}
