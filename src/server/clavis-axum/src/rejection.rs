//! Typed rejection rendered by axum.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use clavis_auth::{AuthError, VerifyError};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// The error an adapter raises when a request is denied.
///
/// Axum's `IntoResponse` machinery is the host-side filter that turns this
/// into an HTTP response: classified failures become `401` with a JSON body
/// carrying the message and code; anything unclassified is a backend
/// problem, logged and answered `500` so it is never mistaken for a bad
/// credential.
#[derive(Debug, Error)]
pub enum AuthRejection {
    /// A classified authentication failure.
    #[error(transparent)]
    Unauthorized(#[from] AuthError),

    /// An unclassified primitive failure (key material, crypto backend).
    #[error("authentication backend failure")]
    Internal(#[source] VerifyError),
}

impl From<VerifyError> for AuthRejection {
    fn from(err: VerifyError) -> Self {
        match err {
            VerifyError::Auth(err) => Self::Unauthorized(err),
            other => Self::Internal(other),
        }
    }
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        match self {
            Self::Unauthorized(err) => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "error": err.message(), "code": err.code() })),
            )
                .into_response(),
            Self::Internal(err) => {
                error!(error = %err, "authentication backend failure");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
