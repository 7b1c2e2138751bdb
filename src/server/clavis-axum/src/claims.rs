//! Handler guards: extractors that verify before the handler runs.

use std::sync::Arc;

use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use clavis_auth::{check_request, AuthConfig, AuthError, AuthUser, RequestView};
use serde_json::Value;

use crate::rejection::AuthRejection;

/// Guard extractor: the handler runs only with a verified payload.
///
/// Declaring `Claims` as a handler argument requires a token on every call,
/// regardless of the configured credentials flag — a handler that takes the
/// payload by value has nothing to run with otherwise. Use
/// [`OptionalClaims`] for handlers that accept anonymous callers.
///
/// When [`require_auth`](crate::require_auth) already ran, the payload it
/// attached is reused instead of verifying twice.
#[derive(Debug, Clone)]
pub struct Claims(pub Value);

/// Pass-through guard extractor: anonymous callers yield `None`.
///
/// A present-but-invalid token is still rejected; only absence is tolerated,
/// and only when the configuration does not require credentials.
#[derive(Debug, Clone)]
pub struct OptionalClaims(pub Option<Value>);

fn checked_claims<S>(parts: &mut Parts, state: &S) -> Result<Option<Value>, AuthRejection>
where
    S: Send + Sync,
    Arc<AuthConfig>: FromRef<S>,
{
    if let Some(AuthUser(claims)) = parts.extensions.get::<AuthUser>() {
        return Ok(Some(claims.clone()));
    }

    let config = Arc::<AuthConfig>::from_ref(state);
    let checked = check_request(&RequestView::from(&*parts), &config);

    match checked {
        Ok(Some(claims)) => {
            parts.extensions.insert(AuthUser(claims.clone()));
            Ok(Some(claims))
        }
        Ok(None) => Ok(None),
        Err(err) => Err(err.into()),
    }
}

impl<S> FromRequestParts<S> for Claims
where
    S: Send + Sync,
    Arc<AuthConfig>: FromRef<S>,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match checked_claims(parts, state)? {
            Some(claims) => Ok(Claims(claims)),
            None => Err(AuthError::MissingToken.into()),
        }
    }
}

impl<S> FromRequestParts<S> for OptionalClaims
where
    S: Send + Sync,
    Arc<AuthConfig>: FromRef<S>,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Ok(OptionalClaims(checked_claims(parts, state)?))
    }
}
