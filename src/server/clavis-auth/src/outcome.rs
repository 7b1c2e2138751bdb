//! Raw request verification with a return-value contract.

use clavis_extract::RequestView;
use clavis_token::{AuthError, VerifyError};
use serde_json::Value;

use crate::{check_request, AuthConfig};

/// The outcome of verifying a raw request.
///
/// This is the only adapter surface that reports denial through its return
/// value instead of a framework error channel: all four classified failure
/// kinds land in [`AuthOutcome::error`].
#[derive(Debug, Clone)]
pub struct AuthOutcome {
    /// Whether a token was found and verified.
    pub is_authenticated: bool,

    /// The decoded payload, when authenticated.
    pub claims: Option<Value>,

    /// The classified failure, when denied. `None` both on success and on a
    /// credentials-optional pass-through.
    pub error: Option<AuthError>,
}

impl AuthOutcome {
    fn authenticated(claims: Value) -> Self {
        Self {
            is_authenticated: true,
            claims: Some(claims),
            error: None,
        }
    }

    fn anonymous() -> Self {
        Self {
            is_authenticated: false,
            claims: None,
            error: None,
        }
    }

    fn denied(error: AuthError) -> Self {
        Self {
            is_authenticated: false,
            claims: None,
            error: Some(error),
        }
    }
}

/// Verifies a request and reports the outcome as a value.
///
/// # Errors
///
/// Only unclassified primitive failures (key material, crypto backend) are
/// returned as `Err`; every classified kind is part of the [`AuthOutcome`].
pub fn verify_request(
    request: &RequestView<'_>,
    config: &AuthConfig,
) -> Result<AuthOutcome, VerifyError> {
    match check_request(request, config) {
        Ok(Some(claims)) => Ok(AuthOutcome::authenticated(claims)),
        Ok(None) => Ok(AuthOutcome::anonymous()),
        Err(VerifyError::Auth(err)) => Ok(AuthOutcome::denied(err)),
        Err(err) => Err(err),
    }
}
