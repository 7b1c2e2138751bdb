//! Authentication error types.

use thiserror::Error;

/// Classified verification failures.
///
/// This is a closed set: every adapter branches on exactly these four kinds,
/// and each kind carries a stable machine-readable code alongside its fixed
/// message. Adding a variant requires updating every adapter's mapping.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    /// Extraction found no token and credentials are required.
    #[error("No authorization token was found")]
    MissingToken,

    /// The token's expiry claim is in the past.
    #[error("Token has expired")]
    TokenExpired,

    /// The token's signature does not match.
    #[error("Invalid token signature")]
    InvalidSignature,

    /// The token is structurally invalid (wrong segment count, bad
    /// encoding, or an algorithm outside the allow-list).
    #[error("Malformed token")]
    MalformedToken,
}

impl AuthError {
    /// Stable machine-readable code for programmatic branching.
    pub const fn code(&self) -> &'static str {
        match self {
            AuthError::MissingToken => "TOKEN_MISSING",
            AuthError::TokenExpired => "TOKEN_EXPIRED",
            AuthError::InvalidSignature => "TOKEN_INVALID",
            AuthError::MalformedToken => "TOKEN_MALFORMED",
        }
    }

    /// The human-readable message surfaced to callers.
    pub const fn message(&self) -> &'static str {
        match self {
            AuthError::MissingToken => "No authorization token was found",
            AuthError::TokenExpired => "Token has expired",
            AuthError::InvalidSignature => "Invalid token signature",
            AuthError::MalformedToken => "Malformed token",
        }
    }
}

/// Signing-time failure.
///
/// Signing fails only on operator errors (unserializable payload, key
/// material that does not fit the chosen algorithm), so this sits outside
/// the [`AuthError`] taxonomy.
#[derive(Debug, Error)]
#[error("Failed to sign token: {reason}")]
pub struct SignError {
    pub(crate) reason: String,
}

impl SignError {
    pub(crate) fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl From<jsonwebtoken::errors::Error> for SignError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        Self::new(err.to_string())
    }
}

/// Verification failure: either a classified [`AuthError`] or a primitive
/// failure that must not be reported as an authentication outcome.
#[derive(Debug, Error)]
pub enum VerifyError {
    /// A classified failure. Adapters translate this into their
    /// unauthorized outcome.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// The decoded claims did not match the shape requested by
    /// [`verify_as`](crate::verify_as).
    #[error("claims did not match the expected shape: {0}")]
    Claims(#[source] serde_json::Error),

    /// An unclassified primitive failure (key material, crypto backend).
    /// Propagates unchanged; adapters push it to the host's error channel
    /// instead of answering 401.
    #[error(transparent)]
    Crypto(jsonwebtoken::errors::Error),
}

impl VerifyError {
    /// The classified kind, if this failure is part of the taxonomy.
    pub fn auth_error(&self) -> Option<AuthError> {
        match self {
            VerifyError::Auth(err) => Some(*err),
            _ => None,
        }
    }
}
