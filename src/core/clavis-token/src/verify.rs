//! Token verification and failure classification.

use std::collections::HashSet;

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{AuthError, VerifyError};

/// Options for token verification.
#[derive(Debug, Clone)]
pub struct VerifyOptions {
    /// Symmetric key material.
    pub secret: String,

    /// Algorithm allow-list; a token signed with anything outside this list
    /// fails as [`AuthError::MalformedToken`].
    pub algorithms: Vec<Algorithm>,
}

impl VerifyOptions {
    /// Creates options restricted to the default algorithm (HS256).
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            algorithms: vec![Algorithm::HS256],
        }
    }

    /// Sets the algorithm allow-list.
    #[must_use]
    pub fn algorithms(mut self, algorithms: Vec<Algorithm>) -> Self {
        self.algorithms = algorithms;
        self
    }

    fn validation(&self) -> Validation {
        let default = self.algorithms.first().copied().unwrap_or(Algorithm::HS256);
        let mut validation = Validation::new(default);
        validation.algorithms = self.algorithms.clone();
        validation.leeway = 0;
        validation.validate_exp = true;
        validation.validate_nbf = false;
        // Claims are opaque here; issuer/audience checks belong to callers.
        validation.validate_aud = false;
        // A token without `exp` is still a valid token.
        validation.required_spec_claims = HashSet::new();
        validation
    }
}

/// Verifies a token and returns its claims unchanged.
///
/// # Errors
///
/// Every failure the primitive reports about the *token* is classified into
/// one of [`AuthError::TokenExpired`], [`AuthError::InvalidSignature`] or
/// [`AuthError::MalformedToken`]. Failures about the *key material* are not
/// authentication outcomes and surface as [`VerifyError::Crypto`].
pub fn verify(token: &str, opts: &VerifyOptions) -> Result<Value, VerifyError> {
    let key = DecodingKey::from_secret(opts.secret.as_bytes());
    match jsonwebtoken::decode::<Value>(token, &key, &opts.validation()) {
        Ok(data) => Ok(data.claims),
        Err(err) => Err(classify(err)),
    }
}

/// Verifies a token and decodes its claims into a typed structure.
///
/// # Errors
///
/// As [`verify`]; additionally returns [`VerifyError::Claims`] when the
/// verified claims do not deserialize into `T`.
pub fn verify_as<T: DeserializeOwned>(token: &str, opts: &VerifyOptions) -> Result<T, VerifyError> {
    let claims = verify(token, opts)?;
    serde_json::from_value(claims).map_err(VerifyError::Claims)
}

/// Maps the primitive's typed failure causes onto the taxonomy.
///
/// Unrecognized token-validation failures fall back to `InvalidSignature`
/// rather than surfacing raw; key-material failures are left unclassified.
fn classify(err: jsonwebtoken::errors::Error) -> VerifyError {
    let classified = match err.kind() {
        ErrorKind::ExpiredSignature => Some(AuthError::TokenExpired),
        ErrorKind::InvalidSignature => Some(AuthError::InvalidSignature),
        ErrorKind::InvalidToken
        | ErrorKind::Base64(_)
        | ErrorKind::Json(_)
        | ErrorKind::Utf8(_)
        | ErrorKind::InvalidAlgorithm
        | ErrorKind::InvalidAlgorithmName => Some(AuthError::MalformedToken),
        ErrorKind::InvalidEcdsaKey
        | ErrorKind::InvalidRsaKey(_)
        | ErrorKind::RsaFailedSigning
        | ErrorKind::InvalidKeyFormat
        | ErrorKind::Crypto(_) => None,
        _ => Some(AuthError::InvalidSignature),
    };

    match classified {
        Some(kind) => kind.into(),
        None => VerifyError::Crypto(err),
    }
}
