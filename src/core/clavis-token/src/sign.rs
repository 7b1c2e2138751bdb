//! Token signing.

use std::time::Duration;

use jsonwebtoken::{get_current_timestamp, Algorithm, EncodingKey, Header};
use serde::Serialize;
use serde_json::Value;

use crate::error::SignError;

/// Default token lifetime (one hour).
pub const DEFAULT_TTL: Duration = Duration::from_secs(3600);

/// Options for token signing.
#[derive(Debug, Clone)]
pub struct SignOptions {
    /// Symmetric key material.
    pub secret: String,

    /// Lifetime of the token; `exp` is stamped as now + this.
    pub expires_in: Duration,

    /// Signing algorithm.
    pub algorithm: Algorithm,
}

impl SignOptions {
    /// Creates options with the default lifetime (1h) and algorithm (HS256).
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            expires_in: DEFAULT_TTL,
            algorithm: Algorithm::HS256,
        }
    }

    /// Sets the token lifetime.
    #[must_use]
    pub fn expires_in(mut self, expires_in: Duration) -> Self {
        self.expires_in = expires_in;
        self
    }

    /// Sets the signing algorithm.
    #[must_use]
    pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }
}

/// Signs a payload into a token.
///
/// The payload must serialize to a JSON object; the timing claims `iat` and
/// `exp` are stamped into it before encoding (overwriting any caller-supplied
/// values of those two keys).
///
/// # Errors
///
/// Returns [`SignError`] when the payload is not a JSON object or when the
/// primitive rejects the key/algorithm combination.
pub fn sign<T: Serialize>(claims: &T, opts: &SignOptions) -> Result<String, SignError> {
    let mut payload =
        serde_json::to_value(claims).map_err(|e| SignError::new(e.to_string()))?;

    let Value::Object(ref mut map) = payload else {
        return Err(SignError::new("payload must be a JSON object"));
    };

    let now = get_current_timestamp();
    let exp = now.saturating_add(opts.expires_in.as_secs());
    map.insert("iat".to_owned(), now.into());
    map.insert("exp".to_owned(), exp.into());

    let key = EncodingKey::from_secret(opts.secret.as_bytes());
    Ok(jsonwebtoken::encode(&Header::new(opts.algorithm), &payload, &key)?)
}
