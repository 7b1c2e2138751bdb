//! # Clavis Auth
//!
//! The shared authentication recipe behind every Clavis adapter.
//!
//! Each framework binding performs the same three steps: run the extraction
//! chain over the request, decide what an absent token means, and verify a
//! present token. Only the reporting of the unauthorized outcome differs per
//! framework, so the steps live here once as [`check_request`] and the
//! bindings supply their own reporting. [`verify_request`] is the
//! return-value-based form for callers without a surrounding framework.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod outcome;

use serde_json::Value;
use tracing::debug;

pub use config::AuthConfig;
pub use outcome::{verify_request, AuthOutcome};

pub use clavis_extract::{
    BearerExtractor, CookieExtractor, ExtractorChain, QueryExtractor, RequestView, TokenExtractor,
};
pub use clavis_token::{verify, Algorithm, AuthError, VerifyError, VerifyOptions};

/// The decoded payload of the authenticated caller, attached to request
/// extensions by the adapters under this conventional type.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Value);

/// Runs extraction and verification for one request.
///
/// - `Ok(Some(claims))`: a token was found and verified; the adapter attaches
///   the claims and continues.
/// - `Ok(None)`: no token was found and credentials are optional; the adapter
///   continues without attaching anything.
/// - `Err`: either a classified [`AuthError`] (the adapter's unauthorized
///   outcome) or an unclassified primitive failure the adapter must hand to
///   its host's error channel.
pub fn check_request(
    request: &RequestView<'_>,
    config: &AuthConfig,
) -> Result<Option<Value>, VerifyError> {
    match config.extractor_chain().extract(request) {
        Some(token) => match verify(&token, config.verify_options()) {
            Ok(claims) => Ok(Some(claims)),
            Err(err) => {
                if let Some(auth) = err.auth_error() {
                    debug!(code = auth.code(), "token rejected");
                }
                Err(err)
            }
        },
        None if config.requires_credentials() => {
            debug!("no token found in request");
            Err(AuthError::MissingToken.into())
        }
        None => Ok(None),
    }
}
