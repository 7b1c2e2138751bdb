//! Extraction from a URL query parameter.

use crate::{RequestView, TokenExtractor};

/// Extracts the value of a named query parameter (default `token`).
///
/// Token values are base64url and never percent-encoded, so the raw value is
/// returned without decoding. A request without a URI reads as absent.
#[derive(Debug, Clone)]
pub struct QueryExtractor {
    param: String,
}

impl QueryExtractor {
    /// Creates an extractor for the given parameter name.
    pub fn new(param: impl Into<String>) -> Self {
        Self {
            param: param.into(),
        }
    }
}

impl Default for QueryExtractor {
    fn default() -> Self {
        Self::new("token")
    }
}

impl TokenExtractor for QueryExtractor {
    fn extract(&self, request: &RequestView<'_>) -> Option<String> {
        let query = request.query()?;

        for pair in query.split('&') {
            if let Some((key, value)) = pair.split_once('=') {
                if key == self.param && !value.is_empty() {
                    return Some(value.to_owned());
                }
            }
        }
        None
    }
}
