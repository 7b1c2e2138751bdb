//! Extraction from the raw `cookie` header.

use http::header;

use crate::{RequestView, TokenExtractor};

/// Extracts the value of a named cookie (default `token`).
///
/// The parsing rules are a deliberately narrow subset of cookie syntax:
/// split on `;`, trim each segment, split the segment once on the first `=`.
/// Segments without `=` are skipped; when a name repeats, the last
/// occurrence wins.
#[derive(Debug, Clone)]
pub struct CookieExtractor {
    name: String,
}

impl CookieExtractor {
    /// Creates an extractor for the given cookie name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for CookieExtractor {
    fn default() -> Self {
        Self::new("token")
    }
}

impl TokenExtractor for CookieExtractor {
    fn extract(&self, request: &RequestView<'_>) -> Option<String> {
        let raw = request.header(header::COOKIE)?;

        let mut found = None;
        for segment in raw.split(';') {
            let Some((key, value)) = segment.trim().split_once('=') else {
                continue;
            };
            if key == self.name && !value.is_empty() {
                found = Some(value.to_owned());
            }
        }
        found
    }
}
