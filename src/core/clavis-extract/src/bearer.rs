//! Bearer-scheme extraction from the `authorization` header.

use http::header;

use crate::{RequestView, TokenExtractor};

/// Extracts `abc` from `authorization: Bearer abc`.
///
/// The header value must be exactly two space-separated parts with a
/// case-insensitive `bearer` scheme; any other shape reads as absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct BearerExtractor;

impl TokenExtractor for BearerExtractor {
    fn extract(&self, request: &RequestView<'_>) -> Option<String> {
        let value = request.header(header::AUTHORIZATION)?;

        let mut parts = value.split(' ');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(scheme), Some(token), None)
                if scheme.eq_ignore_ascii_case("bearer") && !token.is_empty() =>
            {
                Some(token.to_owned())
            }
            _ => None,
        }
    }
}
