//! # Clavis Extract
//!
//! Request token extraction for Clavis.
//!
//! An extractor is a pure function from a request view to an optional token
//! string. Extractors are composed into an ordered [`ExtractorChain`]; the
//! first extractor to produce a non-empty token wins and the rest are not
//! consulted. Every extractor is total: for any input it returns `None`
//! rather than failing, because the chain runs on every inbound request.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod bearer;
mod cookie;
mod query;
mod view;

use std::fmt;
use std::sync::Arc;

pub use bearer::BearerExtractor;
pub use cookie::CookieExtractor;
pub use query::QueryExtractor;
pub use view::RequestView;

/// A strategy for locating a token inside a request.
///
/// Implementations must be pure and must never panic; absence is always
/// signaled by `None`. Plain closures over [`RequestView`] implement this
/// trait directly.
pub trait TokenExtractor: Send + Sync {
    /// Returns the token found in the request, if any.
    fn extract(&self, request: &RequestView<'_>) -> Option<String>;
}

impl<F> TokenExtractor for F
where
    F: Fn(&RequestView<'_>) -> Option<String> + Send + Sync,
{
    fn extract(&self, request: &RequestView<'_>) -> Option<String> {
        self(request)
    }
}

/// An ordered list of extractors; insertion order is precedence.
#[derive(Clone)]
pub struct ExtractorChain {
    extractors: Vec<Arc<dyn TokenExtractor>>,
}

impl ExtractorChain {
    /// Creates an empty chain. Use [`ExtractorChain::default`] for the
    /// standard single-bearer-extractor configuration.
    pub fn new() -> Self {
        Self {
            extractors: Vec::new(),
        }
    }

    /// Appends an extractor; it is consulted after everything already added.
    #[must_use]
    pub fn with(mut self, extractor: impl TokenExtractor + 'static) -> Self {
        self.extractors.push(Arc::new(extractor));
        self
    }

    /// Number of extractors in the chain.
    pub fn len(&self) -> usize {
        self.extractors.len()
    }

    /// Whether the chain holds no extractors at all.
    pub fn is_empty(&self) -> bool {
        self.extractors.is_empty()
    }

    /// Runs the chain left to right and returns the first non-empty token.
    pub fn extract(&self, request: &RequestView<'_>) -> Option<String> {
        self.extractors
            .iter()
            .find_map(|extractor| extractor.extract(request).filter(|token| !token.is_empty()))
    }
}

impl Default for ExtractorChain {
    fn default() -> Self {
        Self::new().with(BearerExtractor)
    }
}

impl fmt::Debug for ExtractorChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtractorChain")
            .field("len", &self.extractors.len())
            .finish()
    }
}
