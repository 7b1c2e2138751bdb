//! Borrowed view of the request pieces extraction may touch.

use http::header::AsHeaderName;
use http::{HeaderMap, Uri};

/// The parts of an inbound request an extractor is allowed to read.
///
/// Both parts are optional so the same extractors serve full HTTP requests
/// and bare header maps alike; a missing part reads as absent, never as an
/// error.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestView<'a> {
    headers: Option<&'a HeaderMap>,
    uri: Option<&'a Uri>,
}

impl<'a> RequestView<'a> {
    /// Creates an empty view.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches the request headers.
    #[must_use]
    pub fn headers(mut self, headers: &'a HeaderMap) -> Self {
        self.headers = Some(headers);
        self
    }

    /// Attaches the request URI.
    #[must_use]
    pub fn uri(mut self, uri: &'a Uri) -> Self {
        self.uri = Some(uri);
        self
    }

    /// Looks up a header and returns it as a string, tolerating absence and
    /// non-UTF-8 values.
    pub fn header(&self, name: impl AsHeaderName) -> Option<&'a str> {
        self.headers?.get(name)?.to_str().ok()
    }

    /// The raw query string, if the view carries a URI with one.
    pub fn query(&self) -> Option<&'a str> {
        self.uri?.query()
    }
}

impl<'a, B> From<&'a http::Request<B>> for RequestView<'a> {
    fn from(request: &'a http::Request<B>) -> Self {
        Self::new().headers(request.headers()).uri(request.uri())
    }
}

impl<'a> From<&'a http::request::Parts> for RequestView<'a> {
    fn from(parts: &'a http::request::Parts) -> Self {
        Self::new().headers(&parts.headers).uri(&parts.uri)
    }
}
