//! Adapter configuration.

use clavis_extract::ExtractorChain;
use clavis_token::{Algorithm, VerifyOptions};

/// Configuration shared by every adapter invocation.
///
/// Immutable once built; adapters clone it freely or share it behind an
/// `Arc`. Defaults: credentials required, bearer-header extraction, HS256
/// verification.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    verify: VerifyOptions,
    credentials_required: bool,
    extractors: ExtractorChain,
}

impl AuthConfig {
    /// Creates a configuration with the default extraction and verification
    /// settings.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            verify: VerifyOptions::new(secret),
            credentials_required: true,
            extractors: ExtractorChain::default(),
        }
    }

    /// Sets the verification algorithm allow-list.
    #[must_use]
    pub fn algorithms(mut self, algorithms: Vec<Algorithm>) -> Self {
        self.verify.algorithms = algorithms;
        self
    }

    /// Sets whether a request without a token is an error (`true`, the
    /// default) or a silent pass-through (`false`).
    #[must_use]
    pub fn credentials_required(mut self, required: bool) -> Self {
        self.credentials_required = required;
        self
    }

    /// Replaces the extraction chain.
    #[must_use]
    pub fn extractors(mut self, extractors: ExtractorChain) -> Self {
        self.extractors = extractors;
        self
    }

    /// The verification options handed to the token core.
    pub fn verify_options(&self) -> &VerifyOptions {
        &self.verify
    }

    /// Whether an absent token fails the request.
    pub fn requires_credentials(&self) -> bool {
        self.credentials_required
    }

    /// The configured extraction chain.
    pub fn extractor_chain(&self) -> &ExtractorChain {
        &self.extractors
    }
}
