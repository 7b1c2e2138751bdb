//! Tower Layer implementation for authentication.

use std::sync::Arc;

use clavis_auth::AuthConfig;
use tower::Layer;

use crate::service::AuthService;

/// Tower Layer that adds authentication to services.
///
/// Wraps inner services with [`AuthService`], which performs token
/// extraction and verification before forwarding requests.
#[derive(Debug, Clone)]
pub struct AuthLayer {
    config: Arc<AuthConfig>,
}

impl AuthLayer {
    /// Creates a new auth layer.
    pub fn new(config: AuthConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Creates a new auth layer from an already shared configuration.
    pub fn from_arc(config: Arc<AuthConfig>) -> Self {
        Self { config }
    }
}

impl<S> Layer<S> for AuthLayer {
    type Service = AuthService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        AuthService::new(inner, Arc::clone(&self.config))
    }
}
