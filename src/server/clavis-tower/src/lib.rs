//! # Clavis Tower
//!
//! Generic middleware adapter for Clavis authentication.
//!
//! [`AuthLayer`] wraps any inner `tower::Service` taking `http::Request`.
//! The wrapped service runs the shared Clavis recipe before each request:
//! a verified token attaches [`AuthUser`](clavis_auth::AuthUser) to the
//! request extensions and the inner service runs; a classified failure is
//! answered directly with a `401` JSON response and the inner service is
//! never invoked; unclassified failures flow down the service's error
//! channel as a [`tower::BoxError`].
//!
//! ```rust,ignore
//! use clavis_auth::AuthConfig;
//! use clavis_tower::AuthLayer;
//! use tower::ServiceBuilder;
//!
//! let service = ServiceBuilder::new()
//!     .layer(AuthLayer::new(AuthConfig::new("secret")))
//!     .service(my_inner_service);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod layer;
mod service;

pub use layer::AuthLayer;
pub use service::AuthService;
