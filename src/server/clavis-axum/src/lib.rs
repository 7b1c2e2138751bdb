//! # Clavis Axum
//!
//! Axum adapters for Clavis authentication.
//!
//! Two integration styles over the same shared recipe:
//!
//! - **Middleware hook**: [`require_auth`] plugs into
//!   `axum::middleware::from_fn_with_state`; on failure it returns the typed
//!   [`AuthRejection`], which axum renders as a `401` JSON response. The
//!   group form [`RouterExt::require_auth`] applies it to every route of a
//!   `Router` at once.
//! - **Handler guards**: the [`Claims`] extractor verifies the request before
//!   a single handler runs and hands it the decoded payload;
//!   [`OptionalClaims`] is the pass-through form for handlers that accept
//!   anonymous callers.
//!
//! ```rust,ignore
//! use axum::{routing::get, Json, Router};
//! use clavis_auth::AuthConfig;
//! use clavis_axum::{Claims, RouterExt};
//! use std::sync::Arc;
//!
//! async fn me(Claims(claims): Claims) -> Json<serde_json::Value> {
//!     Json(claims)
//! }
//!
//! let config = Arc::new(AuthConfig::new("secret"));
//! let app: Router = Router::new()
//!     .route("/me", get(me))
//!     .with_state(Arc::clone(&config));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod claims;
mod middleware;
mod rejection;

pub use claims::{Claims, OptionalClaims};
pub use middleware::{require_auth, RouterExt};
pub use rejection::AuthRejection;
