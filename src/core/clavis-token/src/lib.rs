//! # Clavis Token
//!
//! Token signing and verification core for Clavis.
//!
//! This crate wraps the `jsonwebtoken` primitive and normalizes every
//! verification failure into a small, closed taxonomy that the request
//! adapters translate into their own error-reporting conventions:
//! - [`sign`] stamps timing claims and encodes a payload
//! - [`verify`] decodes a token and classifies failures into [`AuthError`]
//! - [`verify_as`] additionally decodes the claims into a typed structure

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod sign;
pub mod verify;

pub use error::{AuthError, SignError, VerifyError};
pub use sign::{sign, SignOptions, DEFAULT_TTL};
pub use verify::{verify, verify_as, VerifyOptions};

// The algorithm identifiers are part of the public configuration surface.
pub use jsonwebtoken::Algorithm;
