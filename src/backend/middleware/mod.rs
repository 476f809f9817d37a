//! Middleware Module
//!
//! Request-processing middleware. Currently this is the authentication
//! extractor that turns a bearer token into a database-backed principal.

/// Bearer-token authentication extractor
pub mod auth;

pub use auth::{require_admin, AuthUser, Principal};
