//! Shared Module
//!
//! Types used across the backend modules. Everything here is designed for
//! serialization: the weekday and role enumerations have a single canonical
//! wire form that is also their storage form.

/// Weekday and role enumerations
pub mod types;

/// Shared error types
pub mod error;

/// Re-export commonly used types for convenience
pub use types::{Role, Weekday};
pub use error::SharedError;
