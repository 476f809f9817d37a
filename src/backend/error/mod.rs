//! Backend Error Types
//!
//! Error handling for the HTTP layer. `ApiError` is the single error type
//! returned by handlers; `conversion` maps it to a JSON response with the
//! appropriate status code.

/// Error type definitions
pub mod types;

/// Conversion to HTTP responses
pub mod conversion;

pub use types::{ApiError, ConflictKind};
