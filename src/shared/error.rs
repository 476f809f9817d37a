//! Shared Error Types
//!
//! Validation errors produced while checking request payloads before they
//! reach storage. These carry the offending field so the HTTP layer can
//! report which part of the request was rejected.

use thiserror::Error;

/// Errors that can occur while validating shared data types
#[derive(Debug, Error, Clone)]
pub enum SharedError {
    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let error = SharedError::validation("period", "must be between 1 and 8");
        match error {
            SharedError::ValidationError { field, message } => {
                assert_eq!(field, "period");
                assert_eq!(message, "must be between 1 and 8");
            }
        }
    }

    #[test]
    fn test_display() {
        let error = SharedError::validation("day", "unknown weekday");
        assert_eq!(
            error.to_string(),
            "Validation error in field 'day': unknown weekday"
        );
    }
}
