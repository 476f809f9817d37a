/**
 * Backend Error Types
 *
 * This module defines the error taxonomy for the HTTP API. Each variant maps
 * to exactly one status code, and handlers never translate errors themselves:
 * they return `ApiError` and let the `IntoResponse` conversion do the rest.
 *
 * # Error Categories
 *
 * - `Conflict` - a schedule mutation would double-book a class or a teacher
 * - `NotFound` - the referenced schedule or user does not exist
 * - `Validation` - a request field is out of range or malformed
 * - `Unauthorized` - missing, invalid or expired credentials
 * - `Forbidden` - authenticated, but the role does not permit the action
 * - `Database` - opaque storage failure, passed through unchanged
 *
 * Conflict and not-found errors represent real business outcomes, not
 * transient faults: nothing in this module retries.
 */
use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::SharedError;

/// Which uniqueness invariant a schedule mutation would violate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictKind {
    /// The class already has a lesson in this slot
    Class,
    /// The teacher is already booked in this slot
    Teacher,
}

/// Errors returned by API handlers
#[derive(Debug, Error)]
pub enum ApiError {
    /// Schedule conflict (double-booked class or teacher)
    #[error("{message}")]
    Conflict {
        kind: ConflictKind,
        /// Message naming the blocking teacher/class/subject
        message: String,
    },

    /// Referenced resource does not exist
    #[error("{what} not found")]
    NotFound {
        /// What was looked up ("Schedule", "User", ...)
        what: &'static str,
    },

    /// Request payload failed validation
    #[error(transparent)]
    Validation(#[from] SharedError),

    /// Missing or invalid credentials
    #[error("{message}")]
    Unauthorized { message: String },

    /// Authenticated but not allowed to perform the action
    #[error("Admin access required")]
    Forbidden,

    /// Storage failure, propagated opaquely
    #[error("Database error")]
    Database(#[from] sqlx::Error),

    /// Unexpected internal failure (token encoding, hashing)
    #[error("Internal server error")]
    Internal { message: String },
}

impl ApiError {
    /// Create a conflict error
    pub fn conflict(kind: ConflictKind, message: impl Into<String>) -> Self {
        Self::Conflict {
            kind,
            message: message.into(),
        }
    }

    /// Create a not-found error
    pub fn not_found(what: &'static str) -> Self {
        Self::NotFound { what }
    }

    /// Create an unauthorized error
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the user-visible error message
    ///
    /// Database and internal errors are reported generically; their details
    /// go to the log, not to the client.
    pub fn message(&self) -> String {
        match self {
            Self::Database(_) | Self::Internal { .. } => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflict_status() {
        let error = ApiError::conflict(ConflictKind::Class, "slot taken");
        assert_eq!(error.status_code(), StatusCode::CONFLICT);
        assert_eq!(error.message(), "slot taken");
    }

    #[test]
    fn test_not_found_status() {
        let error = ApiError::not_found("Schedule");
        assert_eq!(error.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(error.message(), "Schedule not found");
    }

    #[test]
    fn test_validation_status() {
        let error: ApiError = SharedError::validation("period", "out of range").into();
        assert_eq!(error.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_forbidden_status() {
        assert_eq!(ApiError::Forbidden.status_code(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_database_error_is_opaque() {
        let error = ApiError::Database(sqlx::Error::RowNotFound);
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.message(), "Internal server error");
    }
}
