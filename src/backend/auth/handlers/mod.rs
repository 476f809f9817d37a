//! Authentication Handlers Module
//!
//! HTTP handlers for authentication and user management endpoints.
//!
//! # Handlers
//!
//! - **`login`** - POST /api/auth/login - Credential verification, token issue
//! - **`verify`** - GET /api/auth/verify - Token check, returns the principal
//! - **`manage`** - /api/users - Admin-only user listing, creation, deletion

/// Request and response types
pub mod types;

/// Login handler
pub mod login;

/// Token verification handler
pub mod verify;

/// Admin user management handlers
pub mod manage;

pub use login::login;
pub use types::{LoginRequest, TokenResponse, UserResponse};
pub use verify::verify;
