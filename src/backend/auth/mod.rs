//! Authentication Module
//!
//! User accounts, credential verification and JWT session tokens.
//!
//! # Module Structure
//!
//! - **`users`** - User model and database operations
//! - **`sessions`** - JWT token generation and validation
//! - **`handlers`** - HTTP handlers (login, verify, admin user management)
//!
//! # Authentication Flow
//!
//! 1. **Login**: username + password → bcrypt verification → JWT token
//! 2. **Every other request**: bearer token → claims → database principal
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage
//! - Tokens expire after a configurable number of days (default 7)
//! - Invalid credentials always produce the same 401 message, so usernames
//!   cannot be enumerated

/// User data model and database operations
pub mod users;

/// JWT token generation and validation
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::types::{LoginRequest, TokenResponse, UserResponse};
pub use users::User;
