//! Backend Module
//!
//! All server-side code for the schedule management application: an Axum
//! HTTP server over embedded SQLite, with JWT authentication, conflict
//! detection for timetable mutations, and change auditing.
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Authentication, JWT tokens, user management
//! - **`middleware`** - Bearer-token extraction into a request principal
//! - **`schedule`** - Schedule storage, conflict checking, CSV import/export
//! - **`changelog`** - Audit records and the change auditor
//! - **`settings`** - Break-period settings
//! - **`demo`** - Demo data seeding and admin reset endpoints
//! - **`error`** - Backend error types
//!
//! # Mutation Flow
//!
//! Every schedule mutation follows the same sequence: the request principal
//! is authorized, the payload validated, the conflict checker consulted
//! (creation always; updates only when the class assignment changes), the
//! change auditor run (updates only), and only then is the entry persisted.
//! Updates wrap the audit write and the field update in one transaction, so
//! an audit record can never describe a change that was not applied.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Schedule storage, conflict detection and CSV import/export
pub mod schedule;

/// Changelog storage and change auditing
pub mod changelog;

/// Break-period settings
pub mod settings;

/// Demo data seeding
pub mod demo;

/// Re-export commonly used types
pub use error::{ApiError, ConflictKind};
pub use server::{create_app, AppState, ServerConfig};
