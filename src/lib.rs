//! SSMS - School Schedule Management Server
//!
//! SSMS is a scheduling backend for schools: it authenticates administrators
//! and teachers, stores weekly class timetables, refuses double-booked slots,
//! and keeps an immutable audit trail of every schedule edit.
//!
//! # Overview
//!
//! The library provides:
//! - JWT-authenticated REST API (Axum) for schedules, users and settings
//! - Conflict detection for class and teacher double-booking
//! - Change auditing: every substantive schedule edit produces exactly one
//!   changelog record, visible to the owning teacher and to administrators
//! - Bulk CSV export/import of the timetable
//! - Embedded SQLite persistence via sqlx with migration support
//!
//! # Module Structure
//!
//! The library is organized into two main modules:
//!
//! - **`shared`** - Types used across backend modules
//!   - Weekday and role enumerations
//!   - Validation error types
//!
//! - **`backend`** - Server-side code
//!   - Axum HTTP server setup, routing and middleware
//!   - Schedule storage, conflict checking and CSV import/export
//!   - Changelog storage and the change auditor
//!   - Authentication, user management and break-period settings
//!
//! # Error Handling
//!
//! The library uses Rust's standard error handling:
//!
//! - `Result<T, E>` for fallible operations
//! - `ApiError` in `backend::error` for everything that crosses the HTTP
//!   boundary (conflict, not-found, validation, authorization, storage)

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
