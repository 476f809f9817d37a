//! Changelog Module
//!
//! The audit trail of schedule edits. Every substantive update to a
//! schedule entry produces exactly one immutable `ChangeLogEntry`; a no-op
//! update produces none. Records are written in the same transaction as the
//! update they describe, so the log never claims a change that was not
//! applied.
//!
//! - **`db`** - ChangeLogEntry model and storage operations
//! - **`audit`** - the pure diff that decides whether a record is due
//! - **`handlers`** - GET /api/changelogs with role-based scoping

/// ChangeLogEntry model and storage operations
pub mod db;

/// Field-level diffing of schedule updates
pub mod audit;

/// HTTP handlers for /api/changelogs
pub mod handlers;

pub use audit::diff_changes;
pub use db::ChangeLogEntry;
