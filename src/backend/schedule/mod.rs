//! Schedule Module
//!
//! Everything about the weekly timetable: the `ScheduleEntry` model and its
//! storage operations, the conflict checker that gates every mutation, the
//! HTTP handlers, and the thin CSV import/export wrappers.
//!
//! # Conflict Rules
//!
//! A slot is a `(day, period)` pair; periods are discrete integer slots
//! (1-8), never overlapping ranges. Two invariants hold at all times:
//!
//! 1. At most one entry per `(day, period, class_name)` - a class cannot
//!    attend two lessons at once.
//! 2. At most one entry per `(day, period, teacher_id)` - a teacher cannot
//!    give two lessons at once.
//!
//! The checker runs both queries on every create (class first, then
//! teacher, the order conflict messages are reported in) and on every
//! update that changes the class assignment, excluding the updated entry
//! itself from the match. UNIQUE indexes back the same invariants in the
//! database, so a lost check-then-insert race surfaces as a conflict, never
//! as corrupt data.

/// ScheduleEntry model and storage operations
pub mod db;

/// Conflict detection for schedule mutations
pub mod conflict;

/// HTTP handlers for /api/schedules
pub mod handlers;

/// CSV export/import wrappers
pub mod csv;

pub use conflict::{check_create, check_update, SlotConflict};
pub use db::ScheduleEntry;
