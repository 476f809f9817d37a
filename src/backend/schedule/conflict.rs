/**
 * Conflict Detection
 *
 * Gates every schedule-entry creation, and every update that changes the
 * occupied slot, against the two double-booking invariants:
 *
 * - a class attends at most one lesson per `(day, period)` slot
 * - a teacher gives at most one lesson per `(day, period)` slot
 *
 * Both checks run as pure reads in a deterministic order: the class check
 * first, then the teacher check, so the first violated invariant is the one
 * reported. Conflict messages name the blocking entry (teacher, subject,
 * class); a bare "conflict" is not acceptable to the people fixing a
 * timetable.
 *
 * These checks are advisory under concurrency: the uniqueness indexes on
 * the schedules table decide check-then-insert races, and the losing insert
 * is translated back into the same conflict shape by the handlers.
 */
use sqlx::SqliteConnection;

use crate::backend::error::ConflictKind;
use crate::backend::schedule::db::{find_by_slot, ScheduleEntry};
use crate::shared::Weekday;

/// A detected double-booking: which invariant broke and the entry that
/// already occupies the slot.
#[derive(Debug, Clone)]
pub struct SlotConflict {
    pub kind: ConflictKind,
    /// The existing entry blocking the mutation
    pub with: ScheduleEntry,
}

impl SlotConflict {
    /// Human-readable message naming the blocking resource.
    pub fn message(&self) -> String {
        match self.kind {
            ConflictKind::Class => format!(
                "Schedule conflict: {} already has {} with {} at this time",
                self.with.class_name, self.with.subject, self.with.teacher_name
            ),
            ConflictKind::Teacher => format!(
                "Schedule conflict: {} already teaches {} to {} at this time",
                self.with.teacher_name, self.with.subject, self.with.class_name
            ),
        }
    }
}

/// Check whether a candidate entry may be created
///
/// Pure read, no side effects. Returns the first conflict found (class
/// check before teacher check) or `None` if the slot is free on both
/// counts.
pub async fn check_create(
    conn: &mut SqliteConnection,
    candidate: &ScheduleEntry,
) -> Result<Option<SlotConflict>, sqlx::Error> {
    check_slot(
        conn,
        candidate.day,
        candidate.period,
        &candidate.class_name,
        &candidate.teacher_id,
        None,
    )
    .await
}

/// Check whether an update to an existing entry may be applied
///
/// Same two checks as `check_create`, but the entry being updated is
/// excluded from the match so it cannot conflict with itself. Callers only
/// invoke this when the class assignment actually changes; a subject-only
/// edit cannot violate either invariant.
pub async fn check_update(
    conn: &mut SqliteConnection,
    schedule_id: &str,
    day: Weekday,
    period: i64,
    class_name: &str,
    teacher_id: &str,
) -> Result<Option<SlotConflict>, sqlx::Error> {
    check_slot(conn, day, period, class_name, teacher_id, Some(schedule_id)).await
}

async fn check_slot(
    conn: &mut SqliteConnection,
    day: Weekday,
    period: i64,
    class_name: &str,
    teacher_id: &str,
    exclude_id: Option<&str>,
) -> Result<Option<SlotConflict>, sqlx::Error> {
    // Class check first: the reporting order is part of the contract.
    if let Some(existing) =
        find_by_slot(&mut *conn, day, period, Some(class_name), None, exclude_id).await?
    {
        return Ok(Some(SlotConflict {
            kind: ConflictKind::Class,
            with: existing,
        }));
    }

    if let Some(existing) =
        find_by_slot(&mut *conn, day, period, None, Some(teacher_id), exclude_id).await?
    {
        return Ok(Some(SlotConflict {
            kind: ConflictKind::Teacher,
            with: existing,
        }));
    }

    Ok(None)
}
