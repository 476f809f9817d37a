/**
 * Database Operations for Schedule Entries
 *
 * Storage operations for the timetable. Every function takes an executor,
 * so callers can run them against the pool or inside a transaction (the
 * update path runs its conflict re-check, audit write and field update in
 * one transaction).
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{SqliteExecutor, SqlitePool};

use crate::shared::Weekday;

/// One teaching assignment: a teacher, a class, a subject and a slot.
///
/// `day`, `period` and `teacher_id` are immutable after creation; only
/// `subject` and `class_name` can change, and every such change is audited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ScheduleEntry {
    /// Unique ID (UUID string), immutable
    pub id: String,
    /// Owning teacher's user ID
    pub teacher_id: String,
    /// Denormalized display copy of the teacher's name
    pub teacher_name: String,
    /// Weekday of the slot
    pub day: Weekday,
    /// Period of the slot (1-8)
    pub period: i64,
    /// Subject taught
    pub subject: String,
    /// Student group attending
    pub class_name: String,
    /// Set on creation and on every mutation
    pub updated_at: DateTime<Utc>,
}

/// Find an entry occupying a slot
///
/// Matches on `(day, period)` plus whichever of `class_name` / `teacher_id`
/// is given; `exclude_id` removes the entry being updated from the match.
/// This is the single read the conflict checker is built on.
pub async fn find_by_slot<'e, E: SqliteExecutor<'e>>(
    executor: E,
    day: Weekday,
    period: i64,
    class_name: Option<&str>,
    teacher_id: Option<&str>,
    exclude_id: Option<&str>,
) -> Result<Option<ScheduleEntry>, sqlx::Error> {
    sqlx::query_as::<_, ScheduleEntry>(
        r#"
        SELECT id, teacher_id, teacher_name, day, period, subject, class_name, updated_at
        FROM schedules
        WHERE day = ?1 AND period = ?2
          AND (?3 IS NULL OR class_name = ?3)
          AND (?4 IS NULL OR teacher_id = ?4)
          AND (?5 IS NULL OR id != ?5)
        LIMIT 1
        "#,
    )
    .bind(day)
    .bind(period)
    .bind(class_name)
    .bind(teacher_id)
    .bind(exclude_id)
    .fetch_optional(executor)
    .await
}

/// Get a schedule entry by ID
pub async fn get_schedule<'e, E: SqliteExecutor<'e>>(
    executor: E,
    id: &str,
) -> Result<Option<ScheduleEntry>, sqlx::Error> {
    sqlx::query_as::<_, ScheduleEntry>(
        r#"
        SELECT id, teacher_id, teacher_name, day, period, subject, class_name, updated_at
        FROM schedules
        WHERE id = ?1
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await
}

/// List schedule entries, optionally for one teacher
///
/// Ordered by weekday then period; days are stored as names, so the sort
/// needs an explicit weekday ranking.
pub async fn list_schedules(
    pool: &SqlitePool,
    teacher_id: Option<&str>,
) -> Result<Vec<ScheduleEntry>, sqlx::Error> {
    sqlx::query_as::<_, ScheduleEntry>(
        r#"
        SELECT id, teacher_id, teacher_name, day, period, subject, class_name, updated_at
        FROM schedules
        WHERE (?1 IS NULL OR teacher_id = ?1)
        ORDER BY
            CASE day
                WHEN 'Monday' THEN 1
                WHEN 'Tuesday' THEN 2
                WHEN 'Wednesday' THEN 3
                WHEN 'Thursday' THEN 4
                ELSE 5
            END,
            period
        "#,
    )
    .bind(teacher_id)
    .fetch_all(pool)
    .await
}

/// Insert a schedule entry
///
/// Fails with a unique violation if another entry already occupies the slot
/// for the same class or the same teacher (the uniqueness indexes); callers
/// translate that into a conflict.
pub async fn insert<'e, E: SqliteExecutor<'e>>(
    executor: E,
    entry: &ScheduleEntry,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO schedules (id, teacher_id, teacher_name, day, period, subject, class_name, updated_at)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
        "#,
    )
    .bind(&entry.id)
    .bind(&entry.teacher_id)
    .bind(&entry.teacher_name)
    .bind(entry.day)
    .bind(entry.period)
    .bind(&entry.subject)
    .bind(&entry.class_name)
    .bind(entry.updated_at)
    .execute(executor)
    .await?;

    Ok(())
}

/// Update the mutable fields of a schedule entry
///
/// Only `subject` and `class_name` are mutable; `updated_at` is bumped on
/// every call, including no-op updates.
///
/// # Returns
/// Number of updated rows (0 if the entry does not exist)
pub async fn update_fields<'e, E: SqliteExecutor<'e>>(
    executor: E,
    id: &str,
    subject: &str,
    class_name: &str,
    updated_at: DateTime<Utc>,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE schedules
        SET subject = ?1, class_name = ?2, updated_at = ?3
        WHERE id = ?4
        "#,
    )
    .bind(subject)
    .bind(class_name)
    .bind(updated_at)
    .bind(id)
    .execute(executor)
    .await?;

    Ok(result.rows_affected())
}

/// Delete a schedule entry
///
/// # Returns
/// Number of deleted rows (0 if the entry does not exist)
pub async fn delete_schedule<'e, E: SqliteExecutor<'e>>(
    executor: E,
    id: &str,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM schedules WHERE id = ?1")
        .bind(id)
        .execute(executor)
        .await?;

    Ok(result.rows_affected())
}

/// Delete all schedule entries (demo reset)
pub async fn delete_all_schedules<'e, E: SqliteExecutor<'e>>(
    executor: E,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM schedules").execute(executor).await?;
    Ok(result.rows_affected())
}
