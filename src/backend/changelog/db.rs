/**
 * Database Operations for Changelog Records
 *
 * Append and list operations for the audit trail. Records are append-only:
 * there is no update operation, and deletion only happens as part of the
 * bulk administrative reset.
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{SqliteExecutor, SqlitePool};

use crate::shared::Weekday;

/// Maximum number of records returned by a changelog listing.
pub const CHANGELOG_LIST_LIMIT: i64 = 100;

/// An immutable audit record of one update to a schedule entry.
///
/// The teacher/slot fields are copied from the schedule at the time of the
/// change, not re-fetched, so later edits (or deletion) of the schedule or
/// the teacher never rewrite history. `old_value` and `new_value` are
/// whole-record `"<subject> - <class_name>"` snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ChangeLogEntry {
    pub id: String,
    /// Back-reference to the schedule entry (not an ownership pointer)
    pub schedule_id: String,
    pub teacher_id: String,
    pub teacher_name: String,
    pub day: Weekday,
    pub period: i64,
    pub old_value: String,
    pub new_value: String,
    /// Display name of the acting administrator
    pub changed_by: String,
    pub timestamp: DateTime<Utc>,
}

/// Append a changelog record
pub async fn append_changelog<'e, E: SqliteExecutor<'e>>(
    executor: E,
    entry: &ChangeLogEntry,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO changelogs
            (id, schedule_id, teacher_id, teacher_name, day, period,
             old_value, new_value, changed_by, timestamp)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
        "#,
    )
    .bind(&entry.id)
    .bind(&entry.schedule_id)
    .bind(&entry.teacher_id)
    .bind(&entry.teacher_name)
    .bind(entry.day)
    .bind(entry.period)
    .bind(&entry.old_value)
    .bind(&entry.new_value)
    .bind(&entry.changed_by)
    .bind(entry.timestamp)
    .execute(executor)
    .await?;

    Ok(())
}

/// List changelog records, newest first, optionally for one teacher
pub async fn list_changelogs(
    pool: &SqlitePool,
    teacher_id: Option<&str>,
) -> Result<Vec<ChangeLogEntry>, sqlx::Error> {
    sqlx::query_as::<_, ChangeLogEntry>(
        r#"
        SELECT id, schedule_id, teacher_id, teacher_name, day, period,
               old_value, new_value, changed_by, timestamp
        FROM changelogs
        WHERE (?1 IS NULL OR teacher_id = ?1)
        ORDER BY timestamp DESC
        LIMIT ?2
        "#,
    )
    .bind(teacher_id)
    .bind(CHANGELOG_LIST_LIMIT)
    .fetch_all(pool)
    .await
}

/// Count changelog records, optionally for one teacher
pub async fn count_changelogs(
    pool: &SqlitePool,
    teacher_id: Option<&str>,
) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*) FROM changelogs
        WHERE (?1 IS NULL OR teacher_id = ?1)
        "#,
    )
    .bind(teacher_id)
    .fetch_one(pool)
    .await
}

/// Delete all changelog records (bulk administrative purge)
pub async fn delete_all_changelogs<'e, E: SqliteExecutor<'e>>(
    executor: E,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM changelogs").execute(executor).await?;
    Ok(result.rows_affected())
}
