/**
 * Schedule Handlers
 *
 * HTTP handlers for /api/schedules. All mutations are admin-only and follow
 * the same sequence: authorize, validate, conflict-check, audit (updates
 * only), persist.
 *
 * # Update Atomicity
 *
 * `update_schedule` wraps the read, the conflict re-check, the audit write
 * and the field update in one transaction. A failure at any point rolls
 * everything back, so the changelog can never describe a change that was
 * not applied.
 *
 * # Race Handling
 *
 * The conflict check before an insert is advisory; the uniqueness indexes
 * decide concurrent races. When an insert loses such a race the unique
 * violation is translated back into the same specific conflict message the
 * check would have produced.
 */
use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::SqliteConnection;

use crate::backend::auth::handlers::types::MessageResponse;
use crate::backend::changelog::audit::diff_changes;
use crate::backend::changelog::db::append_changelog;
use crate::backend::error::ApiError;
use crate::backend::middleware::auth::{require_admin, AuthUser, Principal};
use crate::backend::schedule::conflict::{check_create, check_update};
use crate::backend::schedule::db::{self, ScheduleEntry};
use crate::backend::server::state::AppState;
use crate::shared::{SharedError, Weekday};

/// Valid period range (inclusive)
pub const MIN_PERIOD: i64 = 1;
pub const MAX_PERIOD: i64 = 8;

/// Request body for POST /api/schedules
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleCreate {
    pub teacher_id: String,
    pub teacher_name: String,
    pub day: Weekday,
    pub period: i64,
    pub subject: String,
    pub class_name: String,
}

/// Request body for PUT /api/schedules/{id}
///
/// Absent fields mean "no change requested", not "clear this field".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScheduleUpdate {
    pub subject: Option<String>,
    pub class_name: Option<String>,
}

/// Query parameters for GET /api/schedules
#[derive(Debug, Deserialize, Default)]
pub struct ScheduleQuery {
    pub teacher_id: Option<String>,
}

/// Validate the bounded fields of a schedule payload.
pub fn validate_period(period: i64) -> Result<(), SharedError> {
    if !(MIN_PERIOD..=MAX_PERIOD).contains(&period) {
        return Err(SharedError::validation(
            "period",
            format!("must be between {} and {}", MIN_PERIOD, MAX_PERIOD),
        ));
    }
    Ok(())
}

fn validate_non_empty(field: &'static str, value: &str) -> Result<(), SharedError> {
    if value.trim().is_empty() {
        return Err(SharedError::validation(field, "cannot be empty"));
    }
    Ok(())
}

/// List schedule entries
///
/// Teachers are forced to their own `teacher_id` regardless of the query
/// string; the parameter only has effect for administrators.
pub async fn get_schedules(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    Query(query): Query<ScheduleQuery>,
) -> Result<Json<Vec<ScheduleEntry>>, ApiError> {
    let teacher_filter = scope_teacher_filter(&principal, query.teacher_id);
    let schedules = db::list_schedules(&state.pool, teacher_filter.as_deref()).await?;
    Ok(Json(schedules))
}

/// Role-based scoping shared by listings and CSV export.
pub(crate) fn scope_teacher_filter(
    principal: &Principal,
    requested: Option<String>,
) -> Option<String> {
    if principal.role.is_admin() {
        requested
    } else {
        Some(principal.id.clone())
    }
}

/// Create a schedule entry (admin only)
pub async fn create_schedule(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    Json(request): Json<ScheduleCreate>,
) -> Result<Json<ScheduleEntry>, ApiError> {
    require_admin(&principal)?;

    validate_period(request.period)?;
    validate_non_empty("subject", &request.subject)?;
    validate_non_empty("class_name", &request.class_name)?;
    validate_non_empty("teacher_id", &request.teacher_id)?;
    validate_non_empty("teacher_name", &request.teacher_name)?;

    let entry = ScheduleEntry {
        id: uuid::Uuid::new_v4().to_string(),
        teacher_id: request.teacher_id,
        teacher_name: request.teacher_name,
        day: request.day,
        period: request.period,
        subject: request.subject,
        class_name: request.class_name,
        updated_at: Utc::now(),
    };

    let mut conn = state.pool.acquire().await?;
    insert_checked(&mut conn, &entry).await?;

    tracing::info!(
        "Schedule created: {} {} period {} for {} ({})",
        entry.teacher_name,
        entry.day,
        entry.period,
        entry.class_name,
        entry.id
    );
    Ok(Json(entry))
}

/// Conflict-check then insert, translating a lost race into a conflict.
pub(crate) async fn insert_checked(
    conn: &mut SqliteConnection,
    entry: &ScheduleEntry,
) -> Result<(), ApiError> {
    if let Some(conflict) = check_create(conn, entry).await? {
        return Err(ApiError::conflict(conflict.kind, conflict.message()));
    }

    match db::insert(&mut *conn, entry).await {
        Ok(()) => Ok(()),
        Err(e)
            if e.as_database_error()
                .map(|db_err| db_err.is_unique_violation())
                .unwrap_or(false) =>
        {
            // Lost a check-then-insert race; re-run the check to name the
            // winner in the conflict message.
            match check_create(conn, entry).await? {
                Some(conflict) => Err(ApiError::conflict(conflict.kind, conflict.message())),
                None => Err(ApiError::Database(e)),
            }
        }
        Err(e) => Err(ApiError::Database(e)),
    }
}

/// Update a schedule entry (admin only)
///
/// Only `subject` and `class_name` are mutable. The conflict re-check runs
/// only when the class assignment actually changes, excluding this entry
/// itself from the match; a changelog record is written iff something
/// changed. Check, audit and update share one transaction.
pub async fn update_schedule(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    Path(schedule_id): Path<String>,
    Json(request): Json<ScheduleUpdate>,
) -> Result<Json<ScheduleEntry>, ApiError> {
    require_admin(&principal)?;

    if let Some(subject) = request.subject.as_deref() {
        validate_non_empty("subject", subject)?;
    }
    if let Some(class_name) = request.class_name.as_deref() {
        validate_non_empty("class_name", class_name)?;
    }

    let mut tx = state.pool.begin().await?;

    let existing = db::get_schedule(tx.as_mut(), &schedule_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Schedule"))?;

    // Only a real class change can violate an invariant; subject edits and
    // identical resubmissions skip the re-check.
    let class_change = request
        .class_name
        .as_deref()
        .filter(|c| *c != existing.class_name);

    if let Some(new_class) = class_change {
        if let Some(conflict) = check_update(
            tx.as_mut(),
            &existing.id,
            existing.day,
            existing.period,
            new_class,
            &existing.teacher_id,
        )
        .await?
        {
            return Err(ApiError::conflict(conflict.kind, conflict.message()));
        }
    }

    // Audit before update, same transaction: the record describes exactly
    // the mutation committed below, or neither happens.
    if let Some(record) = diff_changes(
        &existing,
        request.subject.as_deref(),
        request.class_name.as_deref(),
        &principal.name,
    ) {
        append_changelog(tx.as_mut(), &record).await?;
    }

    let final_subject = request.subject.unwrap_or_else(|| existing.subject.clone());
    let final_class_name = request
        .class_name
        .unwrap_or_else(|| existing.class_name.clone());
    let now = Utc::now();

    let rows = db::update_fields(tx.as_mut(), &existing.id, &final_subject, &final_class_name, now)
        .await?;
    if rows == 0 {
        return Err(ApiError::not_found("Schedule"));
    }

    tx.commit().await?;

    Ok(Json(ScheduleEntry {
        subject: final_subject,
        class_name: final_class_name,
        updated_at: now,
        ..existing
    }))
}

/// Delete a schedule entry (admin only)
///
/// Deletion can only reduce occupancy, so there is no conflict re-check.
/// Changelog records referencing the entry are kept.
pub async fn delete_schedule(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    Path(schedule_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    require_admin(&principal)?;

    let deleted = db::delete_schedule(&state.pool, &schedule_id).await?;
    if deleted == 0 {
        return Err(ApiError::not_found("Schedule"));
    }

    tracing::info!("Schedule deleted: {}", schedule_id);
    Ok(Json(MessageResponse {
        message: "Schedule deleted successfully".to_string(),
    }))
}
