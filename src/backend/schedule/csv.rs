/**
 * CSV Export / Import
 *
 * Plain-text exchange format for schedule data. The column layout is
 * fixed:
 *
 *   teacher_id,teacher_name,day,period,subject,class_name
 *
 * Fields are written verbatim (no quoting); none of the domain values
 * contain commas. Import runs each row through the same validation and
 * conflict checks as POST /api/schedules and reports per-line errors
 * instead of aborting on the first bad row.
 */
use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde::Serialize;

use crate::backend::error::ApiError;
use crate::backend::middleware::auth::{require_admin, AuthUser};
use crate::backend::schedule::db::{self, ScheduleEntry};
use crate::backend::schedule::handlers::{
    insert_checked, scope_teacher_filter, validate_period, ScheduleQuery,
};
use crate::backend::server::state::AppState;
use crate::shared::Weekday;

pub const CSV_HEADER: &str = "teacher_id,teacher_name,day,period,subject,class_name";

/// Outcome of a CSV import
#[derive(Debug, Serialize, PartialEq)]
pub struct ImportReport {
    pub imported: usize,
    pub skipped: usize,
    pub errors: Vec<String>,
}

/// Format schedule entries as a CSV document, header row first.
pub fn format_csv(entries: &[ScheduleEntry]) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');
    for entry in entries {
        out.push_str(&format!(
            "{},{},{},{},{},{}\n",
            entry.teacher_id,
            entry.teacher_name,
            entry.day,
            entry.period,
            entry.subject,
            entry.class_name
        ));
    }
    out
}

/// Parse one data row into a schedule entry ready for insertion.
fn parse_row(line: &str) -> Result<ScheduleEntry, String> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != 6 {
        return Err(format!("expected 6 fields, got {}", fields.len()));
    }

    let day: Weekday = fields[2]
        .trim()
        .parse()
        .map_err(|_| format!("invalid day '{}'", fields[2].trim()))?;
    let period: i64 = fields[3]
        .trim()
        .parse()
        .map_err(|_| format!("invalid period '{}'", fields[3].trim()))?;
    validate_period(period).map_err(|e| e.to_string())?;

    let teacher_id = fields[0].trim();
    let teacher_name = fields[1].trim();
    let subject = fields[4].trim();
    let class_name = fields[5].trim();
    for (name, value) in [
        ("teacher_id", teacher_id),
        ("teacher_name", teacher_name),
        ("subject", subject),
        ("class_name", class_name),
    ] {
        if value.is_empty() {
            return Err(format!("{} cannot be empty", name));
        }
    }

    Ok(ScheduleEntry {
        id: uuid::Uuid::new_v4().to_string(),
        teacher_id: teacher_id.to_string(),
        teacher_name: teacher_name.to_string(),
        day,
        period,
        subject: subject.to_string(),
        class_name: class_name.to_string(),
        updated_at: Utc::now(),
    })
}

/// GET /api/schedules/export
///
/// Teachers export only their own rows; admins may pass `teacher_id` to
/// narrow the export.
pub async fn export_schedules(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    Query(query): Query<ScheduleQuery>,
) -> Result<Response, ApiError> {
    let teacher_filter = scope_teacher_filter(&principal, query.teacher_id);
    let schedules = db::list_schedules(&state.pool, teacher_filter.as_deref()).await?;
    let body = format_csv(&schedules);

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"schedules.csv\"",
            ),
        ],
        body,
    )
        .into_response())
}

/// POST /api/schedules/import (admin only)
///
/// Body is the raw CSV text. Rows that fail to parse, fail validation or
/// collide with existing schedules are skipped and reported by line number;
/// the remaining rows are imported.
pub async fn import_schedules(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    body: String,
) -> Result<Json<ImportReport>, ApiError> {
    require_admin(&principal)?;

    let mut report = ImportReport {
        imported: 0,
        skipped: 0,
        errors: Vec::new(),
    };

    let mut conn = state.pool.acquire().await?;

    for (index, line) in body.lines().enumerate() {
        let line_no = index + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed == CSV_HEADER {
            continue;
        }

        let entry = match parse_row(trimmed) {
            Ok(entry) => entry,
            Err(message) => {
                report.skipped += 1;
                report.errors.push(format!("line {}: {}", line_no, message));
                continue;
            }
        };

        match insert_checked(&mut conn, &entry).await {
            Ok(()) => report.imported += 1,
            Err(ApiError::Conflict { message, .. }) => {
                report.skipped += 1;
                report.errors.push(format!("line {}: {}", line_no, message));
            }
            Err(other) => return Err(other),
        }
    }

    tracing::info!(
        "CSV import finished: {} imported, {} skipped",
        report.imported,
        report.skipped
    );
    Ok(Json(report))
}
