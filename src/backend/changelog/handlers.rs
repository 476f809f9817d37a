/**
 * Changelog Handlers
 *
 * GET /api/changelogs with role-based scoping: teacher-role callers only
 * ever see their own records, whatever query parameters they supply;
 * administrators may filter by any teacher or see everything.
 */
use axum::{
    extract::{Query, State},
    response::Json,
};
use serde::Deserialize;

use crate::backend::changelog::db::{list_changelogs, ChangeLogEntry};
use crate::backend::error::ApiError;
use crate::backend::middleware::auth::AuthUser;
use crate::backend::server::state::AppState;

/// Query parameters for the changelog listing
#[derive(Debug, Deserialize, Default)]
pub struct ChangelogQuery {
    pub teacher_id: Option<String>,
}

/// List changelog records, newest first
///
/// Teachers are forced to their own `teacher_id` regardless of the query
/// string; the parameter only has effect for administrators.
pub async fn get_changelogs(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    Query(query): Query<ChangelogQuery>,
) -> Result<Json<Vec<ChangeLogEntry>>, ApiError> {
    let teacher_filter = if principal.role.is_admin() {
        query.teacher_id
    } else {
        Some(principal.id)
    };

    let logs = list_changelogs(&state.pool, teacher_filter.as_deref()).await?;
    Ok(Json(logs))
}
