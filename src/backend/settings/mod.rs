/**
 * School Settings
 *
 * Single-row settings storage. The only setting today is the break
 * placement: whether the long break falls after period 3 or period 4.
 * Reads lazily install the default so GET always succeeds on a fresh
 * database.
 */
use axum::{extract::State, response::Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

use crate::backend::error::ApiError;
use crate::backend::middleware::auth::{require_admin, AuthUser};
use crate::backend::server::state::AppState;
use crate::shared::SharedError;

const SETTINGS_ROW_ID: &str = "break_settings";
const DEFAULT_BREAK_AFTER: i64 = 3;

/// Break placement settings
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct BreakSettings {
    pub id: String,
    pub break_after_period: i64,
    pub updated_at: DateTime<Utc>,
}

/// Request body for PUT /api/settings/break-period
#[derive(Debug, Deserialize)]
pub struct BreakSettingsUpdate {
    pub break_after_period: i64,
}

/// Fetch the settings row, creating the default if missing.
pub async fn get_or_create_settings(pool: &SqlitePool) -> Result<BreakSettings, sqlx::Error> {
    if let Some(settings) = sqlx::query_as::<_, BreakSettings>(
        "SELECT id, break_after_period, updated_at FROM settings WHERE id = ?1",
    )
    .bind(SETTINGS_ROW_ID)
    .fetch_optional(pool)
    .await?
    {
        return Ok(settings);
    }

    let settings = BreakSettings {
        id: SETTINGS_ROW_ID.to_string(),
        break_after_period: DEFAULT_BREAK_AFTER,
        updated_at: Utc::now(),
    };
    // Another connection may install the default first; the upsert makes
    // that harmless.
    sqlx::query(
        r#"
        INSERT INTO settings (id, break_after_period, updated_at)
        VALUES (?1, ?2, ?3)
        ON CONFLICT(id) DO NOTHING
        "#,
    )
    .bind(&settings.id)
    .bind(settings.break_after_period)
    .bind(settings.updated_at)
    .execute(pool)
    .await?;

    Ok(settings)
}

/// Persist a new break placement.
pub async fn save_break_period(
    pool: &SqlitePool,
    break_after_period: i64,
) -> Result<BreakSettings, sqlx::Error> {
    let settings = BreakSettings {
        id: SETTINGS_ROW_ID.to_string(),
        break_after_period,
        updated_at: Utc::now(),
    };
    sqlx::query(
        r#"
        INSERT INTO settings (id, break_after_period, updated_at)
        VALUES (?1, ?2, ?3)
        ON CONFLICT(id) DO UPDATE SET
            break_after_period = excluded.break_after_period,
            updated_at = excluded.updated_at
        "#,
    )
    .bind(&settings.id)
    .bind(settings.break_after_period)
    .bind(settings.updated_at)
    .execute(pool)
    .await?;

    Ok(settings)
}

/// GET /api/settings/break-period
pub async fn get_break_period(
    State(state): State<AppState>,
    AuthUser(_principal): AuthUser,
) -> Result<Json<BreakSettings>, ApiError> {
    let settings = get_or_create_settings(&state.pool).await?;
    Ok(Json(settings))
}

/// PUT /api/settings/break-period (admin only)
///
/// The timetable grid only supports a break after period 3 or 4.
pub async fn update_break_period(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    Json(request): Json<BreakSettingsUpdate>,
) -> Result<Json<BreakSettings>, ApiError> {
    require_admin(&principal)?;

    if request.break_after_period != 3 && request.break_after_period != 4 {
        return Err(SharedError::validation("break_after_period", "must be 3 or 4").into());
    }

    let settings = save_break_period(&state.pool, request.break_after_period).await?;
    tracing::info!("Break period moved to after period {}", settings.break_after_period);
    Ok(Json(settings))
}
