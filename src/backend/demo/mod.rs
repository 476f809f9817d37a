/**
 * Demo Data
 *
 * First-run seeding plus the admin reset endpoints. The generated
 * timetable is conflict-free by construction: for each day and slot the
 * four teachers pick classes at distinct offsets of an 8-class rotation,
 * so no class and no teacher is ever booked twice in the same slot. The
 * uniqueness indexes still backstop the generator; a rejected row is
 * logged and skipped rather than failing the seed.
 */
use axum::{extract::State, response::Json};
use bcrypt::DEFAULT_COST;
use chrono::Utc;
use sqlx::SqlitePool;

use crate::backend::auth::handlers::types::MessageResponse;
use crate::backend::auth::users::{count_users, create_user, User};
use crate::backend::changelog::db::delete_all_changelogs;
use crate::backend::error::ApiError;
use crate::backend::middleware::auth::{require_admin, AuthUser};
use crate::backend::schedule::db::{self, ScheduleEntry};
use crate::backend::server::state::AppState;
use crate::shared::{Role, Weekday};

const DEMO_CLASSES: [&str; 8] = [
    "Grade 9A", "Grade 9B", "Grade 10A", "Grade 10B", "Grade 11A", "Grade 11B", "Grade 12A",
    "Grade 12B",
];

/// Teaching periods used by the demo timetable; 3 is left free as the
/// default break slot.
const DEMO_PERIODS: [i64; 4] = [1, 2, 4, 5];

/// Demo teachers: login, display name, subject rotation.
const DEMO_TEACHERS: [(&str, &str, [&str; 4]); 4] = [
    ("t_alex", "Alex Johnson", ["Algebra", "Geometry", "Calculus", "Statistics"]),
    ("t_amy", "Amy Chen", ["Biology", "Chemistry", "Physics", "Earth Science"]),
    ("t_john", "John Smith", ["Literature", "Grammar", "Composition", "Poetry"]),
    ("t_sara", "Sara Williams", ["World History", "Civics", "Geography", "Economics"]),
];

/// Seed the demo accounts and timetable on an empty database.
///
/// A database with any existing users is left untouched.
pub async fn seed_if_empty(pool: &SqlitePool) -> Result<(), SeedError> {
    if count_users(pool).await? > 0 {
        return Ok(());
    }

    tracing::info!("Empty database, seeding demo users and schedules");

    let admin_hash = bcrypt::hash("password123", DEFAULT_COST)?;
    create_user(pool, "admin123", "Administrator", Role::Admin, &admin_hash).await?;

    let teacher_hash = bcrypt::hash("pass123", DEFAULT_COST)?;
    let mut teachers = Vec::with_capacity(DEMO_TEACHERS.len());
    for (username, name, _) in DEMO_TEACHERS {
        let user = create_user(pool, username, name, Role::Teacher, &teacher_hash).await?;
        teachers.push(user);
    }

    seed_demo_schedules(pool, &teachers).await?;
    Ok(())
}

/// Errors surfaced by seeding
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("password hashing error: {0}")]
    Hash(#[from] bcrypt::BcryptError),
}

/// Populate a full demo week for the given teacher accounts.
///
/// Teachers must be passed in `DEMO_TEACHERS` order so the subject
/// rotations line up with the display names.
pub async fn seed_demo_schedules(
    pool: &SqlitePool,
    teachers: &[User],
) -> Result<u64, sqlx::Error> {
    let mut inserted = 0u64;

    for (d, day) in Weekday::ALL.iter().enumerate() {
        for (slot, period) in DEMO_PERIODS.iter().enumerate() {
            for (i, teacher) in teachers.iter().enumerate() {
                let subjects = DEMO_TEACHERS[i % DEMO_TEACHERS.len()].2;
                let entry = ScheduleEntry {
                    id: uuid::Uuid::new_v4().to_string(),
                    teacher_id: teacher.id.clone(),
                    teacher_name: teacher.name.clone(),
                    day: *day,
                    period: *period,
                    subject: subjects[(d + slot) % subjects.len()].to_string(),
                    class_name: DEMO_CLASSES[(d + slot + 2 * i) % DEMO_CLASSES.len()].to_string(),
                    updated_at: Utc::now(),
                };

                match db::insert(pool, &entry).await {
                    Ok(()) => inserted += 1,
                    Err(e)
                        if e.as_database_error()
                            .map(|db_err| db_err.is_unique_violation())
                            .unwrap_or(false) =>
                    {
                        tracing::warn!(
                            "Skipping demo entry for {} {} period {}: slot taken",
                            entry.teacher_name,
                            entry.day,
                            entry.period
                        );
                    }
                    Err(e) => return Err(e),
                }
            }
        }
    }

    tracing::info!("Seeded {} demo schedule entries", inserted);
    Ok(inserted)
}

/// POST /api/demo/load-schedules (admin only)
///
/// Wipes all schedules and changelogs, then rebuilds the demo timetable
/// for the current teacher accounts.
pub async fn load_demo_schedules(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
) -> Result<Json<MessageResponse>, ApiError> {
    require_admin(&principal)?;

    db::delete_all_schedules(&state.pool).await?;
    delete_all_changelogs(&state.pool).await?;

    let teachers = demo_teacher_accounts(&state.pool).await?;
    let inserted = seed_demo_schedules(&state.pool, &teachers).await?;

    Ok(Json(MessageResponse {
        message: format!("Demo schedules loaded: {} entries", inserted),
    }))
}

/// POST /api/demo/clear-schedules (admin only)
pub async fn clear_schedules(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
) -> Result<Json<MessageResponse>, ApiError> {
    require_admin(&principal)?;

    let deleted = db::delete_all_schedules(&state.pool).await?;
    delete_all_changelogs(&state.pool).await?;

    Ok(Json(MessageResponse {
        message: format!("All schedules cleared: {} entries removed", deleted),
    }))
}

/// Look up the demo teacher accounts in rotation order, skipping any the
/// admin has since deleted.
async fn demo_teacher_accounts(pool: &SqlitePool) -> Result<Vec<User>, sqlx::Error> {
    let mut teachers = Vec::new();
    for (username, _, _) in DEMO_TEACHERS {
        if let Some(user) =
            crate::backend::auth::users::get_user_by_username(pool, username).await?
        {
            teachers.push(user);
        }
    }
    Ok(teachers)
}
