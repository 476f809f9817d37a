//! Shared fixtures for the integration tests.
//!
//! Tests run against an in-memory SQLite database with the real migrations
//! applied, and call handlers directly with extracted `State` / `AuthUser`
//! values instead of going through an HTTP client.

use chrono::Utc;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use ssms::backend::auth::users::{self, User};
use ssms::backend::middleware::auth::Principal;
use ssms::backend::schedule::db::{self, ScheduleEntry};
use ssms::backend::server::config::ServerConfig;
use ssms::backend::server::state::AppState;
use ssms::shared::{Role, Weekday};

/// Low bcrypt cost keeps the fixtures fast; production uses DEFAULT_COST.
pub const TEST_BCRYPT_COST: u32 = 4;

/// Fresh application state over an in-memory database.
///
/// A single connection keeps every query on the same in-memory database.
pub async fn test_state() -> AppState {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory database");
    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("migrations apply");
    AppState::new(pool, ServerConfig::default())
}

pub async fn create_admin(pool: &SqlitePool) -> User {
    let hash = bcrypt::hash("password123", TEST_BCRYPT_COST).unwrap();
    users::create_user(pool, "admin123", "Administrator", Role::Admin, &hash)
        .await
        .unwrap()
}

pub async fn create_teacher(pool: &SqlitePool, username: &str, name: &str) -> User {
    let hash = bcrypt::hash("pass123", TEST_BCRYPT_COST).unwrap();
    users::create_user(pool, username, name, Role::Teacher, &hash)
        .await
        .unwrap()
}

/// Build the request principal a successful token check would produce.
pub fn principal(user: &User) -> Principal {
    Principal {
        id: user.id.clone(),
        username: user.username.clone(),
        name: user.name.clone(),
        role: user.role,
        created_at: user.created_at,
    }
}

/// Insert a schedule entry directly, bypassing the conflict checker.
pub async fn seed_schedule(
    pool: &SqlitePool,
    teacher: &User,
    day: Weekday,
    period: i64,
    subject: &str,
    class_name: &str,
) -> ScheduleEntry {
    let entry = ScheduleEntry {
        id: uuid::Uuid::new_v4().to_string(),
        teacher_id: teacher.id.clone(),
        teacher_name: teacher.name.clone(),
        day,
        period,
        subject: subject.to_string(),
        class_name: class_name.to_string(),
        updated_at: Utc::now(),
    };
    db::insert(pool, &entry).await.unwrap();
    entry
}
