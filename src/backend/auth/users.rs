/**
 * User Model and Database Operations
 *
 * This module handles user account data and its database operations.
 * Deleting a teacher cascades to their schedule entries; changelog records
 * are deliberately left in place (they are history, not ownership).
 */
use chrono::{DateTime, Utc};
use sqlx::{SqliteExecutor, SqlitePool};

use crate::shared::Role;

/// User account as stored in the database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID string)
    pub id: String,
    /// Username (unique)
    pub username: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// Display name
    pub name: String,
    /// Account role (admin or teacher)
    pub role: Role,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// Create a new user
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `username` - Unique login name
/// * `name` - Display name
/// * `role` - Account role
/// * `password_hash` - Already-hashed password
///
/// # Returns
/// Created user or error (unique violation if the username is taken)
pub async fn create_user(
    pool: &SqlitePool,
    username: &str,
    name: &str,
    role: Role,
    password_hash: &str,
) -> Result<User, sqlx::Error> {
    let user = User {
        id: uuid::Uuid::new_v4().to_string(),
        username: username.to_string(),
        password_hash: password_hash.to_string(),
        name: name.to_string(),
        role,
        created_at: Utc::now(),
    };

    sqlx::query(
        r#"
        INSERT INTO users (id, username, password_hash, name, role, created_at)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6)
        "#,
    )
    .bind(&user.id)
    .bind(&user.username)
    .bind(&user.password_hash)
    .bind(&user.name)
    .bind(user.role)
    .bind(user.created_at)
    .execute(pool)
    .await?;

    Ok(user)
}

/// Get user by username
pub async fn get_user_by_username(
    pool: &SqlitePool,
    username: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, password_hash, name, role, created_at
        FROM users
        WHERE username = ?1
        "#,
    )
    .bind(username)
    .fetch_optional(pool)
    .await
}

/// Get user by ID
pub async fn get_user_by_id<'e, E: SqliteExecutor<'e>>(
    executor: E,
    id: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, password_hash, name, role, created_at
        FROM users
        WHERE id = ?1
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await
}

/// List all users
pub async fn list_users(pool: &SqlitePool) -> Result<Vec<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, password_hash, name, role, created_at
        FROM users
        ORDER BY created_at ASC
        "#,
    )
    .fetch_all(pool)
    .await
}

/// Count all users (used to decide whether to seed demo data)
pub async fn count_users(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await
}

/// Delete a user and their schedule entries
///
/// Runs in one transaction. Changelog records referencing the teacher are
/// kept: audit history outlives the account.
///
/// # Returns
/// Number of deleted user rows (0 if the user did not exist)
pub async fn delete_user(pool: &SqlitePool, id: &str) -> Result<u64, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let deleted = sqlx::query("DELETE FROM users WHERE id = ?1")
        .bind(id)
        .execute(tx.as_mut())
        .await?
        .rows_affected();

    if deleted > 0 {
        sqlx::query("DELETE FROM schedules WHERE teacher_id = ?1")
            .bind(id)
            .execute(tx.as_mut())
            .await?;
    }

    tx.commit().await?;
    Ok(deleted)
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_pool() -> SqlitePool {
        let pool = sqlx::sqlite::SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        sqlx::migrate!().run(&pool).await.unwrap();
        pool
    }

    #[tokio::test]
    async fn test_create_and_fetch_user() {
        let pool = test_pool().await;
        let user = create_user(&pool, "t_jane", "Jane Doe", Role::Teacher, "hash")
            .await
            .unwrap();

        let by_username = get_user_by_username(&pool, "t_jane").await.unwrap().unwrap();
        assert_eq!(by_username.id, user.id);
        assert_eq!(by_username.role, Role::Teacher);

        let by_id = get_user_by_id(&pool, &user.id).await.unwrap().unwrap();
        assert_eq!(by_id.username, "t_jane");
    }

    #[tokio::test]
    async fn test_duplicate_username_rejected() {
        let pool = test_pool().await;
        create_user(&pool, "admin1", "Admin", Role::Admin, "hash")
            .await
            .unwrap();
        let err = create_user(&pool, "admin1", "Other", Role::Admin, "hash")
            .await
            .unwrap_err();
        let is_unique = err
            .as_database_error()
            .map(|e| e.is_unique_violation())
            .unwrap_or(false);
        assert!(is_unique);
    }

    #[tokio::test]
    async fn test_delete_user_cascades_schedules() {
        use crate::backend::schedule::db::{insert, list_schedules, ScheduleEntry};
        use crate::shared::Weekday;

        let pool = test_pool().await;
        let user = create_user(&pool, "t_gone", "Gone Teacher", Role::Teacher, "hash")
            .await
            .unwrap();

        let entry = ScheduleEntry {
            id: uuid::Uuid::new_v4().to_string(),
            teacher_id: user.id.clone(),
            teacher_name: user.name.clone(),
            day: Weekday::Monday,
            period: 1,
            subject: "Mathematics".to_string(),
            class_name: "Grade 10A".to_string(),
            updated_at: Utc::now(),
        };
        insert(&pool, &entry).await.unwrap();

        assert_eq!(delete_user(&pool, &user.id).await.unwrap(), 1);
        assert!(list_schedules(&pool, Some(&user.id)).await.unwrap().is_empty());
        assert_eq!(delete_user(&pool, &user.id).await.unwrap(), 0);
    }
}
