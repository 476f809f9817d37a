/**
 * User Management Handlers
 *
 * Admin-only handlers for /api/users: listing accounts, creating teacher or
 * admin accounts, and deleting accounts. Deleting a teacher also removes
 * their schedule entries; their changelog history is kept.
 */
use axum::{
    extract::{Path, State},
    response::Json,
};

use crate::backend::auth::handlers::types::{CreateUserRequest, MessageResponse, UserResponse};
use crate::backend::auth::users;
use crate::backend::error::ApiError;
use crate::backend::middleware::auth::{require_admin, AuthUser};
use crate::backend::server::state::AppState;
use crate::shared::SharedError;

/// List all users (admin only)
pub async fn list_users(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    require_admin(&principal)?;

    let accounts = users::list_users(&state.pool).await?;
    Ok(Json(accounts.iter().map(UserResponse::from).collect()))
}

/// Create a user account (admin only)
pub async fn create_user(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    Json(request): Json<CreateUserRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    require_admin(&principal)?;

    if request.username.trim().is_empty() {
        return Err(SharedError::validation("username", "Username cannot be empty").into());
    }
    if request.password.is_empty() {
        return Err(SharedError::validation("password", "Password cannot be empty").into());
    }
    if request.name.trim().is_empty() {
        return Err(SharedError::validation("name", "Name cannot be empty").into());
    }

    if users::get_user_by_username(&state.pool, &request.username)
        .await?
        .is_some()
    {
        return Err(SharedError::validation("username", "Username already exists").into());
    }

    let password_hash = bcrypt::hash(&request.password, bcrypt::DEFAULT_COST)
        .map_err(|e| ApiError::internal(format!("Failed to hash password: {}", e)))?;

    let user = users::create_user(
        &state.pool,
        &request.username,
        &request.name,
        request.role,
        &password_hash,
    )
    .await?;

    tracing::info!("User created: {} ({})", user.username, user.role);
    Ok(Json(UserResponse::from(&user)))
}

/// Delete a user account (admin only)
pub async fn delete_user(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    Path(user_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    require_admin(&principal)?;

    let deleted = users::delete_user(&state.pool, &user_id).await?;
    if deleted == 0 {
        return Err(ApiError::not_found("User"));
    }

    tracing::info!("User deleted: {}", user_id);
    Ok(Json(MessageResponse {
        message: "User deleted successfully".to_string(),
    }))
}
