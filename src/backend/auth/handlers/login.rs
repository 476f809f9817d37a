/**
 * Login Handler
 *
 * Implements POST /api/auth/login.
 *
 * # Authentication Process
 *
 * 1. Look up the user by username
 * 2. Verify the password with bcrypt
 * 3. Issue a JWT token
 * 4. Return token and user info
 *
 * # Security
 *
 * Unknown usernames, wrong passwords and malformed stored hashes all
 * produce the same 401 "Invalid username or password" response, so the
 * endpoint leaks nothing about which accounts exist.
 */
use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::{LoginRequest, TokenResponse, UserResponse};
use crate::backend::auth::sessions::create_token;
use crate::backend::auth::users::get_user_by_username;
use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;

const INVALID_CREDENTIALS: &str = "Invalid username or password";

/// Login handler
///
/// # Errors
///
/// * `401 Unauthorized` - unknown user or wrong password
/// * `500 Internal Server Error` - database or token generation failure
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    tracing::info!("Login request for: {}", request.username);

    let user = get_user_by_username(&state.pool, &request.username)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Login failed, user not found: {}", request.username);
            ApiError::unauthorized(INVALID_CREDENTIALS)
        })?;

    let valid = bcrypt::verify(&request.password, &user.password_hash).map_err(|e| {
        tracing::error!("Password verification error: {:?}", e);
        ApiError::unauthorized(INVALID_CREDENTIALS)
    })?;

    if !valid {
        tracing::warn!("Login failed, wrong password for: {}", request.username);
        return Err(ApiError::unauthorized(INVALID_CREDENTIALS));
    }

    let token = create_token(&user, &state.config.jwt_secret, state.config.jwt_expiration_days)
        .map_err(|e| ApiError::internal(format!("Failed to create token: {}", e)))?;

    tracing::info!("User logged in: {} ({})", user.username, user.role);

    Ok(Json(TokenResponse {
        token,
        user: UserResponse::from(&user),
    }))
}
