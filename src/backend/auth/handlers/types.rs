/**
 * Authentication Handler Types
 *
 * Request and response types shared by the login, verify and user
 * management handlers.
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::backend::auth::users::User;
use crate::shared::Role;

/// Login request
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response: token plus the authenticated user
#[derive(Serialize, Debug)]
pub struct TokenResponse {
    pub token: String,
    pub user: UserResponse,
}

/// User info safe to return to clients (no password hash)
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub name: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            username: user.username.clone(),
            name: user.name.clone(),
            role: user.role,
            created_at: user.created_at,
        }
    }
}

/// Token verification response
#[derive(Serialize, Debug)]
pub struct VerifyResponse {
    pub valid: bool,
    pub user: UserResponse,
}

/// Admin request to create a user account
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct CreateUserRequest {
    pub username: String,
    pub password: String,
    pub name: String,
    #[serde(default = "default_role")]
    pub role: Role,
}

fn default_role() -> Role {
    Role::Teacher
}

/// Generic acknowledgement body
#[derive(Serialize, Deserialize, Debug)]
pub struct MessageResponse {
    pub message: String,
}
