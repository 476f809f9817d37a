/**
 * Authentication Middleware
 *
 * Turns the `Authorization: Bearer <token>` header into a `Principal` that
 * handlers receive as a plain extractor argument. The extractor:
 *
 * 1. Extracts the JWT from the Authorization header
 * 2. Verifies signature and expiry against the configured secret
 * 3. Confirms the user still exists in the database
 *
 * Any failure produces 401. Role enforcement is separate: handlers that
 * mutate state call `require_admin` on the extracted principal.
 */
use axum::{extract::FromRequestParts, http::header::AUTHORIZATION, http::request::Parts};
use chrono::{DateTime, Utc};

use crate::backend::auth::sessions::verify_token;
use crate::backend::auth::users::get_user_by_id;
use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;
use crate::shared::Role;

/// The authenticated actor performing a request
#[derive(Clone, Debug)]
pub struct Principal {
    pub id: String,
    pub username: String,
    /// Display name, recorded as `changed_by` on audit records
    pub name: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

/// Axum extractor for the authenticated principal
///
/// Use as a handler parameter: `AuthUser(principal): AuthUser`.
#[derive(Clone, Debug)]
pub struct AuthUser(pub Principal);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| {
                tracing::warn!("Missing Authorization header");
                ApiError::unauthorized("Missing Authorization header")
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            tracing::warn!("Invalid Authorization header format");
            ApiError::unauthorized("Invalid Authorization header format")
        })?;

        let claims = verify_token(token, &state.config.jwt_secret).map_err(|e| {
            tracing::warn!("Invalid token: {:?}", e);
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    ApiError::unauthorized("Token expired")
                }
                _ => ApiError::unauthorized("Invalid token"),
            }
        })?;

        // The token may outlive the account; confirm the user still exists.
        let user = get_user_by_id(&state.pool, &claims.sub)
            .await?
            .ok_or_else(|| {
                tracing::warn!("Token references missing user: {}", claims.sub);
                ApiError::unauthorized("User not found")
            })?;

        Ok(AuthUser(Principal {
            id: user.id,
            username: user.username,
            name: user.name,
            role: user.role,
            created_at: user.created_at,
        }))
    }
}

/// Reject non-admin principals.
pub fn require_admin(principal: &Principal) -> Result<(), ApiError> {
    if principal.role.is_admin() {
        Ok(())
    } else {
        tracing::warn!("Admin access denied for: {}", principal.username);
        Err(ApiError::Forbidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn teacher_principal() -> Principal {
        Principal {
            id: "t-1".to_string(),
            username: "t_jane".to_string(),
            name: "Jane Doe".to_string(),
            role: Role::Teacher,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_require_admin_rejects_teacher() {
        let err = require_admin(&teacher_principal()).unwrap_err();
        assert!(matches!(err, ApiError::Forbidden));
    }

    #[test]
    fn test_require_admin_accepts_admin() {
        let principal = Principal {
            role: Role::Admin,
            ..teacher_principal()
        };
        assert!(require_admin(&principal).is_ok());
    }
}
