/**
 * Token Verification Handler
 *
 * Implements GET /api/auth/verify. The `AuthUser` extractor does the actual
 * work (token validation plus a database existence check); this handler only
 * echoes the resulting principal back to the client.
 */
use axum::response::Json;

use crate::backend::auth::handlers::types::{UserResponse, VerifyResponse};
use crate::backend::middleware::auth::AuthUser;

/// Token verification handler
pub async fn verify(AuthUser(principal): AuthUser) -> Json<VerifyResponse> {
    Json(VerifyResponse {
        valid: true,
        user: UserResponse {
            id: principal.id,
            username: principal.username,
            name: principal.name,
            role: principal.role,
            created_at: principal.created_at,
        },
    })
}
