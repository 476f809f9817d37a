/**
 * Error Conversion
 *
 * Implements `IntoResponse` for `ApiError` so handlers can return it
 * directly. Errors become JSON bodies of the form:
 *
 * ```json
 * {
 *   "error": "Schedule not found",
 *   "status": 404
 * }
 * ```
 *
 * Database errors are logged here with their full detail and reported to
 * the client generically.
 */
use axum::{
    body::Body,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::backend::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Database(err) => tracing::error!("Database error: {:?}", err),
            ApiError::Internal { message } => tracing::error!("Internal error: {}", message),
            _ => {}
        }

        let status = self.status_code();
        let message = self.message();

        let body = serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        });

        Response::builder()
            .status(status)
            .header("Content-Type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap_or_else(|_| {
                format!(r#"{{"error":"{}","status":{}}}"#, message, status.as_u16())
            })))
            .unwrap_or_else(|_| {
                Response::builder()
                    .status(StatusCode::INTERNAL_SERVER_ERROR)
                    .body(Body::from("Internal Server Error"))
                    .unwrap()
            })
    }
}
