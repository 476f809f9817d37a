/**
 * Router Configuration
 *
 * Builds the complete Axum router: API routes, CORS layer derived from the
 * server configuration, and a JSON 404 fallback.
 *
 * # CORS
 *
 * A configured origin list of `*` allows any origin (development default);
 * otherwise only the listed origins are allowed. Methods and headers are
 * open in both modes since authorization is token-based, not cookie-based.
 */
use axum::http::{HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Json};
use axum::Router;
use tower_http::cors::{Any, AllowOrigin, CorsLayer};

use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state containing the database pool and config
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router<()> {
    let cors = build_cors_layer(&app_state.config.cors_origins_list());

    let router = configure_api_routes(Router::new());

    router
        .fallback(not_found)
        .layer(cors)
        .with_state(app_state)
}

/// Build the CORS layer from the configured origin list.
fn build_cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any);

    if origins.iter().any(|o| o == "*") {
        layer.allow_origin(Any)
    } else {
        let parsed: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| match origin.parse::<HeaderValue>() {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!("Ignoring unparseable CORS origin: {}", origin);
                    None
                }
            })
            .collect();
        layer.allow_origin(AllowOrigin::list(parsed))
    }
}

/// JSON 404 for unmatched routes
async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({
            "error": "Not found",
            "status": 404,
        })),
    )
}
