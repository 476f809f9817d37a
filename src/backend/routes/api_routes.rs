/**
 * API Route Registration
 *
 * Wires every /api endpoint to its handler. Authorization happens inside
 * the handlers: every route except login extracts an `AuthUser`, and the
 * admin-only handlers call `require_admin` before doing anything.
 *
 * # Route Matching
 *
 * `/api/schedules/export` and `/api/schedules/import` are registered
 * alongside the parameterized `/api/schedules/{schedule_id}` routes; Axum
 * prefers the literal segment, so "export" is never captured as an id.
 */
use axum::Router;

use crate::backend::auth::handlers::{login, manage, verify};
use crate::backend::changelog::handlers::get_changelogs;
use crate::backend::demo::{clear_schedules, load_demo_schedules};
use crate::backend::schedule::csv::{export_schedules, import_schedules};
use crate::backend::schedule::handlers::{
    create_schedule, delete_schedule, get_schedules, update_schedule,
};
use crate::backend::server::state::AppState;
use crate::backend::settings::{get_break_period, update_break_period};

/// Configure API routes
///
/// # Arguments
///
/// * `router` - The router to add routes to
///
/// # Returns
///
/// Router with all /api routes configured
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        // Authentication endpoints
        .route("/api/auth/login", axum::routing::post(login::login))
        .route("/api/auth/verify", axum::routing::get(verify::verify))
        // User management
        .route(
            "/api/users",
            axum::routing::get(manage::list_users).post(manage::create_user),
        )
        .route(
            "/api/users/{user_id}",
            axum::routing::delete(manage::delete_user),
        )
        // Schedules
        .route(
            "/api/schedules",
            axum::routing::get(get_schedules).post(create_schedule),
        )
        .route("/api/schedules/export", axum::routing::get(export_schedules))
        .route("/api/schedules/import", axum::routing::post(import_schedules))
        .route(
            "/api/schedules/{schedule_id}",
            axum::routing::put(update_schedule).delete(delete_schedule),
        )
        // Settings
        .route(
            "/api/settings/break-period",
            axum::routing::get(get_break_period).put(update_break_period),
        )
        // Audit history
        .route("/api/changelogs", axum::routing::get(get_changelogs))
        // Demo data management
        .route(
            "/api/demo/load-schedules",
            axum::routing::post(load_demo_schedules),
        )
        .route(
            "/api/demo/clear-schedules",
            axum::routing::post(clear_schedules),
        )
}
