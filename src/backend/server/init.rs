/**
 * Server Initialization
 *
 * This module wires the server together at startup:
 *
 * 1. Connect the SQLite pool
 * 2. Run migrations (schema plus the slot-uniqueness indexes)
 * 3. Seed demo accounts and timetable into an empty database (optional)
 * 4. Assemble the router with shared state
 *
 * Seeding failures are logged and do not prevent startup; a missing demo
 * timetable is an inconvenience, not an outage.
 */
use axum::Router;
use sqlx::sqlite::SqlitePoolOptions;

use crate::backend::demo;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::ServerConfig;
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
///
/// # Arguments
/// * `config` - Server configuration (database URL, JWT secret, seeding)
///
/// # Returns
/// Configured Axum Router ready to serve requests, or the database error
/// that prevented startup.
pub async fn create_app(config: ServerConfig) -> Result<Router, sqlx::Error> {
    tracing::info!("Initializing SSMS backend server");

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await?;
    tracing::info!("Database connection pool created");

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await.map_err(|e| {
        tracing::error!("Failed to run database migrations: {:?}", e);
        sqlx::Error::Migrate(Box::new(e))
    })?;
    tracing::info!("Database migrations completed");

    if config.seed_demo_data {
        if let Err(e) = demo::seed_if_empty(&pool).await {
            tracing::warn!("Demo data seeding failed: {:?}", e);
        }
    }

    let app_state = AppState::new(pool, config);
    let app = create_router(app_state);
    tracing::info!("Router configured");

    Ok(app)
}
