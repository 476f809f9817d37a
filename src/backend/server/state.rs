/**
 * Application State Management
 *
 * This module defines the application state shared across all request
 * handlers. The state holds the SQLite connection pool and the server
 * configuration; both are cheap to clone (the pool is internally
 * reference-counted, the config sits behind an `Arc`).
 *
 * # Thread Safety
 *
 * `AppState` is `Clone + Send + Sync` and is passed to the router via
 * `Router::with_state`. Handlers extract it with `State<AppState>`.
 */
use std::sync::Arc;

use sqlx::SqlitePool;

use crate::backend::server::config::ServerConfig;

/// Central state container for the application
#[derive(Clone)]
pub struct AppState {
    /// SQLite connection pool
    pub pool: SqlitePool,
    /// Server configuration (JWT secret, seeding flags, ...)
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Create application state from a pool and configuration.
    pub fn new(pool: SqlitePool, config: ServerConfig) -> Self {
        Self {
            pool,
            config: Arc::new(config),
        }
    }
}
