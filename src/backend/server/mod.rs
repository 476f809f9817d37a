//! Server Module
//!
//! Server initialization, configuration and shared application state.
//!
//! - **`config`** - environment-driven `ServerConfig`
//! - **`state`** - `AppState` shared across handlers
//! - **`init`** - pool creation, migrations, seeding and router assembly

/// Environment-driven configuration
pub mod config;

/// Shared application state
pub mod state;

/// Server initialization
pub mod init;

pub use config::ServerConfig;
pub use init::create_app;
pub use state::AppState;
