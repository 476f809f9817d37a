/**
 * Server Configuration
 *
 * This module collects every environment-driven setting into one explicit
 * `ServerConfig` struct. Nothing else in the crate reads the environment:
 * the config is built once at startup and injected through `AppState`, so
 * the token functions and handlers stay deterministic and testable.
 *
 * # Configuration Sources
 *
 * Values come from environment variables (a `.env` file is loaded by the
 * binary before this runs), with development defaults where a default is
 * safe. The JWT secret has a development fallback that is loudly logged.
 */

/// Fallback secret for local development only.
const DEV_JWT_SECRET: &str = "your-secret-key-change-in-production";

/// Application settings loaded from environment variables
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// SQLite database URL (`DATABASE_URL`)
    pub database_url: String,
    /// HS256 signing secret (`JWT_SECRET_KEY`)
    pub jwt_secret: String,
    /// Token lifetime in days (`JWT_EXPIRATION_DAYS`)
    pub jwt_expiration_days: i64,
    /// Comma-separated allowed CORS origins, `*` for any (`CORS_ORIGINS`)
    pub cors_origins: String,
    /// Bind address (`HOST`)
    pub host: String,
    /// Bind port (`PORT`)
    pub port: u16,
    /// Seed demo users and timetable into an empty database (`SEED_DEMO_DATA`)
    pub seed_demo_data: bool,
}

impl ServerConfig {
    /// Load configuration from the environment.
    pub fn from_env() -> Self {
        let jwt_secret = match std::env::var("JWT_SECRET_KEY") {
            Ok(secret) => secret,
            Err(_) => {
                tracing::warn!("JWT_SECRET_KEY not set, using development fallback");
                DEV_JWT_SECRET.to_string()
            }
        };

        Self {
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://ssms.db?mode=rwc".to_string()),
            jwt_secret,
            jwt_expiration_days: std::env::var("JWT_EXPIRATION_DAYS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(7),
            cors_origins: std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".to_string()),
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8000),
            seed_demo_data: std::env::var("SEED_DEMO_DATA")
                .map(|v| v != "0" && !v.eq_ignore_ascii_case("false"))
                .unwrap_or(true),
        }
    }

    /// Parse the configured CORS origins into a list.
    pub fn cors_origins_list(&self) -> Vec<String> {
        self.cors_origins
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect()
    }
}

impl Default for ServerConfig {
    /// Defaults suitable for tests: in-memory settings, development secret.
    fn default() -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            jwt_secret: DEV_JWT_SECRET.to_string(),
            jwt_expiration_days: 7,
            cors_origins: "*".to_string(),
            host: "127.0.0.1".to_string(),
            port: 0,
            seed_demo_data: false,
        }
    }
}
