/**
 * SSMS Server Entry Point
 *
 * Main entry point for the school schedule management server. Loads the
 * environment, initializes tracing, builds the app and serves it.
 */

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let config = ssms::backend::server::config::ServerConfig::from_env();
    let addr = format!("{}:{}", config.host, config.port);

    let app = ssms::backend::server::init::create_app(config).await?;

    tracing::info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
