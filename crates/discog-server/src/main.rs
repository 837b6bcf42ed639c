//! Binary entrypoint for the discog HTTP server.
//!
//! Configuration comes from environment variables; see
//! [`discog_server::config`].

use discog_server::config::ServerConfig;
use discog_server::router::build_router;
use discog_server::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env()?;
    let state = AppState::new(&config.db_path)?;
    let app = build_router(state);

    let addr = config.bind_addr();
    tracing::info!(db_path = %config.db_path, "discog server starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
