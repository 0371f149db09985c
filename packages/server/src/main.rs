use std::net::SocketAddr;

use anyhow::Context;
use tracing::{Level, info};

use wellness_server::config::AppConfig;
use wellness_server::state::AppState;
use wellness_server::{build_router, database};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let config = AppConfig::load().context("Failed to load config")?;

    // Schema setup is a separate step: run `wellness-migrate` first.
    let db = database::connect(&config.database)
        .await
        .context("Failed to connect to database")?;
    info!("Database connected");

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("Invalid server.host / server.port")?;

    let state = AppState { db, config };
    let app = build_router(state).context("Invalid CORS configuration")?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server running at http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
