//! One-off schema setup: tables, constraints, indexes, default resources.

use anyhow::Context;
use tracing::{Level, info};

use wellness_server::config::AppConfig;
use wellness_server::{database, seed};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let config = AppConfig::load().context("Failed to load config")?;
    let db = database::connect(&config.database)
        .await
        .context("Failed to connect to database")?;

    database::migrate(&db)
        .await
        .context("Failed to synchronize schema")?;
    seed::seed_resources(&db)
        .await
        .context("Failed to seed resources")?;

    info!("Migration complete");
    Ok(())
}
