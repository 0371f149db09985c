use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use tracing::info;

use crate::config::DatabaseConfig;
use crate::seed;

/// Open the connection pool. Never touches the schema.
pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(config.url.to_owned());

    opt.max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
        .sqlx_logging(true);

    Database::connect(opt).await
}

/// Create missing tables, constraints and secondary indexes.
///
/// Safe to run repeatedly. Run once per deployment, before the server starts;
/// request handling never calls this.
pub async fn migrate(db: &DatabaseConnection) -> Result<(), DbErr> {
    db.get_schema_registry("wellness_server::entity::*")
        .sync(db)
        .await?;
    info!("Schema synchronized");

    seed::ensure_indexes(db).await
}
