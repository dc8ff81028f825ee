use std::time::Duration;

use configs::DatabaseConfig;
use migration::{MigratorTrait, SchemaManager};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use tracing::info;

use crate::company;

/// Open the sqlx pool behind SeaORM; each query checks a connection out and returns it when done.
pub async fn connect_with_config(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let mut opt = ConnectOptions::new(cfg.url.clone());
    opt.max_connections(cfg.max_connections)
        .min_connections(cfg.min_connections)
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(cfg.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(cfg.max_lifetime_secs))
        .sqlx_logging(cfg.sqlx_logging);
    let db = Database::connect(opt).await?;
    Ok(db)
}

/// Create the `companies` table unless it already exists. Safe to call on every start.
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let manager = SchemaManager::new(db);
    if manager.has_table(company::TABLE_NAME).await? {
        info!(table = company::TABLE_NAME, event = "schema_present", "table already exists");
        return Ok(());
    }
    migration::Migrator::up(db, None).await?;
    info!(table = company::TABLE_NAME, event = "schema_created", "table created");
    Ok(())
}
