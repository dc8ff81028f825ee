#![cfg(test)]
use configs::DatabaseConfig;
use models::db::{connect_with_config, ensure_schema};
use sea_orm::DatabaseConnection;

/// Fresh SQLite file with the schema applied; one per test so rows never leak between tests.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let path = std::env::temp_dir().join(format!("service-test-{}.db", uuid::Uuid::new_v4()));
    let cfg = DatabaseConfig {
        url: format!("sqlite://{}?mode=rwc", path.display()),
        ..DatabaseConfig::default()
    };
    let db = connect_with_config(&cfg).await?;
    ensure_schema(&db).await?;
    Ok(db)
}
