/// Connection and schema initialisation tests
pub mod db_tests;


use configs::DatabaseConfig;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::db::{connect_with_config, ensure_schema};

/// Fresh SQLite file per test so tests never share rows.
pub(crate) fn scratch_config() -> DatabaseConfig {
    let path = std::env::temp_dir().join(format!("models-test-{}.db", Uuid::new_v4()));
    DatabaseConfig {
        url: format!("sqlite://{}?mode=rwc", path.display()),
        ..DatabaseConfig::default()
    }
}

pub(crate) async fn setup_test_db() -> anyhow::Result<DatabaseConnection> {
    let db = connect_with_config(&scratch_config()).await?;
    ensure_schema(&db).await?;
    Ok(db)
}
