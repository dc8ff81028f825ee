use migration::SchemaManager;
use sea_orm::{ConnectionTrait, EntityTrait, PaginatorTrait};
use anyhow::Result;

use super::{scratch_config, setup_test_db};
use crate::company;
use crate::db::{connect_with_config, ensure_schema};

#[tokio::test]
async fn test_connect_and_ping() -> Result<()> {
    let db = connect_with_config(&scratch_config()).await?;
    db.ping().await?;
    Ok(())
}

#[tokio::test]
async fn test_ensure_schema_creates_table() -> Result<()> {
    let db = connect_with_config(&scratch_config()).await?;
    let manager = SchemaManager::new(&db);
    assert!(!manager.has_table(company::TABLE_NAME).await?);

    ensure_schema(&db).await?;
    assert!(manager.has_table(company::TABLE_NAME).await?);
    Ok(())
}

#[tokio::test]
async fn test_ensure_schema_is_idempotent() -> Result<()> {
    let db = setup_test_db().await?;
    company::create(&db, "11111111111111", "Keep Me Ltda", "Keep", "1111-1").await?;

    ensure_schema(&db).await?;
    ensure_schema(&db).await?;

    let count = company::Entity::find().count(&db).await?;
    assert_eq!(count, 1);
    Ok(())
}

#[tokio::test]
async fn test_schema_rejects_nulls() -> Result<()> {
    let db = setup_test_db().await?;
    let res = db
        .execute_unprepared("INSERT INTO companies (cnpj, name_legal_entity, trade_name, cnae) VALUES ('22222222222222', NULL, 'x', 'y')")
        .await;
    assert!(res.is_err());
    Ok(())
}
