//! Create `companies` table.
//!
//! `id` is `AUTOINCREMENT` on SQLite so ids of deleted rows are never handed out again.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Companies::Table)
                    .if_not_exists()
                    .col(pk_auto(Companies::Id))
                    .col(string_len(Companies::Cnpj, 14).unique_key().not_null())
                    .col(string_len(Companies::NameLegalEntity, 100).not_null())
                    .col(string_len(Companies::TradeName, 100).not_null())
                    .col(string_len(Companies::Cnae, 10).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Companies::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Companies { Table, Id, Cnpj, NameLegalEntity, TradeName, Cnae }
