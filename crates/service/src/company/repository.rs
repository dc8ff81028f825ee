use async_trait::async_trait;
use models::company;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryOrder, QuerySelect, Set,
    TransactionTrait,
};
use tracing::debug;

use super::domain::{CompanyChanges, NewCompany};
use crate::errors::ServiceError;
use crate::pagination::ListParams;

/// Persistence operations for companies. Each call is one independent unit of work.
#[async_trait]
pub trait CompanyRepository: Send + Sync {
    async fn register(&self, input: &NewCompany) -> Result<company::Model, ServiceError>;
    /// `None` when no company has this cnpj.
    async fn edit(&self, cnpj: &str, changes: &CompanyChanges) -> Result<Option<company::Model>, ServiceError>;
    /// `false` when no company has this cnpj.
    async fn remove(&self, cnpj: &str) -> Result<bool, ServiceError>;
    async fn list(&self, params: &ListParams) -> Result<Vec<company::Model>, ServiceError>;
}

/// SeaORM-backed repository implementation.
///
/// Mutations run in a transaction scoped to the call: returning early drops
/// it, which rolls back and hands the connection back to the pool.
pub struct SeaOrmCompanyRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl CompanyRepository for SeaOrmCompanyRepository {
    async fn register(&self, input: &NewCompany) -> Result<company::Model, ServiceError> {
        let txn = self.db.begin().await?;
        let created = company::create(&txn, &input.cnpj, &input.name_legal_entity, &input.trade_name, &input.cnae).await?;
        txn.commit().await?;
        Ok(created)
    }

    async fn edit(&self, cnpj: &str, changes: &CompanyChanges) -> Result<Option<company::Model>, ServiceError> {
        let txn = self.db.begin().await?;
        let Some(existing) = company::find_by_cnpj(&txn, cnpj).await? else {
            debug!(%cnpj, "edit target missing");
            return Ok(None);
        };
        let mut am: company::ActiveModel = existing.into();
        am.trade_name = Set(changes.trade_name.clone());
        am.cnae = Set(changes.cnae.clone());
        let updated = am.update(&txn).await?;
        txn.commit().await?;
        Ok(Some(updated))
    }

    async fn remove(&self, cnpj: &str) -> Result<bool, ServiceError> {
        let txn = self.db.begin().await?;
        let Some(existing) = company::find_by_cnpj(&txn, cnpj).await? else {
            debug!(%cnpj, "remove target missing");
            return Ok(false);
        };
        existing.delete(&txn).await?;
        txn.commit().await?;
        Ok(true)
    }

    async fn list(&self, params: &ListParams) -> Result<Vec<company::Model>, ServiceError> {
        let (offset, limit) = params.bounded_window();
        let rows = company::Entity::find()
            .order_by(params.sort.column(), params.dir.order())
            .offset(offset)
            .limit(limit)
            .all(&self.db)
            .await?;
        Ok(rows)
    }
}

/// Simple in-memory mock repository for tests
pub mod mock {
    use super::*;
    use std::sync::Mutex;

    use models::errors::ModelError;

    use crate::pagination::SortDir;

    #[derive(Default)]
    pub struct MockCompanyRepository {
        rows: Mutex<Vec<company::Model>>,
        last_id: Mutex<i32>, // never decreases, like AUTOINCREMENT
    }

    impl MockCompanyRepository {
        pub fn snapshot(&self) -> Vec<company::Model> {
            self.rows.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl CompanyRepository for MockCompanyRepository {
        async fn register(&self, input: &NewCompany) -> Result<company::Model, ServiceError> {
            let mut rows = self.rows.lock().unwrap();
            if rows.iter().any(|c| c.cnpj == input.cnpj) {
                return Err(ModelError::Db("UNIQUE constraint failed: companies.cnpj".into()).into());
            }
            let mut last_id = self.last_id.lock().unwrap();
            *last_id += 1;
            let model = company::Model {
                id: *last_id,
                cnpj: input.cnpj.clone(),
                name_legal_entity: input.name_legal_entity.clone(),
                trade_name: input.trade_name.clone(),
                cnae: input.cnae.clone(),
            };
            rows.push(model.clone());
            Ok(model)
        }

        async fn edit(&self, cnpj: &str, changes: &CompanyChanges) -> Result<Option<company::Model>, ServiceError> {
            let mut rows = self.rows.lock().unwrap();
            Ok(rows.iter_mut().find(|c| c.cnpj == cnpj).map(|c| {
                c.trade_name = changes.trade_name.clone();
                c.cnae = changes.cnae.clone();
                c.clone()
            }))
        }

        async fn remove(&self, cnpj: &str) -> Result<bool, ServiceError> {
            let mut rows = self.rows.lock().unwrap();
            let before = rows.len();
            rows.retain(|c| c.cnpj != cnpj);
            Ok(rows.len() != before)
        }

        async fn list(&self, params: &ListParams) -> Result<Vec<company::Model>, ServiceError> {
            let mut rows = self.rows.lock().unwrap().clone();
            rows.sort_by(|a, b| {
                let ord = params.sort.compare(a, b);
                match params.dir {
                    SortDir::Asc => ord,
                    SortDir::Desc => ord.reverse(),
                }
            });
            Ok(rows
                .into_iter()
                .skip(params.offset_usize())
                .take(params.limit_usize())
                .collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagination::{SortDir, SortField};
    use crate::test_support::get_db;

    fn acme(cnpj: &str, trade_name: &str) -> NewCompany {
        NewCompany {
            cnpj: cnpj.into(),
            name_legal_entity: format!("{trade_name} Legal"),
            trade_name: trade_name.into(),
            cnae: "6201-5".into(),
        }
    }

    #[tokio::test]
    async fn seaorm_company_crud() -> Result<(), anyhow::Error> {
        let repo = SeaOrmCompanyRepository { db: get_db().await? };

        let created = repo.register(&acme("12345678901234", "Acme")).await?;
        let changes = CompanyChanges { trade_name: "Acme Two".into(), cnae: "4751-2".into() };
        let updated = repo.edit("12345678901234", &changes).await?.unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name_legal_entity, "Acme Legal");
        assert_eq!(updated.trade_name, "Acme Two");
        assert_eq!(updated.cnae, "4751-2");

        assert!(repo.remove("12345678901234").await?);
        assert!(!repo.remove("12345678901234").await?);
        assert!(repo.list(&ListParams::default()).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn seaorm_edit_missing_writes_nothing() -> Result<(), anyhow::Error> {
        let repo = SeaOrmCompanyRepository { db: get_db().await? };
        let changes = CompanyChanges { trade_name: "Ghost".into(), cnae: "0000-0".into() };
        assert!(repo.edit("00000000000000", &changes).await?.is_none());
        assert!(repo.list(&ListParams::default()).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn seaorm_duplicate_cnpj_is_store_error() -> Result<(), anyhow::Error> {
        let repo = SeaOrmCompanyRepository { db: get_db().await? };
        repo.register(&acme("12345678901234", "Acme")).await?;
        let err = repo.register(&acme("12345678901234", "Other")).await.unwrap_err();
        assert!(!err.is_validation());
        assert_eq!(repo.list(&ListParams::default()).await?.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn seaorm_list_orders_and_pages() -> Result<(), anyhow::Error> {
        let repo = SeaOrmCompanyRepository { db: get_db().await? };
        repo.register(&acme("00000000000001", "B")).await?;
        repo.register(&acme("00000000000002", "A")).await?;
        repo.register(&acme("00000000000003", "C")).await?;

        let asc = ListParams { start: 0, limit: 2, sort: SortField::TradeName, dir: SortDir::Asc };
        let names: Vec<_> = repo.list(&asc).await?.into_iter().map(|c| c.trade_name).collect();
        assert_eq!(names, ["A", "B"]);

        let desc = ListParams { dir: SortDir::Desc, ..asc };
        let names: Vec<_> = repo.list(&desc).await?.into_iter().map(|c| c.trade_name).collect();
        assert_eq!(names, ["C", "B"]);

        let by_id = ListParams { start: 1, limit: 10, sort: SortField::Id, dir: SortDir::Asc };
        let cnpjs: Vec<_> = repo.list(&by_id).await?.into_iter().map(|c| c.cnpj).collect();
        assert_eq!(cnpjs, ["00000000000002", "00000000000003"]);
        Ok(())
    }

    #[tokio::test]
    async fn seaorm_list_accepts_oversized_window() -> Result<(), anyhow::Error> {
        let repo = SeaOrmCompanyRepository { db: get_db().await? };
        repo.register(&acme("00000000000001", "A")).await?;

        let huge_limit = ListParams { limit: u64::MAX, ..ListParams::default() };
        assert_eq!(repo.list(&huge_limit).await?.len(), 1);

        let huge_start = ListParams { start: u64::MAX, ..ListParams::default() };
        assert!(repo.list(&huge_start).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn mock_matches_store_ordering() -> Result<(), anyhow::Error> {
        let repo = mock::MockCompanyRepository::default();
        repo.register(&acme("00000000000001", "B")).await?;
        repo.register(&acme("00000000000002", "A")).await?;
        repo.register(&acme("00000000000003", "C")).await?;

        let p = ListParams { start: 0, limit: 2, sort: SortField::TradeName, dir: SortDir::Asc };
        let names: Vec<_> = repo.list(&p).await?.into_iter().map(|c| c.trade_name).collect();
        assert_eq!(names, ["A", "B"]);
        Ok(())
    }
}
