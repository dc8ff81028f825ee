use std::sync::Arc;

use models::company;
use tracing::{info, instrument};

use super::domain::{CompanyChanges, NewCompany};
use super::repository::CompanyRepository;
use crate::errors::ServiceError;
use crate::pagination::ListParams;

/// Application service for the company registry.
/// Validates input before it reaches the repository and turns absent rows into `NotFound`.
#[derive(Clone)]
pub struct CompanyService {
    repo: Arc<dyn CompanyRepository>,
}

impl CompanyService {
    pub fn new(repo: Arc<dyn CompanyRepository>) -> Self { Self { repo } }

    #[instrument(skip(self, input), fields(cnpj = %input.cnpj))]
    pub async fn register(&self, input: NewCompany) -> Result<company::Model, ServiceError> {
        company::validate_cnpj(&input.cnpj)?;
        company::validate_name_legal_entity(&input.name_legal_entity)?;
        company::validate_trade_name(&input.trade_name)?;
        company::validate_cnae(&input.cnae)?;
        let created = self.repo.register(&input).await?;
        info!(id = created.id, "company registered");
        Ok(created)
    }

    #[instrument(skip(self, changes))]
    pub async fn edit(&self, cnpj: &str, changes: CompanyChanges) -> Result<company::Model, ServiceError> {
        company::validate_trade_name(&changes.trade_name)?;
        company::validate_cnae(&changes.cnae)?;
        self.repo
            .edit(cnpj, &changes)
            .await?
            .ok_or_else(|| ServiceError::not_found("Company"))
    }

    #[instrument(skip(self))]
    pub async fn remove(&self, cnpj: &str) -> Result<(), ServiceError> {
        if self.repo.remove(cnpj).await? {
            Ok(())
        } else {
            Err(ServiceError::not_found("Company"))
        }
    }

    pub async fn list(&self, params: &ListParams) -> Result<Vec<company::Model>, ServiceError> {
        self.repo.list(params).await
    }
}
