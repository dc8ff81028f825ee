use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::company::{CompanyRepository, CompanyService, SeaOrmCompanyRepository};

/// Shared handler state. Holds no mutable data; every request goes to the store.
#[derive(Clone)]
pub struct ServerState {
    pub companies: CompanyService,
}

impl ServerState {
    pub fn new(repo: Arc<dyn CompanyRepository>) -> Self {
        Self { companies: CompanyService::new(repo) }
    }

    pub fn from_db(db: DatabaseConnection) -> Self {
        Self::new(Arc::new(SeaOrmCompanyRepository { db }))
    }
}
