pub mod domain;
pub mod repository;
pub mod service;

pub use domain::{CompanyChanges, NewCompany};
pub use repository::{CompanyRepository, SeaOrmCompanyRepository};
pub use service::CompanyService;
