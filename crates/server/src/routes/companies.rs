use axum::{
    extract::{
        rejection::QueryRejection,
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use common::types::Message;
use models::company;
use serde::{Deserialize, Serialize};
use service::company::{CompanyChanges, NewCompany};
use service::pagination::ListParams;
use tracing::info;

use crate::{errors::ApiError, extract::JsonOrForm, state::ServerState};

pub const REGISTERED: &str = "Company successfully registered";
pub const UPDATED: &str = "Company successfully updated";
pub const REMOVED: &str = "Company successfully removed";

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub start: Option<u64>,
    pub limit: Option<u64>,
    pub sort: Option<String>,
    pub dir: Option<String>,
}

/// `total` is the size of this page, not of the whole table.
#[derive(Debug, Serialize, Deserialize)]
pub struct CompanyList {
    pub companies: Vec<company::Model>,
    pub total: usize,
}

pub async fn register(
    State(state): State<ServerState>,
    JsonOrForm(input): JsonOrForm<NewCompany>,
) -> Result<(StatusCode, Json<Message>), ApiError> {
    let created = state.companies.register(input).await?;
    info!(id = created.id, cnpj = %created.cnpj, event = "company_registered", "registered company");
    Ok((StatusCode::CREATED, Json(Message::new(REGISTERED))))
}

pub async fn edit(
    State(state): State<ServerState>,
    Path(cnpj): Path<String>,
    JsonOrForm(changes): JsonOrForm<CompanyChanges>,
) -> Result<Json<Message>, ApiError> {
    let updated = state.companies.edit(&cnpj, changes).await?;
    info!(id = updated.id, cnpj = %cnpj, event = "company_updated", "updated company");
    Ok(Json(Message::new(UPDATED)))
}

pub async fn remove(
    State(state): State<ServerState>,
    Path(cnpj): Path<String>,
) -> Result<Json<Message>, ApiError> {
    state.companies.remove(&cnpj).await?;
    info!(cnpj = %cnpj, event = "company_removed", "removed company");
    Ok(Json(Message::new(REMOVED)))
}

pub async fn list(
    State(state): State<ServerState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<CompanyList>, ApiError> {
    let Query(q) = query?;
    let params = ListParams::from_raw(q.start, q.limit, q.sort.as_deref(), q.dir.as_deref())?;
    let companies = state.companies.list(&params).await?;
    let total = companies.len();
    info!(
        start = params.start,
        limit = params.limit,
        sort = params.sort.as_str(),
        count = total,
        event = "companies_listed",
        "listed companies"
    );
    Ok(Json(CompanyList { companies, total }))
}
