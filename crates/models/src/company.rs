use sea_orm::{entity::prelude::*, ActiveModelTrait, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::errors;

pub const TABLE_NAME: &str = "companies";
pub const CNPJ_LEN: usize = 14;
pub const NAME_MAX_LEN: usize = 100;
pub const CNAE_MAX_LEN: usize = 10;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "companies")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub cnpj: String,
    pub name_legal_entity: String,
    pub trade_name: String,
    pub cnae: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_cnpj(cnpj: &str) -> Result<(), errors::ModelError> {
    if cnpj.chars().count() != CNPJ_LEN {
        return Err(errors::ModelError::Validation(format!("cnpj must be exactly {CNPJ_LEN} characters")));
    }
    Ok(())
}

fn validate_max_len(field: &str, value: &str, max: usize) -> Result<(), errors::ModelError> {
    if value.chars().count() > max {
        return Err(errors::ModelError::Validation(format!("{field} must be at most {max} characters")));
    }
    Ok(())
}

pub fn validate_name_legal_entity(v: &str) -> Result<(), errors::ModelError> {
    validate_max_len("name_legal_entity", v, NAME_MAX_LEN)
}

pub fn validate_trade_name(v: &str) -> Result<(), errors::ModelError> {
    validate_max_len("trade_name", v, NAME_MAX_LEN)
}

pub fn validate_cnae(v: &str) -> Result<(), errors::ModelError> {
    validate_max_len("cnae", v, CNAE_MAX_LEN)
}

/// Insert a company. Callers run the `validate_*` checks first; `id` is assigned by the store.
pub async fn create<C: ConnectionTrait>(
    db: &C,
    cnpj: &str,
    name_legal_entity: &str,
    trade_name: &str,
    cnae: &str,
) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        cnpj: Set(cnpj.to_string()),
        name_legal_entity: Set(name_legal_entity.to_string()),
        trade_name: Set(trade_name.to_string()),
        cnae: Set(cnae.to_string()),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

pub async fn find_by_cnpj<C: ConnectionTrait>(db: &C, cnpj: &str) -> Result<Option<Model>, errors::ModelError> {
    Ok(Entity::find().filter(Column::Cnpj.eq(cnpj)).one(db).await?)
}
