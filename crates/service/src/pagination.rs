//! Listing parameters for the company registry.
//!
//! `sort` is resolved through the [`SortField`] allow-list instead of looking
//! attributes up by name, so unknown fields are rejected up front.

use std::cmp::Ordering;
use std::str::FromStr;

use models::company;
use sea_orm::Order;

use crate::errors::ServiceError;

pub const DEFAULT_START: u64 = 0;
pub const DEFAULT_LIMIT: u64 = 10;
/// SQLite binds OFFSET/LIMIT as signed 64-bit integers.
pub const MAX_WINDOW: u64 = i64::MAX as u64;

/// Attributes a listing may be ordered by.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortField {
    Id,
    Cnpj,
    NameLegalEntity,
    #[default]
    TradeName,
    Cnae,
}

impl SortField {
    pub const ALL: [SortField; 5] = [
        SortField::Id,
        SortField::Cnpj,
        SortField::NameLegalEntity,
        SortField::TradeName,
        SortField::Cnae,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::Cnpj => "cnpj",
            SortField::NameLegalEntity => "name_legal_entity",
            SortField::TradeName => "trade_name",
            SortField::Cnae => "cnae",
        }
    }

    pub fn column(self) -> company::Column {
        match self {
            SortField::Id => company::Column::Id,
            SortField::Cnpj => company::Column::Cnpj,
            SortField::NameLegalEntity => company::Column::NameLegalEntity,
            SortField::TradeName => company::Column::TradeName,
            SortField::Cnae => company::Column::Cnae,
        }
    }

    /// In-memory counterpart of `ORDER BY <column> ASC`.
    pub fn compare(self, a: &company::Model, b: &company::Model) -> Ordering {
        match self {
            SortField::Id => a.id.cmp(&b.id),
            SortField::Cnpj => a.cnpj.cmp(&b.cnpj),
            SortField::NameLegalEntity => a.name_legal_entity.cmp(&b.name_legal_entity),
            SortField::TradeName => a.trade_name.cmp(&b.trade_name),
            SortField::Cnae => a.cnae.cmp(&b.cnae),
        }
    }
}

impl FromStr for SortField {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortField::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| ServiceError::Validation(format!("unknown sort field: {s}")))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDir {
    #[default]
    Asc,
    Desc,
}

impl SortDir {
    /// Only the exact value `asc` sorts ascending; anything else is descending.
    pub fn from_param(s: &str) -> Self {
        if s == "asc" { SortDir::Asc } else { SortDir::Desc }
    }

    pub fn order(self) -> Order {
        match self {
            SortDir::Asc => Order::Asc,
            SortDir::Desc => Order::Desc,
        }
    }
}

/// Offset/limit window plus ordering for a listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListParams {
    pub start: u64,
    pub limit: u64,
    pub sort: SortField,
    pub dir: SortDir,
}

impl Default for ListParams {
    fn default() -> Self {
        Self { start: DEFAULT_START, limit: DEFAULT_LIMIT, sort: SortField::default(), dir: SortDir::default() }
    }
}

impl ListParams {
    /// Build from optional raw query values, applying defaults.
    pub fn from_raw(
        start: Option<u64>,
        limit: Option<u64>,
        sort: Option<&str>,
        dir: Option<&str>,
    ) -> Result<Self, ServiceError> {
        let sort = match sort {
            Some(s) => s.parse()?,
            None => SortField::default(),
        };
        Ok(Self {
            start: start.unwrap_or(DEFAULT_START).min(MAX_WINDOW),
            limit: limit.unwrap_or(DEFAULT_LIMIT).min(MAX_WINDOW),
            sort,
            dir: dir.map(SortDir::from_param).unwrap_or_default(),
        })
    }

    /// `(offset, limit)` clamped to [`MAX_WINDOW`].
    pub fn bounded_window(&self) -> (u64, u64) {
        (self.start.min(MAX_WINDOW), self.limit.min(MAX_WINDOW))
    }

    pub fn offset_usize(&self) -> usize { usize::try_from(self.start).unwrap_or(usize::MAX) }

    pub fn limit_usize(&self) -> usize { usize::try_from(self.limit).unwrap_or(usize::MAX) }
}
