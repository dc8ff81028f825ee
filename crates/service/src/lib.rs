//! Service layer providing the company registry operations on top of models.
//! - Separates request handling from data access.
//! - Reuses validation and entity definitions in `models` crate.
//! - Every mutating operation runs in its own scoped transaction.

pub mod errors;
pub mod runtime;
pub mod pagination;
pub mod company;
#[cfg(test)]
pub mod test_support;
