//! Catalog use-case services.
//!
//! # Responsibility
//! - Orchestrate contract calls into single-purpose use-case APIs.
//! - Keep callers decoupled from the concrete store.
//!
//! # Invariants
//! - Each service depends only on the contract(s) it needs, never on
//!   `InMemoryProductRepository` directly.
//! - Validation always runs before any write reaches the store.

pub mod creator;
pub mod deleter;
pub mod retriever;
pub mod searcher;
pub mod updater;

use crate::model::product::ProductId;
use crate::model::validator::ValidationError;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service-level error for catalog write use-cases.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// The product violated the name/price invariants. Surfaced unchanged
    /// from the validator; never recovered internally.
    Validation(ValidationError),
    /// The target product does not exist.
    NotFound(ProductId),
    /// The write contract reported failure after validation passed. Treated
    /// as fatal and never retried.
    UpdateFailed(ProductId),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "product not found: {id}"),
            Self::UpdateFailed(id) => write!(f, "storage rejected update for product {id}"),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for CatalogError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}
