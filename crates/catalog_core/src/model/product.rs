//! Product entity.
//!
//! # Responsibility
//! - Define the flat catalog record shared by repository and services.
//!
//! # Invariants
//! - `id` is assigned exclusively by the repository at insertion time and is
//!   immutable thereafter.
//! - An absent `id` marks a transient, not-yet-persisted product; absence is
//!   modeled with `Option`, never a sentinel value.

use serde::{Deserialize, Serialize};

/// Stable identifier issued by the repository.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ProductId = u64;

/// Flat catalog record with no behavior of its own.
///
/// Every field is optional so a transient product (no id yet) and a sparse
/// record stay representable without sentinel values. The name/price
/// invariants are owned by [`crate::model::validator::ProductValidator`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Absent until the repository persists the record.
    pub id: Option<ProductId>,
    /// Display name. Must be non-blank for a persisted product.
    pub name: Option<String>,
    /// Free-form description.
    pub description: Option<String>,
    /// Unit price. Must be present and strictly positive for a persisted
    /// product.
    pub price: Option<f64>,
    /// Flat category label, matched exactly (case-sensitive) by search.
    pub category: Option<String>,
}

impl Product {
    /// Creates a transient product carrying no identifier.
    ///
    /// Used by the creator before validation and persistence; the repository
    /// assigns the id on `add`.
    pub fn transient(
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
            description: Some(description.into()),
            price: Some(price),
            category: Some(category.into()),
        }
    }

    /// Returns whether this product has been persisted (id assigned).
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}
