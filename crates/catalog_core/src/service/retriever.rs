//! Product retrieval use-case.
//!
//! Pure pass-through over the read contract; no transformation and no failure
//! path beyond the contract's absent result for unknown ids.

use crate::model::product::{Product, ProductId};
use crate::repo::product_repo::ProductReader;

/// Single-purpose service reading catalog products.
pub struct ProductRetriever<R: ProductReader> {
    reader: R,
}

impl<R: ProductReader> ProductRetriever<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Gets one product by id, `None` when unknown or deleted.
    pub fn get_by_id(&self, id: ProductId) -> Option<Product> {
        self.reader.get_by_id(id)
    }

    /// Returns all products in insertion order.
    pub fn get_all(&self) -> Vec<Product> {
        self.reader.get_all()
    }
}
