//! Product creation use-case.
//!
//! # Responsibility
//! - Build a transient product, validate it, and persist it through the
//!   write contract.
//!
//! # Invariants
//! - Validation failure happens before any write; no partial writes.
//! - The returned product always carries the repository-assigned id.

use crate::model::product::Product;
use crate::model::validator::ProductValidator;
use crate::repo::product_repo::ProductWriter;
use crate::service::CatalogError;
use log::{info, warn};

/// Single-purpose service creating catalog products.
pub struct ProductCreator<W: ProductWriter> {
    writer: W,
    validator: ProductValidator,
}

impl<W: ProductWriter> ProductCreator<W> {
    /// Creates the service from the injected write contract and the shared
    /// validator.
    pub fn new(writer: W, validator: ProductValidator) -> Self {
        Self { writer, validator }
    }

    /// Validates and persists a new product.
    ///
    /// Returns the stored record, now carrying its assigned id.
    ///
    /// # Errors
    /// Returns the validator's error unchanged when the name/price invariants
    /// are violated; the store is untouched in that case.
    pub fn create(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        category: impl Into<String>,
    ) -> Result<Product, CatalogError> {
        let product = Product::transient(name, description, price, category);
        if let Err(err) = self.validator.validate(&product) {
            warn!("event=product_create_rejected module=catalog status=error reason={err}");
            return Err(err.into());
        }

        let stored = self.writer.add(product);
        if let Some(id) = stored.id {
            info!("event=product_created module=catalog status=ok id={id}");
        }
        Ok(stored)
    }
}
