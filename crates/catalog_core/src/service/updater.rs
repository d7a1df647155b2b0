//! Product update use-case.
//!
//! # Responsibility
//! - Replace all four mutable fields of an existing product, keeping its id.
//!
//! # Invariants
//! - Fetch, then validate, then write: the stored copy is untouched unless
//!   validation passed, so the update is all-or-nothing for the caller.
//! - A write-contract `false` after successful validation is a fatal
//!   `UpdateFailed`, not a silent no-op.

use crate::model::product::{Product, ProductId};
use crate::model::validator::ProductValidator;
use crate::repo::product_repo::{ProductReader, ProductWriter};
use crate::service::CatalogError;
use log::{info, warn};

/// Single-purpose service replacing the mutable fields of a stored product.
pub struct ProductUpdater<S: ProductReader + ProductWriter> {
    store: S,
    validator: ProductValidator,
}

impl<S: ProductReader + ProductWriter> ProductUpdater<S> {
    /// Creates the service from the injected read+write contracts and the
    /// shared validator.
    pub fn new(store: S, validator: ProductValidator) -> Self {
        Self { store, validator }
    }

    /// Replaces name, description, price and category on the product with the
    /// given id. The id itself is never touched.
    ///
    /// Returns the mutated product on success.
    ///
    /// # Errors
    /// - `NotFound` when no product has the given id.
    /// - `Validation` when the mutated record violates the invariants; the
    ///   stored copy keeps its previous values.
    /// - `UpdateFailed` when the write contract reports failure after
    ///   validation passed.
    pub fn update(
        &mut self,
        id: ProductId,
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        category: impl Into<String>,
    ) -> Result<Product, CatalogError> {
        let mut product = self
            .store
            .get_by_id(id)
            .ok_or(CatalogError::NotFound(id))?;

        product.name = Some(name.into());
        product.description = Some(description.into());
        product.price = Some(price);
        product.category = Some(category.into());

        if let Err(err) = self.validator.validate(&product) {
            warn!("event=product_update_rejected module=catalog status=error id={id} reason={err}");
            return Err(err.into());
        }

        if !self.store.update(&product) {
            warn!("event=product_update_failed module=catalog status=error id={id}");
            return Err(CatalogError::UpdateFailed(id));
        }

        info!("event=product_updated module=catalog status=ok id={id}");
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::ProductUpdater;
    use crate::model::product::{Product, ProductId};
    use crate::model::validator::ProductValidator;
    use crate::repo::product_repo::{ProductReader, ProductWriter};
    use crate::service::CatalogError;

    /// Store whose reads succeed but whose writes are always refused, to
    /// drive the write-failure path that the in-memory repository cannot
    /// produce on its own.
    struct RefusingStore {
        stored: Product,
    }

    impl ProductReader for RefusingStore {
        fn get_by_id(&self, id: ProductId) -> Option<Product> {
            (self.stored.id == Some(id)).then(|| self.stored.clone())
        }

        fn get_all(&self) -> Vec<Product> {
            vec![self.stored.clone()]
        }
    }

    impl ProductWriter for RefusingStore {
        fn add(&mut self, product: Product) -> Product {
            product
        }

        fn update(&mut self, _product: &Product) -> bool {
            false
        }

        fn delete(&mut self, _id: ProductId) -> bool {
            false
        }
    }

    #[test]
    fn write_refusal_after_validation_surfaces_update_failed() {
        let mut stored = Product::transient("Ecran", "Elegant", 80.0, "Électronique");
        stored.id = Some(1);
        let mut updater = ProductUpdater::new(RefusingStore { stored }, ProductValidator::new());

        let err = updater
            .update(1, "Ecran HD", "Très élégant", 90.0, "Électronique")
            .unwrap_err();

        assert_eq!(err, CatalogError::UpdateFailed(1));
    }
}
