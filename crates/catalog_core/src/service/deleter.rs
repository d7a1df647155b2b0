//! Product deletion use-case.
//!
//! Pass-through to the write contract. Deleting an unknown id is a defined,
//! non-exceptional outcome reported as `false`, not an error.

use crate::model::product::ProductId;
use crate::repo::product_repo::ProductWriter;
use log::info;

/// Single-purpose service removing catalog products.
pub struct ProductDeleter<W: ProductWriter> {
    writer: W,
}

impl<W: ProductWriter> ProductDeleter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Removes the product with the given id.
    ///
    /// Returns `true` exactly once per existing id, `false` on every
    /// subsequent call with the same id.
    pub fn delete(&mut self, id: ProductId) -> bool {
        let removed = self.writer.delete(id);
        if removed {
            info!("event=product_deleted module=catalog status=ok id={id}");
        }
        removed
    }
}
