//! Product repository contracts and in-memory implementation.
//!
//! # Responsibility
//! - Define the read/write contracts any storage backend must satisfy.
//! - Own the catalog's only mutable state: the id-keyed product map and the
//!   next-identifier counter.
//!
//! # Invariants
//! - Every key in the map equals the `id` field of its value.
//! - The counter stays strictly greater than every id ever issued, so ids are
//!   never reused, even after deletion.
//! - Iteration is in ascending id order, which equals insertion order because
//!   ids are assigned monotonically.

use crate::model::product::{Product, ProductId};
use log::debug;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

/// Read contract for catalog queries.
///
/// Alternative storage backends plug in by implementing this together with
/// [`ProductWriter`]; no service code changes.
pub trait ProductReader {
    /// Gets one product by id, or `None` when it was never created or has
    /// been deleted.
    fn get_by_id(&self, id: ProductId) -> Option<Product>;
    /// Returns all stored products in insertion order.
    fn get_all(&self) -> Vec<Product>;
}

/// Write contract for catalog mutations.
pub trait ProductWriter {
    /// Stores the product under the next unused id, ignoring any id already
    /// set on it. Always succeeds and returns the stored record.
    fn add(&mut self, product: Product) -> Product;
    /// Replaces the stored value wholesale when `product.id` references an
    /// existing entry. Returns `false` otherwise; never creates an entry.
    fn update(&mut self, product: &Product) -> bool;
    /// Removes the entry when present. Returns `false` when there was nothing
    /// to remove.
    fn delete(&mut self, id: ProductId) -> bool;
}

/// Sole owner of persisted catalog state.
///
/// Single-threaded by design: callers needing to share one store across
/// services wrap it in `Rc<RefCell<_>>` (see the blanket contract impls
/// below), which is how [`crate::catalog::ProductCatalog`] wires it.
#[derive(Debug)]
pub struct InMemoryProductRepository {
    products: BTreeMap<ProductId, Product>,
    next_id: ProductId,
}

impl Default for InMemoryProductRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self {
            products: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Number of stored products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl ProductReader for InMemoryProductRepository {
    fn get_by_id(&self, id: ProductId) -> Option<Product> {
        self.products.get(&id).cloned()
    }

    fn get_all(&self) -> Vec<Product> {
        self.products.values().cloned().collect()
    }
}

impl ProductWriter for InMemoryProductRepository {
    fn add(&mut self, mut product: Product) -> Product {
        let id = self.next_id;
        self.next_id += 1;
        product.id = Some(id);
        self.products.insert(id, product.clone());
        debug!("event=product_stored module=catalog status=ok id={id}");
        product
    }

    fn update(&mut self, product: &Product) -> bool {
        let Some(id) = product.id else {
            return false;
        };
        match self.products.get_mut(&id) {
            Some(stored) => {
                *stored = product.clone();
                debug!("event=product_replaced module=catalog status=ok id={id}");
                true
            }
            None => false,
        }
    }

    fn delete(&mut self, id: ProductId) -> bool {
        let removed = self.products.remove(&id).is_some();
        if removed {
            debug!("event=product_removed module=catalog status=ok id={id}");
        }
        removed
    }
}

// Contract impls over a shared handle, so one repository instance can back
// all five services under the single-threaded model.
impl<R: ProductReader> ProductReader for Rc<RefCell<R>> {
    fn get_by_id(&self, id: ProductId) -> Option<Product> {
        self.borrow().get_by_id(id)
    }

    fn get_all(&self) -> Vec<Product> {
        self.borrow().get_all()
    }
}

impl<W: ProductWriter> ProductWriter for Rc<RefCell<W>> {
    fn add(&mut self, product: Product) -> Product {
        self.borrow_mut().add(product)
    }

    fn update(&mut self, product: &Product) -> bool {
        self.borrow_mut().update(product)
    }

    fn delete(&mut self, id: ProductId) -> bool {
        self.borrow_mut().delete(id)
    }
}
