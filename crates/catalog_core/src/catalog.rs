//! Catalog composition root.
//!
//! # Responsibility
//! - Wire one repository instance and one validator into the five use-case
//!   services. Constructor injection only; no logic of its own.
//!
//! # Invariants
//! - All services share the same repository handle; the facade never touches
//!   the store directly.

use crate::model::validator::ProductValidator;
use crate::repo::product_repo::InMemoryProductRepository;
use crate::service::creator::ProductCreator;
use crate::service::deleter::ProductDeleter;
use crate::service::retriever::ProductRetriever;
use crate::service::searcher::ProductSearcher;
use crate::service::updater::ProductUpdater;
use std::cell::RefCell;
use std::rc::Rc;

/// Shared handle to the single repository behind all services.
///
/// `Rc`, not `Arc`: the catalog is single-threaded by design and accessed
/// sequentially by one caller at a time.
pub type SharedProductRepository = Rc<RefCell<InMemoryProductRepository>>;

/// Facade exposing the five catalog services over one repository.
pub struct ProductCatalog {
    pub creator: ProductCreator<SharedProductRepository>,
    pub retriever: ProductRetriever<SharedProductRepository>,
    pub updater: ProductUpdater<SharedProductRepository>,
    pub deleter: ProductDeleter<SharedProductRepository>,
    pub searcher: ProductSearcher<SharedProductRepository>,
}

impl ProductCatalog {
    /// Builds a catalog over a fresh, empty in-memory repository.
    pub fn new() -> Self {
        Self::with_repository(InMemoryProductRepository::new())
    }

    /// Builds a catalog over the provided repository instance.
    pub fn with_repository(repository: InMemoryProductRepository) -> Self {
        let shared: SharedProductRepository = Rc::new(RefCell::new(repository));
        let validator = ProductValidator::new();

        Self {
            creator: ProductCreator::new(Rc::clone(&shared), validator),
            retriever: ProductRetriever::new(Rc::clone(&shared)),
            updater: ProductUpdater::new(Rc::clone(&shared), validator),
            deleter: ProductDeleter::new(Rc::clone(&shared)),
            searcher: ProductSearcher::new(shared),
        }
    }
}

impl Default for ProductCatalog {
    fn default() -> Self {
        Self::new()
    }
}
