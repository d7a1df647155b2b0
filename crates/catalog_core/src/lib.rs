//! Core domain logic for the product catalog.
//! This crate is the single source of truth for catalog business invariants.

pub mod catalog;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use catalog::{ProductCatalog, SharedProductRepository};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::product::{Product, ProductId};
pub use model::validator::{ProductValidator, ValidationError};
pub use repo::product_repo::{InMemoryProductRepository, ProductReader, ProductWriter};
pub use service::creator::ProductCreator;
pub use service::deleter::ProductDeleter;
pub use service::retriever::ProductRetriever;
pub use service::searcher::ProductSearcher;
pub use service::updater::ProductUpdater;
pub use service::CatalogError;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
