//! Product domain model and validation contract.
//!
//! # Responsibility
//! - Define the canonical product record used by all catalog services.
//! - Provide the validation contract shared by every write path.
//!
//! # Invariants
//! - A product's `id` is absent until the repository persists it.
//! - Validation lives next to the model but is enforced by the services,
//!   never by the entity itself.

pub mod product;
pub mod validator;
