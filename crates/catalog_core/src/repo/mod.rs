//! Repository layer abstractions and the in-memory store.
//!
//! # Responsibility
//! - Define the read and write contracts services depend on.
//! - Keep mutable catalog state inside one concrete repository type.
//!
//! # Invariants
//! - Services only ever see the narrow contracts, never the owned map.
//! - Identifier assignment happens exclusively inside the repository.

pub mod product_repo;
