//! Product validation contract.
//!
//! # Responsibility
//! - Enforce the persisted-product invariants: non-blank name, strictly
//!   positive present price.
//!
//! # Invariants
//! - Validation is stateless and side-effect free; one validator instance is
//!   safe to share across all services.
//! - Write paths must validate before any repository mutation.

use crate::model::product::Product;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Validation failure for a product record.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Name is absent, empty, or whitespace-only.
    NameMissing,
    /// Price is absent.
    PriceMissing,
    /// Price is present but not strictly positive.
    PriceNotPositive(f64),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NameMissing => write!(f, "product name is required and cannot be blank"),
            Self::PriceMissing => write!(f, "product price is required"),
            Self::PriceNotPositive(value) => {
                write!(f, "product price must be strictly positive, got {value}")
            }
        }
    }
}

impl Error for ValidationError {}

/// Stateless validator shared by every write-path service.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProductValidator;

impl ProductValidator {
    pub fn new() -> Self {
        Self
    }

    /// Checks the persisted-product invariants.
    ///
    /// # Errors
    /// - `NameMissing` when `name` is absent, empty, or whitespace-only.
    /// - `PriceMissing` when `price` is absent.
    /// - `PriceNotPositive` when `price` is present but `<= 0`.
    pub fn validate(&self, product: &Product) -> Result<(), ValidationError> {
        match product.name.as_deref() {
            Some(name) if !name.trim().is_empty() => {}
            _ => return Err(ValidationError::NameMissing),
        }

        match product.price {
            None => Err(ValidationError::PriceMissing),
            Some(price) if price <= 0.0 => Err(ValidationError::PriceNotPositive(price)),
            Some(_) => Ok(()),
        }
    }
}
