//! Product search use-case.
//!
//! # Responsibility
//! - Filter the full catalog by optional category and maximum price.
//!
//! # Invariants
//! - Category matching is exact and case-sensitive, with no trimming; an
//!   absent or empty filter disables the category test.
//! - Results preserve the relative order of `get_all`.

use crate::model::product::Product;
use crate::repo::product_repo::ProductReader;

/// Single-purpose service filtering catalog products.
pub struct ProductSearcher<R: ProductReader> {
    reader: R,
}

impl<R: ProductReader> ProductSearcher<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Returns the products matching both optional filters, in `get_all`
    /// order. An empty result is valid; there is no failure path.
    ///
    /// A product is kept iff:
    /// - `category` is `None` or empty, or equals the product's category
    ///   exactly (case-sensitive), and
    /// - `max_price` is `None`, or the product's price is present and
    ///   `<= max_price`.
    pub fn search_by_category_and_max_price(
        &self,
        category: Option<&str>,
        max_price: Option<f64>,
    ) -> Vec<Product> {
        self.reader
            .get_all()
            .into_iter()
            .filter(|product| {
                matches_category(product, category) && matches_max_price(product, max_price)
            })
            .collect()
    }
}

fn matches_category(product: &Product, filter: Option<&str>) -> bool {
    match filter {
        None => true,
        Some("") => true,
        Some(wanted) => product.category.as_deref() == Some(wanted),
    }
}

fn matches_max_price(product: &Product, max_price: Option<f64>) -> bool {
    match max_price {
        None => true,
        Some(max) => product.price.is_some_and(|price| price <= max),
    }
}
