//! # Catalog
//!
//! The immutable product catalog and its browse operations.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Catalog Lifecycle                                    │
//! │                                                                         │
//! │  Startup ──► Catalog::new(products) ──► read-only forever              │
//! │                                                                         │
//! │  The catalog provider (out of scope) supplies the product list once.   │
//! │  Nothing in the system mutates a Product after construction; the cart  │
//! │  copies the display fields it needs instead of holding references.     │
//! │                                                                         │
//! │  browse("rice", Some("Groceries"), PriceAsc)                            │
//! │       │                                                                 │
//! │       ├── name substring filter (case-insensitive)                      │
//! │       ├── category exact filter                                         │
//! │       └── sort: featured order / price ↑ / price ↓ / name A-Z           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::Product;

// =============================================================================
// Sort Order
// =============================================================================

/// Catalog sort options offered by the storefront's sort dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum SortOrder {
    /// Catalog insertion order (the default).
    Featured,
    /// Cheapest first.
    PriceAsc,
    /// Most expensive first.
    PriceDesc,
    /// Alphabetical by name.
    NameAsc,
}

impl Default for SortOrder {
    fn default() -> Self {
        SortOrder::Featured
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// Immutable product catalog.
///
/// Constructed once at startup from the catalog provider's data and only
/// ever read afterwards.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Creates a catalog from a static product list.
    pub fn new(products: Vec<Product>) -> Self {
        Catalog { products }
    }

    /// Looks up a product by catalog id.
    pub fn get(&self, product_id: u32) -> Option<&Product> {
        self.products.iter().find(|p| p.id == product_id)
    }

    /// All products in featured (insertion) order.
    #[inline]
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    /// Number of catalog entries.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Distinct category names in first-appearance order.
    ///
    /// Used to populate the category filter dropdown.
    pub fn categories(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for product in &self.products {
            if !seen.iter().any(|c| c == &product.category) {
                seen.push(product.category.clone());
            }
        }
        seen
    }

    /// Filters and sorts the catalog for display.
    ///
    /// ## Arguments
    /// * `query` - case-insensitive name substring; empty matches everything
    /// * `category` - exact category match; `None` matches everything
    /// * `sort` - ordering of the result set
    pub fn browse(&self, query: &str, category: Option<&str>, sort: SortOrder) -> Vec<&Product> {
        let query = query.trim().to_lowercase();

        let mut results: Vec<&Product> = self
            .products
            .iter()
            .filter(|p| query.is_empty() || p.name.to_lowercase().contains(&query))
            .filter(|p| category.map_or(true, |c| p.category == c))
            .collect();

        match sort {
            SortOrder::Featured => {}
            SortOrder::PriceAsc => results.sort_by_key(|p| p.price_paise),
            SortOrder::PriceDesc => results.sort_by_key(|p| std::cmp::Reverse(p.price_paise)),
            SortOrder::NameAsc => results.sort_by(|a, b| a.name.cmp(&b.name)),
        }

        results
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn fixture() -> Catalog {
        let product = |id: u32, name: &str, rupees: i64, category: &str| Product {
            id,
            name: name.to_string(),
            price_paise: Money::from_rupees(rupees).paise(),
            image_url: String::new(),
            category: category.to_string(),
            description: String::new(),
            rating: 4.0,
            seed_reviews: vec![],
        };

        Catalog::new(vec![
            product(1, "Basmati Rice (1kg)", 120, "Groceries & Essentials"),
            product(2, "Whole Wheat Flour (5kg)", 250, "Groceries & Essentials"),
            product(3, "Fresh Paneer (200g)", 80, "Dairy & Bakery"),
            product(4, "Brown Bread", 40, "Dairy & Bakery"),
        ])
    }

    #[test]
    fn test_get_by_id() {
        let catalog = fixture();
        assert_eq!(catalog.get(3).unwrap().name, "Fresh Paneer (200g)");
        assert!(catalog.get(99).is_none());
    }

    #[test]
    fn test_categories_unique_in_order() {
        let catalog = fixture();
        assert_eq!(
            catalog.categories(),
            vec!["Groceries & Essentials", "Dairy & Bakery"]
        );
    }

    #[test]
    fn test_browse_query_is_case_insensitive() {
        let catalog = fixture();
        let results = catalog.browse("RICE", None, SortOrder::Featured);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, 1);
    }

    #[test]
    fn test_browse_category_filter() {
        let catalog = fixture();
        let results = catalog.browse("", Some("Dairy & Bakery"), SortOrder::Featured);
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|p| p.category == "Dairy & Bakery"));
    }

    #[test]
    fn test_browse_sort_orders() {
        let catalog = fixture();

        let by_price: Vec<u32> = catalog
            .browse("", None, SortOrder::PriceAsc)
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(by_price, vec![4, 3, 1, 2]);

        let by_price_desc: Vec<u32> = catalog
            .browse("", None, SortOrder::PriceDesc)
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(by_price_desc, vec![2, 1, 3, 4]);

        let by_name: Vec<u32> = catalog
            .browse("", None, SortOrder::NameAsc)
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(by_name, vec![1, 4, 3, 2]);
    }

    #[test]
    fn test_browse_empty_query_returns_all() {
        let catalog = fixture();
        assert_eq!(catalog.browse("", None, SortOrder::Featured).len(), 4);
    }
}
