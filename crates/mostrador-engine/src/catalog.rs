//! # Product Catalog
//!
//! The catalog collaborator the engine resolves products against.
//!
//! ## Search Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Product Search Flow                              │
//! │                                                                     │
//! │  Cashier types or scans into the search box                         │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ┌──────────────────────────────────────────┐                       │
//! │  │  Is the query all digits?                │                       │
//! │  │  YES: try exact barcode lookup first     │──► Hit? Return [1]    │
//! │  │  NO:  substring match                    │                       │
//! │  └──────────────────────────────────────────┘                       │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  Case-insensitive substring over description OR barcode             │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  Vec<Product> rendered as the product grid                          │
//! │                                                                     │
//! │  Barcode scanners "type" the full code in <50ms; the exact-match    │
//! │  fast path makes a scan land on one product, not a fuzzy list.      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use mostrador_core::validation::{validate_price_cents, validate_product_description, validate_stock_on_hand};
use mostrador_core::{Product, ValidationError};

// =============================================================================
// Catalog Contract
// =============================================================================

/// The catalog contract the engine depends on.
///
/// An implementation backed by real storage can be swapped in without
/// touching the engine; this crate ships the in-memory one.
pub trait ProductCatalog {
    /// Looks up a product by its stable id.
    fn find_by_id(&self, id: &str) -> Option<Product>;

    /// Searches products by description or barcode, case-insensitive
    /// substring. An empty query returns the whole catalog.
    fn search(&self, query: &str) -> Vec<Product>;
}

/// Checks if a query looks like a scanned barcode (all digits).
fn is_barcode_query(query: &str) -> bool {
    !query.is_empty() && query.chars().all(|c| c.is_ascii_digit())
}

// =============================================================================
// In-Memory Catalog
// =============================================================================

/// In-memory product catalog.
///
/// Persistence is out of scope for this engine; the catalog lives as a
/// plain Vec, seeded with demo data or filled through `add_product`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    products: Vec<Product>,
}

impl InMemoryCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        InMemoryCatalog {
            products: Vec::new(),
        }
    }

    /// Creates a catalog seeded with the demo corner-store products.
    pub fn seed_demo() -> Self {
        let demo = [
            ("1", "Pan Blanco", 2000, 50),
            ("2", "Leche Entera 1L", 4500, 30),
            ("3", "Huevos 12 pzs", 6000, 25),
            ("4", "Azúcar 1kg", 3500, 40),
            ("5", "Arroz 1kg", 2500, 35),
            ("6", "Frijol 1kg", 3000, 20),
            ("7", "Aceite 1L", 5500, 15),
            ("8", "Pasta 500g", 1800, 45),
        ];

        InMemoryCatalog {
            products: demo
                .iter()
                .map(|(id, description, price, stock)| Product {
                    id: id.to_string(),
                    barcode: Some(id.to_string()),
                    description: description.to_string(),
                    sale_price_cents: *price,
                    purchase_price_cents: None,
                    category: None,
                    stock_on_hand: *stock,
                })
                .collect(),
        }
    }

    /// Adds a product after validating its required fields.
    ///
    /// Replaces any existing product with the same id (catalog edit).
    pub fn add_product(&mut self, product: Product) -> Result<(), ValidationError> {
        validate_product_description(&product.description)?;
        validate_price_cents(product.sale_price_cents)?;
        validate_stock_on_hand(product.stock_on_hand)?;

        self.products.retain(|p| p.id != product.id);
        self.products.push(product);
        Ok(())
    }

    /// Number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Checks if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl ProductCatalog for InMemoryCatalog {
    fn find_by_id(&self, id: &str) -> Option<Product> {
        self.products.iter().find(|p| p.id == id).cloned()
    }

    fn search(&self, query: &str) -> Vec<Product> {
        let query = query.trim();
        if query.is_empty() {
            return self.products.clone();
        }

        // Scanner fast path: exact barcode match wins outright.
        if is_barcode_query(query) {
            if let Some(product) = self
                .products
                .iter()
                .find(|p| p.barcode.as_deref() == Some(query))
            {
                return vec![product.clone()];
            }
        }

        let needle = query.to_lowercase();
        self.products
            .iter()
            .filter(|p| {
                p.description.to_lowercase().contains(&needle)
                    || p.barcode
                        .as_deref()
                        .is_some_and(|b| b.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_by_id() {
        let catalog = InMemoryCatalog::seed_demo();
        let product = catalog.find_by_id("1").unwrap();
        assert_eq!(product.description, "Pan Blanco");
        assert_eq!(product.sale_price_cents, 2000);

        assert!(catalog.find_by_id("99").is_none());
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let catalog = InMemoryCatalog::seed_demo();

        let results = catalog.search("PAN");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].description, "Pan Blanco");

        // Substring in the middle of the description
        let results = catalog.search("1kg");
        assert_eq!(results.len(), 3); // Azúcar, Arroz, Frijol
    }

    #[test]
    fn test_empty_query_returns_full_grid() {
        let catalog = InMemoryCatalog::seed_demo();
        assert_eq!(catalog.search("").len(), 8);
        assert_eq!(catalog.search("   ").len(), 8);
    }

    #[test]
    fn test_barcode_exact_match_fast_path() {
        let catalog = InMemoryCatalog::seed_demo();
        let results = catalog.search("3");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].description, "Huevos 12 pzs");
    }

    #[test]
    fn test_digit_query_without_exact_barcode_falls_back_to_substring() {
        let mut catalog = InMemoryCatalog::new();
        catalog
            .add_product(Product {
                id: "a".to_string(),
                barcode: Some("7501001".to_string()),
                description: "Refresco 600ml".to_string(),
                sale_price_cents: 1800,
                purchase_price_cents: None,
                category: None,
                stock_on_hand: 10,
            })
            .unwrap();

        // "7501" is no product's full barcode but is a prefix of one.
        let results = catalog.search("7501");
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn test_no_match() {
        let catalog = InMemoryCatalog::seed_demo();
        assert!(catalog.search("sushi").is_empty());
    }

    #[test]
    fn test_add_product_validates() {
        let mut catalog = InMemoryCatalog::new();

        let mut product = Product {
            id: "x".to_string(),
            barcode: None,
            description: "".to_string(),
            sale_price_cents: 1000,
            purchase_price_cents: None,
            category: None,
            stock_on_hand: 5,
        };
        assert!(catalog.add_product(product.clone()).is_err());

        product.description = "Queso Fresco".to_string();
        product.sale_price_cents = -5;
        assert!(catalog.add_product(product.clone()).is_err());

        product.sale_price_cents = 4200;
        catalog.add_product(product).unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_add_product_replaces_same_id() {
        let mut catalog = InMemoryCatalog::seed_demo();
        let mut bread = catalog.find_by_id("1").unwrap();
        bread.sale_price_cents = 2200;

        catalog.add_product(bread).unwrap();
        assert_eq!(catalog.len(), 8);
        assert_eq!(catalog.find_by_id("1").unwrap().sale_price_cents, 2200);
    }
}
