//! The catalog provider backing the CLI.
//!
//! The cart engine never queries the catalog itself - it receives product
//! snapshots from its caller. This module is that caller-side lookup,
//! backed by the same key-value store under a single `catalog` key.

use rust_decimal::Decimal;
use tracing::warn;

use autoparts_cart::{CartError, KeyValueStore, StoreError};
use autoparts_core::{Availability, BrandId, PieceId, Product, ProductId, VehicleModelId};

const CATALOG_KEY: &str = "catalog";

/// Catalog lookups over a key-value store.
pub struct Catalog<'a, S> {
    store: &'a S,
}

impl<'a, S: KeyValueStore> Catalog<'a, S> {
    /// Create a catalog over `store`.
    #[must_use]
    pub const fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// All catalog products. An absent or unparsable blob yields an empty
    /// catalog.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] only for I/O faults.
    pub fn all(&self) -> Result<Vec<Product>, StoreError> {
        match self.store.get(CATALOG_KEY)? {
            Some(blob) => match serde_json::from_str(&blob) {
                Ok(products) => Ok(products),
                Err(e) => {
                    warn!(key = CATALOG_KEY, error = %e, "unparsable catalog blob, treating as empty");
                    Ok(Vec::new())
                }
            },
            None => Ok(Vec::new()),
        }
    }

    /// Fresh snapshot of one product.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::ProductNotFound`] when the id has no catalog
    /// entry at all - this is caller misuse, not end-user input, and is
    /// never swallowed.
    pub fn get(&self, id: ProductId) -> Result<Product, CartError> {
        self.all()?
            .into_iter()
            .find(|p| p.id == id)
            .ok_or(CartError::ProductNotFound(id))
    }

    /// Replace the catalog with `products`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the write fails.
    pub fn replace(&self, products: &[Product]) -> Result<(), StoreError> {
        // Product serialization cannot fail; fall back to an empty list
        // rather than panicking if it ever does
        let blob = serde_json::to_string(products).unwrap_or_else(|_| "[]".to_owned());
        self.store.set(CATALOG_KEY, &blob)
    }
}

/// The demo catalog written by `catalog seed`.
#[must_use]
pub fn demo_products() -> Vec<Product> {
    let part = |id: i32, name: &str, price: Decimal, stock: u32| Product {
        id: ProductId::new(id),
        code: format!("AP-{id:05}"),
        name: name.to_owned(),
        brand_id: BrandId::new(1 + id % 3),
        vehicle_model_id: VehicleModelId::new(1 + id % 4),
        piece_id: PieceId::new(id),
        price,
        stock,
        availability: if stock == 0 {
            Availability::OutOfStock
        } else {
            Availability::Available
        },
    };

    vec![
        part(1, "Brake pad set", Decimal::new(18990, 2), 24),
        part(2, "Oil filter", Decimal::new(3550, 2), 60),
        part(3, "Air filter", Decimal::new(4200, 2), 45),
        part(4, "Alternator 90A", Decimal::new(64900, 2), 6),
        part(5, "Shock absorber (front)", Decimal::new(27500, 2), 12),
        part(6, "Timing belt kit", Decimal::new(38900, 2), 8),
        part(7, "Spark plug set", Decimal::new(9900, 2), 80),
        part(8, "Radiator", Decimal::new(52000, 2), 0),
    ]
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use autoparts_cart::MemoryStore;

    use super::*;

    #[test]
    fn test_empty_catalog() {
        let store = MemoryStore::new();
        let catalog = Catalog::new(&store);
        assert!(catalog.all().unwrap().is_empty());
    }

    #[test]
    fn test_seed_then_lookup() {
        let store = MemoryStore::new();
        let catalog = Catalog::new(&store);
        catalog.replace(&demo_products()).unwrap();

        let product = catalog.get(ProductId::new(2)).unwrap();
        assert_eq!(product.name, "Oil filter");
    }

    #[test]
    fn test_corrupt_catalog_blob_treated_as_empty() {
        let store = MemoryStore::new();
        store.set("catalog", "not json {{{").unwrap();
        let catalog = Catalog::new(&store);
        assert!(catalog.all().unwrap().is_empty());
    }

    #[test]
    fn test_unknown_product_is_signaled() {
        let store = MemoryStore::new();
        let catalog = Catalog::new(&store);
        catalog.replace(&demo_products()).unwrap();

        let result = catalog.get(ProductId::new(999));
        assert!(matches!(result, Err(CartError::ProductNotFound(_))));
    }
}
