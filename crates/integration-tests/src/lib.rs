//! Integration tests for the autoparts workspace.
//!
//! These tests drive the cart engine and order ledger together over a
//! file-backed store, the way the CLI (and originally the browser UI)
//! does: guest browsing, sign-in migration, checkout, order history.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p autoparts-integration-tests
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use rust_decimal::Decimal;
use tempfile::TempDir;

use autoparts_cart::JsonFileStore;
use autoparts_core::{Availability, BrandId, PieceId, Product, ProductId, VehicleModelId};

/// A file store rooted in a fresh temporary directory.
///
/// # Panics
///
/// Panics if the temporary directory or store cannot be created; tests
/// cannot proceed without one.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn temp_store() -> (TempDir, JsonFileStore) {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::open(dir.path()).unwrap();
    (dir, store)
}

/// A catalog product snapshot for tests.
#[must_use]
pub fn test_product(id: i32, price_cents: i64, stock: u32) -> Product {
    Product {
        id: ProductId::new(id),
        code: format!("AP-{id:05}"),
        name: format!("part {id}"),
        brand_id: BrandId::new(1),
        vehicle_model_id: VehicleModelId::new(1),
        piece_id: PieceId::new(id),
        price: Decimal::new(price_cents, 2),
        stock,
        availability: Availability::Available,
    }
}
