//! Catalog commands.

use autoparts_cart::JsonFileStore;

use crate::catalog::{Catalog, demo_products};

use super::CliError;

/// Write the demo catalog.
pub fn seed(store: &JsonFileStore) -> Result<(), CliError> {
    let catalog = Catalog::new(store);
    let products = demo_products();
    catalog.replace(&products)?;
    tracing::info!("Seeded catalog with {} products", products.len());
    Ok(())
}

/// List catalog products.
pub fn list(store: &JsonFileStore) -> Result<(), CliError> {
    let catalog = Catalog::new(store);
    let products = catalog.all()?;

    if products.is_empty() {
        tracing::info!("Catalog is empty. Run `autoparts catalog seed` first.");
        return Ok(());
    }

    for p in products {
        tracing::info!(
            "  #{} {} - {} - S/ {:.2} ({} in stock, {:?})",
            p.id,
            p.code,
            p.name,
            p.price,
            p.stock,
            p.availability
        );
    }
    Ok(())
}
