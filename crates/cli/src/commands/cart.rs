//! Cart commands.
//!
//! The identity comes from the `--user` flag: absent means the guest cart.

use rust_decimal::Decimal;

use autoparts_cart::{CartService, Identity, JsonFileStore};
use autoparts_core::{ProductId, UserId};

use crate::catalog::Catalog;

use super::CliError;

/// Show the cart with its totals (shipping not yet chosen, so zero).
pub fn show(store: &JsonFileStore, user: Option<UserId>) -> Result<(), CliError> {
    let service = CartService::new(store);
    let cart = service.get_cart(Identity::from(user))?;

    if cart.is_empty() {
        tracing::info!("Cart is empty");
        return Ok(());
    }

    for item in &cart.items {
        tracing::info!(
            "  #{} {} x{} @ S/ {:.2} = S/ {:.2}",
            item.product.id,
            item.product.name,
            item.quantity,
            item.product.price,
            item.subtotal()
        );
    }
    let summary = cart.summary(Decimal::ZERO);
    tracing::info!("  {} items", cart.total_items());
    tracing::info!("  Subtotal: S/ {:.2}", summary.subtotal);
    tracing::info!("  IGV (18%): S/ {:.2}", summary.tax);
    tracing::info!("  Total before shipping: S/ {:.2}", summary.total);
    Ok(())
}

/// Add a product to the cart, looking up a fresh snapshot from the catalog.
pub fn add(
    store: &JsonFileStore,
    user: Option<UserId>,
    product_id: i32,
    quantity: u32,
) -> Result<(), CliError> {
    let product = Catalog::new(store).get(ProductId::new(product_id))?;
    let service = CartService::new(store);
    let outcome = service.add_to_cart(Identity::from(user), &product, quantity)?;

    if outcome.clamped {
        tracing::warn!(
            "Only {} of {} requested units available; cart now holds {}",
            outcome.applied,
            outcome.requested,
            outcome.applied
        );
    } else {
        tracing::info!("Added {} x {}", quantity, product.name);
    }
    tracing::info!("Cart holds {} items", outcome.cart.total_items());
    Ok(())
}

/// Set the quantity of a cart item; 0 removes it.
pub fn update(
    store: &JsonFileStore,
    user: Option<UserId>,
    product_id: i32,
    quantity: u32,
) -> Result<(), CliError> {
    let service = CartService::new(store);
    let cart = service.update_item(Identity::from(user), ProductId::new(product_id), quantity)?;
    tracing::info!("Cart holds {} items", cart.total_items());
    Ok(())
}

/// Remove a product from the cart.
pub fn remove(
    store: &JsonFileStore,
    user: Option<UserId>,
    product_id: i32,
) -> Result<(), CliError> {
    let service = CartService::new(store);
    let cart = service.remove_item(Identity::from(user), ProductId::new(product_id))?;
    tracing::info!("Cart holds {} items", cart.total_items());
    Ok(())
}

/// Delete the cart blob entirely.
pub fn clear(store: &JsonFileStore, user: Option<UserId>) -> Result<(), CliError> {
    let service = CartService::new(store);
    service.clear_cart(Identity::from(user))?;
    tracing::info!("Cart cleared");
    Ok(())
}

/// Merge the guest cart into the signed-in user's cart.
pub fn migrate(store: &JsonFileStore, user: Option<UserId>) -> Result<(), CliError> {
    let user_id = user.ok_or(CliError::UserRequired)?;
    let service = CartService::new(store);
    let cart = service.migrate_guest_cart(user_id)?;
    tracing::info!(
        "Guest cart merged; user {} cart holds {} items",
        user_id,
        cart.total_items()
    );
    Ok(())
}
