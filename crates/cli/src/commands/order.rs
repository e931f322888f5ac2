//! Checkout and order history commands.

use autoparts_cart::{CartService, Identity, JsonFileStore};
use autoparts_core::{OrderStatus, PaymentMethod, ShippingMethod, UserId};
use autoparts_orders::{Order, OrderLedger, OrderRef, PaymentSimulator, ShippingAddress};

use super::CliError;

/// Turn the signed-in user's cart into an order.
///
/// Runs the (stubbed) payment first; on success the order is appended to
/// the ledger and the cart blob deleted.
pub fn checkout(
    store: &JsonFileStore,
    user: Option<UserId>,
    address: ShippingAddress,
    shipping: ShippingMethod,
    payment: PaymentMethod,
) -> Result<(), CliError> {
    let user_id = user.ok_or(CliError::UserRequired)?;
    let identity = Identity::User(user_id);

    let service = CartService::new(store);
    let cart = service.get_cart(identity)?;
    if cart.is_empty() {
        return Err(CliError::EmptyCart);
    }

    let outcome = PaymentSimulator::default().process();
    if !outcome.is_success() {
        return Err(CliError::PaymentFailed(outcome.message));
    }

    let ledger = OrderLedger::new(store);
    let order = ledger.create_order(user_id, cart.checkout_snapshot(), address, shipping, payment)?;
    service.clear_cart(identity)?;

    if let Some(txn) = outcome.transaction {
        tracing::info!("Payment accepted ({txn})");
    }
    print_order(&order);
    Ok(())
}

/// List the user's orders, oldest first.
pub fn list(store: &JsonFileStore, user: Option<UserId>) -> Result<(), CliError> {
    let user_id = user.ok_or(CliError::UserRequired)?;
    let ledger = OrderLedger::new(store);
    let orders = ledger.orders_for(user_id)?;

    if orders.is_empty() {
        tracing::info!("No orders yet");
        return Ok(());
    }

    for order in orders {
        tracing::info!(
            "  {} - {} - S/ {:.2} - {}",
            order.id,
            order.created_at.format("%Y-%m-%d"),
            order.total,
            order.status
        );
    }
    Ok(())
}

/// Show one order by reference.
pub fn show(store: &JsonFileStore, user: Option<UserId>, order_ref: &str) -> Result<(), CliError> {
    let user_id = user.ok_or(CliError::UserRequired)?;
    let ledger = OrderLedger::new(store);
    let order_ref = OrderRef::from(order_ref.to_owned());

    match ledger.order_by_id(user_id, &order_ref)? {
        Some(order) => print_order(&order),
        None => tracing::info!("Order {order_ref} not found"),
    }
    Ok(())
}

/// Transition an order's status.
pub fn set_status(
    store: &JsonFileStore,
    user: Option<UserId>,
    order_ref: &str,
    status: OrderStatus,
) -> Result<(), CliError> {
    let user_id = user.ok_or(CliError::UserRequired)?;
    let ledger = OrderLedger::new(store);
    let order = ledger.update_status(user_id, &OrderRef::from(order_ref.to_owned()), status)?;

    tracing::info!("Order {} is now {}", order.id, order.status);
    if let Some(tracking) = order.tracking_number {
        tracing::info!("Tracking number: {tracking}");
    }
    Ok(())
}

fn print_order(order: &Order) {
    tracing::info!("Order {} ({})", order.id, order.status);
    for line in &order.items {
        tracing::info!(
            "  #{} x{} @ S/ {:.2} = S/ {:.2}",
            line.product_id,
            line.quantity,
            line.unit_price,
            line.subtotal
        );
    }
    tracing::info!("  Subtotal: S/ {:.2}", order.subtotal);
    tracing::info!(
        "  Shipping ({}): S/ {:.2}",
        order.shipping_method,
        order.shipping_cost
    );
    tracing::info!("  IGV (18%): S/ {:.2}", order.tax);
    tracing::info!("  Total: S/ {:.2}", order.total);
    if let Some(tracking) = &order.tracking_number {
        tracing::info!("  Tracking: {tracking}");
    }
}
