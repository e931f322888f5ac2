//! CLI command implementations.

pub mod cart;
pub mod catalog;
pub mod order;

use autoparts_cart::{CartError, StoreError};
use autoparts_orders::OrderError;

/// Errors surfaced to the CLI user.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Cart engine failure.
    #[error(transparent)]
    Cart(#[from] CartError),

    /// Order ledger failure.
    #[error(transparent)]
    Order(#[from] OrderError),

    /// Store failure outside the engine (catalog access).
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The command needs a signed-in user.
    #[error("this command requires --user <id>")]
    UserRequired,

    /// Checkout was attempted with nothing in the cart.
    #[error("the cart is empty, nothing to check out")]
    EmptyCart,

    /// The simulated payment was declined.
    #[error("payment failed: {0}")]
    PaymentFailed(String),
}
