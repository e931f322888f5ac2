//! Order ledger errors.

use autoparts_cart::StoreError;

use crate::order::OrderRef;

/// Errors surfaced by ledger operations.
#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    /// No order with this reference exists for the user.
    #[error("order {0} not found")]
    OrderNotFound(OrderRef),

    /// The persistence layer failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// An order blob could not be encoded for persistence.
    #[error("failed to encode order blob: {0}")]
    Serialization(#[from] serde_json::Error),
}
