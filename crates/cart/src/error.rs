//! Cart engine error taxonomy.
//!
//! Almost everything degrades gracefully instead of erroring: malformed
//! persisted blobs become empty carts, unknown product ids are no-ops, and
//! over-quantity requests are clamped. The exceptions below indicate caller
//! misuse or storage faults, not end-user input.

use autoparts_core::ProductId;

use crate::store::StoreError;

/// Errors surfaced by cart operations.
#[derive(Debug, thiserror::Error)]
pub enum CartError {
    /// The caller asked for a product id with no catalog entry at all.
    ///
    /// Raised at the catalog boundary before a snapshot reaches the engine;
    /// the engine never fabricates a zero-priced item.
    #[error("product {0} does not exist in the catalog")]
    ProductNotFound(ProductId),

    /// The persistence layer failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A cart blob could not be encoded for persistence.
    #[error("failed to encode cart blob: {0}")]
    Serialization(#[from] serde_json::Error),
}
