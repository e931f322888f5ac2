//! Autoparts Cart - cart state and order totals engine.
//!
//! Owns per-identity cart state (product snapshot + quantity), enforces
//! stock-bound quantity invariants, merges guest carts into user carts on
//! login, and computes monetary summaries consumed by checkout.
//!
//! The engine is stateless between calls: every operation is a
//! read-modify-persist sequence over a single key-value blob, resolved from
//! an explicit [`Identity`]. It performs no catalog lookups of its own -
//! product price and stock travel on the [`CartItem`] snapshot.
//!
//! # Modules
//!
//! - [`store`] - Key-value persistence abstraction (memory and JSON file)
//! - [`service`] - The cart operations
//! - [`cart`] - Cart, summary, and checkout snapshot types

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod error;
pub mod identity;
pub mod service;
pub mod store;

pub use cart::{Cart, CartItem, CartSummary, CheckoutSnapshot, IGV_RATE, SnapshotLine};
pub use error::CartError;
pub use identity::Identity;
pub use service::{AddOutcome, CartService};
pub use store::{JsonFileStore, KeyValueStore, MemoryStore, StoreError};
