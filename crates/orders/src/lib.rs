//! Autoparts Orders - order ledger and checkout collaborators.
//!
//! The ledger appends immutable order records keyed by user id. At checkout
//! it receives a frozen cart snapshot from the cart engine, combines it with
//! a shipping quote and address, and persists the order. Order status
//! transitions (including tracking-number assignment on shipment) go through
//! the ledger as well.
//!
//! The payment module is a stubbed simulator - there is no gateway
//! integration by design.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod error;
pub mod ledger;
pub mod order;
pub mod payment;
pub mod shipping;

pub use error::OrderError;
pub use ledger::OrderLedger;
pub use order::{Order, OrderRef, ShippingAddress, TrackingNumber};
pub use payment::{PaymentOutcome, PaymentSimulator, TransactionRef};
pub use shipping::{ShippingOption, ShippingQuote};
