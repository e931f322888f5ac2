//! Autoparts Core - Shared types library.
//!
//! This crate provides common types used across all autoparts components:
//! - `cart` - Cart & order totals engine
//! - `orders` - Order ledger and shipping/payment collaborators
//! - `cli` - Command-line storefront surface
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, product snapshots, and statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
