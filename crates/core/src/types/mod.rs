//! Core types for the autoparts workspace.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod product;
pub mod status;

pub use id::*;
pub use product::{Availability, Product};
pub use status::*;
