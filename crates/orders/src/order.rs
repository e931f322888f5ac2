//! Order record types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use autoparts_cart::SnapshotLine;
use autoparts_core::{OrderStatus, PaymentMethod, ShippingMethod, UserId};

/// Public reference for a placed order (`ORD-…`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderRef(String);

impl OrderRef {
    /// Generate a new unique reference.
    #[must_use]
    pub fn generate() -> Self {
        Self(format!("ORD-{}", Uuid::new_v4().simple()))
    }

    /// The reference as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OrderRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for OrderRef {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Carrier tracking reference (`TRK-…`), assigned when an order ships.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackingNumber(String);

impl TrackingNumber {
    /// Generate a new tracking number.
    #[must_use]
    pub fn generate() -> Self {
        Self(format!("TRK-{}", Uuid::new_v4().simple()))
    }

    /// The tracking number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TrackingNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Delivery address captured at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingAddress {
    pub recipient_name: String,
    pub phone: String,
    pub street: String,
    pub number: String,
    pub reference: Option<String>,
    /// District name; drives the remote-district shipping surcharge.
    pub district: String,
}

/// An immutable order record.
///
/// Monetary fields are frozen at creation; only `status`,
/// `tracking_number`, and `updated_at` change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderRef,
    pub user_id: UserId,
    pub items: Vec<SnapshotLine>,
    pub shipping_address: ShippingAddress,
    pub shipping_method: ShippingMethod,
    pub payment_method: PaymentMethod,
    pub subtotal: Decimal,
    pub shipping_cost: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
    pub status: OrderStatus,
    pub tracking_number: Option<TrackingNumber>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
