//! Stubbed payment processing.
//!
//! There is no gateway integration: payments succeed or fail at random so
//! the checkout flow can be exercised end to end. Do not mistake this for
//! real payment handling.

use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use autoparts_core::PaymentStatus;

/// Gateway transaction reference (`TXN-…`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionRef(String);

impl TransactionRef {
    /// Generate a new transaction reference.
    #[must_use]
    pub fn generate() -> Self {
        Self(format!("TXN-{}", Uuid::new_v4().simple()))
    }

    /// The reference as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TransactionRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Outcome of a simulated payment attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentOutcome {
    pub status: PaymentStatus,
    /// Present only on success.
    pub transaction: Option<TransactionRef>,
    pub message: String,
}

impl PaymentOutcome {
    /// Whether the payment went through.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self.status, PaymentStatus::Completed)
    }
}

/// Random-success payment simulator.
#[derive(Debug, Clone, Copy)]
pub struct PaymentSimulator {
    success_rate: f64,
}

impl Default for PaymentSimulator {
    /// 90% success, matching the demo behavior of the storefront.
    fn default() -> Self {
        Self { success_rate: 0.9 }
    }
}

impl PaymentSimulator {
    /// Simulator with a fixed success probability in `[0, 1]`.
    #[must_use]
    pub const fn with_success_rate(success_rate: f64) -> Self {
        Self { success_rate }
    }

    /// Simulate processing a payment.
    #[must_use]
    pub fn process(&self) -> PaymentOutcome {
        if rand::rng().random_bool(self.success_rate.clamp(0.0, 1.0)) {
            PaymentOutcome {
                status: PaymentStatus::Completed,
                transaction: Some(TransactionRef::generate()),
                message: "Payment processed successfully".to_string(),
            }
        } else {
            PaymentOutcome {
                status: PaymentStatus::Failed,
                transaction: None,
                message: "Payment could not be processed, please try again".to_string(),
            }
        }
    }
}
