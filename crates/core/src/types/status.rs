//! Status enums for orders, shipping, and payments.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a placed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Processing => write!(f, "processing"),
            Self::Shipped => write!(f, "shipped"),
            Self::Delivered => write!(f, "delivered"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "processing" => Ok(Self::Processing),
            "shipped" => Ok(Self::Shipped),
            "delivered" => Ok(Self::Delivered),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(format!("invalid order status: {s}")),
        }
    }
}

/// Shipping method selected at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShippingMethod {
    #[default]
    Standard,
    Express,
    StorePickup,
}

impl std::fmt::Display for ShippingMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Standard => write!(f, "standard"),
            Self::Express => write!(f, "express"),
            Self::StorePickup => write!(f, "store_pickup"),
        }
    }
}

impl std::str::FromStr for ShippingMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(Self::Standard),
            "express" => Ok(Self::Express),
            "store_pickup" | "pickup" => Ok(Self::StorePickup),
            _ => Err(format!("invalid shipping method: {s}")),
        }
    }
}

/// Payment method selected at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    #[default]
    Card,
    Cash,
    BankTransfer,
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Card => write!(f, "card"),
            Self::Cash => write!(f, "cash"),
            Self::BankTransfer => write!(f, "bank_transfer"),
        }
    }
}

impl std::str::FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "card" => Ok(Self::Card),
            "cash" => Ok(Self::Cash),
            "bank_transfer" | "transfer" => Ok(Self::BankTransfer),
            _ => Err(format!("invalid payment method: {s}")),
        }
    }
}

/// Outcome status of a payment attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Completed,
    Failed,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_order_status_serde_format() {
        let json = serde_json::to_string(&OrderStatus::Shipped).unwrap();
        assert_eq!(json, "\"SHIPPED\"");
    }

    #[test]
    fn test_order_status_from_str() {
        assert_eq!("delivered".parse::<OrderStatus>().unwrap(), OrderStatus::Delivered);
        assert!("bogus".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn test_shipping_method_aliases() {
        assert_eq!(
            "pickup".parse::<ShippingMethod>().unwrap(),
            ShippingMethod::StorePickup
        );
        assert_eq!(
            "store_pickup".parse::<ShippingMethod>().unwrap(),
            ShippingMethod::StorePickup
        );
    }

    #[test]
    fn test_payment_method_roundtrip() {
        for method in [PaymentMethod::Card, PaymentMethod::Cash, PaymentMethod::BankTransfer] {
            let parsed: PaymentMethod = method.to_string().parse().unwrap();
            assert_eq!(parsed, method);
        }
    }
}
