//! Product snapshot type.
//!
//! Cart items carry a snapshot of the product as it looked when the item was
//! added. Price and stock are captured at add-time; the cart engine never
//! queries the catalog itself.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::{BrandId, PieceId, ProductId, VehicleModelId};

/// Availability state of a catalog product.
///
/// The legacy system stored this as a free-form string; here it is a closed
/// enum with a strict parse at the persistence boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Availability {
    #[default]
    Available,
    OutOfStock,
    Discontinued,
}

impl Availability {
    /// Whether the product can be placed in a cart at all.
    #[must_use]
    pub const fn is_sellable(&self) -> bool {
        matches!(self, Self::Available)
    }
}

/// A catalog product as snapshotted into a cart item.
///
/// `price` is a non-negative decimal in the store currency and `stock` is the
/// units on hand when the snapshot was taken. Quantity clamping always uses
/// the snapshot's `stock`, not a live catalog lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    /// Store-assigned product code (e.g. `"AP-00123"`).
    pub code: String,
    pub name: String,
    pub brand_id: BrandId,
    pub vehicle_model_id: VehicleModelId,
    pub piece_id: PieceId,
    pub price: Decimal,
    pub stock: u32,
    pub availability: Availability,
}

impl Product {
    /// Line subtotal for `quantity` units of this product.
    #[must_use]
    pub fn line_subtotal(&self, quantity: u32) -> Decimal {
        self.price * Decimal::from(quantity)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn brake_pad() -> Product {
        Product {
            id: ProductId::new(1),
            code: "AP-00001".to_string(),
            name: "Brake pad set".to_string(),
            brand_id: BrandId::new(1),
            vehicle_model_id: VehicleModelId::new(1),
            piece_id: PieceId::new(1),
            price: Decimal::new(4990, 2),
            stock: 12,
            availability: Availability::Available,
        }
    }

    #[test]
    fn test_line_subtotal() {
        let product = brake_pad();
        assert_eq!(product.line_subtotal(3), Decimal::new(14970, 2));
        assert_eq!(product.line_subtotal(0), Decimal::ZERO);
    }

    #[test]
    fn test_availability_sellable() {
        assert!(Availability::Available.is_sellable());
        assert!(!Availability::OutOfStock.is_sellable());
        assert!(!Availability::Discontinued.is_sellable());
    }

    #[test]
    fn test_availability_serde_format() {
        let json = serde_json::to_string(&Availability::OutOfStock).unwrap();
        assert_eq!(json, "\"OUT_OF_STOCK\"");
    }
}
