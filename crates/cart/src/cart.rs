//! Cart data model and totals arithmetic.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use autoparts_core::{Product, ProductId};

/// Fixed value-added-tax rate (Peruvian IGV, 18%).
///
/// A domain constant, not configuration.
pub const IGV_RATE: Decimal = Decimal::from_parts(18, 0, 0, false, 2);

/// One product selection in a cart.
///
/// `product` is the snapshot captured when the item entered the cart; the
/// invariant `1 <= quantity <= product.stock` holds after every mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub product: Product,
    pub quantity: u32,
}

impl CartItem {
    /// Line subtotal: `price * quantity`.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.product.line_subtotal(self.quantity)
    }
}

/// A per-identity cart, persisted as a single JSON blob.
///
/// Items are ordered by insertion and unique by product id - adding an
/// existing product increments its quantity instead of appending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    pub items: Vec<CartItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Cart {
    /// A fresh empty cart with both timestamps set to now.
    #[must_use]
    pub fn empty() -> Self {
        let now = Utc::now();
        Self {
            items: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether the cart holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The item for `product_id`, if present.
    #[must_use]
    pub fn item(&self, product_id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|i| i.product.id == product_id)
    }

    /// Total unit count across all items (badge count). Zero for an empty cart.
    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Sum of line subtotals. Zero for an empty cart.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.items.iter().map(CartItem::subtotal).sum()
    }

    /// Monetary breakdown for the current items plus an externally supplied
    /// shipping cost. Always recomputed, never cached.
    #[must_use]
    pub fn summary(&self, shipping: Decimal) -> CartSummary {
        let subtotal = self.subtotal();
        let tax = subtotal * IGV_RATE;
        CartSummary {
            subtotal,
            shipping,
            tax,
            total: subtotal + shipping + tax,
        }
    }

    /// Freeze the cart into the shape the order ledger consumes.
    #[must_use]
    pub fn checkout_snapshot(&self) -> CheckoutSnapshot {
        let items: Vec<SnapshotLine> = self
            .items
            .iter()
            .map(|i| SnapshotLine {
                product_id: i.product.id,
                quantity: i.quantity,
                unit_price: i.product.price,
                subtotal: i.subtotal(),
            })
            .collect();
        let cart_subtotal: Decimal = items.iter().map(|l| l.subtotal).sum();
        CheckoutSnapshot {
            cart_tax: cart_subtotal * IGV_RATE,
            cart_subtotal,
            items,
        }
    }
}

/// Derived monetary breakdown; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartSummary {
    pub subtotal: Decimal,
    pub shipping: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

/// One frozen line of a checkout snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotLine {
    pub product_id: ProductId,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub subtotal: Decimal,
}

/// The cart contents and totals handed to the order ledger at checkout.
///
/// The ledger combines this with a shipping cost and address to persist an
/// immutable order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutSnapshot {
    pub items: Vec<SnapshotLine>,
    pub cart_subtotal: Decimal,
    pub cart_tax: Decimal,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use autoparts_core::{Availability, BrandId, PieceId, VehicleModelId};

    fn product(id: i32, price: Decimal, stock: u32) -> Product {
        Product {
            id: ProductId::new(id),
            code: format!("AP-{id:05}"),
            name: format!("part {id}"),
            brand_id: BrandId::new(1),
            vehicle_model_id: VehicleModelId::new(1),
            piece_id: PieceId::new(1),
            price,
            stock,
            availability: Availability::Available,
        }
    }

    #[test]
    fn test_igv_rate_value() {
        assert_eq!(IGV_RATE, Decimal::new(18, 2));
    }

    #[test]
    fn test_empty_cart_totals() {
        let cart = Cart::empty();
        assert_eq!(cart.total_items(), 0);
        let summary = cart.summary(Decimal::new(1500, 2));
        assert_eq!(summary.subtotal, Decimal::ZERO);
        assert_eq!(summary.tax, Decimal::ZERO);
        assert_eq!(summary.total, Decimal::new(1500, 2));
    }

    #[test]
    fn test_summary_matches_spec_scenario() {
        // product A: price 10.00, qty 2, shipping 15
        let mut cart = Cart::empty();
        cart.items.push(CartItem {
            product: product(1, Decimal::new(1000, 2), 5),
            quantity: 2,
        });

        assert_eq!(cart.total_items(), 2);
        let summary = cart.summary(Decimal::new(1500, 2));
        assert_eq!(summary.subtotal, Decimal::new(2000, 2));
        assert_eq!(summary.tax, Decimal::new(360, 2));
        assert_eq!(summary.total, Decimal::new(3860, 2));
    }

    #[test]
    fn test_total_is_subtotal_plus_shipping_plus_tax() {
        let mut cart = Cart::empty();
        cart.items.push(CartItem {
            product: product(1, Decimal::new(725, 2), 9),
            quantity: 3,
        });
        cart.items.push(CartItem {
            product: product(2, Decimal::new(12050, 2), 2),
            quantity: 1,
        });

        let shipping = Decimal::new(2500, 2);
        let summary = cart.summary(shipping);
        assert_eq!(
            summary.total,
            summary.subtotal + shipping + summary.subtotal * IGV_RATE
        );
    }

    #[test]
    fn test_total_items_equals_quantity_sum() {
        let mut cart = Cart::empty();
        cart.items.push(CartItem {
            product: product(1, Decimal::ONE, 10),
            quantity: 4,
        });
        cart.items.push(CartItem {
            product: product(2, Decimal::ONE, 10),
            quantity: 6,
        });
        assert_eq!(cart.total_items(), 10);
    }

    #[test]
    fn test_checkout_snapshot_lines() {
        let mut cart = Cart::empty();
        cart.items.push(CartItem {
            product: product(1, Decimal::new(1000, 2), 5),
            quantity: 2,
        });

        let snapshot = cart.checkout_snapshot();
        assert_eq!(snapshot.items.len(), 1);
        let line = snapshot.items.first().unwrap();
        assert_eq!(line.product_id, ProductId::new(1));
        assert_eq!(line.quantity, 2);
        assert_eq!(line.unit_price, Decimal::new(1000, 2));
        assert_eq!(line.subtotal, Decimal::new(2000, 2));
        assert_eq!(snapshot.cart_subtotal, Decimal::new(2000, 2));
        assert_eq!(snapshot.cart_tax, Decimal::new(360, 2));
    }
}
