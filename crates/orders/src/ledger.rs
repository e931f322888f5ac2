//! The order ledger.
//!
//! Orders are appended to a per-user JSON blob under `orders:<user-id>`.
//! Records are immutable apart from status transitions; monetary fields are
//! frozen at creation time.

use chrono::Utc;
use tracing::{info, warn};

use autoparts_cart::{CheckoutSnapshot, IGV_RATE, KeyValueStore};
use autoparts_core::{OrderStatus, PaymentMethod, ShippingMethod, UserId};

use crate::error::OrderError;
use crate::order::{Order, OrderRef, ShippingAddress, TrackingNumber};
use crate::shipping::ShippingQuote;

fn orders_key(user_id: UserId) -> String {
    format!("orders:{user_id}")
}

/// Append-only order store over a key-value backend.
pub struct OrderLedger<'a, S> {
    store: &'a S,
}

impl<'a, S: KeyValueStore> OrderLedger<'a, S> {
    /// Create a ledger over `store`.
    #[must_use]
    pub const fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Create a new pending order from a checkout snapshot.
    ///
    /// Shipping cost comes from the quote for `method` and `address`; tax is
    /// recomputed from the snapshot subtotal at the fixed IGV rate.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::Store`] if persisting fails.
    pub fn create_order(
        &self,
        user_id: UserId,
        snapshot: CheckoutSnapshot,
        address: ShippingAddress,
        shipping_method: ShippingMethod,
        payment_method: PaymentMethod,
    ) -> Result<Order, OrderError> {
        let mut orders = self.orders_for(user_id)?;

        let shipping_cost = ShippingQuote::cost_for(shipping_method, &address);
        let subtotal = snapshot.cart_subtotal;
        let tax = subtotal * IGV_RATE;
        let now = Utc::now();

        let order = Order {
            id: OrderRef::generate(),
            user_id,
            items: snapshot.items,
            shipping_address: address,
            shipping_method,
            payment_method,
            subtotal,
            shipping_cost,
            tax,
            total: subtotal + shipping_cost + tax,
            status: OrderStatus::Pending,
            tracking_number: None,
            created_at: now,
            updated_at: now,
        };

        info!(order = %order.id, user = %user_id, total = %order.total, "order created");
        orders.push(order.clone());
        self.save(user_id, &orders)?;
        Ok(order)
    }

    /// All orders for a user, oldest first. Absent or unparsable blobs yield
    /// an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::Store`] only for I/O faults.
    pub fn orders_for(&self, user_id: UserId) -> Result<Vec<Order>, OrderError> {
        let key = orders_key(user_id);
        match self.store.get(&key)? {
            Some(blob) => match serde_json::from_str(&blob) {
                Ok(orders) => Ok(orders),
                Err(e) => {
                    warn!(%key, error = %e, "unparsable orders blob, treating as empty");
                    Ok(Vec::new())
                }
            },
            None => Ok(Vec::new()),
        }
    }

    /// Look up one order by reference.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::Store`] only for I/O faults.
    pub fn order_by_id(
        &self,
        user_id: UserId,
        order_ref: &OrderRef,
    ) -> Result<Option<Order>, OrderError> {
        Ok(self
            .orders_for(user_id)?
            .into_iter()
            .find(|o| &o.id == order_ref))
    }

    /// Orders currently in `status`.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::Store`] only for I/O faults.
    pub fn orders_with_status(
        &self,
        user_id: UserId,
        status: OrderStatus,
    ) -> Result<Vec<Order>, OrderError> {
        Ok(self
            .orders_for(user_id)?
            .into_iter()
            .filter(|o| o.status == status)
            .collect())
    }

    /// Transition an order to `status`.
    ///
    /// The first transition to `Shipped` assigns a tracking number.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::OrderNotFound`] for an unknown reference and
    /// [`OrderError::Store`] if persisting fails.
    pub fn update_status(
        &self,
        user_id: UserId,
        order_ref: &OrderRef,
        status: OrderStatus,
    ) -> Result<Order, OrderError> {
        let mut orders = self.orders_for(user_id)?;

        let Some(order) = orders.iter_mut().find(|o| &o.id == order_ref) else {
            return Err(OrderError::OrderNotFound(order_ref.clone()));
        };

        order.status = status;
        order.updated_at = Utc::now();
        if status == OrderStatus::Shipped && order.tracking_number.is_none() {
            order.tracking_number = Some(TrackingNumber::generate());
        }
        let updated = order.clone();

        self.save(user_id, &orders)?;
        Ok(updated)
    }

    fn save(&self, user_id: UserId, orders: &[Order]) -> Result<(), OrderError> {
        let blob = serde_json::to_string(orders)?;
        self.store.set(&orders_key(user_id), &blob)?;
        Ok(())
    }
}
