//! Cart operations.
//!
//! Every operation is a pure function of `(stored blob, identity, arguments)`
//! that persists the new blob before returning, so the engine holds no state
//! of its own between calls.

use tracing::{debug, warn};

use autoparts_core::{Product, ProductId, UserId};

use crate::cart::{Cart, CartItem};
use crate::error::CartError;
use crate::identity::Identity;
use crate::store::KeyValueStore;

/// Result of an `add_to_cart` call.
///
/// Clamping is silent at the engine level; the requested and applied
/// quantities are exposed here so the UI layer can decide whether to tell
/// the user their quantity was reduced.
#[derive(Debug, Clone)]
pub struct AddOutcome {
    pub cart: Cart,
    /// Quantity the caller asked to add.
    pub requested: u32,
    /// Final line quantity after clamping (0 when nothing could be added).
    pub applied: u32,
    /// Whether the stock bound reduced the requested quantity.
    pub clamped: bool,
}

/// The cart & order totals engine over a key-value store.
pub struct CartService<'a, S> {
    store: &'a S,
}

impl<'a, S: KeyValueStore> CartService<'a, S> {
    /// Create a service over `store`.
    #[must_use]
    pub const fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Load the cart for `identity`.
    ///
    /// An absent or unparsable blob yields a fresh empty cart - corrupt data
    /// is recovered locally, never surfaced.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Store`] only for I/O faults.
    pub fn get_cart(&self, identity: Identity) -> Result<Cart, CartError> {
        let key = identity.cart_key();
        match self.store.get(&key)? {
            Some(blob) => match serde_json::from_str(&blob) {
                Ok(cart) => Ok(cart),
                Err(e) => {
                    warn!(%key, error = %e, "unparsable cart blob, starting fresh");
                    Ok(Cart::empty())
                }
            },
            None => Ok(Cart::empty()),
        }
    }

    /// Add `requested` units of `product` to the identity's cart.
    ///
    /// If the product is already in the cart its quantity is incremented and
    /// its snapshot refreshed to `product`; otherwise a new item is appended.
    /// The resulting quantity is clamped to the product's stock. A clamp down
    /// to zero (no stock) leaves the product out of the cart entirely.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Store`] if persisting fails.
    pub fn add_to_cart(
        &self,
        identity: Identity,
        product: &Product,
        requested: u32,
    ) -> Result<AddOutcome, CartError> {
        let mut cart = self.get_cart(identity)?;

        let desired = match cart.items.iter_mut().find(|i| i.product.id == product.id) {
            Some(item) => {
                let desired = item.quantity.saturating_add(requested);
                // Re-adding refreshes the snapshot so the clamp runs against
                // current price/stock
                item.product = product.clone();
                item.quantity = desired.min(product.stock);
                desired
            }
            None => {
                cart.items.push(CartItem {
                    product: product.clone(),
                    quantity: requested.min(product.stock),
                });
                requested
            }
        };
        // A clamp down to zero (no stock) leaves the product out entirely
        cart.items.retain(|i| i.quantity > 0);

        let applied = cart.item(product.id).map_or(0, |i| i.quantity);
        let clamped = applied < desired;
        if clamped {
            debug!(
                product_id = %product.id,
                requested = desired,
                applied,
                stock = product.stock,
                "quantity clamped to stock"
            );
        }

        cart.updated_at = chrono::Utc::now();
        self.save(identity, &cart)?;
        Ok(AddOutcome {
            cart,
            requested,
            applied,
            clamped,
        })
    }

    /// Set the quantity of an item, clamped to the stock captured on its
    /// snapshot. A quantity of zero removes the item. Unknown product ids
    /// are a no-op and return the cart unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Store`] if persisting fails.
    pub fn update_item(
        &self,
        identity: Identity,
        product_id: ProductId,
        new_quantity: u32,
    ) -> Result<Cart, CartError> {
        let mut cart = self.get_cart(identity)?;

        let Some(item) = cart.items.iter_mut().find(|i| i.product.id == product_id) else {
            return Ok(cart);
        };

        if new_quantity == 0 {
            item.quantity = 0;
        } else {
            // Clamp against the stock captured on the snapshot, not a live
            // catalog lookup
            item.quantity = new_quantity.min(item.product.stock);
        }
        cart.items.retain(|i| i.quantity > 0);

        cart.updated_at = chrono::Utc::now();
        self.save(identity, &cart)?;
        Ok(cart)
    }

    /// Remove an item. Unknown product ids are a no-op, never an error.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Store`] if persisting fails.
    pub fn remove_item(
        &self,
        identity: Identity,
        product_id: ProductId,
    ) -> Result<Cart, CartError> {
        let mut cart = self.get_cart(identity)?;
        let before = cart.items.len();
        cart.items.retain(|i| i.product.id != product_id);
        if cart.items.len() == before {
            return Ok(cart);
        }

        cart.updated_at = chrono::Utc::now();
        self.save(identity, &cart)?;
        Ok(cart)
    }

    /// Delete the identity's cart blob entirely. A subsequent `get_cart`
    /// returns a newly created empty cart with fresh timestamps.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Store`] if the delete fails.
    pub fn clear_cart(&self, identity: Identity) -> Result<(), CartError> {
        self.store.remove(&identity.cart_key())?;
        Ok(())
    }

    /// Merge the guest cart into `user_id`'s cart, then delete the guest
    /// blob unconditionally.
    ///
    /// Invoked once per login/registration. Colliding products take
    /// `min(guest + user, stock)` using the guest item's snapshot; other
    /// guest items are appended as-is. Calling again with the (now empty)
    /// guest cart is a no-op beyond re-deleting the absent key.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Store`] if persisting fails.
    pub fn migrate_guest_cart(&self, user_id: UserId) -> Result<Cart, CartError> {
        let guest = self.get_cart(Identity::Guest)?;
        let user = Identity::User(user_id);
        let mut cart = self.get_cart(user)?;

        for guest_item in guest.items {
            match cart
                .items
                .iter_mut()
                .find(|i| i.product.id == guest_item.product.id)
            {
                Some(existing) => {
                    existing.quantity = existing
                        .quantity
                        .saturating_add(guest_item.quantity)
                        .min(guest_item.product.stock);
                }
                None => cart.items.push(guest_item),
            }
        }

        cart.updated_at = chrono::Utc::now();
        self.save(user, &cart)?;
        self.store.remove(&Identity::Guest.cart_key())?;
        Ok(cart)
    }

    fn save(&self, identity: Identity, cart: &Cart) -> Result<(), CartError> {
        let blob = serde_json::to_string(cart)?;
        self.store.set(&identity.cart_key(), &blob)?;
        Ok(())
    }
}
