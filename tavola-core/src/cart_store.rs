//! Persistent cart service.
//!
//! Wraps the in-memory `Cart` and writes the full item sequence back
//! to local storage after every mutation. Mutations never fail:
//! a storage problem is logged and the in-memory state stays
//! authoritative for the session, matching the behavior of a cart
//! whose persistence layer is best-effort.

use tracing::warn;

use crate::models::{Cart, CartItem};
use crate::storage::{LocalStore, StoreKey};

/// The cart store: in-memory cart plus its persistence.
#[derive(Debug)]
pub struct CartStore {
    store: LocalStore,
    cart: Cart,
}

impl CartStore {
    /// Restores the cart from local storage.
    ///
    /// Missing or malformed prior state falls back to an empty cart.
    pub fn load(store: LocalStore) -> Self {
        let cart = match store.read::<Vec<CartItem>>(StoreKey::Cart) {
            Ok(Some(items)) => Cart { items },
            Ok(None) => Cart::new(),
            Err(e) => {
                warn!(error = %e, "discarding unreadable cart state");
                Cart::new()
            }
        };
        Self { store, cart }
    }

    pub fn items(&self) -> &[CartItem] {
        &self.cart.items
    }

    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    pub fn total_items(&self) -> u32 {
        self.cart.total_items()
    }

    pub fn subtotal(&self) -> f64 {
        self.cart.subtotal()
    }

    pub fn find(&self, id: &str) -> Option<&CartItem> {
        self.cart.find(id)
    }

    /// Add a line, replacing any existing line with the same id.
    pub fn add_item(&mut self, item: CartItem) {
        self.cart.add_item(item);
        self.persist();
    }

    /// Set a line's quantity; no-op below 1 or for an unknown id.
    pub fn update_quantity(&mut self, id: &str, quantity: u32) {
        self.cart.update_quantity(id, quantity);
        self.persist();
    }

    /// Remove a line, if present.
    pub fn remove_item(&mut self, id: &str) {
        self.cart.remove_item(id);
        self.persist();
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.cart.clear();
        self.persist();
    }

    /// Take a snapshot of the current items for order placement.
    pub fn snapshot(&self) -> Vec<CartItem> {
        self.cart.items.clone()
    }

    fn persist(&self) {
        if let Err(e) = self.store.write(StoreKey::Cart, &self.cart.items) {
            warn!(error = %e, "failed to persist cart");
        }
    }
}
