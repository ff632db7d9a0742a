//! Order lifecycle manager.
//!
//! Owns the persisted order history (most-recent-first) and the
//! current-order pointer. Placement snapshots the cart, assigns the
//! guest identity, computes the taxed total and clears the cart;
//! cancellation is the only mutation a placed order ever sees.

use chrono::Utc;
use thiserror::Error;
use tracing::warn;

use crate::cart_store::CartStore;
use crate::guest;
use crate::models::{Order, OrderDetails, OrderStatus};
use crate::storage::{LocalStore, StorageError, StoreKey};

/// Errors surfaced by order placement and cancellation.
#[derive(Debug, Error)]
pub enum OrderError {
    #[error("Your cart is empty")]
    EmptyCart,

    #[error("An order is already being placed")]
    PlacementInProgress,

    #[error("Failed to persist order: {0}")]
    Storage(#[from] StorageError),
}

/// The order book: persisted order history plus the current order.
#[derive(Debug)]
pub struct OrderBook {
    store: LocalStore,
    /// Most-recent-first
    orders: Vec<Order>,
    /// Id of the order considered still in flight, if any
    current: Option<String>,
    /// Single-flight guard against a double-submitted placement
    placing: bool,
}

impl OrderBook {
    /// Restores the order history from local storage.
    ///
    /// Missing or malformed prior state falls back to an empty
    /// history. The current order is recomputed: the most recent
    /// order qualifies only if it was placed within the last two
    /// hours and is still active.
    pub fn load(store: LocalStore) -> Self {
        let orders = match store.read::<Vec<Order>>(StoreKey::Orders) {
            Ok(Some(orders)) => orders,
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(error = %e, "discarding unreadable order history");
                Vec::new()
            }
        };

        let now = Utc::now();
        let current = orders
            .first()
            .filter(|o| o.is_current_at(now))
            .map(|o| o.id.clone());

        Self {
            store,
            orders,
            current,
            placing: false,
        }
    }

    /// Order history, most recent first.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn find(&self, id: &str) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == id)
    }

    /// The order still considered in flight, if any.
    pub fn current_order(&self) -> Option<&Order> {
        self.current.as_deref().and_then(|id| self.find(id))
    }

    /// Place an order from the current cart and customer details.
    ///
    /// Fails on an empty cart without touching any state, and while
    /// another placement is in flight. On success the new order is
    /// prepended to the history, becomes the current order, the
    /// history is persisted and the cart is cleared. Returns the new
    /// order id.
    pub fn place_order(
        &mut self,
        cart: &mut CartStore,
        details: &OrderDetails,
    ) -> Result<String, OrderError> {
        if cart.is_empty() {
            return Err(OrderError::EmptyCart);
        }
        if self.placing {
            return Err(OrderError::PlacementInProgress);
        }

        self.placing = true;
        let result = self.place_order_inner(cart, details);
        self.placing = false;
        result
    }

    fn place_order_inner(
        &mut self,
        cart: &mut CartStore,
        details: &OrderDetails,
    ) -> Result<String, OrderError> {
        let guest_id = guest::get_or_create(&self.store)?;
        let order = Order::new(guest_id, cart.snapshot(), details);
        let order_id = order.id.clone();

        self.orders.insert(0, order);
        self.current = Some(order_id.clone());
        self.store.write(StoreKey::Orders, &self.orders)?;

        // Cart and orders live in separate files; a crash between the
        // write above and this clear leaves both intact, never neither.
        cart.clear();

        Ok(order_id)
    }

    /// Cancel the order with the given id.
    ///
    /// Unknown ids leave the history unchanged. Cancelling the current
    /// order also clears the current-order pointer.
    pub fn cancel_order(&mut self, order_id: &str) -> Result<(), OrderError> {
        if let Some(order) = self.orders.iter_mut().find(|o| o.id == order_id) {
            order.status = OrderStatus::Cancelled;
        }

        if self.current.as_deref() == Some(order_id) {
            self.current = None;
        }

        self.store.write(StoreKey::Orders, &self.orders)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CartItem;
    use chrono::Duration;
    use tempfile::TempDir;

    fn test_store() -> (LocalStore, TempDir) {
        let dir = TempDir::new().unwrap();
        (LocalStore::new(dir.path().to_path_buf()), dir)
    }

    fn details() -> OrderDetails {
        OrderDetails {
            customer_name: Some("Ada".to_string()),
            customer_phone: Some("555-0100".to_string()),
            customer_email: Some("ada@example.com".to_string()),
            ..Default::default()
        }
    }

    fn loaded_cart(store: &LocalStore, items: &[(f64, u32)]) -> CartStore {
        let mut cart = CartStore::load(store.clone());
        for (i, (price, qty)) in items.iter().enumerate() {
            cart.add_item(CartItem::new(format!("{}", i), format!("Item {}", i), *price, *qty));
        }
        cart
    }

    #[test]
    fn test_place_order_empty_cart_fails_without_mutation() {
        let (store, _dir) = test_store();
        let mut cart = CartStore::load(store.clone());
        let mut book = OrderBook::load(store.clone());

        let result = book.place_order(&mut cart, &details());
        assert!(matches!(result, Err(OrderError::EmptyCart)));
        assert!(book.orders().is_empty());
        assert!(!store.exists(StoreKey::Orders));
    }

    #[test]
    fn test_place_order_happy_path() {
        let (store, _dir) = test_store();
        let mut cart = loaded_cart(&store, &[(40.0, 2), (20.0, 1)]);
        let mut book = OrderBook::load(store.clone());

        let order_id = book.place_order(&mut cart, &details()).unwrap();

        let order = book.find(&order_id).unwrap();
        assert_eq!(order.total, 108.0);
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.customer_name, "Ada");
        assert_eq!(order.items.len(), 2);

        // Cart cleared, order current, history persisted
        assert!(cart.is_empty());
        assert_eq!(book.current_order().unwrap().id, order_id);
        let persisted: Vec<Order> = store.read(StoreKey::Orders).unwrap().unwrap();
        assert_eq!(persisted[0].id, order_id);
    }

    #[test]
    fn test_orders_are_most_recent_first() {
        let (store, _dir) = test_store();
        let mut book = OrderBook::load(store.clone());

        let mut cart = loaded_cart(&store, &[(10.0, 1)]);
        let first = book.place_order(&mut cart, &details()).unwrap();

        cart.add_item(CartItem::new("9", "Espresso", 2.5, 1));
        let second = book.place_order(&mut cart, &details()).unwrap();

        assert_eq!(book.orders()[0].id, second);
        assert_eq!(book.orders()[1].id, first);
    }

    #[test]
    fn test_placed_order_is_immune_to_later_cart_mutation() {
        let (store, _dir) = test_store();
        let mut cart = loaded_cart(&store, &[(10.0, 2)]);
        let mut book = OrderBook::load(store.clone());

        let order_id = book.place_order(&mut cart, &details()).unwrap();
        cart.add_item(CartItem::new("0", "Item 0", 99.0, 9));

        let order = book.find(&order_id).unwrap();
        assert_eq!(order.items[0].price, 10.0);
        assert_eq!(order.items[0].quantity, 2);
    }

    #[test]
    fn test_guest_id_is_stable_across_orders() {
        let (store, _dir) = test_store();
        let mut book = OrderBook::load(store.clone());

        let mut cart = loaded_cart(&store, &[(10.0, 1)]);
        let first = book.place_order(&mut cart, &details()).unwrap();
        cart.add_item(CartItem::new("9", "Espresso", 2.5, 1));
        let second = book.place_order(&mut cart, &details()).unwrap();

        let a = book.find(&first).unwrap().guest_id.clone();
        let b = book.find(&second).unwrap().guest_id.clone();
        assert_eq!(a, b);
        assert!(a.starts_with("guest_"));
    }

    #[test]
    fn test_cancel_order() {
        let (store, _dir) = test_store();
        let mut cart = loaded_cart(&store, &[(10.0, 1)]);
        let mut book = OrderBook::load(store.clone());
        let order_id = book.place_order(&mut cart, &details()).unwrap();

        book.cancel_order(&order_id).unwrap();

        let order = book.find(&order_id).unwrap();
        assert_eq!(order.status, OrderStatus::Cancelled);
        // Cancelling the current order clears the pointer
        assert!(book.current_order().is_none());
        // updatedAt stays untouched by local mutations
        assert_eq!(order.created_at, order.updated_at);
    }

    #[test]
    fn test_cancel_unknown_id_changes_nothing() {
        let (store, _dir) = test_store();
        let mut cart = loaded_cart(&store, &[(10.0, 1)]);
        let mut book = OrderBook::load(store.clone());
        let order_id = book.place_order(&mut cart, &details()).unwrap();

        let before = book.orders().to_vec();
        book.cancel_order("order_nope").unwrap();

        assert_eq!(book.orders(), before.as_slice());
        assert_eq!(book.current_order().unwrap().id, order_id);
    }

    #[test]
    fn test_reload_recomputes_current_order() {
        let (store, _dir) = test_store();
        let mut cart = loaded_cart(&store, &[(10.0, 1)]);
        let mut book = OrderBook::load(store.clone());
        let order_id = book.place_order(&mut cart, &details()).unwrap();

        // Fresh pending order: current after reload
        let book = OrderBook::load(store.clone());
        assert_eq!(book.current_order().unwrap().id, order_id);

        // Age it past the window: no longer current
        let mut orders: Vec<Order> = store.read(StoreKey::Orders).unwrap().unwrap();
        orders[0].created_at = Utc::now() - Duration::hours(3);
        store.write(StoreKey::Orders, &orders).unwrap();
        let book = OrderBook::load(store.clone());
        assert!(book.current_order().is_none());

        // Recent but delivered: not current either
        orders[0].created_at = Utc::now();
        orders[0].status = OrderStatus::Delivered;
        store.write(StoreKey::Orders, &orders).unwrap();
        let book = OrderBook::load(store);
        assert!(book.current_order().is_none());
    }

    #[test]
    fn test_reload_roundtrips_history() {
        let (store, _dir) = test_store();
        let mut cart = loaded_cart(&store, &[(12.5, 2), (3.25, 4)]);
        let mut book = OrderBook::load(store.clone());
        book.place_order(&mut cart, &details()).unwrap();

        let reloaded = OrderBook::load(store);
        assert_eq!(reloaded.orders(), book.orders());
    }

    #[test]
    fn test_malformed_history_falls_back_to_empty() {
        let (store, _dir) = test_store();
        std::fs::create_dir_all(store.data_dir()).unwrap();
        std::fs::write(store.path(StoreKey::Orders), "[{broken").unwrap();

        let book = OrderBook::load(store);
        assert!(book.orders().is_empty());
        assert!(book.current_order().is_none());
    }

    #[test]
    fn test_placement_guard_blocks_reentry() {
        let (store, _dir) = test_store();
        let mut cart = loaded_cart(&store, &[(10.0, 1)]);
        let mut book = OrderBook::load(store.clone());

        book.placing = true;
        let result = book.place_order(&mut cart, &details());
        assert!(matches!(result, Err(OrderError::PlacementInProgress)));
        assert!(book.orders().is_empty());
        assert!(!cart.is_empty());

        // Guard releases after a completed placement
        book.placing = false;
        book.place_order(&mut cart, &details()).unwrap();
        assert!(!book.placing);
    }
}
