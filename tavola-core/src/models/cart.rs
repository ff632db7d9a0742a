//! Cart state: the visitor's selected items pending checkout.
//!
//! The cart is an insertion-ordered list of lines, one per catalog
//! item id. Mutations are total functions over the current state;
//! nothing here can fail.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::money;

/// A single line in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// Catalog item identifier
    pub id: String,
    /// Display name at the time the item was added
    pub name: String,
    /// Unit price, including any selected option surcharges
    pub price: f64,
    /// Number of units, always >= 1
    pub quantity: u32,
    /// Optional display image reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Option name -> selected choice name
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub options: BTreeMap<String, String>,
}

impl CartItem {
    /// Create a cart line with no image and no options.
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: f64, quantity: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            quantity,
            image: None,
            options: BTreeMap::new(),
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn with_options(mut self, options: BTreeMap<String, String>) -> Self {
        self.options = options;
        self
    }

    /// Price x quantity for this line.
    pub fn line_total(&self) -> f64 {
        money::line_total(self.price, self.quantity)
    }
}

impl fmt::Display for CartItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} x{} @ {:.2} = {:.2}",
            self.name,
            self.quantity,
            self.price,
            self.line_total()
        )?;
        if !self.options.is_empty() {
            let opts: Vec<String> = self
                .options
                .iter()
                .map(|(k, v)| format!("{}: {}", k, v))
                .collect();
            write!(f, " ({})", opts.join(", "))?;
        }
        Ok(())
    }
}

/// The visitor's cart.
///
/// Lines keep insertion order, which is also display order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    pub items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line to the cart.
    ///
    /// A line with the same catalog id is replaced in place: quantity,
    /// price and options are overwritten, not merged. Re-adding the
    /// same item therefore never produces a second line.
    pub fn add_item(&mut self, item: CartItem) {
        match self.items.iter_mut().find(|i| i.id == item.id) {
            Some(existing) => *existing = item,
            None => self.items.push(item),
        }
    }

    /// Set the quantity of the line with the given id.
    ///
    /// A no-op when the quantity is below 1 or no line matches.
    pub fn update_quantity(&mut self, id: &str, quantity: u32) {
        if quantity < 1 {
            return;
        }
        if let Some(item) = self.items.iter_mut().find(|i| i.id == id) {
            item.quantity = quantity;
        }
    }

    /// Remove the line with the given id, if present.
    pub fn remove_item(&mut self, id: &str) {
        self.items.retain(|i| i.id != id);
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of quantities over all lines.
    pub fn total_items(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Sum of price x quantity over all lines.
    pub fn subtotal(&self) -> f64 {
        money::cart_subtotal(&self.items)
    }

    pub fn find(&self, id: &str) -> Option<&CartItem> {
        self.items.iter().find(|i| i.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cart_is_empty() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.subtotal(), 0.0);
    }

    #[test]
    fn test_add_item_appends_in_order() {
        let mut cart = Cart::new();
        cart.add_item(CartItem::new("1", "Margherita", 10.0, 1));
        cart.add_item(CartItem::new("2", "Carbonara", 14.0, 2));

        assert_eq!(cart.items.len(), 2);
        assert_eq!(cart.items[0].id, "1");
        assert_eq!(cart.items[1].id, "2");
        assert_eq!(cart.total_items(), 3);
        assert_eq!(cart.subtotal(), 38.0);
    }

    #[test]
    fn test_add_item_same_id_replaces_line() {
        // Re-adding the same catalog item overwrites the existing line;
        // quantities do not accumulate. (A merge-on-re-add variant would
        // yield quantity 4 here; that is not the implemented behavior.)
        let mut cart = Cart::new();
        cart.add_item(CartItem::new("1", "Margherita", 10.0, 1));
        cart.add_item(CartItem::new("1", "Margherita", 10.0, 3));

        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].quantity, 3);
        assert_eq!(cart.total_items(), 3);
        assert_eq!(cart.subtotal(), 30.0);
    }

    #[test]
    fn test_add_item_same_id_different_options_still_replaces() {
        let mut cart = Cart::new();
        let mut opts = BTreeMap::new();
        opts.insert("Size".to_string(), "Large".to_string());

        cart.add_item(CartItem::new("1", "Margherita", 10.0, 1));
        cart.add_item(CartItem::new("1", "Margherita", 12.0, 1).with_options(opts.clone()));

        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].price, 12.0);
        assert_eq!(cart.items[0].options, opts);
    }

    #[test]
    fn test_update_quantity() {
        let mut cart = Cart::new();
        cart.add_item(CartItem::new("1", "Margherita", 10.0, 1));

        cart.update_quantity("1", 5);
        assert_eq!(cart.items[0].quantity, 5);
    }

    #[test]
    fn test_update_quantity_below_one_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(CartItem::new("1", "Margherita", 10.0, 2));

        cart.update_quantity("1", 0);
        assert_eq!(cart.items[0].quantity, 2);
    }

    #[test]
    fn test_update_quantity_unknown_id_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(CartItem::new("1", "Margherita", 10.0, 2));

        cart.update_quantity("missing", 7);
        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].quantity, 2);
    }

    #[test]
    fn test_remove_item() {
        let mut cart = Cart::new();
        cart.add_item(CartItem::new("1", "Margherita", 10.0, 1));
        cart.add_item(CartItem::new("2", "Carbonara", 14.0, 1));

        cart.remove_item("1");
        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].id, "2");

        // Removing an absent id changes nothing
        cart.remove_item("missing");
        assert_eq!(cart.items.len(), 1);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add_item(CartItem::new("1", "Margherita", 10.0, 1));
        cart.clear();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_totals_track_every_mutation() {
        let mut cart = Cart::new();
        cart.add_item(CartItem::new("1", "Margherita", 10.0, 2));
        cart.add_item(CartItem::new("2", "Carbonara", 14.5, 1));
        cart.update_quantity("2", 3);
        cart.remove_item("1");

        let expected: f64 = cart
            .items
            .iter()
            .map(|i| i.price * i.quantity as f64)
            .sum();
        assert_eq!(cart.subtotal(), expected);
        assert_eq!(cart.total_items(), 3);
    }

    #[test]
    fn test_cart_json_roundtrip() {
        let mut cart = Cart::new();
        let mut opts = BTreeMap::new();
        opts.insert("Size".to_string(), "Large".to_string());
        cart.add_item(
            CartItem::new("1", "Margherita", 12.5, 2)
                .with_image("pizza.jpg")
                .with_options(opts),
        );
        cart.add_item(CartItem::new("2", "Carbonara", 14.0, 1));

        let json = serde_json::to_string(&cart).unwrap();
        let parsed: Cart = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, cart);
        assert_eq!(parsed.items[0].options["Size"], "Large");
    }

    #[test]
    fn test_cart_item_display() {
        let item = CartItem::new("1", "Margherita", 10.0, 2);
        assert_eq!(format!("{}", item), "Margherita x2 @ 10.00 = 20.00");
    }
}
