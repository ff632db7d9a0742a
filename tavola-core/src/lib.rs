//! Tavola Core Library
//!
//! Shared types and logic for the Tavola ordering applications:
//! cart state, order lifecycle, local persistence and catalog access.

pub mod cart_store;
pub mod catalog;
pub mod guest;
pub mod models;
pub mod money;
pub mod orders;
pub mod remote;
pub mod storage;

pub use cart_store::CartStore;
pub use catalog::{CatalogReader, ReaderState};
pub use models::{
    BusinessHours, Cart, CartItem, Category, ContactMessage, ItemOption, MenuItem, OptionChoice,
    Order, OrderDetails, OrderStatus, PaymentMethod, PaymentStatus, Reservation, RestaurantConfig,
    RestaurantDocument, SocialMedia, SpecialOffer, Testimonial,
};
pub use orders::{OrderBook, OrderError};
pub use remote::{DocumentClient, RemoteError, MESSAGES_COLLECTION, RESERVATIONS_COLLECTION};
pub use storage::{LocalStore, StorageError, StoreKey};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
