mod cart;
mod feedback;
mod menu;
mod order;
mod restaurant;

pub use cart::{Cart, CartItem};
pub use feedback::{ContactMessage, MessageStatus, Reservation, ReservationStatus};
pub use menu::{Category, ItemOption, MenuItem, OptionChoice};
pub use order::{Order, OrderDetails, OrderStatus, PaymentMethod, PaymentStatus};
pub use restaurant::{
    BusinessHours, RestaurantConfig, RestaurantDocument, SocialMedia, SpecialOffer, Testimonial,
};
