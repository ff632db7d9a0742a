//! Order records: an immutable-once-placed snapshot of the cart plus
//! customer and payment metadata, tracked through a status lifecycle.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::cart::CartItem;
use crate::money;

/// How long after placement an order still counts as the current order.
const CURRENT_ORDER_WINDOW_HOURS: i64 = 2;

/// Lifecycle status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Preparing,
    Ready,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Whether the order is still in flight (not delivered or cancelled).
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            OrderStatus::Pending
                | OrderStatus::Confirmed
                | OrderStatus::Preparing
                | OrderStatus::Ready
        )
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Ready => "ready",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Cash,
    Card,
    Online,
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::Card => "card",
            PaymentMethod::Online => "online",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Paid,
    Failed,
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Paid => "paid",
            PaymentStatus::Failed => "failed",
        };
        write!(f, "{}", s)
    }
}

/// A placed order.
///
/// Items are copied from the cart at placement time; later cart
/// mutations never touch a placed order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub guest_id: String,
    pub items: Vec<CartItem>,
    pub status: OrderStatus,
    /// Subtotal plus tax, rounded to cents
    pub total: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_instructions: Option<String>,
    pub payment_method: PaymentMethod,
    pub payment_status: PaymentStatus,
}

impl Order {
    /// Build a new pending order from a cart snapshot.
    pub fn new(guest_id: impl Into<String>, items: Vec<CartItem>, details: &OrderDetails) -> Self {
        let now = Utc::now();
        let subtotal = money::cart_subtotal(&items);
        Self {
            id: format!("order_{}", Uuid::new_v4().simple()),
            guest_id: guest_id.into(),
            items,
            status: OrderStatus::Pending,
            total: money::order_total(subtotal),
            created_at: now,
            updated_at: now,
            customer_name: details.customer_name.clone().unwrap_or_default(),
            customer_phone: details.customer_phone.clone().unwrap_or_default(),
            customer_email: details.customer_email.clone().unwrap_or_default(),
            delivery_address: details.delivery_address.clone(),
            table_number: details.table_number.clone(),
            special_instructions: details.special_instructions.clone(),
            payment_method: details.payment_method.unwrap_or_default(),
            payment_status: PaymentStatus::Pending,
        }
    }

    /// Whether this order qualifies as the current order at `now`:
    /// placed within the last two hours and still active.
    pub fn is_current_at(&self, now: DateTime<Utc>) -> bool {
        let cutoff = now - Duration::hours(CURRENT_ORDER_WINDOW_HOURS);
        self.created_at > cutoff && self.status.is_active()
    }
}

/// Customer-supplied details collected at checkout.
///
/// Every field is optional here; `validate` reports what the checkout
/// form must still collect, and `Order::new` defaults absent strings
/// to empty.
#[derive(Debug, Clone, Default)]
pub struct OrderDetails {
    pub customer_name: Option<String>,
    pub customer_phone: Option<String>,
    pub customer_email: Option<String>,
    pub delivery_address: Option<String>,
    pub table_number: Option<String>,
    pub special_instructions: Option<String>,
    pub payment_method: Option<PaymentMethod>,
}

impl OrderDetails {
    /// Validate the required customer fields.
    ///
    /// Returns `(field, message)` pairs; empty means valid.
    pub fn validate(&self) -> Vec<(&'static str, &'static str)> {
        let mut errors = Vec::new();

        match self.customer_name.as_deref().map(str::trim) {
            None | Some("") => errors.push(("customerName", "Name is required")),
            _ => {}
        }

        match self.customer_email.as_deref().map(str::trim) {
            None | Some("") => errors.push(("customerEmail", "Email is required")),
            Some(email) if !is_valid_email(email) => {
                errors.push(("customerEmail", "Email is invalid"))
            }
            _ => {}
        }

        match self.customer_phone.as_deref().map(str::trim) {
            None | Some("") => errors.push(("customerPhone", "Phone number is required")),
            _ => {}
        }

        errors
    }
}

/// Loose email shape check: something@something.something, no spaces.
fn is_valid_email(email: &str) -> bool {
    if email.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}
