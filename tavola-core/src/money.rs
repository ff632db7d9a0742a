//! Money calculation utilities using rust_decimal for precision.
//!
//! Models store monetary values as `f64` so the persisted JSON keeps
//! plain numbers, but every calculation goes through `Decimal` and is
//! rounded to two decimal places before conversion back.

use rust_decimal::prelude::*;

use crate::models::CartItem;

/// Sales tax applied at order placement (8%).
pub const TAX_RATE: Decimal = Decimal::from_parts(8, 0, 0, false, 2);

/// Decimal places kept for monetary values.
const DECIMAL_PLACES: u32 = 2;

/// Convert an `f64` monetary value to a `Decimal`.
///
/// Non-finite input converts to zero; callers validate ranges before
/// arithmetic ever happens.
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or(Decimal::ZERO)
}

/// Convert a `Decimal` back to `f64`, rounded to cents.
pub fn to_f64(value: Decimal) -> f64 {
    round_money(value).to_f64().unwrap_or(0.0)
}

/// Round a monetary value to two decimal places, half away from zero.
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Price x quantity for a single cart line.
pub fn line_total(price: f64, quantity: u32) -> f64 {
    to_f64(to_decimal(price) * Decimal::from(quantity))
}

/// Sum of price x quantity over all items.
pub fn cart_subtotal(items: &[CartItem]) -> f64 {
    let sum = items
        .iter()
        .fold(Decimal::ZERO, |acc, item| {
            acc + to_decimal(item.price) * Decimal::from(item.quantity)
        });
    to_f64(sum)
}

/// Order total: subtotal plus tax.
pub fn order_total(subtotal: f64) -> f64 {
    to_f64(to_decimal(subtotal) * (Decimal::ONE + TAX_RATE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn item(price: f64, quantity: u32) -> CartItem {
        CartItem {
            id: "1".to_string(),
            name: "test".to_string(),
            price,
            quantity,
            image: None,
            options: BTreeMap::new(),
        }
    }

    #[test]
    fn test_tax_rate_is_eight_percent() {
        assert_eq!(TAX_RATE.to_f64().unwrap(), 0.08);
    }

    #[test]
    fn test_line_total() {
        assert_eq!(line_total(9.99, 3), 29.97);
        assert_eq!(line_total(0.1, 3), 0.3);
    }

    #[test]
    fn test_cart_subtotal() {
        let items = vec![item(12.5, 2), item(3.25, 4)];
        assert_eq!(cart_subtotal(&items), 38.0);
    }

    #[test]
    fn test_cart_subtotal_empty() {
        assert_eq!(cart_subtotal(&[]), 0.0);
    }

    #[test]
    fn test_order_total_exact() {
        // 100.00 subtotal must produce exactly 108.00, not 108.00000000000001
        assert_eq!(order_total(100.0), 108.0);
    }

    #[test]
    fn test_order_total_rounds_to_cents() {
        // 9.99 * 1.08 = 10.7892 -> 10.79
        assert_eq!(order_total(9.99), 10.79);
    }

    #[test]
    fn test_to_decimal_non_finite_is_zero() {
        assert_eq!(to_decimal(f64::NAN), Decimal::ZERO);
        assert_eq!(to_decimal(f64::INFINITY), Decimal::ZERO);
    }
}
