//! Inventory tests
//!
//! Property-based and unit tests for:
//! - Stock adjustment clamping (stock never goes negative)
//! - Low-stock classification boundary
//! - Stock-by-product grouping

use proptest::prelude::*;

use shared::models::InventoryItem;
use shared::stats::{adjust_stock, is_low_stock, stock_by_product, LOW_STOCK_THRESHOLD};
use shared::types::StockOperation;

// ============================================================================
// Property Test Strategies
// ============================================================================

/// Generate plausible stock levels
fn stock_strategy() -> impl Strategy<Value = i32> {
    0..10_000i32
}

/// Generate adjustment amounts
fn amount_strategy() -> impl Strategy<Value = i32> {
    1..10_000i32
}

fn item(name: &str, stock: i32) -> InventoryItem {
    InventoryItem {
        id: uuid::Uuid::new_v4(),
        product_name: name.to_string(),
        size: "M".to_string(),
        color: "Negro".to_string(),
        stock,
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Adjusted stock is never negative, whatever the inputs
    #[test]
    fn prop_adjusted_stock_never_negative(
        current in stock_strategy(),
        amount in amount_strategy(),
    ) {
        prop_assert!(adjust_stock(current, StockOperation::Add, amount) >= 0);
        prop_assert!(adjust_stock(current, StockOperation::Subtract, amount) >= 0);
    }

    /// Adding is plain addition
    #[test]
    fn prop_add_is_exact(current in stock_strategy(), amount in amount_strategy()) {
        prop_assert_eq!(
            adjust_stock(current, StockOperation::Add, amount),
            current + amount
        );
    }

    /// Adding never wraps negative, even at the extremes of i32
    #[test]
    fn prop_add_saturates(current in 0..=i32::MAX, amount in 1..=i32::MAX) {
        let result = adjust_stock(current, StockOperation::Add, amount);
        prop_assert!(result >= current);
    }

    /// Subtracting clamps at zero and is exact above it
    #[test]
    fn prop_subtract_clamps(current in stock_strategy(), amount in amount_strategy()) {
        let result = adjust_stock(current, StockOperation::Subtract, amount);
        if amount >= current {
            prop_assert_eq!(result, 0);
        } else {
            prop_assert_eq!(result, current - amount);
        }
    }

    /// Low-stock classification agrees with the threshold everywhere
    #[test]
    fn prop_low_stock_matches_threshold(stock in stock_strategy()) {
        prop_assert_eq!(is_low_stock(stock), stock < LOW_STOCK_THRESHOLD);
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    /// Subtracting more than available clamps to zero
    #[test]
    fn test_subtract_below_zero_clamps() {
        assert_eq!(adjust_stock(10, StockOperation::Subtract, 15), 0);
        assert_eq!(adjust_stock(0, StockOperation::Subtract, 1), 0);
    }

    /// Adding at the top of the i32 range saturates instead of panicking
    #[test]
    fn test_add_saturates_at_i32_max() {
        assert_eq!(adjust_stock(i32::MAX, StockOperation::Add, 1), i32::MAX);
        assert_eq!(adjust_stock(1, StockOperation::Add, i32::MAX), i32::MAX);
    }

    /// Exact subtraction lands on zero
    #[test]
    fn test_subtract_to_exactly_zero() {
        assert_eq!(adjust_stock(7, StockOperation::Subtract, 7), 0);
    }

    /// The low-stock boundary: 4 is low, 5 is not
    #[test]
    fn test_low_stock_boundary() {
        assert!(is_low_stock(4));
        assert!(!is_low_stock(5));
        assert!(is_low_stock(0));
    }

    /// Grouping sums variants per product and keeps first-seen order
    #[test]
    fn test_stock_by_product_groups_and_orders() {
        let items = vec![
            item("Polo Luna", 3),
            item("Vestido Sol", 8),
            item("Polo Luna", 2),
            item("Falda Mar", 1),
        ];

        let points = stock_by_product(&items);

        assert_eq!(points.len(), 3);
        assert_eq!(points[0].name, "Polo Luna");
        assert_eq!(points[0].stock, 5);
        assert_eq!(points[1].name, "Vestido Sol");
        assert_eq!(points[1].stock, 8);
        assert_eq!(points[2].name, "Falda Mar");
        assert_eq!(points[2].stock, 1);
    }

    /// Empty inventory yields an empty chart
    #[test]
    fn test_stock_by_product_empty() {
        assert!(stock_by_product(&[]).is_empty());
    }
}
