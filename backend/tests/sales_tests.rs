//! Sales tests
//!
//! Property-based and unit tests for:
//! - Exact decimal sale totals (no float drift)
//! - Sale input validation and the stock-sufficiency precondition
//! - Sale deletion leaving stock untouched

use chrono::Utc;
use proptest::prelude::*;
use rust_decimal::Decimal;
use std::str::FromStr;
use uuid::Uuid;

use shared::models::{ProductVariant, Sale};
use shared::stats::{compute_dashboard_stats, sale_total};
use shared::validation::{validate_quantity, validate_sufficient_stock, validate_unit_price};

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn variant(stock: i32) -> ProductVariant {
    let now = Utc::now();
    ProductVariant {
        id: Uuid::new_v4(),
        product_id: Uuid::new_v4(),
        size: "M".to_string(),
        color: "Azul".to_string(),
        stock,
        created_at: now,
        updated_at: now,
    }
}

fn sale(total: &str) -> Sale {
    Sale {
        id: Uuid::new_v4(),
        product_name: "Polo Luna".to_string(),
        size: "M".to_string(),
        color: "Azul".to_string(),
        quantity: 1,
        unit_price: dec(total),
        total: dec(total),
        sold_at: Utc::now(),
    }
}

// ============================================================================
// Property Test Strategies
// ============================================================================

/// Generate prices with two decimal places, as entered in the UI
fn price_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

/// Generate plausible sale quantities
fn quantity_strategy() -> impl Strategy<Value = i32> {
    1..1_000i32
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Total is exactly price times quantity in decimal arithmetic
    #[test]
    fn prop_total_is_exact_product(
        price in price_strategy(),
        quantity in quantity_strategy(),
    ) {
        let total = sale_total(price, quantity);
        prop_assert_eq!(total, price * Decimal::from(quantity));
    }

    /// Summing a sale split into unit sales equals one combined sale
    #[test]
    fn prop_total_distributes_over_quantity(
        price in price_strategy(),
        quantity in 1..100i32,
    ) {
        let combined = sale_total(price, quantity);
        let unit_by_unit: Decimal = (0..quantity)
            .map(|_| sale_total(price, 1))
            .sum();
        prop_assert_eq!(combined, unit_by_unit);
    }

    /// Quantity validation accepts positives and rejects the rest
    #[test]
    fn prop_quantity_validation(quantity in -1_000..1_000i32) {
        prop_assert_eq!(validate_quantity(quantity).is_ok(), quantity > 0);
    }

    /// Negative prices are always rejected
    #[test]
    fn prop_negative_price_rejected(cents in 1i64..1_000_000) {
        let price = Decimal::new(-cents, 2);
        prop_assert!(validate_unit_price(price).is_err());
    }

    /// A sale is fulfillable exactly when the variant holds enough units
    #[test]
    fn prop_sufficient_stock_iff_quantity_fits(
        stock in 0..1_000i32,
        quantity in 1..1_000i32,
    ) {
        prop_assert_eq!(
            validate_sufficient_stock(stock, quantity).is_ok(),
            quantity <= stock
        );
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    /// The classic float trap: 2 x 39.90 must be exactly 79.80
    #[test]
    fn test_total_no_float_drift() {
        assert_eq!(sale_total(dec("39.90"), 2), dec("79.80"));
    }

    /// Totals keep cent precision across many items
    #[test]
    fn test_total_cent_precision() {
        assert_eq!(sale_total(dec("0.10"), 3), dec("0.30"));
        assert_eq!(sale_total(dec("19.99"), 7), dec("139.93"));
    }

    /// A free item is a valid sale with a zero total
    #[test]
    fn test_zero_price_total() {
        assert!(validate_unit_price(Decimal::ZERO).is_ok());
        assert_eq!(sale_total(Decimal::ZERO, 5), Decimal::ZERO);
    }

    /// Zero quantity is rejected before any total is computed
    #[test]
    fn test_zero_quantity_rejected() {
        assert!(validate_quantity(0).is_err());
    }

    /// Revenue over a set of sales is the exact decimal sum of totals
    #[test]
    fn test_revenue_sums_exactly() {
        let totals = [dec("79.80"), dec("19.99"), dec("0.30")];
        let revenue: Decimal = totals.iter().copied().sum();
        assert_eq!(revenue, dec("100.09"));
    }

    /// Registration precondition boundary: selling the whole remaining
    /// stock is allowed, one unit more is refused with no mutation
    #[test]
    fn test_sale_quantity_boundary_against_stock() {
        assert!(validate_sufficient_stock(10, 10).is_ok());
        assert!(validate_sufficient_stock(10, 11).is_err());
        assert!(validate_sufficient_stock(0, 1).is_err());
    }

    /// Deleting a sale removes it from history but never restores stock:
    /// revenue drops by the sale's total while stock on hand is unchanged
    #[test]
    fn test_delete_sale_leaves_stock_untouched() {
        let now = Utc::now();
        let variants = vec![variant(8), variant(3)];
        let before = vec![sale("79.80"), sale("19.99")];
        let after: Vec<Sale> = before[1..].to_vec();

        let stats_before = compute_dashboard_stats(&variants, &before, now);
        let stats_after = compute_dashboard_stats(&variants, &after, now);

        assert_eq!(stats_before.total_revenue, dec("99.79"));
        assert_eq!(stats_after.total_revenue, dec("19.99"));
        assert_eq!(stats_after.total_stock, stats_before.total_stock);
        assert_eq!(stats_after.low_stock_items, stats_before.low_stock_items);
    }
}
