//! Dashboard aggregation tests
//!
//! Property-based and unit tests for:
//! - Headline stats (revenue, stock on hand, recent sales, low stock)
//! - The seven-day sales series: bucket count, order, and membership
//! - Recent-sales window boundary

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;
use std::str::FromStr;
use uuid::Uuid;

use shared::models::{ProductVariant, Sale};
use shared::stats::{compute_dashboard_stats, weekly_sales_series, LOW_STOCK_THRESHOLD};

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

fn sale_at(total: Decimal, sold_at: DateTime<Utc>) -> Sale {
    Sale {
        id: Uuid::new_v4(),
        product_name: "Polo Luna".to_string(),
        size: "M".to_string(),
        color: "Azul".to_string(),
        quantity: 1,
        unit_price: total,
        total,
        sold_at,
    }
}

// ============================================================================
// Property Test Strategies
// ============================================================================

/// Generate sale timestamps within roughly a month around "now"
fn offset_hours_strategy() -> impl Strategy<Value = i64> {
    -720..0i64
}

fn totals_strategy() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(0i64..100_000, 0..20)
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Revenue is the exact decimal sum over all sales, recent or not
    #[test]
    fn prop_revenue_is_exact_sum(cents in totals_strategy()) {
        let now = Utc::now();
        let sales: Vec<Sale> = cents
            .iter()
            .map(|c| sale_at(Decimal::new(*c, 2), now))
            .collect();

        let expected: Decimal = cents.iter().map(|c| Decimal::new(*c, 2)).sum();
        let stats = compute_dashboard_stats(&[], &sales, now);

        prop_assert_eq!(stats.total_revenue, expected);
    }

    /// Every sale inside the seven-day window lands in exactly one bucket
    #[test]
    fn prop_each_sale_in_one_bucket(offsets in prop::collection::vec(offset_hours_strategy(), 0..30)) {
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
        let today = now.date_naive();
        let sales: Vec<Sale> = offsets
            .iter()
            .map(|h| sale_at(dec("10.00"), now + Duration::hours(*h)))
            .collect();

        let series = weekly_sales_series(&sales, today);
        prop_assert_eq!(series.len(), 7);

        let window_start = today - Duration::days(6);
        let in_window = sales
            .iter()
            .filter(|s| {
                let d = s.sold_at.date_naive();
                d >= window_start && d <= today
            })
            .count() as i64;

        let bucketed: i64 = series.iter().map(|p| p.value).sum();
        prop_assert_eq!(bucketed, in_window);
    }

    /// Low-stock count agrees with the threshold over arbitrary inventories
    #[test]
    fn prop_low_stock_count(stocks in prop::collection::vec(0..50i32, 0..30)) {
        let variants: Vec<ProductVariant> = stocks.iter().map(|s| variant(*s)).collect();
        let expected = stocks.iter().filter(|s| **s < LOW_STOCK_THRESHOLD).count() as i64;

        let stats = compute_dashboard_stats(&variants, &[], Utc::now());
        prop_assert_eq!(stats.low_stock_items, expected);
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    /// Headline numbers over a small fixed data set
    #[test]
    fn test_dashboard_stats_fixed_set() {
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
        let variants = vec![variant(3), variant(10), variant(5)];
        let sales = vec![
            sale_at(dec("79.80"), now - Duration::days(1)),
            sale_at(dec("19.99"), now - Duration::days(3)),
            sale_at(dec("29.91"), now - Duration::days(20)),
        ];

        let stats = compute_dashboard_stats(&variants, &sales, now);

        assert_eq!(stats.total_revenue, dec("129.70"));
        assert_eq!(stats.total_stock, 18);
        assert_eq!(stats.recent_sales, 2);
        assert_eq!(stats.low_stock_items, 1);
    }

    /// A sale exactly seven days old still counts as recent
    #[test]
    fn test_recent_window_boundary_inclusive() {
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
        let on_boundary = sale_at(dec("10.00"), now - Duration::days(7));
        let just_outside = sale_at(dec("10.00"), now - Duration::days(7) - Duration::seconds(1));

        let stats = compute_dashboard_stats(&[], &[on_boundary, just_outside], now);
        assert_eq!(stats.recent_sales, 1);
    }

    /// The series always has seven buckets ending today, oldest first
    #[test]
    fn test_weekly_series_shape() {
        // 2024-06-15 is a Saturday
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let series = weekly_sales_series(&[], today);

        assert_eq!(series.len(), 7);
        let labels: Vec<&str> = series.iter().map(|p| p.date.as_str()).collect();
        assert_eq!(labels, ["Dom", "Lun", "Mar", "Mie", "Jue", "Vie", "Sab"]);
        assert!(series.iter().all(|p| p.value == 0));
    }

    /// A sale at midnight belongs to that calendar day only
    #[test]
    fn test_midnight_sale_single_bucket() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let midnight = Utc.with_ymd_and_hms(2024, 6, 14, 0, 0, 0).unwrap();
        let sales = vec![sale_at(dec("10.00"), midnight)];

        let series = weekly_sales_series(&sales, today);

        let counts: Vec<i64> = series.iter().map(|p| p.value).collect();
        assert_eq!(counts, [0, 0, 0, 0, 0, 1, 0]);
    }

    /// Sales older than the window are ignored by the chart
    #[test]
    fn test_old_sales_excluded_from_series() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let old = Utc.with_ymd_and_hms(2024, 6, 1, 10, 0, 0).unwrap();
        let series = weekly_sales_series(&[sale_at(dec("10.00"), old)], today);

        assert!(series.iter().all(|p| p.value == 0));
    }
}
