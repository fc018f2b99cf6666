//! Pure domain aggregation for the dashboard and inventory screens.
//!
//! Everything in this module is a pure function over in-memory rows: the
//! backend fetches rows and delegates here, and the WASM module re-exports
//! the same functions for client-side computation.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{InventoryItem, ProductVariant, Sale};
use crate::types::StockOperation;

/// Variants with fewer units than this are flagged as low stock.
pub const LOW_STOCK_THRESHOLD: i32 = 5;

/// Number of buckets in the weekly sales series.
pub const WEEKLY_SERIES_DAYS: i64 = 7;

/// Aggregate dashboard statistics, recomputed on every view and never cached
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_revenue: Decimal,
    pub total_stock: i64,
    pub recent_sales: i64,
    pub low_stock_items: i64,
}

/// One bucket of the weekly sales chart, labeled with a weekday abbreviation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesPoint {
    pub date: String,
    pub value: i64,
}

/// One bar of the stock-by-product chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockPoint {
    pub name: String,
    pub stock: i64,
}

/// Whether a variant with the given stock counts as low stock.
/// Boundary: 4 units is low, 5 is not.
pub fn is_low_stock(stock: i32) -> bool {
    stock < LOW_STOCK_THRESHOLD
}

/// Total for a sale line: unit price times quantity, in exact decimal
/// arithmetic (2 x 39.90 is exactly 79.80).
pub fn sale_total(unit_price: Decimal, quantity: i32) -> Decimal {
    unit_price * Decimal::from(quantity)
}

/// Apply a manual stock adjustment.
///
/// Adding saturates at `i32::MAX`; subtracting clamps at zero, silently
/// absorbing any over-subtraction. Callers validate `amount > 0` before
/// invoking, so the result is never negative.
pub fn adjust_stock(current: i32, operation: StockOperation, amount: i32) -> i32 {
    match operation {
        StockOperation::Add => current.saturating_add(amount),
        StockOperation::Subtract => (current - amount).max(0),
    }
}

/// Compute the dashboard statistics from the full variant and sale lists.
///
/// Outputs are non-negative for non-negative inputs. A sale is "recent" when
/// it happened within the 7 days before `now`, inclusive.
pub fn compute_dashboard_stats(
    variants: &[ProductVariant],
    sales: &[Sale],
    now: DateTime<Utc>,
) -> DashboardStats {
    let recent_cutoff = now - Duration::days(WEEKLY_SERIES_DAYS);

    DashboardStats {
        total_revenue: sales.iter().map(|s| s.total).sum(),
        total_stock: variants.iter().map(|v| i64::from(v.stock)).sum(),
        recent_sales: sales.iter().filter(|s| s.sold_at >= recent_cutoff).count() as i64,
        low_stock_items: variants.iter().filter(|v| is_low_stock(v.stock)).count() as i64,
    }
}

/// Build the 7-bucket weekly sales series ending on `today`.
///
/// Buckets are in chronological order, oldest to newest. A sale increments
/// the bucket whose calendar day contains its timestamp; day boundaries are
/// unambiguous, so each sale lands in exactly one bucket. Sales outside the
/// window are ignored and empty buckets stay at zero.
pub fn weekly_sales_series(sales: &[Sale], today: NaiveDate) -> Vec<SalesPoint> {
    let days: Vec<NaiveDate> = (0..WEEKLY_SERIES_DAYS)
        .rev()
        .map(|offset| today - Duration::days(offset))
        .collect();

    let mut series: Vec<SalesPoint> = days
        .iter()
        .map(|day| SalesPoint {
            date: weekday_abbrev(day.weekday()).to_string(),
            value: 0,
        })
        .collect();

    for sale in sales {
        let sale_day = sale.sold_at.date_naive();
        if let Some(idx) = days.iter().position(|day| *day == sale_day) {
            series[idx].value += 1;
        }
    }

    series
}

/// Sum variant stock per product, preserving first-seen product order,
/// for the stock distribution chart.
pub fn stock_by_product(items: &[InventoryItem]) -> Vec<StockPoint> {
    let mut series: Vec<StockPoint> = Vec::new();

    for item in items {
        match series.iter_mut().find(|p| p.name == item.product_name) {
            Some(point) => point.stock += i64::from(item.stock),
            None => series.push(StockPoint {
                name: item.product_name.clone(),
                stock: i64::from(item.stock),
            }),
        }
    }

    series
}

/// Spanish weekday abbreviation used as the chart axis label
pub fn weekday_abbrev(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Lun",
        Weekday::Tue => "Mar",
        Weekday::Wed => "Mie",
        Weekday::Thu => "Jue",
        Weekday::Fri => "Vie",
        Weekday::Sat => "Sab",
        Weekday::Sun => "Dom",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::str::FromStr;
    use uuid::Uuid;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn variant(stock: i32) -> ProductVariant {
        let now = Utc::now();
        ProductVariant {
            id: Uuid::new_v4(),
            product_id: Uuid::new_v4(),
            size: "M".to_string(),
            color: "Negro".to_string(),
            stock,
            created_at: now,
            updated_at: now,
        }
    }

    fn sale(total: &str, sold_at: DateTime<Utc>) -> Sale {
        Sale {
            id: Uuid::new_v4(),
            product_name: "Polo Basico".to_string(),
            size: "M".to_string(),
            color: "Negro".to_string(),
            quantity: 1,
            unit_price: dec(total),
            total: dec(total),
            sold_at,
        }
    }

    #[test]
    fn test_adjust_stock_add() {
        assert_eq!(adjust_stock(10, StockOperation::Add, 5), 15);
        assert_eq!(adjust_stock(0, StockOperation::Add, 1), 1);
    }

    #[test]
    fn test_adjust_stock_subtract() {
        assert_eq!(adjust_stock(10, StockOperation::Subtract, 3), 7);
        assert_eq!(adjust_stock(10, StockOperation::Subtract, 10), 0);
    }

    #[test]
    fn test_adjust_stock_add_saturates_at_max() {
        // An absurd add stays a valid non-negative stock instead of wrapping
        assert_eq!(adjust_stock(i32::MAX, StockOperation::Add, 1), i32::MAX);
        assert_eq!(
            adjust_stock(i32::MAX - 3, StockOperation::Add, 10),
            i32::MAX
        );
    }

    #[test]
    fn test_adjust_stock_clamps_at_zero() {
        // Over-subtraction is absorbed, never negative
        assert_eq!(adjust_stock(10, StockOperation::Subtract, 15), 0);
        assert_eq!(adjust_stock(0, StockOperation::Subtract, 1), 0);
    }

    #[test]
    fn test_sale_total_exact() {
        assert_eq!(sale_total(dec("39.9"), 2), dec("79.8"));
        assert_eq!(sale_total(dec("0"), 5), Decimal::ZERO);
    }

    #[test]
    fn test_low_stock_boundary() {
        assert!(is_low_stock(4));
        assert!(!is_low_stock(5));
        assert!(is_low_stock(0));
    }

    #[test]
    fn test_dashboard_stats_totals() {
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
        let variants = vec![variant(10), variant(4), variant(5)];
        let sales = vec![
            sale("39.9", now - Duration::days(1)),
            sale("79.8", now - Duration::days(3)),
            sale("10.0", now - Duration::days(30)),
        ];

        let stats = compute_dashboard_stats(&variants, &sales, now);

        // Revenue sums every sale, recent only counts the last 7 days
        assert_eq!(stats.total_revenue, dec("129.7"));
        assert_eq!(stats.total_stock, 19);
        assert_eq!(stats.recent_sales, 2);
        assert_eq!(stats.low_stock_items, 1);
    }

    #[test]
    fn test_dashboard_stats_empty_inputs() {
        let stats = compute_dashboard_stats(&[], &[], Utc::now());
        assert_eq!(stats.total_revenue, Decimal::ZERO);
        assert_eq!(stats.total_stock, 0);
        assert_eq!(stats.recent_sales, 0);
        assert_eq!(stats.low_stock_items, 0);
    }

    #[test]
    fn test_weekly_series_has_seven_chronological_buckets() {
        // 2024-06-15 is a Saturday
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let series = weekly_sales_series(&[], today);

        assert_eq!(series.len(), 7);
        let labels: Vec<&str> = series.iter().map(|p| p.date.as_str()).collect();
        assert_eq!(labels, vec!["Dom", "Lun", "Mar", "Mie", "Jue", "Vie", "Sab"]);
        assert!(series.iter().all(|p| p.value == 0));
    }

    #[test]
    fn test_weekly_series_buckets_sales_by_day() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let sales = vec![
            sale("39.9", Utc.with_ymd_and_hms(2024, 6, 15, 10, 0, 0).unwrap()),
            sale("39.9", Utc.with_ymd_and_hms(2024, 6, 15, 18, 30, 0).unwrap()),
            sale("39.9", Utc.with_ymd_and_hms(2024, 6, 12, 9, 0, 0).unwrap()),
            // Outside the window, ignored
            sale("39.9", Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap()),
        ];

        let series = weekly_sales_series(&sales, today);

        assert_eq!(series[6].value, 2); // today
        assert_eq!(series[3].value, 1); // three days ago
        assert_eq!(series.iter().map(|p| p.value).sum::<i64>(), 3);
    }

    #[test]
    fn test_weekly_series_midnight_boundary_single_bucket() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        // Exactly midnight belongs to the day that starts, not the one that ends
        let sales = vec![sale(
            "39.9",
            Utc.with_ymd_and_hms(2024, 6, 14, 0, 0, 0).unwrap(),
        )];

        let series = weekly_sales_series(&sales, today);

        assert_eq!(series.iter().map(|p| p.value).sum::<i64>(), 1);
        assert_eq!(series[5].value, 1); // yesterday's bucket, exactly once
    }

    #[test]
    fn test_stock_by_product_groups_and_preserves_order() {
        let items = vec![
            InventoryItem {
                id: Uuid::new_v4(),
                product_name: "Polo Basico".to_string(),
                size: "S".to_string(),
                color: "Negro".to_string(),
                stock: 15,
            },
            InventoryItem {
                id: Uuid::new_v4(),
                product_name: "Polo Estampado".to_string(),
                size: "M".to_string(),
                color: "Blanco".to_string(),
                stock: 10,
            },
            InventoryItem {
                id: Uuid::new_v4(),
                product_name: "Polo Basico".to_string(),
                size: "L".to_string(),
                color: "Negro".to_string(),
                stock: 20,
            },
        ];

        let series = stock_by_product(&items);

        assert_eq!(series.len(), 2);
        assert_eq!(series[0].name, "Polo Basico");
        assert_eq!(series[0].stock, 35);
        assert_eq!(series[1].name, "Polo Estampado");
        assert_eq!(series[1].stock, 10);
    }
}
