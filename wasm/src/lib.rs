//! WebAssembly module for LuneStock
//!
//! Provides client-side computation for:
//! - Sale total calculation
//! - Stock adjustment preview
//! - Low-stock classification
//! - Dashboard aggregation over locally cached data

use chrono::Utc;
use rust_decimal::Decimal;
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook for better error messages in browser console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Compute a sale total from a decimal unit price string and quantity
#[wasm_bindgen]
pub fn compute_sale_total(unit_price: &str, quantity: i32) -> Result<String, JsValue> {
    let price: Decimal = unit_price
        .parse()
        .map_err(|e| JsValue::from_str(&format!("Invalid unit price: {}", e)))?;

    Ok(shared::stats::sale_total(price, quantity).to_string())
}

/// Preview a stock adjustment without touching the server.
/// `operation` is "add" or "subtract"; subtracting clamps at zero.
#[wasm_bindgen]
pub fn preview_stock_adjustment(
    current: i32,
    operation: &str,
    amount: i32,
) -> Result<i32, JsValue> {
    let op = match operation {
        "add" => StockOperation::Add,
        "subtract" => StockOperation::Subtract,
        other => {
            return Err(JsValue::from_str(&format!(
                "Unknown operation: {}",
                other
            )))
        }
    };

    Ok(shared::stats::adjust_stock(current, op, amount))
}

/// Whether a stock level counts as low
#[wasm_bindgen]
pub fn is_low_stock(stock: i32) -> bool {
    shared::stats::is_low_stock(stock)
}

/// Compute dashboard stats from JSON arrays of variants and sales
#[wasm_bindgen]
pub fn compute_dashboard_stats(variants_json: &str, sales_json: &str) -> Result<String, JsValue> {
    let variants: Vec<ProductVariant> = serde_json::from_str(variants_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid variants JSON: {}", e)))?;
    let sales: Vec<Sale> = serde_json::from_str(sales_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid sales JSON: {}", e)))?;

    let stats = shared::stats::compute_dashboard_stats(&variants, &sales, Utc::now());

    serde_json::to_string(&stats).map_err(|e| JsValue::from_str(&format!("Serialize: {}", e)))
}

/// Compute the seven-day sales chart series from a JSON array of sales
#[wasm_bindgen]
pub fn weekly_sales_series(sales_json: &str) -> Result<String, JsValue> {
    let sales: Vec<Sale> = serde_json::from_str(sales_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid sales JSON: {}", e)))?;

    let series = shared::stats::weekly_sales_series(&sales, Utc::now().date_naive());

    serde_json::to_string(&series).map_err(|e| JsValue::from_str(&format!("Serialize: {}", e)))
}

/// Compute the stock-by-product chart series from a JSON inventory array
#[wasm_bindgen]
pub fn stock_by_product(items_json: &str) -> Result<String, JsValue> {
    let items: Vec<InventoryItem> = serde_json::from_str(items_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid inventory JSON: {}", e)))?;

    let series = shared::stats::stock_by_product(&items);

    serde_json::to_string(&series).map_err(|e| JsValue::from_str(&format!("Serialize: {}", e)))
}

/// Validate a #RRGGBB color string for the settings form
#[wasm_bindgen]
pub fn is_valid_hex_color(hex: &str) -> bool {
    shared::validation::validate_hex_color(hex).is_ok()
}
