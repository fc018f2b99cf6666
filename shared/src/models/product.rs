//! Product and variant models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A product managed by the shop
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A size/color combination of a product, the unit at which stock is tracked.
/// Invariant: `stock >= 0` always; stock is mutated only through an explicit
/// stock adjustment or sale fulfillment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductVariant {
    pub id: Uuid,
    pub product_id: Uuid,
    pub size: String,
    pub color: String,
    pub stock: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Product view with its variants and the summed stock, as rendered by the
/// products screen
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductWithVariants {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub total_stock: i64,
    pub variants: Vec<ProductVariant>,
}

/// Inventory table row: a variant joined with its product name
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: Uuid,
    pub product_name: String,
    pub size: String,
    pub color: String,
    pub stock: i32,
}
