//! Sale models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A recorded sale transaction.
///
/// Product name, size and color are denormalized snapshots taken at
/// registration time, so later edits to a product or variant never rewrite
/// the sales history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sale {
    pub id: Uuid,
    pub product_name: String,
    pub size: String,
    pub color: String,
    pub quantity: i32,
    pub unit_price: Decimal,
    pub total: Decimal,
    pub sold_at: DateTime<Utc>,
}
