//! Inventory service: flattened stock view and manual stock adjustments

use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use serde::Deserialize;
use shared::models::InventoryItem;
use shared::stats::{self, StockPoint, LOW_STOCK_THRESHOLD};
use shared::types::StockOperation;

/// Inventory service
#[derive(Clone)]
pub struct InventoryService {
    db: PgPool,
}

/// Input for a manual stock adjustment
#[derive(Debug, Deserialize)]
pub struct AdjustStockInput {
    pub operation: StockOperation,
    pub amount: i32,
}

/// Row for the joined inventory view
#[derive(Debug, FromRow)]
struct InventoryRow {
    id: Uuid,
    product_name: String,
    size: String,
    color: String,
    stock: i32,
}

impl From<InventoryRow> for InventoryItem {
    fn from(row: InventoryRow) -> Self {
        InventoryItem {
            id: row.id,
            product_name: row.product_name,
            size: row.size,
            color: row.color,
            stock: row.stock,
        }
    }
}

impl InventoryService {
    /// Create a new InventoryService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// List every variant joined with its product name, oldest product first
    pub async fn list_inventory(&self) -> AppResult<Vec<InventoryItem>> {
        let rows = sqlx::query_as::<_, InventoryRow>(
            r#"
            SELECT v.id, p.name AS product_name, v.size, v.color, v.stock
            FROM product_variants v
            JOIN products p ON p.id = v.product_id
            ORDER BY p.created_at, v.created_at
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Apply a manual stock adjustment to a variant.
    ///
    /// The variant row is locked for the duration so concurrent
    /// adjustments and sales serialize instead of clobbering each
    /// other. Subtracting below zero clamps the stock at zero.
    pub async fn adjust_stock(
        &self,
        variant_id: Uuid,
        input: AdjustStockInput,
    ) -> AppResult<InventoryItem> {
        if input.amount <= 0 {
            return Err(AppError::Validation {
                field: "amount".to_string(),
                message: "Amount must be greater than zero".to_string(),
                message_es: "La cantidad debe ser mayor que cero".to_string(),
            });
        }

        let mut tx = self.db.begin().await?;

        let row = sqlx::query_as::<_, InventoryRow>(
            r#"
            SELECT v.id, p.name AS product_name, v.size, v.color, v.stock
            FROM product_variants v
            JOIN products p ON p.id = v.product_id
            WHERE v.id = $1
            FOR UPDATE OF v
            "#,
        )
        .bind(variant_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound("Variant".to_string()))?;

        let new_stock = stats::adjust_stock(row.stock, input.operation, input.amount);

        sqlx::query("UPDATE product_variants SET stock = $1, updated_at = NOW() WHERE id = $2")
            .bind(new_stock)
            .bind(variant_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::info!(
            variant_id = %variant_id,
            operation = input.operation.as_str(),
            amount = input.amount,
            old_stock = row.stock,
            new_stock,
            "stock adjusted"
        );

        Ok(InventoryItem {
            id: row.id,
            product_name: row.product_name,
            size: row.size,
            color: row.color,
            stock: new_stock,
        })
    }

    /// List variants whose stock has fallen below the low-stock threshold
    pub async fn low_stock(&self) -> AppResult<Vec<InventoryItem>> {
        let rows = sqlx::query_as::<_, InventoryRow>(
            r#"
            SELECT v.id, p.name AS product_name, v.size, v.color, v.stock
            FROM product_variants v
            JOIN products p ON p.id = v.product_id
            WHERE v.stock < $1
            ORDER BY v.stock, p.name
            "#,
        )
        .bind(LOW_STOCK_THRESHOLD)
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Stock totals grouped by product, in inventory order
    pub async fn stock_by_product(&self) -> AppResult<Vec<StockPoint>> {
        let items = self.list_inventory().await?;
        Ok(stats::stock_by_product(&items))
    }
}
