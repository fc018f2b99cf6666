//! Sales service: registration, history maintenance, and CSV export
//!
//! A registered sale snapshots the product name, size, and color at the
//! moment of sale. Later edits or deletions of products and variants
//! never rewrite sales history, and editing or deleting a sale never
//! touches variant stock.

use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use serde::Deserialize;
use shared::models::Sale;
use shared::stats::sale_total;
use shared::types::DateRange;
use shared::validation::{
    validate_name, validate_quantity, validate_sufficient_stock, validate_unit_price,
};

/// Sales service
#[derive(Clone)]
pub struct SaleService {
    db: PgPool,
}

/// Input for registering a sale against a live variant.
/// The variant must belong to the named product.
#[derive(Debug, Deserialize)]
pub struct RegisterSaleInput {
    pub product_id: Uuid,
    pub variant_id: Uuid,
    pub quantity: i32,
    pub unit_price: Decimal,
}

/// Input for correcting a recorded sale
#[derive(Debug, Deserialize)]
pub struct UpdateSaleInput {
    pub product_name: Option<String>,
    pub size: Option<String>,
    pub color: Option<String>,
    pub quantity: Option<i32>,
    pub unit_price: Option<Decimal>,
}

#[derive(Debug, FromRow)]
struct SaleRow {
    id: Uuid,
    product_name: String,
    size: String,
    color: String,
    quantity: i32,
    unit_price: Decimal,
    total: Decimal,
    sold_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, FromRow)]
struct VariantForSaleRow {
    product_name: String,
    size: String,
    color: String,
    stock: i32,
}

impl From<SaleRow> for Sale {
    fn from(row: SaleRow) -> Self {
        Sale {
            id: row.id,
            product_name: row.product_name,
            size: row.size,
            color: row.color,
            quantity: row.quantity,
            unit_price: row.unit_price,
            total: row.total,
            sold_at: row.sold_at,
        }
    }
}

impl SaleService {
    /// Create a new SaleService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// List sales, newest first, optionally restricted to a date range
    /// (both endpoints inclusive, compared on the calendar day)
    pub async fn list_sales(&self, range: Option<DateRange>) -> AppResult<Vec<Sale>> {
        let rows = match range {
            Some(range) => {
                sqlx::query_as::<_, SaleRow>(
                    r#"
                    SELECT id, product_name, size, color, quantity, unit_price, total, sold_at
                    FROM sales
                    WHERE sold_at::date BETWEEN $1 AND $2
                    ORDER BY sold_at DESC
                    "#,
                )
                .bind(range.start)
                .bind(range.end)
                .fetch_all(&self.db)
                .await?
            }
            None => {
                sqlx::query_as::<_, SaleRow>(
                    r#"
                    SELECT id, product_name, size, color, quantity, unit_price, total, sold_at
                    FROM sales
                    ORDER BY sold_at DESC
                    "#,
                )
                .fetch_all(&self.db)
                .await?
            }
        };

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Register a sale: check stock, decrement it, and record the sale
    /// with a snapshot of the variant's labels, all in one transaction.
    /// The variant row is locked so two concurrent sales of the last
    /// units cannot both succeed.
    pub async fn register_sale(&self, input: RegisterSaleInput) -> AppResult<Sale> {
        self.validate_amounts(input.quantity, input.unit_price)?;

        let mut tx = self.db.begin().await?;

        let variant = sqlx::query_as::<_, VariantForSaleRow>(
            r#"
            SELECT p.name AS product_name, v.size, v.color, v.stock
            FROM product_variants v
            JOIN products p ON p.id = v.product_id
            WHERE v.id = $1 AND v.product_id = $2
            FOR UPDATE OF v
            "#,
        )
        .bind(input.variant_id)
        .bind(input.product_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound("Variant".to_string()))?;

        // Rejecting here, before the writes, rolls the transaction back
        // with stock and history untouched
        if validate_sufficient_stock(variant.stock, input.quantity).is_err() {
            return Err(AppError::InsufficientStock(format!(
                "Only {} units available, requested {}",
                variant.stock, input.quantity
            )));
        }

        sqlx::query(
            "UPDATE product_variants SET stock = stock - $1, updated_at = NOW() WHERE id = $2",
        )
        .bind(input.quantity)
        .bind(input.variant_id)
        .execute(&mut *tx)
        .await?;

        let total = sale_total(input.unit_price, input.quantity);

        let sale = sqlx::query_as::<_, SaleRow>(
            r#"
            INSERT INTO sales (product_name, size, color, quantity, unit_price, total)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, product_name, size, color, quantity, unit_price, total, sold_at
            "#,
        )
        .bind(&variant.product_name)
        .bind(&variant.size)
        .bind(&variant.color)
        .bind(input.quantity)
        .bind(input.unit_price)
        .bind(total)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::info!(
            sale_id = %sale.id,
            variant_id = %input.variant_id,
            quantity = input.quantity,
            "sale registered"
        );

        Ok(sale.into())
    }

    /// Correct a recorded sale. The total is recomputed from the final
    /// unit price and quantity; variant stock is left alone because the
    /// sale is a historical record, not a reservation.
    pub async fn update_sale(&self, sale_id: Uuid, input: UpdateSaleInput) -> AppResult<Sale> {
        let existing = sqlx::query_as::<_, SaleRow>(
            r#"
            SELECT id, product_name, size, color, quantity, unit_price, total, sold_at
            FROM sales
            WHERE id = $1
            "#,
        )
        .bind(sale_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Sale".to_string()))?;

        let product_name = input.product_name.unwrap_or(existing.product_name);
        let size = input.size.unwrap_or(existing.size);
        let color = input.color.unwrap_or(existing.color);
        let quantity = input.quantity.unwrap_or(existing.quantity);
        let unit_price = input.unit_price.unwrap_or(existing.unit_price);

        self.validate_amounts(quantity, unit_price)?;
        if let Err(msg) = validate_name(&product_name) {
            return Err(AppError::Validation {
                field: "product_name".to_string(),
                message: msg.to_string(),
                message_es: "El nombre no puede estar vacío".to_string(),
            });
        }

        let total = sale_total(unit_price, quantity);

        let sale = sqlx::query_as::<_, SaleRow>(
            r#"
            UPDATE sales
            SET product_name = $1, size = $2, color = $3,
                quantity = $4, unit_price = $5, total = $6
            WHERE id = $7
            RETURNING id, product_name, size, color, quantity, unit_price, total, sold_at
            "#,
        )
        .bind(product_name.trim())
        .bind(&size)
        .bind(&color)
        .bind(quantity)
        .bind(unit_price)
        .bind(total)
        .bind(sale_id)
        .fetch_one(&self.db)
        .await?;

        Ok(sale.into())
    }

    /// Delete a sale record. Stock is not restored.
    pub async fn delete_sale(&self, sale_id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM sales WHERE id = $1")
            .bind(sale_id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Sale".to_string()));
        }

        Ok(())
    }

    /// Export sales as CSV, newest first, honoring the same date filter
    /// as the list endpoint
    pub async fn export_csv(&self, range: Option<DateRange>) -> AppResult<String> {
        let sales = self.list_sales(range).await?;

        let mut writer = csv::Writer::from_writer(Vec::new());

        writer
            .write_record([
                "id",
                "product_name",
                "size",
                "color",
                "quantity",
                "unit_price",
                "total",
                "sold_at",
            ])
            .map_err(|e| AppError::Internal(format!("CSV write failed: {}", e)))?;

        for sale in &sales {
            writer
                .write_record([
                    sale.id.to_string(),
                    sale.product_name.clone(),
                    sale.size.clone(),
                    sale.color.clone(),
                    sale.quantity.to_string(),
                    sale.unit_price.to_string(),
                    sale.total.to_string(),
                    sale.sold_at.to_rfc3339(),
                ])
                .map_err(|e| AppError::Internal(format!("CSV write failed: {}", e)))?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| AppError::Internal(format!("CSV flush failed: {}", e)))?;

        String::from_utf8(bytes).map_err(|e| AppError::Internal(format!("CSV encoding: {}", e)))
    }

    fn validate_amounts(&self, quantity: i32, unit_price: Decimal) -> AppResult<()> {
        if let Err(msg) = validate_quantity(quantity) {
            return Err(AppError::Validation {
                field: "quantity".to_string(),
                message: msg.to_string(),
                message_es: "La cantidad debe ser mayor que cero".to_string(),
            });
        }

        if let Err(msg) = validate_unit_price(unit_price) {
            return Err(AppError::Validation {
                field: "unit_price".to_string(),
                message: msg.to_string(),
                message_es: "El precio no puede ser negativo".to_string(),
            });
        }

        Ok(())
    }
}
