//! Dashboard service: loads raw rows and delegates the math to
//! `shared::stats` so the numbers match what the wasm bindings compute.

use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::error::AppResult;
use crate::services::InventoryService;
use shared::models::{ProductVariant, Sale};
use shared::stats::{self, DashboardStats, SalesPoint, StockPoint};

/// Dashboard service
#[derive(Clone)]
pub struct DashboardService {
    db: PgPool,
}

#[derive(Debug, FromRow)]
struct VariantStockRow {
    id: Uuid,
    product_id: Uuid,
    size: String,
    color: String,
    stock: i32,
    created_at: chrono::DateTime<chrono::Utc>,
    updated_at: chrono::DateTime<chrono::Utc>,
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

impl DashboardService {
    /// Create a new DashboardService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Headline numbers: revenue, stock on hand, recent sales, low-stock count
    pub async fn stats(&self) -> AppResult<DashboardStats> {
        let variants = self.load_variants().await?;
        let sales = self.load_sales().await?;

        Ok(stats::compute_dashboard_stats(&variants, &sales, Utc::now()))
    }

    /// Seven-day sales series ending today, one bucket per calendar day
    pub async fn sales_chart(&self) -> AppResult<Vec<SalesPoint>> {
        let sales = self.load_sales().await?;

        Ok(stats::weekly_sales_series(
            &sales,
            Utc::now().date_naive(),
        ))
    }

    /// Stock totals per product for the inventory chart
    pub async fn stock_chart(&self) -> AppResult<Vec<StockPoint>> {
        InventoryService::new(self.db.clone()).stock_by_product().await
    }

    async fn load_variants(&self) -> AppResult<Vec<ProductVariant>> {
        let rows = sqlx::query_as::<_, VariantStockRow>(
            r#"
            SELECT id, product_id, size, color, stock, created_at, updated_at
            FROM product_variants
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| ProductVariant {
                id: r.id,
                product_id: r.product_id,
                size: r.size,
                color: r.color,
                stock: r.stock,
                created_at: r.created_at,
                updated_at: r.updated_at,
            })
            .collect())
    }

    async fn load_sales(&self) -> AppResult<Vec<Sale>> {
        let rows = sqlx::query_as::<_, SaleRow>(
            r#"
            SELECT id, product_name, size, color, quantity, unit_price, total, sold_at
            FROM sales
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| Sale {
                id: r.id,
                product_name: r.product_name,
                size: r.size,
                color: r.color,
                quantity: r.quantity,
                unit_price: r.unit_price,
                total: r.total,
                sold_at: r.sold_at,
            })
            .collect())
    }
}
