//! HTTP handlers for inventory endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::error::AppResult;
use crate::services::inventory::{AdjustStockInput, InventoryService};
use crate::AppState;
use shared::models::InventoryItem;
use shared::stats::StockPoint;

/// List the full inventory, one row per variant
pub async fn list_inventory(State(state): State<AppState>) -> AppResult<Json<Vec<InventoryItem>>> {
    let service = InventoryService::new(state.db);
    let items = service.list_inventory().await?;
    Ok(Json(items))
}

/// Apply a manual stock adjustment to a variant
pub async fn adjust_stock(
    State(state): State<AppState>,
    Path(variant_id): Path<Uuid>,
    Json(input): Json<AdjustStockInput>,
) -> AppResult<Json<InventoryItem>> {
    let service = InventoryService::new(state.db);
    let item = service.adjust_stock(variant_id, input).await?;
    Ok(Json(item))
}

/// List variants below the low-stock threshold
pub async fn low_stock(State(state): State<AppState>) -> AppResult<Json<Vec<InventoryItem>>> {
    let service = InventoryService::new(state.db);
    let items = service.low_stock().await?;
    Ok(Json(items))
}

/// Stock totals grouped by product
pub async fn stock_by_product(State(state): State<AppState>) -> AppResult<Json<Vec<StockPoint>>> {
    let service = InventoryService::new(state.db);
    let points = service.stock_by_product().await?;
    Ok(Json(points))
}
