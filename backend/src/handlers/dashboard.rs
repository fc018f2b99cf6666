//! HTTP handlers for dashboard endpoints

use axum::{extract::State, Json};

use crate::error::AppResult;
use crate::services::DashboardService;
use crate::AppState;
use shared::stats::{DashboardStats, SalesPoint, StockPoint};

/// Headline dashboard numbers
pub async fn dashboard_stats(State(state): State<AppState>) -> AppResult<Json<DashboardStats>> {
    let service = DashboardService::new(state.db);
    let stats = service.stats().await?;
    Ok(Json(stats))
}

/// Seven-day sales chart series
pub async fn sales_chart(State(state): State<AppState>) -> AppResult<Json<Vec<SalesPoint>>> {
    let service = DashboardService::new(state.db);
    let series = service.sales_chart().await?;
    Ok(Json(series))
}

/// Stock-by-product chart series
pub async fn stock_chart(State(state): State<AppState>) -> AppResult<Json<Vec<StockPoint>>> {
    let service = DashboardService::new(state.db);
    let series = service.stock_chart().await?;
    Ok(Json(series))
}
