//! HTTP handlers for sales endpoints

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;

use crate::error::AppResult;
use crate::services::sale::{RegisterSaleInput, SaleService, UpdateSaleInput};
use crate::AppState;
use shared::models::Sale;
use shared::types::DateRange;

/// Optional date filter for the sales list and export
#[derive(Debug, Deserialize)]
pub struct SalesQuery {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl SalesQuery {
    fn range(&self) -> Option<DateRange> {
        if self.from.is_none() && self.to.is_none() {
            return None;
        }

        // Open endpoints fall back to dates Postgres can hold
        let start = self
            .from
            .or_else(|| NaiveDate::from_ymd_opt(1970, 1, 1))?;
        let end = self
            .to
            .or_else(|| NaiveDate::from_ymd_opt(9999, 12, 31))?;

        Some(DateRange { start, end })
    }
}

/// List sales, newest first, optionally filtered by date
pub async fn list_sales(
    State(state): State<AppState>,
    Query(query): Query<SalesQuery>,
) -> AppResult<Json<Vec<Sale>>> {
    let service = SaleService::new(state.db);
    let sales = service.list_sales(query.range()).await?;
    Ok(Json(sales))
}

/// Register a sale against a variant
pub async fn register_sale(
    State(state): State<AppState>,
    Json(input): Json<RegisterSaleInput>,
) -> AppResult<(StatusCode, Json<Sale>)> {
    let service = SaleService::new(state.db);
    let sale = service.register_sale(input).await?;
    Ok((StatusCode::CREATED, Json(sale)))
}

/// Correct a recorded sale
pub async fn update_sale(
    State(state): State<AppState>,
    Path(sale_id): Path<Uuid>,
    Json(input): Json<UpdateSaleInput>,
) -> AppResult<Json<Sale>> {
    let service = SaleService::new(state.db);
    let sale = service.update_sale(sale_id, input).await?;
    Ok(Json(sale))
}

/// Delete a sale record
pub async fn delete_sale(
    State(state): State<AppState>,
    Path(sale_id): Path<Uuid>,
) -> AppResult<StatusCode> {
    let service = SaleService::new(state.db);
    service.delete_sale(sale_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Export the sales history as a CSV download
pub async fn export_sales(
    State(state): State<AppState>,
    Query(query): Query<SalesQuery>,
) -> AppResult<impl IntoResponse> {
    let service = SaleService::new(state.db);
    let csv = service.export_csv(query.range()).await?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"sales.csv\"",
            ),
        ],
        csv,
    ))
}
