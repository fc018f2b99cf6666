//! HTTP handlers for the size and color settings endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::error::AppResult;
use crate::services::catalog::{CatalogService, ColorInput, SizeInput};
use crate::AppState;
use shared::models::{Color, Size};

/// List all sizes
pub async fn list_sizes(State(state): State<AppState>) -> AppResult<Json<Vec<Size>>> {
    let service = CatalogService::new(state.db);
    let sizes = service.list_sizes().await?;
    Ok(Json(sizes))
}

/// Create a size
pub async fn create_size(
    State(state): State<AppState>,
    Json(input): Json<SizeInput>,
) -> AppResult<(StatusCode, Json<Size>)> {
    let service = CatalogService::new(state.db);
    let size = service.create_size(input).await?;
    Ok((StatusCode::CREATED, Json(size)))
}

/// Rename a size
pub async fn update_size(
    State(state): State<AppState>,
    Path(size_id): Path<Uuid>,
    Json(input): Json<SizeInput>,
) -> AppResult<Json<Size>> {
    let service = CatalogService::new(state.db);
    let size = service.update_size(size_id, input).await?;
    Ok(Json(size))
}

/// Delete a size
pub async fn delete_size(
    State(state): State<AppState>,
    Path(size_id): Path<Uuid>,
) -> AppResult<StatusCode> {
    let service = CatalogService::new(state.db);
    service.delete_size(size_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// List all colors
pub async fn list_colors(State(state): State<AppState>) -> AppResult<Json<Vec<Color>>> {
    let service = CatalogService::new(state.db);
    let colors = service.list_colors().await?;
    Ok(Json(colors))
}

/// Create a color
pub async fn create_color(
    State(state): State<AppState>,
    Json(input): Json<ColorInput>,
) -> AppResult<(StatusCode, Json<Color>)> {
    let service = CatalogService::new(state.db);
    let color = service.create_color(input).await?;
    Ok((StatusCode::CREATED, Json(color)))
}

/// Update a color
pub async fn update_color(
    State(state): State<AppState>,
    Path(color_id): Path<Uuid>,
    Json(input): Json<ColorInput>,
) -> AppResult<Json<Color>> {
    let service = CatalogService::new(state.db);
    let color = service.update_color(color_id, input).await?;
    Ok(Json(color))
}

/// Delete a color
pub async fn delete_color(
    State(state): State<AppState>,
    Path(color_id): Path<Uuid>,
) -> AppResult<StatusCode> {
    let service = CatalogService::new(state.db);
    service.delete_color(color_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
