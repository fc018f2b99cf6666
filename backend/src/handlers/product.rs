//! HTTP handlers for product and variant management endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::error::AppResult;
use crate::services::product::{
    CreateProductInput, CreateVariantInput, ProductService, UpdateProductInput, UpdateVariantInput,
};
use crate::AppState;
use shared::models::{Product, ProductVariant, ProductWithVariants};

/// List all products with variants
pub async fn list_products(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ProductWithVariants>>> {
    let service = ProductService::new(state.db);
    let products = service.list_products().await?;
    Ok(Json(products))
}

/// Get a single product with its variants
pub async fn get_product(
    State(state): State<AppState>,
    Path(product_id): Path<Uuid>,
) -> AppResult<Json<ProductWithVariants>> {
    let service = ProductService::new(state.db);
    let product = service.get_product(product_id).await?;
    Ok(Json(product))
}

/// Create a product
pub async fn create_product(
    State(state): State<AppState>,
    Json(input): Json<CreateProductInput>,
) -> AppResult<(StatusCode, Json<Product>)> {
    let service = ProductService::new(state.db);
    let product = service.create_product(input).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Update a product
pub async fn update_product(
    State(state): State<AppState>,
    Path(product_id): Path<Uuid>,
    Json(input): Json<UpdateProductInput>,
) -> AppResult<Json<Product>> {
    let service = ProductService::new(state.db);
    let product = service.update_product(product_id, input).await?;
    Ok(Json(product))
}

/// Delete a product and its variants
pub async fn delete_product(
    State(state): State<AppState>,
    Path(product_id): Path<Uuid>,
) -> AppResult<StatusCode> {
    let service = ProductService::new(state.db);
    service.delete_product(product_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Add a variant to a product
pub async fn add_variant(
    State(state): State<AppState>,
    Path(product_id): Path<Uuid>,
    Json(input): Json<CreateVariantInput>,
) -> AppResult<(StatusCode, Json<ProductVariant>)> {
    let service = ProductService::new(state.db);
    let variant = service.add_variant(product_id, input).await?;
    Ok((StatusCode::CREATED, Json(variant)))
}

/// Update a variant's labels
pub async fn update_variant(
    State(state): State<AppState>,
    Path((_product_id, variant_id)): Path<(Uuid, Uuid)>,
    Json(input): Json<UpdateVariantInput>,
) -> AppResult<Json<ProductVariant>> {
    let service = ProductService::new(state.db);
    let variant = service.update_variant(variant_id, input).await?;
    Ok(Json(variant))
}

/// Delete a variant
pub async fn delete_variant(
    State(state): State<AppState>,
    Path((_product_id, variant_id)): Path<(Uuid, Uuid)>,
) -> AppResult<StatusCode> {
    let service = ProductService::new(state.db);
    service.delete_variant(variant_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
