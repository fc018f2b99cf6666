//! Product management service: products and their size/color variants

use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use serde::Deserialize;
use shared::models::{Product, ProductVariant, ProductWithVariants};
use shared::validation::{validate_name, validate_stock};

/// Product service for managing products and variants
#[derive(Clone)]
pub struct ProductService {
    db: PgPool,
}

/// Input for creating a product
#[derive(Debug, Deserialize)]
pub struct CreateProductInput {
    pub name: String,
    pub description: Option<String>,
}

/// Input for updating a product
#[derive(Debug, Deserialize)]
pub struct UpdateProductInput {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Input for adding a variant to a product
#[derive(Debug, Deserialize)]
pub struct CreateVariantInput {
    pub size: String,
    pub color: String,
    pub stock: i32,
}

/// Input for updating a variant's labels. Stock is deliberately absent:
/// it only changes through stock adjustments or sale fulfillment.
#[derive(Debug, Deserialize)]
pub struct UpdateVariantInput {
    pub size: Option<String>,
    pub color: Option<String>,
}

/// Row for product queries
#[derive(Debug, FromRow)]
struct ProductRow {
    id: Uuid,
    name: String,
    description: Option<String>,
    created_at: chrono::DateTime<chrono::Utc>,
    updated_at: chrono::DateTime<chrono::Utc>,
}

/// Row for variant queries
#[derive(Debug, FromRow)]
struct VariantRow {
    id: Uuid,
    product_id: Uuid,
    size: String,
    color: String,
    stock: i32,
    created_at: chrono::DateTime<chrono::Utc>,
    updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            id: row.id,
            name: row.name,
            description: row.description,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

impl From<VariantRow> for ProductVariant {
    fn from(row: VariantRow) -> Self {
        ProductVariant {
            id: row.id,
            product_id: row.product_id,
            size: row.size,
            color: row.color,
            stock: row.stock,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

impl ProductService {
    /// Create a new ProductService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// List all products with their variants and summed stock
    pub async fn list_products(&self) -> AppResult<Vec<ProductWithVariants>> {
        let products = sqlx::query_as::<_, ProductRow>(
            "SELECT id, name, description, created_at, updated_at FROM products ORDER BY created_at",
        )
        .fetch_all(&self.db)
        .await?;

        let variants = sqlx::query_as::<_, VariantRow>(
            r#"
            SELECT id, product_id, size, color, stock, created_at, updated_at
            FROM product_variants
            ORDER BY created_at
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        let variants: Vec<ProductVariant> = variants.into_iter().map(Into::into).collect();

        Ok(products
            .into_iter()
            .map(|p| Self::assemble(p.into(), &variants))
            .collect())
    }

    /// Get a single product with its variants
    pub async fn get_product(&self, product_id: Uuid) -> AppResult<ProductWithVariants> {
        let product = sqlx::query_as::<_, ProductRow>(
            "SELECT id, name, description, created_at, updated_at FROM products WHERE id = $1",
        )
        .bind(product_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Product".to_string()))?;

        let variants = sqlx::query_as::<_, VariantRow>(
            r#"
            SELECT id, product_id, size, color, stock, created_at, updated_at
            FROM product_variants
            WHERE product_id = $1
            ORDER BY created_at
            "#,
        )
        .bind(product_id)
        .fetch_all(&self.db)
        .await?;

        let variants: Vec<ProductVariant> = variants.into_iter().map(Into::into).collect();

        Ok(Self::assemble(product.into(), &variants))
    }

    /// Create a new product
    pub async fn create_product(&self, input: CreateProductInput) -> AppResult<Product> {
        if let Err(msg) = validate_name(&input.name) {
            return Err(AppError::Validation {
                field: "name".to_string(),
                message: msg.to_string(),
                message_es: "El nombre no puede estar vacío".to_string(),
            });
        }

        let product = sqlx::query_as::<_, ProductRow>(
            r#"
            INSERT INTO products (name, description)
            VALUES ($1, $2)
            RETURNING id, name, description, created_at, updated_at
            "#,
        )
        .bind(input.name.trim())
        .bind(&input.description)
        .fetch_one(&self.db)
        .await?;

        Ok(product.into())
    }

    /// Update a product's name and description.
    ///
    /// Omitted fields keep their stored values, so a description can be
    /// overwritten (including with an empty string) but not cleared back
    /// to NULL through this endpoint.
    pub async fn update_product(
        &self,
        product_id: Uuid,
        input: UpdateProductInput,
    ) -> AppResult<Product> {
        let existing = sqlx::query_as::<_, ProductRow>(
            "SELECT id, name, description, created_at, updated_at FROM products WHERE id = $1",
        )
        .bind(product_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Product".to_string()))?;

        let name = input.name.unwrap_or(existing.name);
        let description = input.description.or(existing.description);

        if let Err(msg) = validate_name(&name) {
            return Err(AppError::Validation {
                field: "name".to_string(),
                message: msg.to_string(),
                message_es: "El nombre no puede estar vacío".to_string(),
            });
        }

        let product = sqlx::query_as::<_, ProductRow>(
            r#"
            UPDATE products
            SET name = $1, description = $2, updated_at = NOW()
            WHERE id = $3
            RETURNING id, name, description, created_at, updated_at
            "#,
        )
        .bind(name.trim())
        .bind(&description)
        .bind(product_id)
        .fetch_one(&self.db)
        .await?;

        Ok(product.into())
    }

    /// Delete a product; its variants go with it (ON DELETE CASCADE)
    pub async fn delete_product(&self, product_id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(product_id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Product".to_string()));
        }

        Ok(())
    }

    /// Add a variant to a product with an initial stock
    pub async fn add_variant(
        &self,
        product_id: Uuid,
        input: CreateVariantInput,
    ) -> AppResult<ProductVariant> {
        if let Err(msg) = validate_stock(input.stock) {
            return Err(AppError::Validation {
                field: "stock".to_string(),
                message: msg.to_string(),
                message_es: "El stock no puede ser negativo".to_string(),
            });
        }

        for (field, value) in [("size", &input.size), ("color", &input.color)] {
            if let Err(msg) = validate_name(value) {
                return Err(AppError::Validation {
                    field: field.to_string(),
                    message: msg.to_string(),
                    message_es: "El campo no puede estar vacío".to_string(),
                });
            }
        }

        // Validate product exists
        let product_exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM products WHERE id = $1)")
                .bind(product_id)
                .fetch_one(&self.db)
                .await?;

        if !product_exists {
            return Err(AppError::NotFound("Product".to_string()));
        }

        let variant = sqlx::query_as::<_, VariantRow>(
            r#"
            INSERT INTO product_variants (product_id, size, color, stock)
            VALUES ($1, $2, $3, $4)
            RETURNING id, product_id, size, color, stock, created_at, updated_at
            "#,
        )
        .bind(product_id)
        .bind(input.size.trim())
        .bind(input.color.trim())
        .bind(input.stock)
        .fetch_one(&self.db)
        .await?;

        Ok(variant.into())
    }

    /// Update a variant's size/color labels. Sales keep their own
    /// denormalized snapshot, so history is unaffected.
    pub async fn update_variant(
        &self,
        variant_id: Uuid,
        input: UpdateVariantInput,
    ) -> AppResult<ProductVariant> {
        let existing = sqlx::query_as::<_, VariantRow>(
            r#"
            SELECT id, product_id, size, color, stock, created_at, updated_at
            FROM product_variants
            WHERE id = $1
            "#,
        )
        .bind(variant_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Variant".to_string()))?;

        let size = input.size.unwrap_or(existing.size);
        let color = input.color.unwrap_or(existing.color);

        for (field, value) in [("size", &size), ("color", &color)] {
            if let Err(msg) = validate_name(value) {
                return Err(AppError::Validation {
                    field: field.to_string(),
                    message: msg.to_string(),
                    message_es: "El campo no puede estar vacío".to_string(),
                });
            }
        }

        let variant = sqlx::query_as::<_, VariantRow>(
            r#"
            UPDATE product_variants
            SET size = $1, color = $2, updated_at = NOW()
            WHERE id = $3
            RETURNING id, product_id, size, color, stock, created_at, updated_at
            "#,
        )
        .bind(size.trim())
        .bind(color.trim())
        .bind(variant_id)
        .fetch_one(&self.db)
        .await?;

        Ok(variant.into())
    }

    /// Delete a variant
    pub async fn delete_variant(&self, variant_id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM product_variants WHERE id = $1")
            .bind(variant_id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Variant".to_string()));
        }

        Ok(())
    }

    fn assemble(product: Product, all_variants: &[ProductVariant]) -> ProductWithVariants {
        let variants: Vec<ProductVariant> = all_variants
            .iter()
            .filter(|v| v.product_id == product.id)
            .cloned()
            .collect();

        let total_stock = variants.iter().map(|v| i64::from(v.stock)).sum();

        ProductWithVariants {
            id: product.id,
            name: product.name,
            description: product.description,
            total_stock,
            variants,
        }
    }
}
