//! Catalog service for the size and color reference lists

use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use serde::Deserialize;
use shared::models::{Color, Size};
use shared::validation::{validate_hex_color, validate_name};

/// Catalog service
#[derive(Clone)]
pub struct CatalogService {
    db: PgPool,
}

/// Input for creating or renaming a size
#[derive(Debug, Deserialize)]
pub struct SizeInput {
    pub name: String,
}

/// Input for creating or updating a color
#[derive(Debug, Deserialize)]
pub struct ColorInput {
    pub name: String,
    pub hex: String,
}

#[derive(Debug, FromRow)]
struct SizeRow {
    id: Uuid,
    name: String,
    created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, FromRow)]
struct ColorRow {
    id: Uuid,
    name: String,
    hex: String,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl From<SizeRow> for Size {
    fn from(row: SizeRow) -> Self {
        Size {
            id: row.id,
            name: row.name,
            created_at: row.created_at,
        }
    }
}

impl From<ColorRow> for Color {
    fn from(row: ColorRow) -> Self {
        Color {
            id: row.id,
            name: row.name,
            hex: row.hex,
            created_at: row.created_at,
        }
    }
}

impl CatalogService {
    /// Create a new CatalogService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// List all sizes in creation order
    pub async fn list_sizes(&self) -> AppResult<Vec<Size>> {
        let rows = sqlx::query_as::<_, SizeRow>(
            "SELECT id, name, created_at FROM sizes ORDER BY created_at",
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Add a size; duplicate names (case-insensitive) are rejected
    pub async fn create_size(&self, input: SizeInput) -> AppResult<Size> {
        let name = self.checked_name(&input.name)?;

        let existing = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM sizes WHERE LOWER(name) = LOWER($1)",
        )
        .bind(&name)
        .fetch_one(&self.db)
        .await?;

        if existing > 0 {
            return Err(AppError::DuplicateEntry("size".to_string()));
        }

        let row = sqlx::query_as::<_, SizeRow>(
            "INSERT INTO sizes (name) VALUES ($1) RETURNING id, name, created_at",
        )
        .bind(&name)
        .fetch_one(&self.db)
        .await?;

        Ok(row.into())
    }

    /// Rename a size. Variants store size labels as plain text, so
    /// existing variants keep the old label.
    pub async fn update_size(&self, size_id: Uuid, input: SizeInput) -> AppResult<Size> {
        let name = self.checked_name(&input.name)?;

        let existing = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM sizes WHERE LOWER(name) = LOWER($1) AND id <> $2",
        )
        .bind(&name)
        .bind(size_id)
        .fetch_one(&self.db)
        .await?;

        if existing > 0 {
            return Err(AppError::DuplicateEntry("size".to_string()));
        }

        let row = sqlx::query_as::<_, SizeRow>(
            "UPDATE sizes SET name = $1 WHERE id = $2 RETURNING id, name, created_at",
        )
        .bind(&name)
        .bind(size_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Size".to_string()))?;

        Ok(row.into())
    }

    /// Delete a size
    pub async fn delete_size(&self, size_id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM sizes WHERE id = $1")
            .bind(size_id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Size".to_string()));
        }

        Ok(())
    }

    /// List all colors in creation order
    pub async fn list_colors(&self) -> AppResult<Vec<Color>> {
        let rows = sqlx::query_as::<_, ColorRow>(
            "SELECT id, name, hex, created_at FROM colors ORDER BY created_at",
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Add a color with a #RRGGBB swatch
    pub async fn create_color(&self, input: ColorInput) -> AppResult<Color> {
        let name = self.checked_name(&input.name)?;
        let hex = self.checked_hex(&input.hex)?;

        let existing = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM colors WHERE LOWER(name) = LOWER($1)",
        )
        .bind(&name)
        .fetch_one(&self.db)
        .await?;

        if existing > 0 {
            return Err(AppError::DuplicateEntry("color".to_string()));
        }

        let row = sqlx::query_as::<_, ColorRow>(
            "INSERT INTO colors (name, hex) VALUES ($1, $2) RETURNING id, name, hex, created_at",
        )
        .bind(&name)
        .bind(&hex)
        .fetch_one(&self.db)
        .await?;

        Ok(row.into())
    }

    /// Update a color's name and swatch
    pub async fn update_color(&self, color_id: Uuid, input: ColorInput) -> AppResult<Color> {
        let name = self.checked_name(&input.name)?;
        let hex = self.checked_hex(&input.hex)?;

        let existing = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM colors WHERE LOWER(name) = LOWER($1) AND id <> $2",
        )
        .bind(&name)
        .bind(color_id)
        .fetch_one(&self.db)
        .await?;

        if existing > 0 {
            return Err(AppError::DuplicateEntry("color".to_string()));
        }

        let row = sqlx::query_as::<_, ColorRow>(
            r#"
            UPDATE colors SET name = $1, hex = $2
            WHERE id = $3
            RETURNING id, name, hex, created_at
            "#,
        )
        .bind(&name)
        .bind(&hex)
        .bind(color_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Color".to_string()))?;

        Ok(row.into())
    }

    /// Delete a color
    pub async fn delete_color(&self, color_id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM colors WHERE id = $1")
            .bind(color_id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Color".to_string()));
        }

        Ok(())
    }

    fn checked_name(&self, name: &str) -> AppResult<String> {
        validate_name(name).map_err(|msg| AppError::Validation {
            field: "name".to_string(),
            message: msg.to_string(),
            message_es: "El nombre no puede estar vacío".to_string(),
        })?;

        Ok(name.trim().to_string())
    }

    fn checked_hex(&self, hex: &str) -> AppResult<String> {
        validate_hex_color(hex).map_err(|msg| AppError::Validation {
            field: "hex".to_string(),
            message: msg.to_string(),
            message_es: "El color debe tener formato #RRGGBB".to_string(),
        })?;

        Ok(hex.trim().to_uppercase())
    }
}
