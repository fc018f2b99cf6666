//! Reference data: sizes and colors used to populate selection controls.
//! Matched free-text against variant fields; no relationship is enforced.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A size label (S, M, L, ...)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Size {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// A color with its hex code for swatch rendering
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Color {
    pub id: Uuid,
    pub name: String,
    pub hex: String,
    pub created_at: DateTime<Utc>,
}
