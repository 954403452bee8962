//! Category entity model and DTOs.

use fintrack_core::finance::TransactionType;
use fintrack_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: DbId,
    #[serde(skip)]
    pub user_id: DbId,
    pub name: String,
    /// `"income"` or `"expense"`; see [`TransactionType`].
    #[serde(rename = "type")]
    pub category_type: String,
    pub color: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Category {
    /// Parsed category type. `None` only if the row predates the CHECK constraint.
    pub fn kind(&self) -> Option<TransactionType> {
        self.category_type.parse().ok()
    }
}

/// DTO for creating a category.
#[derive(Debug, Clone)]
pub struct CreateCategory {
    pub name: String,
    pub category_type: TransactionType,
    pub color: String,
}
