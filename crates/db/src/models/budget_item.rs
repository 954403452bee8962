//! Budget item entity model and DTOs.

use fintrack_core::finance::BudgetPriority;
use fintrack_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `budget_items` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetItem {
    pub id: DbId,
    #[serde(skip)]
    pub user_id: DbId,
    pub name: String,
    pub amount: f64,
    /// `"most-crucial"` or `"less-crucial"`; see [`BudgetPriority`].
    pub priority: String,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a budget item. Also used for full replacement on update.
#[derive(Debug, Clone)]
pub struct SaveBudgetItem {
    pub name: String,
    pub amount: f64,
    pub priority: BudgetPriority,
    pub notes: Option<String>,
}

/// Budget totals overall and per priority.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetTotals {
    pub total: f64,
    pub most_crucial: f64,
    pub less_crucial: f64,
}
