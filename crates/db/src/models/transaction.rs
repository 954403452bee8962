//! Transaction entity model and DTOs.

use fintrack_core::finance::TransactionType;
use fintrack_core::types::{Date, DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `transactions` table joined with its category's display fields.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: DbId,
    #[serde(skip)]
    pub user_id: DbId,
    pub category_id: DbId,
    pub category_name: String,
    pub category_color: String,
    pub amount: f64,
    pub description: String,
    #[serde(rename = "date")]
    pub occurred_on: Date,
    #[serde(rename = "time")]
    pub time_of_day: Option<String>,
    #[serde(rename = "type")]
    pub transaction_type: String,
    pub created_at: Timestamp,
}

/// DTO for creating a transaction.
#[derive(Debug, Clone)]
pub struct CreateTransaction {
    pub category_id: DbId,
    pub amount: f64,
    pub description: String,
    pub occurred_on: Date,
    pub time_of_day: Option<String>,
    pub transaction_type: TransactionType,
}
