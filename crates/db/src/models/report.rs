//! Read-only aggregation results.

use serde::Serialize;
use sqlx::FromRow;

/// Sum of a category's transactions, as plotted in the category charts.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct CategoryTotal {
    pub name: String,
    pub value: f64,
    pub color: String,
}

/// Sum of one calendar month, before it is laid onto a month window.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct MonthTotal {
    pub year: i32,
    pub month: i32,
    pub total: f64,
}
