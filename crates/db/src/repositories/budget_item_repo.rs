//! Repository for the `budget_items` table.

use fintrack_core::finance::BudgetPriority;
use fintrack_core::types::DbId;
use sqlx::PgPool;

use crate::models::budget_item::{BudgetItem, BudgetTotals, SaveBudgetItem};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, name, amount, priority, notes, created_at, updated_at";

/// Provides CRUD operations for per-account budget items.
pub struct BudgetItemRepo;

impl BudgetItemRepo {
    /// Insert a new budget item owned by `user_id`.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &SaveBudgetItem,
    ) -> Result<BudgetItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO budget_items (user_id, name, amount, priority, notes)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BudgetItem>(&query)
            .bind(user_id)
            .bind(&input.name)
            .bind(input.amount)
            .bind(input.priority.as_str())
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// List an account's budget items, newest first, optionally for one priority.
    pub async fn list(
        pool: &PgPool,
        user_id: DbId,
        priority: Option<BudgetPriority>,
    ) -> Result<Vec<BudgetItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM budget_items
             WHERE user_id = $1
               AND ($2::TEXT IS NULL OR priority = $2)
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, BudgetItem>(&query)
            .bind(user_id)
            .bind(priority.map(BudgetPriority::as_str))
            .fetch_all(pool)
            .await
    }

    /// Replace every editable field of a budget item owned by `user_id`.
    ///
    /// Returns `None` if the item does not exist or belongs to another account.
    pub async fn update(
        pool: &PgPool,
        user_id: DbId,
        id: DbId,
        input: &SaveBudgetItem,
    ) -> Result<Option<BudgetItem>, sqlx::Error> {
        let query = format!(
            "UPDATE budget_items SET
                name = $3,
                amount = $4,
                priority = $5,
                notes = $6
             WHERE id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BudgetItem>(&query)
            .bind(id)
            .bind(user_id)
            .bind(&input.name)
            .bind(input.amount)
            .bind(input.priority.as_str())
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    /// Delete a budget item owned by `user_id`. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, user_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM budget_items WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Sum budget amounts overall and per priority in a single pass.
    pub async fn totals(pool: &PgPool, user_id: DbId) -> Result<BudgetTotals, sqlx::Error> {
        let (total, most_crucial, less_crucial): (f64, f64, f64) = sqlx::query_as(
            "SELECT
                 COALESCE(SUM(amount), 0)::DOUBLE PRECISION,
                 COALESCE(SUM(amount) FILTER (WHERE priority = 'most-crucial'), 0)::DOUBLE PRECISION,
                 COALESCE(SUM(amount) FILTER (WHERE priority = 'less-crucial'), 0)::DOUBLE PRECISION
             FROM budget_items
             WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_one(pool)
        .await?;

        Ok(BudgetTotals {
            total,
            most_crucial,
            less_crucial,
        })
    }
}
