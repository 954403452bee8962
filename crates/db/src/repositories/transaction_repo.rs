//! Repository for the `transactions` table.

use fintrack_core::finance::TransactionType;
use fintrack_core::types::DbId;
use sqlx::PgPool;

use crate::models::transaction::{CreateTransaction, Transaction};

/// Column list for the transaction-with-category join (`t` = transactions, `c` = categories).
const JOINED_COLUMNS: &str = "t.id, t.user_id, t.category_id, c.name AS category_name, \
                              c.color AS category_color, t.amount, t.description, \
                              t.occurred_on, t.time_of_day, t.transaction_type, t.created_at";

/// Provides CRUD operations for per-account transactions.
pub struct TransactionRepo;

impl TransactionRepo {
    /// Insert a transaction owned by `user_id` and return it joined with its category.
    ///
    /// The caller is responsible for checking that the category is owned by
    /// the same account and has a matching type.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateTransaction,
    ) -> Result<Transaction, sqlx::Error> {
        let query = format!(
            "WITH t AS (
                 INSERT INTO transactions
                     (user_id, category_id, amount, description, occurred_on, time_of_day, transaction_type)
                 VALUES ($1, $2, $3, $4, $5, $6, $7)
                 RETURNING *
             )
             SELECT {JOINED_COLUMNS} FROM t JOIN categories c ON c.id = t.category_id"
        );
        sqlx::query_as::<_, Transaction>(&query)
            .bind(user_id)
            .bind(input.category_id)
            .bind(input.amount)
            .bind(&input.description)
            .bind(input.occurred_on)
            .bind(&input.time_of_day)
            .bind(input.transaction_type.as_str())
            .fetch_one(pool)
            .await
    }

    /// List an account's transactions, newest first, optionally restricted to one type.
    ///
    /// `limit` of `None` returns every matching row.
    pub async fn list(
        pool: &PgPool,
        user_id: DbId,
        transaction_type: Option<TransactionType>,
        limit: Option<i64>,
    ) -> Result<Vec<Transaction>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM transactions t
             JOIN categories c ON c.id = t.category_id
             WHERE t.user_id = $1
               AND ($2::TEXT IS NULL OR t.transaction_type = $2)
             ORDER BY t.occurred_on DESC, t.time_of_day DESC NULLS LAST, t.id DESC
             LIMIT $3"
        );
        sqlx::query_as::<_, Transaction>(&query)
            .bind(user_id)
            .bind(transaction_type.map(TransactionType::as_str))
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Delete a transaction owned by `user_id`. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, user_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM transactions WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
