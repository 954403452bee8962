//! Aggregation queries over `transactions` and `categories`.
//!
//! All queries are scoped by `user_id` and read-only.

use fintrack_core::finance::TransactionType;
use fintrack_core::types::{Date, DbId};
use sqlx::PgPool;

use crate::models::report::{CategoryTotal, MonthTotal};

/// Provides per-account sums and groupings of transaction amounts.
pub struct ReportRepo;

impl ReportRepo {
    /// Sum of all amounts of the given type. Zero when nothing matches.
    pub async fn sum_by_type(
        pool: &PgPool,
        user_id: DbId,
        transaction_type: TransactionType,
    ) -> Result<f64, sqlx::Error> {
        let (total,): (f64,) = sqlx::query_as(
            "SELECT COALESCE(SUM(amount), 0)::DOUBLE PRECISION
             FROM transactions
             WHERE user_id = $1 AND transaction_type = $2",
        )
        .bind(user_id)
        .bind(transaction_type.as_str())
        .fetch_one(pool)
        .await?;
        Ok(total)
    }

    /// Per-category sums for categories of the given type.
    ///
    /// Categories whose transactions sum to zero (or that have none) are
    /// omitted. Ordered by value descending, then name.
    pub async fn group_by_category(
        pool: &PgPool,
        user_id: DbId,
        transaction_type: TransactionType,
    ) -> Result<Vec<CategoryTotal>, sqlx::Error> {
        sqlx::query_as::<_, CategoryTotal>(
            "SELECT c.name,
                    COALESCE(SUM(t.amount), 0)::DOUBLE PRECISION AS value,
                    c.color
             FROM categories c
             LEFT JOIN transactions t
                    ON t.category_id = c.id
                   AND t.user_id = c.user_id
                   AND t.transaction_type = c.category_type
             WHERE c.user_id = $1 AND c.category_type = $2
             GROUP BY c.id, c.name, c.color
             HAVING COALESCE(SUM(t.amount), 0) <> 0
             ORDER BY value DESC, c.name ASC",
        )
        .bind(user_id)
        .bind(transaction_type.as_str())
        .fetch_all(pool)
        .await
    }

    /// Sums per calendar month for transactions dated in `[from, until)`.
    ///
    /// Months without transactions produce no row; the caller fills gaps.
    pub async fn monthly_totals(
        pool: &PgPool,
        user_id: DbId,
        transaction_type: TransactionType,
        from: Date,
        until: Date,
    ) -> Result<Vec<MonthTotal>, sqlx::Error> {
        sqlx::query_as::<_, MonthTotal>(
            "SELECT EXTRACT(YEAR FROM occurred_on)::INT AS year,
                    EXTRACT(MONTH FROM occurred_on)::INT AS month,
                    SUM(amount)::DOUBLE PRECISION AS total
             FROM transactions
             WHERE user_id = $1
               AND transaction_type = $2
               AND occurred_on >= $3
               AND occurred_on < $4
             GROUP BY 1, 2
             ORDER BY 1, 2",
        )
        .bind(user_id)
        .bind(transaction_type.as_str())
        .bind(from)
        .bind(until)
        .fetch_all(pool)
        .await
    }
}
