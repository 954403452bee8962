//! Repository for the `categories` table.

use fintrack_core::categories::DefaultCategory;
use fintrack_core::finance::TransactionType;
use fintrack_core::types::DbId;
use sqlx::PgPool;

use crate::models::category::{Category, CreateCategory};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, name, category_type, color, created_at, updated_at";

/// Provides CRUD operations for per-account categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// Insert a new category owned by `user_id`.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateCategory,
    ) -> Result<Category, sqlx::Error> {
        let query = format!(
            "INSERT INTO categories (user_id, name, category_type, color)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(user_id)
            .bind(&input.name)
            .bind(input.category_type.as_str())
            .bind(&input.color)
            .fetch_one(pool)
            .await
    }

    /// Find a category by ID, only if it belongs to `user_id`.
    pub async fn find_owned(
        pool: &PgPool,
        user_id: DbId,
        id: DbId,
    ) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE id = $1 AND user_id = $2");
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// List an account's categories by name, optionally restricted to one type.
    pub async fn list(
        pool: &PgPool,
        user_id: DbId,
        category_type: Option<TransactionType>,
    ) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM categories
             WHERE user_id = $1
               AND ($2::TEXT IS NULL OR category_type = $2)
             ORDER BY name ASC, id ASC"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(user_id)
            .bind(category_type.map(TransactionType::as_str))
            .fetch_all(pool)
            .await
    }

    /// Insert `defaults` for an account that has no categories yet.
    ///
    /// Runs in one transaction; returns the number of rows inserted (zero if
    /// the account already had categories).
    pub async fn seed_defaults(
        pool: &PgPool,
        user_id: DbId,
        defaults: &[DefaultCategory],
    ) -> Result<u64, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let (existing,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM categories WHERE user_id = $1")
                .bind(user_id)
                .fetch_one(&mut *tx)
                .await?;

        if existing > 0 {
            tx.commit().await?;
            return Ok(0);
        }

        let mut inserted = 0;
        for category in defaults {
            sqlx::query(
                "INSERT INTO categories (user_id, name, category_type, color)
                 VALUES ($1, $2, $3, $4)",
            )
            .bind(user_id)
            .bind(category.name)
            .bind(category.category_type.as_str())
            .bind(category.color)
            .execute(&mut *tx)
            .await?;
            inserted += 1;
        }

        tx.commit().await?;
        Ok(inserted)
    }
}
