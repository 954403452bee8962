//! Handler for the dashboard overview.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use fintrack_core::finance::TransactionType;
use fintrack_core::reporting::{MonthlyPoint, DEFAULT_MONTH_COUNT};
use fintrack_db::models::transaction::Transaction;
use fintrack_db::repositories::TransactionRepo;
use serde::Serialize;

use crate::handlers::reports::{load_monthly_series, load_summary, Summary};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Number of transactions shown under "recent activity".
const RECENT_TRANSACTION_LIMIT: i64 = 10;

/// Everything the dashboard page renders, in one response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub summary: Summary,
    pub recent_transactions: Vec<Transaction>,
    pub monthly_income: Vec<MonthlyPoint>,
    pub monthly_expenses: Vec<MonthlyPoint>,
}

/// GET /api/v1/dashboard
///
/// Summary totals, the latest transactions, and six-month income and
/// expense series. Storage failures degrade to empty sections.
pub async fn get_dashboard(auth: AuthUser, State(state): State<AppState>) -> impl IntoResponse {
    let pool = &state.pool;
    let user_id = auth.user_id;

    let summary = load_summary(pool, user_id).await;

    let recent_transactions =
        TransactionRepo::list(pool, user_id, None, Some(RECENT_TRANSACTION_LIMIT))
            .await
            .unwrap_or_else(|e| {
                tracing::warn!(user_id, error = %e, "Failed to load recent transactions");
                Vec::new()
            });

    let monthly_income =
        load_monthly_series(pool, user_id, TransactionType::Income, DEFAULT_MONTH_COUNT).await;
    let monthly_expenses =
        load_monthly_series(pool, user_id, TransactionType::Expense, DEFAULT_MONTH_COUNT).await;

    Json(DataResponse {
        data: DashboardResponse {
            summary,
            recent_transactions,
            monthly_income,
            monthly_expenses,
        },
    })
}
