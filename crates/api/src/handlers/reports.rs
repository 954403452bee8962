//! Handlers for the `/reports` resource.
//!
//! All reads here are aggregations: a storage failure is logged and the
//! endpoint answers with an empty or zero result instead of an error.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use fintrack_core::error::CoreError;
use fintrack_core::finance::TransactionType;
use fintrack_core::reporting::{clamp_month_count, fill_series, month_window, MonthlyPoint};
use fintrack_core::types::DbId;
use fintrack_db::models::report::CategoryTotal;
use fintrack_db::repositories::ReportRepo;
use serde::Serialize;
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::handlers::parse_field;
use crate::middleware::auth::AuthUser;
use crate::query::{MonthlyParams, TypeFilter};
use crate::response::DataResponse;
use crate::state::AppState;

/// Income, expenses, and their difference.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_income: f64,
    pub total_expenses: f64,
    pub balance: f64,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/reports/summary
pub async fn summary(auth: AuthUser, State(state): State<AppState>) -> impl IntoResponse {
    Json(DataResponse {
        data: load_summary(&state.pool, auth.user_id).await,
    })
}

/// GET /api/v1/reports/by-category?type=
///
/// `type` is required.
pub async fn by_category(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<TypeFilter>,
) -> AppResult<impl IntoResponse> {
    let kind = required_type(params.kind.as_deref())?;
    let groups = load_by_category(&state.pool, auth.user_id, kind).await;
    Ok(Json(DataResponse { data: groups }))
}

/// GET /api/v1/reports/monthly?type=&months=
///
/// `months` buckets ending at the current month, oldest first.
pub async fn monthly(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<MonthlyParams>,
) -> AppResult<impl IntoResponse> {
    let kind = required_type(params.kind.as_deref())?;
    let months = clamp_month_count(parse_month_count(params.months.as_deref())?);
    let series = load_monthly_series(&state.pool, auth.user_id, kind, months).await;
    Ok(Json(DataResponse { data: series }))
}

// ---------------------------------------------------------------------------
// Aggregation helpers (shared with the dashboard)
// ---------------------------------------------------------------------------

/// Sum of one type's amounts; zero on storage failure.
pub(crate) async fn load_total(pool: &PgPool, user_id: DbId, kind: TransactionType) -> f64 {
    ReportRepo::sum_by_type(pool, user_id, kind)
        .await
        .unwrap_or_else(|e| {
            tracing::warn!(user_id, kind = %kind, error = %e, "Failed to sum transactions");
            0.0
        })
}

pub(crate) async fn load_summary(pool: &PgPool, user_id: DbId) -> Summary {
    let total_income = load_total(pool, user_id, TransactionType::Income).await;
    let total_expenses = load_total(pool, user_id, TransactionType::Expense).await;
    Summary {
        total_income,
        total_expenses,
        balance: total_income - total_expenses,
    }
}

/// Per-category sums; empty on storage failure.
pub(crate) async fn load_by_category(
    pool: &PgPool,
    user_id: DbId,
    kind: TransactionType,
) -> Vec<CategoryTotal> {
    ReportRepo::group_by_category(pool, user_id, kind)
        .await
        .unwrap_or_else(|e| {
            tracing::warn!(user_id, kind = %kind, error = %e, "Failed to group by category");
            Vec::new()
        })
}

/// Labeled monthly sums ending at the current UTC month. Months with no
/// data (or a failed query) report zero.
pub(crate) async fn load_monthly_series(
    pool: &PgPool,
    user_id: DbId,
    kind: TransactionType,
    months: u32,
) -> Vec<MonthlyPoint> {
    let window = month_window(Utc::now().date_naive(), months);
    let (Some(first), Some(last)) = (window.first(), window.last()) else {
        return Vec::new();
    };

    let rows = ReportRepo::monthly_totals(pool, user_id, kind, first.start(), last.end_exclusive())
        .await
        .unwrap_or_else(|e| {
            tracing::warn!(user_id, kind = %kind, error = %e, "Failed to load monthly totals");
            Vec::new()
        });

    let sums: Vec<(i32, u32, f64)> = rows
        .into_iter()
        .filter_map(|r| u32::try_from(r.month).ok().map(|m| (r.year, m, r.total)))
        .collect();

    fill_series(&window, &sums)
}

/// `?months=` must be a non-negative integer when present.
fn parse_month_count(raw: Option<&str>) -> AppResult<Option<u32>> {
    raw.map(|raw| {
        raw.trim().parse::<u32>().map_err(|_| {
            AppError::Core(CoreError::Validation(format!(
                "Invalid months '{raw}'. Expected a whole number"
            )))
        })
    })
    .transpose()
}

fn required_type(raw: Option<&str>) -> AppResult<TransactionType> {
    let raw = raw.ok_or_else(|| {
        AppError::Core(CoreError::Validation(
            "Query parameter 'type' is required".into(),
        ))
    })?;
    parse_field(raw)
}
