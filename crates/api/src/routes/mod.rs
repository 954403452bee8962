pub mod auth;
pub mod budget_items;
pub mod categories;
pub mod dashboard;
pub mod health;
pub mod profile;
pub mod reports;
pub mod transactions;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Json, Router};
use serde_json::json;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/signup                      create account + session (public)
/// /auth/login                       start session (public)
/// /auth/logout                      end session (public, idempotent)
/// /auth/session                     current claims
/// /auth/refresh                     renew cookie expiry
///
/// /profile                          get, update name
/// /profile/password                 change password (PUT)
/// /profile/avatar                   update avatar (PUT)
///
/// /categories                       list (?type=), create
///
/// /transactions                     list (?type=), create
/// /transactions/{id}                delete
///
/// /budget-items                     list (?priority=), create
/// /budget-items/totals              totals overall and per priority
/// /budget-items/{id}                update, delete
///
/// /reports/summary                  income, expenses, balance
/// /reports/by-category              per-category sums (?type=)
/// /reports/monthly                  monthly series (?type=&months=)
///
/// /dashboard                        summary + recent + 6-month series
/// ```
///
/// Unmatched paths under `/api/v1` get a JSON 404 rather than the page
/// fallback.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/profile", profile::router())
        .nest("/categories", categories::router())
        .nest("/transactions", transactions::router())
        .nest("/budget-items", budget_items::router())
        .nest("/reports", reports::router())
        .merge(dashboard::router())
        .fallback(api_not_found)
}

async fn api_not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "No such API route", "code": "NOT_FOUND" })),
    )
}
