//! Route definitions for the `/budget-items` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::budget_items;
use crate::state::AppState;

/// Routes mounted at `/budget-items`.
///
/// ```text
/// GET    /         -> list_budget_items (?priority=)
/// POST   /         -> create_budget_item
/// GET    /totals   -> budget_totals
/// PUT    /{id}     -> update_budget_item
/// DELETE /{id}     -> delete_budget_item
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(budget_items::list_budget_items).post(budget_items::create_budget_item),
        )
        .route("/totals", get(budget_items::budget_totals))
        .route(
            "/{id}",
            put(budget_items::update_budget_item).delete(budget_items::delete_budget_item),
        )
}
