//! Handlers for the `/budget-items` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use fintrack_core::error::CoreError;
use fintrack_core::finance::BudgetPriority;
use fintrack_core::types::DbId;
use fintrack_core::validation::{validate_amount, validate_name, validate_text};
use fintrack_db::models::budget_item::SaveBudgetItem;
use fintrack_db::repositories::BudgetItemRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::handlers::{check, parse_field, parse_filter};
use crate::middleware::auth::AuthUser;
use crate::query::PriorityFilter;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /budget-items` and `PUT /budget-items/{id}`.
#[derive(Debug, Deserialize)]
pub struct BudgetItemRequest {
    pub name: String,
    pub amount: f64,
    pub priority: String,
    pub notes: Option<String>,
}

impl BudgetItemRequest {
    fn into_save(self) -> AppResult<SaveBudgetItem> {
        let name = self.name.trim().to_string();
        check(validate_name("Name", &name))?;
        check(validate_amount(self.amount))?;
        let priority = parse_field::<BudgetPriority>(&self.priority)?;

        let notes = self
            .notes
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());
        if let Some(notes) = &notes {
            check(validate_text("Notes", notes))?;
        }

        Ok(SaveBudgetItem {
            name,
            amount: self.amount,
            priority,
            notes,
        })
    }
}

/// GET /api/v1/budget-items?priority=
///
/// Newest first.
pub async fn list_budget_items(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<PriorityFilter>,
) -> AppResult<impl IntoResponse> {
    let priority = parse_filter::<BudgetPriority>(params.priority.as_deref())?;
    let items = BudgetItemRepo::list(&state.pool, auth.user_id, priority).await?;
    Ok(Json(DataResponse { data: items }))
}

/// POST /api/v1/budget-items
pub async fn create_budget_item(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<BudgetItemRequest>,
) -> AppResult<impl IntoResponse> {
    let input = input.into_save()?;
    let item = BudgetItemRepo::create(&state.pool, auth.user_id, &input).await?;

    tracing::info!(budget_item_id = item.id, user_id = auth.user_id, "Budget item created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: item })))
}

/// PUT /api/v1/budget-items/{id}
pub async fn update_budget_item(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<BudgetItemRequest>,
) -> AppResult<impl IntoResponse> {
    let input = input.into_save()?;
    let item = BudgetItemRepo::update(&state.pool, auth.user_id, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "BudgetItem",
            id,
        }))?;

    tracing::info!(budget_item_id = id, user_id = auth.user_id, "Budget item updated");

    Ok(Json(DataResponse { data: item }))
}

/// DELETE /api/v1/budget-items/{id}
pub async fn delete_budget_item(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !BudgetItemRepo::delete(&state.pool, auth.user_id, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "BudgetItem",
            id,
        }));
    }

    tracing::info!(budget_item_id = id, user_id = auth.user_id, "Budget item deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/budget-items/totals
///
/// Sum of all items and per priority.
pub async fn budget_totals(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let totals = BudgetItemRepo::totals(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse { data: totals }))
}
