//! Handlers for the `/transactions` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use fintrack_core::error::CoreError;
use fintrack_core::finance::TransactionType;
use fintrack_core::types::{Date, DbId};
use fintrack_core::validation::{validate_amount, validate_text, validate_time_of_day};
use fintrack_db::models::transaction::CreateTransaction;
use fintrack_db::repositories::{CategoryRepo, TransactionRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::handlers::{check, parse_field, parse_filter};
use crate::middleware::auth::AuthUser;
use crate::query::TypeFilter;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /transactions`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransactionRequest {
    pub category_id: DbId,
    pub amount: f64,
    #[serde(default)]
    pub description: String,
    /// `YYYY-MM-DD`.
    pub date: Date,
    /// Optional `HH:MM`.
    pub time: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
}

/// GET /api/v1/transactions?type=
///
/// Newest first, each with its category's name and color.
pub async fn list_transactions(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<TypeFilter>,
) -> AppResult<impl IntoResponse> {
    let kind = parse_filter::<TransactionType>(params.kind.as_deref())?;
    let transactions = TransactionRepo::list(&state.pool, auth.user_id, kind, None).await?;
    Ok(Json(DataResponse { data: transactions }))
}

/// POST /api/v1/transactions
///
/// The category must belong to the caller and have the same type.
pub async fn create_transaction(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateTransactionRequest>,
) -> AppResult<impl IntoResponse> {
    let transaction_type = parse_field::<TransactionType>(&input.kind)?;
    check(validate_amount(input.amount))?;
    check(validate_text("Description", &input.description))?;
    let time_of_day = match input.time.as_deref().map(str::trim) {
        Some("") | None => None,
        Some(time) => {
            check(validate_time_of_day(time))?;
            Some(time.to_string())
        }
    };

    let category = CategoryRepo::find_owned(&state.pool, auth.user_id, input.category_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Validation(format!(
                "Category {} does not exist",
                input.category_id
            )))
        })?;

    if category.kind() != Some(transaction_type) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Category '{}' is not an {transaction_type} category",
            category.name
        ))));
    }

    let transaction = TransactionRepo::create(
        &state.pool,
        auth.user_id,
        &CreateTransaction {
            category_id: category.id,
            amount: input.amount,
            description: input.description.trim().to_string(),
            occurred_on: input.date,
            time_of_day,
            transaction_type,
        },
    )
    .await?;

    tracing::info!(
        transaction_id = transaction.id,
        user_id = auth.user_id,
        "Transaction created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: transaction })))
}

/// DELETE /api/v1/transactions/{id}
pub async fn delete_transaction(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !TransactionRepo::delete(&state.pool, auth.user_id, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Transaction",
            id,
        }));
    }

    tracing::info!(transaction_id = id, user_id = auth.user_id, "Transaction deleted");
    Ok(StatusCode::NO_CONTENT)
}
