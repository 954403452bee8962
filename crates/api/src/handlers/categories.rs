//! Handlers for the `/categories` resource.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use fintrack_core::categories::random_color;
use fintrack_core::finance::TransactionType;
use fintrack_core::validation::{validate_color, validate_name};
use fintrack_db::models::category::CreateCategory;
use fintrack_db::repositories::CategoryRepo;
use serde::Deserialize;

use crate::error::AppResult;
use crate::handlers::{check, parse_field, parse_filter};
use crate::middleware::auth::AuthUser;
use crate::query::TypeFilter;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /categories`.
#[derive(Debug, Deserialize)]
pub struct CreateCategoryRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    /// `#RRGGBB`; a palette color is picked when omitted.
    pub color: Option<String>,
}

/// GET /api/v1/categories?type=
pub async fn list_categories(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<TypeFilter>,
) -> AppResult<impl IntoResponse> {
    let kind = parse_filter::<TransactionType>(params.kind.as_deref())?;
    let categories = CategoryRepo::list(&state.pool, auth.user_id, kind).await?;
    Ok(Json(DataResponse { data: categories }))
}

/// POST /api/v1/categories
pub async fn create_category(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateCategoryRequest>,
) -> AppResult<impl IntoResponse> {
    let name = input.name.trim();
    check(validate_name("Name", name))?;
    let category_type = parse_field::<TransactionType>(&input.kind)?;

    let color = match input.color {
        Some(color) => {
            check(validate_color(&color))?;
            color
        }
        None => random_color().to_string(),
    };

    let category = CategoryRepo::create(
        &state.pool,
        auth.user_id,
        &CreateCategory {
            name: name.to_string(),
            category_type,
            color,
        },
    )
    .await?;

    tracing::info!(category_id = category.id, user_id = auth.user_id, "Category created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: category })))
}
