//! Handlers for the signed-in account's own profile.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use fintrack_core::error::CoreError;
use fintrack_core::types::DbId;
use fintrack_core::validation::validate_name;
use fintrack_db::models::user::{User, UserResponse};
use fintrack_db::repositories::UserRepo;
use serde::Deserialize;
use tower_cookies::Cookies;

use crate::auth::credentials;
use crate::auth::password::validate_password_strength;
use crate::error::{AppError, AppResult};
use crate::handlers::auth::start_session;
use crate::handlers::check;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `PUT /profile`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub full_name: String,
}

/// Request body for `PUT /profile/password`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

/// Request body for `PUT /profile/avatar`.
#[derive(Debug, Deserialize)]
pub struct UpdateAvatarRequest {
    /// Image URL or data URL.
    pub avatar: String,
}

/// GET /api/v1/profile
pub async fn get_profile(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<UserResponse>>> {
    let user = UserRepo::find_by_id(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse {
        data: found(user, auth.user_id)?.into(),
    }))
}

/// PUT /api/v1/profile
///
/// Change the display name. The session is re-issued so its claims carry
/// the new name.
pub async fn update_profile(
    auth: AuthUser,
    State(state): State<AppState>,
    cookies: Cookies,
    Json(input): Json<UpdateProfileRequest>,
) -> AppResult<Json<DataResponse<UserResponse>>> {
    let full_name = input.full_name.trim();
    check(validate_name("Full name", full_name))?;

    let user = UserRepo::update_full_name(&state.pool, auth.user_id, full_name).await?;
    let account: UserResponse = found(user, auth.user_id)?.into();

    start_session(&state, &cookies, &account)?;
    tracing::info!(user_id = auth.user_id, "Profile updated");

    Ok(Json(DataResponse { data: account }))
}

/// PUT /api/v1/profile/password
///
/// 403 if the current password is wrong; 400 if the new one is too short.
pub async fn change_password(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<ChangePasswordRequest>,
) -> AppResult<StatusCode> {
    check(validate_password_strength(&input.new_password))?;

    credentials::change_password(
        &state.pool,
        auth.user_id,
        &input.current_password,
        &input.new_password,
    )
    .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/v1/profile/avatar
pub async fn update_avatar(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<UpdateAvatarRequest>,
) -> AppResult<Json<DataResponse<UserResponse>>> {
    if input.avatar.trim().is_empty() {
        return Err(AppError::BadRequest("Avatar must not be empty".into()));
    }

    let user = UserRepo::update_avatar(&state.pool, auth.user_id, &input.avatar).await?;
    tracing::info!(user_id = auth.user_id, "Avatar updated");

    Ok(Json(DataResponse {
        data: found(user, auth.user_id)?.into(),
    }))
}

/// A valid session whose account row is gone reads as 404.
fn found(user: Option<User>, user_id: DbId) -> AppResult<User> {
    user.ok_or(AppError::Core(CoreError::NotFound {
        entity: "Account",
        id: user_id,
    }))
}
