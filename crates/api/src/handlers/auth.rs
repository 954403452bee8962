//! Handlers for the `/auth` resource (signup, login, logout, session, refresh).

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use fintrack_core::categories::DEFAULT_CATEGORIES;
use fintrack_db::models::user::UserResponse;
use fintrack_db::repositories::CategoryRepo;
use serde::Deserialize;
use tower_cookies::Cookies;
use validator::Validate;

use crate::auth::credentials;
use crate::auth::session::{create_session, destroy_session, read_session, refresh_session};
use crate::error::{AppError, AppResult};
use crate::handlers::validate_body;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Request body for `POST /auth/signup`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    #[validate(length(min = 1, max = 100, message = "Full name is required"))]
    pub full_name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters long"))]
    pub password: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/signup
///
/// Register an account, seed its default categories, and start a session.
pub async fn signup(
    State(state): State<AppState>,
    cookies: Cookies,
    Json(mut input): Json<SignupRequest>,
) -> AppResult<impl IntoResponse> {
    input.email = input.email.trim().to_string();
    input.full_name = input.full_name.trim().to_string();
    validate_body(&input)?;

    let account =
        credentials::register(&state.pool, &input.email, &input.password, &input.full_name)
            .await?;

    match CategoryRepo::seed_defaults(&state.pool, account.id, DEFAULT_CATEGORIES).await {
        Ok(seeded) => tracing::debug!(user_id = account.id, seeded, "Default categories seeded"),
        Err(e) => tracing::warn!(
            user_id = account.id,
            error = %e,
            "Failed to seed default categories"
        ),
    }

    start_session(&state, &cookies, &account)?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: account })))
}

/// POST /api/v1/auth/login
///
/// Authenticate with email + password and set the session cookie.
pub async fn login(
    State(state): State<AppState>,
    cookies: Cookies,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<DataResponse<UserResponse>>> {
    let account = credentials::authenticate(&state.pool, input.email.trim(), &input.password)
        .await
        .inspect_err(|e| tracing::info!(error = %e, "Login rejected"))?;

    start_session(&state, &cookies, &account)?;
    tracing::info!(user_id = account.id, "Logged in");

    Ok(Json(DataResponse { data: account }))
}

/// POST /api/v1/auth/logout
///
/// Remove the session cookie. Returns 204 whether or not a session existed.
pub async fn logout(cookies: Cookies) -> StatusCode {
    destroy_session(&cookies);
    StatusCode::NO_CONTENT
}

/// GET /api/v1/auth/session
///
/// Return the current session's claims, or 401.
pub async fn session(
    State(state): State<AppState>,
    cookies: Cookies,
) -> AppResult<impl IntoResponse> {
    let claims =
        read_session(&cookies, &state.config.session).ok_or_else(AppError::no_session)?;
    Ok(Json(DataResponse { data: claims }))
}

/// POST /api/v1/auth/refresh
///
/// Renew the session cookie's expiry without re-signing. 401 without a session.
pub async fn refresh(State(state): State<AppState>, cookies: Cookies) -> AppResult<StatusCode> {
    refresh_session(&cookies, &state.config.session).ok_or_else(AppError::no_session)?;
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Issue a token for `account` and set the cookie.
pub(crate) fn start_session(
    state: &AppState,
    cookies: &Cookies,
    account: &UserResponse,
) -> AppResult<()> {
    create_session(cookies, account, &state.config.session)
        .map_err(|e| AppError::InternalError(e.to_string()))?;
    Ok(())
}
