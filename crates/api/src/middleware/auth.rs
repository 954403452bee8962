//! Session-cookie authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use fintrack_core::types::DbId;
use tower_cookies::Cookies;

use crate::auth::session::read_session;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated account extracted from the `session` cookie.
///
/// Use this as an extractor parameter in any handler that requires a session:
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = user.user_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The account's internal database id (from `claims.sub`).
    pub user_id: DbId,
    pub email: String,
    pub full_name: String,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let cookies = Cookies::from_request_parts(parts, state)
            .await
            .map_err(|(_, msg)| AppError::InternalError(msg.to_string()))?;

        let claims =
            read_session(&cookies, &state.config.session).ok_or_else(AppError::no_session)?;

        Ok(AuthUser {
            user_id: claims.sub,
            email: claims.email,
            full_name: claims.full_name,
        })
    }
}
