//! Route definitions for the `/profile` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::profile;
use crate::state::AppState;

/// Routes mounted at `/profile`.
///
/// ```text
/// GET  /          -> get_profile
/// PUT  /          -> update_profile
/// PUT  /password  -> change_password
/// PUT  /avatar    -> update_avatar
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(profile::get_profile).put(profile::update_profile))
        .route("/password", put(profile::change_password))
        .route("/avatar", put(profile::update_avatar))
}
