//! Route guard for page requests.
//!
//! Classifies the request path against the configured route lists and either
//! redirects or lets the request through to the static page service. The
//! session cookie is only read here; renewal happens through
//! `POST /auth/refresh`.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use fintrack_core::routing::{is_guarded_path, GuardDecision};
use tower_cookies::Cookies;

use crate::auth::session::read_session;
use crate::state::AppState;

/// Axum middleware enforcing the page transition table.
///
/// Mount with `axum::middleware::from_fn_with_state`.
pub async fn route_guard(
    State(state): State<AppState>,
    cookies: Cookies,
    request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_owned();
    if !is_guarded_path(&path) {
        return next.run(request).await;
    }

    let has_session = read_session(&cookies, &state.config.session).is_some();

    match state.config.routes.decide(&path, has_session) {
        GuardDecision::Redirect(target) => {
            tracing::debug!(%path, %target, has_session, "Route guard redirect");
            Redirect::temporary(&target).into_response()
        }
        GuardDecision::Allow => next.run(request).await,
    }
}
