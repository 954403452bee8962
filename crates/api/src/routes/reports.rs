//! Route definitions for the `/reports` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::reports;
use crate::state::AppState;

/// Routes mounted at `/reports`.
///
/// ```text
/// GET /summary      -> summary
/// GET /by-category  -> by_category (?type=)
/// GET /monthly      -> monthly (?type=&months=)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/summary", get(reports::summary))
        .route("/by-category", get(reports::by_category))
        .route("/monthly", get(reports::monthly))
}
