//! Route definitions for the `/transactions` resource.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::transactions;
use crate::state::AppState;

/// Routes mounted at `/transactions`.
///
/// ```text
/// GET    /      -> list_transactions (?type=)
/// POST   /      -> create_transaction
/// DELETE /{id}  -> delete_transaction
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(transactions::list_transactions).post(transactions::create_transaction),
        )
        .route("/{id}", delete(transactions::delete_transaction))
}
