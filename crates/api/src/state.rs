use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the pool is reference-counted and the config is
/// behind `Arc`). Nothing in here is mutable.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: fintrack_db::DbPool,
    /// Server configuration (session secret, route lists, static dir).
    pub config: Arc<ServerConfig>,
}
