// Health route definitions

use axum::{
    routing::get,
    Router,
};

use crate::config::state::AppState;
use super::handler;

/// Creates router with service and database health endpoints
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handler::status_handler))
        .route("/db/health", get(handler::db_health_handler))
}
