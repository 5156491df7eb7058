// Health endpoints

use serde_json::json;
use axum::{http::StatusCode, extract::State};

use crate::config::state::AppState;
use crate::utils::response_handler::HandlerResponse;
use tracing::{instrument, info, warn};

/// Returns API status information
#[instrument(skip(state))]
pub async fn status_handler(State(state): State<AppState>) -> HandlerResponse {
    info!("Status endpoint called");

    HandlerResponse::new(StatusCode::OK)
        .data(json!({
            "version": env!("CARGO_PKG_VERSION"),
            "status": "healthy",
            "environment": state.environment.environment.as_ref()
        }))
        .message("API is running successfully")
}

/// Pings MongoDB through the shared client
#[instrument(skip(state))]
pub async fn db_health_handler(State(state): State<AppState>) -> HandlerResponse {
    info!("Database health check called");

    match state.mongo.ping().await {
        Ok(()) => {
            HandlerResponse::new(StatusCode::OK)
                .data(json!({
                    "database": "connected",
                    "mode": format!("{:?}", state.mongo.config().mode)
                }))
                .message("Database connection healthy")
        }
        Err(e) => {
            warn!("Database health check failed: {:#}", e);
            HandlerResponse::new(StatusCode::SERVICE_UNAVAILABLE)
                .data(json!({ "database": "disconnected", "error": e.to_string() }))
                .message("Database connection failed")
        }
    }
}
