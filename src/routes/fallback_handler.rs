// Start of file: src/routes/fallback_handler.rs

use axum::{extract::OriginalUri, http::StatusCode};
use tracing::debug;

use crate::utils::response_handler::HandlerResponse;

pub async fn fallback_handler(OriginalUri(uri): OriginalUri) -> HandlerResponse {
    debug!("No route matched {}", uri);

    HandlerResponse::new(StatusCode::NOT_FOUND)
        .message(format!("The requested route {} does not exist", uri.path()))
}

// End of file: src/routes/fallback_handler.rs
