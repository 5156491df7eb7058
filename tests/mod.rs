//! tests/mod.rs
//! A shared test helper to spawn the Axum app on an ephemeral port.

use std::time::Duration;

use axum::{
    body::Bytes,
    http::StatusCode,
    routing::{get, post},
    serve, Router,
};
use mongo_router_kit::api::health::health_routes;
use mongo_router_kit::config::{environment::EnvironmentVariables, mongo::MongoConfig, state::AppState};
use mongo_router_kit::core::server::create_app;
use mongo_router_kit::routes::GroupRouter;
use mongo_router_kit::utils::response_handler::HandlerResponse;
use serde_json::json;
use tokio::net::TcpListener as TokioTcpListener;

/// Request timeout used by the spawned app, in seconds.
pub const TIMEOUT_SECONDS: u64 = 1;
/// Body limit used by the spawned app, in bytes.
pub const BODY_LIMIT: usize = 1024;

async fn slow_handler() -> HandlerResponse {
    tokio::time::sleep(Duration::from_secs(TIMEOUT_SECONDS + 2)).await;
    HandlerResponse::new(StatusCode::OK).message("This should not be reached due to timeout")
}

async fn echo_handler(body: Bytes) -> HandlerResponse {
    HandlerResponse::new(StatusCode::OK).data(json!({ "received_body_size": body.len() }))
}

/// Spawns the app on a random unused port and returns its base URL.
/// The MongoDB client is never initialized, so nothing touches the network.
pub fn spawn_app() -> String {
    let env: EnvironmentVariables = EnvironmentVariables {
        default_timeout_seconds: TIMEOUT_SECONDS,
        max_request_body_size: BODY_LIMIT,
        ..EnvironmentVariables::default()
    };
    let state: AppState = AppState::new(env, MongoConfig::default());

    // * Same groups as main(), plus a test-only group exercising the middleware.
    let mut groups: GroupRouter<AppState> = GroupRouter::new();
    groups.add_group("/api");
    groups.with_group("/api", |group| group.merge(health_routes()));
    groups.with_group("/test", |group| {
        group
            .route("/slow", get(slow_handler))
            .route("/echo", post(echo_handler))
    });

    let app: Router = create_app(state, groups);

    // * Bind an ephemeral port using std::net::TcpListener.
    let std_listener: std::net::TcpListener = std::net::TcpListener::bind("127.0.0.1:0")
        .expect("Failed to bind random port");
    std_listener.set_nonblocking(true).unwrap();

    let tokio_listener: TokioTcpListener = TokioTcpListener::from_std(std_listener)
        .expect("Failed to convert to tokio listener");

    let addr: std::net::SocketAddr = tokio_listener.local_addr().unwrap();

    // * Spawn the server in a background task.
    tokio::spawn(async move {
        serve(tokio_listener, app)
            .await
            .expect("Server failed");
    });

    format!("http://{}", addr)
}
