// Start of file: src/main.rs

use axum::{serve, Router};
use tokio::net::TcpListener;
use tracing::info;

use mongo_router_kit::api::health::health_routes;
use mongo_router_kit::config::state::AppState;
use mongo_router_kit::core::{logging::init_tracing, server};
use mongo_router_kit::routes::GroupRouter;

const API_GROUP: &str = "/api";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let state: AppState = AppState::from_env()?;

    // No client, no service: connection failures end the process here
    state.init_services().await?;

    let mut groups: GroupRouter<AppState> = GroupRouter::new();
    groups.add_group(API_GROUP);
    groups.with_group(API_GROUP, |group| group.merge(health_routes()));

    let app: Router = server::create_app(state.clone(), groups);
    let listener: TcpListener = server::setup_listener(&state.environment).await?;

    info!("Server listening on: {}", listener.local_addr()?);

    serve(listener, app)
        .with_graceful_shutdown(server::shutdown_signal(state))
        .await?;

    Ok(())
}

// End of file: src/main.rs
