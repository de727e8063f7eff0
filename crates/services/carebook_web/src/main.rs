// File: services/carebook_web/src/main.rs
use std::sync::Arc;

use carebook_common::{config_error, init_from_config, log_result, CarebookError};
use carebook_config::load_config;
use carebook_web::{routes, AppState};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), CarebookError> {
    let config = Arc::new(load_config().map_err(config_error)?);
    let _log_guard = init_from_config(&config.logging);

    let state = AppState::new(config.clone())?;
    state.spawn_session_sweeper();
    let app = routes(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = log_result(
        TcpListener::bind(&addr).await,
        &format!("Listening on {}", addr),
        "Failed to bind",
    )?;
    info!("Starting server at http://{}", addr);

    log_result(
        axum::serve(listener, app.into_make_service()).await,
        "Server stopped",
        "Server error",
    )?;
    Ok(())
}
