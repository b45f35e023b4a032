use std::path::PathBuf;

use axum::{
    Router,
    extract::WebSocketUpgrade,
    response::IntoResponse,
    routing::get,
};
use common::log;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};

use crate::server_config::ServerConfig;
use crate::ws_handler::handle_websocket;

pub async fn run_web_server(
    config: ServerConfig,
    shutdown_signal: impl Future<Output = ()> + Send + 'static,
) -> Result<(), String> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let static_files_path = PathBuf::from(&config.static_files_path);

    let app = Router::new()
        .route("/ws", get(ws_upgrade_handler))
        .nest_service("/ui", ServeDir::new(&static_files_path))
        .layer(cors);

    log!("Web server listening on {}", config.bind_address);
    log!("Serving UI from {}", static_files_path.display());

    let listener = tokio::net::TcpListener::bind(&config.bind_address)
        .await
        .map_err(|e| format!("Failed to bind {}: {}", config.bind_address, e))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await
        .map_err(|e| format!("Web server error: {}", e))?;

    Ok(())
}

async fn ws_upgrade_handler(ws: WebSocketUpgrade) -> impl IntoResponse {
    ws.on_upgrade(handle_websocket)
}
