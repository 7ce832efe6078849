use crate::subscription::{ConnectionManager, SubscriberRegistry};
use axum::{
    extract::{ws::WebSocket, State, WebSocketUpgrade},
    response::Response,
    routing::get,
    Router,
};
use std::sync::Arc;
use tracing::info;

/// Shared application state for WebSocket handler
#[derive(Clone)]
pub struct WsAppState {
    pub registry: Arc<SubscriberRegistry>,
}

/// GET / or /ws - WebSocket upgrade handler
pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<Arc<WsAppState>>) -> Response {
    info!("WebSocket upgrade request received");
    ws.on_upgrade(|socket| handle_socket(socket, state))
}

/// Create WebSocket router for subscribers
pub fn create_ws_router(state: Arc<WsAppState>) -> Router {
    Router::new()
        .route("/", get(ws_handler))
        .route("/ws", get(ws_handler))
        .with_state(state)
}

/// Handle WebSocket connection
async fn handle_socket(socket: WebSocket, state: Arc<WsAppState>) {
    let manager = ConnectionManager::new(Arc::clone(&state.registry));
    manager.handle(socket).await;
}
