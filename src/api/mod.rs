// HTTP and WebSocket surfaces

pub mod frames;
pub mod stats;
pub mod websocket;

pub use frames::{create_frames_router, FrameIngestState};
pub use stats::{create_stats_router, StatsAppState};
pub use websocket::{create_ws_router, ws_handler, WsAppState};

use crate::config::RelayConfig;
use crate::pipeline::Relay;
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Assemble every route for `relay` according to `config`
pub fn create_app(relay: &Relay, config: &RelayConfig) -> Router {
    let ws = create_ws_router(Arc::new(WsAppState {
        registry: relay.subscribers(),
    }));
    let stats = create_stats_router(StatsAppState {
        stats: relay.stats(),
        registry: relay.subscribers(),
    });

    let mut app = ws.merge(stats);
    if config.capture.ingest_enabled {
        app = app.merge(create_frames_router(FrameIngestState {
            sink: relay.capture_sink(),
            max_frame_bytes: config.capture.max_frame_bytes,
        }));
    }

    app.layer(CorsLayer::permissive())
}
