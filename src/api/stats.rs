use crate::pipeline::{RelayStats, StatsSnapshot};
use crate::subscription::SubscriberRegistry;
use axum::{extract::State, response::Json, routing::get, Router};
use std::sync::Arc;

/// Shared state for the stats endpoint
#[derive(Clone)]
pub struct StatsAppState {
    pub stats: Arc<RelayStats>,
    pub registry: Arc<SubscriberRegistry>,
}

/// Create router for GET /api/stats
pub fn create_stats_router(state: StatsAppState) -> Router {
    Router::new()
        .route("/api/stats", get(get_stats))
        .with_state(Arc::new(state))
}

/// GET /api/stats - Pipeline counters and live subscriber count
async fn get_stats(State(state): State<Arc<StatsAppState>>) -> Json<StatsSnapshot> {
    Json(state.stats.snapshot(state.registry.len()))
}
