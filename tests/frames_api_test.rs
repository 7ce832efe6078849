// Integration tests for frame ingest (POST /api/frames) and stats (GET /api/stats)
//
// The relay is built but not started, so accepted frames stay in the raw queue
// and show up only in the counters.

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use tokio_util::sync::CancellationToken;
use tower::ServiceExt;
use webcast_relay::{api::create_app, config::RelayConfig, pipeline::Relay};

fn make_app(max_frame_bytes: usize, ingest_enabled: bool) -> (Router, Relay) {
    let mut config = RelayConfig::default();
    config.capture.max_frame_bytes = max_frame_bytes;
    config.capture.ingest_enabled = ingest_enabled;
    let relay = Relay::new(&config, CancellationToken::new());
    (create_app(&relay, &config), relay)
}

fn post_frame(body: Vec<u8>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/frames")
        .header("Content-Type", "application/octet-stream")
        .body(Body::from(body))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// ── POST /api/frames ─────────────────────────────────────────────────────────

#[tokio::test]
async fn test_frame_accepted_returns_202() {
    let (app, relay) = make_app(1024, true);

    let response = app.oneshot(post_frame(vec![0x08, 0x01])).await.unwrap();

    assert_eq!(response.status(), StatusCode::ACCEPTED);
    let body = body_json(response).await;
    assert_eq!(body["accepted"], true);
    assert_eq!(body["bytes"], 2);
    assert_eq!(relay.stats().snapshot(0).frames_received, 1);
}

#[tokio::test]
async fn test_empty_frame_returns_400() {
    let (app, relay) = make_app(1024, true);

    let response = app.oneshot(post_frame(Vec::new())).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(relay.stats().snapshot(0).frames_received, 0);
}

#[tokio::test]
async fn test_oversized_frame_returns_413() {
    let (app, relay) = make_app(10, true);

    let oversized = b"x".repeat(11); // 11 bytes > 10 byte limit
    let response = app.oneshot(post_frame(oversized)).await.unwrap();

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(relay.stats().snapshot(0).frames_received, 0);
}

#[tokio::test]
async fn test_frame_at_exact_limit_is_allowed() {
    let (app, _relay) = make_app(10, true);

    let response = app.oneshot(post_frame(b"x".repeat(10))).await.unwrap();

    assert_eq!(response.status(), StatusCode::ACCEPTED);
}

#[tokio::test]
async fn test_ingest_disabled_has_no_route() {
    let (app, _relay) = make_app(1024, false);

    let response = app.oneshot(post_frame(vec![1, 2, 3])).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ── GET /api/stats ───────────────────────────────────────────────────────────

#[tokio::test]
async fn test_stats_reports_counters() {
    let (app, _relay) = make_app(1024, true);

    let response = app
        .clone()
        .oneshot(post_frame(vec![0x08, 0x01]))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::ACCEPTED);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/stats")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["frames_received"], 1);
    assert_eq!(body["events_decoded"], 0);
    assert_eq!(body["subscribers"], 0);
    assert!(body["started_at"].is_string());
}
