// Integration tests for the subscriber WebSocket endpoint
//
// Upgrade routing is checked with tower::ServiceExt::oneshot, which yields 426
// (no hyper OnUpgrade extension in test requests). Event delivery runs against
// a real listener on 127.0.0.1 with a tokio-tungstenite client.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use futures::{SinkExt, Stream, StreamExt};
use prost::Message as _;
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{sleep, timeout};
use tokio_tungstenite::{connect_async, tungstenite::Message};
use tokio_util::sync::CancellationToken;
use tower::ServiceExt;
use webcast_relay::{
    api::create_app,
    capture::CaptureSink,
    config::RelayConfig,
    pipeline::{Relay, RelayTasks},
    proto::{PushFrame, SubMessage, WebcastChatMessage, WebcastResponse},
    subscription::SubscriberRegistry,
};

fn chat_frame(content: &str) -> Vec<u8> {
    let envelope = WebcastResponse {
        messages: vec![SubMessage {
            method: "WebcastChatMessage".to_string(),
            payload: WebcastChatMessage {
                content: content.to_string(),
                ..Default::default()
            }
            .encode_to_vec(),
            ..Default::default()
        }],
        ..Default::default()
    };
    PushFrame {
        payload_type: "msg".to_string(),
        payload: envelope.encode_to_vec(),
        ..Default::default()
    }
    .encode_to_vec()
}

struct RunningRelay {
    addr: SocketAddr,
    sink: CaptureSink,
    subscribers: Arc<SubscriberRegistry>,
    tasks: RelayTasks,
    shutdown: CancellationToken,
}

async fn start_relay(config: RelayConfig) -> RunningRelay {
    let shutdown = CancellationToken::new();
    let relay = Relay::new(&config, shutdown.clone());
    let app = create_app(&relay, &config);
    let sink = relay.capture_sink();
    let subscribers = relay.subscribers();

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server_shutdown = shutdown.clone();
    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async move { server_shutdown.cancelled().await })
            .await
            .unwrap();
    });

    RunningRelay {
        addr,
        sink,
        subscribers,
        tasks: relay.start(),
        shutdown,
    }
}

async fn wait_for_subscribers(registry: &SubscriberRegistry, count: usize) {
    timeout(Duration::from_secs(2), async {
        while registry.len() != count {
            sleep(Duration::from_millis(10)).await;
        }
    })
    .await
    .expect("subscriber count never reached");
}

async fn next_json<S>(ws: &mut S) -> Value
where
    S: Stream<Item = Result<Message, tokio_tungstenite::tungstenite::Error>> + Unpin,
{
    loop {
        let message = timeout(Duration::from_secs(2), ws.next())
            .await
            .expect("no event received")
            .expect("stream ended")
            .unwrap();
        if let Message::Text(text) = message {
            return serde_json::from_str(&text).unwrap();
        }
    }
}

// ── Routing ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_upgrade_routes_exist() {
    let config = RelayConfig::default();
    let relay = Relay::new(&config, CancellationToken::new());
    let app = create_app(&relay, &config);

    for uri in ["/", "/ws"] {
        let response = app
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        // Reaches the WebSocket extractor (426 in test env), not 404
        assert_ne!(response.status(), StatusCode::NOT_FOUND, "{}", uri);
    }
}

// ── Delivery ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_subscriber_receives_decoded_event() {
    let relay = start_relay(RelayConfig::default()).await;

    let (mut ws, _) = connect_async(format!("ws://{}/ws", relay.addr))
        .await
        .unwrap();
    wait_for_subscribers(&relay.subscribers, 1).await;

    relay.sink.submit(chat_frame("hello")).unwrap();

    assert_eq!(next_json(&mut ws).await, json!({"content": "hello"}));

    relay.shutdown.cancel();
    timeout(Duration::from_secs(2), relay.tasks.join())
        .await
        .unwrap();
}

#[tokio::test]
async fn test_tagged_events_carry_type() {
    let mut config = RelayConfig::default();
    config.output.tag_events = true;
    let relay = start_relay(config).await;

    let (mut ws, _) = connect_async(format!("ws://{}/", relay.addr))
        .await
        .unwrap();
    wait_for_subscribers(&relay.subscribers, 1).await;

    relay.sink.submit(chat_frame("tagged")).unwrap();

    assert_eq!(
        next_json(&mut ws).await,
        json!({"content": "tagged", "type": "WebcastChatMessage"})
    );
    relay.shutdown.cancel();
}

#[tokio::test]
async fn test_inbound_text_is_ignored() {
    let relay = start_relay(RelayConfig::default()).await;

    let (mut ws, _) = connect_async(format!("ws://{}/ws", relay.addr))
        .await
        .unwrap();
    wait_for_subscribers(&relay.subscribers, 1).await;

    ws.send(Message::Text("{\"subscribe\":\"anything\"}".to_string()))
        .await
        .unwrap();
    relay.sink.submit(chat_frame("still here")).unwrap();

    assert_eq!(next_json(&mut ws).await["content"], json!("still here"));
    assert_eq!(relay.subscribers.len(), 1);
    relay.shutdown.cancel();
}

#[tokio::test]
async fn test_disconnect_deregisters_subscriber() {
    let relay = start_relay(RelayConfig::default()).await;

    let (mut first, _) = connect_async(format!("ws://{}/ws", relay.addr))
        .await
        .unwrap();
    let (mut second, _) = connect_async(format!("ws://{}/ws", relay.addr))
        .await
        .unwrap();
    wait_for_subscribers(&relay.subscribers, 2).await;

    first.close(None).await.unwrap();
    wait_for_subscribers(&relay.subscribers, 1).await;

    relay.sink.submit(chat_frame("survivor")).unwrap();
    assert_eq!(next_json(&mut second).await["content"], json!("survivor"));
    relay.shutdown.cancel();
}
