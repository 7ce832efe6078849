use crate::subscription::registry::{SubscriberId, SubscriberRegistry};
use axum::extract::ws::{Message, WebSocket};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Lifecycle of one subscriber connection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriberState {
    Connecting,
    Connected,
    Closed,
}

/// Drives a single WebSocket subscriber from upgrade to close
pub struct ConnectionManager {
    registry: Arc<SubscriberRegistry>,
    state: SubscriberState,
    id: Option<SubscriberId>,
}

impl ConnectionManager {
    pub fn new(registry: Arc<SubscriberRegistry>) -> Self {
        Self {
            registry,
            state: SubscriberState::Connecting,
            id: None,
        }
    }

    pub fn state(&self) -> SubscriberState {
        self.state
    }

    /// Join the registry and return the receiving end of the outbound queue
    pub fn connect(&mut self) -> mpsc::UnboundedReceiver<Arc<str>> {
        let (tx, rx) = mpsc::unbounded_channel();
        let id = self.registry.register(tx);
        self.id = Some(id);
        self.state = SubscriberState::Connected;
        info!(subscriber = %id, subscribers = self.registry.len(), "Subscriber connected");
        rx
    }

    /// Leave the registry. Idempotent.
    pub fn close(&mut self) {
        if self.state == SubscriberState::Closed {
            return;
        }
        if let Some(id) = self.id {
            self.registry.deregister(&id);
            info!(subscriber = %id, subscribers = self.registry.len(), "Subscriber disconnected");
        }
        self.state = SubscriberState::Closed;
    }

    /// Handle WebSocket connection lifecycle
    pub async fn handle(mut self, mut socket: WebSocket) {
        let mut outbound = self.connect();

        loop {
            tokio::select! {
                inbound = socket.recv() => {
                    match inbound {
                        Some(Ok(Message::Close(_))) | None => {
                            debug!("Subscriber closed connection");
                            break;
                        }
                        Some(Ok(Message::Ping(data))) => {
                            if let Err(e) = socket.send(Message::Pong(data)).await {
                                warn!(error = %e, "Failed to send pong");
                                break;
                            }
                        }
                        Some(Ok(_)) => {
                            // Output-only channel: inbound text/binary is ignored
                            debug!("Ignoring inbound subscriber message");
                        }
                        Some(Err(e)) => {
                            warn!(error = %e, "WebSocket error");
                            break;
                        }
                    }
                }

                event = outbound.recv() => {
                    match event {
                        Some(text) => {
                            if let Err(e) = socket.send(Message::Text(text.to_string())).await {
                                warn!(error = %e, "Failed to deliver event to subscriber");
                                break;
                            }
                        }
                        None => {
                            // Removed by the broadcaster or at shutdown
                            debug!("Subscriber removed from registry");
                            break;
                        }
                    }
                }
            }
        }

        self.close();
        if let Err(e) = socket.send(Message::Close(None)).await {
            debug!(error = %e, "Close frame not delivered");
        }
    }
}

impl Drop for ConnectionManager {
    fn drop(&mut self) {
        self.close();
    }
}
