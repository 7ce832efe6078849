use super::registry::SubscriberRegistry;
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;

/// Delivery summary for one broadcast
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BroadcastReport {
    pub delivered: usize,
    pub dropped: usize,
}

/// Fans decoded events out to every registered subscriber.
#[derive(Clone)]
pub struct Broadcaster {
    registry: Arc<SubscriberRegistry>,
}

impl Broadcaster {
    pub fn new(registry: Arc<SubscriberRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &Arc<SubscriberRegistry> {
        &self.registry
    }

    /// Hand `text` to each subscriber in the current snapshot.
    ///
    /// Each subscriber queues independently, so a slow reader only falls
    /// behind. A subscriber whose connection is gone is removed; the others
    /// are unaffected.
    pub fn broadcast(&self, text: &str) -> BroadcastReport {
        let payload: Arc<str> = Arc::from(text);
        let mut report = BroadcastReport::default();

        for (id, handle) in self.registry.snapshot() {
            match handle.sender.send(Arc::clone(&payload)) {
                Ok(()) => report.delivered += 1,
                Err(_) => {
                    warn!(subscriber = %id, "Subscriber connection closed, dropping subscriber");
                    self.registry.deregister(&id);
                    report.dropped += 1;
                }
            }
        }

        report
    }
}
