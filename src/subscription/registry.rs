use chrono::{DateTime, Utc};
use dashmap::DashMap;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::debug;
use uuid::Uuid;

/// Identity of one subscriber connection; never reused
pub type SubscriberId = Uuid;

/// Outbound side of a subscriber connection
#[derive(Clone, Debug)]
pub struct SubscriberHandle {
    pub sender: mpsc::UnboundedSender<Arc<str>>,
    pub connected_at: DateTime<Utc>,
}

/// Live set of connected subscribers.
///
/// Insert on connect, remove on close or failed delivery. Safe to mutate
/// while a broadcast is iterating a snapshot.
#[derive(Default)]
pub struct SubscriberRegistry {
    subscribers: DashMap<SubscriberId, SubscriberHandle>,
}

impl SubscriberRegistry {
    pub fn new() -> Self {
        Self {
            subscribers: DashMap::new(),
        }
    }

    /// Add a connected subscriber under a fresh identity
    pub fn register(&self, sender: mpsc::UnboundedSender<Arc<str>>) -> SubscriberId {
        let id = Uuid::new_v4();
        self.subscribers.insert(
            id,
            SubscriberHandle {
                sender,
                connected_at: Utc::now(),
            },
        );
        debug!(subscriber = %id, total = self.subscribers.len(), "Subscriber registered");
        id
    }

    /// Remove a subscriber. Returns false if it was already gone.
    pub fn deregister(&self, id: &SubscriberId) -> bool {
        let removed = self.subscribers.remove(id).is_some();
        if removed {
            debug!(subscriber = %id, total = self.subscribers.len(), "Subscriber deregistered");
        }
        removed
    }

    pub fn contains(&self, id: &SubscriberId) -> bool {
        self.subscribers.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }

    /// Current members, copied out so no shard lock is held while sending
    pub fn snapshot(&self) -> Vec<(SubscriberId, SubscriberHandle)> {
        self.subscribers
            .iter()
            .map(|entry| (*entry.key(), entry.value().clone()))
            .collect()
    }

    /// Sorted member ids
    pub fn ids(&self) -> Vec<SubscriberId> {
        let mut ids: Vec<SubscriberId> = self.subscribers.iter().map(|e| *e.key()).collect();
        ids.sort();
        ids
    }

    /// Drop every subscriber; their connections close once the sender is gone
    pub fn clear(&self) {
        self.subscribers.clear();
    }
}
