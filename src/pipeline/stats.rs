use crate::subscription::BroadcastReport;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

/// Lifetime counters for the decode-dispatch-relay pipeline
pub struct RelayStats {
    started_at: DateTime<Utc>,
    frames_received: AtomicU64,
    frames_discarded: AtomicU64,
    events_decoded: AtomicU64,
    unknown_messages: AtomicU64,
    failed_messages: AtomicU64,
    events_broadcast: AtomicU64,
    deliveries: AtomicU64,
    subscribers_dropped: AtomicU64,
    queue_displaced: AtomicU64,
}

impl RelayStats {
    pub fn new() -> Self {
        Self {
            started_at: Utc::now(),
            frames_received: AtomicU64::new(0),
            frames_discarded: AtomicU64::new(0),
            events_decoded: AtomicU64::new(0),
            unknown_messages: AtomicU64::new(0),
            failed_messages: AtomicU64::new(0),
            events_broadcast: AtomicU64::new(0),
            deliveries: AtomicU64::new(0),
            subscribers_dropped: AtomicU64::new(0),
            queue_displaced: AtomicU64::new(0),
        }
    }

    pub fn record_frame_received(&self) {
        self.frames_received.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_frame_discarded(&self) {
        self.frames_discarded.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_event_decoded(&self) {
        self.events_decoded.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_unknown_message(&self) {
        self.unknown_messages.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_failed_message(&self) {
        self.failed_messages.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_displaced(&self, count: u64) {
        if count > 0 {
            self.queue_displaced.fetch_add(count, Ordering::Relaxed);
        }
    }

    pub fn record_broadcast(&self, report: BroadcastReport) {
        self.events_broadcast.fetch_add(1, Ordering::Relaxed);
        self.deliveries
            .fetch_add(report.delivered as u64, Ordering::Relaxed);
        self.subscribers_dropped
            .fetch_add(report.dropped as u64, Ordering::Relaxed);
    }

    /// Get snapshot of all counters
    pub fn snapshot(&self, subscribers: usize) -> StatsSnapshot {
        let now = Utc::now();
        StatsSnapshot {
            started_at: self.started_at,
            uptime_seconds: (now - self.started_at).num_seconds(),
            subscribers,
            frames_received: self.frames_received.load(Ordering::Relaxed),
            frames_discarded: self.frames_discarded.load(Ordering::Relaxed),
            events_decoded: self.events_decoded.load(Ordering::Relaxed),
            unknown_messages: self.unknown_messages.load(Ordering::Relaxed),
            failed_messages: self.failed_messages.load(Ordering::Relaxed),
            events_broadcast: self.events_broadcast.load(Ordering::Relaxed),
            deliveries: self.deliveries.load(Ordering::Relaxed),
            subscribers_dropped: self.subscribers_dropped.load(Ordering::Relaxed),
            queue_displaced: self.queue_displaced.load(Ordering::Relaxed),
        }
    }
}

impl Default for RelayStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Point-in-time view served on GET /api/stats
#[derive(Debug, Clone, Serialize)]
pub struct StatsSnapshot {
    pub started_at: DateTime<Utc>,
    pub uptime_seconds: i64,
    pub subscribers: usize,
    pub frames_received: u64,
    pub frames_discarded: u64,
    pub events_decoded: u64,
    pub unknown_messages: u64,
    pub failed_messages: u64,
    pub events_broadcast: u64,
    pub deliveries: u64,
    pub subscribers_dropped: u64,
    pub queue_displaced: u64,
}
