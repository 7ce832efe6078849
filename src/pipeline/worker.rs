use crate::dispatch::{Dispatch, MessageRegistry, SkipReason};
use crate::frame::{self, RawFrame};
use crate::pipeline::stats::RelayStats;
use crate::queue::{QueueReceiver, QueueSender};
use crate::subscription::Broadcaster;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

/// Frame decoder + dispatcher, turning one raw frame into subscriber text
pub struct FramePipeline {
    messages: MessageRegistry,
    tag_events: bool,
    stats: Arc<RelayStats>,
}

impl FramePipeline {
    pub fn new(messages: MessageRegistry, tag_events: bool, stats: Arc<RelayStats>) -> Self {
        Self {
            messages,
            tag_events,
            stats,
        }
    }

    /// Decode every sub-message in `raw`, in envelope order.
    ///
    /// Bad frames and bad sub-messages are logged and skipped; this never fails.
    pub fn process(&self, raw: &[u8]) -> Vec<String> {
        let messages = match frame::decode(raw) {
            Ok(messages) => messages,
            Err(e) => {
                warn!(error = %e, bytes = raw.len(), "Discarding frame");
                self.stats.record_frame_discarded();
                return Vec::new();
            }
        };

        let mut out = Vec::with_capacity(messages.len());
        for msg in &messages {
            match self.messages.dispatch(msg) {
                Dispatch::Decoded(event) => match event.to_text(self.tag_events) {
                    Ok(text) => {
                        self.stats.record_event_decoded();
                        out.push(text);
                    }
                    Err(e) => {
                        error!(method = %event.method, error = %e, "Failed to serialize event");
                        self.stats.record_failed_message();
                    }
                },
                Dispatch::Skipped(SkipReason::UnknownType(_)) => {
                    self.stats.record_unknown_message();
                }
                Dispatch::Skipped(_) => {
                    self.stats.record_failed_message();
                }
            }
        }
        out
    }
}

/// Consume raw frames in order and feed decoded events to the broadcast queue.
///
/// Single consumer: frame N's events are always queued before frame N+1's.
pub async fn run_decoder(
    mut frames: QueueReceiver<RawFrame>,
    events: QueueSender<String>,
    pipeline: FramePipeline,
    shutdown: CancellationToken,
) {
    info!("Frame decoder started");

    loop {
        let raw = tokio::select! {
            biased;
            _ = shutdown.cancelled() => break,
            frame = frames.dequeue() => match frame {
                Some(raw) => raw,
                None => {
                    debug!("Raw frame queue closed");
                    break;
                }
            },
        };
        pipeline.stats.record_displaced(frames.take_displaced());

        for text in pipeline.process(&raw) {
            if events.enqueue(text).is_err() {
                warn!("Broadcast queue closed, stopping decoder");
                return;
            }
        }
    }

    info!("Frame decoder stopped");
}

/// Drain decoded events and fan each one out to the current subscribers.
pub async fn run_broadcaster(
    mut events: QueueReceiver<String>,
    broadcaster: Broadcaster,
    stats: Arc<RelayStats>,
    shutdown: CancellationToken,
) {
    info!("Broadcaster started");

    loop {
        let text = tokio::select! {
            biased;
            _ = shutdown.cancelled() => break,
            event = events.dequeue() => match event {
                Some(text) => text,
                None => {
                    debug!("Decoded event queue closed");
                    break;
                }
            },
        };
        stats.record_displaced(events.take_displaced());

        let report = broadcaster.broadcast(&text);
        stats.record_broadcast(report);
    }

    // Dropping the senders closes every subscriber connection
    broadcaster.registry().clear();
    info!("Broadcaster stopped");
}
