// Relay pipeline: capture -> raw queue -> decode -> event queue -> fan-out

mod stats;
mod worker;


pub use stats::{RelayStats, StatsSnapshot};
pub use worker::{run_broadcaster, run_decoder, FramePipeline};

use crate::capture::CaptureSink;
use crate::config::RelayConfig;
use crate::dispatch::MessageRegistry;
use crate::frame::RawFrame;
use crate::queue::{self, QueueReceiver, QueueSender};
use crate::subscription::{Broadcaster, SubscriberRegistry};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::error;

/// Owns the queues, the subscriber registry and the stats for one relay.
///
/// Created at startup; `start` moves the consumer ends into their tasks.
pub struct Relay {
    raw_tx: QueueSender<RawFrame>,
    raw_rx: QueueReceiver<RawFrame>,
    events_tx: QueueSender<String>,
    events_rx: QueueReceiver<String>,
    messages: MessageRegistry,
    tag_events: bool,
    subscribers: Arc<SubscriberRegistry>,
    stats: Arc<RelayStats>,
    shutdown: CancellationToken,
}

impl Relay {
    pub fn new(config: &RelayConfig, shutdown: CancellationToken) -> Self {
        Self::with_registry(config, MessageRegistry::webcast(), shutdown)
    }

    /// Build with a custom message registry
    pub fn with_registry(
        config: &RelayConfig,
        messages: MessageRegistry,
        shutdown: CancellationToken,
    ) -> Self {
        let (raw_tx, raw_rx) = queue::channel("raw_frames", config.queue.raw_capacity);
        let (events_tx, events_rx) =
            queue::channel("decoded_events", config.queue.decoded_capacity);

        Self {
            raw_tx,
            raw_rx,
            events_tx,
            events_rx,
            messages,
            tag_events: config.output.tag_events,
            subscribers: Arc::new(SubscriberRegistry::new()),
            stats: Arc::new(RelayStats::new()),
            shutdown,
        }
    }

    /// Producer handle for capture adapters
    pub fn capture_sink(&self) -> CaptureSink {
        CaptureSink::new(self.raw_tx.clone(), Arc::clone(&self.stats))
    }

    pub fn subscribers(&self) -> Arc<SubscriberRegistry> {
        Arc::clone(&self.subscribers)
    }

    pub fn stats(&self) -> Arc<RelayStats> {
        Arc::clone(&self.stats)
    }

    /// Spawn the decoder and broadcaster tasks.
    ///
    /// The pipeline keeps running while any `CaptureSink` is alive and
    /// the shutdown token has not fired.
    pub fn start(self) -> RelayTasks {
        let pipeline = FramePipeline::new(self.messages, self.tag_events, Arc::clone(&self.stats));

        let decoder = tokio::spawn(run_decoder(
            self.raw_rx,
            self.events_tx,
            pipeline,
            self.shutdown.clone(),
        ));
        let broadcaster = tokio::spawn(run_broadcaster(
            self.events_rx,
            Broadcaster::new(self.subscribers),
            self.stats,
            self.shutdown,
        ));

        // raw_tx drops here; remaining producers are the capture sinks
        drop(self.raw_tx);

        RelayTasks {
            decoder,
            broadcaster,
        }
    }
}

/// Handles to the running pipeline tasks
pub struct RelayTasks {
    decoder: JoinHandle<()>,
    broadcaster: JoinHandle<()>,
}

impl RelayTasks {
    /// Wait for both tasks to finish
    pub async fn join(self) {
        if let Err(e) = self.decoder.await {
            error!(error = %e, "Frame decoder task failed");
        }
        if let Err(e) = self.broadcaster.await {
            error!(error = %e, "Broadcaster task failed");
        }
    }
}
