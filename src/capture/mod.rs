// Capture boundary: the only way raw frames enter the relay

mod replay;

pub use replay::{read_frame, spawn_replay, write_frame};

use crate::frame::RawFrame;
use crate::pipeline::RelayStats;
use crate::queue::{QueueClosed, QueueSender};
use std::sync::Arc;

/// Cloneable, non-blocking producer handle onto the raw frame queue.
///
/// Usable from plain OS threads as well as async handlers.
#[derive(Clone)]
pub struct CaptureSink {
    queue: QueueSender<RawFrame>,
    stats: Arc<RelayStats>,
}

impl CaptureSink {
    pub fn new(queue: QueueSender<RawFrame>, stats: Arc<RelayStats>) -> Self {
        Self { queue, stats }
    }

    /// Hand one captured frame to the pipeline.
    ///
    /// Fails only when the pipeline has shut down.
    pub fn submit(&self, frame: RawFrame) -> Result<(), QueueClosed<RawFrame>> {
        self.queue.enqueue(frame)?;
        self.stats.record_frame_received();
        Ok(())
    }

    pub fn is_closed(&self) -> bool {
        self.queue.is_closed()
    }
}
