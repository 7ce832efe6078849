// Relay queue: FIFO hand-off between execution contexts
//
// Unbounded queues are a tokio mpsc channel. A non-zero capacity switches to a
// single-receiver broadcast channel, whose lag semantics give drop-oldest: the
// consumer skips what was overwritten and counts it. Enqueue never blocks in
// either mode, so producers may live on plain OS threads.

use thiserror::Error;
use tokio::sync::broadcast::{self, error::RecvError, error::TryRecvError};
use tokio::sync::mpsc;
use tracing::warn;

#[cfg(test)]
mod tests;

/// The consumer is gone; the rejected item is handed back
#[derive(Error)]
#[error("relay queue consumer has shut down")]
pub struct QueueClosed<T>(pub T);

impl<T> std::fmt::Debug for QueueClosed<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("QueueClosed(..)")
    }
}

/// Create a queue. `capacity == 0` means unbounded.
///
/// Bounded capacity is rounded up to the next power of two.
pub fn channel<T: Clone>(
    name: &'static str,
    capacity: usize,
) -> (QueueSender<T>, QueueReceiver<T>) {
    if capacity == 0 {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            QueueSender::Unbounded(tx),
            QueueReceiver {
                name,
                inner: Inner::Unbounded(rx),
                displaced: 0,
            },
        )
    } else {
        let (tx, rx) = broadcast::channel(capacity);
        (
            QueueSender::Bounded(tx),
            QueueReceiver {
                name,
                inner: Inner::Bounded(rx),
                displaced: 0,
            },
        )
    }
}

/// Producer handle. Cloneable; the queue closes when the last one drops.
pub enum QueueSender<T> {
    Unbounded(mpsc::UnboundedSender<T>),
    Bounded(broadcast::Sender<T>),
}

impl<T> Clone for QueueSender<T> {
    fn clone(&self) -> Self {
        match self {
            QueueSender::Unbounded(tx) => QueueSender::Unbounded(tx.clone()),
            QueueSender::Bounded(tx) => QueueSender::Bounded(tx.clone()),
        }
    }
}

impl<T> QueueSender<T> {
    /// Append an item. Never blocks; a full bounded queue overwrites its oldest item.
    pub fn enqueue(&self, item: T) -> Result<(), QueueClosed<T>> {
        match self {
            QueueSender::Unbounded(tx) => tx.send(item).map_err(|e| QueueClosed(e.0)),
            QueueSender::Bounded(tx) => tx
                .send(item)
                .map(|_receivers| ())
                .map_err(|e| QueueClosed(e.0)),
        }
    }

    /// True once the consumer has been dropped
    pub fn is_closed(&self) -> bool {
        match self {
            QueueSender::Unbounded(tx) => tx.is_closed(),
            QueueSender::Bounded(tx) => tx.receiver_count() == 0,
        }
    }
}

enum Inner<T> {
    Unbounded(mpsc::UnboundedReceiver<T>),
    Bounded(broadcast::Receiver<T>),
}

/// Consumer handle. Not cloneable: each item is delivered exactly once.
pub struct QueueReceiver<T> {
    name: &'static str,
    inner: Inner<T>,
    displaced: u64,
}

impl<T: Clone> QueueReceiver<T> {
    /// Wait for the next item.
    ///
    /// Returns `None` once every sender is gone and the queue is drained.
    /// Cancel-safe.
    pub async fn dequeue(&mut self) -> Option<T> {
        match &mut self.inner {
            Inner::Unbounded(rx) => rx.recv().await,
            Inner::Bounded(rx) => loop {
                match rx.recv().await {
                    Ok(item) => return Some(item),
                    Err(RecvError::Lagged(skipped)) => {
                        record_lag(self.name, &mut self.displaced, skipped);
                    }
                    Err(RecvError::Closed) => return None,
                }
            },
        }
    }

    /// Take the next item if one is ready
    pub fn try_dequeue(&mut self) -> Option<T> {
        match &mut self.inner {
            Inner::Unbounded(rx) => rx.try_recv().ok(),
            Inner::Bounded(rx) => loop {
                match rx.try_recv() {
                    Ok(item) => return Some(item),
                    Err(TryRecvError::Lagged(skipped)) => {
                        record_lag(self.name, &mut self.displaced, skipped);
                    }
                    Err(_) => return None,
                }
            },
        }
    }
}

fn record_lag(queue: &'static str, displaced: &mut u64, skipped: u64) {
    warn!(queue = queue, skipped = skipped, "Relay queue full, dropped oldest items");
    *displaced += skipped;
}

impl<T> QueueReceiver<T> {
    pub fn len(&self) -> usize {
        match &self.inner {
            Inner::Unbounded(rx) => rx.len(),
            Inner::Bounded(rx) => rx.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Items discarded by drop-oldest since the last call
    pub fn take_displaced(&mut self) -> u64 {
        std::mem::take(&mut self.displaced)
    }
}
