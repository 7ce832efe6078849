// Subscriber registry, fan-out and per-connection handling

pub mod broadcast;
pub mod manager;
pub mod registry;


pub use broadcast::{BroadcastReport, Broadcaster};
pub use manager::{ConnectionManager, SubscriberState};
pub use registry::{SubscriberHandle, SubscriberId, SubscriberRegistry};
