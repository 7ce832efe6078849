// Wire schema for push frames and webcast messages
pub mod proto;

// Frame decoding: push frame -> gunzip -> envelope
pub mod frame;

// Method-keyed message registry and JSON projection
pub mod dispatch;

// Relay queues between capture, decode and fan-out
pub mod queue;

// Subscriber registry and WebSocket connections
pub mod subscription;

// Capture adapters feeding raw frames
pub mod capture;

// Decode and broadcast workers
pub mod pipeline;

// Configuration loading
pub mod config;

// HTTP and WebSocket APIs
pub mod api;
