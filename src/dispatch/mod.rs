// Sub-message dispatch: method tag -> typed decode -> JSON projection

mod event;
mod registry;


pub use event::{DecodedEvent, WebcastEvent};
pub use registry::{DecodeFn, Dispatch, MessageRegistry, SkipReason};
