use super::event::{DecodedEvent, WebcastEvent};
use crate::proto::{
    SubMessage, WebcastChatMessage, WebcastGiftMessage, WebcastImDeleteMessage,
    WebcastLikeMessage, WebcastLinkMicArmies, WebcastMemberMessage, WebcastRankUpdateMessage,
    WebcastRoomUserSeqMessage, WebcastSocialMessage, WebcastUnauthorizedMemberMessage,
};
use prost::Message;
use std::collections::HashMap;
use std::fmt;
use tracing::{error, info, warn};

/// Decoder for one sub-message type
pub type DecodeFn = fn(&[u8]) -> Result<WebcastEvent, prost::DecodeError>;

macro_rules! decoder {
    ($ty:ty => $variant:ident) => {
        |payload: &[u8]| <$ty>::decode(payload).map(WebcastEvent::$variant)
    };
}

/// Outcome of dispatching one sub-message
#[derive(Debug, Clone, PartialEq)]
pub enum Dispatch {
    Decoded(DecodedEvent),
    Skipped(SkipReason),
}

/// Why a sub-message produced no event
#[derive(Debug, Clone, PartialEq)]
pub enum SkipReason {
    /// Tag not in the registry; expected as the schema family evolves
    UnknownType(String),
    /// Tag recognized but payload did not decode
    DecodeFailed { method: String, error: String },
    /// Decoded but could not be rendered as JSON
    ProjectionFailed { method: String, error: String },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::UnknownType(method) => write!(f, "unknown message type '{}'", method),
            SkipReason::DecodeFailed { method, error } => {
                write!(f, "failed to decode {}: {}", method, error)
            }
            SkipReason::ProjectionFailed { method, error } => {
                write!(f, "failed to render {} as JSON: {}", method, error)
            }
        }
    }
}

/// Maps method tags to decoders.
pub struct MessageRegistry {
    decoders: HashMap<&'static str, DecodeFn>,
}

impl MessageRegistry {
    /// Registry with no decoders
    pub fn empty() -> Self {
        Self {
            decoders: HashMap::new(),
        }
    }

    /// Registry for the webcast schema family
    pub fn webcast() -> Self {
        let mut registry = Self::empty();
        registry.register("WebcastChatMessage", decoder!(WebcastChatMessage => Chat));
        registry.register("WebcastMemberMessage", decoder!(WebcastMemberMessage => Member));
        registry.register(
            "WebcastRoomUserSeqMessage",
            decoder!(WebcastRoomUserSeqMessage => RoomUserSeq),
        );
        registry.register("WebcastLikeMessage", decoder!(WebcastLikeMessage => Like));
        registry.register("WebcastSocialMessage", decoder!(WebcastSocialMessage => Social));
        registry.register("WebcastGiftMessage", decoder!(WebcastGiftMessage => Gift));
        registry.register(
            "WebcastImDeleteMessage",
            decoder!(WebcastImDeleteMessage => ImDelete),
        );
        registry.register(
            "WebcastUnauthorizedMemberMessage",
            decoder!(WebcastUnauthorizedMemberMessage => UnauthorizedMember),
        );
        registry.register(
            "WebcastRankUpdateMessage",
            decoder!(WebcastRankUpdateMessage => RankUpdate),
        );
        registry.register(
            "WebcastLinkMicArmies",
            decoder!(WebcastLinkMicArmies => LinkMicArmies),
        );
        registry
    }

    /// Add or replace the decoder for `method`
    pub fn register(&mut self, method: &'static str, decoder: DecodeFn) {
        self.decoders.insert(method, decoder);
    }

    pub fn contains(&self, method: &str) -> bool {
        self.decoders.contains_key(method)
    }

    /// Registered tags, sorted
    pub fn methods(&self) -> Vec<&'static str> {
        let mut methods: Vec<&'static str> = self.decoders.keys().copied().collect();
        methods.sort_unstable();
        methods
    }

    /// Decode one sub-message and project it to JSON.
    ///
    /// Never fails: unknown tags and bad payloads come back as `Skipped`
    /// after a diagnostic has been logged.
    pub fn dispatch(&self, msg: &SubMessage) -> Dispatch {
        let Some(decode) = self.decoders.get(msg.method.as_str()) else {
            info!(method = %msg.method, "Unrecognized message type, skipping");
            return Dispatch::Skipped(SkipReason::UnknownType(msg.method.clone()));
        };

        let event = match decode(&msg.payload) {
            Ok(event) => event,
            Err(e) => {
                warn!(method = %msg.method, error = %e, "Failed to decode message payload");
                return Dispatch::Skipped(SkipReason::DecodeFailed {
                    method: msg.method.clone(),
                    error: e.to_string(),
                });
            }
        };

        match event.to_json() {
            Ok(body) => Dispatch::Decoded(DecodedEvent {
                method: msg.method.clone(),
                body,
            }),
            Err(e) => {
                error!(method = %msg.method, error = %e, "Failed to project message to JSON");
                Dispatch::Skipped(SkipReason::ProjectionFailed {
                    method: msg.method.clone(),
                    error: e.to_string(),
                })
            }
        }
    }
}

impl Default for MessageRegistry {
    fn default() -> Self {
        Self::webcast()
    }
}
