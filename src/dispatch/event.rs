use crate::proto::{
    json, WebcastChatMessage, WebcastGiftMessage, WebcastImDeleteMessage, WebcastLikeMessage,
    WebcastLinkMicArmies, WebcastMemberMessage, WebcastRankUpdateMessage,
    WebcastRoomUserSeqMessage, WebcastSocialMessage, WebcastUnauthorizedMemberMessage,
};
use serde_json::Value;

/// Every sub-message type the relay understands.
#[derive(Clone, Debug, PartialEq)]
pub enum WebcastEvent {
    Chat(WebcastChatMessage),
    Member(WebcastMemberMessage),
    RoomUserSeq(WebcastRoomUserSeqMessage),
    Like(WebcastLikeMessage),
    Social(WebcastSocialMessage),
    Gift(WebcastGiftMessage),
    ImDelete(WebcastImDeleteMessage),
    UnauthorizedMember(WebcastUnauthorizedMemberMessage),
    RankUpdate(WebcastRankUpdateMessage),
    LinkMicArmies(WebcastLinkMicArmies),
}

impl WebcastEvent {
    /// Wire tag of this event's type
    pub fn method(&self) -> &'static str {
        match self {
            WebcastEvent::Chat(_) => "WebcastChatMessage",
            WebcastEvent::Member(_) => "WebcastMemberMessage",
            WebcastEvent::RoomUserSeq(_) => "WebcastRoomUserSeqMessage",
            WebcastEvent::Like(_) => "WebcastLikeMessage",
            WebcastEvent::Social(_) => "WebcastSocialMessage",
            WebcastEvent::Gift(_) => "WebcastGiftMessage",
            WebcastEvent::ImDelete(_) => "WebcastImDeleteMessage",
            WebcastEvent::UnauthorizedMember(_) => "WebcastUnauthorizedMemberMessage",
            WebcastEvent::RankUpdate(_) => "WebcastRankUpdateMessage",
            WebcastEvent::LinkMicArmies(_) => "WebcastLinkMicArmies",
        }
    }

    /// Project into canonical JSON (camelCase names, defaults omitted)
    pub fn to_json(&self) -> Result<Value, serde_json::Error> {
        let mut value = match self {
            WebcastEvent::Chat(m) => serde_json::to_value(m)?,
            WebcastEvent::Member(m) => serde_json::to_value(m)?,
            WebcastEvent::RoomUserSeq(m) => serde_json::to_value(m)?,
            WebcastEvent::Like(m) => serde_json::to_value(m)?,
            WebcastEvent::Social(m) => serde_json::to_value(m)?,
            WebcastEvent::Gift(m) => serde_json::to_value(m)?,
            WebcastEvent::ImDelete(m) => serde_json::to_value(m)?,
            WebcastEvent::UnauthorizedMember(m) => serde_json::to_value(m)?,
            WebcastEvent::RankUpdate(m) => serde_json::to_value(m)?,
            WebcastEvent::LinkMicArmies(m) => serde_json::to_value(m)?,
        };
        json::prune_defaults(&mut value);
        Ok(value)
    }
}

/// One fully decoded sub-message, ready to broadcast
#[derive(Clone, Debug, PartialEq)]
pub struct DecodedEvent {
    pub method: String,
    pub body: Value,
}

impl DecodedEvent {
    /// Render as the text frame sent to subscribers.
    ///
    /// With `tagged`, a `"type"` member holding the method tag is added to the
    /// top-level object; otherwise the body is sent bare.
    pub fn to_text(&self, tagged: bool) -> Result<String, serde_json::Error> {
        if tagged {
            if let Value::Object(map) = &self.body {
                let mut map = map.clone();
                map.insert("type".to_string(), Value::String(self.method.clone()));
                return serde_json::to_string(&Value::Object(map));
            }
        }
        serde_json::to_string(&self.body)
    }
}
