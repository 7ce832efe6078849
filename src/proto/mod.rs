// Webcast wire schema
//
// Message structs are declared by hand with prost attributes; field tags follow
// the webcast push protocol. Types that reach subscribers also derive Serialize
// so the dispatcher can project them to JSON.

mod common;
mod envelope;
pub mod json;
mod webcast;

pub use common::{
    Common, Contributor, FollowInfo, GiftStruct, Image, LinkMicArmiesGroup, LinkMicArmiesItems,
    RankUpdate, Text, TextFormat, TextPiece, TextPieceUser, User,
};
pub use envelope::{PushFrame, SubMessage, WebcastResponse};
pub use webcast::{
    WebcastChatMessage, WebcastGiftMessage, WebcastImDeleteMessage, WebcastLikeMessage,
    WebcastLinkMicArmies, WebcastMemberMessage, WebcastRankUpdateMessage,
    WebcastRoomUserSeqMessage, WebcastSocialMessage, WebcastUnauthorizedMemberMessage,
};
