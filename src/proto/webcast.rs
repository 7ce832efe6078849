use super::common::{
    Common, Contributor, GiftStruct, Image, LinkMicArmiesItems, RankUpdate, Text, User,
};
use super::json;
use serde::Serialize;
use std::collections::BTreeMap;

/// Chat comment posted in the room
#[derive(Clone, PartialEq, prost::Message, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebcastChatMessage {
    #[prost(message, optional, tag = "1")]
    pub common: Option<Common>,
    #[prost(message, optional, tag = "2")]
    pub user: Option<User>,
    #[prost(string, tag = "3")]
    pub content: String,
    #[prost(bool, tag = "4")]
    pub visible_to_sender: bool,
    #[prost(message, optional, tag = "5")]
    pub background_image: Option<Image>,
    #[prost(string, tag = "6")]
    pub full_screen_text_color: String,
    #[prost(message, optional, tag = "10")]
    pub gift_image: Option<Image>,
    #[prost(int32, tag = "11")]
    pub input_type: i32,
    #[prost(message, optional, tag = "12")]
    pub at_user: Option<User>,
    #[prost(string, tag = "14")]
    pub content_language: String,
}

/// Viewer joined (or was promoted in) the room
#[derive(Clone, PartialEq, prost::Message, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebcastMemberMessage {
    #[prost(message, optional, tag = "1")]
    pub common: Option<Common>,
    #[prost(message, optional, tag = "2")]
    pub user: Option<User>,
    #[prost(int64, tag = "3")]
    #[serde(serialize_with = "json::int64")]
    pub member_count: i64,
    #[prost(message, optional, tag = "4")]
    pub operator: Option<User>,
    #[prost(bool, tag = "5")]
    pub is_set_to_admin: bool,
    #[prost(bool, tag = "6")]
    pub is_top_user: bool,
    #[prost(int64, tag = "7")]
    #[serde(serialize_with = "json::int64")]
    pub rank_score: i64,
    #[prost(int64, tag = "8")]
    #[serde(serialize_with = "json::int64")]
    pub top_user_no: i64,
    #[prost(int64, tag = "9")]
    #[serde(serialize_with = "json::int64")]
    pub enter_type: i64,
    #[prost(int64, tag = "10")]
    #[serde(serialize_with = "json::int64")]
    pub action: i64,
    #[prost(string, tag = "11")]
    pub action_description: String,
    #[prost(int64, tag = "12")]
    #[serde(serialize_with = "json::int64")]
    pub user_id: i64,
    #[prost(string, tag = "14")]
    pub pop_str: String,
}

/// Periodic viewer count and top-viewer ranking
#[derive(Clone, PartialEq, prost::Message, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebcastRoomUserSeqMessage {
    #[prost(message, optional, tag = "1")]
    pub common: Option<Common>,
    #[prost(message, repeated, tag = "2")]
    pub ranks: Vec<Contributor>,
    #[prost(int64, tag = "3")]
    #[serde(serialize_with = "json::int64")]
    pub viewer_count: i64,
    #[prost(string, tag = "4")]
    pub pop_str: String,
    #[prost(message, repeated, tag = "5")]
    pub seats: Vec<Contributor>,
    #[prost(int64, tag = "6")]
    #[serde(serialize_with = "json::int64")]
    pub popularity: i64,
    #[prost(int32, tag = "7")]
    pub total_user: i32,
    #[prost(int64, tag = "8")]
    #[serde(serialize_with = "json::int64")]
    pub anonymous: i64,
}

#[derive(Clone, PartialEq, prost::Message, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebcastLikeMessage {
    #[prost(message, optional, tag = "1")]
    pub common: Option<Common>,
    #[prost(int64, tag = "2")]
    #[serde(serialize_with = "json::int64")]
    pub like_count: i64,
    #[prost(int64, tag = "3")]
    #[serde(serialize_with = "json::int64")]
    pub total_like_count: i64,
    #[prost(int64, tag = "4")]
    #[serde(serialize_with = "json::int64")]
    pub color: i64,
    #[prost(message, optional, tag = "5")]
    pub user: Option<User>,
    #[prost(string, tag = "6")]
    pub icon: String,
}

/// Follow and share notifications
#[derive(Clone, PartialEq, prost::Message, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebcastSocialMessage {
    #[prost(message, optional, tag = "1")]
    pub common: Option<Common>,
    #[prost(message, optional, tag = "2")]
    pub user: Option<User>,
    #[prost(int64, tag = "3")]
    #[serde(serialize_with = "json::int64")]
    pub share_type: i64,
    #[prost(int64, tag = "4")]
    #[serde(serialize_with = "json::int64")]
    pub action: i64,
    #[prost(string, tag = "5")]
    pub share_target: String,
    #[prost(int64, tag = "6")]
    #[serde(serialize_with = "json::int64")]
    pub follow_count: i64,
    #[prost(int64, tag = "7")]
    #[serde(serialize_with = "json::int64")]
    pub share_display_style: i64,
    #[prost(int64, tag = "8")]
    #[serde(serialize_with = "json::int64")]
    pub share_count: i64,
}

#[derive(Clone, PartialEq, prost::Message, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebcastGiftMessage {
    #[prost(message, optional, tag = "1")]
    pub common: Option<Common>,
    #[prost(int64, tag = "2")]
    #[serde(serialize_with = "json::int64")]
    pub gift_id: i64,
    #[prost(int64, tag = "3")]
    #[serde(serialize_with = "json::int64")]
    pub fan_ticket_count: i64,
    #[prost(int64, tag = "4")]
    #[serde(serialize_with = "json::int64")]
    pub group_count: i64,
    #[prost(int64, tag = "5")]
    #[serde(serialize_with = "json::int64")]
    pub repeat_count: i64,
    #[prost(int64, tag = "6")]
    #[serde(serialize_with = "json::int64")]
    pub combo_count: i64,
    #[prost(message, optional, tag = "7")]
    pub user: Option<User>,
    #[prost(message, optional, tag = "8")]
    pub to_user: Option<User>,
    /// Set on the final message of a combo streak
    #[prost(int32, tag = "9")]
    pub repeat_end: i32,
    #[prost(int64, tag = "11")]
    #[serde(serialize_with = "json::int64")]
    pub group_id: i64,
    #[prost(int64, tag = "13")]
    #[serde(serialize_with = "json::int64")]
    pub room_fan_ticket_count: i64,
    #[prost(message, optional, tag = "15")]
    pub gift: Option<GiftStruct>,
    #[prost(string, tag = "16")]
    pub log_id: String,
    #[prost(int64, tag = "17")]
    #[serde(serialize_with = "json::int64")]
    pub send_type: i64,
}

/// Moderator removed messages or all messages of some users
#[derive(Clone, PartialEq, prost::Message, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebcastImDeleteMessage {
    #[prost(message, optional, tag = "1")]
    pub common: Option<Common>,
    #[prost(int64, repeated, tag = "2")]
    #[serde(serialize_with = "json::int64_list")]
    pub delete_msg_ids: Vec<i64>,
    #[prost(int64, repeated, tag = "3")]
    #[serde(serialize_with = "json::int64_list")]
    pub delete_user_ids: Vec<i64>,
}

/// Join notice for a viewer who is not logged in
#[derive(Clone, PartialEq, prost::Message, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebcastUnauthorizedMemberMessage {
    #[prost(message, optional, tag = "1")]
    pub common: Option<Common>,
    #[prost(int32, tag = "2")]
    pub action: i32,
    #[prost(message, optional, tag = "3")]
    pub nick_name_prefix: Option<Text>,
    #[prost(string, tag = "4")]
    pub nick_name: String,
    #[prost(message, optional, tag = "5")]
    pub enter_text: Option<Text>,
}

#[derive(Clone, PartialEq, prost::Message, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebcastRankUpdateMessage {
    #[prost(message, optional, tag = "1")]
    pub common: Option<Common>,
    #[prost(message, repeated, tag = "2")]
    pub updates: Vec<RankUpdate>,
    #[prost(int64, tag = "3")]
    #[serde(serialize_with = "json::int64")]
    pub group_type: i64,
    #[prost(int64, tag = "5")]
    #[serde(serialize_with = "json::int64")]
    pub priority: i64,
}

/// Link-mic battle standings
#[derive(Clone, PartialEq, prost::Message, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebcastLinkMicArmies {
    #[prost(message, optional, tag = "1")]
    pub common: Option<Common>,
    #[prost(uint64, tag = "2")]
    #[serde(serialize_with = "json::uint64")]
    pub battle_id: u64,
    #[prost(btree_map = "uint64, message", tag = "3")]
    pub battle_items: BTreeMap<u64, LinkMicArmiesItems>,
    #[prost(uint64, tag = "4")]
    #[serde(serialize_with = "json::uint64")]
    pub channel_id: u64,
    #[prost(int64, tag = "5")]
    #[serde(serialize_with = "json::int64")]
    pub gift_sent_time: i64,
    #[prost(int64, tag = "6")]
    #[serde(serialize_with = "json::int64")]
    pub score_update_time: i64,
    #[prost(int32, tag = "7")]
    pub battle_status: i32,
}
