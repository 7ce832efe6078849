use super::json;
use serde::Serialize;

/// Header shared by every webcast message.
#[derive(Clone, PartialEq, prost::Message, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Common {
    #[prost(string, tag = "1")]
    pub method: String,
    #[prost(int64, tag = "2")]
    #[serde(serialize_with = "json::int64")]
    pub msg_id: i64,
    #[prost(int64, tag = "3")]
    #[serde(serialize_with = "json::int64")]
    pub room_id: i64,
    #[prost(int64, tag = "4")]
    #[serde(serialize_with = "json::int64")]
    pub create_time: i64,
    #[prost(int32, tag = "5")]
    pub monitor: i32,
    #[prost(bool, tag = "6")]
    pub is_show_msg: bool,
    #[prost(string, tag = "7")]
    pub describe: String,
    #[prost(message, optional, tag = "8")]
    pub display_text: Option<Text>,
    #[prost(int64, tag = "9")]
    #[serde(serialize_with = "json::int64")]
    pub fold_type: i64,
    #[prost(int64, tag = "10")]
    #[serde(serialize_with = "json::int64")]
    pub anchor_fold_type: i64,
    #[prost(int64, tag = "11")]
    #[serde(serialize_with = "json::int64")]
    pub priority_score: i64,
    #[prost(string, tag = "12")]
    pub log_id: String,
}

/// Localizable text with a pattern and substitution pieces.
#[derive(Clone, PartialEq, prost::Message, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Text {
    #[prost(string, tag = "1")]
    pub key: String,
    #[prost(string, tag = "2")]
    pub default_pattern: String,
    #[prost(message, optional, tag = "3")]
    pub default_format: Option<TextFormat>,
    #[prost(message, repeated, tag = "4")]
    pub pieces: Vec<TextPiece>,
}

#[derive(Clone, PartialEq, prost::Message, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextFormat {
    #[prost(string, tag = "1")]
    pub color: String,
    #[prost(bool, tag = "2")]
    pub bold: bool,
    #[prost(bool, tag = "3")]
    pub italic: bool,
    #[prost(int32, tag = "4")]
    pub weight: i32,
    #[prost(int32, tag = "5")]
    pub italic_angle: i32,
    #[prost(int32, tag = "6")]
    pub font_size: i32,
}

#[derive(Clone, PartialEq, prost::Message, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextPiece {
    #[prost(int32, tag = "1")]
    pub r#type: i32,
    #[prost(message, optional, tag = "2")]
    pub format: Option<TextFormat>,
    #[prost(string, tag = "11")]
    pub string_value: String,
    #[prost(message, optional, tag = "21")]
    pub user_value: Option<TextPieceUser>,
}

#[derive(Clone, PartialEq, prost::Message, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextPieceUser {
    #[prost(message, optional, tag = "1")]
    pub user: Option<User>,
    #[prost(bool, tag = "2")]
    pub with_colon: bool,
}

#[derive(Clone, PartialEq, prost::Message, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    #[prost(string, repeated, tag = "1")]
    pub url_list: Vec<String>,
    #[prost(string, tag = "2")]
    pub uri: String,
    #[prost(int64, tag = "3")]
    #[serde(serialize_with = "json::int64")]
    pub height: i64,
    #[prost(int64, tag = "4")]
    #[serde(serialize_with = "json::int64")]
    pub width: i64,
    #[prost(string, tag = "5")]
    pub avg_color: String,
    #[prost(int32, tag = "6")]
    pub image_type: i32,
    #[prost(string, tag = "7")]
    pub open_web_url: String,
    #[prost(bool, tag = "9")]
    pub is_animated: bool,
}

#[derive(Clone, PartialEq, prost::Message, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowInfo {
    #[prost(int64, tag = "1")]
    #[serde(serialize_with = "json::int64")]
    pub following_count: i64,
    #[prost(int64, tag = "2")]
    #[serde(serialize_with = "json::int64")]
    pub follower_count: i64,
    #[prost(int64, tag = "3")]
    #[serde(serialize_with = "json::int64")]
    pub follow_status: i64,
    #[prost(int64, tag = "4")]
    #[serde(serialize_with = "json::int64")]
    pub push_status: i64,
    #[prost(string, tag = "5")]
    pub remark_name: String,
}

/// A platform user as embedded in events.
#[derive(Clone, PartialEq, prost::Message, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[prost(int64, tag = "1")]
    #[serde(serialize_with = "json::int64")]
    pub id: i64,
    #[prost(int64, tag = "2")]
    #[serde(serialize_with = "json::int64")]
    pub short_id: i64,
    #[prost(string, tag = "3")]
    pub nickname: String,
    #[prost(int32, tag = "4")]
    pub gender: i32,
    #[prost(string, tag = "5")]
    pub signature: String,
    #[prost(int32, tag = "6")]
    pub level: i32,
    #[prost(message, optional, tag = "9")]
    pub avatar_thumb: Option<Image>,
    #[prost(bool, tag = "12")]
    pub verified: bool,
    #[prost(int64, tag = "16")]
    #[serde(serialize_with = "json::int64")]
    pub create_time: i64,
    #[prost(int64, tag = "17")]
    #[serde(serialize_with = "json::int64")]
    pub modify_time: i64,
    #[prost(message, optional, tag = "22")]
    pub follow_info: Option<FollowInfo>,
    #[prost(string, tag = "38")]
    pub display_id: String,
    #[prost(string, tag = "46")]
    pub sec_uid: String,
}

/// Viewer ranking entry in a room user sequence update.
#[derive(Clone, PartialEq, prost::Message, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Contributor {
    #[prost(int64, tag = "1")]
    #[serde(serialize_with = "json::int64")]
    pub coin_count: i64,
    #[prost(message, optional, tag = "2")]
    pub user: Option<User>,
    #[prost(int64, tag = "3")]
    #[serde(serialize_with = "json::int64")]
    pub rank: i64,
    #[prost(int64, tag = "4")]
    #[serde(serialize_with = "json::int64")]
    pub delta: i64,
}

/// Gift catalogue entry attached to a gift event.
#[derive(Clone, PartialEq, prost::Message, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GiftStruct {
    #[prost(message, optional, tag = "1")]
    pub image: Option<Image>,
    #[prost(string, tag = "2")]
    pub describe: String,
    #[prost(bool, tag = "3")]
    pub notify: bool,
    #[prost(int64, tag = "4")]
    #[serde(serialize_with = "json::int64")]
    pub duration: i64,
    #[prost(int64, tag = "5")]
    #[serde(serialize_with = "json::int64")]
    pub id: i64,
    #[prost(bool, tag = "10")]
    pub combo: bool,
    #[prost(int32, tag = "11")]
    pub r#type: i32,
    #[prost(int32, tag = "12")]
    pub diamond_count: i32,
    #[prost(string, tag = "16")]
    pub name: String,
    #[prost(message, optional, tag = "21")]
    pub icon: Option<Image>,
}

#[derive(Clone, PartialEq, prost::Message, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankUpdate {
    #[prost(int64, tag = "1")]
    #[serde(serialize_with = "json::int64")]
    pub rank_type: i64,
    #[prost(int64, tag = "2")]
    #[serde(serialize_with = "json::int64")]
    pub owner_rank: i64,
    #[prost(message, optional, tag = "3")]
    pub default_content: Option<Text>,
    #[prost(bool, tag = "4")]
    pub show_entrance_animation: bool,
    #[prost(int64, tag = "5")]
    #[serde(serialize_with = "json::int64")]
    pub countdown: i64,
    #[prost(int64, tag = "7")]
    #[serde(serialize_with = "json::int64")]
    pub related_tab_rank_type: i64,
}

/// Per-host army standings in a link-mic battle.
#[derive(Clone, PartialEq, prost::Message, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkMicArmiesItems {
    #[prost(uint64, tag = "1")]
    #[serde(serialize_with = "json::uint64")]
    pub host_user_id: u64,
    #[prost(message, repeated, tag = "2")]
    pub battle_groups: Vec<LinkMicArmiesGroup>,
}

#[derive(Clone, PartialEq, prost::Message, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkMicArmiesGroup {
    #[prost(message, repeated, tag = "1")]
    pub users: Vec<User>,
    #[prost(int32, tag = "2")]
    pub points: i32,
}
