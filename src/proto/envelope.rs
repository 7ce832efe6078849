use std::collections::HashMap;

/// Outer push frame as delivered on the platform's WebSocket.
#[derive(Clone, PartialEq, prost::Message)]
pub struct PushFrame {
    #[prost(int64, tag = "1")]
    pub seq_id: i64,
    #[prost(int64, tag = "2")]
    pub log_id: i64,
    #[prost(int64, tag = "3")]
    pub service: i64,
    #[prost(int64, tag = "4")]
    pub method: i64,
    /// Transport headers; `compress_type` marks a gzip payload
    #[prost(map = "string, string", tag = "5")]
    pub headers: HashMap<String, String>,
    #[prost(string, tag = "6")]
    pub payload_encoding: String,
    /// `"ack"` for heartbeats, `"msg"` for event batches
    #[prost(string, tag = "7")]
    pub payload_type: String,
    #[prost(bytes = "vec", tag = "8")]
    pub payload: Vec<u8>,
}

/// Inner response envelope carried in a push frame payload.
#[derive(Clone, PartialEq, prost::Message)]
pub struct WebcastResponse {
    #[prost(message, repeated, tag = "1")]
    pub messages: Vec<SubMessage>,
    #[prost(string, tag = "2")]
    pub cursor: String,
    #[prost(int64, tag = "3")]
    pub fetch_interval: i64,
    #[prost(int64, tag = "4")]
    pub now: i64,
    #[prost(string, tag = "5")]
    pub internal_ext: String,
    #[prost(int32, tag = "6")]
    pub fetch_type: i32,
    #[prost(map = "string, string", tag = "7")]
    pub route_params: HashMap<String, String>,
    #[prost(int64, tag = "8")]
    pub heartbeat_duration: i64,
    #[prost(bool, tag = "9")]
    pub needs_ack: bool,
    #[prost(string, tag = "10")]
    pub push_server: String,
    #[prost(bool, tag = "11")]
    pub is_first: bool,
    #[prost(string, tag = "12")]
    pub history_comment_cursor: String,
    #[prost(bool, tag = "13")]
    pub history_no_more: bool,
}

/// One typed event inside a response envelope.
///
/// `method` names the concrete message type held in `payload`.
#[derive(Clone, PartialEq, prost::Message)]
pub struct SubMessage {
    #[prost(string, tag = "1")]
    pub method: String,
    #[prost(bytes = "vec", tag = "2")]
    pub payload: Vec<u8>,
    #[prost(int64, tag = "3")]
    pub msg_id: i64,
    #[prost(int32, tag = "4")]
    pub msg_type: i32,
    #[prost(int64, tag = "5")]
    pub offset: i64,
    #[prost(bool, tag = "6")]
    pub is_history: bool,
}

impl PushFrame {
    /// Heartbeat acknowledgements carry no application data
    pub fn is_heartbeat(&self) -> bool {
        self.payload_type == "ack"
    }

    /// Value of the `compress_type` header, if any
    pub fn compression(&self) -> Option<&str> {
        self.headers
            .get("compress_type")
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }
}
