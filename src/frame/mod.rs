// Outer frame decoding: push frame -> (gunzip) -> response envelope -> sub-messages

use crate::proto::{PushFrame, SubMessage, WebcastResponse};
use flate2::read::MultiGzDecoder;
use prost::Message;
use std::fmt;
use std::io::Read;
use thiserror::Error;


/// Frame bytes exactly as captured
pub type RawFrame = Vec<u8>;

/// Compression marker carried in the `compress_type` header
pub const GZIP: &str = "gzip";

/// Protobuf layer that failed to parse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    PushFrame,
    Envelope,
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Layer::PushFrame => write!(f, "push frame"),
            Layer::Envelope => write!(f, "response envelope"),
        }
    }
}

/// Errors decoding a raw frame. All of them discard the frame only.
#[derive(Debug, Error)]
pub enum FrameError {
    #[error("malformed {layer}: {source}")]
    Malformed {
        layer: Layer,
        #[source]
        source: prost::DecodeError,
    },

    #[error("gzip decompression failed: {0}")]
    DecompressFailed(#[source] std::io::Error),

    #[error("unsupported compress_type '{0}'")]
    UnsupportedCompression(String),
}

/// Decode a captured frame into the sub-messages it carries.
///
/// Heartbeat frames (`payload_type == "ack"`) yield an empty list.
pub fn decode(raw: &[u8]) -> Result<Vec<SubMessage>, FrameError> {
    let frame = PushFrame::decode(raw).map_err(|source| FrameError::Malformed {
        layer: Layer::PushFrame,
        source,
    })?;

    if frame.is_heartbeat() {
        return Ok(Vec::new());
    }

    let envelope = match frame.compression() {
        None => decode_envelope(&frame.payload)?,
        Some(GZIP) => decode_envelope(&gunzip(&frame.payload)?)?,
        Some(other) => return Err(FrameError::UnsupportedCompression(other.to_string())),
    };

    Ok(envelope.messages)
}

/// Parse response envelope bytes (already decompressed)
pub fn decode_envelope(bytes: &[u8]) -> Result<WebcastResponse, FrameError> {
    WebcastResponse::decode(bytes).map_err(|source| FrameError::Malformed {
        layer: Layer::Envelope,
        source,
    })
}

fn gunzip(payload: &[u8]) -> Result<Vec<u8>, FrameError> {
    let mut out = Vec::with_capacity(payload.len() * 4);
    MultiGzDecoder::new(payload)
        .read_to_end(&mut out)
        .map_err(FrameError::DecompressFailed)?;
    Ok(out)
}
