//! Replays a recorded capture file through a `CaptureSink`.
//!
//! File format: a sequence of records, each a big-endian u32 byte length
//! followed by that many bytes of raw push frame.

use super::CaptureSink;
use crate::frame::RawFrame;
use std::io::{self, ErrorKind, Write};
use std::path::PathBuf;
use std::time::Duration;
use tokio::fs::File;
use tokio::io::{AsyncRead, AsyncReadExt, BufReader};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

/// Records larger than this are treated as corruption
const MAX_RECORD_BYTES: usize = 64 * 1024 * 1024;

/// Read the next length-prefixed frame. `None` at a clean end of input.
pub async fn read_frame<R: AsyncRead + Unpin>(reader: &mut R) -> io::Result<Option<RawFrame>> {
    let len = match reader.read_u32().await {
        Ok(len) => len as usize,
        Err(e) if e.kind() == ErrorKind::UnexpectedEof => return Ok(None),
        Err(e) => return Err(e),
    };
    if len > MAX_RECORD_BYTES {
        return Err(io::Error::new(
            ErrorKind::InvalidData,
            format!("record length {} exceeds limit", len),
        ));
    }

    let mut frame = vec![0u8; len];
    reader.read_exact(&mut frame).await?;
    Ok(Some(frame))
}

/// Append one length-prefixed frame to `writer`
pub fn write_frame<W: Write>(writer: &mut W, frame: &[u8]) -> io::Result<()> {
    let len = u32::try_from(frame.len())
        .map_err(|_| io::Error::new(ErrorKind::InvalidInput, "frame too large"))?;
    writer.write_all(&len.to_be_bytes())?;
    writer.write_all(frame)
}

/// Replay `path` on a background task.
///
/// Stops at end of file, on a read error, when the pipeline closes, or when
/// `shutdown` fires (including mid-read and mid-interval). Resolves to the
/// number of frames submitted.
pub fn spawn_replay(
    path: PathBuf,
    interval: Duration,
    sink: CaptureSink,
    shutdown: CancellationToken,
) -> JoinHandle<usize> {
    tokio::spawn(replay(path, interval, sink, shutdown))
}

async fn replay(
    path: PathBuf,
    interval: Duration,
    sink: CaptureSink,
    shutdown: CancellationToken,
) -> usize {
    let file = match File::open(&path).await {
        Ok(file) => file,
        Err(e) => {
            error!(path = %path.display(), error = %e, "Failed to open replay file");
            return 0;
        }
    };
    info!(path = %path.display(), "Replaying captured frames");

    let mut reader = BufReader::new(file);
    let mut submitted = 0;
    loop {
        let record = tokio::select! {
            biased;
            _ = shutdown.cancelled() => break,
            record = read_frame(&mut reader) => record,
        };
        let frame = match record {
            Ok(Some(frame)) => frame,
            Ok(None) => break,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Replay file truncated or corrupt");
                break;
            }
        };
        if sink.submit(frame).is_err() {
            warn!("Relay pipeline closed, stopping replay");
            break;
        }
        submitted += 1;

        if !interval.is_zero() {
            tokio::select! {
                _ = shutdown.cancelled() => break,
                _ = tokio::time::sleep(interval) => {}
            }
        }
    }

    info!(frames = submitted, "Replay finished");
    submitted
}
