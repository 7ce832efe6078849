use crate::capture::CaptureSink;
use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::post,
    Router,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, error};

/// Shared state for frame ingest
#[derive(Clone)]
pub struct FrameIngestState {
    pub sink: CaptureSink,
    pub max_frame_bytes: usize,
}

#[derive(Serialize)]
struct AcceptedResponse {
    accepted: bool,
    bytes: usize,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

/// Create router for POST /api/frames
pub fn create_frames_router(state: FrameIngestState) -> Router {
    let limit = state.max_frame_bytes;
    Router::new()
        .route("/api/frames", post(ingest_frame))
        .layer(DefaultBodyLimit::max(limit))
        .with_state(Arc::new(state))
}

/// POST /api/frames - Submit one raw push frame (request body = frame bytes)
async fn ingest_frame(
    State(state): State<Arc<FrameIngestState>>,
    body: Bytes,
) -> Result<(StatusCode, Json<AcceptedResponse>), AppError> {
    if body.len() > state.max_frame_bytes {
        return Err(AppError::PayloadTooLarge);
    }
    if body.is_empty() {
        return Err(AppError::EmptyFrame);
    }

    let bytes = body.len();
    state.sink.submit(body.to_vec()).map_err(|_| {
        error!("Relay pipeline closed, rejecting frame");
        AppError::PipelineClosed
    })?;
    debug!(bytes = bytes, "Captured frame accepted");

    Ok((
        StatusCode::ACCEPTED,
        Json(AcceptedResponse {
            accepted: true,
            bytes,
        }),
    ))
}

/// Application errors
#[derive(Debug)]
enum AppError {
    EmptyFrame,
    PayloadTooLarge,
    PipelineClosed,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::EmptyFrame => (StatusCode::BAD_REQUEST, "empty frame".to_string()),
            AppError::PayloadTooLarge => {
                (StatusCode::PAYLOAD_TOO_LARGE, "frame too large".to_string())
            }
            AppError::PipelineClosed => (
                StatusCode::SERVICE_UNAVAILABLE,
                "relay is shutting down".to_string(),
            ),
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
