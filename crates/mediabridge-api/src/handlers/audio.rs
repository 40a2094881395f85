//! Audio streaming with multi-bucket fallback probing.
//!
//! The filename is looked up across the configured audio buckets in order;
//! the first bucket holding the object serves it. Library and archive buckets
//! store `.mp3` renditions, so they are probed with the `.wav` -> `.mp3`
//! substitution. The response content type is always `audio/wav`, matching
//! the front-end contract regardless of which rendition was found.

use crate::error::{HttpAppError, ValidatedJson};
use crate::state::AppState;
use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, StatusCode},
    response::Response,
};
use futures::StreamExt;
use mediabridge_core::models::AudioStreamRequest;
use mediabridge_core::AppError;
use std::sync::Arc;

const AUDIO_CONTENT_TYPE: &str = "audio/wav";

#[tracing::instrument(skip(state), fields(filename = %filename, operation = "stream_audio"))]
pub async fn get_audio(
    State(state): State<Arc<AppState>>,
    Path(filename): Path<String>,
) -> Result<Response, HttpAppError> {
    stream_audio(&state, &filename).await
}

#[tracing::instrument(skip(state, body), fields(operation = "stream_audio"))]
pub async fn post_audio(
    State(state): State<Arc<AppState>>,
    ValidatedJson(body): ValidatedJson<AudioStreamRequest>,
) -> Result<Response, HttpAppError> {
    stream_audio(&state, &body.filename).await
}

fn probe_key(filename: &str, swap_wav_to_mp3: bool) -> String {
    if swap_wav_to_mp3 {
        filename.replace(".wav", ".mp3")
    } else {
        filename.to_string()
    }
}

async fn stream_audio(state: &AppState, filename: &str) -> Result<Response, HttpAppError> {
    for probe in &state.buckets.audio_probes {
        let key = probe_key(filename, probe.swap_wav_to_mp3);

        if !probe.storage.exists(&key).await? {
            continue;
        }

        tracing::debug!(
            bucket = %probe.storage.bucket(),
            key = %key,
            "Serving audio from bucket"
        );

        let stream = probe.storage.download_stream(&key).await?;

        // Errors after this point surface as a truncated stream; headers are
        // already on the wire.
        let body_stream = stream.map(|result| {
            result.map_err(|e| std::io::Error::other(format!("Storage stream error: {}", e)))
        });

        let response = Response::builder()
            .status(StatusCode::OK)
            .header(header::CONTENT_TYPE, AUDIO_CONTENT_TYPE)
            .body(Body::from_stream(body_stream))
            .map_err(|e| AppError::Internal(format!("Failed to build response: {}", e)))?;

        return Ok(response);
    }

    Err(AppError::NotFound("File not found".to_string()).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_key_substitutes_wav_for_mp3() {
        assert_eq!(probe_key("door_close.wav", true), "door_close.mp3");
        assert_eq!(probe_key("door_close.wav", false), "door_close.wav");
    }

    #[test]
    fn probe_key_leaves_other_extensions_alone() {
        assert_eq!(probe_key("door_close.mp3", true), "door_close.mp3");
        assert_eq!(probe_key("door_close.flac", true), "door_close.flac");
    }
}
