//! Multipart video upload.
//!
//! The upload is buffered in memory, renamed to `{stem}__{random suffix}`,
//! and forwarded to the video uploads bucket.

use crate::error::HttpAppError;
use crate::state::AppState;
use crate::utils::upload::{
    extract_video_field, file_stem, random_suffix, sanitize_filename, validate_file_size,
};
use axum::{
    extract::{Multipart, State},
    response::IntoResponse,
    Json,
};
use mediabridge_core::constants::UPLOAD_SUFFIX_LENGTH;
use mediabridge_core::models::UploadResponse;
use std::sync::Arc;

#[tracing::instrument(skip(state, multipart), fields(operation = "upload_video"))]
pub async fn upload_video(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<impl IntoResponse, HttpAppError> {
    let (data, original_filename, content_type) = extract_video_field(multipart).await?;

    validate_file_size(data.len(), state.config.max_upload_size_bytes())?;

    let stem = sanitize_filename(file_stem(&original_filename))?;
    let name = format!("{}__{}", stem, random_suffix(UPLOAD_SUFFIX_LENGTH));

    tracing::info!(
        original_filename = %original_filename,
        name = %name,
        size_bytes = data.len(),
        "Uploading video"
    );

    let url = state
        .buckets
        .video_uploads
        .upload(&name, &content_type, data)
        .await?;

    Ok(Json(UploadResponse { url }))
}
