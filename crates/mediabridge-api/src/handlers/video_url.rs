//! Signed read URLs for stored videos.

use crate::error::HttpAppError;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use mediabridge_core::models::SignedUrlResponse;
use std::sync::Arc;
use std::time::Duration;

#[tracing::instrument(skip(state), fields(video_name = %video_name, operation = "get_video_url"))]
pub async fn get_video_url(
    State(state): State<Arc<AppState>>,
    Path(video_name): Path<String>,
) -> Result<impl IntoResponse, HttpAppError> {
    let expires_in = Duration::from_secs(state.config.signed_url_ttl_minutes() * 60);

    let url = state
        .buckets
        .video_uploads
        .signed_url(&video_name, expires_in)
        .await?;

    Ok(Json(SignedUrlResponse { url }))
}
