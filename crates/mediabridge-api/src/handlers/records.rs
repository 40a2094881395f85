//! The fixed project record (`/api/json-data`) and JSON uploads (`/upload-json`).

use crate::error::{HttpAppError, ValidatedJson};
use crate::state::AppState;
use crate::utils::upload::sanitize_filename;
use axum::{extract::State, response::IntoResponse, Json};
use mediabridge_core::models::{JsonUploadRequest, MessageResponse};
use mediabridge_core::AppError;
use std::sync::Arc;

/// Download the configured records file and return it as parsed JSON.
#[tracing::instrument(skip(state), fields(operation = "get_json_data"))]
pub async fn get_json_data(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpAppError> {
    let records_file = state.config.records_file();
    let bytes = state.buckets.records.download(records_file).await?;

    let value: serde_json::Value = serde_json::from_slice(&bytes).map_err(|e| {
        AppError::Internal(format!("Record {} is not valid JSON: {}", records_file, e))
    })?;

    Ok(Json(value))
}

/// Store the submitted JSON as `{name}.json` in the records bucket.
///
/// The body is staged through a temporary file before upload; the temp file
/// is removed when the handler returns.
#[tracing::instrument(skip(state, body), fields(operation = "upload_json"))]
pub async fn upload_json(
    State(state): State<Arc<AppState>>,
    ValidatedJson(body): ValidatedJson<JsonUploadRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    let name = sanitize_filename(&body.name)?;

    let pretty = serde_json::to_vec_pretty(&body.json_data)
        .map_err(|e| AppError::InvalidInput(format!("JSON body cannot be serialized: {}", e)))?;

    let staged = tempfile::NamedTempFile::new().map_err(AppError::from)?;
    std::fs::write(staged.path(), &pretty).map_err(AppError::from)?;
    let data = std::fs::read(staged.path()).map_err(AppError::from)?;

    let key = format!("{}.json", name);
    state
        .buckets
        .records
        .upload(&key, "application/json", data)
        .await?;

    // Temp file is deleted on drop.
    drop(staged);

    tracing::info!(key = %key, "JSON record uploaded");

    Ok(Json(MessageResponse {
        message: "JSON data uploaded successfully".to_string(),
    }))
}
