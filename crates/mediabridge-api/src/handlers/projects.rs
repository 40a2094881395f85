//! Project enumeration: every object in the records bucket, parsed as JSON.

use crate::error::HttpAppError;
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use mediabridge_core::AppError;
use std::sync::Arc;

#[tracing::instrument(skip(state), fields(operation = "list_projects"))]
pub async fn list_projects(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpAppError> {
    let entries = state.buckets.records.list().await?;

    let mut projects = Vec::with_capacity(entries.len());
    for entry in entries {
        let bytes = state.buckets.records.download(&entry.key).await?;
        let value: serde_json::Value = serde_json::from_slice(&bytes).map_err(|e| {
            AppError::Internal(format!("Project record {} is not valid JSON: {}", entry.key, e))
        })?;
        projects.push(value);
    }

    tracing::debug!(project_count = projects.len(), "Project records listed");

    Ok(Json(projects))
}
