//! Health check handler.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;
use std::time::Duration;

#[derive(serde::Serialize)]
struct HealthCheckResponse {
    status: String,
    storage: String,
    push_clients: usize,
}

/// Liveness plus storage reachability. A storage probe against a key that
/// never exists exercises the backend without transferring data.
pub async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    const TIMEOUT: Duration = Duration::from_secs(5);

    let storage = state.buckets.records.clone();
    let storage_status = match tokio::time::timeout(
        TIMEOUT,
        storage.exists("health-check-non-existent-key"),
    )
    .await
    {
        Ok(Ok(_)) => "healthy".to_string(),
        Ok(Err(e)) => format!("degraded: {}", e),
        Err(_) => "timeout".to_string(),
    };

    let overall_healthy = storage_status == "healthy";

    let response = HealthCheckResponse {
        status: if overall_healthy {
            "healthy".to_string()
        } else {
            "unhealthy".to_string()
        },
        storage: storage_status,
        push_clients: state.broadcaster.receiver_count(),
    };

    let status_code = if overall_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status_code, Json(response))
}
