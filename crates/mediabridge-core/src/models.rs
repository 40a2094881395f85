//! Request and response bodies shared between the API crate and its tests.

use serde::{Deserialize, Serialize};

/// Reply for `POST /upload`: where the stored object can be found.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub url: String,
}

/// Reply for `GET /api/{video_name}/url`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignedUrlResponse {
    pub url: String,
}

/// Body of `POST /upload-json`. Field names match the front-end contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonUploadRequest {
    #[serde(rename = "jsonData")]
    pub json_data: serde_json::Value,
    pub name: String,
}

/// Body of `POST /audio`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioStreamRequest {
    pub filename: String,
}

/// Generic confirmation reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// A notice relayed from a queue subscription to push-channel clients.
///
/// `source` identifies the subscription; `message` is the human-readable
/// string forwarded to every connected client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayNotice {
    pub source: String,
    pub message: String,
}
