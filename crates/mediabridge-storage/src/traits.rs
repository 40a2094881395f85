//! Storage abstraction trait
//!
//! This module defines the Storage trait that all storage backends must implement.

use crate::StorageBackend;
use async_trait::async_trait;
use bytes::Bytes;
use futures::Stream;
use std::pin::Pin;
use std::time::Duration;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Download failed: {0}")]
    DownloadFailed(String),

    #[error("Listing failed: {0}")]
    ListFailed(String),

    #[error("Object not found: {0}")]
    NotFound(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Storage backend error: {0}")]
    BackendError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// One object in a bucket listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectEntry {
    pub key: String,
    pub size: u64,
}

/// Storage abstraction trait
///
/// All storage backends (S3, local filesystem) must implement this trait.
/// Each instance is scoped to a single bucket; handlers that address several
/// buckets hold several handles.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Upload an object under `key` and return its publicly addressable URL.
    async fn upload(&self, key: &str, content_type: &str, data: Vec<u8>) -> StorageResult<String>;

    /// Download an object into memory.
    async fn download(&self, key: &str) -> StorageResult<Vec<u8>>;

    /// Download an object as a stream of chunks (for large files).
    async fn download_stream(
        &self,
        key: &str,
    ) -> StorageResult<Pin<Box<dyn Stream<Item = Result<Bytes, StorageError>> + Send>>>;

    /// Check whether an object exists.
    async fn exists(&self, key: &str) -> StorageResult<bool>;

    /// List every object in the bucket.
    async fn list(&self) -> StorageResult<Vec<ObjectEntry>>;

    /// Generate a time-limited pre-authorized read URL for an object.
    ///
    /// Local backends have no signing; they return the public URL unchanged.
    async fn signed_url(&self, key: &str, expires_in: Duration) -> StorageResult<String>;

    /// Get the storage backend type
    fn backend_type(&self) -> StorageBackend;

    /// Name of the bucket this handle is scoped to.
    fn bucket(&self) -> &str;
}
