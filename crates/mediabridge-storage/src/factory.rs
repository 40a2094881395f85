use crate::{LocalStorage, S3Storage, Storage, StorageBackend, StorageError, StorageResult};
use mediabridge_core::config::StorageSettings;
use std::path::Path;
use std::sync::Arc;

/// Create a storage handle for one bucket, based on configuration.
///
/// For the local backend, each bucket maps to a subdirectory of
/// `LOCAL_STORAGE_PATH` and a path segment under `LOCAL_STORAGE_BASE_URL`.
pub async fn create_storage(
    settings: &StorageSettings,
    bucket: &str,
) -> StorageResult<Arc<dyn Storage>> {
    let backend = settings.backend.unwrap_or(StorageBackend::S3);

    match backend {
        StorageBackend::S3 => {
            let region = settings
                .s3_region
                .clone()
                .or_else(|| settings.aws_region.clone())
                .ok_or_else(|| {
                    StorageError::ConfigError("S3_REGION or AWS_REGION not configured".to_string())
                })?;
            let endpoint = settings.s3_endpoint.clone();

            let storage = S3Storage::new(bucket.to_string(), region, endpoint).await?;
            Ok(Arc::new(storage))
        }

        StorageBackend::Local => {
            let base_path = settings.local_storage_path.clone().ok_or_else(|| {
                StorageError::ConfigError("LOCAL_STORAGE_PATH not configured".to_string())
            })?;
            let base_url = settings.local_storage_base_url.clone().ok_or_else(|| {
                StorageError::ConfigError("LOCAL_STORAGE_BASE_URL not configured".to_string())
            })?;

            let storage = LocalStorage::new(
                Path::new(&base_path).join(bucket),
                format!("{}/{}", base_url.trim_end_matches('/'), bucket),
            )
            .await?;
            Ok(Arc::new(storage))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn create_local_storage_scopes_bucket_directory() {
        let dir = tempfile::tempdir().unwrap();
        let settings = StorageSettings {
            backend: Some(StorageBackend::Local),
            s3_region: None,
            aws_region: None,
            s3_endpoint: None,
            local_storage_path: Some(dir.path().to_string_lossy().into_owned()),
            local_storage_base_url: Some("http://localhost:3002/media".to_string()),
        };

        let storage = create_storage(&settings, "demo-sounds").await.unwrap();
        assert_eq!(storage.backend_type(), StorageBackend::Local);
        assert_eq!(storage.bucket(), "demo-sounds");

        let url = storage
            .upload("clip.wav", "audio/wav", b"x".to_vec())
            .await
            .unwrap();
        assert_eq!(url, "http://localhost:3002/media/demo-sounds/clip.wav");
        assert!(dir.path().join("demo-sounds/clip.wav").exists());
    }

    #[tokio::test]
    async fn create_local_storage_without_path_fails() {
        let settings = StorageSettings {
            backend: Some(StorageBackend::Local),
            s3_region: None,
            aws_region: None,
            s3_endpoint: None,
            local_storage_path: None,
            local_storage_base_url: None,
        };

        let result = create_storage(&settings, "demo-sounds").await;
        assert!(matches!(result, Err(StorageError::ConfigError(_))));
    }
}
