//! Test helpers: build Config, AppState, and the real router over local
//! storage in a temp directory.
//!
//! Run from the workspace root: `cargo test -p mediabridge-api`.

#![allow(dead_code)]

use axum_test::TestServer;
use mediabridge_api::setup;
use mediabridge_api::state::AppState;
use mediabridge_core::config::{
    BaseConfig, BucketNames, RelaySettings, ServiceConfig, StorageSettings,
};
use mediabridge_core::{Config, StorageBackend};
use mediabridge_relay::Broadcaster;
use mediabridge_storage::Storage;
use std::sync::Arc;
use tempfile::TempDir;

/// Records file the test config points `/api/json-data` at.
pub const TEST_RECORDS_FILE: &str = "demo_project.json";

/// Test application: server plus the state used to seed buckets.
pub struct TestApp {
    pub server: TestServer,
    pub state: Arc<AppState>,
    pub _temp_dir: TempDir,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }

    pub fn records(&self) -> Arc<dyn Storage> {
        self.state.buckets.records.clone()
    }

    pub fn video_uploads(&self) -> Arc<dyn Storage> {
        self.state.buckets.video_uploads.clone()
    }

    /// Audio probe bucket by position: 0 = library (substituted),
    /// 1 = fallback (literal), 2 = archive (substituted).
    pub fn audio_probe(&self, index: usize) -> Arc<dyn Storage> {
        self.state.buckets.audio_probes[index].storage.clone()
    }
}

/// Config over the local backend rooted at `storage_root`.
pub fn test_config(storage_root: &std::path::Path) -> Config {
    Config(Box::new(ServiceConfig {
        base: BaseConfig {
            server_port: 0,
            cors_origins: vec!["*".to_string()],
            environment: "test".to_string(),
        },
        storage: StorageSettings {
            backend: Some(StorageBackend::Local),
            s3_region: None,
            aws_region: None,
            s3_endpoint: None,
            local_storage_path: Some(storage_root.to_string_lossy().into_owned()),
            local_storage_base_url: Some("http://localhost:3002/media".to_string()),
        },
        buckets: BucketNames {
            records: "records".to_string(),
            video_uploads: "video-uploads".to_string(),
            audio_library: "audio-library".to_string(),
            audio_fallback: "audio-fallback".to_string(),
            audio_archive: "audio-archive".to_string(),
        },
        records_file: TEST_RECORDS_FILE.to_string(),
        signed_url_ttl_minutes: 2000,
        max_upload_size_bytes: 10 * 1024 * 1024,
        relay: RelaySettings {
            enabled: false,
            queues: vec![],
            poll_wait_secs: 1,
            channel_capacity: 16,
        },
    }))
}

/// Build state and router without binding a listener.
pub async fn build_app() -> (Arc<AppState>, axum::Router, TempDir) {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let config = test_config(temp_dir.path());

    let buckets = setup::storage::setup_buckets(&config)
        .await
        .expect("Failed to build bucket set");
    let broadcaster = Broadcaster::new(config.relay().channel_capacity);

    let state = Arc::new(AppState {
        is_production: false,
        buckets,
        broadcaster,
        relay: None,
        config: config.clone(),
    });

    let router = setup::routes::setup_routes(&config, state.clone()).expect("Failed to build router");

    (state, router, temp_dir)
}

/// Setup a test app served through axum-test.
pub async fn setup_test_app() -> TestApp {
    let (state, router, temp_dir) = build_app().await;
    let server = TestServer::new(router).expect("Failed to start test server");
    TestApp {
        server,
        state,
        _temp_dir: temp_dir,
    }
}
