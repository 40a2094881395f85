//! Configuration module
//!
//! This module provides the configuration for the service: HTTP settings,
//! storage backend selection, bucket names, and the notification relay.
//! Everything the forked predecessors hard-coded is an environment variable
//! here, with the old values as defaults.

use std::env;

use crate::constants;
use crate::storage_types::StorageBackend;

/// Base configuration shared by the HTTP layer
#[derive(Clone, Debug)]
pub struct BaseConfig {
    pub server_port: u16,
    pub cors_origins: Vec<String>,
    pub environment: String,
}

/// Storage backend configuration
#[derive(Clone, Debug)]
pub struct StorageSettings {
    pub backend: Option<StorageBackend>,
    pub s3_region: Option<String>,
    pub aws_region: Option<String>,
    pub s3_endpoint: Option<String>, // Custom endpoint for S3-compatible providers
    pub local_storage_path: Option<String>,
    pub local_storage_base_url: Option<String>,
}

/// Named buckets the handlers address.
///
/// `audio_library` and `audio_archive` are probed with the `.wav` -> `.mp3`
/// substitution; `audio_fallback` with the literal filename.
#[derive(Clone, Debug)]
pub struct BucketNames {
    pub records: String,
    pub video_uploads: String,
    pub audio_library: String,
    pub audio_fallback: String,
    pub audio_archive: String,
}

/// One queue subscription the relay polls, and the notice it broadcasts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelayQueue {
    pub queue_url: String,
    pub notice: String,
}

/// Notification relay configuration
#[derive(Clone, Debug)]
pub struct RelaySettings {
    pub enabled: bool,
    pub queues: Vec<RelayQueue>,
    pub poll_wait_secs: i32,
    pub channel_capacity: usize,
}

/// Full service configuration
#[derive(Clone, Debug)]
pub struct ServiceConfig {
    pub base: BaseConfig,
    pub storage: StorageSettings,
    pub buckets: BucketNames,
    pub records_file: String,
    pub signed_url_ttl_minutes: u64,
    pub max_upload_size_bytes: usize,
    pub relay: RelaySettings,
}

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config(pub Box<ServiceConfig>);

impl Config {
    fn inner(&self) -> &ServiceConfig {
        &self.0
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.inner().base.environment.to_lowercase();
        env == "production" || env == "prod"
    }

    pub fn from_env() -> Result<Self, anyhow::Error> {
        let config = ServiceConfig::from_env()?;
        Ok(Config(Box::new(config)))
    }

    // Convenience getters for common fields
    pub fn server_port(&self) -> u16 {
        self.inner().base.server_port
    }

    pub fn cors_origins(&self) -> &[String] {
        &self.inner().base.cors_origins
    }

    pub fn environment(&self) -> &str {
        &self.inner().base.environment
    }

    pub fn storage(&self) -> &StorageSettings {
        &self.inner().storage
    }

    pub fn buckets(&self) -> &BucketNames {
        &self.inner().buckets
    }

    pub fn records_file(&self) -> &str {
        &self.inner().records_file
    }

    pub fn signed_url_ttl_minutes(&self) -> u64 {
        self.inner().signed_url_ttl_minutes
    }

    pub fn max_upload_size_bytes(&self) -> usize {
        self.inner().max_upload_size_bytes
    }

    pub fn relay(&self) -> &RelaySettings {
        &self.inner().relay
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        self.inner().validate()
    }
}

/// Derive a broadcast notice from a queue URL, using the known subscription
/// names when one matches.
fn notice_for_queue(queue_url: &str) -> String {
    for (name, notice) in constants::DEFAULT_RELAY_NOTICES {
        if queue_url.contains(name) {
            return notice.to_string();
        }
    }
    constants::FALLBACK_RELAY_NOTICE.to_string()
}

/// Parse `RELAY_QUEUE_URLS`: comma-separated `queue_url` or `queue_url=notice`
/// entries. Empty entries are skipped.
fn parse_relay_queues(raw: &str) -> Vec<RelayQueue> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| match entry.split_once('=') {
            Some((url, notice)) if !notice.trim().is_empty() => RelayQueue {
                queue_url: url.trim().to_string(),
                notice: notice.trim().to_string(),
            },
            Some((url, _)) => RelayQueue {
                queue_url: url.trim().to_string(),
                notice: notice_for_queue(url),
            },
            None => RelayQueue {
                queue_url: entry.to_string(),
                notice: notice_for_queue(entry),
            },
        })
        .collect()
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        const MAX_UPLOAD_SIZE_MB: usize = 500;
        const RELAY_POLL_WAIT_SECS: i32 = 20;
        const RELAY_CHANNEL_CAPACITY: usize = 256;

        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string());

        let cors_origins_str = env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".to_string());
        let is_production =
            environment.to_lowercase() == "production" || environment.to_lowercase() == "prod";
        if is_production && cors_origins_str.trim() == "*" {
            return Err(anyhow::anyhow!(
                "CORS_ORIGINS cannot be '*' in production. Please specify explicit origins."
            ));
        }

        let cors_origins: Vec<String> = cors_origins_str
            .split(',')
            .map(|s| s.trim().to_string())
            .collect();

        let base = BaseConfig {
            server_port: env::var("PORT")
                .unwrap_or_else(|_| constants::DEFAULT_PORT.to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?,
            cors_origins,
            environment,
        };

        let backend = env::var("STORAGE_BACKEND")
            .ok()
            .and_then(|s| match s.to_lowercase().as_str() {
                "s3" => Some(StorageBackend::S3),
                "local" => Some(StorageBackend::Local),
                _ => None,
            });

        let storage = StorageSettings {
            backend,
            s3_region: env::var("S3_REGION").ok(),
            aws_region: env::var("AWS_REGION").ok(),
            s3_endpoint: env::var("S3_ENDPOINT").ok(),
            local_storage_path: env::var("LOCAL_STORAGE_PATH").ok(),
            local_storage_base_url: env::var("LOCAL_STORAGE_BASE_URL").ok(),
        };

        let buckets = BucketNames {
            records: env::var("RECORDS_BUCKET")
                .unwrap_or_else(|_| constants::DEFAULT_RECORDS_BUCKET.to_string()),
            video_uploads: env::var("VIDEO_UPLOADS_BUCKET")
                .unwrap_or_else(|_| constants::DEFAULT_VIDEO_UPLOADS_BUCKET.to_string()),
            audio_library: env::var("AUDIO_LIBRARY_BUCKET")
                .unwrap_or_else(|_| constants::DEFAULT_AUDIO_LIBRARY_BUCKET.to_string()),
            audio_fallback: env::var("AUDIO_FALLBACK_BUCKET")
                .unwrap_or_else(|_| constants::DEFAULT_AUDIO_FALLBACK_BUCKET.to_string()),
            audio_archive: env::var("AUDIO_ARCHIVE_BUCKET")
                .unwrap_or_else(|_| constants::DEFAULT_AUDIO_ARCHIVE_BUCKET.to_string()),
        };

        let relay = RelaySettings {
            enabled: env::var("RELAY_ENABLED")
                .unwrap_or_else(|_| "false".to_string())
                .to_lowercase()
                .parse()
                .unwrap_or(false),
            queues: parse_relay_queues(&env::var("RELAY_QUEUE_URLS").unwrap_or_default()),
            poll_wait_secs: env::var("RELAY_POLL_WAIT_SECS")
                .unwrap_or_else(|_| RELAY_POLL_WAIT_SECS.to_string())
                .parse()
                .unwrap_or(RELAY_POLL_WAIT_SECS),
            channel_capacity: env::var("RELAY_CHANNEL_CAPACITY")
                .unwrap_or_else(|_| RELAY_CHANNEL_CAPACITY.to_string())
                .parse()
                .unwrap_or(RELAY_CHANNEL_CAPACITY),
        };

        let config = ServiceConfig {
            base,
            storage,
            buckets,
            records_file: env::var("RECORDS_FILE")
                .unwrap_or_else(|_| constants::DEFAULT_RECORDS_FILE.to_string()),
            signed_url_ttl_minutes: env::var("SIGNED_URL_TTL_MINUTES")
                .unwrap_or_else(|_| constants::DEFAULT_SIGNED_URL_TTL_MINUTES.to_string())
                .parse()
                .unwrap_or(constants::DEFAULT_SIGNED_URL_TTL_MINUTES),
            max_upload_size_bytes: env::var("MAX_UPLOAD_SIZE_MB")
                .unwrap_or_else(|_| MAX_UPLOAD_SIZE_MB.to_string())
                .parse::<usize>()
                .unwrap_or(MAX_UPLOAD_SIZE_MB)
                * 1024
                * 1024,
            relay,
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        let backend = self.storage.backend.unwrap_or(StorageBackend::S3);
        match backend {
            StorageBackend::S3 => {
                if self.storage.s3_region.is_none() && self.storage.aws_region.is_none() {
                    return Err(anyhow::anyhow!(
                        "S3_REGION or AWS_REGION must be set when using the S3 storage backend"
                    ));
                }
            }
            StorageBackend::Local => {
                if self.storage.local_storage_path.is_none() {
                    return Err(anyhow::anyhow!(
                        "LOCAL_STORAGE_PATH must be set when using the local storage backend"
                    ));
                }
                if self.storage.local_storage_base_url.is_none() {
                    return Err(anyhow::anyhow!(
                        "LOCAL_STORAGE_BASE_URL must be set when using the local storage backend"
                    ));
                }
            }
        }

        if self.relay.enabled && self.relay.queues.is_empty() {
            return Err(anyhow::anyhow!(
                "RELAY_ENABLED=true requires at least one entry in RELAY_QUEUE_URLS"
            ));
        }

        if self.signed_url_ttl_minutes == 0 {
            return Err(anyhow::anyhow!(
                "SIGNED_URL_TTL_MINUTES must be greater than zero"
            ));
        }

        Ok(())
    }
}
