//! Mediabridge Core Library
//!
//! This crate provides the configuration, error types, constants, and shared
//! request/response models used across all mediabridge components.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod storage_types;

// Re-export commonly used types
pub use config::{BaseConfig, Config, RelayQueue, RelaySettings, ServiceConfig};
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use storage_types::StorageBackend;
