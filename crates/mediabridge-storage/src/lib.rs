//! Mediabridge Storage Library
//!
//! This crate provides the storage abstraction and its backends. One
//! [`Storage`] handle wraps one bucket; the API layer holds a set of named
//! handles and probes or writes through them.
//!
//! Keys are plain object names. They must not contain `..` or a leading `/`;
//! the local backend enforces this before touching the filesystem.

pub mod factory;
pub mod local;
pub mod s3;
pub mod traits;

// Re-export commonly used types
pub use factory::create_storage;
pub use local::LocalStorage;
pub use mediabridge_core::StorageBackend;
pub use s3::S3Storage;
pub use traits::{ObjectEntry, Storage, StorageError, StorageResult};
