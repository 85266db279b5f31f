//! Storage layer (S3-compatible).
//!
//! The upload path talks to object storage through the [`ObjectStore`]
//! trait so it can be exercised without a live backend.

pub mod s3;

pub use s3::S3Gateway;

use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("{0}")]
    Backend(String),
}

#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Write `data` under `key`. Exactly one backend write per call; retries
    /// are the caller's policy.
    async fn put(&self, key: &str, data: &[u8], content_type: &str) -> Result<(), StorageError>;

    /// Issue a time-limited retrieval URL for `key`.
    async fn presign_get(&self, key: &str, ttl_secs: u32) -> Result<String, StorageError>;
}
