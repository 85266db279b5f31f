//! S3 gateway over the `rust-s3` crate.

use anyhow::{Context, Result};
use async_trait::async_trait;
use s3::creds::Credentials;
use s3::region::Region;
use s3::Bucket;
use tracing::info;

use super::{ObjectStore, StorageError};
use crate::config::StorageConfig;

pub struct S3Gateway {
    bucket: Box<Bucket>,
}

impl S3Gateway {
    /// Build a gateway from the storage settings. Returns `None` when the
    /// bucket or credentials are absent, in which case the service runs
    /// unconfigured rather than failing to start.
    pub fn from_config(config: &StorageConfig) -> Result<Option<Self>> {
        let (Some(bucket_name), Some(access_key), Some(secret_key)) = (
            config.bucket.as_deref(),
            config.access_key_id.as_deref(),
            config.secret_access_key.as_deref(),
        ) else {
            return Ok(None);
        };

        let region = match &config.endpoint {
            Some(endpoint) => Region::Custom {
                region: config.region.clone(),
                endpoint: endpoint.clone(),
            },
            None => config
                .region
                .parse()
                .map_err(|e| anyhow::anyhow!("invalid AWS region {:?}: {e}", config.region))?,
        };

        let credentials = Credentials::new(Some(access_key), Some(secret_key), None, None, None)
            .context("invalid storage credentials")?;

        let mut bucket =
            Bucket::new(bucket_name, region, credentials).context("failed to initialize bucket")?;
        // S3-compatible backends behind a custom endpoint generally want
        // path-style addressing.
        if config.endpoint.is_some() {
            bucket = bucket.with_path_style();
        }

        info!(bucket = %bucket_name, region = %config.region, "S3 gateway ready");
        Ok(Some(Self { bucket: Box::new(bucket) }))
    }
}

#[async_trait]
impl ObjectStore for S3Gateway {
    async fn put(&self, key: &str, data: &[u8], content_type: &str) -> Result<(), StorageError> {
        let response = self
            .bucket
            .put_object_with_content_type(key, data, content_type)
            .await
            .map_err(|e| StorageError::Backend(e.to_string()))?;

        if response.status_code() / 100 != 2 {
            return Err(StorageError::Backend(format!(
                "unexpected status {} writing object",
                response.status_code()
            )));
        }

        Ok(())
    }

    async fn presign_get(&self, key: &str, ttl_secs: u32) -> Result<String, StorageError> {
        self.bucket
            .presign_get(key, ttl_secs, None)
            .await
            .map_err(|e| StorageError::Backend(e.to_string()))
    }
}
