//! Upload coordination.
//!
//! One store attempt per admitted request, zero per rejected request. The
//! presign that follows a successful store is best-effort: its failure only
//! costs the download link, never the stored object.

use std::time::Duration;

use tokio::time::timeout;
use tracing::{error, info, warn};

use crate::admission::{AdmissionPolicy, Verdict};
use crate::keys;
use crate::models::UploadRequest;
use crate::storage::ObjectStore;
use crate::types::{AppError, AppResult};

/// Result of one completed upload, assembled into the response body by the
/// handler.
#[derive(Debug, Clone)]
pub struct UploadOutcome {
    pub filename: String,
    pub key: String,
    pub presigned_url: Option<String>,
    pub size: u64,
}

pub async fn handle_upload(
    policy: &AdmissionPolicy,
    store: Option<&dyn ObjectStore>,
    presign_ttl_secs: u32,
    store_timeout: Duration,
    request: UploadRequest,
) -> AppResult<UploadOutcome> {
    if let Verdict::Rejected(reason) = policy.admit(&request) {
        return Err(AppError::Validation(reason));
    }

    // Admission precedes the configuration check so a bad payload is always
    // reported as such, even on an unconfigured deployment.
    let store = store.ok_or(AppError::NotConfigured)?;

    let filename = keys::sanitize_basename(&request.filename);
    let key = keys::storage_key(&filename);
    let size = request.data.len() as u64;

    match timeout(
        store_timeout,
        store.put(&key, &request.data, &request.content_type),
    )
    .await
    {
        Ok(Ok(())) => {}
        Ok(Err(e)) => {
            error!(%key, "object store write failed: {e}");
            return Err(AppError::StorageUnavailable(e.to_string()));
        }
        Err(_) => {
            error!(
                %key,
                "object store write timed out after {}s",
                store_timeout.as_secs()
            );
            return Err(AppError::StorageUnavailable("write timed out".to_string()));
        }
    }

    let presigned_url = match store.presign_get(&key, presign_ttl_secs).await {
        Ok(url) => Some(url),
        Err(e) => {
            warn!(%key, "could not presign retrieval URL: {e}");
            None
        }
    };

    info!(%key, size, "file stored");

    Ok(UploadOutcome {
        filename,
        key,
        presigned_url,
        size,
    })
}
