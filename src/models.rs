use std::sync::Arc;

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::admission::AdmissionPolicy;
use crate::config::{BackendStatus, Config};
use crate::storage::ObjectStore;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub policy: AdmissionPolicy,
    pub store: Option<Arc<dyn ObjectStore>>,
}

impl AppState {
    pub fn new(config: Config, store: Option<Arc<dyn ObjectStore>>) -> Self {
        let policy = AdmissionPolicy::new(&config.upload);
        Self {
            config,
            policy,
            store,
        }
    }
}

/// One file submitted for storage. Lives for the duration of a single
/// request and is discarded afterwards.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub filename: String,
    pub content_type: String,
    pub data: Bytes,
}

/// Body of a successful `POST /api/upload`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub message: String,
    pub filename: String,
    pub s3_key: String,
    pub presigned_url: Option<String>,
    pub file_size: u64,
}

/// Body of `GET /api/config`.
#[derive(Debug, Clone, Serialize)]
pub struct ConfigResponse {
    pub configured: bool,
    pub details: BackendStatus,
}

/// Body of `GET /api/health`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub storage_configured: bool,
}
