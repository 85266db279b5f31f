use anyhow::Result;
use serde::Deserialize;
use std::env;

const DEFAULT_MAX_FILE_SIZE: usize = 50 * 1024 * 1024;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub upload: UploadConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
    pub cors_allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    pub bucket: Option<String>,
    pub region: String,
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
    pub endpoint: Option<String>,
    pub presign_ttl_secs: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadConfig {
    pub max_file_size: usize,
    pub store_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server: ServerConfig {
                port: env::var("PORT")
                    .unwrap_or_else(|_| "8000".to_string())
                    .parse()?,
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                cors_allowed_origins: env::var("ALLOWED_ORIGINS")
                    .map(|v| {
                        v.split(',')
                            .map(|s| s.trim().to_string())
                            .filter(|s| !s.is_empty())
                            .collect()
                    })
                    .unwrap_or_default(),
            },
            storage: StorageConfig {
                bucket: env::var("AWS_S3_BUCKET").ok().filter(|v| !v.is_empty()),
                region: normalize_region(
                    &env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
                ),
                access_key_id: env::var("AWS_ACCESS_KEY_ID").ok().filter(|v| !v.is_empty()),
                secret_access_key: env::var("AWS_SECRET_ACCESS_KEY")
                    .ok()
                    .filter(|v| !v.is_empty()),
                endpoint: env::var("S3_ENDPOINT").ok(),
                presign_ttl_secs: env::var("PRESIGN_TTL_SECS")
                    .unwrap_or_else(|_| "3600".to_string())
                    .parse()?,
            },
            upload: UploadConfig {
                max_file_size: env::var("MAX_FILE_SIZE")
                    .unwrap_or_else(|_| DEFAULT_MAX_FILE_SIZE.to_string())
                    .parse()?,
                store_timeout_secs: env::var("STORE_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "30".to_string())
                    .parse()?,
            },
        })
    }
}

/// Which backend settings are present. Field names match the `/api/config`
/// response body.
#[derive(Debug, Clone, serde::Serialize)]
pub struct BackendStatus {
    pub aws_access_key: bool,
    pub aws_secret_key: bool,
    pub aws_bucket: bool,
    pub aws_region: String,
}

impl BackendStatus {
    pub fn configured(&self) -> bool {
        self.aws_access_key && self.aws_secret_key && self.aws_bucket && !self.aws_region.is_empty()
    }
}

impl StorageConfig {
    /// Snapshot of which backend settings are present. Pure and cheap, safe
    /// to evaluate on every status request.
    pub fn status(&self) -> BackendStatus {
        BackendStatus {
            aws_access_key: self.access_key_id.is_some(),
            aws_secret_key: self.secret_access_key.is_some(),
            aws_bucket: self.bucket.is_some(),
            aws_region: self.region.clone(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.status().configured()
    }
}

/// Region values copied from the AWS console keep their description, e.g.
/// "US East (Ohio) us-east-2"; only the trailing region code is usable.
fn normalize_region(raw: &str) -> String {
    if raw.contains('(') && raw.contains(')') {
        raw.split_whitespace().last().unwrap_or(raw).to_string()
    } else {
        raw.trim().to_string()
    }
}
