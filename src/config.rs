use crate::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8000";
const DEFAULT_ACCESS_TOKEN_MINUTES: i64 = 60;
const DEFAULT_REFRESH_TOKEN_DAYS: i64 = 7;

pub struct Config {
    pub database_url: String,

    /// Socket address the HTTP server binds to.
    pub bind_address: String,

    pub jwt_secret: String,
    pub access_token_minutes: i64,
    pub refresh_token_days: i64,

    pub media: MediaConfig,
}

fn truthy(value: &str) -> bool {
    matches!(value, "1" | "true" | "True" | "yes")
}

/// Object-storage settings for uploaded media (S3-compatible, e.g. MinIO).
#[derive(Clone)]
pub struct MediaConfig {
    /// Application base URL; `/media/` proxy paths are absolutized against
    /// it, e.g. "https://pilothub.example.com".
    pub app_url: String,

    /// Base URL of the storage gateway, e.g. "http://minio:9000".
    pub endpoint_url: String,

    pub bucket: String,

    /// Public base URL for direct links.
    pub public_url: Option<String>,

    /// When true (and a public URL is configured, and not in debug), media
    /// URLs point straight at storage instead of the `/media/` proxy.
    pub use_direct_urls: bool,

    /// Debug deployments always serve media through the proxy.
    pub debug: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
            jwt_secret: std::env::var("JWT_SECRET")
                .map_err(|_| ConfigError::MissingEnvVar("JWT_SECRET".to_string()))?,
            access_token_minutes: optional_i64("ACCESS_TOKEN_MINUTES")?
                .unwrap_or(DEFAULT_ACCESS_TOKEN_MINUTES),
            refresh_token_days: optional_i64("REFRESH_TOKEN_DAYS")?
                .unwrap_or(DEFAULT_REFRESH_TOKEN_DAYS),
            media: MediaConfig {
                app_url: std::env::var("APP_URL")
                    .map_err(|_| ConfigError::MissingEnvVar("APP_URL".to_string()))?,
                endpoint_url: std::env::var("MEDIA_ENDPOINT_URL")
                    .map_err(|_| ConfigError::MissingEnvVar("MEDIA_ENDPOINT_URL".to_string()))?,
                bucket: std::env::var("MEDIA_BUCKET")
                    .map_err(|_| ConfigError::MissingEnvVar("MEDIA_BUCKET".to_string()))?,
                public_url: std::env::var("MEDIA_PUBLIC_URL").ok().filter(|v| !v.is_empty()),
                use_direct_urls: std::env::var("MEDIA_USE_DIRECT_URLS")
                    .map(|v| truthy(&v))
                    .unwrap_or(false),
                debug: std::env::var("DEBUG").map(|v| truthy(&v)).unwrap_or(false),
            },
        })
    }
}

fn optional_i64(name: &str) -> Result<Option<i64>, AppError> {
    match std::env::var(name) {
        Ok(value) => {
            let parsed = value
                .parse::<i64>()
                .map_err(|_| ConfigError::InvalidEnvVar(name.to_string(), value))?;
            Ok(Some(parsed))
        }
        Err(_) => Ok(None),
    }
}
