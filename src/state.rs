//! Application state shared across all request handlers.
//!
//! `AppState` holds the shared resources the handlers need. It is initialized
//! once during startup and then cloned for each request handler through
//! Axum's state extraction.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::config::MediaConfig;

/// Application state containing shared resources and dependencies.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `reqwest::Client` uses an `Arc` internally
/// - `Arc<str>` / `Arc<MediaConfig>` are reference-counted pointers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// HTTP client for object-storage requests.
    ///
    /// Configured with redirects disabled so a misbehaving storage endpoint
    /// cannot bounce requests elsewhere.
    pub http_client: reqwest::Client,

    /// Secret used to sign and verify JSON Web Tokens.
    pub jwt_secret: Arc<str>,

    /// Access token lifetime in minutes.
    pub access_token_minutes: i64,

    /// Refresh token lifetime in days.
    pub refresh_token_days: i64,

    /// Object-storage settings for uploaded media.
    pub media: Arc<MediaConfig>,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        jwt_secret: String,
        access_token_minutes: i64,
        refresh_token_days: i64,
        media: MediaConfig,
    ) -> Self {
        Self {
            db,
            http_client,
            jwt_secret: Arc::from(jwt_secret),
            access_token_minutes,
            refresh_token_days,
            media: Arc::new(media),
        }
    }
}
