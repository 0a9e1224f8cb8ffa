//! Media storage service.
//!
//! Uploaded files live in an S3-compatible object store (e.g. MinIO) under
//! per-domain prefixes: `images/profile/...`, `images/posts/images/...`,
//! `routes/...`. Each stored object gets a random hash prefix so uploads with
//! the same file name never collide.
//!
//! URL resolution never fails: any missing key resolves to an empty string so
//! serializers and token claims don't have to handle resolution errors.

use reqwest::header::CONTENT_TYPE;

use crate::{config::MediaConfig, error::AppError};

pub const PROFILE_PIC_DIR: &str = "images/profile";
pub const COVER_PIC_DIR: &str = "images/covers";
pub const POST_IMAGE_DIR: &str = "images/posts/images";
pub const ROUTE_FILE_DIR: &str = "routes";

/// Service for storing, fetching and resolving media objects.
pub struct MediaService<'a> {
    http_client: &'a reqwest::Client,
    config: &'a MediaConfig,
}

impl<'a> MediaService<'a> {
    pub fn new(http_client: &'a reqwest::Client, config: &'a MediaConfig) -> Self {
        Self {
            http_client,
            config,
        }
    }

    /// Resolves a storage key to a client-facing URL.
    ///
    /// Default is the `/media/` proxy path under the application base URL.
    /// Direct object-store URLs require the explicit direct-links flag plus a
    /// configured public URL, and are never used in debug deployments.
    pub fn url_for(&self, key: &str) -> String {
        if self.config.use_direct_urls && !self.config.debug {
            if let Some(public_url) = &self.config.public_url {
                return format!("{}/{}", public_url.trim_end_matches('/'), key);
            }
        }

        format!("{}/media/{}", self.config.app_url.trim_end_matches('/'), key)
    }

    /// Resolves an optional storage key; `None` stays `None`.
    pub fn resolve(&self, key: Option<&str>) -> Option<String> {
        key.filter(|key| !key.is_empty())
            .map(|key| self.url_for(key))
    }

    /// Resolves to a URL or an empty string, the shape token claims use.
    pub fn resolve_or_empty(&self, key: Option<&str>) -> String {
        self.resolve(key).unwrap_or_default()
    }

    /// Stores a file and returns its storage key.
    ///
    /// # Arguments
    /// - `directory` - One of the per-domain prefixes above
    /// - `filename` - Original file name; sanitized and kept for readability
    /// - `bytes` - File content
    ///
    /// # Returns
    /// - `Ok(key)` - Storage key to persist in the database
    /// - `Err(AppError)` - Upload request failed or the store rejected it
    pub async fn upload(
        &self,
        directory: &str,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<String, AppError> {
        let key = unique_key(directory, filename);

        let content_type = mime_guess::from_path(filename).first_or_octet_stream();

        let url = format!(
            "{}/{}/{}",
            self.config.endpoint_url.trim_end_matches('/'),
            self.config.bucket,
            key
        );

        let response = self
            .http_client
            .put(&url)
            .header(CONTENT_TYPE, content_type.as_ref())
            .body(bytes)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::InternalError(format!(
                "Storage upload of '{}' failed with status {}",
                key,
                response.status()
            )));
        }

        Ok(key)
    }

    /// Fetches an object for the `/media/` proxy.
    ///
    /// # Returns
    /// - `Ok(Some((bytes, content_type)))` - Object found; content type from
    ///   the store, or guessed from the key when the store supplies none
    /// - `Ok(None)` - Object does not exist
    /// - `Err(AppError)` - Storage request failed
    pub async fn fetch(&self, key: &str) -> Result<Option<(Vec<u8>, String)>, AppError> {
        let url = format!(
            "{}/{}/{}",
            self.config.endpoint_url.trim_end_matches('/'),
            self.config.bucket,
            key
        );

        let response = self.http_client.get(&url).send().await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !response.status().is_success() {
            return Err(AppError::InternalError(format!(
                "Storage fetch of '{}' failed with status {}",
                key,
                response.status()
            )));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string())
            .unwrap_or_else(|| {
                mime_guess::from_path(key)
                    .first_or_octet_stream()
                    .to_string()
            });

        let bytes = response.bytes().await?.to_vec();

        Ok(Some((bytes, content_type)))
    }
}

/// Builds a collision-free storage key: directory, random hash, sanitized
/// file name.
fn unique_key(directory: &str, filename: &str) -> String {
    let safe_name: String = filename
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    let safe_name = if safe_name.is_empty() {
        "file".to_string()
    } else {
        safe_name
    };

    format!(
        "{}/{:08x}_{}",
        directory.trim_matches('/'),
        rand::random::<u32>(),
        safe_name
    )
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn unique_keys_keep_directory_and_sanitize_names() {
        let key = unique_key(PROFILE_PIC_DIR, "my photo (1).png");

        assert!(key.starts_with("images/profile/"));
        assert!(key.ends_with("_my_photo__1_.png"));
    }

    #[test]
    fn unique_keys_differ_for_identical_inputs() {
        let a = unique_key(POST_IMAGE_DIR, "wing.jpg");
        let b = unique_key(POST_IMAGE_DIR, "wing.jpg");

        assert_ne!(a, b);
    }

    #[test]
    fn proxy_urls_are_absolute_under_the_app_url() {
        let config = MediaConfig {
            app_url: "https://pilothub.example.com/".to_string(),
            endpoint_url: "http://minio:9000".to_string(),
            bucket: "pilothub".to_string(),
            public_url: Some("https://cdn.example.com/pilothub".to_string()),
            use_direct_urls: false,
            debug: false,
        };
        let client = reqwest::Client::new();
        let media = MediaService::new(&client, &config);

        assert_eq!(
            media.url_for("images/profile/a.png"),
            "https://pilothub.example.com/media/images/profile/a.png"
        );
    }

    #[test]
    fn direct_urls_require_flag_and_skip_debug() {
        let client = reqwest::Client::new();

        let mut config = MediaConfig {
            app_url: "https://pilothub.example.com".to_string(),
            endpoint_url: "http://minio:9000".to_string(),
            bucket: "pilothub".to_string(),
            public_url: Some("https://cdn.example.com/pilothub/".to_string()),
            use_direct_urls: true,
            debug: false,
        };

        {
            let media = MediaService::new(&client, &config);
            assert_eq!(
                media.url_for("routes/plan.gpx"),
                "https://cdn.example.com/pilothub/routes/plan.gpx"
            );
        }

        config.debug = true;
        let media = MediaService::new(&client, &config);
        assert_eq!(
            media.url_for("routes/plan.gpx"),
            "https://pilothub.example.com/media/routes/plan.gpx"
        );
    }

    #[test]
    fn resolution_never_fails() {
        let config = MediaConfig {
            app_url: "https://pilothub.example.com".to_string(),
            endpoint_url: "http://minio:9000".to_string(),
            bucket: "pilothub".to_string(),
            public_url: None,
            use_direct_urls: true,
            debug: false,
        };
        let client = reqwest::Client::new();
        let media = MediaService::new(&client, &config);

        assert_eq!(media.resolve(None), None);
        assert_eq!(media.resolve(Some("")), None);
        assert_eq!(media.resolve_or_empty(None), "");
        // Direct flag without a public URL falls back to the proxy.
        assert_eq!(
            media.resolve_or_empty(Some("a.png")),
            "https://pilothub.example.com/media/a.png"
        );
    }
}
