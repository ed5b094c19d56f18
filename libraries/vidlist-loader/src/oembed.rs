//! oEmbed metadata lookup.

use crate::error::{LoaderError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

/// Default oEmbed endpoint.
pub const VIMEO_OEMBED_ENDPOINT: &str = "https://vimeo.com/api/oembed.json";

/// Display metadata for one video.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VideoMetadata {
    pub title: String,
    pub thumbnail_url: String,
}

/// Source of display metadata for video URLs.
#[async_trait]
pub trait MetadataFetcher: Send + Sync {
    /// Fetch title and thumbnail for the given video URL.
    async fn fetch(&self, video_url: &str) -> Result<VideoMetadata>;
}

/// oEmbed HTTP client.
#[derive(Debug, Clone)]
pub struct OembedClient {
    http: Client,
    endpoint: String,
}

impl OembedClient {
    /// Client for the public Vimeo endpoint.
    pub fn new() -> Result<Self> {
        Self::with_endpoint(VIMEO_OEMBED_ENDPOINT)
    }

    /// Client for a custom endpoint.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Result<Self> {
        let endpoint = endpoint.into();
        if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
            return Err(LoaderError::InvalidUrl(endpoint));
        }

        let http = Client::builder()
            .user_agent(format!("vidlist/{} (Loader)", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http, endpoint })
    }
}

#[async_trait]
impl MetadataFetcher for OembedClient {
    async fn fetch(&self, video_url: &str) -> Result<VideoMetadata> {
        debug!(url = %video_url, "Fetching oEmbed metadata");

        let fetch_error = |message: String| LoaderError::MetadataFetch {
            url: video_url.to_string(),
            message,
        };

        let response = self
            .http
            .get(&self.endpoint)
            .query(&[("url", video_url)])
            .send()
            .await
            .map_err(|e| fetch_error(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(fetch_error(format!("status {}", status.as_u16())));
        }

        response
            .json::<VideoMetadata>()
            .await
            .map_err(|e| fetch_error(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_must_be_http() {
        assert!(OembedClient::with_endpoint("https://vimeo.com/api/oembed.json").is_ok());
        assert!(OembedClient::with_endpoint("vimeo.com/api/oembed.json").is_err());
    }
}
