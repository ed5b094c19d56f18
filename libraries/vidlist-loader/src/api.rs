//! HTTP client for the Vidlist playlist API.

use crate::error::{LoaderError, Result};
use reqwest::{Client, Response};
use serde::{de::DeserializeOwned, Deserialize};
use std::time::Duration;
use tracing::{debug, info};
use vidlist_core::types::{CreatePlaylist, CreatedPlaylist, PlaylistId, PlaylistSummary};

/// Response of `GET /api/health`.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthInfo {
    pub status: String,
    pub storage: String,
    pub timestamp: String,
}

/// Client for the playlist endpoints.
///
/// # Example
///
/// ```ignore
/// use vidlist_loader::PlaylistApiClient;
///
/// let client = PlaylistApiClient::new("http://localhost:8080")?;
/// let id = client.create("My Trip!", vec!["https://vimeo.com/111".into()]).await?;
/// let playlist = client.get(&id).await?;
/// ```
#[derive(Debug, Clone)]
pub struct PlaylistApiClient {
    http: Client,
    base_url: String,
}

impl PlaylistApiClient {
    /// Create a new client for the server at `url`.
    pub fn new(url: &str) -> Result<Self> {
        if url.is_empty() {
            return Err(LoaderError::InvalidUrl("URL cannot be empty".into()));
        }

        let base_url = url.trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(LoaderError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("vidlist/{} (Loader)", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http, base_url })
    }

    /// Base URL without trailing slash.
    pub fn url(&self) -> &str {
        &self.base_url
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();

        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| v["error"].as_str().map(str::to_string))
                .unwrap_or(body);
            Err(LoaderError::ServerError {
                status: status.as_u16(),
                message,
            })
        }
    }

    /// All saved playlists.
    pub async fn list(&self) -> Result<Vec<PlaylistSummary>> {
        let url = format!("{}/api/playlists", self.base_url);
        debug!(url = %url, "Fetching playlists");

        let response = self.http.get(&url).send().await?;
        Self::read_json(response).await
    }

    /// One playlist by identifier.
    pub async fn get(&self, id: &PlaylistId) -> Result<PlaylistSummary> {
        let url = format!(
            "{}/api/playlists/{}",
            self.base_url,
            urlencoding::encode(id.as_str())
        );
        debug!(url = %url, "Fetching playlist");

        let response = self.http.get(&url).send().await?;
        Self::read_json(response).await
    }

    /// Save a playlist and return its identifier.
    pub async fn create(&self, name: &str, urls: Vec<String>) -> Result<PlaylistId> {
        let url = format!("{}/api/playlists", self.base_url);
        let body = CreatePlaylist::new(name, urls);

        let response = self.http.post(&url).json(&body).send().await?;
        let created: CreatedPlaylist = Self::read_json(response).await?;

        info!(id = %created.id, "Playlist saved");
        Ok(created.id)
    }

    /// Server health and storage mode.
    pub async fn health(&self) -> Result<HealthInfo> {
        let url = format!("{}/api/health", self.base_url);
        let response = self.http.get(&url).send().await?;
        Self::read_json(response).await
    }
}
