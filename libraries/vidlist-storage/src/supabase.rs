//! Remote playlist table accessed through Supabase's PostgREST API.

use crate::error::StorageError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, Method, RequestBuilder};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;
use vidlist_core::{
    error::Result,
    storage::PlaylistStore,
    types::{Playlist, PlaylistId, StorageBackend},
};

/// Row shape of the remote `playlists` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistRecord {
    pub slug: String,
    pub name: String,
    /// Null or missing reads back as an empty list
    #[serde(default)]
    pub urls: Option<Vec<String>>,
    pub created_at: DateTime<Utc>,
}

impl From<Playlist> for PlaylistRecord {
    fn from(playlist: Playlist) -> Self {
        Self {
            slug: playlist.id.into_inner(),
            name: playlist.name,
            urls: Some(playlist.urls),
            created_at: playlist.created_at,
        }
    }
}

impl From<PlaylistRecord> for Playlist {
    fn from(record: PlaylistRecord) -> Self {
        Self {
            id: PlaylistId::new(record.slug),
            name: record.name,
            urls: record.urls.unwrap_or_default(),
            created_at: record.created_at,
        }
    }
}

/// Playlist store backed by a Supabase table
#[derive(Debug, Clone)]
pub struct SupabaseStore {
    http: Client,
    table_url: String,
    api_key: String,
}

impl SupabaseStore {
    /// Create a store for the project at `url` using the anon key.
    ///
    /// `timeout` bounds each request; `None` lets a hung upstream hang the caller.
    pub fn new(
        url: &str,
        api_key: &str,
        timeout: Option<Duration>,
    ) -> std::result::Result<Self, StorageError> {
        let url = url.trim().trim_end_matches('/');
        if url.is_empty() {
            return Err(StorageError::InvalidConfig(
                "Supabase URL cannot be empty".into(),
            ));
        }
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(StorageError::InvalidConfig(
                "Supabase URL must start with http:// or https://".into(),
            ));
        }
        if api_key.trim().is_empty() {
            return Err(StorageError::InvalidConfig(
                "Supabase key cannot be empty".into(),
            ));
        }

        let mut builder = Client::builder().user_agent(format!(
            "vidlist/{} (Server)",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        Ok(Self {
            http,
            table_url: format!("{}/rest/v1/playlists", url),
            api_key: api_key.trim().to_string(),
        })
    }

    fn request(&self, method: Method) -> RequestBuilder {
        self.http
            .request(method, &self.table_url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .header("Prefer", "return=representation")
    }

    async fn fetch_rows<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> std::result::Result<Vec<T>, StorageError> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            response
                .json::<Vec<T>>()
                .await
                .map_err(|e| StorageError::Parse(e.to_string()))
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(StorageError::Remote {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[async_trait]
impl PlaylistStore for SupabaseStore {
    fn backend(&self) -> StorageBackend {
        StorageBackend::Supabase
    }

    async fn list_all(&self) -> Result<Vec<Playlist>> {
        debug!(url = %self.table_url, "Listing playlists");

        let request = self
            .request(Method::GET)
            .query(&[("select", "*"), ("order", "created_at.desc")]);
        let rows: Vec<PlaylistRecord> = self.fetch_rows(request).await?;

        Ok(rows.into_iter().map(Playlist::from).collect())
    }

    async fn get_by_identifier(&self, id: &PlaylistId) -> Result<Option<Playlist>> {
        debug!(slug = %id, "Fetching playlist");

        let request = self
            .request(Method::GET)
            .query(&[("slug", format!("eq.{}", id)), ("select", "*".to_string())]);
        let rows: Vec<PlaylistRecord> = self.fetch_rows(request).await?;

        Ok(rows.into_iter().next().map(Playlist::from))
    }

    async fn insert(&self, playlist: Playlist) -> Result<Playlist> {
        debug!(slug = %playlist.id, urls = playlist.urls.len(), "Inserting playlist");

        let record = PlaylistRecord::from(playlist);
        let request = self.request(Method::POST).json(&record);
        let rows: Vec<PlaylistRecord> = self.fetch_rows(request).await?;

        rows.into_iter()
            .next()
            .map(Playlist::from)
            .ok_or_else(|| StorageError::EmptyResponse.into())
    }

    async fn identifier_exists(&self, id: &PlaylistId) -> Result<bool> {
        let request = self
            .request(Method::GET)
            .query(&[("slug", format!("eq.{}", id)), ("select", "slug".to_string())]);
        let rows: Vec<serde_json::Value> = self.fetch_rows(request).await?;

        Ok(!rows.is_empty())
    }
}
