//! Process-local playlist map
//!
//! Used when the remote table is not configured. Contents are lost on restart.

use crate::error::StorageError;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use vidlist_core::{
    error::Result,
    storage::PlaylistStore,
    types::{Playlist, PlaylistId, StorageBackend},
};

/// In-memory playlist store keyed by identifier
#[derive(Debug, Default)]
pub struct MemoryStore {
    playlists: RwLock<HashMap<PlaylistId, Playlist>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored playlists
    pub async fn len(&self) -> usize {
        self.playlists.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.playlists.read().await.is_empty()
    }
}

#[async_trait]
impl PlaylistStore for MemoryStore {
    fn backend(&self) -> StorageBackend {
        StorageBackend::InMemory
    }

    async fn list_all(&self) -> Result<Vec<Playlist>> {
        let mut playlists: Vec<Playlist> = self.playlists.read().await.values().cloned().collect();
        playlists.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(playlists)
    }

    async fn get_by_identifier(&self, id: &PlaylistId) -> Result<Option<Playlist>> {
        Ok(self.playlists.read().await.get(id).cloned())
    }

    async fn insert(&self, playlist: Playlist) -> Result<Playlist> {
        let mut playlists = self.playlists.write().await;
        if playlists.contains_key(&playlist.id) {
            return Err(StorageError::Conflict(playlist.id.to_string()).into());
        }
        playlists.insert(playlist.id.clone(), playlist.clone());
        Ok(playlist)
    }

    async fn identifier_exists(&self, id: &PlaylistId) -> Result<bool> {
        Ok(self.playlists.read().await.contains_key(id))
    }
}
