use crate::{error::StorageError, memory::MemoryStore, supabase::SupabaseStore};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};
use vidlist_core::{
    error::Result,
    storage::PlaylistStore,
    types::{Playlist, PlaylistId, StorageBackend},
};

/// Storage adapter used by the playlist service
///
/// Reads never fail: a backend error is logged and surfaces as an empty
/// list, a missing playlist, or "identifier is free". Inserts propagate
/// backend errors to the caller.
#[derive(Clone)]
pub struct Storage {
    store: Arc<dyn PlaylistStore>,
}

impl Storage {
    /// Wrap an existing backend
    pub fn new(store: Arc<dyn PlaylistStore>) -> Self {
        Self { store }
    }

    /// Process-local storage
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    /// Pick the backend from the remote credentials.
    ///
    /// Both values must be present and non-blank to use Supabase; otherwise
    /// a warning is logged and the in-memory map is used.
    pub fn open(
        url: Option<&str>,
        api_key: Option<&str>,
        timeout: Option<Duration>,
    ) -> std::result::Result<Self, StorageError> {
        let url = url.map(str::trim).filter(|s| !s.is_empty());
        let api_key = api_key.map(str::trim).filter(|s| !s.is_empty());

        match (url, api_key) {
            (Some(url), Some(api_key)) => {
                let store = SupabaseStore::new(url, api_key, timeout)?;
                info!(url = %url, "Using Supabase playlist storage");
                Ok(Self::new(Arc::new(store)))
            }
            _ => {
                warn!("Supabase credentials not found, using in-memory storage");
                Ok(Self::in_memory())
            }
        }
    }

    pub fn backend(&self) -> StorageBackend {
        self.store.backend()
    }

    /// All playlists, newest first; empty on backend failure
    pub async fn list_all(&self) -> Vec<Playlist> {
        self.store.list_all().await.unwrap_or_else(|e| {
            error!(error = %e, "Error fetching playlists");
            Vec::new()
        })
    }

    /// Playlist by identifier; `None` when absent or on backend failure
    pub async fn get_by_identifier(&self, id: &PlaylistId) -> Option<Playlist> {
        self.store.get_by_identifier(id).await.unwrap_or_else(|e| {
            error!(slug = %id, error = %e, "Error fetching playlist");
            None
        })
    }

    /// Whether the identifier is taken; `false` on backend failure
    pub async fn identifier_exists(&self, id: &PlaylistId) -> bool {
        self.store.identifier_exists(id).await.unwrap_or_else(|e| {
            error!(slug = %id, error = %e, "Error checking slug");
            false
        })
    }

    pub async fn insert(&self, playlist: Playlist) -> Result<Playlist> {
        self.store.insert(playlist).await.map_err(|e| {
            error!(error = %e, "Error creating playlist");
            e
        })
    }
}

impl std::fmt::Debug for Storage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storage")
            .field("backend", &self.backend())
            .finish()
    }
}
