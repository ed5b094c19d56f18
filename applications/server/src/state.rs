/// Shared application state
use crate::services::PlaylistService;
use std::path::PathBuf;
use std::sync::Arc;
use vidlist_storage::Storage;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub playlists: Arc<PlaylistService>,
    /// Static web UI, served for non-API paths
    pub web_dir: Option<PathBuf>,
}

impl AppState {
    pub fn new(storage: Storage, web_dir: Option<PathBuf>) -> Self {
        Self {
            playlists: Arc::new(PlaylistService::new(storage)),
            web_dir,
        }
    }
}
