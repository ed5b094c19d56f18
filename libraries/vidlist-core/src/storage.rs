//! Storage trait for playlist backends

use crate::error::Result;
use crate::types::{Playlist, PlaylistId, StorageBackend};
use async_trait::async_trait;

/// Backend holding the playlist table
///
/// This trait abstracts storage operations so the server can run against
/// either the remote Supabase table or the process-local map. Every method
/// is fallible; callers decide whether a failure degrades or propagates.
#[async_trait]
pub trait PlaylistStore: Send + Sync {
    /// Which backend this is
    fn backend(&self) -> StorageBackend;

    /// Get all playlists, newest first
    async fn list_all(&self) -> Result<Vec<Playlist>>;

    /// Get playlist by identifier
    async fn get_by_identifier(&self, id: &PlaylistId) -> Result<Option<Playlist>>;

    /// Store a new playlist and return the stored copy
    async fn insert(&self, playlist: Playlist) -> Result<Playlist>;

    /// Check whether an identifier is already taken
    async fn identifier_exists(&self, id: &PlaylistId) -> Result<bool>;
}
