/// Playlist service - validation, identifier derivation, persistence
use crate::services::slug::{base_identifier, with_suffix};
use tracing::info;
use vidlist_core::{
    types::{CreatePlaylist, Playlist, PlaylistId, PlaylistSummary, StorageBackend},
    Result, VidlistError,
};
use vidlist_storage::Storage;

pub const NAME_REQUIRED: &str = "name is required and must be a non-empty string";
pub const URLS_REQUIRED: &str = "urls must be a non-empty array";

pub struct PlaylistService {
    storage: Storage,
}

impl PlaylistService {
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }

    pub fn backend(&self) -> StorageBackend {
        self.storage.backend()
    }

    /// Validate, pick an identifier and store a new playlist.
    ///
    /// The name is stored trimmed. A taken slug gets one random suffix;
    /// the suffixed identifier is not re-checked.
    pub async fn create(&self, request: CreatePlaylist) -> Result<PlaylistId> {
        let (name, urls) = validate(request)?;

        let base = base_identifier(&name);
        let id = if self.storage.identifier_exists(&base).await {
            with_suffix(&base)
        } else {
            base
        };

        let stored = self.storage.insert(Playlist::new(id, name, urls)).await?;
        info!(id = %stored.id, videos = stored.urls.len(), "Playlist created");
        Ok(stored.id)
    }

    /// All playlists, newest first.
    pub async fn list(&self) -> Vec<PlaylistSummary> {
        self.storage
            .list_all()
            .await
            .into_iter()
            .map(PlaylistSummary::from)
            .collect()
    }

    pub async fn get(&self, id: &PlaylistId) -> Result<PlaylistSummary> {
        self.storage
            .get_by_identifier(id)
            .await
            .map(PlaylistSummary::from)
            .ok_or_else(|| VidlistError::not_found("Playlist", id.as_str()))
    }
}

fn validate(request: CreatePlaylist) -> Result<(String, Vec<String>)> {
    let name = request
        .name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .ok_or_else(|| VidlistError::validation(NAME_REQUIRED))?
        .to_string();

    let urls = request
        .urls
        .filter(|u| !u.is_empty())
        .ok_or_else(|| VidlistError::validation(URLS_REQUIRED))?;

    Ok((name, urls))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_name_rejected() {
        let err = validate(CreatePlaylist::new("   ", vec!["https://vimeo.com/1".into()]))
            .unwrap_err();
        assert!(matches!(err, VidlistError::Validation(ref m) if m == NAME_REQUIRED));
    }

    #[test]
    fn missing_urls_rejected() {
        let request = CreatePlaylist {
            name: Some("Trip".into()),
            urls: None,
        };
        let err = validate(request).unwrap_err();
        assert!(matches!(err, VidlistError::Validation(ref m) if m == URLS_REQUIRED));
    }

    #[test]
    fn name_is_trimmed() {
        let (name, urls) =
            validate(CreatePlaylist::new("  Trip  ", vec!["https://vimeo.com/1".into()])).unwrap();
        assert_eq!(name, "Trip");
        assert_eq!(urls.len(), 1);
    }
}
