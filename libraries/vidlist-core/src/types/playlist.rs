//! Playlist types

use super::ids::PlaylistId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A saved, named, ordered list of video URLs
///
/// Playlists are immutable once stored: there is no update or delete path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    /// Public identifier (slug)
    pub id: PlaylistId,
    /// Display name, trimmed
    pub name: String,
    /// Video URLs in playback order
    pub urls: Vec<String>,
    /// Insertion time; listings are newest first
    pub created_at: DateTime<Utc>,
}

impl Playlist {
    /// Create a playlist stamped with the current time
    pub fn new(id: PlaylistId, name: impl Into<String>, urls: Vec<String>) -> Self {
        Self {
            id,
            name: name.into(),
            urls,
            created_at: Utc::now(),
        }
    }
}

/// Data for creating a new playlist
///
/// Both fields are optional so that missing values reach validation instead
/// of failing deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePlaylist {
    /// Requested display name
    pub name: Option<String>,
    /// Video URLs in playback order
    pub urls: Option<Vec<String>>,
}

impl CreatePlaylist {
    /// Request with both fields present
    pub fn new(name: impl Into<String>, urls: Vec<String>) -> Self {
        Self {
            name: Some(name.into()),
            urls: Some(urls),
        }
    }
}

/// Response to a successful create
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedPlaylist {
    /// Identifier assigned to the new playlist
    pub id: PlaylistId,
}

/// Public projection of a playlist: `{id, name, urls}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistSummary {
    /// Public identifier
    pub id: PlaylistId,
    /// Display name
    pub name: String,
    /// Video URLs in playback order
    pub urls: Vec<String>,
}

impl From<Playlist> for PlaylistSummary {
    fn from(playlist: Playlist) -> Self {
        Self {
            id: playlist.id,
            name: playlist.name,
            urls: playlist.urls,
        }
    }
}
