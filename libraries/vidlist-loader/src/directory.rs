//! Saved-playlist listing shown on the builder page.

use crate::deeplink::share_url;
use vidlist_core::types::{PlaylistId, PlaylistSummary};

pub const EMPTY_DIRECTORY_MESSAGE: &str =
    "No playlists created yet. Create your first playlist above!";

/// One row of the playlist listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub id: PlaylistId,
    pub name: String,
    pub video_count: usize,
    /// Viewer-mode link for this playlist
    pub link: String,
}

impl DirectoryEntry {
    /// `"1 video"` / `"3 videos"`
    pub fn video_label(&self) -> String {
        if self.video_count == 1 {
            "1 video".to_string()
        } else {
            format!("{} videos", self.video_count)
        }
    }
}

/// Build the listing, sorted by name (case-insensitive).
pub fn build_directory(origin: &str, playlists: Vec<PlaylistSummary>) -> Vec<DirectoryEntry> {
    let mut entries: Vec<DirectoryEntry> = playlists
        .into_iter()
        .map(|p| DirectoryEntry {
            link: share_url(origin, &p.id),
            video_count: p.urls.len(),
            id: p.id,
            name: p.name,
        })
        .collect();

    entries.sort_by(|a, b| {
        a.name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.name.cmp(&b.name))
    });
    entries
}
