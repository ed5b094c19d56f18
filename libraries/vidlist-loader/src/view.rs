//! Gallery view-model.
//!
//! `PlaylistView` is the authoritative ordered list of rendered entries.
//! Reordering the gallery goes through it, so saving always uses the
//! order the user sees.

use crate::video::VideoRef;

/// Navigation arrows appear once the strip holds more than one page.
pub const NAV_PAGE_SIZE: usize = 5;

/// One rendered gallery thumbnail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryEntry {
    pub video: VideoRef,
    /// URL exactly as the user supplied it
    pub url: String,
    pub title: String,
    pub thumbnail_url: String,
}

/// Player panel contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PlayerPanel {
    /// "Select a video to play"
    #[default]
    Placeholder,
    Playing {
        embed_url: String,
        title: String,
    },
}

/// Ordered gallery plus the current selection.
#[derive(Debug, Clone, Default)]
pub struct PlaylistView {
    entries: Vec<GalleryEntry>,
    selected: Option<usize>,
}

impl PlaylistView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.selected = None;
    }

    pub fn push(&mut self, entry: GalleryEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[GalleryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Source URLs in display order.
    pub fn urls(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.url.clone()).collect()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected(&self) -> Option<&GalleryEntry> {
        self.selected.and_then(|i| self.entries.get(i))
    }

    /// Mark an entry active. Out-of-range indices leave the selection alone.
    pub fn select(&mut self, index: usize) -> Option<&GalleryEntry> {
        if index < self.entries.len() {
            self.selected = Some(index);
        }
        self.entries.get(index)
    }

    pub fn next(&mut self) -> Option<&GalleryEntry> {
        match self.selected {
            Some(i) if i + 1 < self.entries.len() => self.select(i + 1),
            None if !self.entries.is_empty() => self.select(0),
            _ => None,
        }
    }

    pub fn previous(&mut self) -> Option<&GalleryEntry> {
        match self.selected {
            Some(i) if i > 0 => self.select(i - 1),
            _ => None,
        }
    }

    /// Drag one entry from `from` to `to`. The active entry stays active.
    pub fn move_entry(&mut self, from: usize, to: usize) -> bool {
        let len = self.entries.len();
        if from >= len || to >= len {
            return false;
        }
        if from == to {
            return true;
        }

        let active = self.selected.map(|i| self.entries[i].video.id.clone());
        let entry = self.entries.remove(from);
        self.entries.insert(to, entry);
        self.reselect(active);
        true
    }

    /// Reorder to match the video ids in their new visual order.
    ///
    /// `ids` must be a permutation of the current entries; anything else
    /// is rejected and the order is left untouched.
    pub fn apply_order(&mut self, ids: &[String]) -> bool {
        if ids.len() != self.entries.len() {
            return false;
        }

        let active = self.selected.map(|i| self.entries[i].video.id.clone());
        let mut remaining = self.entries.clone();
        let mut reordered = Vec::with_capacity(ids.len());
        for id in ids {
            match remaining.iter().position(|e| &e.video.id == id) {
                Some(pos) => reordered.push(remaining.remove(pos)),
                None => return false,
            }
        }

        self.entries = reordered;
        self.reselect(active);
        true
    }

    fn reselect(&mut self, active: Option<String>) {
        self.selected =
            active.and_then(|id| self.entries.iter().position(|e| e.video.id == id));
    }

    /// Whether the paging arrows are shown.
    pub fn nav_visible(&self) -> bool {
        self.entries.len() > NAV_PAGE_SIZE
    }

    /// Footer counter, e.g. `"2 / 7"`; empty when nothing is loaded.
    pub fn position_label(&self) -> String {
        if self.entries.is_empty() {
            return String::new();
        }
        let active = self.selected.map_or(0, |i| i + 1);
        format!("{} / {}", active, self.entries.len())
    }
}
