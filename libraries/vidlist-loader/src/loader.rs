//! Playlist loading.
//!
//! A load walks the URLs in order: parse, drop duplicate video ids, fetch
//! metadata, append to the gallery. Per-item failures are skipped; the
//! batch always completes. In builder mode the source list is rewritten
//! with the de-duplicated URLs and a duplicate notice is produced.

use crate::deeplink::PageMode;
use crate::error::{LoaderError, Result};
use crate::oembed::MetadataFetcher;
use crate::ready::{ready_signal, LoadingIndicator, ReadyNotifier, ReadyOutcome, ReadyWaiter};
use crate::video::parse_video_url;
use crate::view::{GalleryEntry, PlayerPanel, PlaylistView};
use std::collections::HashSet;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Lifecycle of a single load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading,
    /// At least one entry rendered
    Populated,
    /// Batch finished with nothing to show
    Empty,
}

/// Playback that was just started; the player fires `notifier` once loaded.
#[derive(Debug)]
pub struct PendingPlayback {
    pub notifier: ReadyNotifier,
    pub waiter: ReadyWaiter,
}

/// Outcome of one load.
#[derive(Debug)]
pub struct LoadReport {
    /// Entries added to the gallery
    pub rendered: usize,
    /// URLs dropped because their video id was already seen
    pub duplicates: usize,
    /// URLs that could not be parsed
    pub unparseable: usize,
    /// URLs whose metadata fetch failed
    pub failed: usize,
    /// Message for the user, builder mode only
    pub notice: Option<String>,
    /// Set when the first entry was auto-played
    pub playback: Option<PendingPlayback>,
}

/// `"1 duplicate video was removed"` / `"3 duplicate videos were removed"`
pub fn duplicate_notice(count: usize) -> Option<String> {
    match count {
        0 => None,
        1 => Some("1 duplicate video was removed".to_string()),
        n => Some(format!("{} duplicate videos were removed", n)),
    }
}

/// Split the editable source text into URLs, dropping blank lines.
pub fn parse_source_text(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

/// Owns the gallery view-model, the player panel and the source list.
pub struct PlaylistLoader<F> {
    fetcher: F,
    mode: PageMode,
    state: LoadState,
    view: PlaylistView,
    player: PlayerPanel,
    indicator: LoadingIndicator,
    /// Editable source list (builder mode)
    source: Vec<String>,
    playback_cancel: Option<CancellationToken>,
}

impl<F: MetadataFetcher> PlaylistLoader<F> {
    pub fn new(fetcher: F, mode: PageMode) -> Self {
        Self {
            fetcher,
            mode,
            state: LoadState::Idle,
            view: PlaylistView::new(),
            player: PlayerPanel::Placeholder,
            indicator: LoadingIndicator::default(),
            source: Vec::new(),
            playback_cancel: None,
        }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    pub fn mode(&self) -> &PageMode {
        &self.mode
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn view(&self) -> &PlaylistView {
        &self.view
    }

    pub fn player(&self) -> &PlayerPanel {
        &self.player
    }

    pub fn indicator(&self) -> &LoadingIndicator {
        &self.indicator
    }

    pub fn source_urls(&self) -> &[String] {
        &self.source
    }

    /// Source list as newline-separated text.
    pub fn source_text(&self) -> String {
        self.source.join("\n")
    }

    pub fn set_source_text(&mut self, text: &str) {
        self.source = parse_source_text(text);
    }

    pub fn set_source_urls(&mut self, urls: Vec<String>) {
        self.source = urls;
    }

    /// Load whatever is in the source list.
    pub async fn load_source(&mut self) -> Result<LoadReport> {
        if self.source.is_empty() {
            return Err(LoaderError::EmptyInput);
        }
        let urls = self.source.clone();
        self.indicator.show("Loading videos...");
        Ok(self.load(&urls).await)
    }

    /// Run one load over `urls`, replacing the current gallery.
    pub async fn load<S: AsRef<str>>(&mut self, urls: &[S]) -> LoadReport {
        self.state = LoadState::Loading;
        self.view.clear();
        self.player = PlayerPanel::Placeholder;
        self.cancel_playback();

        let mut seen: HashSet<String> = HashSet::new();
        let mut survivors: Vec<String> = Vec::new();
        let mut duplicates = 0;
        let mut unparseable = 0;
        let mut failed = 0;

        for url in urls {
            let url = url.as_ref();

            let video = match parse_video_url(url) {
                Ok(video) => video,
                Err(e) => {
                    debug!(error = %e, "Skipping unrecognized URL");
                    unparseable += 1;
                    continue;
                }
            };

            if !seen.insert(video.id.clone()) {
                duplicates += 1;
                continue;
            }
            survivors.push(url.to_string());

            match self.fetcher.fetch(url).await {
                Ok(meta) => self.view.push(GalleryEntry {
                    video,
                    url: url.to_string(),
                    title: meta.title,
                    thumbnail_url: meta.thumbnail_url,
                }),
                Err(e) => {
                    warn!(url = %url, error = %e, "Error loading video");
                    failed += 1;
                }
            }
        }

        if self.mode.is_builder() {
            self.source = survivors;
        }

        let playback = if self.view.is_empty() {
            self.state = LoadState::Empty;
            self.indicator.hide();
            None
        } else {
            self.state = LoadState::Populated;
            self.play(0)
        };

        LoadReport {
            rendered: self.view.len(),
            duplicates,
            unparseable,
            failed,
            notice: if self.mode.is_builder() {
                duplicate_notice(duplicates)
            } else {
                None
            },
            playback,
        }
    }

    /// Make entry `index` active and start it in the player.
    ///
    /// Any earlier readiness wait is cancelled.
    pub fn play(&mut self, index: usize) -> Option<PendingPlayback> {
        let entry = self.view.select(index)?;
        let player = PlayerPanel::Playing {
            embed_url: entry.video.embed_url(),
            title: entry.title.clone(),
        };

        self.cancel_playback();
        self.player = player;
        self.indicator.show("Loading video...");

        let (notifier, waiter) = ready_signal();
        self.playback_cancel = Some(waiter.cancel_token());
        Some(PendingPlayback { notifier, waiter })
    }

    /// Wait for the player, then dismiss the loading indicator.
    ///
    /// A cancelled wait leaves the indicator to the newer playback.
    pub async fn await_ready(&mut self, waiter: ReadyWaiter, timeout: Duration) -> ReadyOutcome {
        let outcome = waiter.wait(timeout).await;
        if outcome != ReadyOutcome::Cancelled {
            self.indicator.hide();
            self.playback_cancel = None;
        }
        outcome
    }

    fn cancel_playback(&mut self) {
        if let Some(token) = self.playback_cancel.take() {
            token.cancel();
        }
    }

    /// Drag-and-drop: move one entry. Builder mode only.
    pub fn move_entry(&mut self, from: usize, to: usize) -> bool {
        if !self.mode.is_builder() || !self.view.move_entry(from, to) {
            return false;
        }
        self.source = self.view.urls();
        true
    }

    /// Drag-and-drop: adopt the gallery's new visual order. Builder mode only.
    pub fn apply_order(&mut self, video_ids: &[String]) -> bool {
        if !self.mode.is_builder() || !self.view.apply_order(video_ids) {
            return false;
        }
        self.source = self.view.urls();
        true
    }

    /// URLs to save: gallery order when loaded, else the source list.
    pub fn urls_for_save(&self) -> Vec<String> {
        if self.view.is_empty() {
            self.source.clone()
        } else {
            self.view.urls()
        }
    }
}
