//! Vidlist Loader
//!
//! Client-side logic for building and viewing playlists, independent of any
//! particular UI toolkit.
//!
//! # Features
//!
//! - **Loading**: parse video URLs, drop duplicates, fetch oEmbed metadata
//! - **View-model**: ordered gallery, selection, drag-and-drop reordering
//! - **Player readiness**: loading indicator dismissed on a ready signal or timeout
//! - **Deep links**: viewer mode via `?playlistId=`, ad-hoc lists via `?videos=`
//! - **Layout**: breakpoint-driven panel heights with debounced resize handling
//! - **API client**: list, fetch and save playlists on a Vidlist server
//!
//! # Example
//!
//! ```ignore
//! use vidlist_loader::{OembedClient, PageMode, PlaylistLoader};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut loader = PlaylistLoader::new(OembedClient::new()?, PageMode::Builder);
//!     loader.set_source_text("https://vimeo.com/1\nhttps://vimeo.com/1\nhttps://vimeo.com/2");
//!
//!     let report = loader.load_source().await?;
//!     println!("{} videos, {:?}", report.rendered, report.notice);
//!     Ok(())
//! }
//! ```

mod api;
mod deeplink;
mod directory;
mod error;
pub mod layout;
mod loader;
mod oembed;
mod ready;
mod video;
mod view;

pub use api::{HealthInfo, PlaylistApiClient};
pub use deeplink::{
    parse_share_link, share_url, videos_url, PageMode, ShareLink, PLAYLIST_PARAM, VIDEOS_PARAM,
};
pub use directory::{build_directory, DirectoryEntry, EMPTY_DIRECTORY_MESSAGE};
pub use error::{LoaderError, Result};
pub use loader::{
    duplicate_notice, parse_source_text, LoadReport, LoadState, PendingPlayback, PlaylistLoader,
};
pub use oembed::{MetadataFetcher, OembedClient, VideoMetadata, VIMEO_OEMBED_ENDPOINT};
pub use ready::{
    ready_signal, LoadingIndicator, ReadyNotifier, ReadyOutcome, ReadyWaiter, READY_TIMEOUT,
};
pub use video::{parse_video_url, VideoRef};
pub use view::{GalleryEntry, PlayerPanel, PlaylistView, NAV_PAGE_SIZE};
