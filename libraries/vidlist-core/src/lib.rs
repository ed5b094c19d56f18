//! Vidlist Core
//!
//! Shared domain types, the storage trait, and error handling for Vidlist.
//!
//! This crate provides the building blocks used by the storage layer, the
//! HTTP server, and the client-side loader.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Playlist`, `PlaylistId`, `PlaylistSummary`, `CreatePlaylist`
//! - **Core Traits**: `PlaylistStore`, implemented by every storage backend
//! - **Error Handling**: Unified `VidlistError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use vidlist_core::types::{Playlist, PlaylistId, PlaylistSummary};
//!
//! let playlist = Playlist::new(
//!     PlaylistId::new("my-trip"),
//!     "My Trip!",
//!     vec!["https://vimeo.com/111".to_string()],
//! );
//!
//! let summary = PlaylistSummary::from(playlist);
//! assert_eq!(summary.id.as_str(), "my-trip");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Error types shared by every crate
pub mod error;
pub mod storage;
/// Domain types
pub mod types;

// Re-export commonly used types
pub use error::{Result, VidlistError};
pub use storage::PlaylistStore;

pub use types::{CreatePlaylist, CreatedPlaylist, Playlist, PlaylistId, PlaylistSummary, StorageBackend};
