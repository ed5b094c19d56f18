//! Error types for the Vidlist client side.

use thiserror::Error;

/// Errors that can occur while loading or sharing a playlist.
#[derive(Error, Debug)]
pub enum LoaderError {
    /// Video URL not recognized
    #[error("Unrecognized video URL: {0}")]
    Parse(String),

    /// oEmbed lookup for one video failed
    #[error("Metadata fetch failed for {url}: {message}")]
    MetadataFetch { url: String, message: String },

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned an error response
    #[error("Server error ({status}): {message}")]
    ServerError { status: u16, message: String },

    /// Invalid base URL
    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),

    /// Shared link carries neither a video list nor a playlist id
    #[error("Invalid playlist URL")]
    InvalidShareLink,

    /// Nothing to load
    #[error("Please enter at least one video URL")]
    EmptyInput,
}

/// Result type for loader operations.
pub type Result<T> = std::result::Result<T, LoaderError>;
