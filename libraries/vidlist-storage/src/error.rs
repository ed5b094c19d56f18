/// Storage-specific errors
use thiserror::Error;

/// Result type alias using `StorageError`
pub type Result<T> = std::result::Result<T, StorageError>;

/// Storage error types
#[derive(Error, Debug)]
pub enum StorageError {
    /// HTTP request to the remote table failed
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Remote table answered with a non-success status
    #[error("Supabase error ({status}): {message}")]
    Remote { status: u16, message: String },

    /// Response body could not be decoded
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Insert succeeded but no row came back
    #[error("Remote table returned no rows")]
    EmptyResponse,

    /// Identifier already taken
    #[error("Playlist already exists: {0}")]
    Conflict(String),

    /// Remote backend settings are unusable
    #[error("Invalid storage configuration: {0}")]
    InvalidConfig(String),
}

impl From<StorageError> for vidlist_core::VidlistError {
    fn from(err: StorageError) -> Self {
        vidlist_core::VidlistError::backend(err.to_string())
    }
}
