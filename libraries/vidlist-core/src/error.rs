/// Core error types for Vidlist
use thiserror::Error;

/// Result type alias using `VidlistError`
pub type Result<T> = std::result::Result<T, VidlistError>;

/// Core error type for Vidlist
#[derive(Error, Debug)]
pub enum VidlistError {
    /// Rejected create input (blank name, empty url list)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Kind of entity, e.g. `Playlist`
        entity: String,
        /// Identifier that was looked up
        id: String,
    },

    /// Storage or transport failure
    #[error("Backend error: {0}")]
    Backend(String),
}

impl VidlistError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Create a backend error
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }
}
