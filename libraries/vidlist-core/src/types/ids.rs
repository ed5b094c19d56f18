/// ID types for Vidlist entities
use serde::{Deserialize, Serialize};
use std::fmt;

/// Playlist identifier (the URL-safe slug)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlaylistId(String);

impl PlaylistId {
    /// Create a new playlist ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the ID and return the inner string
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PlaylistId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PlaylistId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn playlist_id_from_string() {
        let id = PlaylistId::new("my-trip");
        assert_eq!(id.as_str(), "my-trip");
    }

    #[test]
    fn playlist_id_display() {
        let id = PlaylistId::new("my-trip-a1_Z");
        assert_eq!(format!("{}", id), "my-trip-a1_Z");
    }

    #[test]
    fn playlist_id_serializes_as_plain_string() {
        let id = PlaylistId::new("road-trip");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"road-trip\"");
    }
}
