use serde::{Deserialize, Serialize};
use std::fmt;

/// Which storage backend is serving playlists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StorageBackend {
    /// Remote Supabase table
    #[serde(rename = "supabase")]
    Supabase,
    /// Process-local map, lost on restart
    #[serde(rename = "in-memory")]
    InMemory,
}

impl StorageBackend {
    /// Name reported by the health endpoint
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageBackend::Supabase => "supabase",
            StorageBackend::InMemory => "in-memory",
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
