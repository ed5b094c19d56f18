//! Vidlist Server Library
//!
//! HTTP API for creating and sharing named playlists of video URLs, backed
//! by Supabase or an in-memory store.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod services;
pub mod state;

// Re-export commonly used types for convenience
pub use api::router;
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use services::PlaylistService;
pub use state::AppState;
