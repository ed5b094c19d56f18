//! Vidlist Storage
//!
//! Playlist storage backends and the adapter the server talks to.
//!
//! # Architecture
//!
//! - **`SupabaseStore`**: PostgREST requests against a remote `playlists` table
//! - **`MemoryStore`**: process-local map, used when no remote credentials are set
//! - **`Storage`**: adapter over either backend. Read failures are logged and
//!   degrade to empty results; insert failures propagate.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use vidlist_storage::Storage;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Falls back to the in-memory map when either value is missing
//! let storage = Storage::open(
//!     std::env::var("SUPABASE_URL").ok().as_deref(),
//!     std::env::var("SUPABASE_ANON_KEY").ok().as_deref(),
//!     Some(Duration::from_secs(30)),
//! )?;
//!
//! let playlists = storage.list_all().await;
//! println!("{} playlists ({})", playlists.len(), storage.backend());
//! # Ok(())
//! # }
//! ```

mod adapter;
mod error;
mod memory;
mod supabase;

pub use adapter::Storage;
pub use error::{Result, StorageError};
pub use memory::MemoryStore;
pub use supabase::{PlaylistRecord, SupabaseStore};
