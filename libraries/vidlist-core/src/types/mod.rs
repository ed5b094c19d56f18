mod backend;
mod ids;
mod playlist;

pub use backend::StorageBackend;
pub use ids::PlaylistId;
pub use playlist::{CreatePlaylist, CreatedPlaylist, Playlist, PlaylistSummary};
