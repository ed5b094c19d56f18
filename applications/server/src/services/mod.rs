/// Server services
pub mod playlists;
pub mod slug;

pub use playlists::PlaylistService;
