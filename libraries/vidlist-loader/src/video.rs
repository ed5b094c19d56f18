//! Video URL parsing.

use crate::error::{LoaderError, Result};
use url::Url;

const PLAYER_BASE: &str = "https://player.vimeo.com/video";

/// A video parsed out of a share URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VideoRef {
    /// Platform video id (first path segment)
    pub id: String,
    /// Private-link access hash, if any
    pub hash: Option<String>,
}

impl VideoRef {
    /// Player URL that starts playback immediately.
    pub fn embed_url(&self) -> String {
        let mut src = format!("{}/{}?autoplay=1&badge=0", PLAYER_BASE, self.id);
        if let Some(hash) = &self.hash {
            src.push_str("&h=");
            src.push_str(hash);
        }
        src
    }
}

fn is_hex(segment: &str) -> bool {
    !segment.is_empty() && segment.chars().all(|c| c.is_ascii_hexdigit())
}

/// Parse `{id, hash}` out of a video URL.
///
/// The first path segment is the id. A hexadecimal second segment is the
/// hash, and an `h` query parameter overrides it.
pub fn parse_video_url(input: &str) -> Result<VideoRef> {
    let url = Url::parse(input.trim()).map_err(|_| LoaderError::Parse(input.to_string()))?;

    let segments: Vec<&str> = url
        .path_segments()
        .map(|s| s.filter(|seg| !seg.is_empty()).collect())
        .unwrap_or_default();

    let id = segments
        .first()
        .ok_or_else(|| LoaderError::Parse(input.to_string()))?
        .to_string();

    let mut hash = segments
        .get(1)
        .filter(|seg| is_hex(seg))
        .map(|seg| seg.to_string());

    if let Some((_, h)) = url.query_pairs().find(|(k, _)| k == "h") {
        hash = Some(h.into_owned());
    }

    Ok(VideoRef { id, hash })
}
