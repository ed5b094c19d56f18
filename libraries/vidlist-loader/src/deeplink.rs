//! Page modes and shareable links.

use crate::error::{LoaderError, Result};
use url::Url;
use vidlist_core::types::PlaylistId;

/// Query parameter carrying a saved playlist's identifier.
pub const PLAYLIST_PARAM: &str = "playlistId";
/// Query parameter carrying an ad-hoc `;`-joined video list.
pub const VIDEOS_PARAM: &str = "videos";

/// Whether the page composes a playlist or shows a shared one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageMode {
    /// Editable: source list, reordering, duplicate notices
    Builder,
    /// Read-only view of a saved playlist
    Viewer(PlaylistId),
}

impl PageMode {
    /// Mode for the page at `page_url`.
    pub fn from_page_url(page_url: &str) -> Self {
        Url::parse(page_url)
            .ok()
            .and_then(|url| query_value(&url, PLAYLIST_PARAM))
            .map_or(PageMode::Builder, |id| PageMode::Viewer(PlaylistId::new(id)))
    }

    pub fn is_builder(&self) -> bool {
        matches!(self, PageMode::Builder)
    }
}

/// What a pasted share link points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareLink {
    /// Unsaved list of video URLs
    Videos(Vec<String>),
    /// Saved playlist
    Playlist(PlaylistId),
}

fn query_value(url: &Url, key: &str) -> Option<String> {
    url.query_pairs()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}

/// Resolve a pasted link into a video list or a playlist id.
///
/// A `videos` parameter wins over `playlistId`.
pub fn parse_share_link(input: &str) -> Result<ShareLink> {
    let url = Url::parse(input.trim()).map_err(|_| LoaderError::InvalidShareLink)?;

    if let Some(videos) = query_value(&url, VIDEOS_PARAM) {
        let urls = videos
            .split(';')
            .map(|piece| {
                urlencoding::decode(piece)
                    .map(|s| s.trim().to_string())
                    .map_err(|_| LoaderError::InvalidShareLink)
            })
            .filter(|res| res.as_ref().map_or(true, |s| !s.is_empty()))
            .collect::<Result<Vec<_>>>()?;
        return Ok(ShareLink::Videos(urls));
    }

    if let Some(id) = query_value(&url, PLAYLIST_PARAM) {
        return Ok(ShareLink::Playlist(PlaylistId::new(id)));
    }

    Err(LoaderError::InvalidShareLink)
}

/// Link that opens a saved playlist in viewer mode.
pub fn share_url(origin: &str, id: &PlaylistId) -> String {
    format!(
        "{}/?{}={}",
        origin.trim_end_matches('/'),
        PLAYLIST_PARAM,
        urlencoding::encode(id.as_str())
    )
}

/// Link that loads an unsaved video list.
pub fn videos_url(origin: &str, urls: &[String]) -> String {
    let joined = urls
        .iter()
        .map(|u| urlencoding::encode(u).into_owned())
        .collect::<Vec<_>>()
        .join(";");
    format!(
        "{}/?{}={}",
        origin.trim_end_matches('/'),
        VIDEOS_PARAM,
        urlencoding::encode(&joined)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn playlist_param_selects_viewer_mode() {
        assert_eq!(
            PageMode::from_page_url("https://vidlist.app/?playlistId=my-trip"),
            PageMode::Viewer(PlaylistId::new("my-trip"))
        );
        assert_eq!(
            PageMode::from_page_url("https://vidlist.app/"),
            PageMode::Builder
        );
        assert_eq!(PageMode::from_page_url("garbage"), PageMode::Builder);
    }

    #[test]
    fn videos_link_is_split_and_decoded() {
        let link = parse_share_link(
            "https://vidlist.app/?videos=https%3A%2F%2Fvimeo.com%2F1;https%3A%2F%2Fvimeo.com%2F2",
        )
        .unwrap();
        assert_eq!(
            link,
            ShareLink::Videos(vec![
                "https://vimeo.com/1".to_string(),
                "https://vimeo.com/2".to_string()
            ])
        );
    }

    #[test]
    fn videos_url_round_trips() {
        let urls = vec![
            "https://vimeo.com/1?h=ab".to_string(),
            "https://vimeo.com/2/ffee".to_string(),
        ];
        let link = videos_url("https://vidlist.app/", &urls);
        assert_eq!(parse_share_link(&link).unwrap(), ShareLink::Videos(urls));
    }

    #[test]
    fn playlist_link() {
        assert_eq!(
            parse_share_link("https://vidlist.app/?playlistId=my-trip").unwrap(),
            ShareLink::Playlist(PlaylistId::new("my-trip"))
        );
    }

    #[test]
    fn link_without_known_params_is_invalid() {
        assert!(matches!(
            parse_share_link("https://vidlist.app/?foo=bar"),
            Err(LoaderError::InvalidShareLink)
        ));
        assert!(matches!(
            parse_share_link("not a link"),
            Err(LoaderError::InvalidShareLink)
        ));
    }

    #[test]
    fn share_url_format() {
        assert_eq!(
            share_url("https://vidlist.app/", &PlaylistId::new("my-trip")),
            "https://vidlist.app/?playlistId=my-trip"
        );
    }
}
