use serde::{Deserialize, Serialize};

/// What a browse id points at, judged from its prefix alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdClass {
    Artist,
    Album,
    Podcast,
    Playlist,
}

/// Browse-id prefix table used to tell artists from albums (and friends)
/// inside subtitle runs, where the run position is not stable.
///
/// The prefixes are an upstream convention, not a contract, so they are
/// configurable under `[heuristics]`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BrowseIdHeuristics {
    #[serde(default = "default_artist_prefixes")]
    pub artist_prefixes: Vec<String>,
    #[serde(default = "default_album_prefixes")]
    pub album_prefixes: Vec<String>,
    #[serde(default = "default_podcast_prefixes")]
    pub podcast_prefixes: Vec<String>,
    #[serde(default = "default_playlist_prefixes")]
    pub playlist_prefixes: Vec<String>,
}

fn default_artist_prefixes() -> Vec<String> {
    vec!["UC".to_string()]
}

fn default_album_prefixes() -> Vec<String> {
    vec!["MPREb_".to_string()]
}

fn default_podcast_prefixes() -> Vec<String> {
    vec!["MPSP".to_string()]
}

fn default_playlist_prefixes() -> Vec<String> {
    vec![
        "VL".to_string(),
        "PL".to_string(),
        "RDCLAK".to_string(),
        "OLAK5uy_".to_string(),
    ]
}

impl Default for BrowseIdHeuristics {
    fn default() -> Self {
        Self {
            artist_prefixes: default_artist_prefixes(),
            album_prefixes: default_album_prefixes(),
            podcast_prefixes: default_podcast_prefixes(),
            playlist_prefixes: default_playlist_prefixes(),
        }
    }
}

fn matches_any(id: &str, prefixes: &[String]) -> bool {
    prefixes.iter().any(|p| !p.is_empty() && id.starts_with(p.as_str()))
}

impl BrowseIdHeuristics {
    /// Podcast and album prefixes are checked before the short playlist ones,
    /// since `MPSPPL...` also contains a playlist id.
    pub fn classify(&self, browse_id: &str) -> Option<IdClass> {
        if matches_any(browse_id, &self.podcast_prefixes) {
            Some(IdClass::Podcast)
        } else if matches_any(browse_id, &self.album_prefixes) {
            Some(IdClass::Album)
        } else if matches_any(browse_id, &self.artist_prefixes) {
            Some(IdClass::Artist)
        } else if matches_any(browse_id, &self.playlist_prefixes) {
            Some(IdClass::Playlist)
        } else {
            None
        }
    }

    pub fn is_artist(&self, browse_id: &str) -> bool {
        self.classify(browse_id) == Some(IdClass::Artist)
    }

    pub fn is_album(&self, browse_id: &str) -> bool {
        self.classify(browse_id) == Some(IdClass::Album)
    }
}

/// Playlist browse ids carry a `VL` prefix the playlist id itself does not.
pub fn playlist_id_from_browse_id(browse_id: &str) -> &str {
    browse_id.strip_prefix("VL").unwrap_or(browse_id)
}
