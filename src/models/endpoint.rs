use serde::{Deserialize, Serialize};

/// Opens the player on a video, optionally within a playlist or radio queue.
///
/// Radio and shuffle endpoints of playlists carry no `video_id`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchEndpoint {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub playlist_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<String>,
}

impl WatchEndpoint {
    pub fn video(video_id: impl Into<String>) -> Self {
        Self {
            video_id: Some(video_id.into()),
            playlist_id: None,
            index: None,
            params: None,
        }
    }

    pub fn playlist(playlist_id: impl Into<String>, params: Option<String>) -> Self {
        Self {
            video_id: None,
            playlist_id: Some(playlist_id.into()),
            index: None,
            params,
        }
    }
}

/// Opens a browsable page (album, artist, playlist, feed ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowseEndpoint {
    pub browse_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<String>,
}

impl BrowseEndpoint {
    pub fn new(browse_id: impl Into<String>) -> Self {
        Self {
            browse_id: browse_id.into(),
            params: None,
        }
    }

    pub fn with_params(browse_id: impl Into<String>, params: Option<String>) -> Self {
        Self {
            browse_id: browse_id.into(),
            params,
        }
    }
}

/// Opaque navigation descriptor. Consumers only round-trip it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Endpoint {
    Watch(WatchEndpoint),
    Browse(BrowseEndpoint),
}

impl From<WatchEndpoint> for Endpoint {
    fn from(e: WatchEndpoint) -> Self {
        Self::Watch(e)
    }
}

impl From<BrowseEndpoint> for Endpoint {
    fn from(e: BrowseEndpoint) -> Self {
        Self::Browse(e)
    }
}
