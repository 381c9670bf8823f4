use crate::{
    models::MusicVideoType,
    renderer::NavigationEndpoint,
};

use super::heuristics::{BrowseIdHeuristics, IdClass};

pub const PAGE_TYPE_ALBUM: &str = "MUSIC_PAGE_TYPE_ALBUM";
pub const PAGE_TYPE_AUDIOBOOK: &str = "MUSIC_PAGE_TYPE_AUDIOBOOK";
pub const PAGE_TYPE_PLAYLIST: &str = "MUSIC_PAGE_TYPE_PLAYLIST";
pub const PAGE_TYPE_ARTIST: &str = "MUSIC_PAGE_TYPE_ARTIST";
pub const PAGE_TYPE_LIBRARY_ARTIST: &str = "MUSIC_PAGE_TYPE_LIBRARY_ARTIST";
pub const PAGE_TYPE_USER_CHANNEL: &str = "MUSIC_PAGE_TYPE_USER_CHANNEL";
pub const PAGE_TYPE_PODCAST: &str = "MUSIC_PAGE_TYPE_PODCAST_SHOW_DETAIL_PAGE";
pub const PAGE_TYPE_EPISODE: &str = "MUSIC_PAGE_TYPE_NON_MUSIC_AUDIO_TRACK_PAGE";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Song,
    Album,
    Playlist,
    Artist,
    Channel,
    Podcast,
    Episode,
}

impl NodeKind {
    /// Order in which capability tags are tested. The first present tag wins.
    pub const PRIORITY: [NodeKind; 7] = [
        NodeKind::Song,
        NodeKind::Album,
        NodeKind::Playlist,
        NodeKind::Artist,
        NodeKind::Channel,
        NodeKind::Podcast,
        NodeKind::Episode,
    ];
}

/// Capability tags of one renderer node, computed once from its endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Capabilities {
    pub song: bool,
    pub album: bool,
    pub playlist: bool,
    pub artist: bool,
    pub channel: bool,
    pub podcast: bool,
    pub episode: bool,
}

impl Capabilities {
    /// Tags implied by a node's navigation endpoint.
    ///
    /// A watch endpoint marks a song unless its video type says podcast
    /// episode. Browse endpoints use the page type, then the browse-id prefix.
    pub fn of(endpoint: Option<&NavigationEndpoint>, heuristics: &BrowseIdHeuristics) -> Self {
        let mut caps = Self::default();
        let Some(endpoint) = endpoint else {
            return caps;
        };

        if let Some(watch) = endpoint.watch_endpoint.as_ref() {
            if watch.video_id.is_some() {
                if watch.music_video_type() == Some(MusicVideoType::PodcastEpisode) {
                    caps.episode = true;
                } else {
                    caps.song = true;
                }
            }
        }

        match endpoint.page_type() {
            Some(PAGE_TYPE_ALBUM) | Some(PAGE_TYPE_AUDIOBOOK) => caps.album = true,
            Some(PAGE_TYPE_PLAYLIST) => caps.playlist = true,
            Some(PAGE_TYPE_ARTIST) | Some(PAGE_TYPE_LIBRARY_ARTIST) => caps.artist = true,
            Some(PAGE_TYPE_USER_CHANNEL) => caps.channel = true,
            Some(PAGE_TYPE_PODCAST) => caps.podcast = true,
            Some(PAGE_TYPE_EPISODE) => caps.episode = true,
            Some(_) => {}
            None => {
                if let Some(id) = endpoint.browse_id() {
                    match heuristics.classify(id) {
                        Some(IdClass::Album) => caps.album = true,
                        Some(IdClass::Playlist) => caps.playlist = true,
                        Some(IdClass::Artist) => caps.artist = true,
                        Some(IdClass::Podcast) => caps.podcast = true,
                        None => {}
                    }
                }
            }
        }

        caps
    }

    pub fn with_song(mut self) -> Self {
        self.song = true;
        self
    }

    pub fn has(&self, kind: NodeKind) -> bool {
        match kind {
            NodeKind::Song => self.song,
            NodeKind::Album => self.album,
            NodeKind::Playlist => self.playlist,
            NodeKind::Artist => self.artist,
            NodeKind::Channel => self.channel,
            NodeKind::Podcast => self.podcast,
            NodeKind::Episode => self.episode,
        }
    }

    pub fn kind(&self) -> Option<NodeKind> {
        NodeKind::PRIORITY.into_iter().find(|k| self.has(*k))
    }

    pub fn is_empty(&self) -> bool {
        self.kind().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn endpoint(value: serde_json::Value) -> NavigationEndpoint {
        serde_json::from_value(value).expect("valid endpoint")
    }

    #[test]
    fn test_watch_endpoint_is_song() {
        let h = BrowseIdHeuristics::default();
        let caps = Capabilities::of(
            Some(&endpoint(json!({ "watchEndpoint": { "videoId": "v1" } }))),
            &h,
        );
        assert_eq!(caps.kind(), Some(NodeKind::Song));
    }

    #[test]
    fn test_podcast_episode_video_type_is_episode() {
        let h = BrowseIdHeuristics::default();
        let caps = Capabilities::of(
            Some(&endpoint(json!({ "watchEndpoint": {
                "videoId": "v1",
                "watchEndpointMusicSupportedConfigs": { "watchEndpointMusicConfig": {
                    "musicVideoType": "MUSIC_VIDEO_TYPE_PODCAST_EPISODE"
                } }
            } }))),
            &h,
        );
        assert!(!caps.song);
        assert_eq!(caps.kind(), Some(NodeKind::Episode));
    }

    #[test]
    fn test_page_type_beats_prefix() {
        let h = BrowseIdHeuristics::default();
        let caps = Capabilities::of(
            Some(&endpoint(json!({ "browseEndpoint": {
                "browseId": "UCchannel",
                "browseEndpointContextSupportedConfigs": { "browseEndpointContextMusicConfig": {
                    "pageType": "MUSIC_PAGE_TYPE_USER_CHANNEL"
                } }
            } }))),
            &h,
        );
        assert_eq!(caps.kind(), Some(NodeKind::Channel));
    }

    #[test]
    fn test_prefix_used_without_page_type() {
        let h = BrowseIdHeuristics::default();
        let caps = Capabilities::of(
            Some(&endpoint(json!({ "browseEndpoint": { "browseId": "MPREb_1" } }))),
            &h,
        );
        assert_eq!(caps.kind(), Some(NodeKind::Album));
        assert!(Capabilities::of(None, &h).is_empty());
    }

    #[test]
    fn test_priority_order_first_tag_wins() {
        let caps = Capabilities {
            album: true,
            artist: true,
            ..Default::default()
        };
        assert_eq!(caps.kind(), Some(NodeKind::Album));
        assert_eq!(caps.with_song().kind(), Some(NodeKind::Song));
    }
}
