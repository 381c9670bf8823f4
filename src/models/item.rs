use serde::{Deserialize, Serialize};

use super::endpoint::WatchEndpoint;

/// Reference to an artist as it appears inside another item's subtitle.
///
/// `id` is absent for credit-only names such as "Various Artists".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistRef {
    pub name: String,
    pub id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumRef {
    pub name: String,
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PodcastRef {
    pub name: String,
    pub id: Option<String>,
}

/// `musicVideoType` of a watch endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MusicVideoType {
    /// Audio track ("Art Track").
    Atv,
    /// Official music video.
    Omv,
    /// User generated content.
    Ugc,
    Shorts,
    PodcastEpisode,
    Other,
}

impl MusicVideoType {
    pub fn from_upstream(s: &str) -> Self {
        match s {
            "MUSIC_VIDEO_TYPE_ATV" => Self::Atv,
            "MUSIC_VIDEO_TYPE_OMV" | "MUSIC_VIDEO_TYPE_OFFICIAL_SOURCE_MUSIC" => Self::Omv,
            "MUSIC_VIDEO_TYPE_UGC" => Self::Ugc,
            "MUSIC_VIDEO_TYPE_SHORTS" => Self::Shorts,
            "MUSIC_VIDEO_TYPE_PODCAST_EPISODE" => Self::PodcastEpisode,
            _ => Self::Other,
        }
    }

    pub fn is_video(&self) -> bool {
        !matches!(self, Self::Atv | Self::PodcastEpisode)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SongItem {
    pub id: String,
    pub title: String,
    pub thumbnail: Option<String>,
    pub artists: Vec<ArtistRef>,
    pub album: Option<AlbumRef>,
    /// Seconds.
    pub duration: Option<u32>,
    pub explicit: bool,
    pub video_type: Option<MusicVideoType>,
    pub endpoint: Option<WatchEndpoint>,
    /// Identifies this entry within an editable playlist.
    pub set_video_id: Option<String>,
    pub library_add_token: Option<String>,
    pub library_remove_token: Option<String>,
}

impl SongItem {
    pub fn is_video(&self) -> bool {
        self.video_type.map(|t| t.is_video()).unwrap_or(false)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumItem {
    /// `MPREb_...` browse id.
    pub id: String,
    pub title: String,
    pub thumbnail: Option<String>,
    /// `OLAK5uy_...` playlist backing the album, when known.
    pub playlist_id: Option<String>,
    pub artists: Vec<ArtistRef>,
    pub year: Option<u16>,
    pub explicit: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistItem {
    pub id: String,
    pub title: String,
    pub thumbnail: Option<String>,
    pub subscribers: Option<String>,
    pub shuffle_endpoint: Option<WatchEndpoint>,
    pub radio_endpoint: Option<WatchEndpoint>,
    /// A plain user channel rather than an artist page.
    pub is_channel: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItem {
    /// Playlist id without the `VL` browse prefix.
    pub id: String,
    pub title: String,
    pub thumbnail: Option<String>,
    pub author: Option<ArtistRef>,
    pub song_count_text: Option<String>,
    pub play_endpoint: Option<WatchEndpoint>,
    pub shuffle_endpoint: Option<WatchEndpoint>,
    pub radio_endpoint: Option<WatchEndpoint>,
    pub is_editable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PodcastItem {
    /// `MPSP...` browse id.
    pub id: String,
    pub title: String,
    pub thumbnail: Option<String>,
    pub author: Option<ArtistRef>,
    pub library_add_token: Option<String>,
    pub library_remove_token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EpisodeItem {
    pub id: String,
    pub title: String,
    pub thumbnail: Option<String>,
    pub podcast: Option<PodcastRef>,
    pub published: Option<String>,
    /// Seconds.
    pub duration: Option<u32>,
    pub endpoint: Option<WatchEndpoint>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ItemKind {
    Song,
    Album,
    Artist,
    Playlist,
    Podcast,
    Episode,
}

/// Identity of an item. Ids are only unique within one kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemKey {
    pub kind: ItemKind,
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Item {
    Song(SongItem),
    Album(AlbumItem),
    Artist(ArtistItem),
    Playlist(PlaylistItem),
    Podcast(PodcastItem),
    Episode(EpisodeItem),
}

impl Item {
    pub fn kind(&self) -> ItemKind {
        match self {
            Self::Song(_) => ItemKind::Song,
            Self::Album(_) => ItemKind::Album,
            Self::Artist(_) => ItemKind::Artist,
            Self::Playlist(_) => ItemKind::Playlist,
            Self::Podcast(_) => ItemKind::Podcast,
            Self::Episode(_) => ItemKind::Episode,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Self::Song(i) => &i.id,
            Self::Album(i) => &i.id,
            Self::Artist(i) => &i.id,
            Self::Playlist(i) => &i.id,
            Self::Podcast(i) => &i.id,
            Self::Episode(i) => &i.id,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Self::Song(i) => &i.title,
            Self::Album(i) => &i.title,
            Self::Artist(i) => &i.title,
            Self::Playlist(i) => &i.title,
            Self::Podcast(i) => &i.title,
            Self::Episode(i) => &i.title,
        }
    }

    pub fn thumbnail(&self) -> Option<&str> {
        match self {
            Self::Song(i) => i.thumbnail.as_deref(),
            Self::Album(i) => i.thumbnail.as_deref(),
            Self::Artist(i) => i.thumbnail.as_deref(),
            Self::Playlist(i) => i.thumbnail.as_deref(),
            Self::Podcast(i) => i.thumbnail.as_deref(),
            Self::Episode(i) => i.thumbnail.as_deref(),
        }
    }

    pub fn key(&self) -> ItemKey {
        ItemKey {
            kind: self.kind(),
            id: self.id().to_string(),
        }
    }

    pub fn is_explicit(&self) -> bool {
        match self {
            Self::Song(i) => i.explicit,
            Self::Album(i) => i.explicit,
            _ => false,
        }
    }

    pub fn as_song(&self) -> Option<&SongItem> {
        match self {
            Self::Song(s) => Some(s),
            _ => None,
        }
    }

    pub fn into_song(self) -> Option<SongItem> {
        match self {
            Self::Song(s) => Some(s),
            _ => None,
        }
    }

    pub fn into_album(self) -> Option<AlbumItem> {
        match self {
            Self::Album(a) => Some(a),
            _ => None,
        }
    }

    pub fn into_artist(self) -> Option<ArtistItem> {
        match self {
            Self::Artist(a) => Some(a),
            _ => None,
        }
    }

    pub fn into_playlist(self) -> Option<PlaylistItem> {
        match self {
            Self::Playlist(p) => Some(p),
            _ => None,
        }
    }

    pub fn into_podcast(self) -> Option<PodcastItem> {
        match self {
            Self::Podcast(p) => Some(p),
            _ => None,
        }
    }

    pub fn into_episode(self) -> Option<EpisodeItem> {
        match self {
            Self::Episode(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SongItem> for Item {
    fn from(i: SongItem) -> Self {
        Self::Song(i)
    }
}

impl From<AlbumItem> for Item {
    fn from(i: AlbumItem) -> Self {
        Self::Album(i)
    }
}

impl From<ArtistItem> for Item {
    fn from(i: ArtistItem) -> Self {
        Self::Artist(i)
    }
}

impl From<PlaylistItem> for Item {
    fn from(i: PlaylistItem) -> Self {
        Self::Playlist(i)
    }
}

impl From<PodcastItem> for Item {
    fn from(i: PodcastItem) -> Self {
        Self::Podcast(i)
    }
}

impl From<EpisodeItem> for Item {
    fn from(i: EpisodeItem) -> Self {
        Self::Episode(i)
    }
}

#[cfg(test)]
impl SongItem {
    pub(crate) fn fixture(id: &str, title: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            thumbnail: Some(format!("https://lh3.googleusercontent.com/{}", id)),
            artists: vec![ArtistRef {
                name: "Artist".to_string(),
                id: Some("UCartist".to_string()),
            }],
            album: None,
            duration: Some(200),
            explicit: false,
            video_type: Some(MusicVideoType::Atv),
            endpoint: Some(WatchEndpoint::video(id)),
            set_video_id: None,
            library_add_token: None,
            library_remove_token: None,
        }
    }
}

#[cfg(test)]
impl PlaylistItem {
    pub(crate) fn fixture(id: &str, title: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            thumbnail: Some(format!("https://i.ytimg.com/vi/{}/hq.jpg", id)),
            author: None,
            song_count_text: None,
            play_endpoint: None,
            shuffle_endpoint: None,
            radio_endpoint: None,
            is_editable: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_key_distinguishes_kinds_with_equal_ids() {
        let song = Item::Song(SongItem::fixture("abc", "Song"));
        let playlist = Item::Playlist(PlaylistItem::fixture("abc", "Playlist"));
        assert_eq!(song.id(), playlist.id());
        assert_ne!(song.key(), playlist.key());
    }

    #[test]
    fn test_video_type_classification() {
        assert!(!MusicVideoType::from_upstream("MUSIC_VIDEO_TYPE_ATV").is_video());
        assert!(MusicVideoType::from_upstream("MUSIC_VIDEO_TYPE_OMV").is_video());
        assert!(MusicVideoType::from_upstream("MUSIC_VIDEO_TYPE_UGC").is_video());
        assert_eq!(
            MusicVideoType::from_upstream("MUSIC_VIDEO_TYPE_SOMETHING_NEW"),
            MusicVideoType::Other
        );
    }

    #[test]
    fn test_item_serializes_with_type_tag() {
        let item = Item::Song(SongItem::fixture("abc", "Song"));
        let json = serde_json::to_value(&item).expect("serializable");
        assert_eq!(json["type"], "song");
        assert_eq!(json["id"], "abc");
    }
}
