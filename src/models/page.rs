use serde::{Deserialize, Serialize};

use super::{
    endpoint::{BrowseEndpoint, WatchEndpoint},
    item::{AlbumItem, ArtistItem, EpisodeItem, Item, PlaylistItem, PodcastItem, SongItem},
};

/// Opaque pagination cursor. Send it back unchanged to fetch the next page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Continuation(String);

impl Continuation {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

/// One page of results. `continuation == None` marks the terminal page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T = Item> {
    pub items: Vec<T>,
    pub continuation: Option<Continuation>,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, continuation: Option<Continuation>) -> Self {
        Self {
            items,
            continuation,
        }
    }

    pub fn terminal(items: Vec<T>) -> Self {
        Self::new(items, None)
    }

    pub fn is_terminal(&self) -> bool {
        self.continuation.is_none()
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self::terminal(Vec::new())
    }
}

/// A titled shelf or carousel of items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub title: String,
    /// Strapline shown above the title ("Listen again", "Similar to ...").
    pub label: Option<String>,
    pub thumbnail: Option<String>,
    /// Target of the shelf's "More" button.
    pub endpoint: Option<BrowseEndpoint>,
    pub items: Vec<Item>,
}

pub type SearchResult = Page<Item>;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchSummaryPage {
    pub summaries: Vec<Section>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchSuggestions {
    pub queries: Vec<String>,
    pub items: Vec<Item>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumPage {
    pub album: AlbumItem,
    pub songs: Vec<SongItem>,
    pub description: Option<String>,
    pub other_versions: Vec<AlbumItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistPage {
    pub artist: ArtistItem,
    pub description: Option<String>,
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistPage {
    pub playlist: PlaylistItem,
    pub description: Option<String>,
    pub songs: Vec<SongItem>,
    pub continuation: Option<Continuation>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PodcastPage {
    pub podcast: PodcastItem,
    pub description: Option<String>,
    pub episodes: Page<EpisodeItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chip {
    pub title: String,
    pub endpoint: Option<BrowseEndpoint>,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomePage {
    pub chips: Vec<Chip>,
    pub sections: Vec<Section>,
    pub continuation: Option<Continuation>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodAndGenresItem {
    pub title: String,
    /// ARGB colour of the tile's stripe.
    pub stripe_color: Option<u32>,
    pub endpoint: BrowseEndpoint,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodAndGenres {
    pub title: String,
    pub items: Vec<MoodAndGenresItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplorePage {
    pub new_release_albums: Vec<AlbumItem>,
    pub mood_and_genres: Vec<MoodAndGenresItem>,
}

/// The watch queue for an endpoint plus the side tabs of the player screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NextResult {
    pub title: Option<String>,
    pub items: Vec<SongItem>,
    pub current_index: Option<usize>,
    pub lyrics_endpoint: Option<BrowseEndpoint>,
    pub related_endpoint: Option<BrowseEndpoint>,
    pub continuation: Option<Continuation>,
    /// Endpoint to pass back together with `continuation`.
    pub endpoint: WatchEndpoint,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedPage {
    pub songs: Vec<SongItem>,
    pub albums: Vec<AlbumItem>,
    pub artists: Vec<ArtistItem>,
    pub playlists: Vec<PlaylistItem>,
}

impl RelatedPage {
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
            && self.albums.is_empty()
            && self.artists.is_empty()
            && self.playlists.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountInfo {
    pub name: String,
    pub email: Option<String>,
    pub channel_handle: Option<String>,
    pub thumbnail: Option<String>,
}
