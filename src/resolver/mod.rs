//! Turns renderer nodes into domain items.
//!
//! Every function here is pure. A node either resolves into a complete item
//! or into `None`; a miss is logged at debug level and never affects the
//! node's siblings.

pub mod card_shelf;
pub mod fallback;
pub mod heuristics;
pub mod kind;
pub mod multi_row;
pub mod panel;
pub mod responsive;
pub mod subtitle;
pub mod text;
pub mod two_row;

pub use heuristics::{BrowseIdHeuristics, IdClass, playlist_id_from_browse_id};
pub use kind::{Capabilities, NodeKind};
pub use subtitle::SubtitleParts;

use crate::{
    models::{AlbumRef, ArtistRef, Item, SongItem, WatchEndpoint},
    renderer::{ItemNode, LibraryTokens, Menu, NavigationEndpoint, RendererNode},
};

/// Page-level knowledge a node may inherit.
///
/// Album track rows carry neither artwork nor album reference; the album
/// page parser supplies them here.
#[derive(Debug, Clone)]
pub struct ResolutionContext<'a> {
    pub heuristics: &'a BrowseIdHeuristics,
    pub album: Option<AlbumRef>,
    pub artists: Vec<ArtistRef>,
    pub thumbnail: Option<String>,
}

impl<'a> ResolutionContext<'a> {
    pub fn new(heuristics: &'a BrowseIdHeuristics) -> Self {
        Self {
            heuristics,
            album: None,
            artists: Vec::new(),
            thumbnail: None,
        }
    }

    pub fn with_album(mut self, album: Option<AlbumRef>) -> Self {
        self.album = album;
        self
    }

    pub fn with_artists(mut self, artists: Vec<ArtistRef>) -> Self {
        self.artists = artists;
        self
    }

    pub fn with_thumbnail(mut self, thumbnail: Option<String>) -> Self {
        self.thumbnail = thumbnail;
        self
    }
}

pub fn resolve(node: RendererNode<'_>, ctx: &ResolutionContext<'_>) -> Option<Item> {
    let item = match node {
        RendererNode::TwoRow(r) => two_row::resolve(r, ctx),
        RendererNode::ResponsiveList(r) => responsive::resolve(r, ctx),
        RendererNode::MultiRow(r) => multi_row::resolve(r, ctx),
        RendererNode::CardShelf(r) => card_shelf::resolve(r, ctx),
        RendererNode::PlaylistPanel(r) => panel::resolve(r, ctx).map(Item::Song),
    };
    if item.is_none() {
        tracing::debug!("Dropping unresolvable {} node", node_name(&node));
    }
    item
}

/// Resolves every item-bearing node, preserving order and skipping misses.
pub fn resolve_all<'n>(
    nodes: impl IntoIterator<Item = &'n ItemNode>,
    ctx: &ResolutionContext<'_>,
) -> Vec<Item> {
    nodes
        .into_iter()
        .filter_map(ItemNode::node)
        .filter_map(|node| resolve(node, ctx))
        .collect()
}

pub fn resolve_songs<'n>(
    nodes: impl IntoIterator<Item = &'n ItemNode>,
    ctx: &ResolutionContext<'_>,
) -> Vec<SongItem> {
    resolve_all(nodes, ctx)
        .into_iter()
        .filter_map(Item::into_song)
        .collect()
}

fn node_name(node: &RendererNode<'_>) -> &'static str {
    match node {
        RendererNode::TwoRow(_) => "musicTwoRowItemRenderer",
        RendererNode::ResponsiveList(_) => "musicResponsiveListItemRenderer",
        RendererNode::MultiRow(_) => "musicMultiRowListItemRenderer",
        RendererNode::CardShelf(_) => "musicCardShelfRenderer",
        RendererNode::PlaylistPanel(_) => "playlistPanelVideoRenderer",
    }
}

/// Optional extras read from a node's context menu.
#[derive(Debug, Clone, Default)]
pub(crate) struct MenuExtras {
    pub library: LibraryTokens,
    pub radio: Option<WatchEndpoint>,
    pub shuffle: Option<WatchEndpoint>,
}

impl MenuExtras {
    pub(crate) fn of(menu: Option<&Menu>) -> Self {
        let Some(renderer) = menu.and_then(Menu::renderer) else {
            return Self::default();
        };
        Self {
            library: renderer.library_tokens(),
            radio: renderer.radio_endpoint(),
            shuffle: renderer.shuffle_endpoint(),
        }
    }
}

/// Video id of a watch endpoint, when the endpoint has one.
pub(crate) fn watch_video_id(endpoint: Option<&NavigationEndpoint>) -> Option<String> {
    endpoint?
        .watch_endpoint
        .as_ref()?
        .video_id
        .clone()
        .filter(|id| !id.trim().is_empty())
}

pub(crate) fn browse_id(endpoint: Option<&NavigationEndpoint>) -> Option<String> {
    endpoint?
        .browse_id()
        .filter(|id| !id.trim().is_empty())
        .map(str::to_string)
}

/// Playlist id behind a play button, from a watch or watch-playlist endpoint.
pub(crate) fn watch_playlist_id(endpoint: Option<&NavigationEndpoint>) -> Option<String> {
    endpoint?.any_watch_endpoint()?.playlist_id
}
