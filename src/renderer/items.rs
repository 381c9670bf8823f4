use serde::Deserialize;

use super::common::{
    Badge, ContinuationItemRenderer, Menu, NavigationEndpoint, Runs, ThumbnailOverlay,
    ThumbnailRenderer, Thumbnails,
};

/// Grid/carousel tile: album, playlist, artist, video ...
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MusicTwoRowItemRenderer {
    pub title: Option<Runs>,
    pub subtitle: Option<Runs>,
    #[serde(default, deserialize_with = "crate::renderer::lenient::vec")]
    pub subtitle_badges: Vec<Badge>,
    pub navigation_endpoint: Option<NavigationEndpoint>,
    pub thumbnail_renderer: Option<ThumbnailRenderer>,
    #[serde(default, deserialize_with = "crate::renderer::lenient::opt")]
    pub menu: Option<Menu>,
    #[serde(default, deserialize_with = "crate::renderer::lenient::opt")]
    pub thumbnail_overlay: Option<ThumbnailOverlay>,
}

/// List row with flex columns: search results, playlist tracks, album tracks.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MusicResponsiveListItemRenderer {
    #[serde(default, deserialize_with = "crate::renderer::lenient::vec")]
    pub flex_columns: Vec<FlexColumn>,
    #[serde(default, deserialize_with = "crate::renderer::lenient::vec")]
    pub fixed_columns: Vec<FixedColumn>,
    pub thumbnail: Option<ThumbnailRenderer>,
    pub navigation_endpoint: Option<NavigationEndpoint>,
    pub playlist_item_data: Option<PlaylistItemData>,
    #[serde(default, deserialize_with = "crate::renderer::lenient::vec")]
    pub badges: Vec<Badge>,
    #[serde(default, deserialize_with = "crate::renderer::lenient::opt")]
    pub menu: Option<Menu>,
    #[serde(default, deserialize_with = "crate::renderer::lenient::opt")]
    pub overlay: Option<ThumbnailOverlay>,
    pub index: Option<Runs>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlexColumn {
    pub music_responsive_list_item_flex_column_renderer: Option<ColumnText>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixedColumn {
    pub music_responsive_list_item_fixed_column_renderer: Option<ColumnText>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnText {
    pub text: Option<Runs>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItemData {
    pub video_id: Option<String>,
    pub playlist_set_video_id: Option<String>,
}

impl MusicResponsiveListItemRenderer {
    pub fn flex_text(&self, index: usize) -> Option<&Runs> {
        self.flex_columns
            .get(index)?
            .music_responsive_list_item_flex_column_renderer
            .as_ref()?
            .text
            .as_ref()
    }

    pub fn fixed_text(&self, index: usize) -> Option<&Runs> {
        self.fixed_columns
            .get(index)?
            .music_responsive_list_item_fixed_column_renderer
            .as_ref()?
            .text
            .as_ref()
    }

    pub fn flex_texts(&self) -> impl Iterator<Item = &Runs> {
        self.flex_columns.iter().filter_map(|c| {
            c.music_responsive_list_item_flex_column_renderer
                .as_ref()?
                .text
                .as_ref()
        })
    }
}

/// Podcast episode row.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MusicMultiRowListItemRenderer {
    pub title: Option<Runs>,
    pub subtitle: Option<Runs>,
    pub second_title: Option<Runs>,
    pub description: Option<Runs>,
    pub thumbnail: Option<ThumbnailRenderer>,
    pub on_tap: Option<NavigationEndpoint>,
    #[serde(default, deserialize_with = "crate::renderer::lenient::opt")]
    pub menu: Option<Menu>,
    #[serde(default, deserialize_with = "crate::renderer::lenient::opt")]
    pub overlay: Option<ThumbnailOverlay>,
}

/// "Top result" card of a search summary.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MusicCardShelfRenderer {
    pub title: Option<Runs>,
    pub subtitle: Option<Runs>,
    pub thumbnail: Option<ThumbnailRenderer>,
    pub on_tap: Option<NavigationEndpoint>,
    #[serde(default, deserialize_with = "crate::renderer::lenient::vec")]
    pub subtitle_badges: Vec<Badge>,
    #[serde(default, deserialize_with = "crate::renderer::lenient::opt")]
    pub menu: Option<Menu>,
    #[serde(default, deserialize_with = "crate::renderer::lenient::opt")]
    pub header: Option<CardShelfHeader>,
    #[serde(default, deserialize_with = "crate::renderer::lenient::vec")]
    pub contents: Vec<ItemNode>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardShelfHeader {
    pub music_card_shelf_header_basic_renderer: Option<TitleOnly>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleOnly {
    pub title: Option<Runs>,
}

/// Watch queue entry.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistPanelVideoRenderer {
    pub video_id: Option<String>,
    pub title: Option<Runs>,
    pub long_byline_text: Option<Runs>,
    pub short_byline_text: Option<Runs>,
    pub length_text: Option<Runs>,
    pub thumbnail: Option<Thumbnails>,
    pub navigation_endpoint: Option<NavigationEndpoint>,
    #[serde(default, deserialize_with = "crate::renderer::lenient::vec")]
    pub badges: Vec<Badge>,
    #[serde(default, deserialize_with = "crate::renderer::lenient::opt")]
    pub menu: Option<Menu>,
    #[serde(default)]
    pub selected: bool,
    pub playlist_set_video_id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistPanelVideoWrapperRenderer {
    pub primary_renderer: Option<Box<ItemNode>>,
}

/// Mood/genre tile.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MusicNavigationButtonRenderer {
    pub button_text: Option<Runs>,
    pub solid: Option<SolidColor>,
    pub click_command: Option<NavigationEndpoint>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolidColor {
    pub left_stripe_color: Option<u64>,
}

/// One entry of a shelf, carousel, grid or queue.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemNode {
    #[serde(default, deserialize_with = "crate::renderer::lenient::opt")]
    pub music_two_row_item_renderer: Option<MusicTwoRowItemRenderer>,
    #[serde(default, deserialize_with = "crate::renderer::lenient::opt")]
    pub music_responsive_list_item_renderer: Option<MusicResponsiveListItemRenderer>,
    #[serde(default, deserialize_with = "crate::renderer::lenient::opt")]
    pub music_multi_row_list_item_renderer: Option<MusicMultiRowListItemRenderer>,
    #[serde(default, deserialize_with = "crate::renderer::lenient::opt")]
    pub playlist_panel_video_renderer: Option<PlaylistPanelVideoRenderer>,
    #[serde(default, deserialize_with = "crate::renderer::lenient::opt")]
    pub playlist_panel_video_wrapper_renderer: Option<PlaylistPanelVideoWrapperRenderer>,
    #[serde(default, deserialize_with = "crate::renderer::lenient::opt")]
    pub music_navigation_button_renderer: Option<MusicNavigationButtonRenderer>,
    #[serde(default, deserialize_with = "crate::renderer::lenient::opt")]
    pub continuation_item_renderer: Option<ContinuationItemRenderer>,
}

/// The item-bearing shapes a node can take.
#[derive(Debug, Clone, Copy)]
pub enum RendererNode<'a> {
    TwoRow(&'a MusicTwoRowItemRenderer),
    ResponsiveList(&'a MusicResponsiveListItemRenderer),
    MultiRow(&'a MusicMultiRowListItemRenderer),
    CardShelf(&'a MusicCardShelfRenderer),
    PlaylistPanel(&'a PlaylistPanelVideoRenderer),
}

impl ItemNode {
    pub fn node(&self) -> Option<RendererNode<'_>> {
        if let Some(r) = &self.music_two_row_item_renderer {
            return Some(RendererNode::TwoRow(r));
        }
        if let Some(r) = &self.music_responsive_list_item_renderer {
            return Some(RendererNode::ResponsiveList(r));
        }
        if let Some(r) = &self.music_multi_row_list_item_renderer {
            return Some(RendererNode::MultiRow(r));
        }
        if let Some(r) = &self.playlist_panel_video_renderer {
            return Some(RendererNode::PlaylistPanel(r));
        }
        self.playlist_panel_video_wrapper_renderer
            .as_ref()?
            .primary_renderer
            .as_ref()?
            .node()
    }

    pub fn continuation_token(&self) -> Option<&str> {
        self.continuation_item_renderer.as_ref()?.token()
    }
}
