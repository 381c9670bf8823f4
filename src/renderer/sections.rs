use serde::Deserialize;

use super::{
    common::{ContinuationHolder, NavigationEndpoint, Runs, ThumbnailRenderer, legacy_continuation},
    headers::{MusicResponsiveHeaderRenderer, MusicEditablePlaylistDetailHeaderRenderer},
    items::{ItemNode, MusicCardShelfRenderer},
};
use crate::models::Continuation;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionListRenderer {
    #[serde(default, deserialize_with = "crate::renderer::lenient::vec")]
    pub contents: Vec<SectionNode>,
    #[serde(default, deserialize_with = "crate::renderer::lenient::vec")]
    pub continuations: Vec<ContinuationHolder>,
    #[serde(default, deserialize_with = "crate::renderer::lenient::opt")]
    pub header: Option<SectionListHeader>,
}

impl SectionListRenderer {
    pub fn continuation(&self) -> Option<Continuation> {
        legacy_continuation(&self.continuations)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionListHeader {
    pub chip_cloud_renderer: Option<ChipCloudRenderer>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChipCloudRenderer {
    #[serde(default, deserialize_with = "crate::renderer::lenient::vec")]
    pub chips: Vec<ChipNode>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChipNode {
    pub chip_cloud_chip_renderer: Option<ChipCloudChipRenderer>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChipCloudChipRenderer {
    pub text: Option<Runs>,
    pub navigation_endpoint: Option<NavigationEndpoint>,
    #[serde(default)]
    pub is_selected: bool,
}

/// One entry of a section list. Exactly one field is normally present.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionNode {
    #[serde(default, deserialize_with = "crate::renderer::lenient::opt")]
    pub music_carousel_shelf_renderer: Option<MusicCarouselShelfRenderer>,
    #[serde(default, deserialize_with = "crate::renderer::lenient::opt")]
    pub music_immersive_carousel_shelf_renderer: Option<MusicCarouselShelfRenderer>,
    #[serde(default, deserialize_with = "crate::renderer::lenient::opt")]
    pub music_shelf_renderer: Option<MusicShelfRenderer>,
    #[serde(default, deserialize_with = "crate::renderer::lenient::opt")]
    pub music_card_shelf_renderer: Option<MusicCardShelfRenderer>,
    #[serde(default, deserialize_with = "crate::renderer::lenient::opt")]
    pub grid_renderer: Option<GridRenderer>,
    #[serde(default, deserialize_with = "crate::renderer::lenient::opt")]
    pub music_playlist_shelf_renderer: Option<MusicPlaylistShelfRenderer>,
    #[serde(default, deserialize_with = "crate::renderer::lenient::opt")]
    pub music_description_shelf_renderer: Option<MusicDescriptionShelfRenderer>,
    #[serde(default, deserialize_with = "crate::renderer::lenient::opt")]
    pub item_section_renderer: Option<ItemSectionRenderer>,
    #[serde(default, deserialize_with = "crate::renderer::lenient::opt")]
    pub music_responsive_header_renderer: Option<MusicResponsiveHeaderRenderer>,
    #[serde(default, deserialize_with = "crate::renderer::lenient::opt")]
    pub music_editable_playlist_detail_header_renderer:
        Option<MusicEditablePlaylistDetailHeaderRenderer>,
}

impl SectionNode {
    pub fn carousel(&self) -> Option<&MusicCarouselShelfRenderer> {
        self.music_carousel_shelf_renderer
            .as_ref()
            .or(self.music_immersive_carousel_shelf_renderer.as_ref())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MusicCarouselShelfRenderer {
    #[serde(default, deserialize_with = "crate::renderer::lenient::opt")]
    pub header: Option<CarouselHeader>,
    #[serde(default, deserialize_with = "crate::renderer::lenient::vec")]
    pub contents: Vec<ItemNode>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarouselHeader {
    pub music_carousel_shelf_basic_header_renderer: Option<CarouselBasicHeader>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarouselBasicHeader {
    pub title: Option<Runs>,
    pub strapline: Option<Runs>,
    pub thumbnail: Option<ThumbnailRenderer>,
    pub more_content_button: Option<MoreContentButton>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoreContentButton {
    pub button_renderer: Option<ButtonRenderer>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonRenderer {
    pub text: Option<Runs>,
    pub navigation_endpoint: Option<NavigationEndpoint>,
}

impl MusicCarouselShelfRenderer {
    pub fn basic_header(&self) -> Option<&CarouselBasicHeader> {
        self.header
            .as_ref()?
            .music_carousel_shelf_basic_header_renderer
            .as_ref()
    }

    pub fn title(&self) -> Option<String> {
        self.basic_header()?.title.as_ref()?.text()
    }

    /// Browse id of the title run, which links to the shelf's full page.
    pub fn title_endpoint(&self) -> Option<&NavigationEndpoint> {
        self.basic_header()?
            .title
            .as_ref()?
            .runs
            .first()?
            .navigation_endpoint
            .as_ref()
    }

    pub fn more_endpoint(&self) -> Option<&NavigationEndpoint> {
        self.basic_header()?
            .more_content_button
            .as_ref()?
            .button_renderer
            .as_ref()?
            .navigation_endpoint
            .as_ref()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MusicShelfRenderer {
    pub title: Option<Runs>,
    #[serde(default, deserialize_with = "crate::renderer::lenient::vec")]
    pub contents: Vec<ItemNode>,
    #[serde(default, deserialize_with = "crate::renderer::lenient::vec")]
    pub continuations: Vec<ContinuationHolder>,
    pub bottom_endpoint: Option<NavigationEndpoint>,
}

impl MusicShelfRenderer {
    pub fn continuation(&self) -> Option<Continuation> {
        continuation_of(&self.continuations, &self.contents)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridRenderer {
    #[serde(default, deserialize_with = "crate::renderer::lenient::opt")]
    pub header: Option<GridHeader>,
    #[serde(default, deserialize_with = "crate::renderer::lenient::vec")]
    pub items: Vec<ItemNode>,
    #[serde(default, deserialize_with = "crate::renderer::lenient::vec")]
    pub continuations: Vec<ContinuationHolder>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridHeader {
    pub grid_header_renderer: Option<super::items::TitleOnly>,
}

impl GridRenderer {
    pub fn title(&self) -> Option<String> {
        self.header
            .as_ref()?
            .grid_header_renderer
            .as_ref()?
            .title
            .as_ref()?
            .text()
    }

    pub fn continuation(&self) -> Option<Continuation> {
        continuation_of(&self.continuations, &self.items)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MusicPlaylistShelfRenderer {
    pub playlist_id: Option<String>,
    #[serde(default, deserialize_with = "crate::renderer::lenient::vec")]
    pub contents: Vec<ItemNode>,
    #[serde(default, deserialize_with = "crate::renderer::lenient::vec")]
    pub continuations: Vec<ContinuationHolder>,
}

impl MusicPlaylistShelfRenderer {
    pub fn continuation(&self) -> Option<Continuation> {
        continuation_of(&self.continuations, &self.contents)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MusicDescriptionShelfRenderer {
    pub header: Option<Runs>,
    pub description: Option<Runs>,
    pub footer: Option<Runs>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemSectionRenderer {
    #[serde(default, deserialize_with = "crate::renderer::lenient::vec")]
    pub contents: Vec<SectionNode>,
}

/// Legacy `continuations` first, then a trailing `continuationItemRenderer`.
pub fn continuation_of(holders: &[ContinuationHolder], items: &[ItemNode]) -> Option<Continuation> {
    legacy_continuation(holders).or_else(|| {
        items
            .iter()
            .rev()
            .find_map(ItemNode::continuation_token)
            .filter(|t| !t.trim().is_empty())
            .map(Continuation::new)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_shelf_continuation_prefers_legacy_holder() {
        let shelf: MusicShelfRenderer = serde_json::from_value(json!({
            "contents": [
                { "continuationItemRenderer": { "continuationEndpoint": { "continuationCommand": { "token": "new-style" } } } }
            ],
            "continuations": [{ "nextContinuationData": { "continuation": "legacy" } }]
        }))
        .expect("valid shelf");
        assert_eq!(shelf.continuation(), Some(Continuation::new("legacy")));
    }

    #[test]
    fn test_shelf_continuation_from_tail_item() {
        let shelf: MusicPlaylistShelfRenderer = serde_json::from_value(json!({
            "contents": [
                { "musicResponsiveListItemRenderer": {} },
                { "continuationItemRenderer": { "continuationEndpoint": { "continuationCommand": { "token": "tail" } } } }
            ]
        }))
        .expect("valid shelf");
        assert_eq!(shelf.continuation(), Some(Continuation::new("tail")));
    }

    #[test]
    fn test_carousel_header_accessors() {
        let carousel: MusicCarouselShelfRenderer = serde_json::from_value(json!({
            "header": {
                "musicCarouselShelfBasicHeaderRenderer": {
                    "title": { "runs": [{ "text": "Albums", "navigationEndpoint": { "browseEndpoint": { "browseId": "UCx", "params": "p" } } }] },
                    "strapline": { "runs": [{ "text": "More from" }] }
                }
            },
            "contents": []
        }))
        .expect("valid carousel");
        assert_eq!(carousel.title().as_deref(), Some("Albums"));
        assert_eq!(
            carousel.title_endpoint().and_then(|e| e.browse_id()),
            Some("UCx")
        );
        assert!(carousel.more_endpoint().is_none());
    }
}
