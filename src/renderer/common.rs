use serde::Deserialize;

use crate::models::{BrowseEndpoint, Continuation, MusicVideoType, WatchEndpoint};

/// Formatted text: either a list of runs or a single `simpleText`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Runs {
    #[serde(default, deserialize_with = "crate::renderer::lenient::vec")]
    pub runs: Vec<Run>,
    pub simple_text: Option<String>,
}

impl Runs {
    /// Concatenated text of every run.
    pub fn text(&self) -> Option<String> {
        if let Some(s) = &self.simple_text {
            return Some(s.clone());
        }
        if self.runs.is_empty() {
            return None;
        }
        Some(self.runs.iter().map(|r| r.text.as_str()).collect())
    }

    pub fn first_text(&self) -> Option<&str> {
        self.runs
            .first()
            .map(|r| r.text.as_str())
            .or(self.simple_text.as_deref())
            .filter(|s| !s.trim().is_empty())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Run {
    #[serde(default)]
    pub text: String,
    #[serde(default, deserialize_with = "crate::renderer::lenient::opt")]
    pub navigation_endpoint: Option<NavigationEndpoint>,
}

impl Run {
    pub fn browse_id(&self) -> Option<&str> {
        self.navigation_endpoint.as_ref()?.browse_id()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationEndpoint {
    pub watch_endpoint: Option<WatchEndpointNode>,
    pub watch_playlist_endpoint: Option<WatchPlaylistEndpointNode>,
    pub browse_endpoint: Option<BrowseEndpointNode>,
    pub search_endpoint: Option<SearchEndpointNode>,
}

impl NavigationEndpoint {
    pub fn browse_id(&self) -> Option<&str> {
        self.browse_endpoint.as_ref()?.browse_id.as_deref()
    }

    pub fn page_type(&self) -> Option<&str> {
        self.browse_endpoint.as_ref()?.page_type()
    }

    pub fn music_video_type(&self) -> Option<MusicVideoType> {
        self.watch_endpoint.as_ref()?.music_video_type()
    }

    /// Watch or watch-playlist endpoint, whichever is present.
    pub fn any_watch_endpoint(&self) -> Option<WatchEndpoint> {
        self.watch_endpoint
            .as_ref()
            .and_then(WatchEndpointNode::to_endpoint)
            .or_else(|| {
                self.watch_playlist_endpoint
                    .as_ref()
                    .and_then(WatchPlaylistEndpointNode::to_endpoint)
            })
    }

    pub fn to_browse_endpoint(&self) -> Option<BrowseEndpoint> {
        self.browse_endpoint
            .as_ref()
            .and_then(BrowseEndpointNode::to_endpoint)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchEndpointNode {
    pub video_id: Option<String>,
    pub playlist_id: Option<String>,
    pub index: Option<u32>,
    pub params: Option<String>,
    pub watch_endpoint_music_supported_configs: Option<WatchEndpointMusicSupportedConfigs>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchEndpointMusicSupportedConfigs {
    pub watch_endpoint_music_config: Option<WatchEndpointMusicConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchEndpointMusicConfig {
    pub music_video_type: Option<String>,
}

impl WatchEndpointNode {
    pub fn music_video_type(&self) -> Option<MusicVideoType> {
        self.watch_endpoint_music_supported_configs
            .as_ref()?
            .watch_endpoint_music_config
            .as_ref()?
            .music_video_type
            .as_deref()
            .map(MusicVideoType::from_upstream)
    }

    pub fn to_endpoint(&self) -> Option<WatchEndpoint> {
        if self.video_id.is_none() && self.playlist_id.is_none() {
            return None;
        }
        Some(WatchEndpoint {
            video_id: self.video_id.clone(),
            playlist_id: self.playlist_id.clone(),
            index: self.index,
            params: self.params.clone(),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchPlaylistEndpointNode {
    pub playlist_id: Option<String>,
    pub params: Option<String>,
}

impl WatchPlaylistEndpointNode {
    pub fn to_endpoint(&self) -> Option<WatchEndpoint> {
        let playlist_id = self.playlist_id.as_ref()?;
        Some(WatchEndpoint::playlist(
            playlist_id.clone(),
            self.params.clone(),
        ))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowseEndpointNode {
    pub browse_id: Option<String>,
    pub params: Option<String>,
    pub browse_endpoint_context_supported_configs: Option<BrowseEndpointContextSupportedConfigs>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowseEndpointContextSupportedConfigs {
    pub browse_endpoint_context_music_config: Option<BrowseEndpointContextMusicConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowseEndpointContextMusicConfig {
    pub page_type: Option<String>,
}

impl BrowseEndpointNode {
    pub fn page_type(&self) -> Option<&str> {
        self.browse_endpoint_context_supported_configs
            .as_ref()?
            .browse_endpoint_context_music_config
            .as_ref()?
            .page_type
            .as_deref()
    }

    pub fn to_endpoint(&self) -> Option<BrowseEndpoint> {
        let browse_id = self.browse_id.as_ref().filter(|id| !id.is_empty())?;
        Some(BrowseEndpoint::with_params(
            browse_id.clone(),
            self.params.clone(),
        ))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchEndpointNode {
    pub query: Option<String>,
    pub params: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Thumbnails {
    #[serde(default, deserialize_with = "crate::renderer::lenient::vec")]
    pub thumbnails: Vec<Thumbnail>,
}

impl Thumbnails {
    /// Upstream lists thumbnails smallest first.
    pub fn largest(&self) -> Option<&str> {
        self.thumbnails
            .last()
            .map(|t| t.url.as_str())
            .filter(|u| !u.is_empty())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Thumbnail {
    #[serde(default)]
    pub url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThumbnailRenderer {
    pub music_thumbnail_renderer: Option<ThumbnailHolder>,
    pub cropped_square_thumbnail_renderer: Option<ThumbnailHolder>,
    pub music_animated_thumbnail_renderer: Option<AnimatedThumbnailHolder>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThumbnailHolder {
    pub thumbnail: Option<Thumbnails>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimatedThumbnailHolder {
    pub backup_renderer: Option<ThumbnailHolder>,
}

impl ThumbnailRenderer {
    pub fn music_thumbnail(&self) -> Option<&str> {
        self.music_thumbnail_renderer
            .as_ref()?
            .thumbnail
            .as_ref()?
            .largest()
    }

    pub fn cropped_square(&self) -> Option<&str> {
        self.cropped_square_thumbnail_renderer
            .as_ref()?
            .thumbnail
            .as_ref()?
            .largest()
    }

    pub fn animated_backup(&self) -> Option<&str> {
        self.music_animated_thumbnail_renderer
            .as_ref()?
            .backup_renderer
            .as_ref()?
            .thumbnail
            .as_ref()?
            .largest()
    }

    pub fn best(&self) -> Option<&str> {
        self.music_thumbnail()
            .or_else(|| self.cropped_square())
            .or_else(|| self.animated_backup())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Icon {
    pub icon_type: Option<String>,
}

impl Icon {
    pub fn is(&self, icon_type: &str) -> bool {
        self.icon_type.as_deref() == Some(icon_type)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    pub music_inline_badge_renderer: Option<InlineBadge>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineBadge {
    pub icon: Option<Icon>,
}

pub const EXPLICIT_BADGE: &str = "MUSIC_EXPLICIT_BADGE";

pub fn has_explicit_badge(badges: &[Badge]) -> bool {
    badges.iter().any(|b| {
        b.music_inline_badge_renderer
            .as_ref()
            .and_then(|r| r.icon.as_ref())
            .map(|i| i.is(EXPLICIT_BADGE))
            .unwrap_or(false)
    })
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Menu {
    pub menu_renderer: Option<MenuRenderer>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuRenderer {
    #[serde(default, deserialize_with = "crate::renderer::lenient::vec")]
    pub items: Vec<MenuItem>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub menu_navigation_item_renderer: Option<MenuNavigationItem>,
    pub menu_service_item_renderer: Option<MenuServiceItem>,
    pub toggle_menu_service_item_renderer: Option<ToggleMenuServiceItem>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuNavigationItem {
    pub icon: Option<Icon>,
    pub navigation_endpoint: Option<NavigationEndpoint>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuServiceItem {
    pub icon: Option<Icon>,
    pub service_endpoint: Option<ServiceEndpoint>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleMenuServiceItem {
    pub default_icon: Option<Icon>,
    pub default_service_endpoint: Option<ServiceEndpoint>,
    pub toggled_service_endpoint: Option<ServiceEndpoint>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceEndpoint {
    pub feedback_endpoint: Option<FeedbackEndpoint>,
}

impl ServiceEndpoint {
    pub fn feedback_token(&self) -> Option<&str> {
        self.feedback_endpoint.as_ref()?.feedback_token.as_deref()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackEndpoint {
    pub feedback_token: Option<String>,
}

/// Library add/remove feedback tokens carried by a toggle menu entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LibraryTokens {
    pub add: Option<String>,
    pub remove: Option<String>,
}

impl MenuRenderer {
    fn navigation_with_icon(&self, icon: &str) -> Option<&NavigationEndpoint> {
        self.items.iter().find_map(|item| {
            let nav = item.menu_navigation_item_renderer.as_ref()?;
            if nav.icon.as_ref()?.is(icon) {
                nav.navigation_endpoint.as_ref()
            } else {
                None
            }
        })
    }

    pub fn radio_endpoint(&self) -> Option<WatchEndpoint> {
        self.navigation_with_icon("MIX")?.any_watch_endpoint()
    }

    pub fn shuffle_endpoint(&self) -> Option<WatchEndpoint> {
        self.navigation_with_icon("MUSIC_SHUFFLE")?
            .any_watch_endpoint()
    }

    /// The toggle's default state decides which token adds and which removes.
    pub fn library_tokens(&self) -> LibraryTokens {
        for item in &self.items {
            let Some(toggle) = item.toggle_menu_service_item_renderer.as_ref() else {
                continue;
            };
            let Some(icon) = toggle.default_icon.as_ref() else {
                continue;
            };
            let default_token = toggle
                .default_service_endpoint
                .as_ref()
                .and_then(ServiceEndpoint::feedback_token)
                .map(str::to_string);
            let toggled_token = toggle
                .toggled_service_endpoint
                .as_ref()
                .and_then(ServiceEndpoint::feedback_token)
                .map(str::to_string);

            if icon.is("LIBRARY_ADD") || icon.is("BOOKMARK_BORDER") {
                return LibraryTokens {
                    add: default_token,
                    remove: toggled_token,
                };
            }
            if icon.is("LIBRARY_SAVED") || icon.is("LIBRARY_REMOVE") || icon.is("BOOKMARK") {
                return LibraryTokens {
                    add: toggled_token,
                    remove: default_token,
                };
            }
        }
        LibraryTokens::default()
    }
}

impl Menu {
    pub fn renderer(&self) -> Option<&MenuRenderer> {
        self.menu_renderer.as_ref()
    }
}

/// Play button overlay on item thumbnails.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThumbnailOverlay {
    pub music_item_thumbnail_overlay_renderer: Option<OverlayRenderer>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlayRenderer {
    pub content: Option<OverlayContent>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlayContent {
    pub music_play_button_renderer: Option<PlayButton>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayButton {
    pub play_navigation_endpoint: Option<NavigationEndpoint>,
}

impl ThumbnailOverlay {
    pub fn play_endpoint(&self) -> Option<&NavigationEndpoint> {
        self.music_item_thumbnail_overlay_renderer
            .as_ref()?
            .content
            .as_ref()?
            .music_play_button_renderer
            .as_ref()?
            .play_navigation_endpoint
            .as_ref()
    }
}

/// Legacy continuation holder (`continuations: [{ nextContinuationData }]`).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContinuationHolder {
    pub next_continuation_data: Option<ContinuationData>,
    pub next_radio_continuation_data: Option<ContinuationData>,
    pub reload_continuation_data: Option<ContinuationData>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContinuationData {
    pub continuation: Option<String>,
}

impl ContinuationHolder {
    pub fn token(&self) -> Option<&str> {
        self.next_continuation_data
            .as_ref()
            .or(self.next_radio_continuation_data.as_ref())
            .and_then(|d| d.continuation.as_deref())
    }
}

/// Tail item carrying the continuation in newer responses.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContinuationItemRenderer {
    pub continuation_endpoint: Option<ContinuationEndpoint>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContinuationEndpoint {
    pub continuation_command: Option<ContinuationCommand>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContinuationCommand {
    pub token: Option<String>,
}

impl ContinuationItemRenderer {
    pub fn token(&self) -> Option<&str> {
        self.continuation_endpoint
            .as_ref()?
            .continuation_command
            .as_ref()?
            .token
            .as_deref()
    }
}

/// First non-empty legacy token, as a [`Continuation`].
pub fn legacy_continuation(holders: &[ContinuationHolder]) -> Option<Continuation> {
    holders
        .iter()
        .filter_map(ContinuationHolder::token)
        .find(|t| !t.trim().is_empty())
        .map(Continuation::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_runs_text_joins_all_runs() {
        let runs: Runs = serde_json::from_value(json!({
            "runs": [{ "text": "Song" }, { "text": " • " }, { "text": "Artist" }]
        }))
        .expect("valid runs");
        assert_eq!(runs.text().as_deref(), Some("Song • Artist"));
        assert_eq!(runs.first_text(), Some("Song"));

        let simple: Runs =
            serde_json::from_value(json!({ "simpleText": "3:45" })).expect("valid text");
        assert_eq!(simple.text().as_deref(), Some("3:45"));
    }

    #[test]
    fn test_browse_endpoint_page_type() {
        let nav: NavigationEndpoint = serde_json::from_value(json!({
            "browseEndpoint": {
                "browseId": "MPREb_abc",
                "browseEndpointContextSupportedConfigs": {
                    "browseEndpointContextMusicConfig": { "pageType": "MUSIC_PAGE_TYPE_ALBUM" }
                }
            }
        }))
        .expect("valid endpoint");
        assert_eq!(nav.browse_id(), Some("MPREb_abc"));
        assert_eq!(nav.page_type(), Some("MUSIC_PAGE_TYPE_ALBUM"));
        assert!(nav.any_watch_endpoint().is_none());
    }

    #[test]
    fn test_library_tokens_follow_toggle_state() {
        let saved: MenuRenderer = serde_json::from_value(json!({
            "items": [{
                "toggleMenuServiceItemRenderer": {
                    "defaultIcon": { "iconType": "LIBRARY_SAVED" },
                    "defaultServiceEndpoint": { "feedbackEndpoint": { "feedbackToken": "remove-me" } },
                    "toggledServiceEndpoint": { "feedbackEndpoint": { "feedbackToken": "add-me" } }
                }
            }]
        }))
        .expect("valid menu");
        let tokens = saved.library_tokens();
        assert_eq!(tokens.add.as_deref(), Some("add-me"));
        assert_eq!(tokens.remove.as_deref(), Some("remove-me"));
    }

    #[test]
    fn test_legacy_continuation_skips_empty_tokens() {
        let holders: Vec<ContinuationHolder> = serde_json::from_value(json!([
            { "nextContinuationData": { "continuation": "" } },
            { "nextContinuationData": { "continuation": "next" } }
        ]))
        .expect("valid holders");
        assert_eq!(legacy_continuation(&holders), Some(Continuation::new("next")));
    }
}
