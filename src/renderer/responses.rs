use serde::Deserialize;

use super::{
    common::{ContinuationHolder, NavigationEndpoint, Runs, Thumbnails, WatchEndpointNode},
    headers::HeaderNode,
    items::ItemNode,
    sections::{
        GridRenderer, MusicPlaylistShelfRenderer, MusicShelfRenderer, SectionListRenderer,
        SectionNode, continuation_of,
    },
};
use crate::models::Continuation;

pub const PAGE_TYPE_LYRICS: &str = "MUSIC_PAGE_TYPE_TRACK_LYRICS";
pub const PAGE_TYPE_RELATED: &str = "MUSIC_PAGE_TYPE_TRACK_RELATED";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tab {
    pub tab_renderer: Option<TabRenderer>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabRenderer {
    pub title: Option<String>,
    pub endpoint: Option<NavigationEndpoint>,
    #[serde(default, deserialize_with = "crate::renderer::lenient::opt")]
    pub content: Option<TabContent>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabContent {
    #[serde(default, deserialize_with = "crate::renderer::lenient::opt")]
    pub section_list_renderer: Option<SectionListRenderer>,
    #[serde(default, deserialize_with = "crate::renderer::lenient::opt")]
    pub music_queue_renderer: Option<MusicQueueRenderer>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabbedResults {
    #[serde(default, deserialize_with = "crate::renderer::lenient::vec")]
    pub tabs: Vec<Tab>,
    #[serde(default, deserialize_with = "crate::renderer::lenient::opt")]
    pub secondary_contents: Option<TabContent>,
}

impl TabbedResults {
    fn first_section_list(&self) -> Option<&SectionListRenderer> {
        self.tabs.iter().find_map(|t| {
            t.tab_renderer
                .as_ref()?
                .content
                .as_ref()?
                .section_list_renderer
                .as_ref()
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowseContents {
    pub single_column_browse_results_renderer: Option<TabbedResults>,
    pub two_column_browse_results_renderer: Option<TabbedResults>,
    #[serde(default, deserialize_with = "crate::renderer::lenient::opt")]
    pub section_list_renderer: Option<SectionListRenderer>,
}

/// `continuationContents` of a browse, search or next continuation call.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContinuationContents {
    #[serde(default, deserialize_with = "crate::renderer::lenient::opt")]
    pub music_shelf_continuation: Option<MusicShelfRenderer>,
    #[serde(default, deserialize_with = "crate::renderer::lenient::opt")]
    pub music_playlist_shelf_continuation: Option<MusicPlaylistShelfRenderer>,
    #[serde(default, deserialize_with = "crate::renderer::lenient::opt")]
    pub section_list_continuation: Option<SectionListRenderer>,
    #[serde(default, deserialize_with = "crate::renderer::lenient::opt")]
    pub grid_continuation: Option<GridRenderer>,
    #[serde(default, deserialize_with = "crate::renderer::lenient::opt")]
    pub playlist_panel_continuation: Option<PlaylistPanelRenderer>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseAction {
    pub append_continuation_items_action: Option<ContinuationItemsAction>,
    pub reload_continuation_items_command: Option<ContinuationItemsAction>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContinuationItemsAction {
    #[serde(default, deserialize_with = "crate::renderer::lenient::vec")]
    pub continuation_items: Vec<ItemNode>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Microformat {
    pub microformat_data_renderer: Option<MicroformatData>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MicroformatData {
    pub url_canonical: Option<String>,
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowseResponse {
    #[serde(default, deserialize_with = "crate::renderer::lenient::opt")]
    pub contents: Option<BrowseContents>,
    #[serde(default, deserialize_with = "crate::renderer::lenient::opt")]
    pub header: Option<HeaderNode>,
    #[serde(default, deserialize_with = "crate::renderer::lenient::opt")]
    pub continuation_contents: Option<ContinuationContents>,
    #[serde(default, deserialize_with = "crate::renderer::lenient::vec")]
    pub on_response_received_actions: Vec<ResponseAction>,
    #[serde(default, deserialize_with = "crate::renderer::lenient::opt")]
    pub microformat: Option<Microformat>,
}

impl BrowseResponse {
    /// Main section list, whichever column layout the response uses.
    pub fn primary_sections(&self) -> Option<&SectionListRenderer> {
        let contents = self.contents.as_ref()?;
        contents
            .single_column_browse_results_renderer
            .as_ref()
            .and_then(TabbedResults::first_section_list)
            .or_else(|| {
                contents
                    .two_column_browse_results_renderer
                    .as_ref()
                    .and_then(TabbedResults::first_section_list)
            })
            .or(contents.section_list_renderer.as_ref())
    }

    /// Right-hand column of two-column layouts (album/playlist tracks).
    pub fn secondary_sections(&self) -> Option<&SectionListRenderer> {
        self.contents
            .as_ref()?
            .two_column_browse_results_renderer
            .as_ref()?
            .secondary_contents
            .as_ref()?
            .section_list_renderer
            .as_ref()
    }

    pub fn section_nodes(&self) -> impl Iterator<Item = &SectionNode> {
        self.primary_sections()
            .into_iter()
            .chain(self.secondary_sections())
            .flat_map(|list| list.contents.iter())
    }

    /// Items appended by `onResponseReceivedActions`, the newer continuation form.
    pub fn appended_items(&self) -> &[ItemNode] {
        self.on_response_received_actions
            .iter()
            .find_map(|a| {
                a.append_continuation_items_action
                    .as_ref()
                    .or(a.reload_continuation_items_command.as_ref())
            })
            .map(|a| a.continuation_items.as_slice())
            .unwrap_or_default()
    }

    pub fn canonical_url(&self) -> Option<&str> {
        self.microformat
            .as_ref()?
            .microformat_data_renderer
            .as_ref()?
            .url_canonical
            .as_deref()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchContents {
    pub tabbed_search_results_renderer: Option<TabbedResults>,
    #[serde(default, deserialize_with = "crate::renderer::lenient::opt")]
    pub section_list_renderer: Option<SectionListRenderer>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    #[serde(default, deserialize_with = "crate::renderer::lenient::opt")]
    pub contents: Option<SearchContents>,
    #[serde(default, deserialize_with = "crate::renderer::lenient::opt")]
    pub continuation_contents: Option<ContinuationContents>,
}

impl SearchResponse {
    pub fn sections(&self) -> Option<&SectionListRenderer> {
        let contents = self.contents.as_ref()?;
        contents
            .tabbed_search_results_renderer
            .as_ref()
            .and_then(TabbedResults::first_section_list)
            .or(contents.section_list_renderer.as_ref())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MusicQueueRenderer {
    #[serde(default, deserialize_with = "crate::renderer::lenient::opt")]
    pub content: Option<QueueContent>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueContent {
    #[serde(default, deserialize_with = "crate::renderer::lenient::opt")]
    pub playlist_panel_renderer: Option<PlaylistPanelRenderer>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistPanelRenderer {
    pub title: Option<String>,
    pub playlist_id: Option<String>,
    #[serde(default, deserialize_with = "crate::renderer::lenient::vec")]
    pub contents: Vec<ItemNode>,
    #[serde(default, deserialize_with = "crate::renderer::lenient::vec")]
    pub continuations: Vec<ContinuationHolder>,
}

impl PlaylistPanelRenderer {
    pub fn continuation(&self) -> Option<Continuation> {
        continuation_of(&self.continuations, &self.contents)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchNextContents {
    pub single_column_music_watch_next_results_renderer: Option<WatchNextResults>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchNextResults {
    pub tabbed_renderer: Option<WatchNextTabbed>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchNextTabbed {
    pub watch_next_tabbed_results_renderer: Option<TabbedResults>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentVideoEndpoint {
    pub watch_endpoint: Option<WatchEndpointNode>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NextResponse {
    #[serde(default, deserialize_with = "crate::renderer::lenient::opt")]
    pub contents: Option<WatchNextContents>,
    #[serde(default, deserialize_with = "crate::renderer::lenient::opt")]
    pub continuation_contents: Option<ContinuationContents>,
    #[serde(default, deserialize_with = "crate::renderer::lenient::opt")]
    pub current_video_endpoint: Option<CurrentVideoEndpoint>,
}

impl NextResponse {
    pub fn tabs(&self) -> &[Tab] {
        self.contents
            .as_ref()
            .and_then(|c| c.single_column_music_watch_next_results_renderer.as_ref())
            .and_then(|r| r.tabbed_renderer.as_ref())
            .and_then(|t| t.watch_next_tabbed_results_renderer.as_ref())
            .map(|t| t.tabs.as_slice())
            .unwrap_or_default()
    }

    pub fn queue(&self) -> Option<&PlaylistPanelRenderer> {
        if let Some(panel) = self
            .continuation_contents
            .as_ref()
            .and_then(|c| c.playlist_panel_continuation.as_ref())
        {
            return Some(panel);
        }
        self.tabs().iter().find_map(|t| {
            t.tab_renderer
                .as_ref()?
                .content
                .as_ref()?
                .music_queue_renderer
                .as_ref()?
                .content
                .as_ref()?
                .playlist_panel_renderer
                .as_ref()
        })
    }

    /// Browse endpoint of the side tab with the given page type, or the tab at
    /// `fallback_index` when page types are missing.
    pub fn tab_endpoint(&self, page_type: &str, fallback_index: usize) -> Option<&NavigationEndpoint> {
        let tabs = self.tabs();
        tabs.iter()
            .filter_map(|t| t.tab_renderer.as_ref()?.endpoint.as_ref())
            .find(|e| e.page_type() == Some(page_type))
            .or_else(|| {
                tabs.get(fallback_index)?
                    .tab_renderer
                    .as_ref()?
                    .endpoint
                    .as_ref()
                    .filter(|e| e.browse_id().is_some())
            })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchSuggestionsResponse {
    #[serde(default, deserialize_with = "crate::renderer::lenient::vec")]
    pub contents: Vec<SuggestionSection>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionSection {
    pub search_suggestions_section_renderer: Option<SuggestionSectionRenderer>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionSectionRenderer {
    #[serde(default, deserialize_with = "crate::renderer::lenient::vec")]
    pub contents: Vec<SuggestionNode>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionNode {
    pub search_suggestion_renderer: Option<SearchSuggestionRenderer>,
    #[serde(flatten)]
    pub item: ItemNode,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchSuggestionRenderer {
    pub suggestion: Option<Runs>,
    pub navigation_endpoint: Option<NavigationEndpoint>,
}

impl SearchSuggestionRenderer {
    pub fn query(&self) -> Option<String> {
        self.navigation_endpoint
            .as_ref()
            .and_then(|e| e.search_endpoint.as_ref())
            .and_then(|s| s.query.clone())
            .or_else(|| self.suggestion.as_ref()?.text())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountMenuResponse {
    #[serde(default, deserialize_with = "crate::renderer::lenient::vec")]
    pub actions: Vec<AccountMenuAction>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountMenuAction {
    pub open_popup_action: Option<OpenPopupAction>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenPopupAction {
    pub popup: Option<Popup>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Popup {
    pub multi_page_menu_renderer: Option<MultiPageMenuRenderer>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiPageMenuRenderer {
    pub header: Option<MultiPageMenuHeader>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiPageMenuHeader {
    pub active_account_header_renderer: Option<ActiveAccountHeaderRenderer>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveAccountHeaderRenderer {
    pub account_name: Option<Runs>,
    pub email: Option<Runs>,
    pub channel_handle: Option<Runs>,
    pub account_photo: Option<Thumbnails>,
}

impl AccountMenuResponse {
    pub fn active_account(&self) -> Option<&ActiveAccountHeaderRenderer> {
        self.actions.iter().find_map(|a| {
            a.open_popup_action
                .as_ref()?
                .popup
                .as_ref()?
                .multi_page_menu_renderer
                .as_ref()?
                .header
                .as_ref()?
                .active_account_header_renderer
                .as_ref()
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackResponse {
    #[serde(default, deserialize_with = "crate::renderer::lenient::vec")]
    pub feedback_responses: Vec<FeedbackResult>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackResult {
    #[serde(default)]
    pub is_processed: bool,
}

impl FeedbackResponse {
    /// `true` only when every submitted token was processed.
    pub fn all_processed(&self) -> bool {
        !self.feedback_responses.is_empty() && self.feedback_responses.iter().all(|r| r.is_processed)
    }
}
