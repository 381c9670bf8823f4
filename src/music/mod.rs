//! The public client: one method per upstream operation.

pub mod discovery;

use std::sync::Arc;

use futures::Stream;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use crate::{
    common::Result,
    configs::{Config, DiscoveryConfig},
    filters::FilterSet,
    innertube::{
        ClientIdentity, EndpointKind, InnerTubeTransport, RequestContext, SearchFilter, Transport,
    },
    models::{
        AccountInfo, AlbumItem, AlbumPage, ArtistPage, BrowseEndpoint, Continuation, EpisodeItem,
        ExplorePage, HomePage, Item, MoodAndGenres, NextResult, Page, PlayerResponse,
        PlaylistPage, PodcastPage, PodcastRef, RelatedPage, SearchResult, SearchSuggestions,
        SearchSummaryPage, Section, SongItem, WatchEndpoint,
    },
    pages::{account, album, artist, explore, home, library, next, playlist, podcast, search},
    pagination::{self, DEFAULT_MAX_STEPS},
    renderer::{AccountMenuResponse, BrowseResponse, FeedbackResponse, NextResponse, SearchResponse},
    resolver::BrowseIdHeuristics,
};

const HOME: &str = "FEmusic_home";
const EXPLORE: &str = "FEmusic_explore";
const CHARTS: &str = "FEmusic_charts";

/// YouTube Music over InnerTube.
///
/// Cheap to clone. [`YouTubeMusic::with_context`] returns a handle that
/// sends its requests with another locale, account or proxy.
#[derive(Clone)]
pub struct YouTubeMusic {
    transport: Arc<dyn Transport>,
    context: RequestContext,
    heuristics: Arc<BrowseIdHeuristics>,
    max_steps: usize,
    filters: FilterSet,
    discovery: DiscoveryConfig,
}

impl YouTubeMusic {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            context: RequestContext::default(),
            heuristics: Arc::new(BrowseIdHeuristics::default()),
            max_steps: DEFAULT_MAX_STEPS,
            filters: FilterSet::default(),
            discovery: DiscoveryConfig::default(),
        }
    }

    /// HTTP client configured from `config`.
    pub fn from_config(config: &Config) -> Self {
        let transport = Arc::new(InnerTubeTransport::from_config(&config.innertube));
        Self::with_transport(transport, config)
    }

    pub fn with_transport(transport: Arc<dyn Transport>, config: &Config) -> Self {
        Self {
            transport,
            context: RequestContext::from_config(&config.innertube),
            heuristics: Arc::new(config.heuristics.clone()),
            max_steps: config.pagination.max_steps,
            filters: FilterSet::from(config.filters.clone()),
            discovery: config.discovery.clone(),
        }
    }

    /// A handle sharing this client's transport but using `context`.
    pub fn with_context(&self, context: RequestContext) -> Self {
        Self {
            context,
            ..self.clone()
        }
    }

    pub fn with_filters(mut self, filters: FilterSet) -> Self {
        self.filters = filters;
        self
    }

    pub fn context(&self) -> &RequestContext {
        &self.context
    }

    pub fn filters(&self) -> FilterSet {
        self.filters
    }

    async fn call<T: DeserializeOwned>(&self, kind: EndpointKind, body: Value) -> Result<T> {
        self.call_as(kind, body, &self.context).await
    }

    async fn call_as<T: DeserializeOwned>(
        &self,
        kind: EndpointKind,
        body: Value,
        context: &RequestContext,
    ) -> Result<T> {
        let value = self.transport.request(kind, body, context).await?;
        Ok(serde_json::from_value(value)?)
    }

    async fn browse(&self, browse_id: &str, params: Option<&str>) -> Result<BrowseResponse> {
        let mut body = json!({ "browseId": browse_id });
        if let Some(params) = params {
            body["params"] = json!(params);
        }
        self.call(EndpointKind::Browse, body).await
    }

    async fn browse_endpoint(&self, endpoint: &BrowseEndpoint) -> Result<BrowseResponse> {
        self.browse(&endpoint.browse_id, endpoint.params.as_deref())
            .await
    }

    async fn browse_continuation(&self, token: &Continuation) -> Result<BrowseResponse> {
        self.call(
            EndpointKind::Browse,
            json!({ "continuation": token.as_str() }),
        )
        .await
    }

    fn filter_page(&self, page: Page<Item>) -> Page<Item> {
        Page {
            items: self.filters.apply(page.items),
            continuation: page.continuation,
        }
    }

    pub async fn search(&self, query: &str, filter: SearchFilter) -> Result<SearchResult> {
        let response: SearchResponse = self
            .call(
                EndpointKind::Search,
                json!({ "query": query, "params": filter.params() }),
            )
            .await?;
        let page = search::parse_search(&response, &self.heuristics)?;
        Ok(self.filter_page(page))
    }

    pub async fn search_continuation(&self, token: &Continuation) -> Result<SearchResult> {
        let response: SearchResponse = self
            .call(
                EndpointKind::Search,
                json!({ "continuation": token.as_str() }),
            )
            .await?;
        Ok(self.filter_page(search::parse_search_continuation(
            &response,
            &self.heuristics,
        )))
    }

    /// Unfiltered search: top result plus a few entries of every category.
    pub async fn search_summary(&self, query: &str) -> Result<SearchSummaryPage> {
        let response: SearchResponse = self
            .call(EndpointKind::Search, json!({ "query": query }))
            .await?;
        let page = search::parse_search_summary(&response, &self.heuristics)?;
        Ok(SearchSummaryPage {
            summaries: self.filters.apply_sections(page.summaries),
        })
    }

    pub async fn search_suggestions(&self, input: &str) -> Result<SearchSuggestions> {
        let response = self
            .call(EndpointKind::SearchSuggestions, json!({ "input": input }))
            .await?;
        let mut suggestions = search::parse_search_suggestions(&response, &self.heuristics);
        suggestions.items = self.filters.apply(suggestions.items);
        Ok(suggestions)
    }

    pub async fn album(&self, browse_id: &str) -> Result<AlbumPage> {
        let response = self.browse(browse_id, None).await?;
        let mut page = album::parse_album(&response, browse_id, &self.heuristics)?;
        page.songs = self.filters.apply_songs(page.songs);
        Ok(page)
    }

    pub async fn artist(&self, browse_id: &str) -> Result<ArtistPage> {
        let response = self.browse(browse_id, None).await?;
        let mut page = artist::parse_artist(&response, browse_id, &self.heuristics)?;
        page.sections = self.filters.apply_sections(page.sections);
        Ok(page)
    }

    /// The full listing behind an artist section's "More" button.
    pub async fn artist_items(&self, endpoint: &BrowseEndpoint) -> Result<Page<Item>> {
        let response = self.browse_endpoint(endpoint).await?;
        Ok(self.filter_page(artist::parse_artist_items(&response, &self.heuristics)))
    }

    pub async fn artist_items_continuation(&self, token: &Continuation) -> Result<Page<Item>> {
        let response = self.browse_continuation(token).await?;
        Ok(self.filter_page(artist::parse_artist_items_continuation(
            &response,
            &self.heuristics,
        )))
    }

    /// Accepts the id with or without its `VL` browse prefix.
    pub async fn playlist(&self, playlist_id: &str) -> Result<PlaylistPage> {
        let id = playlist_id.strip_prefix("VL").unwrap_or(playlist_id);
        let response = self.browse(&format!("VL{}", id), None).await?;
        let mut page = playlist::parse_playlist(&response, id, &self.heuristics)?;
        page.songs = self.filters.apply_songs(page.songs);
        Ok(page)
    }

    pub async fn playlist_continuation(&self, token: &Continuation) -> Result<Page<SongItem>> {
        let response = self.browse_continuation(token).await?;
        let page = playlist::parse_playlist_continuation(&response, &self.heuristics);
        Ok(Page {
            items: self.filters.apply_songs(page.items),
            continuation: page.continuation,
        })
    }

    /// Every track of a playlist, fetched page by page as the stream is polled.
    pub async fn playlist_songs(
        &self,
        playlist_id: &str,
    ) -> Result<impl Stream<Item = Result<SongItem>> + '_> {
        let first = self.playlist(playlist_id).await?;
        let initial = Page::new(first.songs, first.continuation);
        Ok(pagination::paginate(
            initial,
            move |token| async move { self.playlist_continuation(&token).await },
            self.max_steps,
        ))
    }

    pub async fn podcast(&self, browse_id: &str) -> Result<PodcastPage> {
        let response = self.browse(browse_id, None).await?;
        podcast::parse_podcast(&response, browse_id, &self.heuristics)
    }

    pub async fn podcast_continuation(
        &self,
        token: &Continuation,
        podcast: &PodcastRef,
    ) -> Result<Page<EpisodeItem>> {
        let response = self.browse_continuation(token).await?;
        Ok(podcast::parse_episodes_continuation(
            &response,
            podcast,
            &self.heuristics,
        ))
    }

    pub async fn home(&self) -> Result<HomePage> {
        let response = self.browse(HOME, None).await?;
        let mut page = home::parse_home(&response, &self.heuristics);
        page.sections = self.filters.apply_sections(page.sections);
        Ok(page)
    }

    /// The home feed narrowed to one of its chips.
    pub async fn home_chip(&self, endpoint: &BrowseEndpoint) -> Result<HomePage> {
        let response = self.browse_endpoint(endpoint).await?;
        let mut page = home::parse_home(&response, &self.heuristics);
        page.sections = self.filters.apply_sections(page.sections);
        Ok(page)
    }

    pub async fn home_continuation(&self, token: &Continuation) -> Result<HomePage> {
        let response = self.browse_continuation(token).await?;
        let mut page = home::parse_home_continuation(&response, &self.heuristics);
        page.sections = self.filters.apply_sections(page.sections);
        Ok(page)
    }

    pub async fn explore(&self) -> Result<ExplorePage> {
        let response = self.browse(EXPLORE, None).await?;
        let mut page = explore::parse_explore(&response, &self.heuristics);
        page.new_release_albums = self.keep_albums(page.new_release_albums);
        Ok(page)
    }

    pub async fn new_release_albums(&self) -> Result<Vec<AlbumItem>> {
        let response = self.browse(explore::NEW_RELEASE_ALBUMS, None).await?;
        Ok(self.keep_albums(explore::parse_new_release_albums(
            &response,
            &self.heuristics,
        )))
    }

    pub async fn mood_and_genres(&self) -> Result<Vec<MoodAndGenres>> {
        let response = self.browse(explore::MOODS_AND_GENRES, None).await?;
        Ok(explore::parse_mood_and_genres(&response))
    }

    /// The playlists and albums behind one mood or genre tile.
    pub async fn browse_sections(&self, endpoint: &BrowseEndpoint) -> Result<Vec<Section>> {
        let response = self.browse_endpoint(endpoint).await?;
        Ok(self
            .filters
            .apply_sections(explore::parse_charts(&response, &self.heuristics)))
    }

    pub async fn charts(&self) -> Result<Vec<Section>> {
        let response = self.browse(CHARTS, None).await?;
        Ok(self
            .filters
            .apply_sections(explore::parse_charts(&response, &self.heuristics)))
    }

    /// A library tab such as [`library::LIKED_SONGS`]. Needs a signed-in context.
    pub async fn library(&self, browse_id: &str) -> Result<Page<Item>> {
        let response = self.browse(browse_id, None).await?;
        Ok(self.filter_page(library::parse_library(&response, &self.heuristics)))
    }

    pub async fn library_continuation(&self, token: &Continuation) -> Result<Page<Item>> {
        let response = self.browse_continuation(token).await?;
        Ok(self.filter_page(library::parse_library_continuation(
            &response,
            &self.heuristics,
        )))
    }

    pub async fn history(&self) -> Result<Vec<Section>> {
        let response = self.browse(library::HISTORY, None).await?;
        Ok(self
            .filters
            .apply_sections(library::parse_history(&response, &self.heuristics)))
    }

    /// The watch queue for `endpoint`. Pass the returned `endpoint` and
    /// `continuation` back to fetch more of the queue.
    pub async fn next(
        &self,
        endpoint: &WatchEndpoint,
        continuation: Option<&Continuation>,
    ) -> Result<NextResult> {
        let mut body = json!({
            "isAudioOnly": true,
            "enablePersistentPlaylistPanel": true,
            "tunerSettingValue": "AUTOMIX_SETTING_NORMAL",
        });
        if let Some(video_id) = &endpoint.video_id {
            body["videoId"] = json!(video_id);
        }
        if let Some(playlist_id) = &endpoint.playlist_id {
            body["playlistId"] = json!(playlist_id);
        }
        if let Some(index) = endpoint.index {
            body["index"] = json!(index);
        }
        if let Some(params) = &endpoint.params {
            body["params"] = json!(params);
        }
        if let Some(token) = continuation {
            body["continuation"] = json!(token.as_str());
        }

        let response: NextResponse = self.call(EndpointKind::Next, body).await?;
        let mut result = next::parse_next(&response, endpoint, &self.heuristics);

        if !self.filters.is_noop() {
            let current_id = result
                .current_index
                .and_then(|i| result.items.get(i))
                .map(|s| s.id.clone());
            result.items = self.filters.apply_songs(result.items);
            result.current_index =
                current_id.and_then(|id| result.items.iter().position(|s| s.id == id));
        }
        Ok(result)
    }

    pub async fn lyrics(&self, endpoint: &BrowseEndpoint) -> Result<Option<String>> {
        let response = self.browse_endpoint(endpoint).await?;
        Ok(next::parse_lyrics(&response))
    }

    pub async fn related(&self, endpoint: &BrowseEndpoint) -> Result<RelatedPage> {
        let response = self.browse_endpoint(endpoint).await?;
        let mut page = next::parse_related(&response, &self.heuristics);
        page.songs = self.filters.apply_songs(page.songs);
        page.albums = self.keep_albums(page.albums);
        Ok(page)
    }

    /// Stream metadata for a video. Retries once as the iOS client when the
    /// default client gets an unplayable response.
    pub async fn player(&self, video_id: &str) -> Result<PlayerResponse> {
        let body = json!({
            "videoId": video_id,
            "contentCheckOk": true,
            "racyCheckOk": true,
        });
        let response: PlayerResponse = self.call(EndpointKind::Player, body.clone()).await?;
        if response.is_playable() || self.context.identity.is_some() {
            return Ok(response);
        }

        tracing::debug!(
            "Player response for {} is {} ({}), retrying as {}",
            video_id,
            response.playability_status.status,
            response.playability_status.reason.as_deref().unwrap_or("no reason"),
            ClientIdentity::IOS.name
        );
        let ios = self.context.clone().with_identity(&ClientIdentity::IOS);
        self.call_as(EndpointKind::Player, body, &ios).await
    }

    /// Sends library feedback tokens. `true` when every token was processed.
    pub async fn feedback(&self, tokens: &[String]) -> Result<bool> {
        let response: FeedbackResponse = self
            .call(EndpointKind::Feedback, json!({ "feedbackTokens": tokens }))
            .await?;
        Ok(response.all_processed())
    }

    pub async fn like_video(&self, video_id: &str, like: bool) -> Result<()> {
        let kind = if like {
            EndpointKind::Like
        } else {
            EndpointKind::RemoveLike
        };
        self.call::<Value>(kind, json!({ "target": { "videoId": video_id } }))
            .await?;
        Ok(())
    }

    /// `None` when the context is not signed in.
    pub async fn account_info(&self) -> Result<Option<AccountInfo>> {
        let response: AccountMenuResponse =
            self.call(EndpointKind::AccountMenu, json!({})).await?;
        Ok(account::parse_account(&response))
    }

    fn keep_albums(&self, albums: Vec<AlbumItem>) -> Vec<AlbumItem> {
        if !self.filters.hide_explicit {
            return albums;
        }
        albums.into_iter().filter(|a| !a.explicit).collect()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use futures::StreamExt;
    use serde_json::json;

    use super::*;
    use crate::{
        common::{Error, TransportError},
        innertube::scripted::ScriptedTransport,
        pages::fixtures,
    };

    pub(crate) fn client(transport: ScriptedTransport) -> (YouTubeMusic, Arc<ScriptedTransport>) {
        let transport = Arc::new(transport);
        (YouTubeMusic::new(transport.clone()), transport)
    }

    pub(crate) fn single_column(sections: serde_json::Value) -> serde_json::Value {
        json!({
            "contents": { "singleColumnBrowseResultsRenderer": { "tabs": [{ "tabRenderer": { "content": {
                "sectionListRenderer": { "contents": sections }
            } } }] } }
        })
    }

    fn playlist_response(tracks: serde_json::Value) -> serde_json::Value {
        json!({
            "header": { "musicDetailHeaderRenderer": { "title": fixtures::text("Mix") } },
            "contents": { "singleColumnBrowseResultsRenderer": { "tabs": [{ "tabRenderer": { "content": {
                "sectionListRenderer": { "contents": [{ "musicPlaylistShelfRenderer": { "contents": tracks } }] }
            } } }] } }
        })
    }

    fn continuation_response(tracks: serde_json::Value) -> serde_json::Value {
        json!({
            "onResponseReceivedActions": [{ "appendContinuationItemsAction": { "continuationItems": tracks } }]
        })
    }

    #[tokio::test]
    async fn test_home_omits_empty_sections() {
        let (music, _) = client(ScriptedTransport::new().on(
            EndpointKind::Browse,
            HOME,
            single_column(json!([
                fixtures::carousel("Quick picks", json!([fixtures::song_row("s1", "One")])),
                fixtures::carousel("Broken", json!([{ "musicTwoRowItemRenderer": { "title": fixtures::text("no link") } }]))
            ])),
        ));

        let page = music.home().await.expect("home page");
        assert_eq!(page.sections.len(), 1);
        assert_eq!(page.sections[0].title, "Quick picks");
    }

    #[tokio::test]
    async fn test_playlist_songs_stops_on_phantom_continuation() {
        let (music, transport) = client(
            ScriptedTransport::new()
                .on(
                    EndpointKind::Browse,
                    "VLPLmix",
                    playlist_response(json!([
                        fixtures::song_row("s1", "One"),
                        fixtures::song_row("s2", "Two"),
                        fixtures::continuation_item("p2")
                    ])),
                )
                .on(
                    EndpointKind::Browse,
                    "p2",
                    continuation_response(json!([
                        fixtures::song_row("s3", "Three"),
                        fixtures::continuation_item("p3")
                    ])),
                )
                .on(
                    EndpointKind::Browse,
                    "p3",
                    continuation_response(json!([fixtures::continuation_item("p4")])),
                ),
        );

        let songs: Vec<SongItem> = music
            .playlist_songs("PLmix")
            .await
            .expect("first page")
            .map(|s| s.expect("song"))
            .collect()
            .await;

        assert_eq!(
            songs.iter().map(|s| s.id.as_str()).collect::<Vec<_>>(),
            vec!["s1", "s2", "s3"]
        );
        assert_eq!(transport.call_count(EndpointKind::Browse), 3);
    }

    #[tokio::test]
    async fn test_playlist_songs_surfaces_fetch_error_once() {
        let (music, _) = client(
            ScriptedTransport::new()
                .on(
                    EndpointKind::Browse,
                    "VLPLmix",
                    playlist_response(json!([
                        fixtures::song_row("s1", "One"),
                        fixtures::continuation_item("p2")
                    ])),
                )
                .fail(EndpointKind::Browse, "p2", 503),
        );

        let results: Vec<Result<SongItem>> = music
            .playlist_songs("VLPLmix")
            .await
            .expect("first page")
            .collect()
            .await;

        assert_eq!(results.len(), 2);
        assert!(results[0].is_ok());
        assert!(matches!(
            &results[1],
            Err(Error::Transport(e)) if e.is_status(503)
        ));
    }

    #[tokio::test]
    async fn test_search_applies_filters() {
        let mut explicit = fixtures::song_row("e1", "Explicit");
        explicit["musicResponsiveListItemRenderer"]["badges"] = json!([
            { "musicInlineBadgeRenderer": { "icon": { "iconType": "MUSIC_EXPLICIT_BADGE" } } }
        ]);
        let response = json!({ "contents": { "tabbedSearchResultsRenderer": { "tabs": [{
            "tabRenderer": { "content": { "sectionListRenderer": { "contents": [
                { "musicShelfRenderer": { "contents": [explicit, fixtures::song_row("c1", "Clean")] } }
            ] } } }
        }] } } });
        let (music, transport) = client(ScriptedTransport::new().on(EndpointKind::Search, "daft", response));
        let music = music.with_filters(FilterSet {
            hide_explicit: true,
            ..FilterSet::default()
        });

        let page = music.search("daft", SearchFilter::Songs).await.expect("search");
        assert_eq!(page.items.iter().map(Item::id).collect::<Vec<_>>(), vec!["c1"]);
        let (_, body) = &transport.calls()[0];
        assert_eq!(body["params"], SearchFilter::Songs.params());
    }

    #[tokio::test]
    async fn test_player_retries_as_ios_when_unplayable() {
        let (music, transport) = client(ScriptedTransport::new().on(
            EndpointKind::Player,
            "vid",
            json!({ "playabilityStatus": { "status": "UNPLAYABLE", "reason": "Not available" } }),
        ));

        let response = music.player("vid").await.expect("player response");
        assert!(!response.is_playable());
        assert_eq!(transport.call_count(EndpointKind::Player), 2);
    }

    #[tokio::test]
    async fn test_player_playable_needs_one_call() {
        let (music, transport) = client(ScriptedTransport::new().on(
            EndpointKind::Player,
            "vid",
            json!({ "playabilityStatus": { "status": "OK" } }),
        ));
        assert!(music.player("vid").await.expect("player").is_playable());
        assert_eq!(transport.call_count(EndpointKind::Player), 1);
    }

    #[tokio::test]
    async fn test_feedback_and_like() {
        let (music, transport) = client(
            ScriptedTransport::new()
                .on(
                    EndpointKind::Feedback,
                    "",
                    json!({ "feedbackResponses": [{ "isProcessed": true }] }),
                )
                .on(EndpointKind::RemoveLike, "", json!({})),
        );

        assert!(music.feedback(&["tok".to_string()]).await.expect("feedback"));
        music.like_video("vid", false).await.expect("remove like");
        assert_eq!(transport.call_count(EndpointKind::RemoveLike), 1);

        let err = music.like_video("vid", true).await.unwrap_err();
        assert!(matches!(
            err,
            Error::Transport(TransportError::HttpStatus { status: 404, .. })
        ));
    }

    #[test]
    fn test_with_context_is_scoped() {
        let (music, _) = client(ScriptedTransport::new());
        let german = music.with_context(RequestContext::default().with_locale("de", "DE"));
        assert_eq!(german.context().hl, "de");
        assert_eq!(music.context().hl, "en");
    }

    #[tokio::test]
    async fn test_next_sends_continuation_with_endpoint() {
        let (music, transport) = client(ScriptedTransport::new().on(
            EndpointKind::Next,
            "queue-2",
            json!({ "continuationContents": { "playlistPanelContinuation": { "contents": [
                { "playlistPanelVideoRenderer": {
                    "videoId": "q3",
                    "title": fixtures::text("Three"),
                    "thumbnail": { "thumbnails": [{ "url": "https://img/q3" }] }
                } }
            ] } } }),
        ));

        let endpoint = WatchEndpoint::playlist("RDAMVMa", None);
        let result = music
            .next(&endpoint, Some(&Continuation::new("queue-2")))
            .await
            .expect("next");
        assert_eq!(result.items.len(), 1);
        assert!(result.continuation.is_none());

        let (_, body) = &transport.calls()[0];
        assert_eq!(body["playlistId"], "RDAMVMa");
        assert_eq!(body["continuation"], "queue-2");
    }
}
