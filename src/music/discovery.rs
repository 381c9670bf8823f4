//! Recommendations merged from many upstream calls.

use std::collections::HashSet;

use rand::seq::SliceRandom;

use crate::{
    aggregation::{AggregateOptions, aggregate, dedupe_by},
    common::Result,
    models::{BrowseEndpoint, Item, PlaylistItem, WatchEndpoint},
};

use super::YouTubeMusic;

#[derive(Debug, Clone)]
enum PlaylistSeed {
    Artist(String),
    Song(String),
}

impl YouTubeMusic {
    fn aggregate_options(&self) -> AggregateOptions {
        AggregateOptions::from_config(&self.discovery, self.filters)
    }

    /// Up to `seed_limit` ids, drawn at random from the whole pool when
    /// shuffling is on and from its head otherwise.
    fn pick_seeds(&self, pool: &[String]) -> Vec<String> {
        let mut seeds = pool.to_vec();
        if self.discovery.shuffle {
            seeds.shuffle(&mut rand::thread_rng());
        }
        seeds.truncate(self.discovery.seed_limit);
        seeds
    }

    /// Related tab of the watch page opened on `video_id`.
    async fn related_endpoint_of(&self, video_id: &str) -> Result<Option<BrowseEndpoint>> {
        let next = self.next(&WatchEndpoint::video(video_id), None).await?;
        if next.related_endpoint.is_none() {
            tracing::debug!("No related tab for {}", video_id);
        }
        Ok(next.related_endpoint)
    }

    async fn related_songs_of(&self, video_id: &str) -> Result<Vec<Item>> {
        let Some(endpoint) = self.related_endpoint_of(video_id).await? else {
            return Ok(Vec::new());
        };
        let related = self.related(&endpoint).await?;
        Ok(related.songs.into_iter().map(Item::Song).collect())
    }

    async fn playlist_candidates(&self, seed: PlaylistSeed) -> Result<Vec<Item>> {
        match seed {
            PlaylistSeed::Artist(id) => {
                let page = self.artist(&id).await?;
                Ok(page
                    .sections
                    .into_iter()
                    .flat_map(|s| s.items)
                    .filter(|i| matches!(i, Item::Playlist(_)))
                    .collect())
            }
            PlaylistSeed::Song(id) => {
                let Some(endpoint) = self.related_endpoint_of(&id).await? else {
                    return Ok(Vec::new());
                };
                let related = self.related(&endpoint).await?;
                Ok(related.playlists.into_iter().map(Item::Playlist).collect())
            }
        }
    }

    /// Keeps the playlist only if its first page has at least one track.
    async fn non_empty_playlist(&self, playlist: PlaylistItem) -> Result<Vec<Item>> {
        let page = self.playlist(&playlist.id).await?;
        if page.songs.is_empty() {
            tracing::debug!("Skipping empty playlist {}", playlist.id);
            return Ok(Vec::new());
        }
        Ok(vec![Item::Playlist(playlist)])
    }

    /// Songs related to up to `seed_limit` liked songs. Liked songs never
    /// come back as suggestions.
    pub async fn daily_discover(&self, liked_song_ids: &[String]) -> Vec<Item> {
        let seeds = self.pick_seeds(liked_song_ids);
        let excluded: HashSet<&str> = liked_song_ids.iter().map(String::as_str).collect();

        let items = aggregate(
            seeds,
            |id: String| async move { self.related_songs_of(&id).await },
            Item::key,
            self.aggregate_options(),
        )
        .await;

        items
            .into_iter()
            .filter(|i| !excluded.contains(i.id()))
            .collect()
    }

    /// Playlists from the top artists' pages and from songs related to the
    /// top songs. Every candidate is fetched once more and dropped if empty.
    pub async fn community_playlists(
        &self,
        top_artist_ids: &[String],
        top_song_ids: &[String],
    ) -> Vec<Item> {
        let seeds: Vec<PlaylistSeed> = self
            .pick_seeds(top_artist_ids)
            .into_iter()
            .map(PlaylistSeed::Artist)
            .chain(self.pick_seeds(top_song_ids).into_iter().map(PlaylistSeed::Song))
            .collect();

        let candidates: Vec<PlaylistItem> = aggregate(
            seeds,
            |seed| async move { self.playlist_candidates(seed).await },
            Item::key,
            self.aggregate_options(),
        )
        .await
        .into_iter()
        .filter_map(Item::into_playlist)
        .take(self.discovery.playlist_limit)
        .collect();

        aggregate(
            candidates,
            |playlist| async move { self.non_empty_playlist(playlist).await },
            Item::key,
            self.aggregate_options(),
        )
        .await
    }

    /// Every item of a related page as one list, songs first.
    pub async fn related_items(&self, endpoint: &BrowseEndpoint) -> Result<Vec<Item>> {
        let related = self.related(endpoint).await?;
        let items = related
            .songs
            .into_iter()
            .map(Item::Song)
            .chain(related.albums.into_iter().map(Item::Album))
            .chain(related.artists.into_iter().map(Item::Artist))
            .chain(related.playlists.into_iter().map(Item::Playlist))
            .collect();
        Ok(dedupe_by(items, Item::key))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{
        innertube::{EndpointKind, scripted::ScriptedTransport},
        music::tests::{client, single_column},
        pages::fixtures,
    };

    fn watch_next_with_related(related_id: &str) -> serde_json::Value {
        json!({
            "contents": { "singleColumnMusicWatchNextResultsRenderer": { "tabbedRenderer": {
                "watchNextTabbedResultsRenderer": { "tabs": [
                    { "tabRenderer": { "content": { "musicQueueRenderer": {} } } },
                    { "tabRenderer": {} },
                    { "tabRenderer": { "endpoint": { "browseEndpoint": {
                        "browseId": related_id,
                        "browseEndpointContextSupportedConfigs": { "browseEndpointContextMusicConfig": { "pageType": "MUSIC_PAGE_TYPE_TRACK_RELATED" } }
                    } } } }
                ] }
            } } }
        })
    }

    fn playlist_tile(id: &str, title: &str) -> serde_json::Value {
        json!({ "musicTwoRowItemRenderer": {
            "title": fixtures::text(title),
            "navigationEndpoint": fixtures::browse(&format!("VL{}", id), "MUSIC_PAGE_TYPE_PLAYLIST"),
            "thumbnailRenderer": fixtures::thumbnail(&format!("https://img/{}", id))
        } })
    }

    fn playlist_page(tracks: serde_json::Value) -> serde_json::Value {
        json!({
            "header": { "musicDetailHeaderRenderer": { "title": fixtures::text("Playlist") } },
            "contents": { "singleColumnBrowseResultsRenderer": { "tabs": [{ "tabRenderer": { "content": {
                "sectionListRenderer": { "contents": [{ "musicPlaylistShelfRenderer": { "contents": tracks } }] }
            } } }] } }
        })
    }

    #[tokio::test]
    async fn test_daily_discover_isolates_failures_and_excludes_seeds() {
        let (music, _) = client(
            ScriptedTransport::new()
                .on(EndpointKind::Next, "a", watch_next_with_related("MPTRt_a"))
                .on(
                    EndpointKind::Browse,
                    "MPTRt_a",
                    single_column(json!([fixtures::carousel("You might also like", json!([
                        fixtures::song_row("x", "X"),
                        fixtures::song_row("b", "B"),
                        fixtures::song_row("y", "Y")
                    ]))])),
                )
                .fail(EndpointKind::Next, "b", 500),
        );

        let mut ids: Vec<String> = music
            .daily_discover(&["a".to_string(), "b".to_string()])
            .await
            .iter()
            .map(|i| i.id().to_string())
            .collect();
        ids.sort();
        assert_eq!(ids, vec!["x", "y"]);
    }

    fn seed_pool(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("seed{}", i)).collect()
    }

    fn queried_seeds(transport: &ScriptedTransport) -> HashSet<String> {
        transport
            .calls()
            .iter()
            .filter(|(kind, _)| *kind == EndpointKind::Next)
            .filter_map(|(_, body)| body["videoId"].as_str().map(str::to_string))
            .collect()
    }

    #[tokio::test]
    async fn test_daily_discover_draws_seeds_from_whole_pool() {
        let (music, transport) = client(ScriptedTransport::new());
        let liked = seed_pool(10);

        for _ in 0..30 {
            music.daily_discover(&liked).await;
        }

        let queried = queried_seeds(&transport);
        assert_eq!(transport.call_count(EndpointKind::Next), 30 * 5);
        assert!(queried.len() > 5, "only {:?} were used", queried);
    }

    #[tokio::test]
    async fn test_daily_discover_without_shuffle_uses_pool_head() {
        let (music, transport) = client(ScriptedTransport::new());
        let mut discovery = music.discovery.clone();
        discovery.shuffle = false;
        let music = YouTubeMusic { discovery, ..music };

        music.daily_discover(&seed_pool(10)).await;

        let expected: HashSet<String> = seed_pool(5).into_iter().collect();
        assert_eq!(queried_seeds(&transport), expected);
    }

    #[tokio::test]
    async fn test_daily_discover_all_failing_is_empty() {
        let (music, _) = client(ScriptedTransport::new());
        assert!(music.daily_discover(&["a".to_string()]).await.is_empty());
    }

    #[tokio::test]
    async fn test_community_playlists_drop_empty_candidates() {
        let artist_page = json!({
            "header": { "musicImmersiveHeaderRenderer": { "title": fixtures::text("Artist") } },
            "contents": { "singleColumnBrowseResultsRenderer": { "tabs": [{ "tabRenderer": { "content": {
                "sectionListRenderer": { "contents": [
                    fixtures::carousel("Featured on", json!([
                        playlist_tile("PLfull", "Full"),
                        playlist_tile("PLempty", "Empty")
                    ]))
                ] }
            } } }] } }
        });
        let (music, transport) = client(
            ScriptedTransport::new()
                .on(EndpointKind::Browse, "UCartist", artist_page)
                .on(EndpointKind::Next, "s1", watch_next_with_related("MPTRt_s1"))
                .on(
                    EndpointKind::Browse,
                    "MPTRt_s1",
                    single_column(json!([fixtures::carousel("Playlists", json!([
                        playlist_tile("PLfull", "Full again")
                    ]))])),
                )
                .on(
                    EndpointKind::Browse,
                    "VLPLfull",
                    playlist_page(json!([fixtures::song_row("t1", "Track")])),
                )
                .on(EndpointKind::Browse, "VLPLempty", playlist_page(json!([]))),
        );

        let playlists = music
            .community_playlists(&["UCartist".to_string()], &["s1".to_string()])
            .await;
        assert_eq!(playlists.len(), 1);
        assert_eq!(playlists[0].id(), "PLfull");

        let fetched = transport
            .calls()
            .iter()
            .filter(|(_, body)| body["browseId"].as_str().is_some_and(|id| id.starts_with("VLPL")))
            .count();
        assert_eq!(fetched, 2);
    }

    #[tokio::test]
    async fn test_related_items_flatten_by_kind() {
        let (music, _) = client(ScriptedTransport::new().on(
            EndpointKind::Browse,
            "MPTRt_1",
            single_column(json!([
                fixtures::carousel("Songs", json!([fixtures::song_row("s1", "One")])),
                fixtures::carousel("Albums", json!([fixtures::album_card("MPREb_1", "Album")]))
            ])),
        ));

        let items = music
            .related_items(&BrowseEndpoint::new("MPTRt_1"))
            .await
            .expect("related items");
        assert_eq!(items.iter().map(Item::id).collect::<Vec<_>>(), vec!["s1", "MPREb_1"]);
    }
}
