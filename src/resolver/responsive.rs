use crate::{
    models::{
        AlbumItem, ArtistItem, EpisodeItem, Item, PlaylistItem, PodcastItem, SongItem,
        WatchEndpoint,
    },
    renderer::{MusicResponsiveListItemRenderer, NavigationEndpoint, has_explicit_badge},
};

use super::{
    MenuExtras, ResolutionContext, browse_id,
    fallback::{Extractor, first_of, first_text_of},
    heuristics::playlist_id_from_browse_id,
    kind::{Capabilities, NodeKind},
    subtitle::SubtitleParts,
    text::parse_duration,
    watch_playlist_id, watch_video_id,
};

type Node = MusicResponsiveListItemRenderer;

fn title_endpoint(r: &Node) -> Option<&NavigationEndpoint> {
    r.flex_text(0)?.runs.first()?.navigation_endpoint.as_ref()
}

fn overlay_endpoint(r: &Node) -> Option<&NavigationEndpoint> {
    r.overlay.as_ref()?.play_endpoint()
}

/// Row endpoint first, then the title run, then the play button.
fn capabilities(r: &Node, ctx: &ResolutionContext<'_>) -> Capabilities {
    let row = Capabilities::of(r.navigation_endpoint.as_ref(), ctx.heuristics);
    if !row.is_empty() {
        return row;
    }
    let title = Capabilities::of(title_endpoint(r), ctx.heuristics);
    if !title.is_empty() {
        return title;
    }
    let overlay = Capabilities::of(overlay_endpoint(r), ctx.heuristics);
    if !overlay.is_empty() {
        return overlay;
    }
    let has_video = r
        .playlist_item_data
        .as_ref()
        .and_then(|d| d.video_id.as_ref())
        .is_some();
    if has_video {
        Capabilities::default().with_song()
    } else {
        Capabilities::default()
    }
}

fn title_text(r: &Node) -> Option<String> {
    r.flex_text(0)?.text()
}

fn title_first_run(r: &Node) -> Option<String> {
    r.flex_text(0)?.first_text().map(str::to_string)
}

const TITLE: &[Extractor<Node, String>] = &[title_text, title_first_run];

fn item_data_video_id(r: &Node) -> Option<String> {
    r.playlist_item_data
        .as_ref()?
        .video_id
        .clone()
        .filter(|id| !id.trim().is_empty())
}

fn title_video_id(r: &Node) -> Option<String> {
    watch_video_id(title_endpoint(r))
}

fn overlay_video_id(r: &Node) -> Option<String> {
    watch_video_id(overlay_endpoint(r))
}

fn nav_video_id(r: &Node) -> Option<String> {
    watch_video_id(r.navigation_endpoint.as_ref())
}

const VIDEO_ID: &[Extractor<Node, String>] =
    &[item_data_video_id, title_video_id, overlay_video_id, nav_video_id];

fn nav_browse_id(r: &Node) -> Option<String> {
    browse_id(r.navigation_endpoint.as_ref())
}

fn title_browse_id(r: &Node) -> Option<String> {
    browse_id(title_endpoint(r))
}

const BROWSE_ID: &[Extractor<Node, String>] = &[nav_browse_id, title_browse_id];

fn music_thumbnail(r: &Node) -> Option<String> {
    r.thumbnail.as_ref()?.music_thumbnail().map(str::to_string)
}

fn cropped_thumbnail(r: &Node) -> Option<String> {
    r.thumbnail.as_ref()?.cropped_square().map(str::to_string)
}

const THUMBNAIL: &[Extractor<Node, String>] = &[music_thumbnail, cropped_thumbnail];

fn fixed_duration(r: &Node) -> Option<u32> {
    parse_duration(&r.fixed_text(0)?.text()?)
}

fn watch_endpoint_of(r: &Node) -> Option<&NavigationEndpoint> {
    [title_endpoint(r), overlay_endpoint(r), r.navigation_endpoint.as_ref()]
        .into_iter()
        .flatten()
        .find(|e| e.watch_endpoint.is_some())
}

pub fn resolve(r: &Node, ctx: &ResolutionContext<'_>) -> Option<Item> {
    let caps = capabilities(r, ctx);
    let title = first_text_of(r, TITLE)?;
    let thumbnail = first_of(r, THUMBNAIL).or_else(|| ctx.thumbnail.clone())?;
    let subtitle = SubtitleParts::parse(
        r.flex_texts().skip(1).flat_map(|t| t.runs.iter()),
        ctx.heuristics,
    );
    let menu = MenuExtras::of(r.menu.as_ref());
    let explicit = has_explicit_badge(&r.badges);

    let item = match caps.kind()? {
        NodeKind::Song => {
            let id = first_of(r, VIDEO_ID)?;
            let watch = watch_endpoint_of(r);
            let artists = if !subtitle.artists.is_empty() {
                subtitle.artists.clone()
            } else if !ctx.artists.is_empty() {
                ctx.artists.clone()
            } else {
                subtitle.artists_or_names()
            };
            Item::Song(SongItem {
                title,
                thumbnail: Some(thumbnail),
                artists,
                album: subtitle.album.clone().or_else(|| ctx.album.clone()),
                duration: fixed_duration(r).or(subtitle.duration),
                explicit,
                video_type: watch.and_then(NavigationEndpoint::music_video_type),
                endpoint: watch
                    .and_then(NavigationEndpoint::any_watch_endpoint)
                    .or_else(|| Some(WatchEndpoint::video(id.clone()))),
                set_video_id: r
                    .playlist_item_data
                    .as_ref()
                    .and_then(|d| d.playlist_set_video_id.clone()),
                library_add_token: menu.library.add,
                library_remove_token: menu.library.remove,
                id,
            })
        }
        NodeKind::Album => Item::Album(AlbumItem {
            id: first_of(r, BROWSE_ID)?,
            title,
            thumbnail: Some(thumbnail),
            playlist_id: watch_playlist_id(overlay_endpoint(r)),
            artists: subtitle.artists.clone(),
            year: subtitle.year,
            explicit,
        }),
        NodeKind::Playlist => Item::Playlist(PlaylistItem {
            id: playlist_id_from_browse_id(&first_of(r, BROWSE_ID)?).to_string(),
            title,
            thumbnail: Some(thumbnail),
            author: subtitle.artists_or_names().into_iter().next(),
            song_count_text: subtitle.stat(&["song", "track"]),
            play_endpoint: overlay_endpoint(r).and_then(NavigationEndpoint::any_watch_endpoint),
            shuffle_endpoint: menu.shuffle,
            radio_endpoint: menu.radio,
            is_editable: false,
        }),
        kind @ (NodeKind::Artist | NodeKind::Channel) => Item::Artist(ArtistItem {
            id: first_of(r, BROWSE_ID)?,
            title,
            thumbnail: Some(thumbnail),
            subscribers: subtitle.stat(&["subscriber", "audience", "listener"]),
            shuffle_endpoint: menu.shuffle,
            radio_endpoint: menu.radio,
            is_channel: kind == NodeKind::Channel,
        }),
        NodeKind::Podcast => Item::Podcast(PodcastItem {
            id: first_of(r, BROWSE_ID)?,
            title,
            thumbnail: Some(thumbnail),
            author: subtitle.artists_or_names().into_iter().next(),
            library_add_token: menu.library.add,
            library_remove_token: menu.library.remove,
        }),
        NodeKind::Episode => {
            let watch = watch_endpoint_of(r);
            Item::Episode(EpisodeItem {
                id: first_of(r, VIDEO_ID)?,
                title,
                thumbnail: Some(thumbnail),
                podcast: subtitle.podcast.clone(),
                published: subtitle.unlinked_names().next().map(str::to_string),
                duration: fixed_duration(r).or(subtitle.duration),
                endpoint: watch.and_then(NavigationEndpoint::any_watch_endpoint),
            })
        }
    };

    Some(item)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::AlbumRef,
        resolver::{BrowseIdHeuristics, fixtures},
    };
    use serde_json::json;

    fn node(value: serde_json::Value) -> Node {
        serde_json::from_value(value).expect("valid renderer")
    }

    fn flex(runs: serde_json::Value) -> serde_json::Value {
        json!({ "musicResponsiveListItemFlexColumnRenderer": { "text": { "runs": runs } } })
    }

    #[test]
    fn test_search_song_row() {
        let h = BrowseIdHeuristics::default();
        let ctx = ResolutionContext::new(&h);
        let r = node(json!({
            "flexColumns": [
                flex(json!([{ "text": "Get Lucky", "navigationEndpoint": fixtures::watch("gl1", "MUSIC_VIDEO_TYPE_OMV") }])),
                flex(json!([
                    { "text": "Song" }, { "text": " • " },
                    { "text": "Daft Punk", "navigationEndpoint": { "browseEndpoint": { "browseId": "UCdp" } } },
                    { "text": " • " },
                    { "text": "Random Access Memories", "navigationEndpoint": { "browseEndpoint": { "browseId": "MPREb_ram" } } },
                    { "text": " • " }, { "text": "6:09" }
                ]))
            ],
            "thumbnail": fixtures::thumbnail("https://img/gl"),
            "badges": [{ "musicInlineBadgeRenderer": { "icon": { "iconType": "MUSIC_EXPLICIT_BADGE" } } }]
        }));

        let song = resolve(&r, &ctx).and_then(Item::into_song).expect("song");
        assert_eq!(song.id, "gl1");
        assert_eq!(song.title, "Get Lucky");
        assert_eq!(song.artists.len(), 1);
        assert_eq!(song.album.as_ref().map(|a| a.id.as_str()), Some("MPREb_ram"));
        assert_eq!(song.duration, Some(369));
        assert!(song.explicit);
        assert!(song.is_video());
    }

    #[test]
    fn test_album_track_row_inherits_page_defaults() {
        let h = BrowseIdHeuristics::default();
        let ctx = ResolutionContext::new(&h)
            .with_album(Some(AlbumRef {
                name: "Discovery".to_string(),
                id: "MPREb_disc".to_string(),
            }))
            .with_thumbnail(Some("https://img/disc".to_string()));
        let r = node(json!({
            "flexColumns": [flex(json!([{ "text": "Aerodynamic" }]))],
            "fixedColumns": [{ "musicResponsiveListItemFixedColumnRenderer": { "text": { "runs": [{ "text": "3:27" }] } } }],
            "playlistItemData": { "videoId": "aero" }
        }));

        let song = resolve(&r, &ctx).and_then(Item::into_song).expect("song");
        assert_eq!(song.id, "aero");
        assert_eq!(song.thumbnail.as_deref(), Some("https://img/disc"));
        assert_eq!(song.album.as_ref().map(|a| a.name.as_str()), Some("Discovery"));
        assert_eq!(song.duration, Some(207));
        assert_eq!(song.endpoint, Some(WatchEndpoint::video("aero")));
    }

    #[test]
    fn test_row_without_title_is_dropped() {
        let h = BrowseIdHeuristics::default();
        let ctx = ResolutionContext::new(&h);
        let r = node(json!({
            "flexColumns": [],
            "thumbnail": fixtures::thumbnail("https://img/x"),
            "playlistItemData": { "videoId": "x" }
        }));
        assert!(resolve(&r, &ctx).is_none());
    }

    #[test]
    fn test_artist_row() {
        let h = BrowseIdHeuristics::default();
        let ctx = ResolutionContext::new(&h);
        let r = node(json!({
            "flexColumns": [
                flex(json!([{ "text": "Daft Punk" }])),
                flex(json!([{ "text": "Artist" }, { "text": " • " }, { "text": "9.1M subscribers" }]))
            ],
            "navigationEndpoint": fixtures::browse("UCdp", "MUSIC_PAGE_TYPE_ARTIST"),
            "thumbnail": fixtures::thumbnail("https://img/dp")
        }));

        let artist = resolve(&r, &ctx).and_then(Item::into_artist).expect("artist");
        assert_eq!(artist.id, "UCdp");
        assert!(!artist.is_channel);
        assert_eq!(artist.subscribers.as_deref(), Some("9.1M subscribers"));
    }
}
