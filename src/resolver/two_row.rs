use crate::{
    models::{AlbumItem, ArtistItem, EpisodeItem, Item, PlaylistItem, PodcastItem, SongItem},
    renderer::{MusicTwoRowItemRenderer, has_explicit_badge},
};

use super::{
    MenuExtras, ResolutionContext, browse_id,
    fallback::{Extractor, first_of, first_text_of},
    heuristics::playlist_id_from_browse_id,
    kind::{Capabilities, NodeKind},
    subtitle::SubtitleParts,
    watch_playlist_id, watch_video_id,
};

type Node = MusicTwoRowItemRenderer;

fn title_text(r: &Node) -> Option<String> {
    r.title.as_ref()?.text()
}

fn title_first_run(r: &Node) -> Option<String> {
    r.title.as_ref()?.first_text().map(str::to_string)
}

const TITLE: &[Extractor<Node, String>] = &[title_text, title_first_run];

fn music_thumbnail(r: &Node) -> Option<String> {
    r.thumbnail_renderer.as_ref()?.music_thumbnail().map(str::to_string)
}

fn cropped_thumbnail(r: &Node) -> Option<String> {
    r.thumbnail_renderer.as_ref()?.cropped_square().map(str::to_string)
}

fn animated_thumbnail(r: &Node) -> Option<String> {
    r.thumbnail_renderer.as_ref()?.animated_backup().map(str::to_string)
}

const THUMBNAIL: &[Extractor<Node, String>] =
    &[music_thumbnail, cropped_thumbnail, animated_thumbnail];

fn nav_video_id(r: &Node) -> Option<String> {
    watch_video_id(r.navigation_endpoint.as_ref())
}

fn overlay_video_id(r: &Node) -> Option<String> {
    watch_video_id(r.thumbnail_overlay.as_ref()?.play_endpoint())
}

const VIDEO_ID: &[Extractor<Node, String>] = &[nav_video_id, overlay_video_id];

fn nav_browse_id(r: &Node) -> Option<String> {
    browse_id(r.navigation_endpoint.as_ref())
}

fn title_browse_id(r: &Node) -> Option<String> {
    r.title
        .as_ref()?
        .runs
        .first()?
        .browse_id()
        .map(str::to_string)
}

const BROWSE_ID: &[Extractor<Node, String>] = &[nav_browse_id, title_browse_id];

fn overlay_playlist_id(r: &Node) -> Option<String> {
    watch_playlist_id(r.thumbnail_overlay.as_ref()?.play_endpoint())
}

fn shuffle_playlist_id(r: &Node) -> Option<String> {
    r.menu
        .as_ref()?
        .renderer()?
        .shuffle_endpoint()?
        .playlist_id
}

const ALBUM_PLAYLIST_ID: &[Extractor<Node, String>] = &[overlay_playlist_id, shuffle_playlist_id];

pub fn resolve(r: &Node, ctx: &ResolutionContext<'_>) -> Option<Item> {
    let caps = Capabilities::of(r.navigation_endpoint.as_ref(), ctx.heuristics);
    let title = first_text_of(r, TITLE)?;
    let thumbnail = first_of(r, THUMBNAIL).or_else(|| ctx.thumbnail.clone())?;
    let subtitle = r
        .subtitle
        .as_ref()
        .map(|s| SubtitleParts::parse(&s.runs, ctx.heuristics))
        .unwrap_or_default();
    let menu = MenuExtras::of(r.menu.as_ref());
    let explicit = has_explicit_badge(&r.subtitle_badges);

    let item = match caps.kind()? {
        NodeKind::Song => Item::Song(SongItem {
            id: first_of(r, VIDEO_ID)?,
            title,
            thumbnail: Some(thumbnail),
            artists: if subtitle.artists.is_empty() {
                ctx.artists.clone()
            } else {
                subtitle.artists.clone()
            },
            album: subtitle.album.clone().or_else(|| ctx.album.clone()),
            duration: subtitle.duration,
            explicit,
            video_type: r
                .navigation_endpoint
                .as_ref()
                .and_then(|e| e.music_video_type()),
            endpoint: r
                .navigation_endpoint
                .as_ref()
                .and_then(|e| e.any_watch_endpoint()),
            set_video_id: None,
            library_add_token: menu.library.add,
            library_remove_token: menu.library.remove,
        }),
        NodeKind::Album => Item::Album(AlbumItem {
            id: first_of(r, BROWSE_ID)?,
            title,
            thumbnail: Some(thumbnail),
            playlist_id: first_of(r, ALBUM_PLAYLIST_ID),
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
            play_endpoint: r
                .thumbnail_overlay
                .as_ref()
                .and_then(|o| o.play_endpoint())
                .and_then(|e| e.any_watch_endpoint()),
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
        NodeKind::Episode => Item::Episode(EpisodeItem {
            id: first_of(r, VIDEO_ID)?,
            title,
            thumbnail: Some(thumbnail),
            podcast: subtitle.podcast.clone(),
            published: subtitle.unlinked_names().next().map(str::to_string),
            duration: subtitle.duration,
            endpoint: r
                .navigation_endpoint
                .as_ref()
                .and_then(|e| e.any_watch_endpoint()),
        }),
    };

    Some(item)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::{BrowseIdHeuristics, fixtures};
    use serde_json::json;

    fn node(value: serde_json::Value) -> Node {
        serde_json::from_value(value).expect("valid renderer")
    }

    #[test]
    fn test_album_tile() {
        let h = BrowseIdHeuristics::default();
        let ctx = ResolutionContext::new(&h);
        let r = node(json!({
            "title": fixtures::text("Discovery"),
            "subtitle": { "runs": [
                { "text": "Album" }, { "text": " • " },
                { "text": "Daft Punk", "navigationEndpoint": { "browseEndpoint": { "browseId": "UCdp" } } },
                { "text": " • " }, { "text": "2001" }
            ] },
            "navigationEndpoint": fixtures::browse("MPREb_disc", "MUSIC_PAGE_TYPE_ALBUM"),
            "thumbnailRenderer": fixtures::thumbnail("https://img/disc"),
            "subtitleBadges": [{ "musicInlineBadgeRenderer": { "icon": { "iconType": "MUSIC_EXPLICIT_BADGE" } } }],
            "thumbnailOverlay": { "musicItemThumbnailOverlayRenderer": { "content": { "musicPlayButtonRenderer": {
                "playNavigationEndpoint": { "watchPlaylistEndpoint": { "playlistId": "OLAK5uy_disc" } }
            } } } }
        }));

        let album = resolve(&r, &ctx).and_then(Item::into_album).expect("album");
        assert_eq!(album.id, "MPREb_disc");
        assert_eq!(album.title, "Discovery");
        assert_eq!(album.thumbnail.as_deref(), Some("https://img/disc"));
        assert_eq!(album.playlist_id.as_deref(), Some("OLAK5uy_disc"));
        assert_eq!(album.artists[0].id.as_deref(), Some("UCdp"));
        assert_eq!(album.year, Some(2001));
        assert!(album.explicit);
    }

    #[test]
    fn test_song_tile_requires_thumbnail() {
        let h = BrowseIdHeuristics::default();
        let ctx = ResolutionContext::new(&h);
        let mut value = json!({
            "title": fixtures::text("One More Time"),
            "navigationEndpoint": fixtures::watch("vid1", "MUSIC_VIDEO_TYPE_ATV"),
            "thumbnailRenderer": fixtures::thumbnail("https://img/omt")
        });

        let song = resolve(&node(value.clone()), &ctx)
            .and_then(Item::into_song)
            .expect("song");
        assert_eq!(song.id, "vid1");
        assert!(!song.is_video());

        value["thumbnailRenderer"] = json!({});
        assert!(resolve(&node(value), &ctx).is_none());
    }

    #[test]
    fn test_playlist_tile_strips_browse_prefix() {
        let h = BrowseIdHeuristics::default();
        let ctx = ResolutionContext::new(&h);
        let r = node(json!({
            "title": fixtures::text("Chill"),
            "subtitle": { "runs": [{ "text": "YouTube Music" }, { "text": " • " }, { "text": "50 songs" }] },
            "navigationEndpoint": fixtures::browse("VLRDCLAKchill", "MUSIC_PAGE_TYPE_PLAYLIST"),
            "thumbnailRenderer": fixtures::thumbnail("https://img/chill")
        }));

        let playlist = resolve(&r, &ctx).and_then(Item::into_playlist).expect("playlist");
        assert_eq!(playlist.id, "RDCLAKchill");
        assert_eq!(playlist.author.as_ref().map(|a| a.name.as_str()), Some("YouTube Music"));
        assert_eq!(playlist.song_count_text.as_deref(), Some("50 songs"));
    }

    #[test]
    fn test_channel_tile_marks_channel() {
        let h = BrowseIdHeuristics::default();
        let ctx = ResolutionContext::new(&h);
        let r = node(json!({
            "title": fixtures::text("Someone"),
            "subtitle": fixtures::text("1.2K subscribers"),
            "navigationEndpoint": fixtures::browse("UCsomeone", "MUSIC_PAGE_TYPE_USER_CHANNEL"),
            "thumbnailRenderer": fixtures::thumbnail("https://img/someone")
        }));

        let artist = resolve(&r, &ctx).and_then(Item::into_artist).expect("artist");
        assert!(artist.is_channel);
        assert_eq!(artist.subscribers.as_deref(), Some("1.2K subscribers"));
    }
}
