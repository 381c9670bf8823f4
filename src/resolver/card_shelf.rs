use crate::{
    models::{AlbumItem, ArtistItem, Item, PlaylistItem, PodcastItem, SongItem},
    renderer::{MusicCardShelfRenderer, NavigationEndpoint, has_explicit_badge},
};

use super::{
    MenuExtras, ResolutionContext, browse_id,
    fallback::{Extractor, first_of, first_text_of},
    heuristics::playlist_id_from_browse_id,
    kind::{Capabilities, NodeKind},
    subtitle::SubtitleParts,
    watch_video_id,
};

type Node = MusicCardShelfRenderer;

fn title_endpoint(r: &Node) -> Option<&NavigationEndpoint> {
    r.title.as_ref()?.runs.first()?.navigation_endpoint.as_ref()
}

fn primary_endpoint(r: &Node) -> Option<&NavigationEndpoint> {
    r.on_tap.as_ref().or_else(|| title_endpoint(r))
}

fn title_text(r: &Node) -> Option<String> {
    r.title.as_ref()?.text()
}

const TITLE: &[Extractor<Node, String>] = &[title_text];

fn music_thumbnail(r: &Node) -> Option<String> {
    r.thumbnail.as_ref()?.music_thumbnail().map(str::to_string)
}

fn cropped_thumbnail(r: &Node) -> Option<String> {
    r.thumbnail.as_ref()?.cropped_square().map(str::to_string)
}

const THUMBNAIL: &[Extractor<Node, String>] = &[music_thumbnail, cropped_thumbnail];

fn on_tap_video_id(r: &Node) -> Option<String> {
    watch_video_id(r.on_tap.as_ref())
}

fn title_video_id(r: &Node) -> Option<String> {
    watch_video_id(title_endpoint(r))
}

const VIDEO_ID: &[Extractor<Node, String>] = &[on_tap_video_id, title_video_id];

fn on_tap_browse_id(r: &Node) -> Option<String> {
    browse_id(r.on_tap.as_ref())
}

fn title_browse_id(r: &Node) -> Option<String> {
    browse_id(title_endpoint(r))
}

const BROWSE_ID: &[Extractor<Node, String>] = &[on_tap_browse_id, title_browse_id];

/// The "top result" card of a search summary.
pub fn resolve(r: &Node, ctx: &ResolutionContext<'_>) -> Option<Item> {
    let mut caps = Capabilities::of(r.on_tap.as_ref(), ctx.heuristics);
    if caps.is_empty() {
        caps = Capabilities::of(title_endpoint(r), ctx.heuristics);
    }
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
            artists: subtitle.artists_or_names(),
            album: subtitle.album.clone(),
            duration: subtitle.duration,
            explicit,
            video_type: primary_endpoint(r).and_then(NavigationEndpoint::music_video_type),
            endpoint: primary_endpoint(r).and_then(NavigationEndpoint::any_watch_endpoint),
            set_video_id: None,
            library_add_token: menu.library.add,
            library_remove_token: menu.library.remove,
        }),
        NodeKind::Album => Item::Album(AlbumItem {
            id: first_of(r, BROWSE_ID)?,
            title,
            thumbnail: Some(thumbnail),
            playlist_id: menu.shuffle.and_then(|e| e.playlist_id),
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
            play_endpoint: None,
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
        NodeKind::Episode => return None,
    };

    Some(item)
}
