use crate::{
    models::{SongItem, WatchEndpoint},
    renderer::{NavigationEndpoint, PlaylistPanelVideoRenderer, has_explicit_badge},
};

use super::{
    MenuExtras, ResolutionContext,
    fallback::{Extractor, first_of, first_text_of},
    subtitle::SubtitleParts,
    text::parse_duration,
    watch_video_id,
};

type Node = PlaylistPanelVideoRenderer;

fn own_video_id(r: &Node) -> Option<String> {
    r.video_id.clone().filter(|id| !id.trim().is_empty())
}

fn nav_video_id(r: &Node) -> Option<String> {
    watch_video_id(r.navigation_endpoint.as_ref())
}

const VIDEO_ID: &[Extractor<Node, String>] = &[own_video_id, nav_video_id];

fn title_text(r: &Node) -> Option<String> {
    r.title.as_ref()?.text()
}

const TITLE: &[Extractor<Node, String>] = &[title_text];

fn largest_thumbnail(r: &Node) -> Option<String> {
    r.thumbnail.as_ref()?.largest().map(str::to_string)
}

fn length_text_duration(r: &Node) -> Option<u32> {
    parse_duration(&r.length_text.as_ref()?.text()?)
}

/// Watch queue entry. Always a song; the byline carries artists, album and year.
pub fn resolve(r: &Node, ctx: &ResolutionContext<'_>) -> Option<SongItem> {
    let id = first_of(r, VIDEO_ID)?;
    let title = first_text_of(r, TITLE)?;
    let thumbnail = largest_thumbnail(r).or_else(|| ctx.thumbnail.clone())?;
    let byline = r
        .long_byline_text
        .as_ref()
        .or(r.short_byline_text.as_ref())
        .map(|b| SubtitleParts::parse(&b.runs, ctx.heuristics))
        .unwrap_or_default();
    let menu = MenuExtras::of(r.menu.as_ref());

    Some(SongItem {
        title,
        thumbnail: Some(thumbnail),
        artists: byline.artists_or_names(),
        album: byline.album.clone().or_else(|| ctx.album.clone()),
        duration: length_text_duration(r).or(byline.duration),
        explicit: has_explicit_badge(&r.badges),
        video_type: r
            .navigation_endpoint
            .as_ref()
            .and_then(NavigationEndpoint::music_video_type),
        endpoint: r
            .navigation_endpoint
            .as_ref()
            .and_then(NavigationEndpoint::any_watch_endpoint)
            .or_else(|| Some(WatchEndpoint::video(id.clone()))),
        set_video_id: r.playlist_set_video_id.clone(),
        library_add_token: menu.library.add,
        library_remove_token: menu.library.remove,
        id,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::BrowseIdHeuristics;
    use serde_json::json;

    #[test]
    fn test_queue_entry() {
        let h = BrowseIdHeuristics::default();
        let ctx = ResolutionContext::new(&h);
        let r: Node = serde_json::from_value(json!({
            "videoId": "q1",
            "title": { "runs": [{ "text": "Harder, Better" }] },
            "longBylineText": { "runs": [
                { "text": "Daft Punk", "navigationEndpoint": { "browseEndpoint": { "browseId": "UCdp" } } },
                { "text": " • " },
                { "text": "Discovery", "navigationEndpoint": { "browseEndpoint": { "browseId": "MPREb_disc" } } },
                { "text": " • " }, { "text": "2001" }
            ] },
            "lengthText": { "runs": [{ "text": "3:45" }] },
            "thumbnail": { "thumbnails": [{ "url": "https://img/small" }, { "url": "https://img/large" }] },
            "playlistSetVideoId": "set1"
        }))
        .expect("valid renderer");

        let song = resolve(&r, &ctx).expect("song");
        assert_eq!(song.id, "q1");
        assert_eq!(song.thumbnail.as_deref(), Some("https://img/large"));
        assert_eq!(song.artists[0].name, "Daft Punk");
        assert_eq!(song.album.as_ref().map(|a| a.id.as_str()), Some("MPREb_disc"));
        assert_eq!(song.duration, Some(225));
        assert_eq!(song.set_video_id.as_deref(), Some("set1"));
        assert_eq!(song.endpoint, Some(WatchEndpoint::video("q1")));
    }

    #[test]
    fn test_queue_entry_without_video_id_is_dropped() {
        let h = BrowseIdHeuristics::default();
        let ctx = ResolutionContext::new(&h);
        let r: Node = serde_json::from_value(json!({
            "title": { "runs": [{ "text": "Unknown" }] },
            "thumbnail": { "thumbnails": [{ "url": "https://img/u" }] }
        }))
        .expect("valid renderer");
        assert!(resolve(&r, &ctx).is_none());
    }
}
