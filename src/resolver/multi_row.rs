use crate::{
    models::{EpisodeItem, Item, PodcastRef, SongItem},
    renderer::{MusicMultiRowListItemRenderer, NavigationEndpoint},
};

use super::{
    MenuExtras, ResolutionContext,
    fallback::{Extractor, first_of, first_text_of},
    heuristics::IdClass,
    kind::{Capabilities, NodeKind},
    subtitle::SubtitleParts,
    watch_video_id,
};

type Node = MusicMultiRowListItemRenderer;

fn overlay_endpoint(r: &Node) -> Option<&NavigationEndpoint> {
    r.overlay.as_ref()?.play_endpoint()
}

fn title_text(r: &Node) -> Option<String> {
    r.title.as_ref()?.text()
}

fn title_first_run(r: &Node) -> Option<String> {
    r.title.as_ref()?.first_text().map(str::to_string)
}

const TITLE: &[Extractor<Node, String>] = &[title_text, title_first_run];

fn on_tap_video_id(r: &Node) -> Option<String> {
    watch_video_id(r.on_tap.as_ref())
}

fn overlay_video_id(r: &Node) -> Option<String> {
    watch_video_id(overlay_endpoint(r))
}

const VIDEO_ID: &[Extractor<Node, String>] = &[on_tap_video_id, overlay_video_id];

fn music_thumbnail(r: &Node) -> Option<String> {
    r.thumbnail.as_ref()?.music_thumbnail().map(str::to_string)
}

fn cropped_thumbnail(r: &Node) -> Option<String> {
    r.thumbnail.as_ref()?.cropped_square().map(str::to_string)
}

const THUMBNAIL: &[Extractor<Node, String>] = &[music_thumbnail, cropped_thumbnail];

/// The show an episode belongs to, from `secondTitle` or the subtitle.
fn podcast_of(r: &Node, subtitle: &SubtitleParts, ctx: &ResolutionContext<'_>) -> Option<PodcastRef> {
    let linked = r.second_title.as_ref().and_then(|t| {
        t.runs.iter().find_map(|run| {
            let id = run.browse_id()?;
            (ctx.heuristics.classify(id) == Some(IdClass::Podcast)).then(|| PodcastRef {
                name: run.text.clone(),
                id: Some(id.to_string()),
            })
        })
    });
    linked.or_else(|| subtitle.podcast.clone()).or_else(|| {
        let name = r.second_title.as_ref()?.text()?;
        Some(PodcastRef { name, id: None })
    })
}

/// Podcast episode rows. Anything else this shape carries is not an item.
pub fn resolve(r: &Node, ctx: &ResolutionContext<'_>) -> Option<Item> {
    let mut caps = Capabilities::of(r.on_tap.as_ref(), ctx.heuristics);
    if caps.is_empty() {
        caps = Capabilities::of(overlay_endpoint(r), ctx.heuristics);
    }
    let title = first_text_of(r, TITLE)?;
    let thumbnail = first_of(r, THUMBNAIL).or_else(|| ctx.thumbnail.clone())?;
    let subtitle = r
        .subtitle
        .as_ref()
        .map(|s| SubtitleParts::parse(&s.runs, ctx.heuristics))
        .unwrap_or_default();
    let watch = [r.on_tap.as_ref(), overlay_endpoint(r)]
        .into_iter()
        .flatten()
        .find_map(NavigationEndpoint::any_watch_endpoint);

    match caps.kind()? {
        NodeKind::Episode => Some(Item::Episode(EpisodeItem {
            id: first_of(r, VIDEO_ID)?,
            title,
            thumbnail: Some(thumbnail),
            podcast: podcast_of(r, &subtitle, ctx),
            published: subtitle.unlinked_names().next().map(str::to_string),
            duration: subtitle.duration,
            endpoint: watch,
        })),
        NodeKind::Song => {
            let menu = MenuExtras::of(r.menu.as_ref());
            Some(Item::Song(SongItem {
                id: first_of(r, VIDEO_ID)?,
                title,
                thumbnail: Some(thumbnail),
                artists: subtitle.artists_or_names(),
                album: subtitle.album.clone(),
                duration: subtitle.duration,
                explicit: false,
                video_type: r.on_tap.as_ref().and_then(NavigationEndpoint::music_video_type),
                endpoint: watch,
                set_video_id: None,
                library_add_token: menu.library.add,
                library_remove_token: menu.library.remove,
            }))
        }
        _ => None,
    }
}
