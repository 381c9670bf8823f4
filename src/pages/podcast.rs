use crate::{
    common::{Error, Result},
    models::{EpisodeItem, Item, Page, PodcastItem, PodcastPage, PodcastRef},
    renderer::{BrowseResponse, ItemNode, MusicShelfRenderer, continuation_of},
    resolver::{BrowseIdHeuristics, ResolutionContext, SubtitleParts, resolve_all},
};

use super::{continued_page, thumbnail_of};

fn episodes(nodes: &[ItemNode], podcast: &PodcastRef, ctx: &ResolutionContext<'_>) -> Vec<EpisodeItem> {
    resolve_all(nodes, ctx)
        .into_iter()
        .filter_map(Item::into_episode)
        .map(|mut e| {
            if e.podcast.is_none() {
                e.podcast = Some(podcast.clone());
            }
            e
        })
        .collect()
}

fn episode_shelf(response: &BrowseResponse) -> Option<&MusicShelfRenderer> {
    response
        .section_nodes()
        .find_map(|n| n.music_shelf_renderer.as_ref())
}

pub fn parse_podcast(
    response: &BrowseResponse,
    browse_id: &str,
    heuristics: &BrowseIdHeuristics,
) -> Result<PodcastPage> {
    let header = response
        .section_nodes()
        .find_map(|n| n.music_responsive_header_renderer.as_ref())
        .or_else(|| {
            response
                .header
                .as_ref()
                .and_then(|h| h.music_responsive_header_renderer.as_ref())
        })
        .ok_or(Error::UnexpectedResponse("podcast page without a header"))?;
    let title = header
        .title
        .as_ref()
        .and_then(|t| t.text())
        .ok_or(Error::UnexpectedResponse("podcast header without a title"))?;

    let byline = SubtitleParts::parse(
        header
            .strapline_text_one
            .iter()
            .chain(header.subtitle.iter())
            .flat_map(|r| r.runs.iter()),
        heuristics,
    );
    let library = header.library_tokens();

    let podcast = PodcastItem {
        id: browse_id.to_string(),
        title: title.clone(),
        thumbnail: thumbnail_of(header.thumbnail.as_ref()),
        author: byline.artists_or_names().into_iter().next(),
        library_add_token: library.add,
        library_remove_token: library.remove,
    };

    let reference = PodcastRef {
        name: title,
        id: Some(browse_id.to_string()),
    };
    let ctx = ResolutionContext::new(heuristics).with_thumbnail(podcast.thumbnail.clone());
    let episodes = match episode_shelf(response) {
        Some(shelf) => Page::new(episodes(&shelf.contents, &reference, &ctx), shelf.continuation()),
        None => Page::default(),
    };

    Ok(PodcastPage {
        description: header.description_text(),
        podcast,
        episodes,
    })
}

pub fn parse_episodes_continuation(
    response: &BrowseResponse,
    podcast: &PodcastRef,
    heuristics: &BrowseIdHeuristics,
) -> Page<EpisodeItem> {
    let ctx = ResolutionContext::new(heuristics);
    if let Some(shelf) = response
        .continuation_contents
        .as_ref()
        .and_then(|c| c.music_shelf_continuation.as_ref())
    {
        return continued_page(episodes(&shelf.contents, podcast, &ctx), shelf.continuation());
    }
    let appended = response.appended_items();
    continued_page(episodes(appended, podcast, &ctx), continuation_of(&[], appended))
}
