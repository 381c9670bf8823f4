//! Pure response-to-page parsers. Nothing here touches the network.

pub mod account;
pub mod album;
pub mod artist;
pub mod explore;
pub mod home;
pub mod library;
pub mod next;
pub mod playlist;
pub mod podcast;
pub mod search;

use crate::{
    models::{Continuation, Item, Page, Section},
    renderer::{
        BrowseResponse, GridRenderer, ItemNode, MusicCardShelfRenderer, MusicCarouselShelfRenderer,
        MusicShelfRenderer, NavigationEndpoint, RendererNode, SectionNode, ThumbnailRenderer,
        continuation_of,
    },
    resolver::{ResolutionContext, resolve, resolve_all},
};

pub(crate) fn thumbnail_of(renderer: Option<&ThumbnailRenderer>) -> Option<String> {
    renderer?.best().map(str::to_string)
}

/// A page built from continuation results. A cursor that yields nothing new
/// is reported as terminal.
pub(crate) fn continued_page<T>(items: Vec<T>, continuation: Option<Continuation>) -> Page<T> {
    if items.is_empty() {
        tracing::debug!("Continuation page produced no items, treating it as terminal");
        return Page::terminal(items);
    }
    Page::new(items, continuation)
}

fn browse_target(endpoint: Option<&NavigationEndpoint>) -> Option<crate::models::BrowseEndpoint> {
    endpoint?.to_browse_endpoint()
}

pub(crate) fn carousel_section(
    carousel: &MusicCarouselShelfRenderer,
    ctx: &ResolutionContext<'_>,
) -> Option<Section> {
    let header = carousel.basic_header();
    Some(Section {
        title: carousel.title()?,
        label: header
            .and_then(|h| h.strapline.as_ref())
            .and_then(|s| s.text()),
        thumbnail: thumbnail_of(header.and_then(|h| h.thumbnail.as_ref())),
        endpoint: browse_target(carousel.more_endpoint())
            .or_else(|| browse_target(carousel.title_endpoint())),
        items: resolve_all(&carousel.contents, ctx),
    })
}

pub(crate) fn shelf_section(shelf: &MusicShelfRenderer, ctx: &ResolutionContext<'_>) -> Option<Section> {
    Some(Section {
        title: shelf.title.as_ref()?.text()?,
        label: None,
        thumbnail: None,
        endpoint: browse_target(shelf.bottom_endpoint.as_ref()),
        items: resolve_all(&shelf.contents, ctx),
    })
}

pub(crate) fn grid_section(grid: &GridRenderer, ctx: &ResolutionContext<'_>) -> Option<Section> {
    Some(Section {
        title: grid.title().unwrap_or_default(),
        label: None,
        thumbnail: None,
        endpoint: None,
        items: resolve_all(&grid.items, ctx),
    })
}

/// The card itself followed by the rows listed under it.
pub(crate) fn card_items(card: &MusicCardShelfRenderer, ctx: &ResolutionContext<'_>) -> Vec<Item> {
    resolve(RendererNode::CardShelf(card), ctx)
        .into_iter()
        .chain(resolve_all(&card.contents, ctx))
        .collect()
}

pub(crate) fn card_section(card: &MusicCardShelfRenderer, ctx: &ResolutionContext<'_>) -> Option<Section> {
    let title = card
        .header
        .as_ref()
        .and_then(|h| h.music_card_shelf_header_basic_renderer.as_ref())
        .and_then(|h| h.title.as_ref())
        .and_then(|t| t.text())
        .unwrap_or_else(|| "Top result".to_string());
    Some(Section {
        title,
        label: None,
        thumbnail: None,
        endpoint: None,
        items: card_items(card, ctx),
    })
}

/// Every item-bearing section of `nodes`, in order. Sections that resolve to
/// no items are omitted.
pub(crate) fn sections_of<'n>(
    nodes: impl IntoIterator<Item = &'n SectionNode>,
    ctx: &ResolutionContext<'_>,
) -> Vec<Section> {
    let mut sections = Vec::new();
    for node in nodes {
        if let Some(inner) = &node.item_section_renderer {
            sections.extend(sections_of(&inner.contents, ctx));
            continue;
        }

        let section = if let Some(carousel) = node.carousel() {
            carousel_section(carousel, ctx)
        } else if let Some(shelf) = &node.music_shelf_renderer {
            shelf_section(shelf, ctx)
        } else if let Some(grid) = &node.grid_renderer {
            grid_section(grid, ctx)
        } else if let Some(card) = &node.music_card_shelf_renderer {
            card_section(card, ctx)
        } else {
            None
        };

        match section {
            Some(s) if !s.items.is_empty() => sections.push(s),
            Some(s) => tracing::debug!("Omitting empty section \"{}\"", s.title),
            None => {}
        }
    }
    sections
}

/// Items of the first shelf or grid among `nodes`, with its cursor.
pub(crate) fn first_list_page<'n>(
    nodes: impl IntoIterator<Item = &'n SectionNode>,
    ctx: &ResolutionContext<'_>,
) -> Option<Page<Item>> {
    nodes.into_iter().find_map(|node| {
        if let Some(shelf) = &node.music_shelf_renderer {
            return Some(Page::new(
                resolve_all(&shelf.contents, ctx),
                shelf.continuation(),
            ));
        }
        if let Some(grid) = &node.grid_renderer {
            return Some(Page::new(resolve_all(&grid.items, ctx), grid.continuation()));
        }
        if let Some(inner) = &node.item_section_renderer {
            return first_list_page(&inner.contents, ctx);
        }
        None
    })
}

pub(crate) fn items_page(nodes: &[ItemNode], continuation: Option<Continuation>, ctx: &ResolutionContext<'_>) -> Page<Item> {
    continued_page(resolve_all(nodes, ctx), continuation)
}

/// Next batch of a grid or shelf listing, in whichever continuation form
/// the response uses.
pub(crate) fn list_continuation(response: &BrowseResponse, ctx: &ResolutionContext<'_>) -> Page<Item> {
    let contents = response.continuation_contents.as_ref();
    if let Some(grid) = contents.and_then(|c| c.grid_continuation.as_ref()) {
        return items_page(&grid.items, grid.continuation(), ctx);
    }
    if let Some(shelf) = contents.and_then(|c| c.music_shelf_continuation.as_ref()) {
        return items_page(&shelf.contents, shelf.continuation(), ctx);
    }
    let appended = response.appended_items();
    items_page(appended, continuation_of(&[], appended), ctx)
}
