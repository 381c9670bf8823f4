use crate::{
    common::{Error, Result},
    models::{Page, PlaylistItem, PlaylistPage, SongItem, WatchEndpoint},
    renderer::{
        BrowseResponse, HeaderNode, Menu, MenuRenderer, MusicDetailHeaderRenderer,
        MusicResponsiveHeaderRenderer, NavigationEndpoint, Runs, ThumbnailRenderer,
        continuation_of,
    },
    resolver::{BrowseIdHeuristics, ResolutionContext, SubtitleParts, resolve_songs},
};

use super::{continued_page, thumbnail_of};

enum PlaylistHeader<'a> {
    Detail(&'a MusicDetailHeaderRenderer),
    Responsive(&'a MusicResponsiveHeaderRenderer),
}

impl<'a> PlaylistHeader<'a> {
    fn from_node(node: &'a HeaderNode) -> Option<(Self, bool)> {
        if let Some(inner) = node
            .music_editable_playlist_detail_header_renderer
            .as_ref()
            .and_then(|e| e.header.as_deref())
        {
            return Self::from_node(inner).map(|(h, _)| (h, true));
        }
        if let Some(h) = &node.music_detail_header_renderer {
            return Some((Self::Detail(h), false));
        }
        node.music_responsive_header_renderer
            .as_ref()
            .map(|h| (Self::Responsive(h), false))
    }

    /// The header and whether the playlist is editable by the signed-in user.
    fn find(response: &'a BrowseResponse) -> Option<(Self, bool)> {
        if let Some(found) = response.header.as_ref().and_then(Self::from_node) {
            return Some(found);
        }
        response.section_nodes().find_map(|n| {
            if let Some(editable) = &n.music_editable_playlist_detail_header_renderer {
                return editable
                    .header
                    .as_deref()
                    .and_then(Self::from_node)
                    .map(|(h, _)| (h, true));
            }
            n.music_responsive_header_renderer
                .as_ref()
                .map(|h| (Self::Responsive(h), false))
        })
    }

    fn title(&self) -> Option<String> {
        match self {
            Self::Detail(h) => h.title.as_ref()?.text(),
            Self::Responsive(h) => h.title.as_ref()?.text(),
        }
    }

    fn thumbnail(&self) -> Option<&'a ThumbnailRenderer> {
        match self {
            Self::Detail(h) => h.thumbnail.as_ref(),
            Self::Responsive(h) => h.thumbnail.as_ref(),
        }
    }

    fn menu(&self) -> Option<&'a MenuRenderer> {
        match self {
            Self::Detail(h) => h.menu.as_ref().and_then(Menu::renderer),
            Self::Responsive(h) => h.menu(),
        }
    }

    fn byline(&self) -> impl Iterator<Item = &'a Runs> {
        let (a, b): (Option<&'a Runs>, Option<&'a Runs>) = match self {
            Self::Detail(h) => (h.subtitle.as_ref(), None),
            Self::Responsive(h) => (h.strapline_text_one.as_ref(), h.subtitle.as_ref()),
        };
        a.into_iter().chain(b)
    }

    fn second_subtitle(&self) -> Option<&'a Runs> {
        match self {
            Self::Detail(h) => h.second_subtitle.as_ref(),
            Self::Responsive(h) => h.second_subtitle.as_ref(),
        }
    }

    fn description(&self) -> Option<String> {
        match self {
            Self::Detail(h) => h.description.as_ref()?.text(),
            Self::Responsive(h) => h.description_text(),
        }
    }

    fn play_endpoint(&self) -> Option<WatchEndpoint> {
        match self {
            Self::Detail(_) => None,
            Self::Responsive(h) => h.play_endpoint().and_then(NavigationEndpoint::any_watch_endpoint),
        }
    }
}

fn song_count(second_subtitle: Option<&Runs>, heuristics: &BrowseIdHeuristics) -> Option<String> {
    let parts = SubtitleParts::parse(second_subtitle?.runs.iter(), heuristics);
    parts.stat(&["song", "track", "episode", "video"])
}

pub fn parse_playlist(
    response: &BrowseResponse,
    playlist_id: &str,
    heuristics: &BrowseIdHeuristics,
) -> Result<PlaylistPage> {
    let (header, is_editable) = PlaylistHeader::find(response)
        .ok_or(Error::UnexpectedResponse("playlist page without a header"))?;
    let title = header
        .title()
        .ok_or(Error::UnexpectedResponse("playlist header without a title"))?;
    let byline = SubtitleParts::parse(header.byline().flat_map(|r| r.runs.iter()), heuristics);
    let menu = header.menu();

    let playlist = PlaylistItem {
        id: playlist_id.to_string(),
        title,
        thumbnail: thumbnail_of(header.thumbnail()),
        author: byline.artists_or_names().into_iter().next(),
        song_count_text: song_count(header.second_subtitle(), heuristics),
        play_endpoint: header
            .play_endpoint()
            .or_else(|| Some(WatchEndpoint::playlist(playlist_id, None))),
        shuffle_endpoint: menu.and_then(MenuRenderer::shuffle_endpoint),
        radio_endpoint: menu.and_then(MenuRenderer::radio_endpoint),
        is_editable,
    };

    let ctx = ResolutionContext::new(heuristics);
    let mut songs = Vec::new();
    let mut continuation = None;
    for node in response.section_nodes() {
        if let Some(shelf) = &node.music_playlist_shelf_renderer {
            songs.extend(resolve_songs(&shelf.contents, &ctx));
            continuation = continuation.or_else(|| shelf.continuation());
        } else if let Some(shelf) = &node.music_shelf_renderer {
            songs.extend(resolve_songs(&shelf.contents, &ctx));
            continuation = continuation.or_else(|| shelf.continuation());
        }
    }

    Ok(PlaylistPage {
        playlist,
        description: header.description(),
        songs,
        continuation,
    })
}

/// Next batch of playlist tracks. A cursor that yields no tracks ends the list.
pub fn parse_playlist_continuation(
    response: &BrowseResponse,
    heuristics: &BrowseIdHeuristics,
) -> Page<SongItem> {
    let ctx = ResolutionContext::new(heuristics);
    let contents = response.continuation_contents.as_ref();

    if let Some(shelf) = contents.and_then(|c| c.music_playlist_shelf_continuation.as_ref()) {
        return continued_page(resolve_songs(&shelf.contents, &ctx), shelf.continuation());
    }
    if let Some(shelf) = contents.and_then(|c| c.music_shelf_continuation.as_ref()) {
        return continued_page(resolve_songs(&shelf.contents, &ctx), shelf.continuation());
    }

    let appended = response.appended_items();
    continued_page(resolve_songs(appended, &ctx), continuation_of(&[], appended))
}
