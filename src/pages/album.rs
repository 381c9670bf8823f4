use crate::{
    common::{Error, Result},
    models::{AlbumItem, AlbumPage, AlbumRef, Item},
    renderer::{
        BrowseResponse, Menu, MenuRenderer, MusicDetailHeaderRenderer,
        MusicResponsiveHeaderRenderer, Runs, SectionNode, ThumbnailRenderer, has_explicit_badge,
    },
    resolver::{BrowseIdHeuristics, ResolutionContext, SubtitleParts, resolve_all, resolve_songs},
};

use super::thumbnail_of;

/// The two header layouts an album page can carry.
enum AlbumHeader<'a> {
    Detail(&'a MusicDetailHeaderRenderer),
    Responsive(&'a MusicResponsiveHeaderRenderer),
}

impl<'a> AlbumHeader<'a> {
    fn find(response: &'a BrowseResponse) -> Option<Self> {
        if let Some(detail) = response
            .header
            .as_ref()
            .and_then(|h| h.music_detail_header_renderer.as_ref())
        {
            return Some(Self::Detail(detail));
        }
        response
            .section_nodes()
            .find_map(|n| n.music_responsive_header_renderer.as_ref())
            .map(Self::Responsive)
    }

    fn title(&self) -> Option<&'a Runs> {
        match self {
            Self::Detail(h) => h.title.as_ref(),
            Self::Responsive(h) => h.title.as_ref(),
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

    fn parts(&self, heuristics: &BrowseIdHeuristics) -> SubtitleParts {
        let (subtitle, strapline) = match self {
            Self::Detail(h) => (h.subtitle.as_ref(), None),
            Self::Responsive(h) => (h.subtitle.as_ref(), h.strapline_text_one.as_ref()),
        };
        let runs = subtitle
            .into_iter()
            .chain(strapline)
            .flat_map(|r| r.runs.iter());
        SubtitleParts::parse(runs, heuristics)
    }

    fn description(&self) -> Option<String> {
        match self {
            Self::Detail(h) => h.description.as_ref()?.text(),
            Self::Responsive(h) => h.description_text(),
        }
    }

    fn explicit(&self) -> bool {
        match self {
            Self::Detail(h) => has_explicit_badge(&h.subtitle_badges),
            Self::Responsive(h) => has_explicit_badge(&h.subtitle_badge),
        }
    }

    fn play_playlist_id(&self) -> Option<String> {
        match self {
            Self::Detail(_) => None,
            Self::Responsive(h) => h.play_endpoint()?.any_watch_endpoint()?.playlist_id,
        }
    }
}

fn playlist_id_from_url(url: &str) -> Option<String> {
    let (_, query) = url.split_once('?')?;
    query
        .split('&')
        .find_map(|pair| pair.strip_prefix("list="))
        .filter(|id| !id.is_empty())
        .map(str::to_string)
}

fn description_shelf<'n>(nodes: impl IntoIterator<Item = &'n SectionNode>) -> Option<String> {
    nodes.into_iter().find_map(|n| {
        n.music_description_shelf_renderer
            .as_ref()?
            .description
            .as_ref()?
            .text()
    })
}

pub fn parse_album(
    response: &BrowseResponse,
    browse_id: &str,
    heuristics: &BrowseIdHeuristics,
) -> Result<AlbumPage> {
    let header = AlbumHeader::find(response)
        .ok_or(Error::UnexpectedResponse("album page without a header"))?;
    let title = header
        .title()
        .and_then(Runs::text)
        .ok_or(Error::UnexpectedResponse("album header without a title"))?;
    let parts = header.parts(heuristics);
    let thumbnail = thumbnail_of(header.thumbnail());
    let menu = header.menu();

    let playlist_id = header
        .play_playlist_id()
        .or_else(|| menu.and_then(MenuRenderer::shuffle_endpoint)?.playlist_id)
        .or_else(|| response.canonical_url().and_then(playlist_id_from_url));

    let album = AlbumItem {
        id: browse_id.to_string(),
        title: title.clone(),
        thumbnail: thumbnail.clone(),
        playlist_id,
        artists: parts.artists.clone(),
        year: parts.year,
        explicit: header.explicit(),
    };

    let ctx = ResolutionContext::new(heuristics)
        .with_album(Some(AlbumRef {
            name: title,
            id: browse_id.to_string(),
        }))
        .with_artists(parts.artists)
        .with_thumbnail(thumbnail);

    let songs = response
        .section_nodes()
        .filter_map(|n| n.music_shelf_renderer.as_ref())
        .flat_map(|shelf| resolve_songs(&shelf.contents, &ctx))
        .collect();

    let plain_ctx = ResolutionContext::new(heuristics);
    let other_versions = response
        .section_nodes()
        .filter_map(SectionNode::carousel)
        .flat_map(|c| resolve_all(&c.contents, &plain_ctx))
        .filter_map(Item::into_album)
        .filter(|a| a.id != browse_id)
        .collect();

    Ok(AlbumPage {
        description: header
            .description()
            .or_else(|| description_shelf(response.section_nodes())),
        album,
        songs,
        other_versions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::fixtures;
    use serde_json::json;

    fn two_column(header: serde_json::Value, tracks: serde_json::Value) -> serde_json::Value {
        json!({
            "contents": { "twoColumnBrowseResultsRenderer": {
                "tabs": [{ "tabRenderer": { "content": { "sectionListRenderer": {
                    "contents": [{ "musicResponsiveHeaderRenderer": header }]
                } } } }],
                "secondaryContents": { "sectionListRenderer": { "contents": [
                    { "musicShelfRenderer": { "contents": tracks } },
                    fixtures::carousel("Other versions", json!([
                        fixtures::album_card("MPREb_deluxe", "Discovery (Deluxe)")
                    ]))
                ] } }
            } },
            "microformat": { "microformatDataRenderer": {
                "urlCanonical": "https://music.youtube.com/playlist?list=OLAK5uy_disc"
            } }
        })
    }

    fn track(video_id: &str, title: &str) -> serde_json::Value {
        json!({ "musicResponsiveListItemRenderer": {
            "flexColumns": [fixtures::flex(json!([{ "text": title }]))],
            "fixedColumns": [{ "musicResponsiveListItemFixedColumnRenderer": { "text": fixtures::text("3:32") } }],
            "playlistItemData": { "videoId": video_id }
        } })
    }

    #[test]
    fn test_responsive_album_header() {
        let h = BrowseIdHeuristics::default();
        let response: BrowseResponse = serde_json::from_value(two_column(
            json!({
                "title": fixtures::text("Discovery"),
                "subtitle": { "runs": [{ "text": "Album" }, { "text": " • " }, { "text": "2001" }] },
                "straplineTextOne": { "runs": [{ "text": "Daft Punk", "navigationEndpoint": fixtures::browse("UCdp", "MUSIC_PAGE_TYPE_ARTIST") }] },
                "thumbnail": fixtures::thumbnail("https://img/disc"),
                "description": { "musicDescriptionShelfRenderer": { "description": fixtures::text("Second album.") } }
            }),
            json!([track("odr", "One More Time"), track("aero", "Aerodynamic"), { "musicResponsiveListItemRenderer": {} }]),
        ))
        .expect("valid album response");

        let page = parse_album(&response, "MPREb_disc", &h).expect("album page");
        assert_eq!(page.album.title, "Discovery");
        assert_eq!(page.album.year, Some(2001));
        assert_eq!(page.album.playlist_id.as_deref(), Some("OLAK5uy_disc"));
        assert_eq!(page.album.artists[0].name, "Daft Punk");
        assert_eq!(page.description.as_deref(), Some("Second album."));

        assert_eq!(page.songs.len(), 2);
        let first = &page.songs[0];
        assert_eq!(first.album.as_ref().map(|a| a.id.as_str()), Some("MPREb_disc"));
        assert_eq!(first.artists[0].name, "Daft Punk");
        assert_eq!(first.thumbnail.as_deref(), Some("https://img/disc"));

        assert_eq!(page.other_versions.len(), 1);
        assert_eq!(page.other_versions[0].id, "MPREb_deluxe");
    }

    #[test]
    fn test_album_without_header_is_unexpected() {
        let h = BrowseIdHeuristics::default();
        let response: BrowseResponse = serde_json::from_value(json!({ "contents": {} })).expect("valid");
        assert!(matches!(
            parse_album(&response, "MPREb_x", &h),
            Err(Error::UnexpectedResponse(_))
        ));
    }

    #[test]
    fn test_playlist_id_from_url() {
        assert_eq!(
            playlist_id_from_url("https://music.youtube.com/playlist?feature=x&list=OLAK5uy_1").as_deref(),
            Some("OLAK5uy_1")
        );
        assert_eq!(playlist_id_from_url("https://music.youtube.com/browse/MPREb_1"), None);
    }
}
