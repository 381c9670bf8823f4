use crate::{
    common::{Error, Result},
    models::{ArtistItem, ArtistPage, ArtistRef, Item, Page, WatchEndpoint},
    renderer::{ArtistHeaderRenderer, BrowseResponse, HeaderButton, Menu, NavigationEndpoint},
    resolver::{BrowseIdHeuristics, ResolutionContext},
};

use super::{first_list_page, list_continuation, sections_of, thumbnail_of};

fn subscribers(header: &ArtistHeaderRenderer) -> Option<String> {
    let button = header
        .subscription_button
        .as_ref()?
        .subscribe_button_renderer
        .as_ref()?;
    button
        .long_subscriber_count_text
        .as_ref()
        .or(button.subscriber_count_text.as_ref())?
        .text()
}

fn button_endpoint(button: Option<&HeaderButton>) -> Option<WatchEndpoint> {
    button?.endpoint()?.any_watch_endpoint()
}

fn artist_from_immersive(header: &ArtistHeaderRenderer, browse_id: &str) -> Option<ArtistItem> {
    let menu = header.menu.as_ref().and_then(Menu::renderer);
    Some(ArtistItem {
        id: browse_id.to_string(),
        title: header.title.as_ref()?.text()?,
        thumbnail: thumbnail_of(header.thumbnail.as_ref())
            .or_else(|| thumbnail_of(header.foreground_thumbnail.as_ref())),
        subscribers: subscribers(header),
        shuffle_endpoint: button_endpoint(header.play_button.as_ref())
            .or_else(|| menu.and_then(|m| m.shuffle_endpoint())),
        radio_endpoint: button_endpoint(header.start_radio_button.as_ref())
            .or_else(|| menu.and_then(|m| m.radio_endpoint())),
        is_channel: false,
    })
}

fn artist_from_responsive(response: &BrowseResponse, browse_id: &str) -> Option<ArtistItem> {
    let header = response
        .section_nodes()
        .find_map(|n| n.music_responsive_header_renderer.as_ref())?;
    let menu = header.menu();
    Some(ArtistItem {
        id: browse_id.to_string(),
        title: header.title.as_ref()?.text()?,
        thumbnail: thumbnail_of(header.thumbnail.as_ref()),
        subscribers: header.second_subtitle.as_ref().and_then(|s| s.text()),
        shuffle_endpoint: header
            .play_endpoint()
            .and_then(NavigationEndpoint::any_watch_endpoint)
            .or_else(|| menu.and_then(|m| m.shuffle_endpoint())),
        radio_endpoint: menu.and_then(|m| m.radio_endpoint()),
        is_channel: true,
    })
}

pub fn parse_artist(
    response: &BrowseResponse,
    browse_id: &str,
    heuristics: &BrowseIdHeuristics,
) -> Result<ArtistPage> {
    let artist = response
        .header
        .as_ref()
        .and_then(|h| h.artist())
        .and_then(|h| artist_from_immersive(h, browse_id))
        .or_else(|| artist_from_responsive(response, browse_id))
        .ok_or(Error::UnexpectedResponse("artist page without a header"))?;

    let description = response
        .header
        .as_ref()
        .and_then(|h| h.artist())
        .and_then(|h| h.description.as_ref())
        .and_then(|d| d.text())
        .or_else(|| {
            response.section_nodes().find_map(|n| {
                n.music_description_shelf_renderer
                    .as_ref()?
                    .description
                    .as_ref()?
                    .text()
            })
        });

    let ctx = ResolutionContext::new(heuristics).with_artists(vec![ArtistRef {
        name: artist.title.clone(),
        id: Some(browse_id.to_string()),
    }]);

    Ok(ArtistPage {
        sections: sections_of(response.section_nodes(), &ctx),
        artist,
        description,
    })
}

/// The "See all" page of one artist shelf: a grid or a song shelf.
pub fn parse_artist_items(response: &BrowseResponse, heuristics: &BrowseIdHeuristics) -> Page<Item> {
    let ctx = ResolutionContext::new(heuristics);
    response
        .primary_sections()
        .and_then(|list| first_list_page(&list.contents, &ctx))
        .unwrap_or_default()
}

pub fn parse_artist_items_continuation(
    response: &BrowseResponse,
    heuristics: &BrowseIdHeuristics,
) -> Page<Item> {
    list_continuation(response, &ResolutionContext::new(heuristics))
}
