use crate::{
    models::{AlbumItem, ExplorePage, Item, MoodAndGenres, MoodAndGenresItem, Section},
    renderer::{BrowseResponse, ItemNode, MusicCarouselShelfRenderer, MusicNavigationButtonRenderer},
    resolver::{BrowseIdHeuristics, ResolutionContext, resolve_all},
};

use super::{first_list_page, sections_of};

pub const NEW_RELEASE_ALBUMS: &str = "FEmusic_new_releases_albums";
pub const MOODS_AND_GENRES: &str = "FEmusic_moods_and_genres";

fn mood_item(button: &MusicNavigationButtonRenderer) -> Option<MoodAndGenresItem> {
    Some(MoodAndGenresItem {
        title: button.button_text.as_ref()?.text()?,
        stripe_color: button
            .solid
            .as_ref()
            .and_then(|s| s.left_stripe_color)
            .and_then(|c| u32::try_from(c).ok()),
        endpoint: button.click_command.as_ref()?.to_browse_endpoint()?,
    })
}

fn mood_items(nodes: &[ItemNode]) -> Vec<MoodAndGenresItem> {
    nodes
        .iter()
        .filter_map(|n| n.music_navigation_button_renderer.as_ref())
        .filter_map(mood_item)
        .collect()
}

/// Whether the carousel's "More" button or title links to `browse_id`.
fn links_to(carousel: &MusicCarouselShelfRenderer, browse_id: &str) -> bool {
    [carousel.more_endpoint(), carousel.title_endpoint()]
        .into_iter()
        .flatten()
        .any(|e| e.browse_id() == Some(browse_id))
}

fn albums(nodes: &[ItemNode], ctx: &ResolutionContext<'_>) -> Vec<AlbumItem> {
    resolve_all(nodes, ctx)
        .into_iter()
        .filter_map(Item::into_album)
        .collect()
}

pub fn parse_explore(response: &BrowseResponse, heuristics: &BrowseIdHeuristics) -> ExplorePage {
    let ctx = ResolutionContext::new(heuristics);
    let mut page = ExplorePage::default();

    for carousel in response.section_nodes().filter_map(|n| n.carousel()) {
        if links_to(carousel, NEW_RELEASE_ALBUMS) {
            page.new_release_albums = albums(&carousel.contents, &ctx);
        } else if links_to(carousel, MOODS_AND_GENRES) {
            page.mood_and_genres = mood_items(&carousel.contents);
        }
    }
    page
}

pub fn parse_new_release_albums(response: &BrowseResponse, heuristics: &BrowseIdHeuristics) -> Vec<AlbumItem> {
    let ctx = ResolutionContext::new(heuristics);
    response
        .primary_sections()
        .and_then(|list| first_list_page(&list.contents, &ctx))
        .map(|page| page.items.into_iter().filter_map(Item::into_album).collect())
        .unwrap_or_default()
}

/// One group per grid, in page order. Groups without a tile are dropped.
pub fn parse_mood_and_genres(response: &BrowseResponse) -> Vec<MoodAndGenres> {
    response
        .section_nodes()
        .filter_map(|n| n.grid_renderer.as_ref())
        .filter_map(|grid| {
            let items = mood_items(&grid.items);
            if items.is_empty() {
                return None;
            }
            Some(MoodAndGenres {
                title: grid.title().unwrap_or_default(),
                items,
            })
        })
        .collect()
}

pub fn parse_charts(response: &BrowseResponse, heuristics: &BrowseIdHeuristics) -> Vec<Section> {
    let ctx = ResolutionContext::new(heuristics);
    sections_of(response.section_nodes(), &ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::fixtures;
    use serde_json::json;

    fn single_column(sections: serde_json::Value) -> BrowseResponse {
        serde_json::from_value(json!({
            "contents": { "singleColumnBrowseResultsRenderer": { "tabs": [{ "tabRenderer": { "content": {
                "sectionListRenderer": { "contents": sections }
            } } }] } }
        }))
        .expect("valid browse response")
    }

    fn mood_button(title: &str, params: &str, color: u64) -> serde_json::Value {
        json!({ "musicNavigationButtonRenderer": {
            "buttonText": fixtures::text(title),
            "solid": { "leftStripeColor": color },
            "clickCommand": { "browseEndpoint": { "browseId": "FEmusic_moods_and_genres_category", "params": params } }
        } })
    }

    #[test]
    fn test_explore_picks_carousels_by_target() {
        let h = BrowseIdHeuristics::default();
        let response = single_column(json!([
            { "musicCarouselShelfRenderer": {
                "header": { "musicCarouselShelfBasicHeaderRenderer": {
                    "title": { "runs": [{ "text": "New albums & singles", "navigationEndpoint": { "browseEndpoint": { "browseId": NEW_RELEASE_ALBUMS } } }] }
                } },
                "contents": [fixtures::album_card("MPREb_new", "Fresh")]
            } },
            { "musicCarouselShelfRenderer": {
                "header": { "musicCarouselShelfBasicHeaderRenderer": {
                    "title": fixtures::text("Moods & genres"),
                    "moreContentButton": { "buttonRenderer": { "navigationEndpoint": { "browseEndpoint": { "browseId": MOODS_AND_GENRES } } } }
                } },
                "contents": [mood_button("Chill", "chill", 4_282_453_824u64), { "musicNavigationButtonRenderer": {} }]
            } }
        ]));

        let page = parse_explore(&response, &h);
        assert_eq!(page.new_release_albums.len(), 1);
        assert_eq!(page.new_release_albums[0].id, "MPREb_new");
        assert_eq!(page.mood_and_genres.len(), 1);
        assert_eq!(page.mood_and_genres[0].title, "Chill");
        assert_eq!(page.mood_and_genres[0].stripe_color, Some(4_282_453_824));
    }

    #[test]
    fn test_mood_and_genres_groups() {
        let response = single_column(json!([
            { "gridRenderer": {
                "header": { "gridHeaderRenderer": { "title": fixtures::text("Moods & moments") } },
                "items": [mood_button("Chill", "chill", 1), mood_button("Focus", "focus", 2)]
            } },
            { "gridRenderer": {
                "header": { "gridHeaderRenderer": { "title": fixtures::text("Genres") } },
                "items": [mood_button("Jazz", "jazz", 3)]
            } },
            { "gridRenderer": { "items": [] } }
        ]));

        let groups = parse_mood_and_genres(&response);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].title, "Moods & moments");
        assert_eq!(groups[0].items.len(), 2);
        assert_eq!(
            groups[1].items[0].endpoint.params.as_deref(),
            Some("jazz")
        );
    }

    #[test]
    fn test_new_release_albums_from_grid() {
        let h = BrowseIdHeuristics::default();
        let response = single_column(json!([
            { "gridRenderer": { "items": [
                fixtures::album_card("MPREb_1", "One"),
                fixtures::album_card("MPREb_2", "Two")
            ] } }
        ]));
        let albums = parse_new_release_albums(&response, &h);
        assert_eq!(albums.iter().map(|a| a.id.as_str()).collect::<Vec<_>>(), vec!["MPREb_1", "MPREb_2"]);
    }
}
