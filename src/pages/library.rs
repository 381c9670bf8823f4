use crate::{
    models::{Item, Page, Section},
    renderer::BrowseResponse,
    resolver::{BrowseIdHeuristics, ResolutionContext},
};

use super::{first_list_page, list_continuation, sections_of};

pub const LIKED_SONGS: &str = "FEmusic_liked_videos";
pub const LIKED_ALBUMS: &str = "FEmusic_liked_albums";
pub const LIKED_PLAYLISTS: &str = "FEmusic_liked_playlists";
pub const LIBRARY_ARTISTS: &str = "FEmusic_library_corpus_track_artists";
pub const LIBRARY_PODCASTS: &str = "FEmusic_library_non_music_audio_list";
pub const HISTORY: &str = "FEmusic_history";

/// A library tab: one grid or shelf of saved items.
pub fn parse_library(response: &BrowseResponse, heuristics: &BrowseIdHeuristics) -> Page<Item> {
    let ctx = ResolutionContext::new(heuristics);
    response
        .primary_sections()
        .and_then(|list| first_list_page(&list.contents, &ctx))
        .unwrap_or_default()
}

pub fn parse_library_continuation(response: &BrowseResponse, heuristics: &BrowseIdHeuristics) -> Page<Item> {
    list_continuation(response, &ResolutionContext::new(heuristics))
}

/// Listening history, one section per day bucket ("Today", "Yesterday" ...).
pub fn parse_history(response: &BrowseResponse, heuristics: &BrowseIdHeuristics) -> Vec<Section> {
    let ctx = ResolutionContext::new(heuristics);
    sections_of(response.section_nodes(), &ctx)
}
