use crate::{
    aggregation::dedupe_by,
    models::{Item, NextResult, RelatedPage, SongItem, WatchEndpoint},
    renderer::{BrowseResponse, NextResponse, PAGE_TYPE_LYRICS, PAGE_TYPE_RELATED, RendererNode},
    resolver::{BrowseIdHeuristics, ResolutionContext, panel, resolve},
};

/// Queue songs plus the index of the entry marked as playing.
fn queue_songs(response: &NextResponse, ctx: &ResolutionContext<'_>) -> (Vec<SongItem>, Option<usize>) {
    let Some(queue) = response.queue() else {
        return (Vec::new(), None);
    };

    let mut songs = Vec::new();
    let mut current = None;
    for node in queue.contents.iter().filter_map(|n| n.node()) {
        let (song, selected) = match node {
            RendererNode::PlaylistPanel(r) => (panel::resolve(r, ctx), r.selected),
            other => (resolve(other, ctx).and_then(Item::into_song), false),
        };
        let Some(song) = song else {
            continue;
        };
        if selected {
            current = Some(songs.len());
        }
        songs.push(song);
    }
    (songs, current)
}

/// The watch queue for `endpoint`, first page or a continuation of it.
///
/// The returned endpoint is the one to send back with `continuation`; it
/// gains the queue's playlist id when the request had none.
pub fn parse_next(response: &NextResponse, endpoint: &WatchEndpoint, heuristics: &BrowseIdHeuristics) -> NextResult {
    let ctx = ResolutionContext::new(heuristics);
    let queue = response.queue();
    let (items, current_index) = queue_songs(response, &ctx);

    let continuation = if items.is_empty() {
        None
    } else {
        queue.and_then(|q| q.continuation())
    };

    let mut endpoint = endpoint.clone();
    if endpoint.playlist_id.is_none() {
        endpoint.playlist_id = queue.and_then(|q| q.playlist_id.clone());
    }

    NextResult {
        title: queue.and_then(|q| q.title.clone()),
        items,
        current_index,
        lyrics_endpoint: response
            .tab_endpoint(PAGE_TYPE_LYRICS, 1)
            .and_then(|e| e.to_browse_endpoint()),
        related_endpoint: response
            .tab_endpoint(PAGE_TYPE_RELATED, 2)
            .and_then(|e| e.to_browse_endpoint()),
        continuation,
        endpoint,
    }
}

pub fn parse_lyrics(response: &BrowseResponse) -> Option<String> {
    response.section_nodes().find_map(|n| {
        n.music_description_shelf_renderer
            .as_ref()?
            .description
            .as_ref()?
            .text()
    })
}

/// Items of the "Related" tab grouped by kind, each kind deduplicated by id.
pub fn parse_related(response: &BrowseResponse, heuristics: &BrowseIdHeuristics) -> RelatedPage {
    let ctx = ResolutionContext::new(heuristics);
    let mut page = RelatedPage::default();

    let nodes = response
        .section_nodes()
        .filter_map(|n| n.carousel())
        .flat_map(|c| c.contents.iter())
        .filter_map(|n| n.node());

    for item in nodes.filter_map(|node| resolve(node, &ctx)) {
        match item {
            Item::Song(s) => page.songs.push(s),
            Item::Album(a) => page.albums.push(a),
            Item::Artist(a) => page.artists.push(a),
            Item::Playlist(p) => page.playlists.push(p),
            Item::Podcast(_) | Item::Episode(_) => {}
        }
    }

    RelatedPage {
        songs: dedupe_by(page.songs, |s| s.id.clone()),
        albums: dedupe_by(page.albums, |a| a.id.clone()),
        artists: dedupe_by(page.artists, |a| a.id.clone()),
        playlists: dedupe_by(page.playlists, |p| p.id.clone()),
    }
}
