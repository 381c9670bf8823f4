use crate::{
    common::{Error, Result},
    models::{Item, SearchResult, SearchSuggestions, SearchSummaryPage},
    renderer::{SearchResponse, SearchSuggestionsResponse},
    resolver::{BrowseIdHeuristics, ResolutionContext, resolve_all},
};

use super::{continued_page, first_list_page, items_page, sections_of};

/// Results of a filtered search: the single shelf of the chosen category.
pub fn parse_search(response: &SearchResponse, heuristics: &BrowseIdHeuristics) -> Result<SearchResult> {
    let ctx = ResolutionContext::new(heuristics);
    let sections = response
        .sections()
        .ok_or(Error::UnexpectedResponse("search results without a section list"))?;

    Ok(first_list_page(&sections.contents, &ctx).unwrap_or_default())
}

pub fn parse_search_continuation(
    response: &SearchResponse,
    heuristics: &BrowseIdHeuristics,
) -> SearchResult {
    let ctx = ResolutionContext::new(heuristics);
    match response
        .continuation_contents
        .as_ref()
        .and_then(|c| c.music_shelf_continuation.as_ref())
    {
        Some(shelf) => items_page(&shelf.contents, shelf.continuation(), &ctx),
        None => continued_page(Vec::new(), None),
    }
}

/// Unfiltered search: the top-result card plus one section per category.
pub fn parse_search_summary(
    response: &SearchResponse,
    heuristics: &BrowseIdHeuristics,
) -> Result<SearchSummaryPage> {
    let ctx = ResolutionContext::new(heuristics);
    let sections = response
        .sections()
        .ok_or(Error::UnexpectedResponse("search results without a section list"))?;

    Ok(SearchSummaryPage {
        summaries: sections_of(&sections.contents, &ctx),
    })
}

pub fn parse_search_suggestions(
    response: &SearchSuggestionsResponse,
    heuristics: &BrowseIdHeuristics,
) -> SearchSuggestions {
    let ctx = ResolutionContext::new(heuristics);
    let mut queries = Vec::new();
    let mut nodes = Vec::new();

    let entries = response
        .contents
        .iter()
        .filter_map(|s| s.search_suggestions_section_renderer.as_ref())
        .flat_map(|s| s.contents.iter());

    for entry in entries {
        match entry.search_suggestion_renderer.as_ref() {
            Some(suggestion) => queries.extend(suggestion.query()),
            None => nodes.push(&entry.item),
        }
    }

    let items: Vec<Item> = resolve_all(nodes, &ctx);
    SearchSuggestions { queries, items }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::fixtures;
    use serde_json::json;

    fn search_response(value: serde_json::Value) -> SearchResponse {
        serde_json::from_value(value).expect("valid search response")
    }

    fn tabbed(sections: serde_json::Value) -> serde_json::Value {
        json!({ "contents": { "tabbedSearchResultsRenderer": { "tabs": [{
            "tabRenderer": { "content": { "sectionListRenderer": { "contents": sections } } }
        }] } } })
    }

    #[test]
    fn test_filtered_search_reads_shelf_and_cursor() {
        let h = BrowseIdHeuristics::default();
        let response = search_response(tabbed(json!([
            { "musicShelfRenderer": {
                "title": fixtures::text("Songs"),
                "contents": [fixtures::song_row("s1", "One"), fixtures::song_row("s2", "Two")],
                "continuations": [{ "nextContinuationData": { "continuation": "more" } }]
            } }
        ])));

        let page = parse_search(&response, &h).expect("search page");
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.continuation.as_ref().map(|c| c.as_str()), Some("more"));
    }

    #[test]
    fn test_empty_continuation_is_terminal() {
        let h = BrowseIdHeuristics::default();
        let response = search_response(json!({
            "continuationContents": { "musicShelfContinuation": {
                "contents": [],
                "continuations": [{ "nextContinuationData": { "continuation": "again" } }]
            } }
        }));
        assert!(parse_search_continuation(&response, &h).is_terminal());
    }

    #[test]
    fn test_summary_keeps_top_result_first() {
        let h = BrowseIdHeuristics::default();
        let response = search_response(tabbed(json!([
            { "musicCardShelfRenderer": {
                "title": { "runs": [{ "text": "Random Access Memories", "navigationEndpoint": fixtures::browse("MPREb_ram", "MUSIC_PAGE_TYPE_ALBUM") }] },
                "thumbnail": fixtures::thumbnail("https://img/ram"),
                "contents": [fixtures::song_row("gl", "Get Lucky")]
            } },
            { "musicShelfRenderer": {
                "title": fixtures::text("Songs"),
                "contents": [fixtures::song_row("s1", "One")]
            } }
        ])));

        let summary = parse_search_summary(&response, &h).expect("summary");
        assert_eq!(summary.summaries.len(), 2);
        assert_eq!(summary.summaries[0].title, "Top result");
        assert_eq!(summary.summaries[0].items.len(), 2);
        assert_eq!(summary.summaries[0].items[0].id(), "MPREb_ram");
    }

    #[test]
    fn test_missing_section_list_is_unexpected() {
        let h = BrowseIdHeuristics::default();
        let err = parse_search(&search_response(json!({})), &h).unwrap_err();
        assert!(matches!(err, Error::UnexpectedResponse(_)));
    }

    #[test]
    fn test_suggestions_split_queries_and_items() {
        let h = BrowseIdHeuristics::default();
        let response: SearchSuggestionsResponse = serde_json::from_value(json!({
            "contents": [
                { "searchSuggestionsSectionRenderer": { "contents": [
                    { "searchSuggestionRenderer": { "suggestion": { "runs": [{ "text": "daft" }, { "text": " punk" }] } } }
                ] } },
                { "searchSuggestionsSectionRenderer": { "contents": [fixtures::song_row("s1", "One")] } }
            ]
        }))
        .expect("valid suggestions");

        let suggestions = parse_search_suggestions(&response, &h);
        assert_eq!(suggestions.queries, vec!["daft punk".to_string()]);
        assert_eq!(suggestions.items.len(), 1);
    }
}
