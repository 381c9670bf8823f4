//! Ordered extractor lists for required fields.
//!
//! Each field that moved around between upstream experiments gets a list of
//! extractors, tried in order. The first one that yields a non-empty value
//! wins; when all fail the field is missing and the node is dropped.

pub type Extractor<N, T> = fn(&N) -> Option<T>;

pub fn first_of<N, T>(node: &N, chain: &[Extractor<N, T>]) -> Option<T> {
    chain.iter().find_map(|extract| extract(node))
}

/// [`first_of`] for text fields, skipping blank values.
pub fn first_text_of<N>(node: &N, chain: &[Extractor<N, String>]) -> Option<String> {
    chain
        .iter()
        .filter_map(|extract| extract(node))
        .find(|s| !s.trim().is_empty())
}
