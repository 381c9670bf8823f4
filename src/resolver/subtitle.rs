use crate::{
    models::{AlbumRef, ArtistRef, PodcastRef},
    renderer::Run,
};

use super::{
    heuristics::{BrowseIdHeuristics, IdClass},
    text::{is_separator, parse_duration, parse_year},
};

/// Item-type labels the upstream puts first in search subtitles.
const TYPE_LABELS: &[&str] = &[
    "Song", "Video", "Album", "Single", "EP", "Playlist", "Artist", "Episode", "Podcast",
    "Profile", "Audiobook",
];

/// Counters that are never artist names.
const STAT_WORDS: &[&str] = &[
    "views", "plays", "songs", "song", "tracks", "episodes", "subscribers", "monthly audience",
    "likes",
];

/// Subtitle runs sorted by what they link to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubtitleParts {
    pub artists: Vec<ArtistRef>,
    pub album: Option<AlbumRef>,
    pub podcast: Option<PodcastRef>,
    pub year: Option<u16>,
    pub duration: Option<u32>,
    /// Unlinked segments that are neither a year nor a duration.
    pub plain: Vec<String>,
}

impl SubtitleParts {
    /// Runs are classified by their browse-id prefix, never by position.
    pub fn parse<'a>(runs: impl IntoIterator<Item = &'a Run>, heuristics: &BrowseIdHeuristics) -> Self {
        let mut parts = Self::default();

        for run in runs {
            let text = run.text.trim();
            if is_separator(text) {
                continue;
            }

            if let Some(id) = run.browse_id() {
                match heuristics.classify(id) {
                    Some(IdClass::Artist) => parts.artists.push(ArtistRef {
                        name: text.to_string(),
                        id: Some(id.to_string()),
                    }),
                    Some(IdClass::Album) if parts.album.is_none() => {
                        parts.album = Some(AlbumRef {
                            name: text.to_string(),
                            id: id.to_string(),
                        })
                    }
                    Some(IdClass::Podcast) if parts.podcast.is_none() => {
                        parts.podcast = Some(PodcastRef {
                            name: text.to_string(),
                            id: Some(id.to_string()),
                        })
                    }
                    _ => parts.plain.push(text.to_string()),
                }
                continue;
            }

            if parts.year.is_none() {
                if let Some(year) = parse_year(text) {
                    parts.year = Some(year);
                    continue;
                }
            }
            if parts.duration.is_none() {
                if let Some(duration) = parse_duration(text) {
                    parts.duration = Some(duration);
                    continue;
                }
            }
            parts.plain.push(text.to_string());
        }

        parts
    }

    /// Plain segments that can stand in for artist names when none are linked.
    pub fn unlinked_names(&self) -> impl Iterator<Item = &str> {
        self.plain
            .iter()
            .map(String::as_str)
            .filter(|s| !TYPE_LABELS.contains(s))
            .filter(|s| !is_stat(s))
    }

    /// Linked artists, else unlinked names.
    pub fn artists_or_names(&self) -> Vec<ArtistRef> {
        if !self.artists.is_empty() {
            return self.artists.clone();
        }
        self.unlinked_names()
            .take(1)
            .map(|name| ArtistRef {
                name: name.to_string(),
                id: None,
            })
            .collect()
    }

    /// First plain segment containing one of `words`, e.g. "12 songs".
    pub fn stat(&self, words: &[&str]) -> Option<String> {
        self.plain
            .iter()
            .find(|s| {
                let lower = s.to_lowercase();
                words.iter().any(|w| lower.contains(w))
            })
            .cloned()
    }
}

fn is_stat(s: &str) -> bool {
    let lower = s.to_lowercase();
    STAT_WORDS.iter().any(|w| lower.ends_with(w))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::Runs;
    use serde_json::json;

    fn runs(value: serde_json::Value) -> Runs {
        serde_json::from_value(value).expect("valid runs")
    }

    #[test]
    fn test_artists_and_album_by_prefix_not_position() {
        let h = BrowseIdHeuristics::default();
        let r = runs(json!({ "runs": [
            { "text": "Album Name", "navigationEndpoint": { "browseEndpoint": { "browseId": "MPREb_a" } } },
            { "text": " • " },
            { "text": "Artist A", "navigationEndpoint": { "browseEndpoint": { "browseId": "UCa" } } },
            { "text": " & " },
            { "text": "Artist B", "navigationEndpoint": { "browseEndpoint": { "browseId": "UCb" } } },
            { "text": " • " },
            { "text": "3:12" }
        ] }));

        let parts = SubtitleParts::parse(&r.runs, &h);
        assert_eq!(
            parts.artists.iter().map(|a| a.name.as_str()).collect::<Vec<_>>(),
            vec!["Artist A", "Artist B"]
        );
        assert_eq!(parts.album.as_ref().map(|a| a.id.as_str()), Some("MPREb_a"));
        assert_eq!(parts.duration, Some(192));
        assert!(parts.plain.is_empty());
    }

    #[test]
    fn test_year_and_unlinked_names() {
        let h = BrowseIdHeuristics::default();
        let r = runs(json!({ "runs": [
            { "text": "Single" }, { "text": " • " },
            { "text": "Various Artists" }, { "text": " • " },
            { "text": "2019" }, { "text": " • " },
            { "text": "1.2M views" }
        ] }));

        let parts = SubtitleParts::parse(&r.runs, &h);
        assert_eq!(parts.year, Some(2019));
        assert_eq!(parts.unlinked_names().collect::<Vec<_>>(), vec!["Various Artists"]);
        assert_eq!(parts.artists_or_names()[0].id, None);
        assert_eq!(parts.stat(&["views"]).as_deref(), Some("1.2M views"));
    }
}
