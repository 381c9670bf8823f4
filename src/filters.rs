use crate::{
    configs::FiltersConfig,
    models::{Item, MusicVideoType, Section, SongItem},
};

/// Longest duration, in seconds, of a video that still counts as a short.
pub const SHORTS_MAX_SECS: u32 = 60;

fn is_short(song: &SongItem) -> bool {
    match song.video_type {
        Some(MusicVideoType::Shorts) => true,
        _ => song.is_video() && song.duration.is_some_and(|d| d <= SHORTS_MAX_SECS),
    }
}

/// Drops explicit songs and albums.
pub fn filter_explicit(items: &[Item], enabled: bool) -> Vec<Item> {
    items
        .iter()
        .filter(|item| !enabled || !item.is_explicit())
        .cloned()
        .collect()
}

/// Drops songs backed by a music video instead of an audio track.
pub fn filter_video_songs(items: &[Item], enabled: bool) -> Vec<Item> {
    items
        .iter()
        .filter(|item| !enabled || !item.as_song().is_some_and(SongItem::is_video))
        .cloned()
        .collect()
}

pub fn filter_shorts(items: &[Item], enabled: bool) -> Vec<Item> {
    items
        .iter()
        .filter(|item| !enabled || !item.as_song().is_some_and(is_short))
        .cloned()
        .collect()
}

/// The three content filters, applied together in one pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterSet {
    pub hide_explicit: bool,
    pub hide_video_songs: bool,
    pub hide_shorts: bool,
}

impl From<FiltersConfig> for FilterSet {
    fn from(config: FiltersConfig) -> Self {
        Self {
            hide_explicit: config.hide_explicit,
            hide_video_songs: config.hide_video_songs,
            hide_shorts: config.hide_shorts,
        }
    }
}

impl FilterSet {
    pub fn is_noop(&self) -> bool {
        !(self.hide_explicit || self.hide_video_songs || self.hide_shorts)
    }

    pub fn keeps(&self, item: &Item) -> bool {
        if self.hide_explicit && item.is_explicit() {
            return false;
        }
        match item.as_song() {
            Some(song) if self.hide_video_songs && song.is_video() => false,
            Some(song) if self.hide_shorts && is_short(song) => false,
            _ => true,
        }
    }

    pub fn keeps_song(&self, song: &SongItem) -> bool {
        !(self.hide_explicit && song.explicit
            || self.hide_video_songs && song.is_video()
            || self.hide_shorts && is_short(song))
    }

    pub fn apply(&self, items: Vec<Item>) -> Vec<Item> {
        if self.is_noop() {
            return items;
        }
        items.into_iter().filter(|i| self.keeps(i)).collect()
    }

    pub fn apply_songs(&self, songs: Vec<SongItem>) -> Vec<SongItem> {
        if self.is_noop() {
            return songs;
        }
        songs.into_iter().filter(|s| self.keeps_song(s)).collect()
    }

    /// Filters every section's items and drops sections left empty.
    pub fn apply_sections(&self, sections: Vec<Section>) -> Vec<Section> {
        if self.is_noop() {
            return sections;
        }
        sections
            .into_iter()
            .filter_map(|mut section| {
                section.items = self.apply(std::mem::take(&mut section.items));
                (!section.items.is_empty()).then_some(section)
            })
            .collect()
    }
}
