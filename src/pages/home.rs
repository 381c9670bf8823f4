use crate::{
    models::{Chip, HomePage},
    renderer::{BrowseResponse, SectionListRenderer},
    resolver::{BrowseIdHeuristics, ResolutionContext},
};

use super::sections_of;

fn chips_of(list: &SectionListRenderer) -> Vec<Chip> {
    let Some(cloud) = list
        .header
        .as_ref()
        .and_then(|h| h.chip_cloud_renderer.as_ref())
    else {
        return Vec::new();
    };
    cloud
        .chips
        .iter()
        .filter_map(|c| c.chip_cloud_chip_renderer.as_ref())
        .filter_map(|chip| {
            Some(Chip {
                title: chip.text.as_ref()?.text()?,
                endpoint: chip
                    .navigation_endpoint
                    .as_ref()
                    .and_then(|e| e.to_browse_endpoint()),
                selected: chip.is_selected,
            })
        })
        .collect()
}

/// Home feed, or the feed of a selected chip.
pub fn parse_home(response: &BrowseResponse, heuristics: &BrowseIdHeuristics) -> HomePage {
    let ctx = ResolutionContext::new(heuristics);
    let Some(list) = response.primary_sections() else {
        return HomePage::default();
    };
    HomePage {
        chips: chips_of(list),
        sections: sections_of(&list.contents, &ctx),
        continuation: list.continuation(),
    }
}

/// Further home sections. A batch with no surviving section ends the feed.
pub fn parse_home_continuation(response: &BrowseResponse, heuristics: &BrowseIdHeuristics) -> HomePage {
    let ctx = ResolutionContext::new(heuristics);
    let Some(list) = response
        .continuation_contents
        .as_ref()
        .and_then(|c| c.section_list_continuation.as_ref())
    else {
        return HomePage::default();
    };

    let sections = sections_of(&list.contents, &ctx);
    let continuation = if sections.is_empty() {
        tracing::debug!("Home continuation produced no sections, treating it as terminal");
        None
    } else {
        list.continuation()
    };
    HomePage {
        chips: Vec::new(),
        sections,
        continuation,
    }
}
