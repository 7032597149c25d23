#[cfg(test)]
#[path = "podcasts_test.rs"]
mod podcasts_test;

use content::item::Podcast;
use content::listing::Facet;

/// Episodes shown per page on the podcasts grid.
pub const PAGE_SIZE: usize = 4;

/// Filter state for the podcasts page: media-kind and category facets,
/// applied client-side over the fetched list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PodcastFilters {
    pub kind: Facet,
    pub category: Facet,
    pub page: usize,
}

impl Default for PodcastFilters {
    fn default() -> Self {
        Self {
            kind: Facet::All,
            category: Facet::All,
            page: 1,
        }
    }
}

impl PodcastFilters {
    pub fn set_kind(&mut self, facet: Facet) {
        self.kind = facet;
        self.page = 1;
    }

    pub fn set_category(&mut self, facet: Facet) {
        self.category = facet;
        self.page = 1;
    }

    /// Whether an episode passes both facets.
    #[must_use]
    pub fn matches(&self, episode: &Podcast) -> bool {
        self.kind.admits(episode.kind.as_str()) && self.category.admits(&episode.category)
    }
}

/// Render a duration in seconds as `m:ss` (or `h:mm:ss` past the hour).
#[must_use]
pub fn format_duration(seconds: u32) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    if hours > 0 {
        format!("{hours}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes}:{secs:02}")
    }
}
