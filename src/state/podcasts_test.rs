use content::item::{ItemId, MediaKind, Podcast};
use content::listing::Facet;

use super::*;

fn episode(kind: MediaKind, category: &str) -> Podcast {
    Podcast {
        id: ItemId::Number(1),
        title: "Voices of the ghats".to_owned(),
        description: String::new(),
        media_url: "https://cdn.example.org/ep1.mp3".to_owned(),
        kind,
        duration_secs: 0,
        category: category.to_owned(),
        published_at: String::new(),
    }
}

#[test]
fn kind_and_category_facets_combine() {
    let mut filters = PodcastFilters::default();
    filters.set_kind(Facet::Value("audio".to_owned()));
    filters.set_category(Facet::Value("Folk music".to_owned()));
    assert!(filters.matches(&episode(MediaKind::Audio, "Folk music")));
    assert!(!filters.matches(&episode(MediaKind::Video, "Folk music")));
    assert!(!filters.matches(&episode(MediaKind::Audio, "Interviews")));
}

#[test]
fn facet_changes_reset_the_page() {
    let mut filters = PodcastFilters { page: 3, ..PodcastFilters::default() };
    filters.set_category(Facet::All);
    assert_eq!(filters.page, 1);
}

// =============================================================
// format_duration
// =============================================================

#[test]
fn short_durations_render_minutes_and_seconds() {
    assert_eq!(format_duration(0), "0:00");
    assert_eq!(format_duration(59), "0:59");
    assert_eq!(format_duration(754), "12:34");
}

#[test]
fn long_durations_include_hours() {
    assert_eq!(format_duration(3600), "1:00:00");
    assert_eq!(format_duration(3725), "1:02:05");
}
