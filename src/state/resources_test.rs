use content::item::{ItemId, Resource};
use content::listing::Facet;

use super::*;

fn resource(title: &str, kind: &str) -> Resource {
    Resource {
        id: ItemId::Number(1),
        title: title.to_owned(),
        description: "A pocket reference".to_owned(),
        url: "https://example.org".to_owned(),
        kind: kind.to_owned(),
    }
}

#[test]
fn kind_facet_matches_case_insensitively() {
    let mut filters = ResourceFilters::default();
    filters.set_kind(Facet::Value("book".to_owned()));
    assert!(filters.matches(&resource("Pocket grammar", "Book")));
    assert!(!filters.matches(&resource("Sandhi drills", "Course")));
}

#[test]
fn search_narrows_within_the_facet() {
    let mut filters = ResourceFilters::default();
    filters.set_search("grammar".to_owned());
    assert!(filters.matches(&resource("Pocket grammar", "Book")));
    assert!(!filters.matches(&resource("Sandhi drills", "Course")));
}

#[test]
fn facet_and_search_changes_both_reset_the_page() {
    let mut filters = ResourceFilters { page: 3, ..ResourceFilters::default() };
    filters.set_kind(Facet::All);
    assert_eq!(filters.page, 1);
    filters.page = 2;
    filters.set_search("drills".to_owned());
    assert_eq!(filters.page, 1);
}
