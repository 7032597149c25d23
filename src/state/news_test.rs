use content::listing::Facet;

use super::*;

// =============================================================
// Page resets
// =============================================================

#[test]
fn default_page_is_one() {
    assert_eq!(NewsFilters::default().page, 1);
}

#[test]
fn changing_the_state_facet_resets_the_page() {
    let mut filters = NewsFilters { page: 3, ..NewsFilters::default() };
    filters.set_state(Facet::Value("Kerala".to_owned()));
    assert_eq!(filters.page, 1);
}

#[test]
fn changing_the_language_facet_resets_the_page() {
    let mut filters = NewsFilters { page: 5, ..NewsFilters::default() };
    filters.set_language(Facet::All);
    assert_eq!(filters.page, 1);
}

#[test]
fn changing_the_search_text_resets_the_page() {
    let mut filters = NewsFilters { page: 2, ..NewsFilters::default() };
    filters.set_search("festival".to_owned());
    assert_eq!(filters.page, 1);
    assert_eq!(filters.search, "festival");
}

// =============================================================
// query_pairs
// =============================================================

#[test]
fn all_facets_and_blank_search_produce_no_parameters() {
    assert!(query_pairs(&Facet::All, &Facet::All, "  ").is_empty());
}

#[test]
fn concrete_facets_become_parameters() {
    let pairs = query_pairs(
        &Facet::Value("Kerala".to_owned()),
        &Facet::Value("Malayalam".to_owned()),
        "",
    );
    assert_eq!(
        pairs,
        vec![
            ("state", "Kerala".to_owned()),
            ("language", "Malayalam".to_owned()),
        ]
    );
}

#[test]
fn search_text_is_trimmed_into_a_parameter() {
    let pairs = query_pairs(&Facet::All, &Facet::All, "  script fair ");
    assert_eq!(pairs, vec![("search", "script fair".to_owned())]);
}
