use super::*;

fn numbers(n: usize) -> Vec<usize> {
    (0..n).collect()
}

// =============================================================
// Facet
// =============================================================

#[test]
fn facet_all_admits_everything() {
    assert!(Facet::All.admits("Hindi"));
    assert!(Facet::All.admits(""));
}

#[test]
fn facet_value_matches_case_insensitively() {
    let facet = Facet::Value("hindi".to_owned());
    assert!(facet.admits("Hindi"));
    assert!(facet.admits("HINDI"));
    assert!(!facet.admits("Marathi"));
}

#[test]
fn facet_from_select_maps_empty_to_all() {
    assert_eq!(Facet::from_select(""), Facet::All);
    assert_eq!(Facet::from_select("video"), Facet::Value("video".to_owned()));
}

// =============================================================
// search_matches
// =============================================================

#[test]
fn blank_search_admits_everything() {
    assert!(search_matches("", "Mural walk", "street art"));
    assert!(search_matches("   ", "Mural walk", "street art"));
}

#[test]
fn search_is_case_insensitive_over_title_and_description() {
    assert!(search_matches("MURAL", "Mural walk", ""));
    assert!(search_matches("street", "Mural walk", "Street art in Kochi"));
}

#[test]
fn search_with_no_match_admits_nothing() {
    assert!(!search_matches("podcast", "Mural walk", "street art"));
}

// =============================================================
// paginate page arithmetic
// =============================================================

#[test]
fn ten_items_page_size_four_first_page() {
    let paged = paginate(&numbers(10), |_| true, 1, 4);
    assert_eq!(paged.items, vec![0, 1, 2, 3]);
    assert_eq!(paged.total_pages, 3);
    assert_eq!(paged.total_matches, 10);
}

#[test]
fn ten_items_page_size_four_last_page_is_short() {
    let paged = paginate(&numbers(10), |_| true, 3, 4);
    assert_eq!(paged.items, vec![8, 9]);
    assert_eq!(paged.page, 3);
}

#[test]
fn page_past_the_end_clamps_to_last_page() {
    let paged = paginate(&numbers(10), |_| true, 4, 4);
    assert_eq!(paged.page, 3);
    assert_eq!(paged.items, vec![8, 9]);
}

#[test]
fn page_zero_clamps_to_first_page() {
    let paged = paginate(&numbers(10), |_| true, 0, 4);
    assert_eq!(paged.page, 1);
    assert_eq!(paged.items, vec![0, 1, 2, 3]);
}

#[test]
fn page_never_exceeds_page_size() {
    let items = numbers(23);
    for page in 0..10 {
        let paged = paginate(&items, |n| n % 2 == 0, page, 5);
        assert!(paged.items.len() <= 5, "page {page} overflowed");
    }
}

#[test]
fn filter_applies_before_slicing() {
    let paged = paginate(&numbers(10), |n| n % 2 == 0, 1, 4);
    assert_eq!(paged.items, vec![0, 2, 4, 6]);
    assert_eq!(paged.total_matches, 5);
    assert_eq!(paged.total_pages, 2);
}

#[test]
fn zero_matches_yield_empty_page_and_zero_pages() {
    let paged = paginate(&numbers(10), |_| false, 1, 4);
    assert!(paged.items.is_empty());
    assert_eq!(paged.total_pages, 0);
    assert_eq!(paged.total_matches, 0);
    assert_eq!(paged.page, 1);
}

#[test]
fn empty_collection_with_large_page_does_not_panic() {
    let paged = paginate(&Vec::<usize>::new(), |_| true, 99, 4);
    assert!(paged.items.is_empty());
    assert_eq!(paged.total_pages, 0);
}

#[test]
fn page_count_rounds_up() {
    assert_eq!(page_count(0, 4), 0);
    assert_eq!(page_count(1, 4), 1);
    assert_eq!(page_count(4, 4), 1);
    assert_eq!(page_count(5, 4), 2);
}
