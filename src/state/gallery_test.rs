use content::item::{GalleryItem, ItemId, MediaKind};
use content::listing::Facet;

use super::*;

fn item(kind: MediaKind) -> GalleryItem {
    GalleryItem {
        id: ItemId::Number(1),
        title: "Mural walk".to_owned(),
        caption: String::new(),
        media_url: "https://cdn.example.org/1.jpg".to_owned(),
        kind,
        category: String::new(),
    }
}

#[test]
fn all_facet_admits_both_kinds() {
    let filters = GalleryFilters::default();
    assert!(filters.matches(&item(MediaKind::Image)));
    assert!(filters.matches(&item(MediaKind::Video)));
}

#[test]
fn video_facet_admits_only_videos() {
    let mut filters = GalleryFilters::default();
    filters.set_kind(Facet::Value("video".to_owned()));
    assert!(filters.matches(&item(MediaKind::Video)));
    assert!(!filters.matches(&item(MediaKind::Image)));
}

#[test]
fn changing_the_kind_facet_resets_the_page() {
    let mut filters = GalleryFilters { page: 4, ..GalleryFilters::default() };
    filters.set_kind(Facet::Value("image".to_owned()));
    assert_eq!(filters.page, 1);
}
