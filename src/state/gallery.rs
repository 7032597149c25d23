#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

use content::item::GalleryItem;
use content::listing::Facet;

/// Tiles shown per page on the gallery grid.
pub const PAGE_SIZE: usize = 8;

/// Filter state for the gallery page: one media-kind facet, applied
/// client-side over the fetched list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryFilters {
    pub kind: Facet,
    pub page: usize,
}

impl Default for GalleryFilters {
    fn default() -> Self {
        Self {
            kind: Facet::All,
            page: 1,
        }
    }
}

impl GalleryFilters {
    pub fn set_kind(&mut self, facet: Facet) {
        self.kind = facet;
        self.page = 1;
    }

    /// Whether an item passes the current facet.
    #[must_use]
    pub fn matches(&self, item: &GalleryItem) -> bool {
        self.kind.admits(item.kind.as_str())
    }
}
