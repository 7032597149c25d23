#[cfg(test)]
#[path = "resources_test.rs"]
mod resources_test;

use content::item::Resource;
use content::listing::{Facet, search_matches};

/// Cards shown per page on the resources grid.
pub const PAGE_SIZE: usize = 6;

/// Filter state for the resources page: a resource-type facet plus free-text
/// search, both applied client-side over the fetched list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourceFilters {
    pub kind: Facet,
    pub search: String,
    pub page: usize,
}

impl Default for ResourceFilters {
    fn default() -> Self {
        Self {
            kind: Facet::All,
            search: String::new(),
            page: 1,
        }
    }
}

impl ResourceFilters {
    pub fn set_kind(&mut self, facet: Facet) {
        self.kind = facet;
        self.page = 1;
    }

    pub fn set_search(&mut self, text: String) {
        self.search = text;
        self.page = 1;
    }

    /// Whether a resource passes the facet and the search text.
    #[must_use]
    pub fn matches(&self, resource: &Resource) -> bool {
        self.kind.admits(&resource.kind)
            && search_matches(&self.search, &resource.title, &resource.description)
    }
}
