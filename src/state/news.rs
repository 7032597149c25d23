#[cfg(test)]
#[path = "news_test.rs"]
mod news_test;

use content::listing::Facet;

/// Articles shown per page on the news grid.
pub const PAGE_SIZE: usize = 4;

/// Filter state for the news page. State, language, and search are applied
/// server-side via query parameters; pagination stays client-side over the
/// returned list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewsFilters {
    pub state: Facet,
    pub language: Facet,
    pub search: String,
    pub page: usize,
}

impl Default for NewsFilters {
    fn default() -> Self {
        Self {
            state: Facet::All,
            language: Facet::All,
            search: String::new(),
            page: 1,
        }
    }
}

impl NewsFilters {
    pub fn set_state(&mut self, facet: Facet) {
        self.state = facet;
        self.page = 1;
    }

    pub fn set_language(&mut self, facet: Facet) {
        self.language = facet;
        self.page = 1;
    }

    pub fn set_search(&mut self, text: String) {
        self.search = text;
        self.page = 1;
    }
}

/// Query parameters for the server-side filtered list endpoint. The search
/// text is passed separately so callers can debounce it independently of the
/// facet selects; blank values are omitted entirely.
#[must_use]
pub fn query_pairs(state: &Facet, language: &Facet, search: &str) -> Vec<(&'static str, String)> {
    let mut pairs = Vec::new();
    if let Facet::Value(value) = state {
        pairs.push(("state", value.clone()));
    }
    if let Facet::Value(value) = language {
        pairs.push(("language", value.clone()));
    }
    let search = search.trim();
    if !search.is_empty() {
        pairs.push(("search", search.to_owned()));
    }
    pairs
}
