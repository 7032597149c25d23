//! Generic facet/search filtering and pagination.
//!
//! Every listing page derives its visible slice through [`paginate`]: filter
//! in API order, clamp the requested page, cut the window. The same rules
//! apply whether the facets were applied client-side (gallery, resources,
//! exercises, podcasts) or server-side via query parameters (news): in both
//! styles the displayed page is `slice((page-1)*per_page, page*per_page)` of
//! the current filtered result.

#[cfg(test)]
#[path = "listing_test.rs"]
mod listing_test;

/// One filterable dimension. [`Facet::All`] is the unset sentinel and admits
/// every item; a concrete value matches case-insensitively, since the source
/// data mixes casing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Facet {
    #[default]
    All,
    Value(String),
}

impl Facet {
    /// Build a facet from a `<select>` value, where the empty string is the
    /// "All" option.
    #[must_use]
    pub fn from_select(value: &str) -> Self {
        if value.is_empty() {
            Self::All
        } else {
            Self::Value(value.to_owned())
        }
    }

    /// Whether an item field passes this facet.
    #[must_use]
    pub fn admits(&self, field: &str) -> bool {
        match self {
            Self::All => true,
            Self::Value(value) => value.eq_ignore_ascii_case(field),
        }
    }
}

/// Case-insensitive free-text match over an item's title and description.
/// A blank query admits everything.
#[must_use]
pub fn search_matches(query: &str, title: &str, description: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    let haystack = format!("{title} {description}").to_lowercase();
    haystack.contains(&query)
}

/// One visible page of a filtered collection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Paged<T> {
    /// The items on the visible page, in API order. Never longer than the
    /// `per_page` passed to [`paginate`].
    pub items: Vec<T>,
    /// The clamped page number actually shown.
    pub page: usize,
    /// `ceil(total_matches / per_page)`; zero when nothing matched.
    pub total_pages: usize,
    /// How many items passed the filter across all pages.
    pub total_matches: usize,
}

/// Number of pages needed for `matches` items at `per_page` per page.
#[must_use]
pub fn page_count(matches: usize, per_page: usize) -> usize {
    matches.div_ceil(per_page.max(1))
}

/// Filter `items` with `keep` and cut out the requested page.
///
/// The requested page is clamped to `[1, total_pages]` (page 1 when nothing
/// matched), so an out-of-range request yields the last page, or an empty
/// page for an empty result, rather than a panic.
#[must_use]
pub fn paginate<T, P>(items: &[T], keep: P, page: usize, per_page: usize) -> Paged<T>
where
    T: Clone,
    P: Fn(&T) -> bool,
{
    let per_page = per_page.max(1);
    let matched: Vec<&T> = items.iter().filter(|item| keep(item)).collect();
    let total_matches = matched.len();
    let total_pages = page_count(total_matches, per_page);
    let page = page.clamp(1, total_pages.max(1));
    let items = matched
        .into_iter()
        .skip((page - 1) * per_page)
        .take(per_page)
        .cloned()
        .collect();
    Paged {
        items,
        page,
        total_pages,
        total_matches,
    }
}
