#[cfg(test)]
#[path = "exercises_test.rs"]
mod exercises_test;

use content::item::Exercise;
use content::listing::Facet;

/// Cards shown per page on the exercises grid.
pub const PAGE_SIZE: usize = 6;

/// Filter state for the exercises page: level and category facets, applied
/// client-side over the fetched list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExerciseFilters {
    pub level: Facet,
    pub category: Facet,
    pub page: usize,
}

impl Default for ExerciseFilters {
    fn default() -> Self {
        Self {
            level: Facet::All,
            category: Facet::All,
            page: 1,
        }
    }
}

impl ExerciseFilters {
    pub fn set_level(&mut self, facet: Facet) {
        self.level = facet;
        self.page = 1;
    }

    pub fn set_category(&mut self, facet: Facet) {
        self.category = facet;
        self.page = 1;
    }

    /// Whether an exercise passes both facets.
    #[must_use]
    pub fn matches(&self, exercise: &Exercise) -> bool {
        self.level.admits(&exercise.level) && self.category.admits(&exercise.category)
    }
}
