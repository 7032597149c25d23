use content::item::{Exercise, ItemId};
use content::listing::Facet;

use super::*;

fn exercise(level: &str, category: &str) -> Exercise {
    Exercise {
        id: ItemId::Number(1),
        title: "Greetings".to_owned(),
        description: String::new(),
        level: level.to_owned(),
        category: category.to_owned(),
        questions: String::new(),
    }
}

#[test]
fn both_facets_must_admit() {
    let mut filters = ExerciseFilters::default();
    filters.set_level(Facet::Value("Beginner".to_owned()));
    filters.set_category(Facet::Value("Vocabulary".to_owned()));
    assert!(filters.matches(&exercise("Beginner", "Vocabulary")));
    assert!(!filters.matches(&exercise("Beginner", "Grammar")));
    assert!(!filters.matches(&exercise("Advanced", "Vocabulary")));
}

#[test]
fn facet_changes_reset_the_page() {
    let mut filters = ExerciseFilters { page: 2, ..ExerciseFilters::default() };
    filters.set_level(Facet::All);
    assert_eq!(filters.page, 1);
    filters.page = 4;
    filters.set_category(Facet::Value("Grammar".to_owned()));
    assert_eq!(filters.page, 1);
}
