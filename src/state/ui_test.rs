use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_defaults_to_dark_mode() {
    let state = UiState::default();
    assert!(state.dark_mode);
}

#[test]
fn ui_state_default_filter_is_all() {
    let state = UiState::default();
    assert_eq!(state.active_filter, Filter::All);
}

// =============================================================
// Filter
// =============================================================

#[test]
fn filter_all_shows_every_category() {
    for category in [Category::Games, Category::Apps, Category::Extras] {
        assert!(Filter::All.shows(category));
    }
}

#[test]
fn filter_category_shows_only_its_own() {
    assert!(Filter::Games.shows(Category::Games));
    assert!(!Filter::Games.shows(Category::Apps));
    assert!(!Filter::Games.shows(Category::Extras));

    assert!(Filter::Apps.shows(Category::Apps));
    assert!(!Filter::Apps.shows(Category::Games));

    assert!(Filter::Extras.shows(Category::Extras));
    assert!(!Filter::Extras.shows(Category::Games));
}

#[test]
fn filter_nav_order_starts_with_all_and_covers_every_category() {
    assert_eq!(Filter::NAV_ORDER[0], Filter::All);
    let categories: Vec<_> = Filter::NAV_ORDER.iter().filter_map(|f| f.category()).collect();
    assert_eq!(categories, [Category::Games, Category::Apps, Category::Extras]);
}

#[test]
fn filter_labels_are_distinct() {
    let labels: Vec<_> = Filter::NAV_ORDER.iter().map(|f| f.label()).collect();
    let mut deduped = labels.clone();
    deduped.sort_unstable();
    deduped.dedup();
    assert_eq!(deduped.len(), labels.len());
}
