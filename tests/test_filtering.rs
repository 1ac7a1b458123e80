use tag_picker::{PickerEvent, PickerState};

fn fruit_state() -> PickerState {
    PickerState::new(
        ["Apple", "banana", "Cherry"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
    )
}

#[test]
fn substring_match_is_case_insensitive() {
    let state = fruit_state().apply(&PickerEvent::QueryChanged("an".to_string()));
    assert_eq!(state.filtered_items(), vec!["banana"]);

    // Query case does not matter either
    let state = fruit_state().apply(&PickerEvent::QueryChanged("AN".to_string()));
    assert_eq!(state.filtered_items(), vec!["banana"]);

    // Nor does item case
    let state = fruit_state().apply(&PickerEvent::QueryChanged("apple".to_string()));
    assert_eq!(state.filtered_items(), vec!["Apple"]);
}

#[test]
fn filter_preserves_available_order() {
    let state = fruit_state().apply(&PickerEvent::QueryChanged("e".to_string()));

    assert_eq!(state.filtered_items(), vec!["Apple", "Cherry"]);
}

#[test]
fn dropdown_is_suppressed_only_while_query_is_empty() {
    let state = fruit_state();
    assert!(!state.dropdown_visible());

    let typed = state.apply(&PickerEvent::QueryChanged("zzz".to_string()));
    // No matches, but the dropdown still shows (with an empty list)
    assert!(typed.dropdown_visible());
    assert!(typed.filtered_items().is_empty());

    let cleared = typed.apply(&PickerEvent::QueryChanged(String::new()));
    assert!(!cleared.dropdown_visible());
}

#[test]
fn empty_query_matches_everything() {
    let state = fruit_state();

    assert_eq!(state.filtered_items().len(), state.available.len());
}

#[test]
fn selected_items_never_appear_in_the_filter() {
    let state = fruit_state()
        .apply(&PickerEvent::Select("banana".to_string()))
        .apply(&PickerEvent::QueryChanged("an".to_string()));

    assert!(state.filtered_items().is_empty());
}

#[test]
fn whitespace_in_the_query_is_significant() {
    let state = fruit_state().apply(&PickerEvent::QueryChanged(" an".to_string()));

    // Stored verbatim, so " an" does not match "banana"
    assert_eq!(state.query, " an");
    assert!(state.filtered_items().is_empty());
}
