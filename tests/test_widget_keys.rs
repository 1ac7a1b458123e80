use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tag_picker::{PickerAction, TagPickerWidget};

/// Helper to create a key event
fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

/// Helper to create a key event with modifiers
fn key_with_mod(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent::new(code, modifiers)
}

fn fruit_widget() -> TagPickerWidget {
    TagPickerWidget::new(
        ["Apple", "banana", "Cherry"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
    )
}

fn type_str(widget: &mut TagPickerWidget, text: &str) {
    for c in text.chars() {
        widget.handle_key(key(KeyCode::Char(c)));
    }
}

#[test]
fn typing_updates_the_query() {
    let mut widget = fruit_widget();

    let action = widget.handle_key(key(KeyCode::Char('a')));
    assert_eq!(action, PickerAction::QueryChanged("a".to_string()));

    let action = widget.handle_key(key(KeyCode::Char('n')));
    assert_eq!(action, PickerAction::QueryChanged("an".to_string()));

    assert_eq!(widget.state().query, "an");
    assert!(widget.state().dropdown_visible());
}

#[test]
fn enter_selects_the_item_under_the_cursor() {
    let mut widget = fruit_widget();
    type_str(&mut widget, "an");

    let action = widget.handle_key(key(KeyCode::Enter));
    assert_eq!(action, PickerAction::Selected("banana".to_string()));

    // Selection clears the query, so the input box follows
    assert_eq!(widget.state().query, "");
    assert_eq!(widget.selected_items(), ["banana"]);
    assert!(!widget.state().dropdown_visible());
}

#[test]
fn arrow_keys_move_the_dropdown_cursor() {
    let mut widget = fruit_widget();
    // "e" matches Apple and Cherry, in that order
    type_str(&mut widget, "e");

    widget.handle_key(key(KeyCode::Down));
    let action = widget.handle_key(key(KeyCode::Enter));
    assert_eq!(action, PickerAction::Selected("Cherry".to_string()));
}

#[test]
fn cursor_resets_when_the_query_changes() {
    let mut widget = fruit_widget();
    type_str(&mut widget, "e");
    widget.handle_key(key(KeyCode::Down));

    // Narrowing the query invalidates the old cursor position
    type_str(&mut widget, "r");
    let action = widget.handle_key(key(KeyCode::Enter));
    assert_eq!(action, PickerAction::Selected("Cherry".to_string()));
}

#[test]
fn enter_without_a_dropdown_does_nothing() {
    let mut widget = fruit_widget();

    let action = widget.handle_key(key(KeyCode::Enter));
    assert_eq!(action, PickerAction::None);
    assert!(widget.selected_items().is_empty());
}

#[test]
fn backspace_with_text_edits_the_query() {
    let mut widget = fruit_widget();
    type_str(&mut widget, "an");

    let action = widget.handle_key(key(KeyCode::Backspace));
    assert_eq!(action, PickerAction::QueryChanged("a".to_string()));
    assert_eq!(widget.state().query, "a");
    assert_eq!(widget.state().highlighted, None);
}

#[test]
fn backspace_on_empty_query_drives_two_step_removal() {
    let mut widget = fruit_widget();
    type_str(&mut widget, "an");
    widget.handle_key(key(KeyCode::Enter));
    type_str(&mut widget, "ch");
    widget.handle_key(key(KeyCode::Enter));
    assert_eq!(widget.selected_items(), ["banana", "Cherry"]);

    // First backspace arms the last tag
    let action = widget.handle_key(key(KeyCode::Backspace));
    assert_eq!(action, PickerAction::None);
    assert_eq!(widget.state().highlighted, Some(1));

    // Second backspace removes it
    let action = widget.handle_key(key(KeyCode::Backspace));
    assert_eq!(action, PickerAction::Removed("Cherry".to_string()));
    assert_eq!(widget.selected_items(), ["banana"]);
    assert_eq!(widget.state().highlighted, None);
}

#[test]
fn escape_and_ctrl_q_quit() {
    let mut widget = fruit_widget();

    assert_eq!(widget.handle_key(key(KeyCode::Esc)), PickerAction::Quit);
    assert_eq!(
        widget.handle_key(key_with_mod(KeyCode::Char('q'), KeyModifiers::CONTROL)),
        PickerAction::Quit
    );
    assert_eq!(
        widget.handle_key(key_with_mod(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        PickerAction::Quit
    );
}

#[test]
fn tab_selects_like_enter() {
    let mut widget = fruit_widget();
    type_str(&mut widget, "grape");

    // No match for "grape" in this pool: Tab is a no-op
    assert_eq!(widget.handle_key(key(KeyCode::Tab)), PickerAction::None);

    let mut widget = fruit_widget();
    type_str(&mut widget, "ban");
    assert_eq!(
        widget.handle_key(key(KeyCode::Tab)),
        PickerAction::Selected("banana".to_string())
    );
}
