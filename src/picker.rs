//! Core tag picker state machine
//!
//! Pure state + reducer, independent of any rendering layer. The widget
//! translates terminal events into `PickerEvent`s; everything here is
//! synchronous and total.

use tracing::{debug, warn};

/// A candidate value. Equality is by value; the candidate pool is expected
/// to contain unique values (see `items::dedup_items`).
pub type Item = String;

/// Events that drive picker state transitions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerEvent {
    /// An available item was chosen (click on a dropdown entry, or Enter)
    Select(Item),

    /// A selected item was removed via its remove control
    Remove(Item),

    /// Backspace pressed while the query was empty
    Backspace,

    /// The query text changed
    QueryChanged(String),
}

/// The full picker state: `(available, selected, query, highlighted)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerState {
    /// Items not currently selected, in candidate order (removed items
    /// re-append at the end)
    pub available: Vec<Item>,

    /// Items the user has chosen, in selection order
    pub selected: Vec<Item>,

    /// Free-text filter, stored verbatim
    pub query: String,

    /// Selected-list position armed for backspace removal
    pub highlighted: Option<usize>,
}

impl PickerState {
    /// Create the initial state from the full candidate list
    pub fn new(candidates: Vec<Item>) -> Self {
        Self {
            available: candidates,
            selected: Vec::new(),
            query: String::new(),
            highlighted: None,
        }
    }

    /// Apply an event, producing the next state.
    ///
    /// Precondition violations (selecting an item that is not available,
    /// removing an item that is not selected) leave the state unchanged.
    pub fn apply(&self, event: &PickerEvent) -> PickerState {
        let mut next = self.clone();
        match event {
            PickerEvent::Select(item) => match next.available.iter().position(|i| i == item) {
                Some(pos) => {
                    next.available.remove(pos);
                    next.selected.push(item.clone());
                    next.query.clear();
                    next.highlighted = None;
                    debug!(target: "picker", "Selected '{}' ({} remaining)", item, next.available.len());
                }
                None => {
                    warn!(target: "picker", "Select ignored: '{}' is not available", item);
                }
            },
            PickerEvent::Remove(item) => match next.selected.iter().position(|i| i == item) {
                Some(pos) => {
                    next.selected.remove(pos);
                    next.available.push(item.clone());
                    next.highlighted = None;
                    debug!(target: "picker", "Removed '{}' ({} selected)", item, next.selected.len());
                }
                None => {
                    warn!(target: "picker", "Remove ignored: '{}' is not selected", item);
                }
            },
            PickerEvent::Backspace => {
                if let Some(index) = next.highlighted {
                    // Positional removal of the armed tag
                    let item = next.selected.remove(index);
                    next.available.push(item);
                    next.highlighted = None;
                } else if !next.selected.is_empty() {
                    // First backspace only arms the last tag
                    next.highlighted = Some(next.selected.len() - 1);
                }
            }
            PickerEvent::QueryChanged(text) => {
                // Deliberately leaves `highlighted` alone: the original
                // widget keeps a stale highlight while typing, and the
                // armed index stays valid because only select/remove
                // mutate the selected list.
                next.query = text.clone();
            }
        }
        next
    }

    /// Available items whose value contains the query, case-insensitively.
    /// With an empty query this is the whole available pool, but the
    /// dropdown is suppressed in that case (`dropdown_visible`).
    pub fn filtered_items(&self) -> Vec<&Item> {
        let needle = self.query.to_lowercase();
        self.available
            .iter()
            .filter(|item| item.to_lowercase().contains(&needle))
            .collect()
    }

    /// The dropdown is shown if and only if the query is non-empty
    pub fn dropdown_visible(&self) -> bool {
        !self.query.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fruit_state() -> PickerState {
        PickerState::new(vec![
            "Apple".to_string(),
            "banana".to_string(),
            "Cherry".to_string(),
        ])
    }

    #[test]
    fn select_moves_item_between_pools() {
        let state = fruit_state();
        let next = state.apply(&PickerEvent::Select("banana".to_string()));

        assert_eq!(next.available, vec!["Apple", "Cherry"]);
        assert_eq!(next.selected, vec!["banana"]);
    }

    #[test]
    fn select_of_unavailable_item_is_a_no_op() {
        let state = fruit_state();
        let next = state.apply(&PickerEvent::Select("durian".to_string()));

        assert_eq!(next, state);
    }

    #[test]
    fn remove_of_unselected_item_is_a_no_op() {
        let state = fruit_state();
        let next = state.apply(&PickerEvent::Remove("Apple".to_string()));

        assert_eq!(next, state);
    }

    #[test]
    fn removed_item_reappends_at_the_end() {
        let state = fruit_state()
            .apply(&PickerEvent::Select("Apple".to_string()))
            .apply(&PickerEvent::Remove("Apple".to_string()));

        assert_eq!(state.available, vec!["banana", "Cherry", "Apple"]);
        assert!(state.selected.is_empty());
    }

    #[test]
    fn filtering_is_case_insensitive_substring() {
        let mut state = fruit_state();
        state.query = "an".to_string();

        assert_eq!(state.filtered_items(), vec!["banana"]);
    }

    #[test]
    fn dropdown_hidden_while_query_empty() {
        let state = fruit_state();
        assert!(!state.dropdown_visible());

        let typed = state.apply(&PickerEvent::QueryChanged("a".to_string()));
        assert!(typed.dropdown_visible());
    }
}
