//! Searchable multi-select tag picker widget
//!
//! Self-contained component: owns the picker state (through a
//! `StateDispatcher`), a `tui_input` for the query line, and a dropdown
//! cursor. Translates crossterm key/mouse events into `PickerEvent`s and
//! reports the outcome to the host application as a `PickerAction`.

use crate::picker::{Item, PickerEvent, PickerState};
use crate::state::{StateDispatcher, StateSubscriber};
use crate::widget_traits::DebugInfoProvider;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};
use tui_input::{backend::crossterm::EventHandler, Input};

/// Result of handling an input event in the tag picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerAction {
    /// Nothing the host needs to act on
    None,
    /// User asked to leave (Esc, Ctrl+C, Ctrl+Q)
    Quit,
    /// An item moved from the available pool into the selection
    Selected(Item),
    /// An item moved from the selection back to the available pool
    Removed(Item),
    /// The query text changed
    QueryChanged(String),
}

/// Configuration for the tag picker
#[derive(Debug, Clone)]
pub struct TagPickerConfig {
    /// Placeholder shown while the query is empty
    pub placeholder: String,
    /// Maximum dropdown rows rendered at once
    pub max_dropdown_rows: usize,
    /// Style for selected tags
    pub tag_style: Style,
    /// Style for the tag armed for backspace removal
    pub highlighted_tag_style: Style,
    /// Style for the dropdown row under the cursor
    pub cursor_row_style: Style,
    /// Border style for the input box and dropdown
    pub border_style: Style,
}

impl Default for TagPickerConfig {
    fn default() -> Self {
        Self {
            placeholder: "Type to search...".to_string(),
            max_dropdown_rows: 8,
            tag_style: Style::default().fg(Color::White).bg(Color::Blue),
            highlighted_tag_style: Style::default().fg(Color::Black).bg(Color::LightBlue),
            cursor_row_style: Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
            border_style: Style::default().fg(Color::Gray),
        }
    }
}

/// Computed sub-areas of the widget, shared by rendering and mouse
/// hit-testing so the two can never disagree
struct PickerLayout {
    tags: Rect,
    input: Rect,
    dropdown: Option<Rect>,
}

/// A self-contained searchable multi-select input
pub struct TagPickerWidget {
    dispatcher: StateDispatcher,
    input: Input,
    /// Cursor into the filtered list, for keyboard-driven selection
    dropdown_cursor: usize,
    config: TagPickerConfig,
}

impl TagPickerWidget {
    /// Create a picker over the full candidate list
    pub fn new(candidates: Vec<Item>) -> Self {
        Self::with_config(candidates, TagPickerConfig::default())
    }

    /// Create a picker with custom configuration
    pub fn with_config(candidates: Vec<Item>, config: TagPickerConfig) -> Self {
        Self {
            dispatcher: StateDispatcher::new(PickerState::new(candidates)),
            input: Input::default(),
            dropdown_cursor: 0,
            config,
        }
    }

    /// Current picker state
    pub fn state(&self) -> &PickerState {
        self.dispatcher.state()
    }

    /// Register a subscriber for state-change notifications
    pub fn subscribe(&mut self, subscriber: Box<dyn StateSubscriber>) {
        self.dispatcher.subscribe(subscriber);
    }

    /// Items currently selected, in selection order
    pub fn selected_items(&self) -> &[Item] {
        &self.dispatcher.state().selected
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> PickerAction {
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q')
                if key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                PickerAction::Quit
            }
            KeyCode::Esc => PickerAction::Quit,
            KeyCode::Up => {
                if self.dispatcher.state().dropdown_visible() {
                    self.dropdown_cursor = self.dropdown_cursor.saturating_sub(1);
                }
                PickerAction::None
            }
            KeyCode::Down => {
                let max = self.dispatcher.state().filtered_items().len();
                if self.dispatcher.state().dropdown_visible() && max > 0 {
                    self.dropdown_cursor = (self.dropdown_cursor + 1).min(max - 1);
                }
                PickerAction::None
            }
            KeyCode::Enter | KeyCode::Tab => self.select_under_cursor(),
            KeyCode::Backspace if self.input.value().is_empty() => {
                // Two-step removal: first backspace arms the last tag,
                // the second removes the armed one
                let armed = self
                    .dispatcher
                    .state()
                    .highlighted
                    .and_then(|i| self.dispatcher.state().selected.get(i).cloned());
                self.dispatcher.dispatch(PickerEvent::Backspace);
                match armed {
                    Some(item) => PickerAction::Removed(item),
                    None => PickerAction::None,
                }
            }
            _ => {
                // Let tui_input handle the key (char input, backspace, arrows, etc.)
                let before = self.input.value().to_string();
                self.input.handle_event(&crossterm::event::Event::Key(key));
                let after = self.input.value().to_string();
                if before != after {
                    self.dropdown_cursor = 0;
                    self.dispatcher
                        .dispatch(PickerEvent::QueryChanged(after.clone()));
                    PickerAction::QueryChanged(after)
                } else {
                    PickerAction::None
                }
            }
        }
    }

    /// Handle a mouse event. `area` must be the same area last passed to
    /// `render`; the layout is recomputed for hit-testing.
    pub fn handle_mouse(&mut self, mouse: MouseEvent, area: Rect) -> PickerAction {
        if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
            return PickerAction::None;
        }

        let layout = self.layout(area);

        if let Some(dropdown) = layout.dropdown {
            // Rows start inside the border
            let inner_y = dropdown.y + 1;
            if mouse.row >= inner_y
                && mouse.row < dropdown.y + dropdown.height.saturating_sub(1)
                && mouse.column > dropdown.x
                && mouse.column < dropdown.x + dropdown.width.saturating_sub(1)
            {
                let row = (mouse.row - inner_y) as usize;
                let filtered: Vec<Item> = self
                    .dispatcher
                    .state()
                    .filtered_items()
                    .into_iter()
                    .cloned()
                    .collect();
                if let Some(item) = filtered.get(row) {
                    return self.select_item(item.clone());
                }
                return PickerAction::None;
            }
        }

        if mouse.row == layout.tags.y {
            if let Some(item) = self.remove_control_at(mouse.column, layout.tags) {
                self.dispatcher.dispatch(PickerEvent::Remove(item.clone()));
                return PickerAction::Removed(item);
            }
        }

        PickerAction::None
    }

    /// Select the filtered item under the dropdown cursor
    fn select_under_cursor(&mut self) -> PickerAction {
        if !self.dispatcher.state().dropdown_visible() {
            return PickerAction::None;
        }
        let item = self
            .dispatcher
            .state()
            .filtered_items()
            .get(self.dropdown_cursor)
            .map(|item| (*item).clone());
        match item {
            Some(item) => self.select_item(item),
            None => PickerAction::None,
        }
    }

    fn select_item(&mut self, item: Item) -> PickerAction {
        self.dispatcher.dispatch(PickerEvent::Select(item.clone()));
        // Selection clears the query, so the input widget follows suit
        self.input.reset();
        self.dropdown_cursor = 0;
        PickerAction::Selected(item)
    }

    /// Map an x coordinate on the tag row to the tag whose remove control
    /// it hits, if any
    fn remove_control_at(&self, column: u16, tags_area: Rect) -> Option<Item> {
        let state = self.dispatcher.state();
        let mut x = tags_area.x;
        for item in &state.selected {
            let label_width = item.chars().count() as u16 + 1;
            let remove_x = x + label_width;
            if column == remove_x {
                return Some(item.clone());
            }
            // label + "✕" + separator space
            x = remove_x + 2;
        }
        None
    }

    fn layout(&self, area: Rect) -> PickerLayout {
        let tags = Rect::new(area.x, area.y, area.width, 1);
        let input = Rect::new(area.x, area.y + 1, area.width, 3);

        let state = self.dispatcher.state();
        let dropdown = if state.dropdown_visible() {
            let rows = state
                .filtered_items()
                .len()
                .clamp(1, self.config.max_dropdown_rows) as u16;
            let height = (rows + 2).min(area.height.saturating_sub(4));
            Some(Rect::new(area.x, area.y + 4, area.width, height))
        } else {
            None
        };

        PickerLayout {
            tags,
            input,
            dropdown,
        }
    }

    /// Render the tag picker
    pub fn render(&self, f: &mut Frame, area: Rect) {
        let layout = self.layout(area);

        self.render_tags(f, layout.tags);
        self.render_input(f, layout.input);
        if let Some(dropdown) = layout.dropdown {
            self.render_dropdown(f, dropdown);
        }
    }

    fn render_tags(&self, f: &mut Frame, area: Rect) {
        let state = self.dispatcher.state();
        let mut spans: Vec<Span> = Vec::new();
        for (i, item) in state.selected.iter().enumerate() {
            let style = if state.highlighted == Some(i) {
                self.config.highlighted_tag_style
            } else {
                self.config.tag_style
            };
            spans.push(Span::styled(format!("{} ✕", item), style));
            spans.push(Span::raw(" "));
        }
        if spans.is_empty() {
            spans.push(Span::styled(
                "(nothing selected)",
                Style::default().fg(Color::DarkGray),
            ));
        }
        f.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_input(&self, f: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title("Search")
            .border_style(self.config.border_style);

        let input_widget = if self.input.value().is_empty() {
            Paragraph::new(self.config.placeholder.as_str())
                .block(block)
                .style(Style::default().fg(Color::DarkGray))
        } else {
            Paragraph::new(self.input.value()).block(block)
        };
        f.render_widget(input_widget, area);

        f.set_cursor_position((area.x + self.input.cursor() as u16 + 1, area.y + 1));
    }

    fn render_dropdown(&self, f: &mut Frame, area: Rect) {
        let filtered = self.dispatcher.state().filtered_items();

        let rows: Vec<ListItem> = if filtered.is_empty() {
            vec![ListItem::new("No matches").style(Style::default().fg(Color::DarkGray))]
        } else {
            filtered
                .iter()
                .take(self.config.max_dropdown_rows)
                .enumerate()
                .map(|(i, item)| {
                    let style = if i == self.dropdown_cursor {
                        self.config.cursor_row_style
                    } else {
                        Style::default()
                    };
                    ListItem::new(Line::from(Span::styled(item.as_str(), style)))
                })
                .collect()
        };

        let list = List::new(rows).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Matches (↑/↓ navigate, Enter to select)")
                .border_style(self.config.border_style),
        );
        f.render_widget(list, area);
    }
}

impl DebugInfoProvider for TagPickerWidget {
    fn debug_info(&self) -> String {
        let state = self.dispatcher.state();
        let mut info = String::from("=== TAG PICKER ===\n");
        info.push_str(&format!("Query: '{}'\n", state.query));
        info.push_str(&format!("Available: {}\n", state.available.len()));
        info.push_str(&format!("Selected: {:?}\n", state.selected));
        info.push_str(&format!("Highlighted: {:?}\n", state.highlighted));
        info.push_str(&format!("Dropdown Cursor: {}\n", self.dropdown_cursor));
        info.push_str(&format!(
            "Events Dispatched: {}\n",
            self.dispatcher.get_event_history().len()
        ));
        info
    }

    fn debug_summary(&self) -> String {
        let state = self.dispatcher.state();
        format!(
            "TagPicker: {} selected, {} available, query='{}'",
            state.selected.len(),
            state.available.len(),
            state.query
        )
    }
}
