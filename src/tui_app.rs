//! Terminal application shell for the tag picker
//!
//! Owns the event loop and terminal lifecycle. All picker behavior lives in
//! the widget; this module wires it to a real terminal, the debug overlay,
//! and the redraw-on-state-change subscription.

use crate::logging::LogRingBuffer;
use crate::picker::{PickerEvent, PickerState};
use crate::state::StateSubscriber;
use crate::widget_traits::DebugInfoProvider;
use crate::widgets::tag_picker::{PickerAction, TagPickerWidget};
use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame, Terminal,
};
use std::cell::Cell;
use std::io::{self, stdout};
use std::rc::Rc;
use tracing::info;

/// Subscriber that flags the UI for redraw whenever the picker state
/// changes. The event loop only draws when this flag is set.
struct RedrawFlag {
    dirty: Rc<Cell<bool>>,
}

impl StateSubscriber for RedrawFlag {
    fn on_state_event(&mut self, _event: &PickerEvent, _state: &PickerState) {
        self.dirty.set(true);
    }

    fn name(&self) -> &str {
        "RedrawFlag"
    }
}

/// The tag picker application
pub struct App {
    widget: TagPickerWidget,

    /// Captured log entries for the debug overlay
    log_buffer: LogRingBuffer,

    /// Set by the redraw subscriber (and by presentation-only changes
    /// such as cursor movement)
    dirty: Rc<Cell<bool>>,

    /// Picker area from the last draw, used for mouse hit-testing
    picker_area: Rect,

    show_debug: bool,
    show_help_line: bool,
    should_quit: bool,
}

impl App {
    pub fn new(mut widget: TagPickerWidget, log_buffer: LogRingBuffer, show_help_line: bool) -> Self {
        let dirty = Rc::new(Cell::new(true));
        widget.subscribe(Box::new(RedrawFlag {
            dirty: dirty.clone(),
        }));

        Self {
            widget,
            log_buffer,
            dirty,
            picker_area: Rect::default(),
            show_debug: false,
            show_help_line,
            should_quit: false,
        }
    }

    /// Items selected so far, in selection order
    pub fn selected_items(&self) -> Vec<String> {
        self.widget.selected_items().to_vec()
    }

    /// Main run loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            if self.dirty.replace(false) {
                terminal.draw(|f| self.draw(f))?;
            }

            if event::poll(std::time::Duration::from_millis(100))? {
                match event::read()? {
                    Event::Key(key) => {
                        if self.handle_key_event(key) {
                            break;
                        }
                        // Presentation-only changes (dropdown cursor, text
                        // cursor) bypass the dispatcher
                        self.dirty.set(true);
                    }
                    Event::Mouse(mouse) => {
                        let action = self.widget.handle_mouse(mouse, self.picker_area);
                        self.handle_action(action);
                        self.dirty.set(true);
                    }
                    Event::Resize(_, _) => self.dirty.set(true),
                    _ => {}
                }
            }

            if self.should_quit {
                break;
            }
        }
        Ok(())
    }

    /// Handle keyboard input; returns true when the app should exit
    fn handle_key_event(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::F(5) {
            self.show_debug = !self.show_debug;
            return false;
        }

        let action = self.widget.handle_key(key);
        self.handle_action(action);
        self.should_quit
    }

    fn handle_action(&mut self, action: PickerAction) {
        match action {
            PickerAction::Quit => self.should_quit = true,
            PickerAction::Selected(item) => {
                info!(target: "app", "Selected '{}'", item);
            }
            PickerAction::Removed(item) => {
                info!(target: "app", "Removed '{}'", item);
            }
            PickerAction::QueryChanged(_) | PickerAction::None => {}
        }
    }

    fn draw(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(5),    // Picker (and debug overlay)
                Constraint::Length(1), // Help line
            ])
            .split(f.area());

        let main = chunks[0];
        let picker_area = if self.show_debug {
            let halves = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(main);
            self.render_debug(f, halves[1]);
            halves[0]
        } else {
            main
        };

        self.picker_area = picker_area;
        self.widget.render(f, picker_area);

        if self.show_help_line {
            self.render_help_line(f, chunks[1]);
        }
    }

    fn render_help_line(&self, f: &mut Frame, area: Rect) {
        let help = "Type to filter | ↑/↓: Navigate | Enter: Select | Backspace ×2: Remove last tag | Click: Select/Remove | F5: Debug | Esc: Quit";
        let line = Paragraph::new(help).style(Style::default().fg(Color::DarkGray));
        f.render_widget(line, area);
    }

    fn render_debug(&self, f: &mut Frame, area: Rect) {
        let mut content = self.widget.debug_info();
        content.push_str("\nRecent Logs:\n");
        for entry in self.log_buffer.get_recent(15) {
            content.push_str(&entry.format_for_display());
            content.push('\n');
        }

        let panel = Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Debug (F5 to close)"),
            )
            .wrap(Wrap { trim: false })
            .style(Style::default().fg(Color::Cyan));

        f.render_widget(Clear, area);
        f.render_widget(panel, area);
    }
}

/// Run the tag picker in the terminal. Returns the selected items once the
/// user exits.
pub fn run_tag_picker(
    widget: TagPickerWidget,
    log_buffer: LogRingBuffer,
    show_help_line: bool,
) -> Result<Vec<String>> {
    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    // Run the app
    let mut app = App::new(widget, log_buffer, show_help_line);
    let result = app.run(&mut terminal);

    // Cleanup
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;

    result.context("TUI execution failed")?;
    Ok(app.selected_items())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn create_test_app() -> App {
        let widget = TagPickerWidget::new(vec![
            "Apple".to_string(),
            "banana".to_string(),
            "Cherry".to_string(),
        ]);
        App::new(widget, LogRingBuffer::new(), true)
    }

    #[test]
    fn test_app_creation() {
        let app = create_test_app();

        assert!(!app.should_quit);
        assert!(!app.show_debug);
        assert!(app.selected_items().is_empty());
    }

    #[test]
    fn test_quit_key() {
        let mut app = create_test_app();

        let should_quit = app.handle_key_event(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        assert!(should_quit);
        assert!(app.should_quit);
    }

    #[test]
    fn test_debug_toggle() {
        let mut app = create_test_app();

        app.handle_key_event(KeyEvent::new(KeyCode::F(5), KeyModifiers::NONE));
        assert!(app.show_debug);

        app.handle_key_event(KeyEvent::new(KeyCode::F(5), KeyModifiers::NONE));
        assert!(!app.show_debug);
    }

    #[test]
    fn test_typing_marks_state_dirty() {
        let mut app = create_test_app();
        app.dirty.set(false);

        app.handle_key_event(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE));

        // The redraw subscriber fires on the QueryChanged dispatch
        assert!(app.dirty.get());
        assert_eq!(app.widget.state().query, "a");
    }
}
