// Event Handling
// Application event types and handler infrastructure

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind};

use crate::routing::NavSection;

/// How key presses are interpreted for the active page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Single-key shortcuts
    Navigation,
    /// Characters go into the focused text field
    Text,
}

/// Application events that can be handled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Quit the application
    Quit,

    /// Jump to a navigation bar entry
    Navigate(NavSection),

    /// Go back / escape current page
    Back,

    /// Move selection up
    SelectPrevious,

    /// Move selection down
    SelectNext,

    /// Open the selected item or submit the form
    Activate,

    /// Delete the selected item
    Delete,

    /// Start creating a new item
    Create,

    /// Switch to card layout
    ShowCards,

    /// Switch to table layout
    ShowTable,

    /// Reload data
    Refresh,

    /// Counter up
    Increment,

    /// Counter down
    Decrement,

    /// Move focus to the next form field
    NextField,

    /// Typed character for the focused field
    Input(char),

    /// Delete the last character of the focused field
    Backspace,

    /// No operation
    None,
}

/// Event handler that converts terminal events to application events
pub struct EventHandler;

impl EventHandler {
    /// Convert a crossterm event to an application event
    pub fn handle(event: Event, mode: InputMode) -> AppEvent {
        match event {
            Event::Key(key) => Self::handle_key(key, mode),
            Event::Mouse(mouse) => Self::handle_mouse(mouse),
            _ => AppEvent::None,
        }
    }

    /// Handle keyboard events
    pub fn handle_key(key: KeyEvent, mode: InputMode) -> AppEvent {
        // Only handle key press events
        if key.kind != KeyEventKind::Press {
            return AppEvent::None;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return AppEvent::Quit;
        }

        // Keys shared by both modes
        match key.code {
            KeyCode::Esc => return AppEvent::Back,
            KeyCode::Up => return AppEvent::SelectPrevious,
            KeyCode::Down => return AppEvent::SelectNext,
            KeyCode::Enter => return AppEvent::Activate,
            KeyCode::Tab => return AppEvent::NextField,
            _ => {}
        }

        match mode {
            InputMode::Text => match key.code {
                KeyCode::Char(c) => AppEvent::Input(c),
                KeyCode::Backspace => AppEvent::Backspace,
                _ => AppEvent::None,
            },
            InputMode::Navigation => match key.code {
                KeyCode::Char('q') => AppEvent::Quit,

                // Navigation bar
                KeyCode::Char('h') => AppEvent::Navigate(NavSection::Home),
                KeyCode::Char('u') => AppEvent::Navigate(NavSection::Users),
                KeyCode::Char('b') => AppEvent::Navigate(NavSection::Badges),
                KeyCode::Char('l') => AppEvent::Navigate(NavSection::Login),

                // Selection
                KeyCode::Char('k') => AppEvent::SelectPrevious,
                KeyCode::Char('j') => AppEvent::SelectNext,

                // User list
                KeyCode::Char('c') => AppEvent::ShowCards,
                KeyCode::Char('t') => AppEvent::ShowTable,
                KeyCode::Char('n') => AppEvent::Create,
                KeyCode::Char('d') | KeyCode::Delete => AppEvent::Delete,
                KeyCode::Char('r') => AppEvent::Refresh,

                // Counter
                KeyCode::Char('+') | KeyCode::Right => AppEvent::Increment,
                KeyCode::Char('-') | KeyCode::Left => AppEvent::Decrement,

                KeyCode::Backspace => AppEvent::Back,
                _ => AppEvent::None,
            },
        }
    }

    /// Handle mouse events
    fn handle_mouse(mouse: MouseEvent) -> AppEvent {
        match mouse.kind {
            MouseEventKind::ScrollUp => AppEvent::SelectPrevious,
            MouseEventKind::ScrollDown => AppEvent::SelectNext,
            _ => AppEvent::None,
        }
    }
}
