use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};

use crate::app::{App, Screen};

/// Input action that can be performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    MoveUp,
    MoveDown,
    ScrollUp,
    ScrollDown,
    ScrollHalfPageDown,
    ScrollHalfPageUp,
    JumpToTop,
    JumpToBottom,
    PendingG, // First 'g' press, waiting for second 'g'
    CycleStatus,
    OpenSearch,
    Back,
    InputChar(char),
    Backspace,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App) -> Action {
    // The search screen accepts text input
    if app.screen == Screen::BookSearch {
        return handle_search_screen(key);
    }

    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,

        // Selection
        (KeyCode::Char('j'), KeyModifiers::NONE) => Action::MoveDown,
        (KeyCode::Char('k'), KeyModifiers::NONE) => Action::MoveUp,
        (KeyCode::Down, KeyModifiers::NONE) => Action::MoveDown,
        (KeyCode::Up, KeyModifiers::NONE) => Action::MoveUp,

        // Scrolling
        (KeyCode::Char('d'), KeyModifiers::CONTROL) => Action::ScrollHalfPageDown,
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => Action::ScrollHalfPageUp,

        // Jump to top/bottom
        (KeyCode::Char('g'), KeyModifiers::NONE) => {
            // gg requires double press
            if app.pending_key == Some('g') {
                Action::JumpToTop
            } else {
                Action::PendingG
            }
        }
        (KeyCode::Char('G'), KeyModifiers::SHIFT) => Action::JumpToBottom,

        // Book actions
        (KeyCode::Enter, KeyModifiers::NONE) => Action::CycleStatus,
        (KeyCode::Char(' '), KeyModifiers::NONE) => Action::CycleStatus,

        // Search screen push
        (KeyCode::Char('/'), KeyModifiers::NONE) => Action::OpenSearch,
        (KeyCode::Char('s'), KeyModifiers::NONE) => Action::OpenSearch,

        (KeyCode::Esc, KeyModifiers::NONE) => Action::Back,

        _ => Action::None,
    }
}

/// Key handling on the BookSearch screen
fn handle_search_screen(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) => Action::Back,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Backspace, _) => Action::Backspace,
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => Action::InputChar(c),
        _ => Action::None,
    }
}

/// Map mouse input to an action (wheel drives the scroll offset)
pub fn handle_mouse_event(mouse: MouseEvent) -> Action {
    match mouse.kind {
        MouseEventKind::ScrollDown => Action::ScrollDown,
        MouseEventKind::ScrollUp => Action::ScrollUp,
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;
    use readstack_core::{AppConfig, BookStore};
    use std::sync::Arc;

    fn app() -> App {
        App::new(
            Arc::new(AppConfig::default()),
            Theme::default(),
            BookStore::with_samples(),
        )
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_home_bindings() {
        let app = app();
        assert_eq!(handle_key_event(key(KeyCode::Char('q')), &app), Action::Quit);
        assert_eq!(handle_key_event(key(KeyCode::Char('j')), &app), Action::MoveDown);
        assert_eq!(handle_key_event(key(KeyCode::Char('/')), &app), Action::OpenSearch);
        assert_eq!(handle_key_event(key(KeyCode::Enter), &app), Action::CycleStatus);
    }

    #[test]
    fn test_gg_sequence() {
        let mut app = app();
        assert_eq!(handle_key_event(key(KeyCode::Char('g')), &app), Action::PendingG);
        app.pending_key = Some('g');
        assert_eq!(handle_key_event(key(KeyCode::Char('g')), &app), Action::JumpToTop);
    }

    #[test]
    fn test_search_screen_captures_text() {
        let mut app = app();
        app.open_search();
        assert_eq!(
            handle_key_event(key(KeyCode::Char('q')), &app),
            Action::InputChar('q')
        );
        assert_eq!(handle_key_event(key(KeyCode::Esc), &app), Action::Back);
    }
}
