//! Event handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

/// Result of handling one terminal event at the application level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Continue processing.
    Continue,
    /// Exit application.
    Exit,
}

/// Helpers for classifying terminal events.
pub struct EventHandler;

impl EventHandler {
    /// Checks if key is a global quit chord.
    #[must_use]
    pub fn is_quit_event(key: &KeyEvent) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            }
        )
    }

    /// Extracts the position of a left pointer-down, if this is one.
    ///
    /// All other mouse activity (drag, release, scroll, other buttons) is
    /// ignored by the screens.
    #[must_use]
    pub fn left_press(mouse: &MouseEvent) -> Option<Position> {
        if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
            Some(Position::new(mouse.column, mouse.row))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;

    fn make_key_event(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new_with_kind(code, modifiers, KeyEventKind::Press)
    }

    #[test]
    fn test_quit_event() {
        assert!(EventHandler::is_quit_event(&make_key_event(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!EventHandler::is_quit_event(&make_key_event(
            KeyCode::Char('c'),
            KeyModifiers::NONE
        )));
    }

    #[test]
    fn test_left_press_position() {
        let event = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 7,
            row: 3,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(EventHandler::left_press(&event), Some(Position::new(7, 3)));

        let moved = MouseEvent {
            kind: MouseEventKind::Moved,
            ..event
        };
        assert_eq!(EventHandler::left_press(&moved), None);
    }
}
