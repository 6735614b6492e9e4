//! Event handling for the TUI.
//!
//! Provides keyboard event polling and key classification.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

use crate::TuiResult;

/// Poll for keyboard events with a timeout.
///
/// Returns `Some(KeyEvent)` if a key was pressed within the timeout,
/// or `None` if no key was pressed. Key releases are ignored.
pub fn poll_key(timeout: Duration) -> TuiResult<Option<KeyEvent>> {
    if event::poll(timeout)?
        && let Event::Key(key) = event::read()?
        && key.kind == KeyEventKind::Press
    {
        return Ok(Some(key));
    }
    Ok(None)
}

/// Check if the key event represents a quit command.
///
/// Returns `true` for 'q' key or Ctrl+C.
pub fn is_quit(key: &KeyEvent) -> bool {
    matches!(
        key,
        KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            ..
        } | KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        }
    )
}

/// Check if the key event is Ctrl+C, which quits even from the modal.
pub fn is_interrupt(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Check if the key event is the down navigation key (j or Down arrow).
pub fn is_down(key: &KeyEvent) -> bool {
    matches!(
        key,
        KeyEvent {
            code: KeyCode::Char('j'),
            modifiers: KeyModifiers::NONE,
            ..
        } | KeyEvent {
            code: KeyCode::Down,
            ..
        }
    )
}

/// Check if the key event is the up navigation key (k or Up arrow).
pub fn is_up(key: &KeyEvent) -> bool {
    matches!(
        key,
        KeyEvent {
            code: KeyCode::Char('k'),
            modifiers: KeyModifiers::NONE,
            ..
        } | KeyEvent {
            code: KeyCode::Up,
            ..
        }
    )
}

/// Check if the key event is the Enter key.
pub fn is_enter(key: &KeyEvent) -> bool {
    key.code == KeyCode::Enter
}

/// Check if the key event is the Esc key.
pub fn is_escape(key: &KeyEvent) -> bool {
    key.code == KeyCode::Esc
}

/// Check if the key event is the Backspace key.
pub fn is_backspace(key: &KeyEvent) -> bool {
    key.code == KeyCode::Backspace
}

/// Check if the key event moves focus to the next form field.
pub fn is_next_field(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Tab | KeyCode::Down)
}

/// Check if the key event moves focus to the previous form field.
pub fn is_previous_field(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::BackTab | KeyCode::Up)
}

/// Check if the key event opens the add-task form ('a').
pub fn is_add(key: &KeyEvent) -> bool {
    matches!(
        key,
        KeyEvent {
            code: KeyCode::Char('a'),
            modifiers: KeyModifiers::NONE,
            ..
        }
    )
}

/// Check if the key event toggles completion (Space or Enter).
pub fn is_toggle(key: &KeyEvent) -> bool {
    matches!(
        key,
        KeyEvent {
            code: KeyCode::Char(' '),
            modifiers: KeyModifiers::NONE,
            ..
        } | KeyEvent {
            code: KeyCode::Enter,
            ..
        }
    )
}

/// Check if the key event deletes a task ('d' or Delete).
pub fn is_delete(key: &KeyEvent) -> bool {
    matches!(
        key,
        KeyEvent {
            code: KeyCode::Char('d'),
            modifiers: KeyModifiers::NONE,
            ..
        } | KeyEvent {
            code: KeyCode::Delete,
            ..
        }
    )
}

/// Extract a printable character typed into a text field.
///
/// Shift is allowed (for capitals); Ctrl and Alt chords are not text.
pub fn typed_char(key: &KeyEvent) -> Option<char> {
    match key.code {
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Some(c)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: event::KeyEventState::NONE,
        }
    }

    #[test]
    fn test_is_quit_q() {
        let key = make_key(KeyCode::Char('q'), KeyModifiers::NONE);
        assert!(is_quit(&key));
    }

    #[test]
    fn test_is_quit_ctrl_c() {
        let key = make_key(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(is_quit(&key));
        assert!(is_interrupt(&key));
    }

    #[test]
    fn test_is_quit_other() {
        let key = make_key(KeyCode::Char('x'), KeyModifiers::NONE);
        assert!(!is_quit(&key));
    }

    #[test]
    fn test_plain_c_is_not_interrupt() {
        let key = make_key(KeyCode::Char('c'), KeyModifiers::NONE);
        assert!(!is_interrupt(&key));
    }

    #[test]
    fn test_is_down_j_and_arrow() {
        assert!(is_down(&make_key(KeyCode::Char('j'), KeyModifiers::NONE)));
        assert!(is_down(&make_key(KeyCode::Down, KeyModifiers::NONE)));
    }

    #[test]
    fn test_is_up_k_and_arrow() {
        assert!(is_up(&make_key(KeyCode::Char('k'), KeyModifiers::NONE)));
        assert!(is_up(&make_key(KeyCode::Up, KeyModifiers::NONE)));
    }

    #[test]
    fn test_is_add() {
        assert!(is_add(&make_key(KeyCode::Char('a'), KeyModifiers::NONE)));
        assert!(!is_add(&make_key(KeyCode::Char('a'), KeyModifiers::CONTROL)));
    }

    #[test]
    fn test_is_toggle_space_and_enter() {
        assert!(is_toggle(&make_key(KeyCode::Char(' '), KeyModifiers::NONE)));
        assert!(is_toggle(&make_key(KeyCode::Enter, KeyModifiers::NONE)));
        assert!(!is_toggle(&make_key(KeyCode::Char('t'), KeyModifiers::NONE)));
    }

    #[test]
    fn test_is_delete_d_and_delete_key() {
        assert!(is_delete(&make_key(KeyCode::Char('d'), KeyModifiers::NONE)));
        assert!(is_delete(&make_key(KeyCode::Delete, KeyModifiers::NONE)));
        assert!(!is_delete(&make_key(KeyCode::Backspace, KeyModifiers::NONE)));
    }

    #[test]
    fn test_field_navigation_keys() {
        assert!(is_next_field(&make_key(KeyCode::Tab, KeyModifiers::NONE)));
        assert!(is_next_field(&make_key(KeyCode::Down, KeyModifiers::NONE)));
        assert!(is_previous_field(&make_key(KeyCode::BackTab, KeyModifiers::SHIFT)));
        assert!(is_previous_field(&make_key(KeyCode::Up, KeyModifiers::NONE)));
    }

    #[test]
    fn test_typed_char_accepts_shifted_letters() {
        let key = make_key(KeyCode::Char('B'), KeyModifiers::SHIFT);
        assert_eq!(typed_char(&key), Some('B'));
    }

    #[test]
    fn test_typed_char_rejects_control_chords() {
        let key = make_key(KeyCode::Char('w'), KeyModifiers::CONTROL);
        assert_eq!(typed_char(&key), None);
        let key = make_key(KeyCode::Char('x'), KeyModifiers::ALT);
        assert_eq!(typed_char(&key), None);
    }

    #[test]
    fn test_typed_char_ignores_non_char_keys() {
        assert_eq!(typed_char(&make_key(KeyCode::Enter, KeyModifiers::NONE)), None);
    }

    #[test]
    fn test_escape_and_backspace() {
        assert!(is_escape(&make_key(KeyCode::Esc, KeyModifiers::NONE)));
        assert!(is_backspace(&make_key(KeyCode::Backspace, KeyModifiers::NONE)));
    }
}
