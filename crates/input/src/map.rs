//! Key translation from terminal events to game keys.

use crate::types::Key;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Translate a terminal key event into a game key.
///
/// Enter is the confirm key. Arrow keys alias the wasd movement letters so
/// both schemes steer the snake. Anything else that is not a printable
/// ASCII character is out of range and ignored.
pub fn translate_key(key: KeyEvent) -> Option<Key> {
    match key.code {
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Up => Some(Key::Char('w')),
        KeyCode::Down => Some(Key::Char('s')),
        KeyCode::Left => Some(Key::Char('a')),
        KeyCode::Right => Some(Key::Char('d')),
        KeyCode::Char(c) if c.is_ascii_graphic() || c == ' ' => Some(Key::Char(c)),
        _ => None,
    }
}

/// Check if the key should quit the terminal session.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_confirm_key() {
        assert_eq!(translate_key(KeyEvent::from(KeyCode::Enter)), Some(Key::Enter));
    }

    #[test]
    fn test_movement_keys() {
        assert_eq!(
            translate_key(KeyEvent::from(KeyCode::Char('w'))),
            Some(Key::Char('w'))
        );
        assert_eq!(
            translate_key(KeyEvent::from(KeyCode::Up)),
            Some(Key::Char('w'))
        );
        assert_eq!(
            translate_key(KeyEvent::from(KeyCode::Down)),
            Some(Key::Char('s'))
        );
        assert_eq!(
            translate_key(KeyEvent::from(KeyCode::Left)),
            Some(Key::Char('a'))
        );
        assert_eq!(
            translate_key(KeyEvent::from(KeyCode::Right)),
            Some(Key::Char('d'))
        );
    }

    #[test]
    fn test_printable_characters_pass_through() {
        assert_eq!(
            translate_key(KeyEvent::from(KeyCode::Char('x'))),
            Some(Key::Char('x'))
        );
        assert_eq!(
            translate_key(KeyEvent::from(KeyCode::Char(' '))),
            Some(Key::Char(' '))
        );
    }

    #[test]
    fn test_out_of_range_keys_are_dropped() {
        assert_eq!(translate_key(KeyEvent::from(KeyCode::F(1))), None);
        assert_eq!(translate_key(KeyEvent::from(KeyCode::Esc)), None);
        assert_eq!(translate_key(KeyEvent::from(KeyCode::Char('é'))), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
