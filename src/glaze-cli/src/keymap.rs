//! Crossterm key events to edit keys.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use glaze_input::EditKey;

/// Maps a key press to an [`EditKey`]. Unbound keys give `None`.
pub fn map_key(key: &KeyEvent) -> Option<EditKey> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    if ctrl {
        return match key.code {
            KeyCode::Char(c) => match c.to_ascii_lowercase() {
                'z' => Some(EditKey::HistoryOlder),
                'x' => Some(EditKey::HistoryNewer),
                'f' => Some(EditKey::ToggleSearch),
                'n' => Some(EditKey::NewWindow),
                'l' => Some(EditKey::ClearScreen),
                _ => None,
            },
            _ => None,
        };
    }

    let edit = match key.code {
        KeyCode::Char(_) if alt => return None,
        KeyCode::Char(c) => EditKey::Char(c),
        KeyCode::Backspace => EditKey::Backspace,
        KeyCode::Delete => EditKey::Delete,
        KeyCode::Left => EditKey::Left,
        KeyCode::Right => EditKey::Right,
        KeyCode::Home => EditKey::Home,
        KeyCode::End => EditKey::End,
        KeyCode::Enter => EditKey::Enter,
        KeyCode::Tab => EditKey::Tab,
        KeyCode::Up => EditKey::Up,
        KeyCode::Down => EditKey::Down,
        KeyCode::Esc => EditKey::Escape,
        _ => return None,
    };
    Some(edit)
}

/// Ctrl+C and Ctrl+D leave the terminal.
pub fn is_exit_key(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('d'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn plain(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_shortcuts() {
        let cases = [
            ('z', EditKey::HistoryOlder),
            ('x', EditKey::HistoryNewer),
            ('f', EditKey::ToggleSearch),
            ('n', EditKey::NewWindow),
            ('l', EditKey::ClearScreen),
        ];
        for (c, want) in cases {
            assert_eq!(map_key(&ctrl(c)), Some(want), "ctrl+{c}");
        }
        assert_eq!(map_key(&ctrl('q')), None);
    }

    #[test]
    fn test_plain_keys() {
        assert_eq!(map_key(&plain(KeyCode::Char('a'))), Some(EditKey::Char('a')));
        assert_eq!(
            map_key(&KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            Some(EditKey::Char('A'))
        );
        assert_eq!(map_key(&plain(KeyCode::Tab)), Some(EditKey::Tab));
        assert_eq!(map_key(&plain(KeyCode::Esc)), Some(EditKey::Escape));
        assert_eq!(map_key(&plain(KeyCode::F(5))), None);
        assert_eq!(
            map_key(&KeyEvent::new(KeyCode::Char('b'), KeyModifiers::ALT)),
            None
        );
    }

    #[test]
    fn test_exit_keys() {
        assert!(is_exit_key(&ctrl('c')));
        assert!(is_exit_key(&ctrl('d')));
        assert!(!is_exit_key(&plain(KeyCode::Char('c'))));
    }
}
