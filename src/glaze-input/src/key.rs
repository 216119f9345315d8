//! Renderer-independent key events.
//!
//! Front-ends translate their native key events into [`EditKey`] so the
//! session never depends on a particular terminal or windowing library.

/// A key event as understood by the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditKey {
    /// Printable character.
    Char(char),
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
    /// Submit the line.
    Enter,
    /// Accept the selected suggestion.
    Tab,
    /// Previous suggestion, or older history when none are shown.
    Up,
    /// Next suggestion, or newer history when none are shown.
    Down,
    /// Ctrl+Z
    HistoryOlder,
    /// Ctrl+X
    HistoryNewer,
    /// Ctrl+F
    ToggleSearch,
    /// Ctrl+N
    NewWindow,
    /// Ctrl+L
    ClearScreen,
    /// Hide suggestions or close the search bar.
    Escape,
}

impl EditKey {
    /// Returns true for keys that only move the caret.
    pub fn is_navigation(self) -> bool {
        matches!(
            self,
            EditKey::Left | EditKey::Right | EditKey::Home | EditKey::End
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_keys() {
        assert!(EditKey::Left.is_navigation());
        assert!(EditKey::End.is_navigation());
        assert!(!EditKey::Char('a').is_navigation());
        assert!(!EditKey::Enter.is_navigation());
    }
}
