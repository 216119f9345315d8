//! The settings panel opened by `settings`.

use crossterm::event::{KeyCode, KeyEvent};
use glaze_config::Toggle;
use glaze_core::Session;
use tracing::warn;

/// What a key did to the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayAction {
    Stay,
    Close,
}

/// Selection and last status message of the settings panel.
#[derive(Debug, Clone, Default)]
pub struct SettingsOverlay {
    selected: usize,
    status: Option<String>,
}

impl SettingsOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_toggle(&self) -> Toggle {
        Toggle::ALL[self.selected]
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Up/Down move, Space/Enter flip the highlighted option, Esc closes.
    pub fn handle_key(&mut self, key: &KeyEvent, session: &mut Session) -> OverlayAction {
        match key.code {
            KeyCode::Up => {
                self.selected = self.selected.checked_sub(1).unwrap_or(Toggle::ALL.len() - 1);
            }
            KeyCode::Down => {
                self.selected = (self.selected + 1) % Toggle::ALL.len();
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.toggle(session),
            KeyCode::Esc | KeyCode::Char('q') => return OverlayAction::Close,
            _ => {}
        }
        OverlayAction::Stay
    }

    fn toggle(&mut self, session: &mut Session) {
        let toggle = self.selected_toggle();
        self.status = match session.toggle_setting(toggle) {
            Ok(settings) => {
                let state = if settings.get(toggle) { "ON" } else { "OFF" };
                let mut msg = format!("{} set to: {state}", toggle.label());
                if toggle.needs_restart() {
                    msg.push_str(" (restart to apply)");
                }
                Some(msg)
            }
            Err(e) => {
                warn!(error = %e, "failed to save settings");
                Some(format!("settings: failed to save: {e}"))
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use glaze_config::{Settings, SettingsStore};
    use pretty_assertions::assert_eq;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn session() -> Session {
        Session::new(SettingsStore::in_memory(Settings::default()), ".")
    }

    #[test]
    fn test_selection_wraps() {
        let mut s = session();
        let mut overlay = SettingsOverlay::new();
        overlay.handle_key(&key(KeyCode::Up), &mut s);
        assert_eq!(overlay.selected(), Toggle::ALL.len() - 1);
        overlay.handle_key(&key(KeyCode::Down), &mut s);
        assert_eq!(overlay.selected(), 0);
    }

    #[test]
    fn test_toggle_updates_settings() {
        let mut s = session();
        let mut overlay = SettingsOverlay::new();
        while overlay.selected_toggle() != Toggle::Timestamp {
            overlay.handle_key(&key(KeyCode::Down), &mut s);
        }
        assert!(!s.settings().timestamp);
        overlay.handle_key(&key(KeyCode::Char(' ')), &mut s);
        assert!(s.settings().timestamp);
        assert_eq!(overlay.status(), Some("Timestamps set to: ON"));
    }

    #[test]
    fn test_blur_status_mentions_restart() {
        let mut s = session();
        let mut overlay = SettingsOverlay::new();
        while overlay.selected_toggle() != Toggle::Blur {
            overlay.handle_key(&key(KeyCode::Down), &mut s);
        }
        overlay.handle_key(&key(KeyCode::Enter), &mut s);
        assert!(overlay.status().unwrap().ends_with("(restart to apply)"));
    }

    #[test]
    fn test_escape_closes() {
        let mut s = session();
        let mut overlay = SettingsOverlay::new();
        assert_eq!(overlay.handle_key(&key(KeyCode::Esc), &mut s), OverlayAction::Close);
        assert_eq!(overlay.handle_key(&key(KeyCode::Left), &mut s), OverlayAction::Stay);
    }
}
