//! Interactive event loop.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use glaze_core::{Control, Session};
use glaze_input::EditKey;
use tracing::{debug, warn};

use crate::keymap::{is_exit_key, map_key};
use crate::overlay::{OverlayAction, SettingsOverlay};
use crate::terminal::GlazeTerminal;
use crate::ui::{self, ViewState, caret_visible};
use crate::window::open_new_window;

const FRAME_INTERVAL: Duration = Duration::from_millis(16);
const PAGE: usize = 10;

/// Session plus renderer-only state.
pub struct App {
    session: Session,
    overlay: Option<SettingsOverlay>,
    scroll_back: usize,
    window_args: Vec<String>,
    exit: bool,
}

impl App {
    /// `window_args` are passed to windows opened with Ctrl+N or `new`.
    pub fn new(session: Session, window_args: Vec<String>) -> Self {
        Self {
            session,
            overlay: None,
            scroll_back: 0,
            window_args,
            exit: false,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn overlay(&self) -> Option<&SettingsOverlay> {
        self.overlay.as_ref()
    }

    #[inline]
    pub fn scroll_back(&self) -> usize {
        self.scroll_back
    }

    pub fn should_exit(&self) -> bool {
        self.exit || self.session.should_quit()
    }

    pub fn on_key(&mut self, key: &KeyEvent) {
        if is_exit_key(key) {
            self.exit = true;
            return;
        }

        if let Some(overlay) = self.overlay.as_mut() {
            if overlay.handle_key(key, &mut self.session) == OverlayAction::Close {
                self.overlay = None;
            }
            return;
        }

        match key.code {
            KeyCode::PageUp => {
                self.scroll_back = self.scroll_back.saturating_add(PAGE);
                return;
            }
            KeyCode::PageDown => {
                self.scroll_back = self.scroll_back.saturating_sub(PAGE);
                return;
            }
            _ => {}
        }

        if let Some(edit) = map_key(key) {
            self.on_edit(edit);
        }
    }

    pub fn on_paste(&mut self, text: &str) {
        if self.overlay.is_some() {
            return;
        }
        for c in text.chars().filter(|c| *c != '\r' && *c != '\n') {
            self.session.handle_key(EditKey::Char(c));
        }
    }

    fn on_edit(&mut self, edit: EditKey) {
        if edit == EditKey::Enter {
            self.scroll_back = 0;
        }
        match self.session.handle_key(edit) {
            Control::Continue | Control::Quit => {}
            Control::OpenSettings => self.overlay = Some(SettingsOverlay::new()),
            Control::NewWindow => self.open_window(),
        }
    }

    fn open_window(&mut self) {
        let cwd = self.session.cwd().to_path_buf();
        if let Err(e) = open_new_window(&cwd, &self.window_args) {
            warn!(error = %e, "failed to open a new window");
            self.session.print(format!("new: failed to open a window: {e}"));
        }
    }
}

/// Runs the terminal UI until `quit`, `exit`, Ctrl+C or Ctrl+D.
pub fn run(session: Session, window_args: Vec<String>) -> Result<()> {
    let mut terminal = GlazeTerminal::new("Glaze")?;
    let mut app = App::new(session, window_args);
    let started = Instant::now();

    while !app.should_exit() {
        app.session.poll();

        let view = app.session.frame();
        let state = ViewState {
            overlay: app.overlay.as_ref(),
            caret_on: caret_visible(started.elapsed(), view.settings.caret_anim_speed),
            scroll_back: app.scroll_back,
        };
        terminal.draw(|f| ui::draw(f, &view, &state))?;

        if event::poll(FRAME_INTERVAL)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.on_key(&key),
                Event::Paste(text) => app.on_paste(&text),
                _ => {}
            }
        }
    }

    debug!("terminal closed");
    Ok(())
}
