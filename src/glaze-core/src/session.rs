//! One terminal session.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use glaze_common::{host_name, prompt_prefix, user_name};
use glaze_complete::{CompletionEngine, SuggestionState};
use glaze_config::{Settings, SettingsError, SettingsStore, Toggle};
use glaze_exec::{
    BlockingExecutor, Interpreter, ProcessExecutor, RunningCommand, StreamingExecutor,
};
use glaze_input::{EditKey, History, LineBuffer};
use tracing::{debug, trace};

use crate::VERSION;
use crate::dispatcher::{Dispatch, Dispatcher};
use crate::frame::{Frame, SearchStatus};
use crate::output::OutputLog;
use crate::registry::Control;
use crate::search::SearchState;

/// Lines shown under the banner title.
pub const BANNER_HINTS: [&str; 2] = ["Type 'settings' to configure terminal options", ""];

const BUSY_NOTICE: &str = "A command is still running. Wait for it to finish.";

/// First line of every session.
pub fn banner_title() -> String {
    format!("Glaze v{VERSION} - Type '$help' for commands")
}

/// Executor matching the streaming and interpreter options.
pub fn executor_for(settings: &Settings) -> Arc<dyn ProcessExecutor> {
    let interpreter = settings
        .interpreter
        .as_deref()
        .map(Interpreter::from_program)
        .unwrap_or_default();
    if settings.streaming {
        Arc::new(StreamingExecutor::new(interpreter))
    } else {
        Arc::new(BlockingExecutor::new(interpreter))
    }
}

type ExecutorKey = (bool, Option<String>);

fn executor_key(settings: &Settings) -> ExecutorKey {
    (settings.streaming, settings.interpreter.clone())
}

/// A terminal instance: output, input line, history, suggestions and the
/// working directory commands run in.
pub struct Session {
    dispatcher: Dispatcher,
    engine: CompletionEngine,
    suggestions: SuggestionState,
    line: LineBuffer,
    history: History,
    output: OutputLog,
    cwd: PathBuf,
    settings: SettingsStore,
    search: SearchState,
    running: Option<RunningCommand>,
    user: String,
    host: String,
    /// `None` once an executor was supplied explicitly.
    executor_key: Option<ExecutorKey>,
    quit: bool,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("cwd", &self.cwd)
            .field("lines", &self.output.len())
            .field("busy", &self.running.is_some())
            .finish_non_exhaustive()
    }
}

impl Session {
    /// Starts a session in `cwd` and prints the banner.
    pub fn new(settings: SettingsStore, cwd: impl Into<PathBuf>) -> Self {
        let snapshot = settings.snapshot();
        let mut session = Self {
            dispatcher: Dispatcher::with_defaults(executor_for(&snapshot)),
            engine: CompletionEngine::new(),
            suggestions: SuggestionState::new(),
            line: LineBuffer::new(),
            history: History::with_max_entries(snapshot.max_history),
            output: OutputLog::with_max_lines(snapshot.max_scrollback),
            cwd: cwd.into(),
            settings,
            search: SearchState::new(),
            running: None,
            user: user_name(),
            host: host_name(),
            executor_key: Some(executor_key(&snapshot)),
            quit: false,
        };
        session.output.push(banner_title());
        session.output.extend(BANNER_HINTS);
        session
    }

    /// Uses `executor` for external commands regardless of settings.
    pub fn with_executor(mut self, executor: Arc<dyn ProcessExecutor>) -> Self {
        self.dispatcher.set_executor(executor);
        self.executor_key = None;
        self
    }

    /// Overrides the `user@host` shown in the prompt.
    pub fn with_identity(mut self, user: impl Into<String>, host: impl Into<String>) -> Self {
        self.user = user.into();
        self.host = host.into();
        self
    }

    pub fn with_engine(mut self, engine: CompletionEngine) -> Self {
        self.engine = engine;
        self
    }

    // ============================================================
    // ACCESSORS
    // ============================================================

    pub fn output(&self) -> &OutputLog {
        &self.output
    }

    pub fn line(&self) -> &LineBuffer {
        &self.line
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn suggestions(&self) -> &SuggestionState {
        &self.suggestions
    }

    pub fn search(&self) -> &SearchState {
        &self.search
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    pub fn settings(&self) -> Arc<Settings> {
        self.settings.snapshot()
    }

    /// Prompt for the current directory.
    pub fn prompt(&self) -> String {
        prompt_prefix(&self.user, &self.host, &self.cwd)
    }

    /// An external command is still producing output.
    pub fn is_busy(&self) -> bool {
        self.running.is_some()
    }

    /// `quit` or `exit` has run.
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    // ============================================================
    // COMMANDS
    // ============================================================

    /// Echoes and runs one command line.
    ///
    /// Blank lines are ignored. While a streamed command is still running
    /// new submissions are refused with a notice.
    pub fn submit(&mut self, command: &str) -> Control {
        if command.trim().is_empty() {
            return Control::Continue;
        }
        if self.running.is_some() {
            self.output.push(BUSY_NOTICE);
            return Control::Continue;
        }

        self.output.push(format!("{}{}", self.prompt(), command));
        self.history.record(command);
        self.history.reset_cursor();

        let control = match self.dispatcher.dispatch(
            command,
            &mut self.output,
            &mut self.cwd,
            &mut self.settings,
        ) {
            Dispatch::Done(control) => control,
            Dispatch::Running(running) => {
                self.running = Some(running);
                self.poll();
                Control::Continue
            }
        };

        self.sync_executor();
        if control == Control::Quit {
            debug!("session quit requested");
            self.quit = true;
        }
        self.refresh_search();
        control
    }

    /// Drains output from a running command. Call once per frame.
    pub fn poll(&mut self) {
        let Some(running) = self.running.as_mut() else {
            return;
        };
        if Dispatcher::pump(running, &mut self.output) {
            self.running = None;
        }
        self.refresh_search();
    }

    /// Appends a line to the output log.
    pub fn print(&mut self, line: impl Into<String>) {
        self.output.push(line);
        self.refresh_search();
    }

    /// Flips a boolean option and saves it.
    pub fn toggle_setting(&mut self, toggle: Toggle) -> Result<Arc<Settings>, SettingsError> {
        let enabled = !self.settings.snapshot().get(toggle);
        let updated = self.settings.set_toggle(toggle, enabled)?;
        self.sync_executor();
        Ok(updated)
    }

    fn sync_executor(&mut self) {
        let Some(current) = &self.executor_key else {
            return;
        };
        let snapshot = self.settings.snapshot();
        let wanted = executor_key(&snapshot);
        if *current != wanted {
            debug!(streaming = snapshot.streaming, "switching executor");
            self.dispatcher.set_executor(executor_for(&snapshot));
            self.executor_key = Some(wanted);
        }
    }

    // ============================================================
    // INPUT
    // ============================================================

    /// Applies one key press.
    pub fn handle_key(&mut self, key: EditKey) -> Control {
        if self.search.is_open() && self.handle_search_key(key) {
            return Control::Continue;
        }

        let before = self.line.revision();
        let mut control = Control::Continue;

        match key {
            EditKey::Char(c) => {
                self.line.insert_char(c);
            }
            EditKey::Backspace => {
                self.line.delete_backward();
            }
            EditKey::Delete => {
                self.line.delete_forward();
            }
            EditKey::Left => {
                self.line.move_left();
            }
            EditKey::Right => {
                self.line.move_right();
            }
            EditKey::Home => {
                self.line.move_home();
            }
            EditKey::End => {
                self.line.move_end();
            }
            EditKey::Enter => control = self.submit_line(),
            EditKey::Tab => {
                self.suggestions.accept(&mut self.line);
            }
            EditKey::Up => {
                if self.suggestions.is_visible() {
                    self.suggestions.select_prev();
                } else {
                    self.recall_older();
                }
            }
            EditKey::Down => {
                if self.suggestions.is_visible() {
                    self.suggestions.select_next();
                } else {
                    self.recall_newer();
                }
            }
            EditKey::HistoryOlder => self.recall_older(),
            EditKey::HistoryNewer => self.recall_newer(),
            EditKey::ToggleSearch => self.search_open(),
            EditKey::NewWindow => control = Control::NewWindow,
            EditKey::ClearScreen => {
                self.output.clear();
                self.refresh_search();
            }
            EditKey::Escape => self.suggestions.hide(),
        }

        if self.line.revision() != before {
            self.refresh_suggestions();
        }
        control
    }

    /// Keys consumed by the open search bar.
    fn handle_search_key(&mut self, key: EditKey) -> bool {
        match key {
            EditKey::Char(c) => self.search.push_char(c, &self.output),
            EditKey::Backspace => self.search.pop_char(&self.output),
            EditKey::Enter | EditKey::Down => self.search.next(),
            EditKey::Up => self.search.prev(),
            EditKey::Escape | EditKey::ToggleSearch => self.search.close(),
            _ => return false,
        }
        true
    }

    fn submit_line(&mut self) -> Control {
        if self.line.is_empty() {
            return Control::Continue;
        }
        if self.running.is_some() {
            self.output.push(BUSY_NOTICE);
            return Control::Continue;
        }
        let command = self.line.as_str().to_string();
        self.line.clear();
        self.suggestions.hide();
        self.submit(&command)
    }

    fn recall_older(&mut self) {
        if let Some(entry) = self.history.recall_older() {
            self.line.set_contents(entry);
        }
    }

    fn recall_newer(&mut self) {
        if let Some(entry) = self.history.recall_newer() {
            self.line.set_contents(entry);
        }
    }

    fn refresh_suggestions(&mut self) {
        self.suggestions
            .recompute(&self.engine, self.line.current_word(), &self.cwd);
        trace!(count = self.suggestions.items().len(), "suggestions refreshed");
    }

    // ============================================================
    // SEARCH
    // ============================================================

    pub fn search_open(&mut self) {
        self.search.open();
    }

    pub fn search_close(&mut self) {
        self.search.close();
    }

    pub fn search_set_query(&mut self, query: &str) {
        self.search.set_query(query, &self.output);
    }

    pub fn search_next(&mut self) {
        self.search.next();
    }

    pub fn search_prev(&mut self) {
        self.search.prev();
    }

    fn refresh_search(&mut self) {
        if self.search.is_open() {
            self.search.refresh(&self.output);
        }
    }

    // ============================================================
    // FRAME
    // ============================================================

    /// Snapshot of everything the renderer draws.
    pub fn frame(&self) -> Frame {
        let settings = self.settings.snapshot();
        let visible = self.suggestions.is_visible();

        Frame {
            lines: self
                .output
                .lines()
                .map(|l| l.render(settings.timestamp))
                .collect(),
            prompt: self.prompt(),
            input: self.line.as_str().to_string(),
            caret: self.line.caret(),
            suggestions: if visible {
                self.suggestions.items().to_vec()
            } else {
                Vec::new()
            },
            selected_suggestion: visible.then(|| self.suggestions.selected_index()),
            suggestion_scroll: self.suggestions.scroll_offset(),
            suggestion_rows: self.suggestions.max_visible(),
            search: self.search.is_open().then(|| SearchStatus {
                query: self.search.query().to_string(),
                matched_lines: self.search.matches().to_vec(),
                current: self.search.current(),
            }),
            busy: self.running.is_some(),
            settings,
        }
    }
}
