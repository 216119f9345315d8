//! State a built-in command may touch.

use std::path::PathBuf;

use glaze_config::SettingsStore;

use crate::output::OutputLog;
use crate::registry::BuiltinRegistry;

/// Mutable view of the session handed to built-ins.
pub struct CommandContext<'a> {
    pub output: &'a mut OutputLog,
    pub cwd: &'a mut PathBuf,
    pub settings: &'a mut SettingsStore,
    /// Registry the command was dispatched from, for help listings.
    pub registry: &'a BuiltinRegistry,
}

impl CommandContext<'_> {
    /// Appends one line of output.
    pub fn print(&mut self, line: impl Into<String>) {
        self.output.push(line);
    }
}
