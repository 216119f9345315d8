//! Glaze's built-in commands.

mod cd;
mod help;
mod info;
mod screen;
mod settings;

pub use cd::CdCommand;
pub use help::HelpCommand;
pub use info::{SystemCommand, SystemInfo, TimeCommand, VersionCommand, format_date_time};
pub use screen::{ClearCommand, NewWindowCommand, QuitCommand};
pub use settings::SettingsCommand;

use crate::registry::BuiltinRegistry;

/// Registers every built-in, in the order help lists them.
pub fn register_all(registry: &mut BuiltinRegistry) {
    registry.register(HelpCommand::full());
    registry.register(HelpCommand::short());
    registry.register(ClearCommand);
    registry.register(QuitCommand);
    registry.register(VersionCommand);
    registry.register(SystemCommand);
    registry.register(SettingsCommand);
    registry.register(TimeCommand);
    registry.register(CdCommand);
    registry.register(NewWindowCommand);
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::path::PathBuf;

    use glaze_config::{Settings, SettingsStore};

    use crate::context::CommandContext;
    use crate::output::OutputLog;
    use crate::registry::{BuiltinRegistry, Control};

    /// Session-like state for running one built-in in isolation.
    pub struct Harness {
        pub output: OutputLog,
        pub cwd: PathBuf,
        pub settings: SettingsStore,
        pub registry: BuiltinRegistry,
    }

    impl Harness {
        pub fn new() -> Self {
            Self::with_store(SettingsStore::in_memory(Settings::default()))
        }

        pub fn with_store(settings: SettingsStore) -> Self {
            Self {
                output: OutputLog::new(),
                cwd: std::env::current_dir().unwrap(),
                settings,
                registry: BuiltinRegistry::with_defaults(),
            }
        }

        /// Runs `line` through the registry. Panics if it is not a built-in.
        pub fn run(&mut self, line: &str) -> Control {
            let (builtin, args) = self
                .registry
                .lookup(line)
                .unwrap_or_else(|| panic!("{line} is not a builtin"));
            let mut ctx = CommandContext {
                output: &mut self.output,
                cwd: &mut self.cwd,
                settings: &mut self.settings,
                registry: &self.registry,
            };
            builtin.run(args, &mut ctx)
        }

        pub fn lines(&self) -> Vec<String> {
            self.output.texts().into_iter().map(String::from).collect()
        }
    }
}
