//! Routing submitted lines to built-ins or the host interpreter.

use std::path::PathBuf;
use std::sync::Arc;

use glaze_config::SettingsStore;
use glaze_exec::{ProcessExecutor, RunningCommand};
use tracing::debug;

use crate::context::CommandContext;
use crate::output::OutputLog;
use crate::registry::{BuiltinRegistry, Control};

/// Result of dispatching one line.
#[derive(Debug)]
pub enum Dispatch {
    /// Output is complete, including the trailing blank line.
    Done(Control),
    /// An external command whose output is still to be drained with
    /// [`Dispatcher::pump`].
    Running(RunningCommand),
}

/// Classifies submitted lines and runs them.
pub struct Dispatcher {
    registry: BuiltinRegistry,
    executor: Arc<dyn ProcessExecutor>,
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}

impl Dispatcher {
    pub fn new(registry: BuiltinRegistry, executor: Arc<dyn ProcessExecutor>) -> Self {
        Self { registry, executor }
    }

    /// Dispatcher with every Glaze built-in.
    pub fn with_defaults(executor: Arc<dyn ProcessExecutor>) -> Self {
        Self::new(BuiltinRegistry::with_defaults(), executor)
    }

    pub fn registry(&self) -> &BuiltinRegistry {
        &self.registry
    }

    pub fn set_executor(&mut self, executor: Arc<dyn ProcessExecutor>) {
        self.executor = executor;
    }

    /// True if `line` would run in-process.
    pub fn is_builtin(&self, line: &str) -> bool {
        self.registry.lookup(line).is_some()
    }

    /// Runs `line` as a built-in or hands it to the executor.
    ///
    /// Built-ins and failed spawns finish immediately. External commands
    /// return a handle the caller drains with [`pump`](Self::pump).
    pub fn dispatch(
        &self,
        line: &str,
        output: &mut OutputLog,
        cwd: &mut PathBuf,
        settings: &mut SettingsStore,
    ) -> Dispatch {
        if let Some((builtin, args)) = self.registry.lookup(line) {
            debug!(builtin = builtin.name(), args, "dispatching builtin");
            let mut ctx = CommandContext {
                output,
                cwd,
                settings,
                registry: &self.registry,
            };
            let control = builtin.run(args, &mut ctx);
            ctx.output.push_blank();
            return Dispatch::Done(control);
        }

        debug!(command = line, "dispatching external");
        match self.executor.spawn(line, cwd) {
            Ok(running) => Dispatch::Running(running),
            Err(e) => {
                output.push(e.to_string());
                output.push_blank();
                Dispatch::Done(Control::Continue)
            }
        }
    }

    /// Moves newly arrived output from `running` into `output`.
    ///
    /// Returns true once the command has finished and its error line (if
    /// any) and trailing blank line have been appended.
    pub fn pump(running: &mut RunningCommand, output: &mut OutputLog) -> bool {
        let poll = running.poll();
        output.extend(poll.lines);
        match poll.done {
            Some(done) => {
                if let Err(e) = done {
                    output.push(e.to_string());
                }
                output.push_blank();
                true
            }
            None => false,
        }
    }
}
