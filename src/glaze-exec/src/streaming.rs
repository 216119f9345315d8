//! Incremental execution.
//!
//! The child's output is forwarded over a channel by reader threads; the
//! caller drains it with [`RunningCommand::poll`] once per frame so the UI
//! stays responsive while long commands run.

use std::path::Path;
use std::process::Child;
use std::sync::mpsc::{Receiver, TryRecvError};
use std::thread;
use std::time::Duration;

use tracing::{debug, warn};

use crate::capture::{CapturedOutput, display_line};
use crate::error::{ExecError, Result};
use crate::executor::{ProcessExecutor, classify, spawn_merged};
use crate::interpreter::Interpreter;

/// Exit code of a finished command, or why it failed.
pub type Completion = Result<Option<i32>>;

/// What arrived since the previous poll.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CommandPoll {
    /// New display lines, blank lines already dropped.
    pub lines: Vec<String>,
    /// Set exactly once, on the poll that observes completion.
    pub done: Option<Completion>,
}

struct LiveChild {
    child: Child,
    rx: Receiver<String>,
    saw_output: bool,
}

/// A command whose output is drained incrementally.
pub struct RunningCommand {
    command: String,
    pending: Vec<String>,
    live: Option<LiveChild>,
    outcome: Option<Completion>,
}

impl std::fmt::Debug for RunningCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RunningCommand")
            .field("command", &self.command)
            .field("running", &self.live.is_some())
            .finish()
    }
}

impl RunningCommand {
    /// Wraps the result of a command that already ran to completion.
    pub fn finished(result: Result<CapturedOutput>) -> Self {
        let (pending, outcome) = match result {
            Ok(output) => (output.lines(), Ok(output.exit_code)),
            Err(e) => (Vec::new(), Err(e)),
        };
        Self {
            command: String::new(),
            pending,
            live: None,
            outcome: Some(outcome),
        }
    }

    fn live(command: &str, child: Child, rx: Receiver<String>) -> Self {
        Self {
            command: command.to_string(),
            pending: Vec::new(),
            live: Some(LiveChild {
                child,
                rx,
                saw_output: false,
            }),
            outcome: None,
        }
    }

    /// True while the child may still produce output.
    pub fn is_running(&self) -> bool {
        self.live.is_some()
    }

    /// True once the completion has been handed out.
    pub fn is_done(&self) -> bool {
        self.live.is_none() && self.outcome.is_none() && self.pending.is_empty()
    }

    /// Drains whatever output has arrived without blocking.
    pub fn poll(&mut self) -> CommandPoll {
        let mut lines = std::mem::take(&mut self.pending);

        let mut closed = false;
        if let Some(live) = self.live.as_mut() {
            loop {
                match live.rx.try_recv() {
                    Ok(raw) => {
                        if let Some(line) = display_line(&raw) {
                            live.saw_output = true;
                            lines.push(line);
                        }
                    }
                    Err(TryRecvError::Empty) => break,
                    Err(TryRecvError::Disconnected) => {
                        closed = true;
                        break;
                    }
                }
            }
        }

        if closed && let Some(live) = self.live.take() {
            self.outcome = Some(self.reap(live));
        }

        let done = if self.live.is_none() {
            self.outcome.take()
        } else {
            None
        };
        CommandPoll { lines, done }
    }

    fn reap(&self, mut live: LiveChild) -> Completion {
        let status = live.child.wait().map_err(|e| {
            warn!(command = %self.command, error = %e, "failed to wait for child");
            ExecError::from_spawn(&self.command, &e)
        })?;
        debug!(command = %self.command, code = ?status.code(), "command finished");
        classify(&self.command, !live.saw_output, status)?;
        Ok(status.code())
    }

    /// Blocks until the command finishes, returning all remaining lines and
    /// the completion.
    pub fn wait(mut self) -> (Vec<String>, Completion) {
        let mut lines = Vec::new();
        loop {
            let poll = self.poll();
            lines.extend(poll.lines);
            if let Some(done) = poll.done {
                return (lines, done);
            }
            if self.live.is_none() {
                // completion already handed out by an earlier poll
                return (lines, Ok(None));
            }
            thread::sleep(Duration::from_millis(5));
        }
    }
}

/// Starts commands without waiting for them.
#[derive(Debug, Clone, Default)]
pub struct StreamingExecutor {
    interpreter: Interpreter,
}

impl StreamingExecutor {
    pub fn new(interpreter: Interpreter) -> Self {
        Self { interpreter }
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }
}

impl ProcessExecutor for StreamingExecutor {
    fn execute(&self, command_line: &str, cwd: &Path) -> Result<CapturedOutput> {
        let running = self.spawn(command_line, cwd)?;
        let (lines, done) = running.wait();
        let code = done?;
        Ok(CapturedOutput::from_text(&lines.join("\n"), code))
    }

    fn spawn(&self, command_line: &str, cwd: &Path) -> Result<RunningCommand> {
        debug!(command = command_line, cwd = %cwd.display(), "spawning");
        let (child, rx) = spawn_merged(&self.interpreter, command_line, cwd)?;
        Ok(RunningCommand::live(command_line, child, rx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_finished_handle_reports_once() {
        let mut running =
            RunningCommand::finished(Ok(CapturedOutput::from_text("a\n\nb", Some(0))));
        assert!(!running.is_running());
        let first = running.poll();
        assert_eq!(first.lines, vec!["a", "b"]);
        assert_eq!(first.done, Some(Ok(Some(0))));
        assert!(running.is_done());
        assert_eq!(running.poll(), CommandPoll::default());
    }

    #[test]
    fn test_finished_error() {
        let mut running = RunningCommand::finished(Err(ExecError::Spawn { code: 2 }));
        let poll = running.poll();
        assert!(poll.lines.is_empty());
        assert_eq!(poll.done, Some(Err(ExecError::Spawn { code: 2 })));
    }

    #[cfg(unix)]
    #[test]
    fn test_streaming_matches_blocking() {
        use crate::executor::BlockingExecutor;

        let cwd = std::env::current_dir().unwrap();
        let blocking = BlockingExecutor::default().execute("echo hi", &cwd).unwrap();
        let (lines, done) = StreamingExecutor::default()
            .spawn("echo hi", &cwd)
            .unwrap()
            .wait();
        assert_eq!(lines, blocking.lines());
        assert_eq!(done, Ok(Some(0)));
    }

    #[cfg(unix)]
    #[test]
    fn test_streaming_output_before_unknown_command_is_kept() {
        let cwd = std::env::current_dir().unwrap();
        let (lines, done) = StreamingExecutor::default()
            .spawn("echo partial; thisdoesnotexist_glaze", &cwd)
            .unwrap()
            .wait();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "partial");
        assert!(lines[1].contains("not found"));
        assert_eq!(done, Ok(Some(127)));
    }

    #[cfg(unix)]
    #[test]
    fn test_streaming_silent_failure_is_not_recognized() {
        let cwd = std::env::current_dir().unwrap();
        let (lines, done) = StreamingExecutor::default()
            .spawn("exit 3", &cwd)
            .unwrap()
            .wait();
        assert!(lines.is_empty());
        assert_eq!(done, Err(ExecError::not_recognized("exit 3")));
    }

    #[cfg(unix)]
    #[test]
    fn test_streaming_execute() {
        let cwd = std::env::current_dir().unwrap();
        let out = StreamingExecutor::default()
            .execute("printf 'x\\ny\\n'", &cwd)
            .unwrap();
        assert_eq!(out.lines(), vec!["x", "y"]);
    }
}
