//! The executor interface and the blocking implementation.

use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use std::process::{Child, ExitStatus};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use tracing::debug;

use crate::capture::CapturedOutput;
use crate::error::{ExecError, Result};
use crate::interpreter::Interpreter;
use crate::streaming::RunningCommand;

/// Runs command lines through a host interpreter.
pub trait ProcessExecutor: Send + Sync {
    /// Runs `command_line` in `cwd` and waits for it to exit.
    fn execute(&self, command_line: &str, cwd: &Path) -> Result<CapturedOutput>;

    /// Starts `command_line` and returns a handle to drain its output.
    ///
    /// The default runs [`execute`](Self::execute) to completion and hands
    /// back an already-finished command.
    fn spawn(&self, command_line: &str, cwd: &Path) -> Result<RunningCommand> {
        Ok(RunningCommand::finished(self.execute(command_line, cwd)))
    }
}

/// Runs each command to completion before returning.
#[derive(Debug, Clone, Default)]
pub struct BlockingExecutor {
    interpreter: Interpreter,
}

impl BlockingExecutor {
    pub fn new(interpreter: Interpreter) -> Self {
        Self { interpreter }
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }
}

impl ProcessExecutor for BlockingExecutor {
    fn execute(&self, command_line: &str, cwd: &Path) -> Result<CapturedOutput> {
        debug!(command = command_line, cwd = %cwd.display(), "executing");
        let (mut child, rx) = spawn_merged(&self.interpreter, command_line, cwd)?;

        // Senders close when both pipes hit EOF
        let mut text = String::new();
        for line in rx {
            text.push_str(&line);
            text.push('\n');
        }

        let status = child
            .wait()
            .map_err(|e| ExecError::from_spawn(command_line, &e))?;
        let output = CapturedOutput::from_text(&text, status.code());
        classify(command_line, output.is_empty(), status)?;
        Ok(output)
    }
}

/// Starts the interpreter with both output pipes forwarded, line by line,
/// into a single channel.
pub(crate) fn spawn_merged(
    interpreter: &Interpreter,
    command_line: &str,
    cwd: &Path,
) -> Result<(Child, Receiver<String>)> {
    let mut child = interpreter
        .command(command_line, cwd)
        .spawn()
        .map_err(|e| ExecError::from_spawn(command_line, &e))?;

    let (tx, rx) = mpsc::channel();
    if let Some(stdout) = child.stdout.take() {
        forward_lines(stdout, tx.clone());
    }
    if let Some(stderr) = child.stderr.take() {
        forward_lines(stderr, tx);
    }
    Ok((child, rx))
}

fn forward_lines<R: Read + Send + 'static>(stream: R, tx: Sender<String>) {
    thread::spawn(move || {
        let reader = BufReader::new(stream);
        for chunk in reader.split(b'\n') {
            let Ok(bytes) = chunk else { break };
            if tx.send(String::from_utf8_lossy(&bytes).into_owned()).is_err() {
                break;
            }
        }
    });
}

/// Decides whether a finished command counts as "not recognized".
///
/// Only a failure that printed nothing counts. Anything the command wrote,
/// including the shell's own diagnostic, is kept as output.
pub(crate) fn classify(command_line: &str, output_empty: bool, status: ExitStatus) -> Result<()> {
    if output_empty && !status.success() {
        debug!(command = command_line, code = ?status.code(), "command not recognized");
        return Err(ExecError::not_recognized(command_line));
    }
    Ok(())
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::interpreter::ShellFamily;
    use pretty_assertions::assert_eq;

    fn run(cmd: &str) -> Result<CapturedOutput> {
        let cwd = std::env::current_dir().unwrap();
        BlockingExecutor::default().execute(cmd, &cwd)
    }

    #[test]
    fn test_echo() {
        let out = run("echo hi").unwrap();
        assert_eq!(out.text, "hi");
        assert_eq!(out.lines(), vec!["hi"]);
        assert!(out.success());
    }

    #[test]
    fn test_stderr_is_captured() {
        let out = run("echo oops 1>&2").unwrap();
        assert_eq!(out.lines(), vec!["oops"]);
    }

    #[test]
    fn test_unknown_command_keeps_shell_diagnostic() {
        let out = run("thisdoesnotexist_glaze").unwrap();
        assert_eq!(out.exit_code, Some(127));
        let lines = out.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("thisdoesnotexist_glaze"));
        assert!(lines[0].contains("not found"));
    }

    #[test]
    fn test_output_before_unknown_command_is_kept() {
        let out = run("echo partial; thisdoesnotexist_glaze").unwrap();
        assert_eq!(out.exit_code, Some(127));
        let lines = out.lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "partial");
        assert!(lines[1].contains("not found"));
    }

    #[test]
    fn test_exit_127_with_output_is_kept() {
        let out = run("echo found-it; exit 127").unwrap();
        assert_eq!(out.lines(), vec!["found-it"]);
        assert_eq!(out.exit_code, Some(127));
    }

    #[test]
    fn test_silent_failure_is_not_recognized() {
        assert!(matches!(
            run("exit 3"),
            Err(ExecError::NotRecognized { .. })
        ));
    }

    #[test]
    fn test_failure_with_output_is_kept() {
        let out = run("echo partial; exit 2").unwrap();
        assert_eq!(out.text, "partial");
        assert_eq!(out.exit_code, Some(2));
    }

    #[test]
    fn test_runs_in_given_directory() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("marker.txt"), "").unwrap();
        let out = BlockingExecutor::default()
            .execute("ls", tmp.path())
            .unwrap();
        assert_eq!(out.lines(), vec!["marker.txt"]);
    }

    #[test]
    fn test_missing_interpreter() {
        let exec = BlockingExecutor::new(Interpreter::new(
            "/nonexistent/glaze-shell",
            ShellFamily::Posix,
        ));
        let err = exec.execute("echo hi", Path::new(".")).unwrap_err();
        assert_eq!(err, ExecError::not_recognized("echo hi"));
    }

    #[test]
    fn test_default_spawn_is_already_finished() {
        let cwd = std::env::current_dir().unwrap();
        let mut running = BlockingExecutor::default()
            .spawn("echo one; echo two", &cwd)
            .unwrap();
        let poll = running.poll();
        assert_eq!(poll.lines, vec!["one", "two"]);
        assert_eq!(poll.done, Some(Ok(Some(0))));
        assert!(running.poll().done.is_none());
    }
}
