//! Running command lines through the host interpreter.
//!
//! Commands run as `<interpreter> <flag> <command line>` with stdout and
//! stderr merged into one capture. Two executors are provided:
//!
//! - [`BlockingExecutor`] waits for the child and returns everything at once
//! - [`StreamingExecutor`] hands back a [`RunningCommand`] whose lines can be
//!   drained while the child is still running
//!
//! Both classify failures the same way (see [`ExecError`]).

mod capture;
mod error;
mod executor;
mod interpreter;
mod streaming;

pub use capture::CapturedOutput;
pub use error::{ExecError, Result};
pub use executor::{BlockingExecutor, ProcessExecutor};
pub use interpreter::{Interpreter, ShellFamily};
pub use streaming::{CommandPoll, RunningCommand, StreamingExecutor};
