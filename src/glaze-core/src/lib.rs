//! The Glaze terminal session.
//!
//! A [`Session`] owns everything one terminal window shows: the output log,
//! the input line, history, suggestions, working directory and settings.
//! Renderers feed it [`EditKey`](glaze_input::EditKey)s and draw the
//! [`Frame`] it returns.
//!
//! Submitted lines go through the [`Dispatcher`]: names registered in the
//! [`BuiltinRegistry`] run in-process, everything else is handed to the
//! host interpreter.

pub mod builtins;
mod context;
mod dispatcher;
mod frame;
mod output;
mod registry;
mod search;
mod session;

pub use context::CommandContext;
pub use dispatcher::{Dispatch, Dispatcher};
pub use frame::{Frame, SearchStatus};
pub use output::{OutputLine, OutputLog};
pub use registry::{Builtin, BuiltinRegistry, Control};
pub use search::SearchState;
pub use session::{BANNER_HINTS, Session, banner_title, executor_for};

/// Version shown by the banner and `version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
