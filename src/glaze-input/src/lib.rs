//! Line editing primitives for the Glaze front-end.
//!
//! - [`LineBuffer`]: fixed-capacity ASCII input line with a caret
//! - [`History`]: bounded list of submitted commands with a recall cursor
//! - [`EditKey`]: renderer-independent key events
//!
//! ```rust
//! use glaze_input::{History, LineBuffer};
//!
//! let mut line = LineBuffer::new();
//! line.insert_str("dir");
//! assert_eq!(line.caret(), 3);
//!
//! let mut history = History::new();
//! history.record(line.as_str());
//! assert_eq!(history.recall_older(), Some("dir"));
//! ```

mod history;
mod key;
mod line_buffer;

pub use history::{DEFAULT_MAX_HISTORY, History};
pub use key::EditKey;
pub use line_buffer::{LINE_CAPACITY, LineBuffer};
