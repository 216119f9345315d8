//! Per-frame snapshot handed to renderers.

use std::sync::Arc;

use glaze_complete::Suggestion;
use glaze_config::Settings;

/// Search bar contents for the current frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchStatus {
    pub query: String,
    /// Output line indices that match.
    pub matched_lines: Vec<usize>,
    /// Position of the highlighted match within `matched_lines`.
    pub current: Option<usize>,
}

impl SearchStatus {
    /// Output line to highlight and scroll to.
    pub fn highlighted_line(&self) -> Option<usize> {
        self.current.and_then(|i| self.matched_lines.get(i).copied())
    }

    /// `i/n` counter, `0/0` when nothing matches.
    pub fn counter(&self) -> String {
        match self.current {
            Some(i) => format!("{}/{}", i + 1, self.matched_lines.len()),
            None => "0/0".to_string(),
        }
    }
}

/// Everything a renderer needs to draw one frame.
#[derive(Debug, Clone)]
pub struct Frame {
    /// Output lines, timestamp-prefixed when that option is on.
    pub lines: Vec<String>,
    /// `user@host:dir$ `
    pub prompt: String,
    pub input: String,
    pub caret: usize,
    /// Empty when the popup is hidden.
    pub suggestions: Vec<Suggestion>,
    pub selected_suggestion: Option<usize>,
    pub suggestion_scroll: usize,
    /// Popup height in rows.
    pub suggestion_rows: usize,
    pub search: Option<SearchStatus>,
    /// An external command is still producing output.
    pub busy: bool,
    pub settings: Arc<Settings>,
}
