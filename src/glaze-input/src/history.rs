//! Command history with a recall cursor.

use std::collections::VecDeque;

use tracing::trace;

/// Default number of commands kept.
pub const DEFAULT_MAX_HISTORY: usize = 50;

/// Bounded list of submitted commands.
///
/// Entries are stored oldest first. While browsing, the cursor counts back
/// from the most recent entry: `Some(0)` is the newest, `Some(len - 1)` the
/// oldest, `None` means the user is not browsing.
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<String>,
    cursor: Option<usize>,
    max_entries: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    /// Creates an empty history with the default bound.
    pub fn new() -> Self {
        Self::with_max_entries(DEFAULT_MAX_HISTORY)
    }

    /// Creates an empty history keeping at most `max_entries` commands.
    ///
    /// A bound of zero is treated as one.
    pub fn with_max_entries(max_entries: usize) -> Self {
        let max_entries = max_entries.max(1);
        Self {
            entries: VecDeque::with_capacity(max_entries),
            cursor: None,
            max_entries,
        }
    }

    /// Records a submitted command.
    ///
    /// Empty commands and repeats of the most recent entry are ignored. The
    /// oldest entry is evicted once the bound is exceeded.
    pub fn record(&mut self, command: &str) {
        if command.is_empty() || self.entries.back().is_some_and(|last| last == command) {
            return;
        }
        self.entries.push_back(command.to_string());
        while self.entries.len() > self.max_entries {
            self.entries.pop_front();
        }
        trace!(len = self.entries.len(), "history recorded");
    }

    /// Steps toward older entries and returns the entry to stage.
    ///
    /// Stays on the oldest entry once reached. Returns `None` when the
    /// history is empty.
    pub fn recall_older(&mut self) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        let oldest = self.entries.len() - 1;
        let next = match self.cursor {
            None => 0,
            Some(i) => (i + 1).min(oldest),
        };
        self.cursor = Some(next);
        self.entry_at(next)
    }

    /// Steps toward newer entries.
    ///
    /// From the newest entry this leaves browsing mode and returns
    /// `Some("")`, which the caller stages as an empty line. Returns `None`
    /// when not browsing.
    pub fn recall_newer(&mut self) -> Option<&str> {
        match self.cursor? {
            0 => {
                self.cursor = None;
                Some("")
            }
            i => {
                self.cursor = Some(i - 1);
                self.entry_at(i - 1)
            }
        }
    }

    fn entry_at(&self, back: usize) -> Option<&str> {
        let idx = self.entries.len().checked_sub(back + 1)?;
        self.entries.get(idx).map(String::as_str)
    }

    /// Leaves browsing mode. Called on every submission.
    pub fn reset_cursor(&mut self) {
        self.cursor = None;
    }

    /// Iterates entries oldest first.
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Current recall position, counted back from the newest entry.
    #[inline]
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn max_entries(&self) -> usize {
        self.max_entries
    }
}
