//! Case-insensitive search over the output log.

use crate::output::OutputLog;

/// Search bar state.
///
/// `matches` holds output line indices in log order; `current` indexes
/// into `matches`. Navigation is clamped to the first and last match.
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    open: bool,
    query: String,
    matches: Vec<usize>,
    current: Option<usize>,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Closes the bar and forgets the query.
    pub fn close(&mut self) {
        *self = Self::default();
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[inline]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[inline]
    pub fn matches(&self) -> &[usize] {
        &self.matches
    }

    /// Position of the highlighted match within [`matches`](Self::matches).
    #[inline]
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// Output line index of the highlighted match.
    pub fn current_line(&self) -> Option<usize> {
        self.current.and_then(|i| self.matches.get(i).copied())
    }

    /// Replaces the query and selects the first match.
    pub fn set_query(&mut self, query: &str, log: &OutputLog) {
        self.query = query.to_string();
        self.current = None;
        self.refresh(log);
    }

    pub fn push_char(&mut self, c: char, log: &OutputLog) {
        let mut query = std::mem::take(&mut self.query);
        query.push(c);
        self.set_query(&query, log);
    }

    pub fn pop_char(&mut self, log: &OutputLog) {
        let mut query = std::mem::take(&mut self.query);
        query.pop();
        self.set_query(&query, log);
    }

    /// Recomputes matches after the log changed, keeping the selection
    /// where possible.
    pub fn refresh(&mut self, log: &OutputLog) {
        let needle = self.query.to_lowercase();
        self.matches = if needle.is_empty() {
            Vec::new()
        } else {
            log.lines()
                .enumerate()
                .filter(|(_, line)| line.text.to_lowercase().contains(&needle))
                .map(|(i, _)| i)
                .collect()
        };

        self.current = match (self.current, self.matches.len()) {
            (_, 0) => None,
            (None, _) => Some(0),
            (Some(i), n) => Some(i.min(n - 1)),
        };
    }

    pub fn next(&mut self) {
        if let Some(i) = self.current {
            self.current = Some((i + 1).min(self.matches.len().saturating_sub(1)));
        }
    }

    pub fn prev(&mut self) {
        if let Some(i) = self.current {
            self.current = Some(i.saturating_sub(1));
        }
    }
}
