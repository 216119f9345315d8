//! The scrollback log.

use std::collections::VecDeque;

use chrono::{DateTime, Local};

/// One line of output and when it was appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLine {
    pub text: String,
    pub at: DateTime<Local>,
}

impl OutputLine {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            at: Local::now(),
        }
    }

    /// Text as displayed, with a `[HH:MM:SS] ` prefix when requested.
    pub fn render(&self, with_timestamp: bool) -> String {
        if with_timestamp {
            format!("[{}] {}", self.at.format("%H:%M:%S"), self.text)
        } else {
            self.text.clone()
        }
    }
}

/// Append-only output lines, optionally capped.
#[derive(Debug, Clone, Default)]
pub struct OutputLog {
    lines: VecDeque<OutputLine>,
    max_lines: Option<usize>,
}

impl OutputLog {
    /// Creates an unbounded log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a log keeping at most `max_lines`, dropping the oldest.
    pub fn with_max_lines(max_lines: Option<usize>) -> Self {
        Self {
            lines: VecDeque::new(),
            max_lines: max_lines.map(|n| n.max(1)),
        }
    }

    pub fn push(&mut self, text: impl Into<String>) {
        self.lines.push_back(OutputLine::new(text));
        if let Some(max) = self.max_lines {
            while self.lines.len() > max {
                self.lines.pop_front();
            }
        }
    }

    pub fn push_blank(&mut self) {
        self.push(String::new());
    }

    pub fn extend<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for line in lines {
            self.push(line);
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn lines(&self) -> impl ExactSizeIterator<Item = &OutputLine> {
        self.lines.iter()
    }

    /// Plain text of every line, oldest first.
    pub fn texts(&self) -> Vec<&str> {
        self.lines.iter().map(|l| l.text.as_str()).collect()
    }

    pub fn get(&self, index: usize) -> Option<&OutputLine> {
        self.lines.get(index)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn max_lines(&self) -> Option<usize> {
        self.max_lines
    }
}
