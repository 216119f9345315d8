//! Suggestion popup state.

use std::path::Path;

use glaze_input::LineBuffer;

use crate::engine::{CompletionEngine, Suggestion};

/// Default number of rows the popup shows at once.
const DEFAULT_MAX_VISIBLE: usize = 8;

/// Current suggestions and the highlighted entry.
#[derive(Debug, Clone)]
pub struct SuggestionState {
    items: Vec<Suggestion>,
    selected: usize,
    visible: bool,
    max_visible: usize,
    scroll_offset: usize,
}

impl Default for SuggestionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SuggestionState {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            selected: 0,
            visible: false,
            max_visible: DEFAULT_MAX_VISIBLE,
            scroll_offset: 0,
        }
    }

    /// Sets how many rows the renderer shows at once.
    pub fn with_max_visible(mut self, rows: usize) -> Self {
        self.max_visible = rows.max(1);
        self
    }

    /// Rebuilds the suggestion set for `word`.
    ///
    /// The selection survives when it is still in range, otherwise it
    /// resets to the first entry.
    pub fn recompute(&mut self, engine: &CompletionEngine, word: &str, cwd: &Path) {
        self.items = engine.suggest(word, cwd);
        self.visible = !self.items.is_empty();
        if self.selected >= self.items.len() {
            self.selected = 0;
        }
        self.keep_selected_in_view();
    }

    /// Select the previous item, wrapping to the last.
    pub fn select_prev(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.selected = if self.selected == 0 {
            self.items.len() - 1
        } else {
            self.selected - 1
        };
        self.keep_selected_in_view();
    }

    /// Select the next item, wrapping to the first.
    pub fn select_next(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.selected = (self.selected + 1) % self.items.len();
        self.keep_selected_in_view();
    }

    fn keep_selected_in_view(&mut self) {
        if self.selected < self.scroll_offset {
            self.scroll_offset = self.selected;
        } else if self.selected >= self.scroll_offset + self.max_visible {
            self.scroll_offset = self.selected + 1 - self.max_visible;
        }
        let max_offset = self.items.len().saturating_sub(self.max_visible);
        self.scroll_offset = self.scroll_offset.min(max_offset);
    }

    /// The highlighted suggestion, if any.
    pub fn selected(&self) -> Option<&Suggestion> {
        self.items.get(self.selected)
    }

    #[inline]
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    #[inline]
    pub fn items(&self) -> &[Suggestion] {
        &self.items
    }

    /// First row the renderer should draw.
    #[inline]
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    #[inline]
    pub fn max_visible(&self) -> usize {
        self.max_visible
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible && !self.items.is_empty()
    }

    /// Hide the popup and drop its items.
    pub fn hide(&mut self) {
        self.visible = false;
        self.items.clear();
        self.selected = 0;
        self.scroll_offset = 0;
    }

    /// Replaces the word under the caret with the selected suggestion.
    ///
    /// Falls back to the first suggestion when the selection is out of
    /// range. Returns false when nothing is shown.
    pub fn accept(&mut self, line: &mut LineBuffer) -> bool {
        if !self.is_visible() {
            return false;
        }
        let Some(choice) = self.items.get(self.selected).or_else(|| self.items.first()) else {
            return false;
        };
        line.replace_current_word(&choice.text);
        self.hide();
        true
    }
}
