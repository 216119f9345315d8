//! Single-line input buffer.
//!
//! Provides the editable command line with:
//! - Caret movement and text editing
//! - A hard capacity (typing past it is ignored)
//! - A revision counter so consumers know when to recompute derived state

/// Maximum number of characters the input line holds.
pub const LINE_CAPACITY: usize = 255;

/// Editable command line with a caret.
///
/// Only printable ASCII is accepted, so byte offsets and character offsets
/// coincide and the caret is a plain index into the text. The caret always
/// satisfies `0 <= caret <= len`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineBuffer {
    /// The current text content.
    text: String,
    /// Caret position (character index).
    caret: usize,
    /// Maximum length in characters.
    capacity: usize,
    /// Bumped on every change to text or caret.
    revision: u64,
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl LineBuffer {
    /// Creates an empty buffer with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(LINE_CAPACITY)
    }

    /// Creates an empty buffer holding at most `capacity` characters.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            text: String::with_capacity(capacity),
            caret: 0,
            capacity,
            revision: 0,
        }
    }

    /// Returns true if `c` may be typed into the buffer.
    #[inline]
    pub fn accepts(c: char) -> bool {
        (' '..='\u{7f}').contains(&c)
    }

    /// Returns the current text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the caret position.
    #[inline]
    pub fn caret(&self) -> usize {
        self.caret
    }

    /// Returns the text length.
    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns true if the buffer holds no text.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns the maximum number of characters.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the revision counter.
    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn touch(&mut self) -> bool {
        self.revision = self.revision.wrapping_add(1);
        true
    }

    /// Inserts a character at the caret.
    ///
    /// Returns false (and leaves the buffer untouched) when the character is
    /// not printable ASCII or the buffer is full.
    pub fn insert_char(&mut self, c: char) -> bool {
        if !Self::accepts(c) || self.text.len() >= self.capacity {
            return false;
        }
        self.text.insert(self.caret, c);
        self.caret += 1;
        self.touch()
    }

    /// Inserts each acceptable character of `s`, stopping at capacity.
    ///
    /// Returns the number of characters inserted.
    pub fn insert_str(&mut self, s: &str) -> usize {
        s.chars().filter(|&c| self.insert_char(c)).count()
    }

    /// Deletes the character before the caret (Backspace).
    pub fn delete_backward(&mut self) -> bool {
        if self.caret == 0 {
            return false;
        }
        self.caret -= 1;
        self.text.remove(self.caret);
        self.touch()
    }

    /// Deletes the character at the caret (Delete).
    pub fn delete_forward(&mut self) -> bool {
        if self.caret >= self.text.len() {
            return false;
        }
        self.text.remove(self.caret);
        self.touch()
    }

    /// Moves the caret one position left.
    pub fn move_left(&mut self) -> bool {
        if self.caret == 0 {
            return false;
        }
        self.caret -= 1;
        self.touch()
    }

    /// Moves the caret one position right.
    pub fn move_right(&mut self) -> bool {
        if self.caret >= self.text.len() {
            return false;
        }
        self.caret += 1;
        self.touch()
    }

    /// Moves the caret to the start of the line.
    pub fn move_home(&mut self) -> bool {
        if self.caret == 0 {
            return false;
        }
        self.caret = 0;
        self.touch()
    }

    /// Moves the caret to the end of the line.
    pub fn move_end(&mut self) -> bool {
        if self.caret == self.text.len() {
            return false;
        }
        self.caret = self.text.len();
        self.touch()
    }

    /// Places the caret, clamped to the text.
    pub fn set_caret(&mut self, pos: usize) -> bool {
        let pos = pos.min(self.text.len());
        if pos == self.caret {
            return false;
        }
        self.caret = pos;
        self.touch()
    }

    /// Replaces the whole text and puts the caret at the end.
    ///
    /// Characters that could not be typed are dropped and the text is cut at
    /// capacity, matching what typing it would have produced.
    pub fn set_contents(&mut self, s: &str) {
        self.text = s
            .chars()
            .filter(|&c| Self::accepts(c))
            .take(self.capacity)
            .collect();
        self.caret = self.text.len();
        self.touch();
    }

    /// Empties the buffer.
    pub fn clear(&mut self) {
        self.text.clear();
        self.caret = 0;
        self.touch();
    }

    /// Index where the word under the caret starts.
    ///
    /// Scans back from the caret to the previous space or the line start.
    pub fn word_start(&self) -> usize {
        self.text[..self.caret]
            .rfind(' ')
            .map(|i| i + 1)
            .unwrap_or(0)
    }

    /// The word under the caret (from [`word_start`](Self::word_start) to the caret).
    pub fn current_word(&self) -> &str {
        &self.text[self.word_start()..self.caret]
    }

    /// Replaces the word under the caret with `replacement`.
    ///
    /// Text after the caret is kept, the caret lands at the end of the
    /// inserted text, and the result is cut at capacity. Characters that
    /// could not be typed are dropped from `replacement` first.
    pub fn replace_current_word(&mut self, replacement: &str) {
        let start = self.word_start();
        let mut text = String::with_capacity(self.capacity);
        text.push_str(&self.text[..start]);
        text.extend(replacement.chars().filter(|&c| Self::accepts(c)));
        let caret = text.len().min(self.capacity);
        text.push_str(&self.text[self.caret..]);

        self.set_contents(&text);
        self.caret = caret.min(self.text.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(s: &str) -> LineBuffer {
        let mut line = LineBuffer::new();
        line.insert_str(s);
        line
    }

    #[test]
    fn test_insert_advances_caret() {
        let mut line = LineBuffer::new();
        for (i, c) in "hello".chars().enumerate() {
            assert!(line.insert_char(c));
            assert_eq!(line.caret(), i + 1);
            assert_eq!(line.len(), i + 1);
        }
        assert_eq!(line.as_str(), "hello");
    }

    #[test]
    fn test_insert_in_middle() {
        let mut line = typed("hllo");
        line.set_caret(1);
        line.insert_char('e');
        assert_eq!(line.as_str(), "hello");
        assert_eq!(line.caret(), 2);
    }

    #[test]
    fn test_insert_rejected_at_capacity() {
        let mut line = LineBuffer::with_capacity(3);
        assert_eq!(line.insert_str("abcd"), 3);
        let rev = line.revision();
        assert!(!line.insert_char('z'));
        assert_eq!(line.as_str(), "abc");
        assert_eq!(line.caret(), 3);
        assert_eq!(line.revision(), rev);
    }

    #[test]
    fn test_default_capacity_is_255() {
        let mut line = LineBuffer::new();
        let long = "x".repeat(300);
        assert_eq!(line.insert_str(&long), LINE_CAPACITY);
        assert_eq!(line.len(), 255);
    }

    #[test]
    fn test_control_and_non_ascii_rejected() {
        let mut line = LineBuffer::new();
        assert!(!line.insert_char('\r'));
        assert!(!line.insert_char('\n'));
        assert!(!line.insert_char('\t'));
        assert!(!line.insert_char('é'));
        assert!(line.is_empty());
        assert!(line.insert_char(' '));
        assert!(line.insert_char('~'));
    }

    #[test]
    fn test_backspace_and_delete() {
        let mut line = typed("hello");
        assert!(line.delete_backward());
        assert_eq!(line.as_str(), "hell");
        assert_eq!(line.caret(), 4);

        line.set_caret(1);
        assert!(line.delete_forward());
        assert_eq!(line.as_str(), "hll");
        assert_eq!(line.caret(), 1);
    }

    #[test]
    fn test_boundaries_are_noops() {
        let mut line = typed("ab");
        assert!(!line.delete_forward());
        assert!(!line.move_right());
        assert!(!line.move_end());
        line.move_home();
        assert!(!line.delete_backward());
        assert!(!line.move_left());
        assert!(!line.move_home());
        assert_eq!(line.as_str(), "ab");
        assert_eq!(line.caret(), 0);
    }

    #[test]
    fn test_set_caret_clamps() {
        let mut line = typed("abc");
        line.set_caret(99);
        assert_eq!(line.caret(), 3);
    }

    #[test]
    fn test_set_contents_truncates_and_moves_caret() {
        let mut line = LineBuffer::with_capacity(4);
        line.set_contents("abcdef");
        assert_eq!(line.as_str(), "abcd");
        assert_eq!(line.caret(), 4);
    }

    #[test]
    fn test_clear() {
        let mut line = typed("dir /w");
        line.clear();
        assert!(line.is_empty());
        assert_eq!(line.caret(), 0);
    }

    #[test]
    fn test_current_word() {
        let mut line = typed("cd C:\\Us");
        assert_eq!(line.current_word(), "C:\\Us");
        line.set_caret(2);
        assert_eq!(line.current_word(), "cd");
        line.set_caret(3);
        assert_eq!(line.current_word(), "");
    }

    #[test]
    fn test_replace_current_word_keeps_tail() {
        let mut line = typed("ec hi");
        line.set_caret(2);
        line.replace_current_word("echo");
        assert_eq!(line.as_str(), "echo hi");
        assert_eq!(line.caret(), 4);
    }

    #[test]
    fn test_replace_current_word_drops_untypeable_chars() {
        let mut line = typed("cat caf ok");
        line.set_caret(7);
        line.replace_current_word("café.txt");
        assert_eq!(line.as_str(), "cat caf.txt ok");
        assert_eq!(line.caret(), 11);
        assert_eq!(line.current_word(), "caf.txt");
    }

    #[test]
    fn test_replace_current_word_at_capacity() {
        let mut line = LineBuffer::with_capacity(6);
        line.insert_str("ab cd");
        line.set_caret(4);
        line.replace_current_word("xyz");
        assert_eq!(line.as_str(), "ab xyz");
        assert_eq!(line.caret(), 6);
    }

    #[test]
    fn test_revision_changes_on_edit() {
        let mut line = LineBuffer::new();
        let r0 = line.revision();
        line.insert_char('a');
        assert_ne!(line.revision(), r0);
    }
}
