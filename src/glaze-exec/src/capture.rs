//! Captured process output.

/// Merged stdout/stderr of a finished command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedOutput {
    /// Decoded output with trailing line breaks removed.
    pub text: String,
    /// Exit code, `None` if the process was killed by a signal.
    pub exit_code: Option<i32>,
}

impl CapturedOutput {
    /// Builds a capture from raw bytes, decoding lossily.
    pub fn from_bytes(bytes: &[u8], exit_code: Option<i32>) -> Self {
        Self::from_text(&String::from_utf8_lossy(bytes), exit_code)
    }

    pub fn from_text(text: &str, exit_code: Option<i32>) -> Self {
        Self {
            text: text.trim_end_matches(['\r', '\n']).to_string(),
            exit_code,
        }
    }

    /// Check if the process succeeded (exit code 0)
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Output lines for display: `\r` removed, blank lines dropped.
    pub fn lines(&self) -> Vec<String> {
        display_lines(&self.text)
    }
}

/// Cleans one raw line for display. Returns `None` for lines that end up
/// empty.
pub(crate) fn display_line(raw: &str) -> Option<String> {
    let line: String = raw.chars().filter(|&c| c != '\r').collect();
    (!line.is_empty()).then_some(line)
}

pub(crate) fn display_lines(text: &str) -> Vec<String> {
    text.split('\n').filter_map(display_line).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_trailing_breaks_trimmed() {
        let out = CapturedOutput::from_bytes(b"hello\r\n\r\n", Some(0));
        assert_eq!(out.text, "hello");
        assert!(out.success());
    }

    #[test]
    fn test_lines_drop_blanks_and_carriage_returns() {
        let out = CapturedOutput::from_text("a\r\n\r\nb\n\nc", Some(0));
        assert_eq!(out.lines(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let out = CapturedOutput::from_bytes(&[b'o', b'k', 0xff], Some(1));
        assert!(out.text.starts_with("ok"));
        assert!(!out.success());
    }
}
