//! Suggestion generation for the word under the caret.

use std::collections::HashSet;
use std::fs;
use std::path::{MAIN_SEPARATOR, Path, PathBuf};

use glaze_common::{expand_home_path, is_separator, normalize_separators};
use glaze_input::LineBuffer;
use tracing::trace;

use crate::dictionary::COMMAND_DICTIONARY;

/// Maximum number of suggestions kept after any lookup.
pub const MAX_SUGGESTIONS: usize = 30;

/// Directory listing stops after this many matches.
pub const MAX_PATH_MATCHES: usize = 50;

// ============================================================
// SUGGESTION
// ============================================================

/// What a suggestion refers to. Renderers color these differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SuggestionKind {
    Command,
    Directory,
    File,
}

/// A single completion candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    /// Replacement text for the word under the caret.
    pub text: String,
    pub kind: SuggestionKind,
}

impl Suggestion {
    pub fn new(text: impl Into<String>, kind: SuggestionKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }
}

/// Returns true if the word should be completed as a filesystem path.
pub fn is_path_word(word: &str) -> bool {
    word.contains(['/', '\\', ':'])
}

// ============================================================
// COMPLETION ENGINE
// ============================================================

/// Produces suggestions from a command dictionary and the filesystem.
#[derive(Debug, Clone)]
pub struct CompletionEngine {
    dictionary: Vec<String>,
}

impl Default for CompletionEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CompletionEngine {
    /// Creates an engine over the built-in [`COMMAND_DICTIONARY`].
    pub fn new() -> Self {
        Self::with_dictionary(COMMAND_DICTIONARY.iter().copied())
    }

    /// Creates an engine over a custom command list, kept in the given order.
    pub fn with_dictionary<I, S>(commands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            dictionary: commands.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the command dictionary.
    pub fn dictionary(&self) -> &[String] {
        &self.dictionary
    }

    /// Suggests completions for `word`.
    ///
    /// Relative paths are listed against `cwd`. An empty word yields nothing.
    pub fn suggest(&self, word: &str, cwd: &Path) -> Vec<Suggestion> {
        if word.is_empty() {
            return Vec::new();
        }

        let mut out = if is_path_word(word) {
            self.complete_path(word, cwd)
        } else {
            self.complete_command(word)
        };
        out.truncate(MAX_SUGGESTIONS);

        trace!(word, count = out.len(), "suggestions computed");
        out
    }

    fn complete_command(&self, word: &str) -> Vec<Suggestion> {
        let mut seen = HashSet::new();
        self.dictionary
            .iter()
            .filter(|cmd| starts_with_ignore_case(cmd, word))
            .filter(|cmd| seen.insert(cmd.to_ascii_lowercase()))
            .take(MAX_SUGGESTIONS)
            .map(|cmd| Suggestion::new(cmd.as_str(), SuggestionKind::Command))
            .collect()
    }

    fn complete_path(&self, word: &str, cwd: &Path) -> Vec<Suggestion> {
        let (dir_part, partial) = split_path_word(&normalize_separators(word));

        let Some(listing_dir) = resolve_listing_dir(&dir_part, cwd) else {
            return Vec::new();
        };
        let entries = match fs::read_dir(&listing_dir) {
            Ok(entries) => entries,
            Err(e) => {
                trace!(dir = %listing_dir.display(), error = %e, "path completion skipped");
                return Vec::new();
            }
        };

        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for entry in entries.flatten() {
            if out.len() >= MAX_PATH_MATCHES {
                break;
            }
            let name = entry.file_name();
            let name = name.to_string_lossy();
            if name == "." || name == ".." || !starts_with_ignore_case(&name, &partial) {
                continue;
            }
            // the prompt could not hold it
            if !name.chars().all(LineBuffer::accepts) {
                trace!(name = %name, "path completion skipped untypeable name");
                continue;
            }

            // follows symlinks so a link to a directory completes like one
            let is_dir = entry.path().is_dir();
            let mut text = format!("{dir_part}{name}");
            let kind = if is_dir {
                text.push(MAIN_SEPARATOR);
                SuggestionKind::Directory
            } else {
                SuggestionKind::File
            };

            if seen.insert(text.to_lowercase()) {
                out.push(Suggestion::new(text, kind));
            }
        }
        out
    }
}

fn starts_with_ignore_case(candidate: &str, prefix: &str) -> bool {
    candidate.len() >= prefix.len()
        && candidate
            .as_bytes()
            .iter()
            .zip(prefix.as_bytes())
            .all(|(a, b)| a.eq_ignore_ascii_case(b))
}

/// Splits a normalized path word into the directory as typed (with its
/// trailing separator) and the partial name after it.
///
/// `C:` becomes `C:\` with an empty partial; `C:Us` splits at the colon.
fn split_path_word(word: &str) -> (String, String) {
    if let Some(idx) = word.rfind(is_separator) {
        return (word[..=idx].to_string(), word[idx + 1..].to_string());
    }
    if word.ends_with(':') {
        return (format!("{word}{MAIN_SEPARATOR}"), String::new());
    }
    match word.rfind(':') {
        Some(idx) => (word[..=idx].to_string(), word[idx + 1..].to_string()),
        None => (String::new(), word.to_string()),
    }
}

fn resolve_listing_dir(dir_part: &str, cwd: &Path) -> Option<PathBuf> {
    if dir_part.is_empty() {
        return Some(cwd.to_path_buf());
    }
    let dir = expand_home_path(Path::new(dir_part)).ok()?;
    if dir.is_absolute() || dir.has_root() {
        Some(dir)
    } else {
        Some(cwd.join(dir))
    }
}
