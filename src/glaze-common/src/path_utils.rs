//! Path helpers for the shell front-end.
//!
//! This module provides utilities for:
//! - Expanding the home directory (`~`) in user-typed paths
//! - Abbreviating the home directory when displaying paths
//! - Normalizing mixed `/` and `\` separators to the platform separator
//! - Stripping the quotes users put around paths containing spaces

use std::path::{MAIN_SEPARATOR, Path, PathBuf};

use thiserror::Error;

/// Errors that can occur during path operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PathError {
    /// The home directory could not be determined.
    #[error("could not determine home directory while expanding '{path}'")]
    NoHomeDir { path: String },
}

/// Result type for path operations.
pub type PathResult<T> = Result<T, PathError>;

/// Returns true for either separator a user may type, on any platform.
#[inline]
pub fn is_separator(c: char) -> bool {
    c == '/' || c == '\\'
}

/// Rewrites every `/` and `\` to the platform separator.
///
/// ```
/// # use glaze_common::normalize_separators;
/// let p = normalize_separators("a/b\\c");
/// assert_eq!(p.chars().filter(|c| *c == std::path::MAIN_SEPARATOR).count(), 2);
/// ```
pub fn normalize_separators(path: &str) -> String {
    path.chars()
        .map(|c| if is_separator(c) { MAIN_SEPARATOR } else { c })
        .collect()
}

/// Removes one pair of surrounding double quotes, if present.
pub fn strip_matching_quotes(s: &str) -> &str {
    if s.len() >= 2 && s.starts_with('"') && s.ends_with('"') {
        &s[1..s.len() - 1]
    } else {
        s
    }
}

/// Expands a leading `~` to the home directory.
///
/// Paths like `~user/something` are not supported and returned as-is.
pub fn expand_home_path(path: &Path) -> PathResult<PathBuf> {
    let path_str = path.to_string_lossy();

    if !path_str.starts_with('~') {
        return Ok(path.to_path_buf());
    }

    let rest = &path_str[1..];
    if !rest.is_empty() && !rest.starts_with(is_separator) {
        return Ok(path.to_path_buf());
    }

    let home = dirs::home_dir().ok_or_else(|| PathError::NoHomeDir {
        path: path_str.to_string(),
    })?;

    let rest = rest.trim_start_matches(is_separator);
    if rest.is_empty() {
        Ok(home)
    } else {
        Ok(home.join(rest))
    }
}

/// Replaces a leading home directory with `~` for display.
pub fn abbreviate_home(path: &Path) -> String {
    if let Some(home) = dirs::home_dir()
        && let Ok(rest) = path.strip_prefix(&home)
    {
        if rest.as_os_str().is_empty() {
            return "~".to_string();
        }
        return format!("~{}{}", MAIN_SEPARATOR, rest.display());
    }
    path.display().to_string()
}
