//! Autocomplete for the Glaze input line.
//!
//! The word under the caret is either completed as a filesystem path (when
//! it contains a separator or a drive colon) or against a static dictionary
//! of command names. [`SuggestionState`] keeps the current candidates and
//! the selection the renderer highlights.

mod dictionary;
mod engine;
mod state;

pub use dictionary::COMMAND_DICTIONARY;
pub use engine::{
    CompletionEngine, MAX_PATH_MATCHES, MAX_SUGGESTIONS, Suggestion, SuggestionKind,
    is_path_word,
};
pub use state::SuggestionState;
