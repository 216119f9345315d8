//! Common utilities shared across Glaze crates.

pub mod cwd_guard;
pub mod dirs;
pub mod identity;
pub mod path_utils;

pub use cwd_guard::CwdGuard;
pub use dirs::{APP_NAME, AppDirs};
pub use identity::{host_name, prompt_prefix, user_name};
pub use path_utils::{
    PathError, PathResult, abbreviate_home, expand_home_path, is_separator, normalize_separators,
    strip_matching_quotes,
};
