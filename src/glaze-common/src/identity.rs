//! User and host identity for the prompt echo.

use std::path::Path;

use crate::path_utils::abbreviate_home;

/// Login name of the current user, from the environment.
pub fn user_name() -> String {
    ["USER", "USERNAME", "LOGNAME"]
        .iter()
        .find_map(|var| std::env::var(var).ok().filter(|v| !v.is_empty()))
        .unwrap_or_else(|| "user".to_string())
}

/// Host name of this machine.
pub fn host_name() -> String {
    hostname::get()
        .ok()
        .and_then(|h| h.into_string().ok())
        .filter(|h| !h.is_empty())
        .unwrap_or_else(|| "localhost".to_string())
}

/// Builds the `user@host:dir$ ` prefix echoed before every submitted command.
pub fn prompt_prefix(user: &str, host: &str, cwd: &Path) -> String {
    format!("{}@{}:{}$ ", user, host, abbreviate_home(cwd))
}
