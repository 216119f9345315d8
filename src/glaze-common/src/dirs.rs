//! Where Glaze keeps its settings and logs.
//!
//! Settings go in the platform config dir (`~/.config/glaze` on Linux,
//! `%APPDATA%\glaze` on Windows) and logs under the cache dir. `GLAZE_HOME`
//! puts both under one root.

use std::path::{Path, PathBuf};

pub const APP_NAME: &str = "glaze";

/// Environment variable that relocates every Glaze directory.
pub const HOME_ENV: &str = "GLAZE_HOME";

/// Settings file written by current versions.
pub const SETTINGS_FILE: &str = "settings.toml";

/// `key=value` settings file written by the first releases.
pub const LEGACY_SETTINGS_FILE: &str = "settings.cfg";

/// Resolved Glaze directories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDirs {
    /// Holds `settings.toml`.
    pub config_dir: PathBuf,
    /// Holds `logs/`.
    pub cache_dir: PathBuf,
}

impl AppDirs {
    /// Platform directories, or `GLAZE_HOME` when set. A relative
    /// `GLAZE_HOME` is taken from the current directory.
    pub fn new() -> Option<Self> {
        if let Ok(home) = std::env::var(HOME_ENV)
            && !home.trim().is_empty()
        {
            let home = PathBuf::from(home);
            let home = if home.is_relative() {
                std::env::current_dir().ok()?.join(home)
            } else {
                home
            };
            return Some(Self::rooted_at(home));
        }

        let config_dir = dirs::config_dir()?.join(APP_NAME);
        let cache_dir = dirs::cache_dir()
            .map(|d| d.join(APP_NAME))
            .unwrap_or_else(|| config_dir.join("cache"));

        Some(Self {
            config_dir,
            cache_dir,
        })
    }

    /// Directories that all live under one root. Used for `--config-dir`.
    pub fn rooted_at(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref().to_path_buf();
        Self {
            cache_dir: root.join("cache"),
            config_dir: root,
        }
    }

    /// Path of the settings file.
    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join(SETTINGS_FILE)
    }

    /// Path of the legacy `key=value` settings file.
    pub fn legacy_settings_file(&self) -> PathBuf {
        self.config_dir.join(LEGACY_SETTINGS_FILE)
    }

    pub fn logs_dir(&self) -> PathBuf {
        self.cache_dir.join("logs")
    }

    /// Creates missing directories, owner-only on unix.
    pub fn ensure_dirs(&self) -> std::io::Result<()> {
        for dir in [&self.config_dir, &self.cache_dir] {
            if !dir.exists() {
                std::fs::create_dir_all(dir)?;
                #[cfg(unix)]
                {
                    use std::os::unix::fs::PermissionsExt;
                    std::fs::set_permissions(dir, std::fs::Permissions::from_mode(0o700))?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_rooted_layout() {
        let dirs = AppDirs::rooted_at("/tmp/glaze-root");
        assert_eq!(dirs.config_dir, PathBuf::from("/tmp/glaze-root"));
        assert!(dirs.settings_file().ends_with("settings.toml"));
        assert!(dirs.legacy_settings_file().ends_with("settings.cfg"));
        assert!(dirs.logs_dir().starts_with("/tmp/glaze-root/cache"));
    }

    #[test]
    #[serial]
    fn test_env_override() {
        let test_path = std::env::temp_dir().join("test-glaze");
        // SAFETY: serialized with the other env-mutating tests in this crate
        unsafe {
            std::env::set_var(HOME_ENV, &test_path);
        }
        let dirs = AppDirs::new().unwrap();
        assert_eq!(dirs.config_dir, test_path);
        unsafe {
            std::env::remove_var(HOME_ENV);
        }
    }

    #[test]
    fn test_ensure_dirs_creates_tree() {
        let tmp = tempfile::tempdir().unwrap();
        let dirs = AppDirs::rooted_at(tmp.path().join("nested"));
        dirs.ensure_dirs().unwrap();
        assert!(dirs.config_dir.is_dir());
        assert!(dirs.cache_dir.is_dir());
    }
}
