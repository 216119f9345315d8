//! Loading, saving and sharing settings.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use glaze_common::AppDirs;
use tracing::{debug, info, warn};

use crate::atomic::atomic_write;
use crate::error::{Result, SettingsError};
use crate::legacy::parse_legacy;
use crate::settings::{Settings, Toggle};

/// Owns the current settings and their file.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    /// `None` keeps everything in memory.
    path: Option<PathBuf>,
    current: Arc<Settings>,
}

impl SettingsStore {
    /// Store that never touches disk.
    pub fn in_memory(settings: Settings) -> Self {
        Self {
            path: None,
            current: Arc::new(settings),
        }
    }

    /// Loads settings for the given app directories.
    pub fn for_dirs(dirs: &AppDirs) -> Result<Self> {
        Self::load(dirs.settings_file(), Some(dirs.legacy_settings_file()))
    }

    /// Loads `path`, importing `legacy_path` if only the legacy file exists.
    ///
    /// Missing files give defaults. An unreadable or malformed settings file
    /// is an error.
    pub fn load(path: impl Into<PathBuf>, legacy_path: Option<PathBuf>) -> Result<Self> {
        let path = path.into();

        let settings = if path.exists() {
            let content =
                fs::read_to_string(&path).map_err(|e| SettingsError::io(&path, e))?;
            toml::from_str(&content).map_err(|source| SettingsError::Parse {
                path: path.clone(),
                source,
            })?
        } else if let Some(legacy) = legacy_path.filter(|p| p.exists()) {
            let content =
                fs::read_to_string(&legacy).map_err(|e| SettingsError::io(&legacy, e))?;
            info!(path = %legacy.display(), "importing legacy settings");
            parse_legacy(&content)
        } else {
            debug!(path = %path.display(), "no settings file, using defaults");
            Settings::default()
        };

        Ok(Self {
            path: Some(path),
            current: Arc::new(settings),
        })
    }

    /// Like [`for_dirs`](Self::for_dirs), falling back to defaults on error.
    ///
    /// The store still points at the settings file so later changes are
    /// saved.
    pub fn load_or_default(dirs: &AppDirs) -> Self {
        match Self::for_dirs(dirs) {
            Ok(store) => store,
            Err(e) => {
                warn!(error = %e, "failed to load settings, using defaults");
                Self {
                    path: Some(dirs.settings_file()),
                    current: Arc::new(Settings::default()),
                }
            }
        }
    }

    /// Current settings.
    pub fn snapshot(&self) -> Arc<Settings> {
        Arc::clone(&self.current)
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Applies `f` to a copy of the settings, saves it, then swaps it in.
    ///
    /// On error the current settings are left unchanged.
    pub fn update<F>(&mut self, f: F) -> Result<Arc<Settings>>
    where
        F: FnOnce(&mut Settings),
    {
        let mut next = (*self.current).clone();
        f(&mut next);

        if let Some(path) = &self.path {
            let body = toml::to_string_pretty(&next)?;
            atomic_write(path, body.as_bytes()).map_err(|e| SettingsError::io(path, e))?;
            debug!(path = %path.display(), "settings saved");
        }

        self.current = Arc::new(next);
        Ok(self.snapshot())
    }

    /// Sets one boolean option and saves.
    pub fn set_toggle(&mut self, toggle: Toggle, enabled: bool) -> Result<Arc<Settings>> {
        self.update(|s| s.set(toggle, enabled))
    }
}
