//! Restoring the process working directory.
//!
//! The `cd` built-in moves the whole process so that commands and new
//! windows start where the prompt says. Tests that exercise `cd` hold a
//! [`CwdGuard`] to put the process back afterwards.

use std::env;
use std::io;
use std::path::{Path, PathBuf};

/// Puts the process back in the directory it was in at creation.
#[derive(Debug)]
pub struct CwdGuard {
    saved: PathBuf,
}

impl CwdGuard {
    /// Remembers the current directory.
    pub fn save_current() -> io::Result<Self> {
        Ok(Self {
            saved: env::current_dir()?,
        })
    }

    #[inline]
    pub fn saved(&self) -> &Path {
        &self.saved
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = env::set_current_dir(&self.saved);
    }
}
