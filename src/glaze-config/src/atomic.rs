//! Crash-safe file replacement.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::debug;

const TEMP_SUFFIX: &str = ".tmp";

/// Writes `data` to a sibling temp file and renames it over `path`.
///
/// Readers see either the old file or the new one, never a partial write.
pub fn atomic_write(path: impl AsRef<Path>, data: &[u8]) -> io::Result<()> {
    let path = path.as_ref();
    let mut temp_name = path.file_name().unwrap_or_default().to_os_string();
    temp_name.push(TEMP_SUFFIX);
    let temp_path = path.with_file_name(temp_name);

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let result = (|| {
        let mut writer = BufWriter::new(File::create(&temp_path)?);
        writer.write_all(data)?;
        writer.flush()?;
        writer.get_ref().sync_all()?;
        fs::rename(&temp_path, path)
    })();

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result?;

    debug!(path = %path.display(), "atomic write completed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_atomic_write_creates_and_replaces() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("nested").join("settings.toml");

        atomic_write(&path, b"first").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "first");

        atomic_write(&path, b"second").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
        assert!(!tmp.path().join("nested").join("settings.toml.tmp").exists());
    }

    #[test]
    fn test_atomic_write_failure_leaves_original() {
        let tmp = tempfile::tempdir().unwrap();
        // a directory where the file should be makes the rename fail
        let path = tmp.path().join("taken");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("inner"), "x").unwrap();

        assert!(atomic_write(&path, b"data").is_err());
        assert!(path.is_dir());
        assert!(!tmp.path().join("taken.tmp").exists());
    }
}
