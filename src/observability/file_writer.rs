//! Size-rotated append-only file.
//!
//! Lines are appended to `path`. Before a write that would push the file past
//! its size limit, the file is renamed to `path.1`, existing backups shift up
//! by one (`.1` → `.2`, ...), and the oldest beyond the retention count is
//! deleted.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Default size limit of the live file.
pub const DEFAULT_MAX_BYTES: u64 = 5 * 1024 * 1024;

/// Default number of rotated backups kept.
pub const DEFAULT_BACKUPS: usize = 2;

pub struct RotatingFile {
    path: PathBuf,
    max_bytes: u64,
    backups: usize,
    file: Mutex<Option<File>>,
}

impl RotatingFile {
    #[must_use]
    pub const fn new(path: PathBuf, max_bytes: u64, backups: usize) -> Self {
        Self {
            path,
            max_bytes,
            backups,
            file: Mutex::new(None),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn backup_path(&self, index: usize) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(format!(".{index}"));
        PathBuf::from(name)
    }

    /// Appends `line` and a newline, rotating first if needed.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from opening, renaming, or writing.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut file = self
            .file
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "trace file lock poisoned"))?;

        let incoming = line.len() as u64 + 1;
        let current = fs::metadata(&self.path).map_or(0, |m| m.len());
        if current > 0 && current + incoming > self.max_bytes {
            *file = None;
            self.rotate()?;
        }

        if file.is_none() {
            *file = Some(OpenOptions::new().create(true).append(true).open(&self.path)?);
        }
        let Some(handle) = file.as_mut() else {
            return Err(io::Error::new(io::ErrorKind::NotFound, "trace file unavailable"));
        };

        writeln!(handle, "{line}")?;
        handle.flush()
    }

    fn rotate(&self) -> io::Result<()> {
        if self.backups == 0 {
            return fs::remove_file(&self.path);
        }

        let oldest = self.backup_path(self.backups);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }
        for index in (1..self.backups).rev() {
            let from = self.backup_path(index);
            if from.exists() {
                fs::rename(&from, self.backup_path(index + 1))?;
            }
        }
        fs::rename(&self.path, self.backup_path(1))
    }
}

impl std::fmt::Debug for RotatingFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingFile")
            .field("path", &self.path)
            .field("max_bytes", &self.max_bytes)
            .field("backups", &self.backups)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(path: &Path) -> String {
        fs::read_to_string(path).unwrap_or_default()
    }

    #[test]
    fn appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let writer = RotatingFile::new(dir.path().join("t.json"), 1024, 2);

        writer.write_line("one").unwrap();
        writer.write_line("two").unwrap();

        assert_eq!(read(writer.path()), "one\ntwo\n");
    }

    #[test]
    fn rotates_and_keeps_limited_backups() {
        let dir = tempfile::tempdir().unwrap();
        let writer = RotatingFile::new(dir.path().join("t.json"), 8, 2);

        for line in ["aaaa", "bbbb", "cccc", "dddd"] {
            writer.write_line(line).unwrap();
        }

        assert_eq!(read(writer.path()), "dddd\n");
        assert_eq!(read(&writer.backup_path(1)), "cccc\n");
        assert_eq!(read(&writer.backup_path(2)), "bbbb\n");
        assert!(!writer.backup_path(3).exists());
    }

    #[test]
    fn oversized_line_still_written() {
        let dir = tempfile::tempdir().unwrap();
        let writer = RotatingFile::new(dir.path().join("t.json"), 4, 1);

        writer.write_line("longer than the limit").unwrap();

        assert_eq!(read(writer.path()), "longer than the limit\n");
    }
}
