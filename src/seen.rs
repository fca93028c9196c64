// src/seen.rs
//! Seen-URL store: the persisted set that decides which items count as new.
//!
//! One URL per line, appended as items are accepted. Every `mark_seen` is its own
//! open/append/close cycle, so a crash mid-run leaves the file consistent with what was
//! already accepted.

use std::collections::HashSet;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{CollectError, Result};

#[derive(Debug, Clone)]
pub struct SeenStore {
    path: PathBuf,
}

impl SeenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every non-empty line. An absent or unreadable file yields an empty set.
    pub fn load(&self) -> HashSet<String> {
        match fs::read_to_string(&self.path) {
            Ok(content) => content
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(str::to_string)
                .collect(),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashSet::new(),
            Err(e) => {
                tracing::warn!(error = %e, path = %self.path.display(), "seen store unreadable, treating as empty");
                HashSet::new()
            }
        }
    }

    /// Append one URL. No duplicate check; the caller owns that.
    pub fn mark_seen(&self, url: &str) -> Result<()> {
        self.ensure_parent()?;
        let mut f = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.write_err(e))?;
        writeln!(f, "{url}").map_err(|e| self.write_err(e))?;
        f.flush().map_err(|e| self.write_err(e))
    }

    /// Truncate the store to empty.
    pub fn reset(&self) -> Result<()> {
        self.ensure_parent()?;
        fs::write(&self.path, "").map_err(|e| self.write_err(e))
    }

    fn ensure_parent(&self) -> Result<()> {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => {
                fs::create_dir_all(dir).map_err(|e| self.write_err(e))
            }
            _ => Ok(()),
        }
    }

    fn write_err(&self, source: std::io::Error) -> CollectError {
        CollectError::Write {
            path: self.path.clone(),
            source,
        }
    }
}
