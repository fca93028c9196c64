// src/config/paths.rs
use std::path::{Path, PathBuf};

pub const ENV_AGENT_DIR: &str = "NEWS_AGENT_DIR";
pub const ENV_NOTES_DIR: &str = "NEWS_NOTES_DIR";
pub const ENV_SOURCES_PATH: &str = "NEWS_SOURCES_PATH";

pub const DEFAULT_SOURCES_FILE: &str = "config/sources.json";
pub const DEFAULT_SEEN_FILE: &str = "logs/seen_urls.txt";
pub const DEFAULT_LOG_FILE: &str = "logs/collection.log";
pub const DEFAULT_NOTES_DIR: &str = "notes";

/// Every filesystem location a run touches. Components receive the paths they need at
/// construction so tests can point the whole pipeline at a temp directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub sources_file: PathBuf,
    pub seen_file: PathBuf,
    pub log_file: PathBuf,
    pub notes_dir: PathBuf,
}

impl AppPaths {
    /// Standard layout below one agent directory.
    pub fn under(agent_dir: impl AsRef<Path>) -> Self {
        let dir = agent_dir.as_ref();
        Self {
            sources_file: dir.join(DEFAULT_SOURCES_FILE),
            seen_file: dir.join(DEFAULT_SEEN_FILE),
            log_file: dir.join(DEFAULT_LOG_FILE),
            notes_dir: dir.join(DEFAULT_NOTES_DIR),
        }
    }

    pub fn with_sources_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.sources_file = path.into();
        self
    }

    pub fn with_notes_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.notes_dir = path.into();
        self
    }
}
