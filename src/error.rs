// src/error.rs
use std::path::PathBuf;

/// Failures that abort a run. Per-source problems never end up here; collectors turn
/// them into `SourceOutcome::Skipped` instead.
#[derive(Debug, thiserror::Error)]
pub enum CollectError {
    #[error("config file not found: {}", path.display())]
    ConfigMissing { path: PathBuf },

    #[error("reading config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parsing config {}: {message}", path.display())]
    ConfigParse { path: PathBuf, message: String },

    #[error("writing {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("building http client: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, CollectError>;
