// src/logging.rs
//! Tracing setup for the binary: one line per event, written both to the collection log
//! file and to stdout. The log file is never rotated.

use std::path::Path;

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const DEFAULT_FILTER: &str = "info";

/// Install the global subscriber. Keep the returned guard alive until exit, otherwise
/// buffered file records are lost.
pub fn init_logging(log_file: &Path) -> anyhow::Result<WorkerGuard> {
    let dir = match log_file.parent() {
        Some(d) if !d.as_os_str().is_empty() => d.to_path_buf(),
        _ => std::path::PathBuf::from("."),
    };
    let file_name = log_file
        .file_name()
        .context("log file path has no file name")?;
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create log directory: {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(&dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .with(fmt::layer().with_writer(std::io::stdout).with_target(false))
        .try_init()
        .map_err(|e| anyhow::anyhow!("tracing setup failed: {e}"))?;

    Ok(guard)
}

/// Record an error that ends the run. Called while the file guard is still alive so the
/// line reaches the collection log, not only stderr.
pub fn report_fatal(err: &anyhow::Error) {
    tracing::error!(error = %format!("{err:#}"), "run aborted");
}
