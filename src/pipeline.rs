// src/pipeline.rs
//! One collection run: config → seen set → social → feeds → dedup → note.
//! Plus the two read/maintenance commands, `status` and `reset`.

use std::fmt;
use std::path::PathBuf;

use chrono::{Local, NaiveDateTime};
use tracing::info;

use crate::config::{load_sources, AppPaths};
use crate::dedup::deduplicate;
use crate::error::Result;
use crate::ingest::feeds::FeedCollector;
use crate::ingest::social::{collect_social, SocialCapability};
use crate::ingest::types::{CollectorReport, CollectorStatus};
use crate::notes::NoteWriter;
use crate::seen::SeenStore;

#[derive(Debug, Clone)]
pub struct RunSummary {
    pub seen_before: usize,
    pub social: CollectorReport,
    pub feeds: CollectorReport,
    /// Items handed to dedup, social first.
    pub collected: usize,
    pub accepted: usize,
    /// `None` when nothing new was found.
    pub note_path: Option<PathBuf>,
}

pub struct Pipeline {
    paths: AppPaths,
    social: SocialCapability,
    feeds: FeedCollector,
}

impl Pipeline {
    pub fn new(paths: AppPaths, social: SocialCapability) -> Result<Self> {
        Ok(Self::with_feed_collector(paths, social, FeedCollector::new()?))
    }

    pub fn with_feed_collector(
        paths: AppPaths,
        social: SocialCapability,
        feeds: FeedCollector,
    ) -> Self {
        Self {
            paths,
            social,
            feeds,
        }
    }

    pub async fn collect(&self) -> Result<RunSummary> {
        self.collect_at(Local::now().naive_local()).await
    }

    /// Full run with an explicit wall-clock time for the note file and section header.
    pub async fn collect_at(&self, now: NaiveDateTime) -> Result<RunSummary> {
        info!("=== Starting news collection ===");

        let sources = load_sources(&self.paths.sources_file)?;

        let store = SeenStore::new(&self.paths.seen_file);
        let mut seen = store.load();
        let seen_before = seen.len();
        info!(seen = seen_before, "seen urls loaded");

        let social = collect_social(&self.social, &sources.twitter).await;
        log_report(&social);
        let feeds = self.feeds.collect(&sources.rss).await;
        log_report(&feeds);

        let mut items = social.items();
        items.extend(feeds.items());
        let collected = items.len();

        let accepted = deduplicate(items, &mut seen, &store)?;
        info!(collected, new = accepted.len(), "dedup finished");

        let note_path = if accepted.is_empty() {
            info!("no new items to save");
            None
        } else {
            Some(NoteWriter::new(&self.paths.notes_dir).append(&accepted, now)?)
        };

        info!("=== Collection complete ===");
        Ok(RunSummary {
            seen_before,
            social,
            feeds,
            collected,
            accepted: accepted.len(),
            note_path,
        })
    }
}

fn log_report(report: &CollectorReport) {
    match &report.status {
        CollectorStatus::Idle => info!(collector = report.name, "nothing configured"),
        CollectorStatus::Disabled { reason } => {
            info!(collector = report.name, %reason, "collector disabled, contributing no items")
        }
        CollectorStatus::Ran => info!(
            collector = report.name,
            sources = report.sources.len(),
            skipped = report.skipped().count(),
            items = report.item_count(),
            "collector finished"
        ),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusReport {
    pub accounts: usize,
    pub feeds: usize,
    pub seen: usize,
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== AI News Agent Status ===")?;
        writeln!(f, "Twitter accounts: {}", self.accounts)?;
        writeln!(f, "RSS feeds: {}", self.feeds)?;
        write!(f, "URLs seen: {}", self.seen)
    }
}

/// Counts only; no network and no note writes.
pub fn status(paths: &AppPaths) -> Result<StatusReport> {
    let sources = load_sources(&paths.sources_file)?;
    let seen = SeenStore::new(&paths.seen_file).load();
    Ok(StatusReport {
        accounts: sources.twitter.len(),
        feeds: sources.rss.len(),
        seen: seen.len(),
    })
}

/// Forget every seen url.
pub fn reset(paths: &AppPaths) -> Result<()> {
    SeenStore::new(&paths.seen_file).reset()?;
    info!(path = %paths.seen_file.display(), "seen urls cleared");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_display_lists_three_counts() {
        let r = StatusReport {
            accounts: 3,
            feeds: 2,
            seen: 100,
        };
        assert_eq!(
            r.to_string(),
            "=== AI News Agent Status ===\nTwitter accounts: 3\nRSS feeds: 2\nURLs seen: 100"
        );
    }
}
