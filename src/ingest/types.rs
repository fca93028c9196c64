// src/ingest/types.rs
use anyhow::Result;

/// The record every collector produces and the note writer consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsItem {
    pub url: String,                // dedup identity, never empty
    pub text: String,               // post body or headline
    pub source: String,             // account handle or feed name
    pub category: Option<String>,   // feeds only
    pub created_at: Option<String>, // social posts only
}

impl NewsItem {
    /// Name shown next to the link: source, then category, then "Unknown".
    pub fn attribution(&self) -> &str {
        if !self.source.trim().is_empty() {
            return &self.source;
        }
        match self.category.as_deref() {
            Some(c) if !c.trim().is_empty() => c,
            _ => "Unknown",
        }
    }
}

/// One source: a single account or a single feed.
#[async_trait::async_trait]
pub trait SourceProvider: Send + Sync {
    async fn fetch_latest(&self) -> Result<Vec<NewsItem>>;
    fn name(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceOutcome {
    Collected(Vec<NewsItem>),
    Skipped { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceReport {
    pub source: String,
    pub outcome: SourceOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectorStatus {
    /// Sources were configured and each one was attempted.
    Ran,
    /// Nothing configured for this collector.
    Idle,
    /// The backing capability is missing; no source was attempted.
    Disabled { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectorReport {
    pub name: &'static str,
    pub status: CollectorStatus,
    pub sources: Vec<SourceReport>,
}

impl CollectorReport {
    pub fn idle(name: &'static str) -> Self {
        Self {
            name,
            status: CollectorStatus::Idle,
            sources: Vec::new(),
        }
    }

    pub fn disabled(name: &'static str, reason: impl Into<String>) -> Self {
        Self {
            name,
            status: CollectorStatus::Disabled {
                reason: reason.into(),
            },
            sources: Vec::new(),
        }
    }

    pub fn item_count(&self) -> usize {
        self.sources
            .iter()
            .map(|s| match &s.outcome {
                SourceOutcome::Collected(v) => v.len(),
                SourceOutcome::Skipped { .. } => 0,
            })
            .sum()
    }

    pub fn skipped(&self) -> impl Iterator<Item = (&str, &str)> {
        self.sources.iter().filter_map(|s| match &s.outcome {
            SourceOutcome::Skipped { reason } => Some((s.source.as_str(), reason.as_str())),
            SourceOutcome::Collected(_) => None,
        })
    }

    /// Items in source order, then item order.
    pub fn items(&self) -> Vec<NewsItem> {
        self.sources
            .iter()
            .flat_map(|s| match &s.outcome {
                SourceOutcome::Collected(v) => v.as_slice(),
                SourceOutcome::Skipped { .. } => &[],
            })
            .cloned()
            .collect()
    }
}
