// src/ingest/feeds.rs
use std::time::Duration;

use crate::config::FeedSource;
use crate::error::Result;
use crate::ingest::collect_from;
use crate::ingest::providers::rss::RssFeedProvider;
use crate::ingest::types::{CollectorReport, SourceProvider};

pub const COLLECTOR_NAME: &str = "rss";
pub const FETCH_TIMEOUT_SECS: u64 = 10;
pub const USER_AGENT: &str = "Mozilla/5.0";

/// Feed collector: one shared HTTP client, feeds fetched in configured order.
#[derive(Clone)]
pub struct FeedCollector {
    client: reqwest::Client,
}

impl FeedCollector {
    pub fn new() -> Result<Self> {
        Self::with_timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }

    pub async fn collect(&self, feeds: &[FeedSource]) -> CollectorReport {
        if !feeds.is_empty() {
            tracing::info!(feeds = feeds.len(), "collecting rss feeds");
        }
        let providers: Vec<Box<dyn SourceProvider>> = feeds
            .iter()
            .map(|f| {
                Box::new(RssFeedProvider::new(f.clone(), self.client.clone()))
                    as Box<dyn SourceProvider>
            })
            .collect();
        collect_from(COLLECTOR_NAME, &providers).await
    }
}
