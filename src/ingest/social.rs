// src/ingest/social.rs
//! Social collector: recent posts for each configured account handle.

use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;

use crate::ingest::collect_from;
use crate::ingest::types::{CollectorReport, NewsItem, SourceProvider};

pub const COLLECTOR_NAME: &str = "social";
pub const MAX_ACCOUNTS: usize = 50;
pub const POSTS_PER_ACCOUNT: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialUser {
    pub id: String,
    pub handle: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialPost {
    pub id: String,
    pub text: String,
    pub created_at: Option<String>,
}

/// Read access to a social network.
#[async_trait]
pub trait SocialClient: Send + Sync {
    /// `Ok(None)` when the handle does not exist.
    async fn resolve_user(&self, handle: &str) -> Result<Option<SocialUser>>;
    /// Most recent posts first.
    async fn recent_posts(&self, user: &SocialUser) -> Result<Vec<SocialPost>>;
}

/// Whether a social client is available for this run.
#[derive(Clone)]
pub enum SocialCapability {
    Available(Arc<dyn SocialClient>),
    Unavailable { reason: String },
}

impl SocialCapability {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }
}

impl std::fmt::Debug for SocialCapability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Available(_) => f.write_str("Available"),
            Self::Unavailable { reason } => write!(f, "Unavailable({reason})"),
        }
    }
}

/// Canonical post URL; this string is the dedup identity of a post.
pub fn post_url(handle: &str, post_id: &str) -> String {
    format!("https://twitter.com/{handle}/status/{post_id}")
}

fn clean_handle(raw: &str) -> String {
    raw.trim().trim_start_matches('@').to_string()
}

/// One account as a provider.
pub struct SocialAccountProvider {
    handle: String,
    client: Arc<dyn SocialClient>,
}

impl SocialAccountProvider {
    pub fn new(handle: &str, client: Arc<dyn SocialClient>) -> Self {
        Self {
            handle: clean_handle(handle),
            client,
        }
    }
}

#[async_trait]
impl SourceProvider for SocialAccountProvider {
    async fn fetch_latest(&self) -> Result<Vec<NewsItem>> {
        let user = self
            .client
            .resolve_user(&self.handle)
            .await
            .with_context(|| format!("resolving @{}", self.handle))?
            .with_context(|| format!("user not found: @{}", self.handle))?;

        let posts = self
            .client
            .recent_posts(&user)
            .await
            .with_context(|| format!("fetching posts for @{}", self.handle))?;

        Ok(posts
            .into_iter()
            .take(POSTS_PER_ACCOUNT)
            .map(|p| NewsItem {
                url: post_url(&self.handle, &p.id),
                text: html_escape::decode_html_entities(&p.text).to_string(),
                source: self.handle.clone(),
                category: None,
                created_at: p.created_at,
            })
            .collect())
    }

    fn name(&self) -> &str {
        &self.handle
    }
}

/// Collect from the first `MAX_ACCOUNTS` handles, in order.
pub async fn collect_social(capability: &SocialCapability, handles: &[String]) -> CollectorReport {
    if handles.is_empty() {
        return CollectorReport::idle(COLLECTOR_NAME);
    }
    let client = match capability {
        SocialCapability::Available(client) => client,
        SocialCapability::Unavailable { reason } => {
            tracing::warn!(collector = COLLECTOR_NAME, %reason, "collector disabled");
            return CollectorReport::disabled(COLLECTOR_NAME, reason.clone());
        }
    };

    let accounts = &handles[..handles.len().min(MAX_ACCOUNTS)];
    tracing::info!(accounts = accounts.len(), "collecting social accounts");

    let providers: Vec<Box<dyn SourceProvider>> = accounts
        .iter()
        .map(|h| Box::new(SocialAccountProvider::new(h, Arc::clone(client))) as Box<dyn SourceProvider>)
        .collect();
    collect_from(COLLECTOR_NAME, &providers).await
}
