// src/ingest/providers/twitter.rs
//! X (Twitter) API v2 client behind [`SocialClient`].
//!
//! Two calls per account: username lookup, then the user's timeline. Bearer auth only.
//! No explicit timeout and no retries; a failing account is skipped by the collector.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::ingest::social::{
    SocialCapability, SocialClient, SocialPost, SocialUser, POSTS_PER_ACCOUNT,
};

pub const ENV_BEARER_TOKEN: &str = "TWITTER_BEARER_TOKEN";
pub const ENV_API_BASE: &str = "TWITTER_API_BASE";
pub const DEFAULT_API_BASE: &str = "https://api.twitter.com";

#[derive(Debug, Deserialize)]
struct UserLookup {
    #[serde(default)]
    data: Option<User>,
}

#[derive(Debug, Deserialize)]
struct User {
    id: String,
    username: String,
}

#[derive(Debug, Deserialize)]
struct Timeline {
    #[serde(default)]
    data: Option<Vec<Tweet>>,
}

#[derive(Debug, Deserialize)]
struct Tweet {
    id: String,
    text: String,
    #[serde(default)]
    created_at: Option<String>,
}

#[derive(Clone)]
pub struct TwitterClient {
    base_url: String,
    bearer: String,
    client: Client,
}

impl TwitterClient {
    pub fn new(bearer_token: String) -> Self {
        Self::with_base_url(bearer_token, DEFAULT_API_BASE)
    }

    /// Point at another host (tests, proxies).
    pub fn with_base_url(bearer_token: String, base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            bearer: bearer_token,
            client: Client::new(),
        }
    }

    /// `None` when no bearer token is configured.
    pub fn from_env() -> Option<Self> {
        let token = std::env::var(ENV_BEARER_TOKEN)
            .ok()
            .filter(|t| !t.trim().is_empty())?;
        let base = std::env::var(ENV_API_BASE).unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
        Some(Self::with_base_url(token, &base))
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let url = format!("{}/{}", self.base_url, path);
        self.client
            .get(&url)
            .bearer_auth(&self.bearer)
            .query(query)
            .send()
            .await
            .with_context(|| format!("x api get {path}"))?
            .error_for_status()
            .context("x api non-2xx")?
            .json::<T>()
            .await
            .with_context(|| format!("x api decode {path}"))
    }
}

#[async_trait]
impl SocialClient for TwitterClient {
    async fn resolve_user(&self, handle: &str) -> Result<Option<SocialUser>> {
        // Unknown users come back as 200 with an `errors` array and no `data`.
        let resp: UserLookup = self
            .get_json(&format!("2/users/by/username/{handle}"), &[])
            .await?;
        Ok(resp.data.map(|u| SocialUser {
            id: u.id,
            handle: u.username,
        }))
    }

    async fn recent_posts(&self, user: &SocialUser) -> Result<Vec<SocialPost>> {
        let query = [
            ("max_results", POSTS_PER_ACCOUNT.to_string()),
            ("tweet.fields", "created_at".to_string()),
        ];
        let resp: Timeline = self
            .get_json(&format!("2/users/{}/tweets", user.id), &query)
            .await?;
        tracing::debug!(user = %user.handle, posts = resp.data.as_ref().map_or(0, Vec::len), "x timeline");
        Ok(resp
            .data
            .unwrap_or_default()
            .into_iter()
            .map(|t| SocialPost {
                id: t.id,
                text: t.text,
                created_at: t.created_at,
            })
            .collect())
    }
}

/// Social capability for this process: the X client when a token is configured.
pub fn capability_from_env() -> SocialCapability {
    match TwitterClient::from_env() {
        Some(client) => SocialCapability::Available(std::sync::Arc::new(client)),
        None => SocialCapability::unavailable(format!("{ENV_BEARER_TOKEN} not set")),
    }
}
