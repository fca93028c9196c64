// src/lib.rs
// Public library surface for the binary and integration tests.

pub mod config;
pub mod dedup;
pub mod error;
pub mod ingest;
pub mod logging;
pub mod notes;
pub mod pipeline;
pub mod seen;

// ---- Re-exports for stable public API ----
pub use crate::config::{AppPaths, FeedSource, SourceConfig};
pub use crate::error::{CollectError, Result};
pub use crate::ingest::social::SocialCapability;
pub use crate::ingest::types::NewsItem;
pub use crate::pipeline::{Pipeline, RunSummary, StatusReport};
pub use crate::seen::SeenStore;
