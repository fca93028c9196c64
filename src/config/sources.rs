// src/config/sources.rs
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{CollectError, Result};

fn default_category() -> String {
    "tech".to_string()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Social account handles, in collection order.
    #[serde(default)]
    pub twitter: Vec<String>,
    #[serde(default)]
    pub rss: Vec<FeedSource>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedSource {
    pub name: String,
    pub url: String,
    #[serde(default = "default_category")]
    pub category: String,
}

/// Load sources from an explicit path. `.toml` selects TOML, anything else is read as JSON.
pub fn load_sources(path: &Path) -> Result<SourceConfig> {
    if !path.exists() {
        return Err(CollectError::ConfigMissing {
            path: path.to_path_buf(),
        });
    }
    let content = fs::read_to_string(path).map_err(|source| CollectError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();

    parse_sources(&content, ext.as_str()).map_err(|message| CollectError::ConfigParse {
        path: path.to_path_buf(),
        message,
    })
}

fn parse_sources(s: &str, hint_ext: &str) -> std::result::Result<SourceConfig, String> {
    if hint_ext == "toml" {
        toml::from_str(s).map_err(|e| e.to_string())
    } else {
        serde_json::from_str(s).map_err(|e| e.to_string())
    }
}
