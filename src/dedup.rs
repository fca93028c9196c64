// src/dedup.rs
use std::collections::HashSet;

use crate::error::Result;
use crate::ingest::types::NewsItem;
use crate::seen::SeenStore;

/// Keep items whose url is not in `seen`, in input order. Each accepted url is added to
/// `seen` and persisted before the next item is looked at, so a url repeated later in the
/// same batch is dropped.
pub fn deduplicate(
    items: Vec<NewsItem>,
    seen: &mut HashSet<String>,
    store: &SeenStore,
) -> Result<Vec<NewsItem>> {
    let mut accepted = Vec::with_capacity(items.len());
    for item in items {
        if seen.contains(&item.url) {
            continue;
        }
        store.mark_seen(&item.url)?;
        seen.insert(item.url.clone());
        accepted.push(item);
    }
    Ok(accepted)
}
