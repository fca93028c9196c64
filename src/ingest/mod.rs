// src/ingest/mod.rs
pub mod feeds;
pub mod providers;
pub mod social;
pub mod types;

use crate::ingest::types::{
    CollectorReport, CollectorStatus, SourceOutcome, SourceProvider, SourceReport,
};

/// Pull every provider in order, one at a time. A failing provider is logged and recorded
/// as skipped; it never stops the ones after it.
pub async fn collect_from(
    collector: &'static str,
    providers: &[Box<dyn SourceProvider>],
) -> CollectorReport {
    if providers.is_empty() {
        return CollectorReport::idle(collector);
    }

    let mut sources = Vec::with_capacity(providers.len());
    for p in providers {
        let outcome = match p.fetch_latest().await {
            Ok(items) => {
                tracing::info!(collector, source = p.name(), items = items.len(), "source collected");
                SourceOutcome::Collected(items)
            }
            Err(e) => {
                let reason = format!("{e:#}");
                tracing::warn!(collector, source = p.name(), error = %reason, "source skipped");
                SourceOutcome::Skipped { reason }
            }
        };
        sources.push(SourceReport {
            source: p.name().to_string(),
            outcome,
        });
    }

    CollectorReport {
        name: collector,
        status: CollectorStatus::Ran,
        sources,
    }
}
