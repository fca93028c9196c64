pub mod paths;
pub mod sources;

pub use paths::AppPaths;
pub use sources::{load_sources, FeedSource, SourceConfig};
