pub mod rss;
pub mod twitter;
