// src/ingest/providers/rss.rs
use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use quick_xml::events::Event;
use quick_xml::Reader;

use crate::config::FeedSource;
use crate::ingest::types::{NewsItem, SourceProvider};

/// One configured feed, fetched over HTTP.
pub struct RssFeedProvider {
    feed: FeedSource,
    client: reqwest::Client,
}

impl RssFeedProvider {
    pub fn new(feed: FeedSource, client: reqwest::Client) -> Self {
        Self { feed, client }
    }
}

#[async_trait]
impl SourceProvider for RssFeedProvider {
    async fn fetch_latest(&self) -> Result<Vec<NewsItem>> {
        let body = self
            .client
            .get(&self.feed.url)
            .send()
            .await
            .with_context(|| format!("rss http get {}", self.feed.url))?
            .error_for_status()
            .context("rss non-2xx")?
            .text()
            .await
            .context("rss http .text()")?;
        parse_feed_items(&body, &self.feed)
    }

    fn name(&self) -> &str {
        &self.feed.name
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Field {
    Title,
    Link,
}

impl Field {
    fn from_qname(name: &[u8]) -> Option<Self> {
        match name {
            b"title" => Some(Self::Title),
            b"link" => Some(Self::Link),
            _ => None,
        }
    }
}

#[derive(Default)]
struct PendingItem {
    depth: usize,
    title: Option<String>,
    link: Option<String>,
}

impl PendingItem {
    fn slot(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::Title => &mut self.title,
            Field::Link => &mut self.link,
        }
    }
}

/// Parse feed XML into items attributed to `feed`.
///
/// Every `<item>` at any depth counts (RSS 2.0 nests them in `<channel>`, RDF puts them
/// beside it). Inside an item only the first direct, unprefixed `<title>` and `<link>`
/// are read, so `<atom:link>` or `<media:title>` never shadow them. Nested markup in a
/// title contributes its text. Items without a link are dropped: no link, no identity.
pub fn parse_feed_items(xml: &str, feed: &FeedSource) -> Result<Vec<NewsItem>> {
    let mut reader = Reader::from_str(xml);
    let mut out = Vec::new();

    let mut depth = 0usize;
    let mut saw_root = false;
    let mut item: Option<PendingItem> = None;
    // Field being captured, with the depth of its element.
    let mut capture: Option<(Field, usize, String)> = None;

    loop {
        match reader.read_event().context("parsing rss xml")? {
            Event::Start(e) => {
                depth += 1;
                saw_root = true;
                let name = e.name();
                match item.as_mut() {
                    None if is_item(name.as_ref()) => {
                        item = Some(PendingItem {
                            depth,
                            ..Default::default()
                        });
                    }
                    Some(it) if capture.is_none() && depth == it.depth + 1 => {
                        if let Some(field) = Field::from_qname(name.as_ref()) {
                            if it.slot(field).is_none() {
                                capture = Some((field, depth, String::new()));
                            }
                        }
                    }
                    _ => {}
                }
            }
            Event::Empty(e) => {
                saw_root = true;
                let name = e.name();
                match item.as_mut() {
                    // `<item/>` has no link, nothing to keep.
                    None => {}
                    Some(it) if capture.is_none() && depth == it.depth => {
                        if let Some(field) = Field::from_qname(name.as_ref()) {
                            it.slot(field).get_or_insert_with(String::new);
                        }
                    }
                    _ => {}
                }
            }
            Event::Text(t) => {
                if let Some((_, _, buf)) = capture.as_mut() {
                    let raw = std::str::from_utf8(&t).context("rss text is not utf-8")?;
                    buf.push_str(&html_escape::decode_html_entities(raw));
                }
            }
            Event::CData(c) => {
                if let Some((_, _, buf)) = capture.as_mut() {
                    buf.push_str(&String::from_utf8_lossy(&c));
                }
            }
            Event::End(_) => {
                if let Some((field, d, buf)) = capture.take() {
                    if d == depth {
                        if let Some(it) = item.as_mut() {
                            *it.slot(field) = Some(collapse_ws(&buf));
                        }
                    } else {
                        capture = Some((field, d, buf));
                    }
                }
                if item.as_ref().is_some_and(|it| it.depth == depth) {
                    if let Some(done) = item.take() {
                        push_item(&mut out, done, feed);
                    }
                }
                depth = depth.saturating_sub(1);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !saw_root {
        bail!("rss body has no xml elements");
    }
    if depth != 0 {
        bail!("rss xml ended with {depth} unclosed element(s)");
    }
    Ok(out)
}

fn is_item(qname: &[u8]) -> bool {
    qname == b"item"
}

// Entities like `&nbsp;` and inline markup leave odd spacing behind.
fn collapse_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn push_item(out: &mut Vec<NewsItem>, it: PendingItem, feed: &FeedSource) {
    let link = it.link.unwrap_or_default();
    if link.is_empty() {
        return;
    }
    out.push(NewsItem {
        url: link,
        text: it.title.unwrap_or_default(),
        source: feed.name.clone(),
        category: Some(feed.category.clone()),
        created_at: None,
    });
}
