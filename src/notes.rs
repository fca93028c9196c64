// src/notes.rs
//! Daily markdown note: `<notes_dir>/<YYYY>/<YYYY-MM-DD>.md`.
//!
//! The first write of the day adds front matter and a title. Every write appends a
//! `## Collected: HH:MM` section, so two runs in the same minute produce two sections.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use chrono::NaiveDateTime;
use once_cell::sync::OnceCell;
use regex::Regex;

use crate::error::{CollectError, Result};
use crate::ingest::types::NewsItem;

pub const MAX_TEXT_CHARS: usize = 200;
pub const NOTE_TAGS: &str = "[ai-news, daily]";

#[derive(Debug, Clone)]
pub struct NoteWriter {
    notes_dir: PathBuf,
}

impl NoteWriter {
    pub fn new(notes_dir: impl Into<PathBuf>) -> Self {
        Self {
            notes_dir: notes_dir.into(),
        }
    }

    pub fn note_path(&self, now: NaiveDateTime) -> PathBuf {
        self.notes_dir
            .join(now.format("%Y").to_string())
            .join(format!("{}.md", now.format("%Y-%m-%d")))
    }

    /// Append one section for `items` and return the file written. Callers skip this for
    /// an empty batch.
    pub fn append(&self, items: &[NewsItem], now: NaiveDateTime) -> Result<PathBuf> {
        let path = self.note_path(now);
        let write_err = |source| CollectError::Write {
            path: path.clone(),
            source,
        };
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(write_err)?;
        }

        let mut out = String::new();
        if !path.exists() {
            out.push_str(&render_header(now));
        }
        out.push_str(&render_section(items, now));

        let mut f = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(write_err)?;
        f.write_all(out.as_bytes()).map_err(write_err)?;
        f.flush().map_err(write_err)?;

        tracing::info!(path = %path.display(), items = items.len(), "note updated");
        Ok(path)
    }
}

fn render_header(now: NaiveDateTime) -> String {
    let today = now.format("%Y-%m-%d");
    format!("---\ndate: {today}\ntags: {NOTE_TAGS}\n---\n\n# AI News Briefing - {today}\n\n")
}

fn render_section(items: &[NewsItem], now: NaiveDateTime) -> String {
    let mut s = format!("## Collected: {}\n", now.format("%H:%M"));
    for item in items {
        s.push_str(&format!(
            "- [{}]({}) [{}]\n",
            display_text(&item.text),
            item.url,
            item.attribution()
        ));
    }
    s.push('\n');
    s
}

/// Single-line text capped at `MAX_TEXT_CHARS` characters.
pub fn display_text(s: &str) -> String {
    static RE_WS: OnceCell<Regex> = OnceCell::new();
    let re_ws = RE_WS.get_or_init(|| Regex::new(r"\s+").expect("static regex"));
    let collapsed = re_ws.replace_all(s.trim(), " ");
    collapsed.chars().take(MAX_TEXT_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 14)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn display_text_collapses_and_truncates() {
        assert_eq!(display_text("  line one\n\nline   two "), "line one line two");
        let long = "é".repeat(250);
        assert_eq!(display_text(&long).chars().count(), 200);
    }

    #[test]
    fn path_has_year_folder() {
        let w = NoteWriter::new("/vault/news");
        assert_eq!(
            w.note_path(at(9, 5)),
            PathBuf::from("/vault/news/2026/2026-03-14.md")
        );
    }

    #[test]
    fn header_is_front_matter_then_title() {
        assert_eq!(
            render_header(at(9, 5)),
            "---\ndate: 2026-03-14\ntags: [ai-news, daily]\n---\n\n# AI News Briefing - 2026-03-14\n\n"
        );
    }

    #[test]
    fn section_lists_items_with_attribution() {
        let items = vec![NewsItem {
            url: "http://x/b".into(),
            text: "Headline".into(),
            source: "TechSite".into(),
            category: Some("tech".into()),
            created_at: None,
        }];
        assert_eq!(
            render_section(&items, at(7, 3)),
            "## Collected: 07:03\n- [Headline](http://x/b) [TechSite]\n\n"
        );
    }
}
