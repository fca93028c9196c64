// tests/seen_store.rs
use news_collector::SeenStore;
use std::fs;

#[test]
fn absent_file_loads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = SeenStore::new(dir.path().join("logs/seen_urls.txt"));
    assert!(store.load().is_empty());
}

#[test]
fn mark_seen_appends_one_line_per_call() {
    let dir = tempfile::tempdir().unwrap();
    let store = SeenStore::new(dir.path().join("logs/seen_urls.txt"));

    store.mark_seen("https://x.test/a").unwrap();
    store.mark_seen("https://x.test/b").unwrap();
    // No internal dedup: the caller decides.
    store.mark_seen("https://x.test/a").unwrap();

    let raw = fs::read_to_string(store.path()).unwrap();
    assert_eq!(raw.lines().count(), 3);

    let seen = store.load();
    assert_eq!(seen.len(), 2);
    assert!(seen.contains("https://x.test/a"));
    assert!(seen.contains("https://x.test/b"));
}

#[test]
fn reset_clears_everything() {
    let dir = tempfile::tempdir().unwrap();
    let store = SeenStore::new(dir.path().join("seen_urls.txt"));
    store.mark_seen("https://x.test/a").unwrap();

    store.reset().unwrap();
    assert!(store.load().is_empty());
    assert_eq!(fs::read_to_string(store.path()).unwrap(), "");
}

#[test]
fn reset_creates_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let store = SeenStore::new(dir.path().join("logs/seen_urls.txt"));
    store.reset().unwrap();
    assert!(store.path().exists());
}
