// tests/sources_config.rs
use news_collector::config::load_sources;
use news_collector::CollectError;
use std::fs;

#[test]
fn json_config_loads_with_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let p = dir.path().join("sources.json");
    fs::write(
        &p,
        r#"{"rss": [
            {"name": "TechSite", "url": "http://x/feed", "category": "tech"},
            {"name": "Lab", "url": "http://y/feed"}
        ]}"#,
    )
    .unwrap();

    let cfg = load_sources(&p).unwrap();
    assert!(cfg.twitter.is_empty());
    assert_eq!(cfg.rss.len(), 2);
    assert_eq!(cfg.rss[1].category, "tech");
}

#[test]
fn shipped_sample_config_parses() {
    let cfg = load_sources(std::path::Path::new("config/sources.json")).unwrap();
    assert!(!cfg.twitter.is_empty());
    assert!(!cfg.rss.is_empty());
}

#[test]
fn missing_file_is_config_missing() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_sources(&dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, CollectError::ConfigMissing { .. }));
}

#[test]
fn invalid_json_is_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let p = dir.path().join("sources.json");
    fs::write(&p, "{ twitter: [").unwrap();

    let err = load_sources(&p).unwrap_err();
    assert!(matches!(err, CollectError::ConfigParse { .. }));
    assert!(err.to_string().contains("sources.json"));
}

#[test]
fn toml_extension_selects_toml() {
    let dir = tempfile::tempdir().unwrap();
    let p = dir.path().join("sources.toml");
    fs::write(
        &p,
        r#"
twitter = ["karpathy", "sama"]

[[rss]]
name = "TechSite"
url = "http://x/feed"
"#,
    )
    .unwrap();

    let cfg = load_sources(&p).unwrap();
    assert_eq!(cfg.twitter.len(), 2);
    assert_eq!(cfg.rss[0].category, "tech");
}
