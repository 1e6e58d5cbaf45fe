//! Configuration file tests

use processos_common::DEFAULT_BASE_URL;
use processos_dashboard::config::Config;
use tempfile::tempdir;

/// Missing file yields defaults
#[test]
fn test_load_missing_file_defaults() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config = Config::load_from(&dir.path().join("config.json")).expect("load");

    assert_eq!(config.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.token, None);
    assert_eq!(config.rows_per_page, 10);
}

#[test]
fn test_save_and_load() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("config.json");

    let mut config = Config::default();
    config.set_base_url("https://api.example.com/".to_string()).expect("url");
    config.set_token("  abc123  ".to_string());
    config.save_to(&path).expect("save");

    let loaded = Config::load_from(&path).expect("load");
    assert_eq!(loaded.base_url, "https://api.example.com");
    assert_eq!(loaded.token.as_deref(), Some("abc123"));
}

/// Fields absent from the file fall back to defaults
#[test]
fn test_partial_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"token": "t"}"#).unwrap();

    let config = Config::load_from(&path).expect("load");
    assert_eq!(config.token.as_deref(), Some("t"));
    assert_eq!(config.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.timeout_seconds, 30);
}

#[test]
fn test_invalid_base_url_rejected() {
    let mut config = Config::default();
    assert!(config.set_base_url("localhost:8000".to_string()).is_err());
    assert_eq!(config.base_url, DEFAULT_BASE_URL);
}

#[test]
fn test_blank_token_and_clear() {
    let mut config = Config::default();
    config.set_token("   ".to_string());
    assert_eq!(config.token, None);

    config.set_token("x".to_string());
    config.clear_token();
    assert_eq!(config.token, None);
}
