//! 設定ファイルのテスト

use costchecker_console::config::{Config, DEFAULT_API_BASE};
use costchecker_console::error::ConsoleError;
use tempfile::tempdir;

/// ファイルがなければデフォルト
#[test]
fn test_load_missing_file_uses_default() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config = Config::load_from(&dir.path().join("config.json")).expect("load failed");

    assert_eq!(config.api_base, DEFAULT_API_BASE);
    assert_eq!(config.timeout_seconds, 30);
}

/// 保存と再読み込み（親ディレクトリも作成）
#[test]
fn test_save_and_load() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("config.json");

    let mut config = Config::default();
    config.set_api_base("https://cost.example.com/").expect("invalid base");
    config.timeout_seconds = 10;
    config.save_to(&path).expect("save failed");

    let loaded = Config::load_from(&path).expect("load failed");
    assert_eq!(loaded.api_base, "https://cost.example.com");
    assert_eq!(loaded.timeout_seconds, 10);
}

/// 一部のキーだけのファイル
#[test]
fn test_partial_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"timeout_seconds": 5}"#).unwrap();

    let config = Config::load_from(&path).expect("load failed");
    assert_eq!(config.api_base, DEFAULT_API_BASE);
    assert_eq!(config.timeout_seconds, 5);
}

/// 壊れたファイル
#[test]
fn test_invalid_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ invalid").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConsoleError::JsonParse(_)));
}

#[test]
fn test_override_api_base() {
    let mut config = Config::default();
    config.override_api_base(Some("  "));
    assert_eq!(config.api_base, DEFAULT_API_BASE);

    config.override_api_base(None);
    assert_eq!(config.api_base, DEFAULT_API_BASE);

    config.override_api_base(Some("http://10.0.0.5:8000"));
    assert_eq!(config.api_base, "http://10.0.0.5:8000");
}

#[test]
fn test_set_api_base_rejects_scheme() {
    let mut config = Config::default();
    let err = config.set_api_base("cost.example.com").unwrap_err();
    assert!(matches!(err, ConsoleError::Config(_)));
    assert_eq!(config.api_base, DEFAULT_API_BASE);
}
