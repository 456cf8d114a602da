/*!
 * Tests for application configuration functionality
 */

use std::io::Write;
use tempfile::NamedTempFile;
use ytcaptions::app_config::{Config, LogLevel};
use ytcaptions::errors::AppError;

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.upstream.base_url, "https://www.youtube.com/api/timedtext");
    assert_eq!(config.upstream.user_agent, "Mozilla/5.0 (Windows NT 10.0; Win64; x64)");
    assert_eq!(config.upstream.accept_language, "en,en-US;q=0.9");
    assert_eq!(config.upstream.timeout_secs, 30);
    assert_eq!(config.resolver.fallback_languages, vec!["en", "en-US", "en-GB"]);
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.log_level, LogLevel::Info);

    assert!(config.validate().is_ok());
}

/// Test configuration validation
#[test]
fn test_config_validation_withVariousConfigs_shouldValidateCorrectly() {
    let mut config = Config::default();

    // Relative or non-http endpoint
    config.upstream.base_url = "api/timedtext".to_string();
    assert!(config.validate().is_err());
    config.upstream.base_url = "ftp://example.com/timedtext".to_string();
    assert!(config.validate().is_err());
    config.upstream.base_url = "http://localhost:8080/api/timedtext".to_string();
    assert!(config.validate().is_ok());

    config.upstream.user_agent = "  ".to_string();
    assert!(config.validate().is_err());
    config.upstream.user_agent = "test-agent".to_string();

    config.upstream.timeout_secs = 0;
    assert!(config.validate().is_err());
    config.upstream.timeout_secs = 5;

    config.resolver.fallback_languages = vec!["en".to_string(), "".to_string()];
    assert!(config.validate().is_err());
    config.resolver.fallback_languages = Vec::new();
    assert!(config.validate().is_ok());

    config.server.port = 0;
    assert!(matches!(config.validate(), Err(AppError::Config(_))));
}

/// Test loading a partial file fills in defaults
#[test]
fn test_load_withPartialFile_shouldApplyDefaults() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{ "resolver": {{ "fallback_languages": ["de"] }}, "server": {{ "port": 8080 }}, "log_level": "debug" }}"#
    )
    .unwrap();

    let config = Config::load(file.path()).unwrap();

    assert_eq!(config.resolver.fallback_languages, vec!["de"]);
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.upstream.timeout_secs, 30);
    assert_eq!(config.log_level, LogLevel::Debug);
}

/// Test save then load keeps every value
#[test]
fn test_save_thenLoad_shouldPreserveValues() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("conf.json");

    let mut config = Config::default();
    config.upstream.accept_language = "fr-FR".to_string();
    config.resolver.fallback_languages = vec!["fr".to_string(), "en".to_string()];
    config.log_level = LogLevel::Trace;
    config.save(&path).unwrap();

    let loaded = Config::load(&path).unwrap();
    assert_eq!(loaded.upstream.accept_language, "fr-FR");
    assert_eq!(loaded.resolver.fallback_languages, vec!["fr", "en"]);
    assert_eq!(loaded.log_level, LogLevel::Trace);
}

/// Test error cases when loading
#[test]
fn test_load_withMissingOrInvalidFile_shouldReturnError() {
    let dir = tempfile::tempdir().unwrap();
    let missing = Config::load(dir.path().join("missing.json"));
    assert!(matches!(missing, Err(AppError::File(_))));

    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{{ not json").unwrap();
    assert!(matches!(Config::load(file.path()), Err(AppError::Config(_))));
}
