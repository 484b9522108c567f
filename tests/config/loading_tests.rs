// Config loading tests - file handling and validation errors

use mentor_core::config::{AppConfig, ConfigError};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn write_config(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("mentor.toml");
    fs::write(&path, content).expect("Failed to write config");
    path
}

#[test]
fn returns_error_when_file_not_found() {
    let result = AppConfig::load(Some(Path::new("/nonexistent/path/mentor.toml")));
    assert!(matches!(result, Err(ConfigError::NotFound { .. })));
}

#[test]
fn returns_io_error_when_path_is_a_directory() {
    let dir = tempdir().expect("tempdir");
    let result = AppConfig::load(Some(dir.path()));
    assert!(matches!(result, Err(ConfigError::Io { .. })));
}

#[test]
fn returns_parse_error_with_path() {
    let dir = tempdir().expect("tempdir");
    let path = write_config(dir.path(), "[provider\ntype = ");

    match AppConfig::load(Some(&path)) {
        Err(ConfigError::Parse { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn loads_complete_file() {
    let dir = tempdir().expect("tempdir");
    let path = write_config(
        dir.path(),
        r#"
[provider]
id = "google"
type = "gemini"
endpoint = "https://example.com"
api_key = "MY_KEY_VAR"
api_path = "v1/models"
model = "gemini-1.5-pro"

[chat]
title = "Night shift"
prompt_prefix = "Q: "

[animation]
tick_ms = 50
iterations_per_char = 3

[[headlines]]
text = "Hello"

[[headlines]]
text = "World"
delay_ms = 400
"#,
    );

    let config = AppConfig::load(Some(&path)).expect("config loads");

    assert_eq!(config.provider.id, "google");
    assert_eq!(config.provider.endpoint, "https://example.com");
    assert_eq!(config.provider.api_key.as_deref(), Some("MY_KEY_VAR"));
    assert_eq!(config.provider.api_path.as_deref(), Some("v1/models"));
    assert_eq!(config.provider.model, "gemini-1.5-pro");
    assert_eq!(config.chat.title, "Night shift");
    assert_eq!(config.chat.prompt_prefix, "Q: ");
    assert_eq!(config.animation.tick_interval.as_millis(), 50);
    assert_eq!(config.animation.iterations_per_char, 3);

    let headlines: Vec<_> = config
        .headlines
        .iter()
        .map(|h| (h.text.as_str(), h.delay.as_millis()))
        .collect();
    assert_eq!(headlines, vec![("Hello", 0), ("World", 400)]);
}

#[test]
fn rejects_unsupported_provider_type() {
    let dir = tempdir().expect("tempdir");
    let path = write_config(dir.path(), "[provider]\ntype = \"openai\"\n");

    match AppConfig::load(Some(&path)) {
        Err(ConfigError::UnsupportedProvider {
            provider,
            provider_type,
        }) => {
            assert_eq!(provider, "openai");
            assert_eq!(provider_type, "openai");
        }
        other => panic!("expected unsupported provider, got {other:?}"),
    }
}

#[test]
fn rejects_blank_endpoint() {
    let dir = tempdir().expect("tempdir");
    let path = write_config(dir.path(), "[provider]\nendpoint = \"  \"\n");

    let result = AppConfig::load(Some(&path));
    assert!(matches!(result, Err(ConfigError::MissingEndpoint { .. })));
}

#[test]
fn rejects_blank_model() {
    let dir = tempdir().expect("tempdir");
    let path = write_config(dir.path(), "[provider]\nmodel = \"\"\n");

    match AppConfig::load(Some(&path)) {
        Err(ConfigError::MissingModel { provider }) => assert_eq!(provider, "gemini"),
        other => panic!("expected missing model, got {other:?}"),
    }
}

#[test]
fn rejects_zero_iterations_per_char() {
    let dir = tempdir().expect("tempdir");
    let path = write_config(dir.path(), "[animation]\niterations_per_char = 0\n");

    let result = AppConfig::load(Some(&path));
    assert!(matches!(result, Err(ConfigError::InvalidAnimation { .. })));
}
