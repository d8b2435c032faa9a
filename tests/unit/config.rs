use super::*;
use std::io::Write;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn missing_fields_take_defaults() {
    let file = write_config(r#"{ "poll_interval_ms": 10 }"#);
    let config = UiConfig::load(file.path()).unwrap();
    assert_eq!(config.poll_interval_ms, 10);
    assert_eq!(config.command_workers, UiConfig::default().command_workers);
    assert_eq!(config.log, LogConfig::default());
}

#[test]
fn nested_log_settings_are_read() {
    let file = write_config(r#"{ "log": { "filter": "cellkit=debug", "dir": "/tmp/x" } }"#);
    let config = UiConfig::load(file.path()).unwrap();
    assert_eq!(config.log.filter, "cellkit=debug");
    assert_eq!(config.log.resolve_dir(), PathBuf::from("/tmp/x"));
}

#[test]
fn invalid_json_is_a_parse_error() {
    let file = write_config("{ not json");
    let err = UiConfig::load(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().starts_with("invalid config"));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = UiConfig::load(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn load_or_default_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    let config = UiConfig::load_or_default(dir.path().join("absent.json"));
    assert_eq!(config, UiConfig::default());
}

#[test]
fn poll_interval_is_never_zero() {
    let config = UiConfig {
        poll_interval_ms: 0,
        ..UiConfig::default()
    };
    assert_eq!(config.poll_interval(), Duration::from_millis(1));
}

#[test]
fn default_log_dir_ends_in_the_app_log_dir() {
    let dir = LogConfig::default().resolve_dir();
    assert!(dir.ends_with("cellkit/logs"));
}
