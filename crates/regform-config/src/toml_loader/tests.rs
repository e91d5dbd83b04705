//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use crate::schema::LogLevel;
use regform_common::ConfigError;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_regform_config.toml"));
    assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[logging]
level = "debug"

[form]
reset_clears_images = true
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.logging.level, LogLevel::Debug);
    assert!(config.form.reset_clears_images);
    // Defaults preserved
    assert_eq!(config.notifications.capacity, 8);
    assert_eq!(config.events.capacity, 64);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let result = load_from_path(&path);
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn load_config_with_invalid_values_returns_parsed_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[events]
capacity = 0
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.events.capacity, 0);
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("regform").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.logging.level, LogLevel::Info);
    assert!(!config.form.reset_clears_images);
    assert!(crate::validation::validate(&config).is_ok());
}

#[test]
fn default_template_parses_as_defaults() {
    let config: crate::schema::RegformConfig =
        toml::from_str(template::default_config_toml()).unwrap();
    assert_eq!(config.notifications.ttl_secs, 5);
}

#[test]
fn default_config_path_ends_with_regform() {
    if let Ok(path) = default_config_path() {
        assert!(path.ends_with("regform/config.toml"));
    }
}
