//! Unit tests for settings files.

use std::fs;
use tempfile::tempdir;
use wireboard::error::SettingsError;
use wireboard::input::Button;
use wireboard::settings::{EditorSettings, default_settings_path};

#[test]
fn test_save_and_load_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.json");

    let mut settings = EditorSettings::default();
    settings.tick_rate_hz = 30;
    settings.seed = Some(99);
    settings.debounce.connect_ms = 75;
    settings.node.title = "Op".to_string();
    settings.save_to(&path).unwrap();

    let loaded = EditorSettings::load_from(&path).unwrap();
    assert_eq!(loaded, settings);
    assert_eq!(loaded.debounce.interval_ms(Button::Connect), 75);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let result = EditorSettings::load_from(&dir.path().join("absent.json"));
    assert!(matches!(result, Err(SettingsError::Io(_))));
}

#[test]
fn test_malformed_json_is_json_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, "{ not json").unwrap();

    assert!(matches!(EditorSettings::load_from(&path), Err(SettingsError::Json(_))));
}

#[test]
fn test_zero_tick_rate_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{ "tick_rate_hz": 0 }"#).unwrap();

    let err = EditorSettings::load_from(&path).unwrap_err();
    assert!(matches!(err, SettingsError::Invalid(_)));
    assert!(err.to_string().contains("tick_rate_hz"));
}

#[test]
fn test_empty_object_is_all_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, "{}").unwrap();

    assert_eq!(EditorSettings::load_from(&path).unwrap(), EditorSettings::default());
}

#[test]
fn test_default_path() {
    let path = default_settings_path();
    assert!(path.is_some() || cfg!(target_os = "unknown"));
    if let Some(path) = path {
        assert!(path.ends_with("wireboard/settings.json"));
    }
}
