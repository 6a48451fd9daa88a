//! Integration tests for Settings config loading.
//!
//! These tests run without a global config (temp directories only) and
//! without GUESSTREE_* variables set.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use guesstree::application::{ApplicationError, GameMode};
use guesstree::config::Settings;

#[test]
fn given_config_file_when_load_then_overrides_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("guesstree.toml");
    fs::write(
        &path,
        r#"
tree_file = "animals.txt"
mode = "classic"
tab_width = 8
"#,
    )
    .unwrap();

    let settings = Settings::load(Some(&path)).expect("load settings");

    assert_eq!(settings.tree_file, PathBuf::from("animals.txt"));
    assert_eq!(settings.mode, GameMode::Classic);
    assert_eq!(settings.tab_width, 8);
    assert_eq!(settings.parse_options().tab_width, 8);
}

#[test]
fn given_partial_config_file_when_load_then_keeps_other_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("guesstree.toml");
    fs::write(&path, "mode = \"classic\"\n").unwrap();

    let settings = Settings::load(Some(&path)).expect("load settings");

    assert_eq!(settings.mode, GameMode::Classic);
    assert_eq!(settings.tree_file, PathBuf::from("cats.txt"));
    assert_eq!(settings.tab_width, 4);
}

#[test]
fn given_invalid_toml_when_load_then_config_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("guesstree.toml");
    fs::write(&path, "mode = \"sometimes\"\n").unwrap();

    let err = Settings::load(Some(&path)).unwrap_err();

    assert!(matches!(err, ApplicationError::Config { .. }));
    assert!(err.to_string().contains("guesstree.toml"));
}

#[test]
fn given_zero_tab_width_when_load_then_config_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("guesstree.toml");
    fs::write(&path, "tab_width = 0\n").unwrap();

    assert!(matches!(
        Settings::load(Some(&path)),
        Err(ApplicationError::Config { .. })
    ));
}

#[test]
fn given_missing_config_file_when_load_then_config_error() {
    let dir = TempDir::new().unwrap();
    let err = Settings::load(Some(&dir.path().join("absent.toml"))).unwrap_err();
    assert!(matches!(err, ApplicationError::Config { .. }));
}
