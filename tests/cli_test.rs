//! Command line parsing and settings resolution.

use std::path::PathBuf;

use clap::Parser;

use guesstree::application::GameMode;
use guesstree::cli::commands::resolve_settings;
use guesstree::cli::Cli;

#[test]
fn given_no_arguments_when_resolving_then_uses_default_tree_file() {
    let cli = Cli::parse_from(["guesstree"]);
    let settings = resolve_settings(&cli).expect("settings");

    assert_eq!(settings.tree_file, PathBuf::from("cats.txt"));
    assert_eq!(settings.mode, GameMode::Learning);
}

#[test]
fn given_file_and_mode_when_resolving_then_arguments_win() {
    let cli = Cli::parse_from(["guesstree", "tests/resources/cats.txt", "-m", "classic"]);
    let settings = resolve_settings(&cli).expect("settings");

    assert_eq!(settings.tree_file, PathBuf::from("tests/resources/cats.txt"));
    assert_eq!(settings.mode, GameMode::Classic);
}

#[test]
fn given_show_and_answers_when_parsing_then_conflict() {
    let result = Cli::try_parse_from(["guesstree", "--show", "--answers"]);
    assert!(result.is_err());
}
