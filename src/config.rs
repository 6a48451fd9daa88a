//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/guesstree/guesstree.toml`
//! 3. Explicit config file (`--config`)
//! 4. Environment variables: `GUESSTREE_*` prefix
//!
//! Command line arguments are applied on top by the CLI layer.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::{ApplicationError, GameMode};
use crate::domain::{ParseOptions, DEFAULT_TAB_WIDTH};

/// Tree file used when neither config nor command line names one.
pub const DEFAULT_TREE_FILE: &str = "cats.txt";

/// Unified configuration for guesstree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Tree file to play with
    pub tree_file: PathBuf,
    /// Game variant
    pub mode: GameMode,
    /// Columns per tab stop when measuring indentation
    pub tab_width: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tree_file: PathBuf::from(DEFAULT_TREE_FILE),
            mode: GameMode::default(),
            tab_width: DEFAULT_TAB_WIDTH,
        }
    }
}

/// Raw settings for intermediate parsing (`None` → not specified, inherit).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub tree_file: Option<PathBuf>,
    pub mode: Option<GameMode>,
    pub tab_width: Option<usize>,
}

/// Get the XDG config directory for guesstree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "guesstree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("guesstree.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

/// Expand `~`, `$VAR` and `${VAR}`; leaves the input unchanged if expansion fails.
pub fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}

impl Settings {
    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional explicit config file; it must exist
    pub fn load(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config
        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!("global config: {}", global_path.display());
                current = current.merge_with(&load_raw_settings(&global_path)?);
            }
        }

        // 3. Explicit config file
        if let Some(path) = config_file {
            debug!("config file: {}", path.display());
            current = current.merge_with(&load_raw_settings(path)?);
        }

        // 4. Environment variables
        current = Self::apply_env_overrides(current)?;

        current.expand_paths();
        current.validate()?;
        Ok(current)
    }

    /// Overlay wins wherever it specifies a value.
    pub fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            tree_file: overlay
                .tree_file
                .clone()
                .unwrap_or_else(|| self.tree_file.clone()),
            mode: overlay.mode.unwrap_or(self.mode),
            tab_width: overlay.tab_width.unwrap_or(self.tab_width),
        }
    }

    /// Apply GUESSTREE_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(Environment::with_prefix("GUESSTREE"))
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("tree_file") {
            settings.tree_file = PathBuf::from(val);
        }
        if let Ok(val) = config.get_string("mode") {
            settings.mode = parse_mode(&val)?;
        }
        if let Ok(val) = config.get_string("tab_width") {
            settings.tab_width = val.trim().parse().map_err(|_| ApplicationError::Config {
                message: format!("GUESSTREE_TAB_WIDTH: not a number: {val}"),
            })?;
        }
        Ok(settings)
    }

    /// Expand shell variables and tilde in the tree file path.
    fn expand_paths(&mut self) {
        let expanded = expand_env_vars(self.tree_file.to_string_lossy().as_ref());
        self.tree_file = PathBuf::from(expanded);
    }

    pub fn validate(&self) -> Result<(), ApplicationError> {
        if self.tab_width == 0 {
            return Err(ApplicationError::Config {
                message: "tab_width must be at least 1".into(),
            });
        }
        Ok(())
    }

    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            tab_width: self.tab_width,
        }
    }
}

/// Case-insensitive game mode name, as accepted on the command line.
fn parse_mode(value: &str) -> Result<GameMode, ApplicationError> {
    use clap::ValueEnum;
    GameMode::from_str(value.trim(), true).map_err(|e| ApplicationError::Config {
        message: format!("GUESSTREE_MODE: {e}"),
    })
}
