//! Application configuration
//!
//! Settings come from built-in defaults, then an optional YAML file, then CLI flags.
//! Without `--config` the file is looked up in the platform configuration directory
//! and silently skipped when absent.

use std::{
    fs,
    path::{Path, PathBuf}
};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Name of the configuration file inside the configuration directory
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Runtime settings for the word frequency CLI
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Comma-separated stop word file
    pub stop_words: PathBuf,
    /// Default log filter when neither `RUST_LOG` nor `-v` is given
    pub log_level:  String
}

impl Default for Settings {
    fn default() -> Self {
        Self { stop_words: PathBuf::from("stop_words.txt"), log_level: "warn".to_string() }
    }
}

impl Settings {
    /// Apply command line overrides on top of the loaded settings
    pub fn with_stop_words(mut self, stop_words: Option<PathBuf>) -> Self {
        if let Some(stop_words) = stop_words {
            self.stop_words = stop_words;
        }
        self
    }
}

/// Get the project directories for cross-platform config path resolution
pub fn get_project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("", "", "wordfreq").context("Failed to determine project directories")
}

/// Get the configuration directory path
pub fn get_config_dir() -> Result<PathBuf> {
    let project_dirs = get_project_dirs()?;
    Ok(project_dirs.config_dir().to_path_buf())
}

/// Get the config file path
pub fn get_config_file_path() -> Result<PathBuf> {
    let config_dir = get_config_dir()?;
    Ok(config_dir.join(CONFIG_FILE_NAME))
}

/// Parse settings from YAML; missing keys keep their defaults
pub fn parse_settings(content: &str) -> Result<Settings> {
    if content.trim().is_empty() {
        return Ok(Settings::default());
    }
    serde_yaml::from_str(content).context("Failed to parse config file")
}

/// Load settings from an explicit file, which must exist
pub fn load_settings_from(path: &Path) -> Result<Settings> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    parse_settings(&content).with_context(|| format!("Invalid config file: {}", path.display()))
}

/// Load settings from `explicit` if given, otherwise from the platform config file if present
pub fn load_settings(explicit: Option<&Path>) -> Result<Settings> {
    if let Some(path) = explicit {
        return load_settings_from(path);
    }

    match get_config_file_path() {
        Ok(path) if path.is_file() => load_settings_from(&path),
        _ => Ok(Settings::default())
    }
}
