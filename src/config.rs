//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use crate::constants::APP_CONFIG_DIR;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// DCS World import settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DcsConfig {
    /// DCS saved-games directory (e.g., "`Saved Games/DCS.openbeta`")
    #[serde(default)]
    pub saved_games: Option<PathBuf>,
    /// Hide the simplified "_easy" aircraft profiles
    #[serde(default = "default_remove_easy_modes")]
    pub remove_easy_modes: bool,
}

fn default_remove_easy_modes() -> bool {
    true
}

impl Default for DcsConfig {
    fn default() -> Self {
        Self {
            saved_games: None,
            remove_easy_modes: default_remove_easy_modes(),
        }
    }
}

/// Star Citizen import settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct StarCitizenConfig {
    /// Exported action maps file (`actionmaps.xml`)
    #[serde(default)]
    pub action_maps: Option<PathBuf>,
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/joymap/config.toml`
/// - macOS: `~/Library/Application Support/joymap/config.toml`
/// - Windows: `%APPDATA%\joymap\config.toml`
///
/// # Validation
///
/// - `dcs.saved_games` must be an existing directory if set
/// - `star_citizen.action_maps` must be an existing `.xml` file if set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub dcs: DcsConfig,
    #[serde(default)]
    pub star_citizen: StarCitizenConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the platform-specific config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_CONFIG_DIR);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the default config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from `path`, or defaults if it doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the default config file.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to `path` using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        let temp_path = path.with_extension("toml.tmp");

        fs::write(&temp_path, content).with_context(|| {
            format!("Failed to write temp config file: {}", temp_path.display())
        })?;

        fs::rename(&temp_path, path)
            .with_context(|| format!("Failed to rename temp config file to: {}", path.display()))?;

        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        if let Some(saved_games) = &self.dcs.saved_games {
            if !saved_games.is_dir() {
                anyhow::bail!(
                    "DCS saved games directory does not exist: {}",
                    saved_games.display()
                );
            }
        }

        if let Some(action_maps) = &self.star_citizen.action_maps {
            if !action_maps.is_file() {
                anyhow::bail!(
                    "Star Citizen action maps file does not exist: {}",
                    action_maps.display()
                );
            }
            if action_maps.extension().is_none_or(|ext| ext != "xml") {
                anyhow::bail!(
                    "Star Citizen action maps file must be an XML file: {}",
                    action_maps.display()
                );
            }
        }

        Ok(())
    }
}
