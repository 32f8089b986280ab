//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application
//! configuration in TOML format with platform-specific directory
//! resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::constants::DEFAULT_DEBOUNCE_MS;

/// Theme display mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeMode {
    /// Automatically detect OS theme (dark/light)
    #[default]
    Auto,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

/// Remote sync configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Remote store endpoint URL. `None` disables sync.
    pub endpoint: Option<String>,
    /// Delay between the last mutation and the push, in milliseconds.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

impl SyncConfig {
    /// The debounce delay as a [`Duration`].
    #[must_use]
    pub const fn debounce_delay(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UiConfig {
    /// Theme mode preference (Auto, Dark, Light)
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Top-level application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Remote sync settings
    #[serde(default)]
    pub sync: SyncConfig,
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Gets the platform-specific configuration directory.
    ///
    /// - Linux: `~/.config/SeatPlanner/`
    /// - macOS: `~/Library/Application Support/SeatPlanner/`
    /// - Windows: `%APPDATA%\SeatPlanner\`
    pub fn config_dir() -> Result<PathBuf> {
        let base = dirs::config_dir().context("Could not determine config directory")?;
        Ok(base.join("SeatPlanner"))
    }

    /// Gets the full path to the configuration file.
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Checks whether a configuration file exists.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_path().map(|p| p.exists()).unwrap_or(false)
    }

    /// Loads the configuration from the default path.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// Loads the configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Saves the configuration to the default path, creating the
    /// config directory if needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        self.save_to(&path)
    }

    /// Saves the configuration to a specific path.
    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }
}
