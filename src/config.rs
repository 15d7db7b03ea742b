//! Configuration management for the application.
//!
//! This module handles loading and validating application configuration
//! in TOML format with platform-specific directory resolution. The
//! configuration is read-only; the calculator never writes it back.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::constants::{APP_DIR_NAME, CONFIG_DIR_ENV};
use crate::models::{BandColor, BandRole, ResistorConfiguration, ResistorMode};

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

/// Initial band selections for the interactive calculator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Four- or five-band layout shown on startup
    pub mode: ResistorMode,
    /// First digit band
    pub band1: BandColor,
    /// Second digit band
    pub band2: BandColor,
    /// Third digit band (five-band mode only)
    pub band3: BandColor,
    /// Multiplier band
    pub multiplier: BandColor,
    /// Tolerance band
    pub tolerance: BandColor,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            mode: ResistorMode::FourBand,
            band1: BandColor::Brown,
            band2: BandColor::Black,
            band3: BandColor::Black,
            multiplier: BandColor::Red,
            tolerance: BandColor::Gold,
        }
    }
}

impl DefaultsConfig {
    /// Builds the configuration these defaults describe.
    #[must_use]
    pub fn resistor(&self) -> ResistorConfiguration {
        match self.mode {
            ResistorMode::FourBand => ResistorConfiguration::four_band(
                self.band1,
                self.band2,
                self.multiplier,
                self.tolerance,
            ),
            ResistorMode::FiveBand => ResistorConfiguration::five_band(
                self.band1,
                self.band2,
                self.band3,
                self.multiplier,
                self.tolerance,
            ),
        }
    }

    fn validate(&self) -> Result<()> {
        let checks = [
            ("band1", BandRole::Digit, self.band1),
            ("band2", BandRole::Digit, self.band2),
            ("band3", BandRole::Digit, self.band3),
            ("multiplier", BandRole::Multiplier, self.multiplier),
            ("tolerance", BandRole::Tolerance, self.tolerance),
        ];

        for (key, role, color) in checks {
            if !role.permits(color) {
                anyhow::bail!("defaults.{key}: '{color}' is not a valid {role} color");
            }
        }

        Ok(())
    }
}

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct UiConfig {
    /// Theme mode preference (Auto, Dark, Light)
    pub theme_mode: ThemeMode,
}

/// Application configuration.
///
/// # File Location
///
/// - `$RESCODE_CONFIG_DIR/config.toml` when the variable is set
/// - Linux: `~/.config/ResistorCode/config.toml`
/// - macOS: `~/Library/Application Support/ResistorCode/config.toml`
/// - Windows: `%APPDATA%\ResistorCode\config.toml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Initial band selections
    pub defaults: DefaultsConfig,
    /// UI preferences
    pub ui: UiConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the config directory path, honoring `RESCODE_CONFIG_DIR`.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from an explicit path.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::new());
        }

        let content = fs::read_to_string(config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate().context(format!(
            "Invalid config file: {}",
            config_path.display()
        ))?;

        debug!(path = %config_path.display(), "loaded config");
        Ok(config)
    }

    /// Validates configuration values.
    ///
    /// Checks that every default selection is legal for its band role.
    pub fn validate(&self) -> Result<()> {
        self.defaults.validate()
    }
}
