//! Configuration management for the application.
//!
//! Handles loading, validating, and saving persistent preferences in TOML
//! format with platform-specific directory resolution. Compiler settings are
//! not stored here; they travel with each invocation. This file only keeps
//! host-session preferences that should survive restarts.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Panel window preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Panel width in pixels
    #[serde(default = "default_window_width")]
    pub width: u32,
    /// Panel height in pixels
    #[serde(default = "default_window_height")]
    pub height: u32,
}

fn default_window_width() -> u32 {
    500
}

fn default_window_height() -> u32 {
    300
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: default_window_width(),
            height: default_window_height(),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/tokensmith/config.toml`
/// - macOS: `~/Library/Application Support/tokensmith/config.toml`
/// - Windows: `%APPDATA%\tokensmith\config.toml`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Panel window preferences
    #[serde(default)]
    pub window: WindowConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the platform-specific config directory path.
    ///
    /// # Errors
    ///
    /// Fails when the platform config directory cannot be determined.
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join("tokensmith");

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    ///
    /// # Errors
    ///
    /// Fails when the platform config directory cannot be determined.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the default config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Fails when the file exists but cannot be read or parsed, or when its
    /// contents fail validation.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from an explicit path.
    ///
    /// # Errors
    ///
    /// Fails when the file exists but cannot be read or parsed, or when its
    /// contents fail validation.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
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

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the default config file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    ///
    /// # Errors
    ///
    /// Fails on validation errors or filesystem failures.
    pub fn save(&self) -> Result<()> {
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to an explicit path using atomic write.
    ///
    /// # Errors
    ///
    /// Fails on validation errors or filesystem failures.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        self.validate()?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values. A zero-sized window would make the
    /// panel unrecoverable, so both dimensions must be positive.
    ///
    /// # Errors
    ///
    /// Fails when either window dimension is zero.
    pub fn validate(&self) -> Result<()> {
        if self.window.width == 0 || self.window.height == 0 {
            anyhow::bail!(
                "Window dimensions must be positive, got {}x{}",
                self.window.width,
                self.window.height
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_new() {
        let config = Config::new();
        assert_eq!(config.window.width, 500);
        assert_eq!(config.window.height, 300);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validate_rejects_zero_dimensions() {
        let mut config = Config::new();
        config.window.width = 0;
        assert!(config.validate().is_err());

        let mut config = Config::new();
        config.window.height = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_load_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load_from(&temp_dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::new());
    }

    #[test]
    fn test_config_save_and_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");

        let config = Config {
            window: WindowConfig {
                width: 640,
                height: 480,
            },
        };
        config.save_to(&config_file).unwrap();

        let loaded = Config::load_from(&config_file).unwrap();
        assert_eq!(loaded, config);
        // Atomic write leaves no temp file behind.
        assert!(!config_file.with_extension("toml.tmp").exists());
    }

    #[test]
    fn test_config_load_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        fs::write(&config_file, "[window]\nwidth = 800\n").unwrap();

        let loaded = Config::load_from(&config_file).unwrap();
        assert_eq!(loaded.window.width, 800);
        assert_eq!(loaded.window.height, 300);
    }

    #[test]
    fn test_config_load_invalid_toml_fails() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        fs::write(&config_file, "window = \"not a table\"").unwrap();

        assert!(Config::load_from(&config_file).is_err());
    }
}
