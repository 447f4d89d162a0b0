//! Configuration module for emopick
//!
//! Manages picker settings: debounce delay, overlay geometry, title, theme
//! and an optional custom glyph table. Configuration is stored in the user's
//! config directory (`~/.config/emopick/config.toml` on Linux); a missing
//! file means defaults.

use crate::ui::{Theme, ThemeName};
use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Upper bound for the debounce delay
const MAX_DEBOUNCE_MS: u64 = 10_000;

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct PickerConfig {
    /// Idle time after the last keystroke before the list is filtered
    pub debounce_ms: u64,

    /// Overlay width as a percentage of the terminal width
    pub width_percent: u16,

    /// Overlay height in rows
    pub height: u16,

    /// Overlay title
    pub title: String,

    /// Color theme preset
    pub theme: ThemeName,

    /// Custom glyph table replacing the built-in one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub glyphs: Option<PathBuf>,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 300,
            width_percent: 40,
            height: 20,
            title: "Emoji".to_string(),
            theme: ThemeName::Dark,
            glyphs: None,
        }
    }
}

impl PickerConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::Message("Could not determine config directory".to_string())
        })?;

        Ok(config_dir.join("emopick").join("config.toml"))
    }

    /// Load configuration from the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be parsed or holds
    /// invalid values.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, falling back to defaults if it is missing
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be parsed or holds invalid values.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(
                File::from(path.to_path_buf())
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;

        tracing::debug!(path = %path.display(), ?config, "configuration loaded");
        Ok(config)
    }

    /// Save configuration to `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {e}"))
            })?;
        }

        let toml_string = self.to_toml()?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Render the configuration as TOML
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if serialization fails.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))
    }

    /// Check value ranges
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Message` naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=100).contains(&self.width_percent) {
            return Err(ConfigError::Message(format!(
                "width_percent must be between 1 and 100, got {}",
                self.width_percent
            )));
        }
        if self.height < 3 {
            return Err(ConfigError::Message(format!(
                "height must be at least 3 rows, got {}",
                self.height
            )));
        }
        if self.debounce_ms > MAX_DEBOUNCE_MS {
            return Err(ConfigError::Message(format!(
                "debounce_ms must be at most {MAX_DEBOUNCE_MS}, got {}",
                self.debounce_ms
            )));
        }
        Ok(())
    }

    /// Debounce delay as a `Duration`
    #[must_use]
    pub const fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Resolved theme
    #[must_use]
    pub fn theme(&self) -> Theme {
        Theme::from(self.theme)
    }
}
