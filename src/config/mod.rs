// SPDX-License-Identifier: MPL-2.0
//! This module handles the demo's configuration, loading and saving user
//! preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[toast]` - Defaults passed to `Toast::show` and the toast colors
//! - `[demo]` - Demo screen settings (prefilled message)
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` on the command line
//! 3. Set `SIMPLE_TOAST_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use simple_toast::config;
//!
//! let dir = std::path::PathBuf::from("/tmp/simple-toast");
//! let (mut config, _warning) = config::load_with_override(Some(dir.clone()));
//! config.toast.animated = Some(false);
//! config::save_with_override(&config, Some(dir)).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::toast::ShowOptions;
use iced::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// Toast presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToastConfig {
    /// Fade in on show and out on dismiss.
    #[serde(default = "default_animated", skip_serializing_if = "Option::is_none")]
    pub animated: Option<bool>,

    /// Banner height in logical pixels.
    #[serde(
        default = "default_target_height",
        skip_serializing_if = "Option::is_none"
    )]
    pub target_height: Option<f32>,

    /// Seconds before the dismiss sequence starts.
    #[serde(
        default = "default_duration_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub duration_secs: Option<f64>,

    /// Label color as a hex string (e.g. `#ffffff`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,

    /// Banner color as a hex string (e.g. `#ff0000`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            animated: default_animated(),
            target_height: default_target_height(),
            duration_secs: default_duration_secs(),
            text_color: None,
            background_color: None,
        }
    }
}

impl ToastConfig {
    /// Builds `show` options, clamping out-of-range values.
    #[must_use]
    pub fn show_options(&self) -> ShowOptions {
        let target_height = self
            .target_height
            .filter(|h| h.is_finite())
            .unwrap_or(DEFAULT_TARGET_HEIGHT)
            .clamp(MIN_TARGET_HEIGHT, MAX_TARGET_HEIGHT);

        let duration_secs = self
            .duration_secs
            .filter(|d| d.is_finite())
            .unwrap_or(DEFAULT_DURATION_SECS)
            .clamp(MIN_DURATION_SECS, MAX_DURATION_SECS);

        ShowOptions {
            animated: self.animated.unwrap_or(DEFAULT_ANIMATED),
            target_height,
            duration: Duration::from_secs_f64(duration_secs),
        }
    }

    /// Label color, falling back to the default when missing or unparsable.
    #[must_use]
    pub fn text_color(&self) -> Color {
        parse_color(self.text_color.as_deref(), DEFAULT_TEXT_COLOR_HEX)
    }

    /// Banner color, falling back to the default when missing or unparsable.
    #[must_use]
    pub fn background_color(&self) -> Color {
        parse_color(
            self.background_color.as_deref(),
            DEFAULT_BACKGROUND_COLOR_HEX,
        )
    }
}

/// Demo screen settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DemoConfig {
    /// Message prefilled in the text field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

// =============================================================================
// Main Config Struct
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub toast: ToastConfig,

    #[serde(default)]
    pub demo: DemoConfig,
}

// =============================================================================
// Default Value Functions (for serde)
// =============================================================================

fn default_animated() -> Option<bool> {
    Some(DEFAULT_ANIMATED)
}

fn default_target_height() -> Option<f32> {
    Some(DEFAULT_TARGET_HEIGHT)
}

fn default_duration_secs() -> Option<f64> {
    Some(DEFAULT_DURATION_SECS)
}

fn parse_color(value: Option<&str>, fallback: &str) -> Color {
    value
        .and_then(|hex| {
            let parsed = hex.parse::<Color>().ok();
            if parsed.is_none() {
                tracing::warn!(value = hex, "ignoring invalid color in settings");
            }
            parsed
        })
        .or_else(|| fallback.parse::<Color>().ok())
        .unwrap_or(Color::WHITE)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    return (
                        Config::default(),
                        Some(format!("failed to load {}: {err}", path.display())),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            toast: ToastConfig {
                animated: Some(false),
                target_height: Some(64.0),
                duration_secs: Some(1.5),
                text_color: Some("#000000".to_string()),
                background_color: Some("#00ff00".to_string()),
            },
            demo: DemoConfig {
                message: Some("Saved!".to_string()),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join(CONFIG_FILE);

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_rejects_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn load_with_override_falls_back_with_warning_on_invalid_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[toast\nanimated = ")
            .expect("failed to write invalid toml");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }

    #[test]
    fn load_with_override_missing_file_is_silent_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn missing_sections_use_defaults() {
        let config: Config = toml::from_str("[demo]\nmessage = \"hi\"\n").expect("valid toml");
        assert_eq!(config.toast, ToastConfig::default());
        assert_eq!(config.demo.message.as_deref(), Some("hi"));
    }

    #[test]
    fn save_with_override_writes_settings_file_in_directory() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config = Config {
            demo: DemoConfig {
                message: Some("override".to_string()),
            },
            ..Config::default()
        };

        save_with_override(&config, Some(temp_dir.path().to_path_buf()))
            .expect("failed to save config");
        assert!(temp_dir.path().join(CONFIG_FILE).exists());

        let (loaded, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none());
        assert_eq!(loaded, config);
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("deep").join("path").join(CONFIG_FILE);

        save_to_path(&Config::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn default_show_options_match_show_defaults() {
        let options = ToastConfig::default().show_options();
        assert_eq!(options, ShowOptions::default());
    }

    #[test]
    fn show_options_clamp_out_of_range_values() {
        let config = ToastConfig {
            target_height: Some(5000.0),
            duration_secs: Some(-3.0),
            ..ToastConfig::default()
        };
        let options = config.show_options();
        assert_eq!(options.target_height, MAX_TARGET_HEIGHT);
        assert_eq!(options.duration, Duration::from_secs_f64(MIN_DURATION_SECS));
    }

    #[test]
    fn invalid_colors_fall_back_to_defaults() {
        let config = ToastConfig {
            text_color: Some("not-a-color".to_string()),
            background_color: None,
            ..ToastConfig::default()
        };
        assert_eq!(config.text_color(), Color::WHITE);
        assert_eq!(config.background_color(), Color::from_rgb(1.0, 0.0, 0.0));
    }
}
