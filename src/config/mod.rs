// SPDX-License-Identifier: MPL-2.0
//! This module handles the crate's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language
//! - `[player]` - Video player settings (volume, controls auto-hide, seek step)
//! - `[viewer]` - Image zoom settings
//! - `[api]` - External API location
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `VERTEX_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use vertex_viewer::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.general.language = Some("fr".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// Environment variable overriding `[api] base_url`.
pub const ENV_API_URL: &str = "VERTEX_API_URL";

// =============================================================================
// Section Structs
// =============================================================================

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Video player settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlayerConfig {
    /// Initial playback volume (0.0 to 1.0).
    #[serde(default = "default_volume", skip_serializing_if = "Option::is_none")]
    pub volume: Option<f32>,

    /// Whether players start muted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub muted: Option<bool>,

    /// Delay before controls hide while playing (milliseconds).
    #[serde(
        default = "default_controls_hide_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub controls_hide_delay_ms: Option<u64>,

    /// Keyboard seek step in seconds (arrow keys).
    #[serde(
        default = "default_keyboard_seek_step_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub keyboard_seek_step_secs: Option<f64>,

    /// Visible fraction that starts inline autoplay.
    #[serde(
        default = "default_autoplay_visibility_threshold",
        skip_serializing_if = "Option::is_none"
    )]
    pub autoplay_visibility_threshold: Option<f32>,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            volume: default_volume(),
            muted: Some(false),
            controls_hide_delay_ms: default_controls_hide_delay_ms(),
            keyboard_seek_step_secs: default_keyboard_seek_step_secs(),
            autoplay_visibility_threshold: default_autoplay_visibility_threshold(),
        }
    }
}

impl PlayerConfig {
    /// Returns the controls hide delay, clamped to its valid range.
    #[must_use]
    pub fn controls_hide_delay(&self) -> Duration {
        let ms = self
            .controls_hide_delay_ms
            .unwrap_or(DEFAULT_CONTROLS_HIDE_DELAY_MS)
            .clamp(MIN_CONTROLS_HIDE_DELAY_MS, MAX_CONTROLS_HIDE_DELAY_MS);
        Duration::from_millis(ms)
    }

    /// Returns the keyboard seek step, clamped to its valid range.
    #[must_use]
    pub fn keyboard_seek_step(&self) -> f64 {
        self.keyboard_seek_step_secs
            .unwrap_or(DEFAULT_KEYBOARD_SEEK_STEP_SECS)
            .clamp(MIN_KEYBOARD_SEEK_STEP_SECS, MAX_KEYBOARD_SEEK_STEP_SECS)
    }

    /// Returns the autoplay threshold, clamped to (0, 1].
    #[must_use]
    pub fn autoplay_threshold(&self) -> f32 {
        self.autoplay_visibility_threshold
            .unwrap_or(DEFAULT_AUTOPLAY_VISIBILITY_THRESHOLD)
            .clamp(f32::EPSILON, 1.0)
    }
}

/// Image viewer settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ViewerConfig {
    /// Scale change per wheel delta unit.
    #[serde(
        default = "default_wheel_sensitivity",
        skip_serializing_if = "Option::is_none"
    )]
    pub wheel_sensitivity: Option<f32>,

    /// Scale applied by double-clicking an unzoomed image.
    #[serde(
        default = "default_double_click_scale",
        skip_serializing_if = "Option::is_none"
    )]
    pub double_click_scale: Option<f32>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            wheel_sensitivity: default_wheel_sensitivity(),
            double_click_scale: default_double_click_scale(),
        }
    }
}

/// External API settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    /// Base URL of the HTTP API.
    #[serde(default = "default_api_base_url", skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_api_base_url(),
        }
    }
}

impl ApiConfig {
    /// Resolves the base URL: `VERTEX_API_URL` first, then the config value,
    /// then the built-in default. Trailing slashes are removed.
    #[must_use]
    pub fn resolved_base_url(&self) -> String {
        let from_env = std::env::var(ENV_API_URL).ok().filter(|v| !v.is_empty());
        let raw = from_env
            .or_else(|| self.base_url.clone())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        raw.trim_end_matches('/').to_string()
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Crate configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub player: PlayerConfig,

    #[serde(default)]
    pub viewer: ViewerConfig,

    #[serde(default)]
    pub api: ApiConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_volume() -> Option<f32> {
    Some(DEFAULT_VOLUME)
}

fn default_controls_hide_delay_ms() -> Option<u64> {
    Some(DEFAULT_CONTROLS_HIDE_DELAY_MS)
}

fn default_keyboard_seek_step_secs() -> Option<f64> {
    Some(DEFAULT_KEYBOARD_SEEK_STEP_SECS)
}

fn default_autoplay_visibility_threshold() -> Option<f32> {
    Some(DEFAULT_AUTOPLAY_VISIBILITY_THRESHOLD)
}

fn default_wheel_sensitivity() -> Option<f32> {
    Some(DEFAULT_WHEEL_SENSITIVITY)
}

fn default_double_click_scale() -> Option<f32> {
    Some(DEFAULT_DOUBLE_CLICK_SCALE)
}

fn default_api_base_url() -> Option<String> {
    Some(DEFAULT_API_BASE_URL.to_string())
}

// =============================================================================
// Load / Save
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning key explaining what went wrong.
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
                    tracing::warn!("Failed to load {}: {}", path.display(), err);
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
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

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

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
            general: GeneralConfig {
                language: Some("fr".to_string()),
            },
            player: PlayerConfig {
                volume: Some(0.4),
                muted: Some(true),
                controls_hide_delay_ms: Some(2500),
                keyboard_seek_step_secs: Some(10.0),
                autoplay_visibility_threshold: Some(0.75),
            },
            viewer: ViewerConfig {
                wheel_sensitivity: Some(0.004),
                double_click_scale: Some(3.0),
            },
            api: ApiConfig {
                base_url: Some("https://api.example.test".to_string()),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[player]\nmuted = true\n").expect("failed to write toml");

        let loaded = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(loaded.player.muted, Some(true));
        assert_eq!(loaded.player.volume, Some(DEFAULT_VOLUME));
        assert_eq!(loaded.viewer, ViewerConfig::default());
        assert_eq!(loaded.api, ApiConfig::default());
    }

    #[test]
    fn load_with_override_reports_warning_on_broken_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[player\n").expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn load_with_override_without_file_is_silent_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn save_with_override_and_load_with_override_round_trip() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        let config = Config {
            general: GeneralConfig {
                language: Some("en-US".to_string()),
            },
            ..Config::default()
        };

        save_with_override(&config, Some(base_dir.clone())).expect("save");
        let (loaded, warning) = load_with_override(Some(base_dir));
        assert!(warning.is_none());
        assert_eq!(loaded.general.language.as_deref(), Some("en-US"));
    }

    #[test]
    fn player_accessors_clamp_out_of_range_values() {
        let player = PlayerConfig {
            controls_hide_delay_ms: Some(10),
            keyboard_seek_step_secs: Some(600.0),
            autoplay_visibility_threshold: Some(3.0),
            ..PlayerConfig::default()
        };
        assert_eq!(
            player.controls_hide_delay(),
            Duration::from_millis(MIN_CONTROLS_HIDE_DELAY_MS)
        );
        assert_eq!(player.keyboard_seek_step(), MAX_KEYBOARD_SEEK_STEP_SECS);
        assert_eq!(player.autoplay_threshold(), 1.0);
    }

    #[test]
    fn default_player_config_hides_controls_after_three_seconds() {
        let player = PlayerConfig::default();
        assert_eq!(player.controls_hide_delay(), Duration::from_secs(3));
    }

    #[test]
    fn resolved_base_url_trims_trailing_slash() {
        if std::env::var(ENV_API_URL).is_ok() {
            return;
        }
        let api = ApiConfig {
            base_url: Some("https://api.example.test/".to_string()),
        };
        assert_eq!(api.resolved_base_url(), "https://api.example.test");
    }
}
