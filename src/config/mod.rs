// SPDX-License-Identifier: MPL-2.0
//! This module handles the viewer's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! The file is organized in two sections: `[viewer]` for the widget's
//! construction parameters and `[loader]` for the frame retry policy.
//!
//! # Examples
//!
//! ```no_run
//! use iced_spin::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.viewer.demo_on_load = Some(true);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

mod defaults;

pub use defaults::*;

use crate::domain::{DemoInterval, MaxAttempts, RetryDelay};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedSpin";

// =============================================================================
// Enums
// =============================================================================

/// Where drag motion keeps being tracked once a drag has started.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DragCapture {
    /// Motion anywhere in the window keeps spinning the object.
    #[default]
    Window,
    /// Only motion over the surface spins the object.
    Surface,
}

impl std::str::FromStr for DragCapture {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "window" => Ok(DragCapture::Window),
            "surface" => Ok(DragCapture::Surface),
            other => Err(Error::Config(format!(
                "unknown drag capture '{other}' (expected 'window' or 'surface')"
            ))),
        }
    }
}

// =============================================================================
// Section Structs
// =============================================================================

/// Widget construction parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ViewerConfig {
    /// Ordered frame locators. Position defines frame order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<String>,

    /// Play once through all frames right after loading.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo_on_load: Option<bool>,

    /// Delay between two demo steps, in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo_interval_ms: Option<u64>,

    /// Drag tracking policy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drag_capture: Option<DragCapture>,
}

/// Frame loader settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct LoaderConfig {
    /// Attempts per frame before giving up. Absent means retry forever.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_attempts: Option<u32>,

    /// Pause between two attempts of the same frame, in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retry_delay_ms: Option<u64>,

    /// User agent sent with frame requests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub viewer: ViewerConfig,
    #[serde(default)]
    pub loader: LoaderConfig,
}

impl Config {
    /// Demo step delay, validated.
    #[must_use]
    pub fn demo_interval(&self) -> DemoInterval {
        DemoInterval::from_millis(
            self.viewer
                .demo_interval_ms
                .unwrap_or(DEFAULT_DEMO_INTERVAL_MS),
        )
    }

    /// Retry pause, validated.
    #[must_use]
    pub fn retry_delay(&self) -> RetryDelay {
        RetryDelay::from_millis(self.loader.retry_delay_ms.unwrap_or(DEFAULT_RETRY_DELAY_MS))
    }

    /// Attempt bound, if one is configured.
    #[must_use]
    pub fn max_attempts(&self) -> Option<MaxAttempts> {
        self.loader.max_attempts.map(MaxAttempts::new)
    }

    #[must_use]
    pub fn user_agent(&self) -> &str {
        self.loader
            .user_agent
            .as_deref()
            .unwrap_or(DEFAULT_USER_AGENT)
    }
}

// =============================================================================
// Paths
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    match base_dir {
        Some(dir) => Some(dir.join(CONFIG_FILE)),
        None => dirs::config_dir().map(|mut path| {
            path.push(APP_NAME);
            path.push(CONFIG_FILE);
            path
        }),
    }
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
                        Some(format!("{}: {err}", path.display())),
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
