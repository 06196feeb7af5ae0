// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language, theme mode, and touch input
//! - `[sheet]` - Bottom sheet behavior (auto-peek)
//!
//! # Examples
//!
//! ```no_run
//! use vox_journal::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning key)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.general.language = Some("ru".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "VoxJournal";

/// Delay before the closed sheet auto-reveals its peek strip, in milliseconds.
pub const DEFAULT_AUTO_PEEK_DELAY_MS: u64 = 1000;

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "ru").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,

    /// Whether the app runs on a touch form factor. Enables sheet drag
    /// gestures and the auto-peek reveal. Defaults to off (desktop).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub touch_input: Option<bool>,
}

/// Bottom sheet behavior settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SheetConfig {
    /// Whether the sheet auto-reveals to peek shortly after startup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_peek: Option<bool>,

    /// Auto-peek delay in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_peek_delay_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub sheet: SheetConfig,
}

impl Config {
    /// Effective auto-peek delay, falling back to the default.
    #[must_use]
    pub fn auto_peek_delay_ms(&self) -> u64 {
        self.sheet
            .auto_peek_delay_ms
            .unwrap_or(DEFAULT_AUTO_PEEK_DELAY_MS)
    }

    /// Whether auto-peek is enabled (on by default).
    #[must_use]
    pub fn auto_peek_enabled(&self) -> bool {
        self.sheet.auto_peek.unwrap_or(true)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default location.
///
/// Returns a tuple of (config, optional warning key). A malformed file
/// degrades to defaults with a warning key the UI can translate, so a
/// hand-edited settings file never prevents startup.
#[must_use]
pub fn load() -> (Config, Option<String>) {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    (Config::default(), None)
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

#[must_use]
pub fn load_from_path(path: &Path) -> (Config, Option<String>) {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(_) => return (Config::default(), Some("warning-config-read".to_string())),
    };

    match toml::from_str(&content) {
        Ok(config) => (config, None),
        Err(_) => (
            Config::default(),
            Some("warning-config-invalid".to_string()),
        ),
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
