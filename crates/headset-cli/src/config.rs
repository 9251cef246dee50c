//! Configuration file management.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use headset_core::BridgeSettings;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Configuration file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Disable colored output
    #[serde(default)]
    pub no_color: bool,

    /// External programs and output locations
    #[serde(default)]
    pub tools: BridgeSettings,

    /// GUI-specific settings
    #[serde(default)]
    pub gui: GuiConfig,
}

/// GUI-specific configuration settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuiConfig {
    /// Theme preference: "dark" or "light"
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Send the wake key event when the window opens.
    #[serde(default = "default_true")]
    pub wake_on_launch: bool,

    /// List devices and read the battery when the window opens.
    #[serde(default = "default_true")]
    pub refresh_on_launch: bool,

    /// Initial window width.
    #[serde(default = "default_window_width")]
    pub window_width: f32,

    /// Initial window height.
    #[serde(default = "default_window_height")]
    pub window_height: f32,
}

fn default_theme() -> String {
    "dark".to_string()
}

fn default_true() -> bool {
    true
}

fn default_window_width() -> f32 {
    1000.0
}

fn default_window_height() -> f32 {
    600.0
}

impl Default for GuiConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            wake_on_launch: true,
            refresh_on_launch: true,
            window_width: default_window_width(),
            window_height: default_window_height(),
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("headset-debug")
            .join("config.toml")
    }

    /// Load config from the default location, or return default if not found
    pub fn load() -> Self {
        Self::load_from(&Self::path())
    }

    /// Load config from `path`; unreadable or malformed files fall back to defaults
    pub fn load_from(path: &Path) -> Self {
        if path.exists() {
            match fs::read_to_string(path) {
                Ok(content) => match toml::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        warn!("Failed to parse config {}: {}", path.display(), e);
                    }
                },
                Err(e) => {
                    warn!("Failed to read config {}: {}", path.display(), e);
                }
            }
        }
        Self::default()
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path())
    }

    /// Save config to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }

    /// Write a default config file, refusing to overwrite an existing one
    pub fn init_at(path: &Path) -> Result<Self> {
        if path.exists() {
            bail!("Config already exists: {}", path.display());
        }
        let config = Self::default();
        config.save_to(path)?;
        Ok(config)
    }

    /// Apply one-run overrides from the command line
    pub fn with_overrides(mut self, bridge: Option<String>, mirror: Option<String>) -> Self {
        if let Some(bridge) = bridge {
            self.tools.bridge = bridge;
        }
        if let Some(mirror) = mirror {
            self.tools.mirror_path = mirror;
        }
        self
    }
}
