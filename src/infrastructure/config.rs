// src/infrastructure/config.rs
use crate::constants::{APP_DIR_NAME, CONFIG_FILE_NAME};
use crate::domain::Theme;
use crate::infrastructure::markdown::RenderOptions;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// TOML configuration for mdnotes
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub appearance: AppearanceConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct StorageConfig {
    /// Empty means the platform data directory.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct RenderConfig {
    #[serde(default = "default_true")]
    pub line_breaks: bool,
    #[serde(default = "default_true")]
    pub gfm: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct AppearanceConfig {
    /// "light", "dark", or empty to follow the terminal.
    #[serde(default = "default_theme")]
    pub default_theme: String,
}

// Default value functions
fn default_data_dir() -> String { String::new() }
fn default_true() -> bool { true }
fn default_theme() -> String { String::new() }

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            line_breaks: default_true(),
            gfm: default_true(),
        }
    }
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            default_theme: default_theme(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .context("Failed to read config file")?;

        let config: Config = toml::from_str(&content)
            .context("Failed to parse TOML config")?;

        Ok(config)
    }

    /// Load configuration, or defaults when the file does not exist
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            debug!(?path, "Loading config");
            Self::load(path)
        } else {
            debug!(?path, "No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Save configuration to TOML file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .context("Failed to serialize config to TOML")?;

        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        std::fs::write(path.as_ref(), toml_string)
            .context("Failed to write config file")?;

        Ok(())
    }

    /// Create default configuration file at path
    pub fn create_default(path: impl AsRef<Path>) -> Result<Self> {
        let config = Self::default();
        config.save(path)?;
        Ok(config)
    }

    /// `<config_dir>/mdnotes/config.toml`
    pub fn default_path() -> Result<PathBuf> {
        let base = dirs::config_dir().context("Could not find config directory")?;
        Ok(base.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Data directory: explicit override, then config, then `<data_dir>/mdnotes`.
    pub fn resolve_data_dir(&self, cli_override: Option<&Path>) -> Result<PathBuf> {
        if let Some(dir) = cli_override {
            return Ok(dir.to_path_buf());
        }
        if !self.storage.data_dir.trim().is_empty() {
            return Ok(PathBuf::from(self.storage.data_dir.trim()));
        }
        let base = dirs::data_dir().context("Could not find data directory")?;
        Ok(base.join(APP_DIR_NAME))
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            line_breaks: self.render.line_breaks,
            gfm: self.render.gfm,
        }
    }

    /// Theme to use until one has been stored; unknown values fall back to
    /// terminal detection.
    pub fn ambient_theme(&self) -> Theme {
        self.appearance
            .default_theme
            .parse()
            .unwrap_or_else(|_| Theme::detect())
    }
}
