//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving the default scale
//! parameters in TOML format with platform-specific directory resolution.
//! Only defaults live here; a scale being edited is never persisted.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::constants::{APP_DIR_NAME, CONFIG_DIR_ENV};
use crate::export::validate_prefix;
use crate::models::curve::{CurveType, ScaleMode};
use crate::models::scale_config::{
    ScaleConfig, DEFAULT_BASE_SIZE, DEFAULT_INTENSITY, DEFAULT_NUM_STEPS, DEFAULT_PREFIX,
};
use crate::models::viewport::ViewportParams;

/// Theme display mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Automatically detect OS theme (dark/light)
    #[default]
    #[serde(alias = "Auto")]
    Auto,
    /// Always use dark theme
    #[serde(alias = "Dark")]
    Dark,
    /// Always use light theme
    #[serde(alias = "Light")]
    Light,
}

/// Default generation parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaleDefaults {
    /// Size of the `base` step, in root units
    pub base_size: f64,
    /// Number of steps
    pub num_steps: usize,
    /// Curve or proportional table
    pub mode: ScaleMode,
    /// Curve shape
    pub curve: CurveType,
    /// Curve intensity
    pub intensity: f64,
}

impl Default for ScaleDefaults {
    fn default() -> Self {
        Self {
            base_size: DEFAULT_BASE_SIZE,
            num_steps: DEFAULT_NUM_STEPS,
            mode: ScaleMode::default(),
            curve: CurveType::default(),
            intensity: DEFAULT_INTENSITY,
        }
    }
}

/// Output preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Custom-property prefix
    pub prefix: String,
    /// Directory `export` writes to when no output path is given
    pub export_dir: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            export_dir: None,
        }
    }
}

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Theme mode preference (auto, dark, light)
    #[serde(default)]
    pub theme_mode: ThemeMode,
    /// Amount a single arrow press moves the selected step
    #[serde(default = "default_nudge")]
    pub nudge: f64,
}

/// Default nudge (0.05 root units per key press)
fn default_nudge() -> f64 {
    0.05
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme_mode: ThemeMode::default(),
            nudge: default_nudge(),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/Typescale/config.toml`
/// - macOS: `~/Library/Application Support/Typescale/config.toml`
/// - Windows: `%APPDATA%\Typescale\config.toml`
///
/// Setting `TYPESCALE_CONFIG_DIR` overrides the directory.
///
/// # Validation
///
/// - base size and intensity must be positive
/// - viewport range must be non-empty and the divisor positive
/// - prefix must be a valid custom-property fragment
/// - nudge must be positive
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Default scale parameters
    #[serde(default)]
    pub scale: ScaleDefaults,
    /// Default viewport range
    #[serde(default)]
    pub viewport: ViewportParams,
    /// Output preferences
    #[serde(default)]
    pub output: OutputConfig,
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the config directory path.
    ///
    /// Uses `TYPESCALE_CONFIG_DIR` when set, otherwise the platform config
    /// directory:
    ///
    /// - Linux: `~/.config/Typescale/`
    /// - macOS: `~/Library/Application Support/Typescale/`
    /// - Windows: `%APPDATA%\Typescale\`
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
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config = Self::from_toml(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        tracing::debug!(path = %config_path.display(), "loaded configuration");
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Invalid TOML")?;
        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let config_path = Self::config_file_path()?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, &config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        tracing::info!(path = %config_path.display(), "saved configuration");
        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        self.scale_config()
            .validate()
            .context("Invalid scale defaults")?;

        validate_prefix(&self.output.prefix).context("Invalid output prefix")?;

        if !self.ui.nudge.is_finite() || self.ui.nudge <= 0.0 {
            anyhow::bail!("ui.nudge must be a positive number, got {}", self.ui.nudge);
        }

        Ok(())
    }

    /// Builds the scale parameters these defaults describe.
    #[must_use]
    pub fn scale_config(&self) -> ScaleConfig {
        ScaleConfig {
            base_size: self.scale.base_size,
            num_steps: self.scale.num_steps,
            mode: self.scale.mode,
            curve: self.scale.curve,
            intensity: self.scale.intensity,
            viewport: self.viewport,
            prefix: self.output.prefix.clone(),
        }
    }
}
