//! Configuration and settings management for DrapeKit
//!
//! Provides configuration file handling and validation. Supports JSON and TOML
//! file formats stored in the platform config directory.
//!
//! Configuration is organized into sections:
//! - Gesture settings (scale floor)
//! - Canvas settings (surface origin and size)
//! - Logging settings (level, output format)

use drapekit_core::{ScreenPoint, MIN_SCALE};
use drapekit_designer::gesture::GestureConfig;
use drapekit_designer::viewport::Viewport;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, ConfigResult, SettingsError, SettingsResult};

const CONFIG_DIR_NAME: &str = "drapekit";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Gesture engine settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GestureSettings {
    /// Smallest scale a rotate/scale gesture may produce
    pub min_scale: f64,
}

impl Default for GestureSettings {
    fn default() -> Self {
        Self {
            min_scale: MIN_SCALE,
        }
    }
}

impl GestureSettings {
    /// Engine configuration for these settings.
    ///
    /// An invalid floor falls back to the default with a warning.
    pub fn to_engine_config(&self) -> GestureConfig {
        GestureConfig::new(self.min_scale).unwrap_or_else(|e| {
            tracing::warn!("{}, using default scale floor", e);
            GestureConfig::default()
        })
    }
}

/// Layout surface settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasSettings {
    /// Screen X of the surface's top-left corner
    #[serde(default)]
    pub origin_x: f64,
    /// Screen Y of the surface's top-left corner
    #[serde(default)]
    pub origin_y: f64,
    /// Surface width
    pub width: f64,
    /// Surface height
    pub height: f64,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            origin_x: 0.0,
            origin_y: 0.0,
            width: 800.0,
            height: 600.0,
        }
    }
}

impl CanvasSettings {
    pub fn to_viewport(&self) -> Viewport {
        Viewport::new(
            ScreenPoint::new(self.origin_x, self.origin_y),
            self.width,
            self.height,
        )
    }
}

/// Log output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Default filter directive, overridden by `RUST_LOG`
    pub level: String,
    /// Emit JSON lines instead of human readable output
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub gesture: GestureSettings,
    #[serde(default)]
    pub canvas: CanvasSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Toml,
}

impl Format {
    fn from_path(path: &Path) -> ConfigResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = Format::from_path(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match Format::from_path(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        let min_scale = self.gesture.min_scale;
        if !min_scale.is_finite() || min_scale < MIN_SCALE {
            return Err(SettingsError::invalid(
                "gesture.min_scale",
                format!("must be a finite value of at least {}", MIN_SCALE),
            ));
        }

        for (key, value) in [
            ("canvas.width", self.canvas.width),
            ("canvas.height", self.canvas.height),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::ValueOutOfRange {
                    key: key.to_string(),
                    value: value.to_string(),
                }
                .into());
            }
        }

        if !(self.canvas.origin_x.is_finite() && self.canvas.origin_y.is_finite()) {
            return Err(SettingsError::invalid("canvas.origin", "must be finite"));
        }

        if self.logging.level.trim().is_empty() {
            return Err(SettingsError::invalid("logging.level", "must not be empty"));
        }

        Ok(())
    }
}

/// Platform location of the config file, e.g. `~/.config/drapekit/config.toml`.
pub fn default_config_path() -> SettingsResult<PathBuf> {
    let dir = dirs::config_dir()
        .or_else(dirs::home_dir)
        .ok_or_else(|| SettingsError::ConfigDirectory("no config or home directory".to_string()))?;
    Ok(dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}
