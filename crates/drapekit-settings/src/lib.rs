//! DrapeKit Settings Crate
//!
//! Handles application configuration: gesture tuning, the layout surface and
//! log output.

pub mod config;
pub mod error;

pub use config::{
    default_config_path, CanvasSettings, Config, GestureSettings, LoggingSettings,
};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
