//! mobotray Settings Crate
//!
//! Handles tray configuration: defaults, JSON/TOML persistence and validation.

pub mod config;
pub mod error;

pub use config::{default_config_path, TrayConfig};
pub use error::{SettingsError, SettingsResult};
