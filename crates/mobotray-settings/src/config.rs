//! Tray configuration
//!
//! Replaces module-level tunables with one explicit record that is passed to
//! the merger and the synthesizer. Supports JSON and TOML files.
//!
//! ```toml
//! selected_layouts = ["MiniITX", "MicroATX", "ATX"]
//! screw_hole_diameter_mm = 3.0
//! cutout_size_mm = [140.0, 140.0]
//! cutout_center_mm = [85.09, 85.0]
//! cutout_corner_radius_mm = 15.0
//! geometry_resolution = 64
//! output_path = "tray.scad"
//! ```

use mobotray_core::{LayoutError, Point2D};
use mobotray_designer::{CutoutSpec, GeometryFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{SettingsError, SettingsResult};

/// Complete tray configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrayConfig {
    /// Layout names to merge
    pub selected_layouts: Vec<String>,
    /// Diameter of each screw hole (mm)
    pub screw_hole_diameter_mm: f64,
    /// Width and height of the centre cutout (mm)
    pub cutout_size_mm: Point2D,
    /// Cutout centre relative to the rear-panel corner (mm)
    pub cutout_center_mm: Point2D,
    /// Cutout corner radius, below half the smaller cutout dimension (mm)
    pub cutout_corner_radius_mm: f64,
    /// Segments per full circle in the emitted geometry
    pub geometry_resolution: usize,
    /// Collapse holes closer than this (mm). Unset keeps exact dedup only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hole_merge_tolerance_mm: Option<f64>,
    /// Layout definitions file. Unset uses the bundled layouts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layouts_path: Option<PathBuf>,
    /// Where the geometry is written
    pub output_path: PathBuf,
    /// Output format. Unset infers it from `output_path`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_format: Option<GeometryFormat>,
}

impl Default for TrayConfig {
    fn default() -> Self {
        let spec = CutoutSpec::default();
        Self {
            selected_layouts: vec![
                "MiniITX".to_string(),
                "MicroATX".to_string(),
                "ATX".to_string(),
            ],
            screw_hole_diameter_mm: spec.screw_hole_diameter_mm,
            cutout_size_mm: spec.cutout_size_mm,
            cutout_center_mm: spec.cutout_center_mm,
            cutout_corner_radius_mm: spec.cutout_corner_radius_mm,
            geometry_resolution: spec.geometry_resolution,
            hole_merge_tolerance_mm: None,
            layouts_path: None,
            output_path: PathBuf::from("tray.scad"),
            output_format: None,
        }
    }
}

/// `<config dir>/mobotray/config.toml`, when the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("mobotray").join("config.toml"))
}

impl TrayConfig {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML) and validate it
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let config = Self::read_from_file(path)?;
        config.validate()?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse a config file without validating it.
    ///
    /// For callers that only need part of the configuration, such as the
    /// layouts file, and must not fail on unrelated settings.
    pub fn read_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::LoadError(format!("{}: {}", path.display(), e))
        })?;

        let config: Self = match extension(path).as_deref() {
            Some("json") => serde_json::from_str(&content)?,
            Some("toml") => toml::from_str(&content)?,
            _ => {
                return Err(SettingsError::UnsupportedFormat(format!(
                    "{} (config file must be .json or .toml)",
                    path.display()
                )))
            }
        };

        Ok(config)
    }

    /// Load `path` if given, otherwise the default config file if it exists,
    /// otherwise the built-in defaults.
    pub fn load_or_default(path: Option<&Path>) -> SettingsResult<Self> {
        match locate(path) {
            Some(path) => Self::load_from_file(&path),
            None => Ok(Self::default()),
        }
    }

    /// [`TrayConfig::load_or_default`] without validation.
    pub fn read_or_default(path: Option<&Path>) -> SettingsResult<Self> {
        match locate(path) {
            Some(path) => Self::read_from_file(&path),
            None => Ok(Self::default()),
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match extension(path).as_deref() {
            Some("json") => serde_json::to_string_pretty(self)?,
            Some("toml") => toml::to_string_pretty(self)?,
            _ => {
                return Err(SettingsError::UnsupportedFormat(format!(
                    "{} (config file must be .json or .toml)",
                    path.display()
                )))
            }
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content).map_err(|e| {
            SettingsError::SaveError(format!("{}: {}", path.display(), e))
        })?;

        info!("Saved configuration to {}", path.display());
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        if self.selected_layouts.is_empty() {
            return Err(invalid(
                "selected_layouts",
                "at least one layout must be selected",
            ));
        }

        self.cutout_spec().validate().map_err(|e| match e {
            LayoutError::DegenerateGeometry { .. } => {
                invalid("cutout_corner_radius_mm", e.to_string())
            }
            LayoutError::InvalidParameter { name, reason } => invalid(&name, reason),
            other => invalid("cutout", other.to_string()),
        })?;

        if let Some(tolerance) = self.hole_merge_tolerance_mm {
            if !(tolerance >= 0.0) {
                return Err(invalid(
                    "hole_merge_tolerance_mm",
                    format!("must be >= 0, got {}", tolerance),
                ));
            }
        }

        self.resolved_output_format()?;
        Ok(())
    }

    /// Shaping parameters for the synthesizer
    pub fn cutout_spec(&self) -> CutoutSpec {
        CutoutSpec {
            screw_hole_diameter_mm: self.screw_hole_diameter_mm,
            cutout_size_mm: self.cutout_size_mm,
            cutout_center_mm: self.cutout_center_mm,
            cutout_corner_radius_mm: self.cutout_corner_radius_mm,
            geometry_resolution: self.geometry_resolution,
        }
    }

    /// The configured output format, or the one implied by `output_path`.
    pub fn resolved_output_format(&self) -> SettingsResult<GeometryFormat> {
        match self.output_format {
            Some(format) => Ok(format),
            None => GeometryFormat::from_path(&self.output_path)
                .map_err(|e| invalid("output_path", e.to_string())),
        }
    }
}

fn locate(path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = path {
        return Some(path.to_path_buf());
    }
    match default_config_path() {
        Some(path) if path.exists() => Some(path),
        _ => {
            debug!("No configuration file, using defaults");
            None
        }
    }
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
}

fn invalid(key: &str, reason: impl Into<String>) -> SettingsError {
    SettingsError::InvalidSetting {
        key: key.to_string(),
        reason: reason.into(),
    }
}
