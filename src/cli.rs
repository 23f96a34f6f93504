//! Command line arguments

use clap::Parser;
use mobotray_designer::GeometryFormat;
use mobotray_settings::{SettingsResult, TrayConfig};
use std::path::PathBuf;

/// Generate a motherboard tray that fits several form factors at once.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "mobotray", version, about)]
pub struct Args {
    /// Configuration file (.toml or .json)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Layout definitions file (JSON); the bundled layouts are used otherwise
    #[arg(long)]
    pub layouts: Option<PathBuf>,

    /// Layout to include; repeat to merge several
    #[arg(short, long = "layout", value_name = "NAME")]
    pub layout: Vec<String>,

    /// Output file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format (scad or svg); inferred from the output file otherwise
    #[arg(short, long)]
    pub format: Option<GeometryFormat>,

    /// Collapse screw holes closer than this many millimetres
    #[arg(long, value_name = "MM")]
    pub hole_tolerance: Option<f64>,

    /// Print the available layouts and exit
    #[arg(long)]
    pub list_layouts: bool,

    /// Log as JSON lines
    #[arg(long)]
    pub json_logs: bool,
}

impl Args {
    /// Apply command line overrides on top of `config`, then revalidate.
    pub fn apply(&self, config: &mut TrayConfig) -> SettingsResult<()> {
        self.overlay(config);
        config.validate()
    }

    /// Copy the given overrides into `config` without validating it.
    pub fn overlay(&self, config: &mut TrayConfig) {
        if let Some(path) = &self.layouts {
            config.layouts_path = Some(path.clone());
        }
        if !self.layout.is_empty() {
            config.selected_layouts = self.layout.clone();
        }
        if let Some(path) = &self.output {
            config.output_path = path.clone();
        }
        if let Some(format) = self.format {
            config.output_format = Some(format);
        }
        if let Some(tolerance) = self.hole_tolerance {
            config.hole_merge_tolerance_mm = Some(tolerance);
        }
    }
}
