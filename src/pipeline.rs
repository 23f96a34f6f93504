//! End-to-end tray generation: catalog, merge, synthesis, output file.

use anyhow::Context;
use mobotray_core::{merge, Catalog, Point2D};
use mobotray_designer::{write_geometry, GeometryFormat, TraySynthesizer};
use mobotray_settings::TrayConfig;
use std::path::PathBuf;
use tracing::info;

/// What a [`run`] produced.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    /// Merged footprint, which is also the plate size (mm)
    pub size: Point2D,
    pub hole_count: usize,
    pub output_path: PathBuf,
    pub format: GeometryFormat,
}

/// The layouts file named by `config`, or the bundled layouts.
pub fn load_catalog(config: &TrayConfig) -> anyhow::Result<Catalog> {
    match &config.layouts_path {
        Some(path) => Catalog::load_from_file(path)
            .with_context(|| format!("Failed to load layouts from {}", path.display())),
        None => Catalog::builtin().context("Bundled layout definitions are invalid"),
    }
}

/// One line per catalog layout: name, footprint and hole count.
///
/// Only `layouts_path` is read from `config`, so the rest of it need not be
/// valid.
pub fn layout_listing(config: &TrayConfig) -> anyhow::Result<Vec<String>> {
    let catalog = load_catalog(config)?;
    Ok(catalog
        .iter()
        .map(|(name, layout)| {
            format!(
                "{:<12} {} x {} mm, {} holes",
                name,
                layout.size.x,
                layout.size.y,
                layout.holes.len()
            )
        })
        .collect())
}

/// Generate the tray described by `config` and write it to its output path.
pub fn run(config: &TrayConfig) -> anyhow::Result<RunSummary> {
    config.validate().context("Invalid configuration")?;
    let format = config.resolved_output_format()?;

    let catalog = load_catalog(config)?;
    info!("Catalog has {} layouts", catalog.len());

    let mut merged = merge(&catalog, &config.selected_layouts)
        .context("Failed to merge selected layouts")?;
    info!(
        "Merged {} into {} footprint with {} holes",
        config.selected_layouts.join(", "),
        merged.size,
        merged.hole_count()
    );

    if let Some(tolerance) = config.hole_merge_tolerance_mm {
        merged = merged
            .coalesce_holes(tolerance)
            .context("Failed to coalesce screw holes")?;
        info!(
            "{} holes left after coalescing within {} mm",
            merged.hole_count(),
            tolerance
        );
    }

    let geometry = TraySynthesizer::new(config.cutout_spec())
        .synthesize(&merged)
        .context("Failed to synthesize tray")?;

    write_geometry(
        &config.output_path,
        &geometry,
        format,
        &config.selected_layouts,
    )
    .with_context(|| format!("Failed to write {}", config.output_path.display()))?;

    Ok(RunSummary {
        size: geometry.size,
        hole_count: geometry.holes.len(),
        output_path: config.output_path.clone(),
        format,
    })
}
