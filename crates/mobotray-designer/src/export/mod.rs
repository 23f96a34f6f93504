//! Geometry writers.
//!
//! The tray can be written as an OpenSCAD program (a CSG tree of the placed
//! primitives) or as an SVG of the flattened plate. Both keep the plate's
//! bottom-left origin: the SVG writer flips y into SVG's top-down user space.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use tracing::info;

use crate::error::{ExportError, ExportResult};
use crate::synthesizer::TrayGeometry;

mod scad;
mod svg;

pub use scad::ScadWriter;
pub use svg::{to_svg, SvgWriter};

/// Output file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeometryFormat {
    /// OpenSCAD source
    Scad,
    /// Scalable Vector Graphics
    Svg,
}

impl GeometryFormat {
    /// Infer the format from a file extension.
    pub fn from_path(path: &Path) -> ExportResult<Self> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| {
                ExportError::UnsupportedFormat(format!("{} has no extension", path.display()))
            })?;
        ext.parse()
    }
}

impl FromStr for GeometryFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "scad" | "openscad" => Ok(Self::Scad),
            "svg" => Ok(Self::Svg),
            other => Err(ExportError::UnsupportedFormat(other.to_string())),
        }
    }
}

impl std::fmt::Display for GeometryFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Scad => write!(f, "OpenSCAD"),
            Self::Svg => write!(f, "SVG"),
        }
    }
}

/// Render `geometry` as text in `format`.
///
/// `layout_names` is recorded as a comment where the format allows it.
pub fn render_geometry(
    geometry: &TrayGeometry,
    format: GeometryFormat,
    layout_names: &[String],
) -> String {
    match format {
        GeometryFormat::Scad => ScadWriter::new()
            .with_layout_names(layout_names)
            .render(geometry),
        GeometryFormat::Svg => to_svg(geometry),
    }
}

/// Render `geometry` and write it to `path`.
pub fn write_geometry(
    path: &Path,
    geometry: &TrayGeometry,
    format: GeometryFormat,
    layout_names: &[String],
) -> ExportResult<()> {
    let content = render_geometry(geometry, format, layout_names);
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    info!("Wrote {} geometry to {}", format, path.display());
    Ok(())
}
