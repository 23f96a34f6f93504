use std::fmt::Write;

use crate::synthesizer::TrayGeometry;

/// SVG writer for the flattened plate.
///
/// The plate lives in a bottom-left origin frame with +y up while SVG user
/// space points +y down, so every y is written as `size.y - y`. Each polygon
/// ring becomes one closed subpath of a single `evenodd` path, which leaves
/// the cutout and the screw holes open.
#[derive(Debug, Clone, Copy, Default)]
pub struct SvgWriter;

impl SvgWriter {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, geometry: &TrayGeometry) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail.
        let _ = write_document(&mut out, geometry);
        out
    }
}

fn write_document(out: &mut String, geometry: &TrayGeometry) -> std::fmt::Result {
    let (width, height) = (geometry.size.x, geometry.size.y);
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}mm" height="{h}mm" viewBox="0 0 {w} {h}">"#,
        w = width,
        h = height
    )?;

    let mut path = String::new();
    let multipolygon = geometry.sketch().to_multipolygon();
    for polygon in &multipolygon.0 {
        let exterior = polygon.exterior().0.iter().map(|c| (c.x, c.y));
        write_ring(&mut path, exterior, height)?;
        for interior in polygon.interiors() {
            write_ring(&mut path, interior.0.iter().map(|c| (c.x, c.y)), height)?;
        }
    }

    writeln!(
        out,
        r#"  <path fill="black" fill-rule="evenodd" d="{}"/>"#,
        path.trim_end()
    )?;
    writeln!(out, "</svg>")
}

/// Append one closed subpath, flipping y about the plate height.
fn write_ring(
    path: &mut String,
    ring: impl Iterator<Item = (f64, f64)>,
    height: f64,
) -> std::fmt::Result {
    let mut points: Vec<(f64, f64)> = ring.collect();
    if points.len() > 1 && points.first() == points.last() {
        points.pop();
    }
    if points.len() < 3 {
        return Ok(());
    }

    for (i, (x, y)) in points.iter().enumerate() {
        let command = if i == 0 { 'M' } else { 'L' };
        write!(path, "{} {:.3} {:.3} ", command, x, height - y)?;
    }
    write!(path, "Z ")
}

/// Render `geometry` as an SVG document.
pub fn to_svg(geometry: &TrayGeometry) -> String {
    SvgWriter::new().render(geometry)
}
