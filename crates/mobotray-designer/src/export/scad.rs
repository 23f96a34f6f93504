use std::fmt::Write;

use crate::synthesizer::TrayGeometry;

/// OpenSCAD program writer.
///
/// Emits the plate as a `difference()` of the placed primitives. The cutout is
/// written as `offset(r) offset(-r) square(..)`, so OpenSCAD performs the same
/// erosion and dilation the synthesizer does. A `$fn` header carries the
/// geometry resolution.
#[derive(Debug, Clone, Default)]
pub struct ScadWriter {
    layout_names: Vec<String>,
}

impl ScadWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the merged layout names in the file header.
    pub fn with_layout_names(mut self, names: &[String]) -> Self {
        self.layout_names = names.to_vec();
        self
    }

    pub fn render(&self, geometry: &TrayGeometry) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail.
        let _ = self.write_program(&mut out, geometry);
        out
    }

    fn write_program(&self, out: &mut String, geometry: &TrayGeometry) -> std::fmt::Result {
        writeln!(out, "$fn = {};", geometry.resolution)?;
        if !self.layout_names.is_empty() {
            writeln!(out, "// Layouts: {}", self.layout_names.join(", "))?;
        }
        writeln!(
            out,
            "// Plate: {} x {} mm, {} screw holes",
            geometry.size.x,
            geometry.size.y,
            geometry.holes.len()
        )?;
        writeln!(out)?;

        writeln!(out, "difference() {{")?;
        writeln!(out, "    square([{}, {}]);", geometry.size.x, geometry.size.y)?;

        let cutout = &geometry.cutout;
        writeln!(
            out,
            "    translate([{}, {}, 0])",
            cutout.center.x, cutout.center.y
        )?;
        if cutout.corner_radius > 0.0 {
            writeln!(
                out,
                "        offset(r = {r}) offset(r = -{r}) square([{}, {}], center = true);",
                cutout.size.x,
                cutout.size.y,
                r = cutout.corner_radius
            )?;
        } else {
            writeln!(
                out,
                "        square([{}, {}], center = true);",
                cutout.size.x, cutout.size.y
            )?;
        }

        for hole in &geometry.holes {
            writeln!(out, "    translate([{}, {}, 0])", hole.x, hole.y)?;
            writeln!(out, "        circle(d = {});", geometry.hole_diameter)?;
        }
        writeln!(out, "}}")
    }
}
