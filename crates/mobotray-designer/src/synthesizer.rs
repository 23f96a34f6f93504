//! Shape Synthesizer
//!
//! Builds the tray plate for a merged layout: a rectangle the size of the
//! merged footprint, minus a rounded rectangular centre cutout, minus one
//! circular screw hole per merged hole.

use csgrs::sketch::Sketch;
use csgrs::traits::CSG;
use mobotray_core::{to_output_coords, LayoutError, MergedLayout, Point2D, Result};
use nalgebra::{Matrix4, Vector3};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::rounding::{rounded_rectangle_sketch, validate_corner_radius};

/// Cutout and hole parameters for a tray plate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CutoutSpec {
    /// Diameter of each screw hole (mm)
    pub screw_hole_diameter_mm: f64,
    /// Width and height of the centre cutout (mm)
    pub cutout_size_mm: Point2D,
    /// Centre of the cutout, measured from the rear-panel corner (mm)
    pub cutout_center_mm: Point2D,
    /// Corner radius of the cutout (mm)
    pub cutout_corner_radius_mm: f64,
    /// Segments per full circle in the emitted geometry
    pub geometry_resolution: usize,
}

impl Default for CutoutSpec {
    fn default() -> Self {
        Self {
            screw_hole_diameter_mm: 3.0,
            cutout_size_mm: Point2D::new(140.0, 140.0),
            cutout_center_mm: Point2D::new(85.09, 85.0),
            cutout_corner_radius_mm: 15.0,
            geometry_resolution: 64,
        }
    }
}

impl CutoutSpec {
    /// Reject parameters that would produce empty or degenerate geometry.
    pub fn validate(&self) -> Result<()> {
        if !(self.screw_hole_diameter_mm > 0.0) {
            return Err(LayoutError::invalid_parameter(
                "screw_hole_diameter_mm",
                format!("must be > 0, got {}", self.screw_hole_diameter_mm),
            ));
        }
        if !(self.cutout_size_mm.x > 0.0 && self.cutout_size_mm.y > 0.0) {
            return Err(LayoutError::invalid_parameter(
                "cutout_size_mm",
                format!("both dimensions must be > 0, got {}", self.cutout_size_mm),
            ));
        }
        if self.geometry_resolution < 3 {
            return Err(LayoutError::invalid_parameter(
                "geometry_resolution",
                format!("must be at least 3, got {}", self.geometry_resolution),
            ));
        }
        validate_corner_radius(
            self.cutout_size_mm.x,
            self.cutout_size_mm.y,
            self.cutout_corner_radius_mm,
        )
    }
}

/// The rounded cutout as placed on the plate (output frame).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedCutout {
    pub center: Point2D,
    pub size: Point2D,
    pub corner_radius: f64,
}

/// A synthesized tray plate.
///
/// Holds the flattened CSG result along with the placed primitives it was
/// built from, so writers can emit either form.
#[derive(Debug, Clone)]
pub struct TrayGeometry {
    /// Plate size; the plate spans `(0, 0)` to `size`
    pub size: Point2D,
    pub cutout: PlacedCutout,
    /// Screw hole centres (output frame)
    pub holes: Vec<Point2D>,
    pub hole_diameter: f64,
    pub resolution: usize,
    sketch: Sketch<()>,
}

impl TrayGeometry {
    pub fn sketch(&self) -> &Sketch<()> {
        &self.sketch
    }

    /// Net plate area (mm²): outer boundaries minus interior rings.
    pub fn area(&self) -> f64 {
        let mp = self.sketch.to_multipolygon();
        mp.0.iter()
            .map(|poly| {
                let outer = ring_area(poly.exterior().0.iter().map(|c| (c.x, c.y)));
                let inner: f64 = poly
                    .interiors()
                    .iter()
                    .map(|ring| ring_area(ring.0.iter().map(|c| (c.x, c.y))))
                    .sum();
                outer - inner
            })
            .sum()
    }

    /// Axis-aligned bounds as `(min_x, min_y, max_x, max_y)`.
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        let bb = CSG::bounding_box(&self.sketch);
        (bb.mins.x, bb.mins.y, bb.maxs.x, bb.maxs.y)
    }
}

fn ring_area(coords: impl Iterator<Item = (f64, f64)>) -> f64 {
    let coords: Vec<(f64, f64)> = coords.collect();
    let n = coords.len();
    if n < 3 {
        return 0.0;
    }
    let twice: f64 = (0..n)
        .map(|i| {
            let (x1, y1) = coords[i];
            let (x2, y2) = coords[(i + 1) % n];
            x1 * y2 - x2 * y1
        })
        .sum();
    (twice / 2.0).abs()
}

fn translated(sketch: Sketch<()>, at: Point2D) -> Sketch<()> {
    sketch.transform(&Matrix4::new_translation(&Vector3::new(at.x, at.y, 0.0)))
}

/// Generator for tray plates
pub struct TraySynthesizer {
    spec: CutoutSpec,
}

impl TraySynthesizer {
    pub fn new(spec: CutoutSpec) -> Self {
        Self { spec }
    }

    /// Build the plate for `merged`.
    ///
    /// Validates the parameters first; a corner radius that would collapse the
    /// cutout is reported as [`LayoutError::DegenerateGeometry`]. A merged
    /// footprint with a zero dimension (an empty selection) has no plate and
    /// is rejected as an invalid parameter.
    pub fn synthesize(&self, merged: &MergedLayout) -> Result<TrayGeometry> {
        let spec = &self.spec;
        spec.validate()?;

        let size = merged.size;
        if !(size.x > 0.0 && size.y > 0.0) {
            return Err(LayoutError::invalid_parameter(
                "footprint",
                format!("merged footprint {} has no area", size),
            ));
        }

        let plate: Sketch<()> = Sketch::rectangle(size.x, size.y, None);

        let cutout = PlacedCutout {
            center: to_output_coords(size, spec.cutout_center_mm),
            size: spec.cutout_size_mm,
            corner_radius: spec.cutout_corner_radius_mm,
        };
        let cutout_sketch = translated(
            rounded_rectangle_sketch(
                cutout.size.x,
                cutout.size.y,
                cutout.corner_radius,
                spec.geometry_resolution,
            )?,
            cutout.center,
        );
        debug!("Cutout centred at {}", cutout.center);

        let holes = merged.output_holes();
        let radius = spec.screw_hole_diameter_mm / 2.0;
        let mut hole_sketch: Sketch<()> = Sketch::new();
        for hole in &holes {
            let circle = translated(
                Sketch::circle(radius, spec.geometry_resolution, None),
                *hole,
            );
            hole_sketch = hole_sketch.union(&circle);
        }

        let mut sketch = plate.difference(&cutout_sketch);
        if !holes.is_empty() {
            sketch = sketch.difference(&hole_sketch);
        }

        info!(
            "Synthesized {} x {} mm plate with {} screw holes",
            size.x,
            size.y,
            holes.len()
        );

        Ok(TrayGeometry {
            size,
            cutout,
            holes,
            hole_diameter: spec.screw_hole_diameter_mm,
            resolution: spec.geometry_resolution,
            sketch,
        })
    }
}

/// Build the plate for `merged` with `spec`.
pub fn synthesize(merged: &MergedLayout, spec: &CutoutSpec) -> Result<TrayGeometry> {
    TraySynthesizer::new(spec.clone()).synthesize(merged)
}
