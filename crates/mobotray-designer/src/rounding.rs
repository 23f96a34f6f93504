//! Rounded rectangles by morphological offset.
//!
//! A sharp rectangle is eroded by `r` (inward parallel offset) and the result
//! dilated by `r` (outward parallel offset). Erosion keeps the corners sharp;
//! dilation sweeps them into circular arcs of radius `r`. The arcs come back
//! from `cavalier_contours` as bulge-encoded polyline segments and are
//! tessellated here.

use cavalier_contours::polyline::{PlineSource, PlineSourceMut, PlineVertex, Polyline};
use csgrs::sketch::Sketch;
use mobotray_core::{LayoutError, Result};
use std::f64::consts::TAU;

/// Bulges below this are treated as straight segments.
const BULGE_EPSILON: f64 = 1e-9;

/// Check that `radius` leaves a non-empty rectangle after erosion.
///
/// Callers must keep `0 <= radius < min(width, height) / 2`.
pub fn validate_corner_radius(width: f64, height: f64, radius: f64) -> Result<()> {
    if !(radius >= 0.0 && radius < width.min(height) / 2.0) {
        return Err(LayoutError::DegenerateGeometry {
            radius,
            width,
            height,
        });
    }
    Ok(())
}

/// Outline of a `width` x `height` rectangle centred on the origin with every
/// corner rounded to `radius`.
///
/// Returned counter-clockwise without a closing duplicate point. Each full turn
/// of arc is split into `resolution` segments.
pub fn rounded_rectangle(
    width: f64,
    height: f64,
    radius: f64,
    resolution: usize,
) -> Result<Vec<[f64; 2]>> {
    validate_corner_radius(width, height, radius)?;

    let sharp = centered_rectangle(width, height);
    if radius == 0.0 {
        return Ok(counter_clockwise(flatten(&sharp, resolution)));
    }

    // Clockwise outline: negative offsets shrink, positive offsets grow.
    let eroded = largest(sharp.parallel_offset(-radius)).ok_or(
        LayoutError::DegenerateGeometry {
            radius,
            width,
            height,
        },
    )?;
    let dilated = largest(eroded.parallel_offset(radius)).ok_or(
        LayoutError::DegenerateGeometry {
            radius,
            width,
            height,
        },
    )?;

    Ok(counter_clockwise(flatten(&dilated, resolution)))
}

/// [`rounded_rectangle`] as a CSG sketch.
pub fn rounded_rectangle_sketch(
    width: f64,
    height: f64,
    radius: f64,
    resolution: usize,
) -> Result<Sketch<()>> {
    let points = rounded_rectangle(width, height, radius, resolution)?;
    Ok(Sketch::polygon(&points, None))
}

/// Closed clockwise rectangle centred on the origin.
fn centered_rectangle(width: f64, height: f64) -> Polyline<f64> {
    let half_w = width / 2.0;
    let half_h = height / 2.0;

    let mut polyline = Polyline::new();
    polyline.add_vertex(PlineVertex::new(-half_w, -half_h, 0.0));
    polyline.add_vertex(PlineVertex::new(-half_w, half_h, 0.0));
    polyline.add_vertex(PlineVertex::new(half_w, half_h, 0.0));
    polyline.add_vertex(PlineVertex::new(half_w, -half_h, 0.0));
    polyline.set_is_closed(true);
    polyline
}

fn largest(polylines: Vec<Polyline<f64>>) -> Option<Polyline<f64>> {
    polylines
        .into_iter()
        .filter(|p| p.vertex_data.len() >= 2)
        .max_by(|a, b| a.area().abs().total_cmp(&b.area().abs()))
}

/// Expand a closed polyline into points, tessellating bulged segments.
fn flatten(polyline: &Polyline<f64>, resolution: usize) -> Vec<[f64; 2]> {
    let vertices = &polyline.vertex_data;
    let count = vertices.len();
    let mut points = Vec::with_capacity(count * 2);

    for (i, start) in vertices.iter().enumerate() {
        points.push([start.x, start.y]);
        if start.bulge.abs() > BULGE_EPSILON {
            let end = vertices[(i + 1) % count];
            push_arc(&mut points, *start, end, resolution);
        }
    }
    points
}

/// Append the interior points of the arc from `start` to `end`.
///
/// The bulge is `tan(sweep / 4)`; positive sweeps run counter-clockwise.
fn push_arc(
    points: &mut Vec<[f64; 2]>,
    start: PlineVertex<f64>,
    end: PlineVertex<f64>,
    resolution: usize,
) {
    let dx = end.x - start.x;
    let dy = end.y - start.y;
    let chord = dx.hypot(dy);
    if chord <= f64::EPSILON {
        return;
    }

    let bulge = start.bulge;
    let sweep = 4.0 * bulge.atan();

    // Signed distance from the chord midpoint to the centre, left of travel.
    let apothem = chord * (1.0 - bulge * bulge) / (4.0 * bulge);
    let cx = (start.x + end.x) / 2.0 - dy / chord * apothem;
    let cy = (start.y + end.y) / 2.0 + dx / chord * apothem;

    let radius = (start.x - cx).hypot(start.y - cy);
    let start_angle = (start.y - cy).atan2(start.x - cx);
    let steps = ((sweep.abs() / TAU) * resolution as f64).ceil().max(1.0) as usize;

    for k in 1..steps {
        let angle = start_angle + sweep * k as f64 / steps as f64;
        points.push([cx + radius * angle.cos(), cy + radius * angle.sin()]);
    }
}

fn signed_area(points: &[[f64; 2]]) -> f64 {
    let n = points.len();
    (0..n)
        .map(|i| {
            let [x1, y1] = points[i];
            let [x2, y2] = points[(i + 1) % n];
            x1 * y2 - x2 * y1
        })
        .sum::<f64>()
        / 2.0
}

fn counter_clockwise(mut points: Vec<[f64; 2]>) -> Vec<[f64; 2]> {
    if signed_area(&points) < 0.0 {
        points.reverse();
    }
    points
}
