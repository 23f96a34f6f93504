//! Coordinate Transformer
//!
//! Layout positions are measured from the rear-panel corner of the footprint.
//! The geometry backend places its origin at the bottom-left corner with +x
//! right and +y up. The transform mirrors both axes against the *merged*
//! footprint size, so a hole from a smaller board keeps its physical offset
//! from the rear-panel corner of the larger plate.

use crate::types::Point2D;

/// Convert a rear-panel-relative `point` into the output frame of a footprint
/// of size `merged_size`.
///
/// Always pass the final merged size, never the size of the layout the point
/// came from.
pub fn to_output_coords(merged_size: Point2D, point: Point2D) -> Point2D {
    Point2D::new(merged_size.x - point.x, merged_size.y - point.y)
}
