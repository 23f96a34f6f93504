//! Layout Merger
//!
//! Reduces a selection of layouts into the smallest footprint that holds all
//! of them plus the union of their mounting holes.

use crate::catalog::{Catalog, Layout};
use crate::error::{LayoutError, Result};
use crate::transform::to_output_coords;
use crate::types::Point2D;
use std::collections::BTreeSet;
use tracing::debug;

/// Combined footprint and holes of several layouts.
///
/// `size` is the per-dimension maximum of the selected footprints, so it may
/// not match any single input. `holes` is an exact-equality set union,
/// iterated in a fixed order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergedLayout {
    pub size: Point2D,
    pub holes: BTreeSet<Point2D>,
}

impl MergedLayout {
    /// Grow the footprint to hold `layout` and add its holes.
    pub fn absorb(&mut self, layout: &Layout) {
        self.size = self.size.max(layout.size);
        self.holes.extend(layout.holes.iter().copied());
    }

    pub fn hole_count(&self) -> usize {
        self.holes.len()
    }

    /// Hole positions in the output frame for this merged footprint.
    pub fn output_holes(&self) -> Vec<Point2D> {
        self.holes
            .iter()
            .map(|hole| to_output_coords(self.size, *hole))
            .collect()
    }

    /// Drop holes that lie within `tolerance` mm (on both axes) of a hole
    /// already kept.
    ///
    /// Merging only collapses exact duplicates. This is the opt-in step for
    /// layouts authored from sources whose shared holes differ by rounding.
    /// A negative or NaN tolerance is rejected as an invalid parameter.
    pub fn coalesce_holes(&self, tolerance: f64) -> Result<MergedLayout> {
        if !(tolerance >= 0.0) {
            return Err(LayoutError::invalid_parameter(
                "tolerance",
                format!("must be >= 0, got {}", tolerance),
            ));
        }

        let mut kept: Vec<Point2D> = Vec::with_capacity(self.holes.len());
        for hole in &self.holes {
            let near = kept.iter().any(|k| {
                (k.x - hole.x).abs() < tolerance && (k.y - hole.y).abs() < tolerance
            });
            if !near {
                kept.push(*hole);
            }
        }

        if kept.len() < self.holes.len() {
            debug!(
                "Coalesced {} holes into {} (tolerance {} mm)",
                self.holes.len(),
                kept.len(),
                tolerance
            );
        }

        Ok(MergedLayout {
            size: self.size,
            holes: kept.into_iter().collect(),
        })
    }
}

/// Merge the named layouts from `catalog`.
///
/// An empty selection yields a zero footprint with no holes. The first name
/// missing from the catalog aborts the merge with
/// [`LayoutError::UnknownLayout`].
pub fn merge<S: AsRef<str>>(catalog: &Catalog, selected: &[S]) -> Result<MergedLayout> {
    let mut merged = MergedLayout::default();

    for name in selected {
        let name = name.as_ref();
        let layout = catalog
            .get(name)
            .ok_or_else(|| LayoutError::UnknownLayout {
                name: name.to_string(),
            })?;
        merged.absorb(layout);
        debug!("Merged layout {}: footprint now {}", name, merged.size);
    }

    debug!(
        "Merged {} layouts into footprint {} with {} holes",
        selected.len(),
        merged.size,
        merged.hole_count()
    );
    Ok(merged)
}
