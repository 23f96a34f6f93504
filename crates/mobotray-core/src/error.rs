//! Error types for the core crate.
//!
//! Every error here is a data or configuration defect reported to the caller.
//! Nothing is retried.

use std::io;
use thiserror::Error;

/// Errors raised while loading, merging or shaping layouts.
#[derive(Error, Debug)]
pub enum LayoutError {
    /// A catalog record is missing a field or has the wrong shape.
    #[error("Malformed layout '{name}': {reason}")]
    MalformedLayout { name: String, reason: String },

    /// A selected layout name is not present in the catalog.
    #[error("Unknown layout: {name}")]
    UnknownLayout { name: String },

    /// The corner radius collapses the cutout during erosion.
    #[error(
        "Degenerate geometry: corner radius {radius} mm must be at least 0 and less than half of the {width} x {height} mm cutout"
    )]
    DegenerateGeometry { radius: f64, width: f64, height: f64 },

    /// A shaping parameter is out of its valid domain.
    #[error("Invalid value for '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// I/O error while reading layout definitions.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The layout definitions are not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LayoutError {
    pub(crate) fn malformed(name: &str, reason: impl Into<String>) -> Self {
        Self::MalformedLayout {
            name: name.to_string(),
            reason: reason.into(),
        }
    }

    /// Shorthand for [`LayoutError::InvalidParameter`].
    pub fn invalid_parameter(name: &str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, LayoutError>;
