//! # mobotray Designer
//!
//! Turns a merged layout into a flat tray plate and writes it out.
//!
//! - **Rounding**: rounded-rectangle outlines built by eroding and then
//!   dilating a sharp rectangle with `cavalier_contours` parallel offsets
//! - **Synthesizer**: plate, centre cutout and screw holes combined with
//!   `csgrs` boolean operations
//! - **Export**: OpenSCAD and SVG writers

pub mod error;
pub mod export;
pub mod rounding;
pub mod synthesizer;

pub use error::{ExportError, ExportResult};
pub use export::{render_geometry, write_geometry, GeometryFormat, ScadWriter, SvgWriter};
pub use rounding::{rounded_rectangle, rounded_rectangle_sketch, validate_corner_radius};
pub use synthesizer::{synthesize, CutoutSpec, PlacedCutout, TrayGeometry, TraySynthesizer};
