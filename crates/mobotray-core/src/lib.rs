//! # mobotray Core
//!
//! Core types and computations for building motherboard trays that fit
//! several mounting standards at once.
//!
//! - **Types**: [`Point2D`], the millimetre coordinate value type
//! - **Catalog**: named [`Layout`] definitions (footprint + mounting holes)
//! - **Merge**: reduction of a layout selection into one [`MergedLayout`]
//! - **Transform**: conversion from rear-panel-relative positions into the
//!   bottom-left-origin frame used by the geometry backend

pub mod catalog;
pub mod error;
pub mod merge;
pub mod transform;
pub mod types;

pub use catalog::{Catalog, Layout};
pub use error::{LayoutError, Result};
pub use merge::{merge, MergedLayout};
pub use transform::to_output_coords;
pub use types::Point2D;
