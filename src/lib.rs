//! # mobotray
//!
//! Generates a motherboard tray that fits several mounting standards at once.
//!
//! ## Architecture
//!
//! mobotray is organized as a workspace with multiple crates:
//!
//! 1. **mobotray-core** - Point2D, layout catalog, layout merging, coordinate transforms
//! 2. **mobotray-designer** - Plate synthesis (rounded cutout, screw holes) and writers
//! 3. **mobotray-settings** - Configuration loading, saving and validation
//! 4. **mobotray** - CLI binary and the end-to-end pipeline

pub mod cli;
pub mod pipeline;

pub use mobotray_core::{
    merge, to_output_coords, Catalog, Layout, LayoutError, MergedLayout, Point2D,
};
pub use mobotray_designer::{
    synthesize, write_geometry, CutoutSpec, GeometryFormat, TrayGeometry, TraySynthesizer,
};
pub use mobotray_settings::TrayConfig;
pub use pipeline::{layout_listing, load_catalog, run, RunSummary};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("MOBOTRAY_BUILD_DATE");

/// Initialize logging
///
/// Sets up structured logging on stderr with:
/// - RUST_LOG environment variable support (defaults to INFO)
/// - Human-readable output, or JSON lines when `json` is set
pub fn init_logging(json: bool) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(tracing::Level::INFO.to_string()));

    let registry = tracing_subscriber::registry().with(env_filter);

    if json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true)
                    .with_line_number(true),
            )
            .try_init()?;
    }

    Ok(())
}
