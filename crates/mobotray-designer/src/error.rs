//! Error types for geometry export.

use std::io;
use thiserror::Error;

/// Errors that can occur while writing a tray geometry.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The requested output format is not supported.
    #[error("Unsupported geometry format: {0}")]
    UnsupportedFormat(String),

    /// I/O error while writing the output file.
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
}

/// Result type alias for export operations.
pub type ExportResult<T> = Result<T, ExportError>;
