//! Defines the error type for scanner interactions.

use std::path::PathBuf;
use thiserror::Error;

use crate::core::RenderError;

/// Errors raised while requesting or accepting a scan.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The request had no path to scan.
    #[error("Please enter a directory path")]
    MissingPath,

    /// The scanner answered with `success: false`.
    #[error("Scan failed: {0}")]
    Rejected(String),

    /// The returned entries break the structural contract.
    #[error("Invalid scan data: {0}")]
    Render(#[from] RenderError),

    /// Represents an I/O error, typically from reading a saved response.
    #[error("I/O error for path {1}: {0}")]
    Io(#[source] std::io::Error, PathBuf),

    /// The response was not valid JSON for the expected shape.
    #[error("Malformed scan response: {0}")]
    Json(#[from] serde_json::Error),

    /// Represents an error during the parsing of an exclude pattern.
    #[error("Invalid glob pattern: {0}")]
    GlobPattern(#[from] globset::Error),
}
