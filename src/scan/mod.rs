//! The contract with the external scanner service.
//!
//! The scanner walks the filesystem, applies depth limits and exclude
//! patterns, and answers with a flat pre-order list of entries. This module
//! describes the request it expects, the response it sends back, and turns
//! that response into validated [`Entry`] values for the renderer.

pub mod error;
pub mod source;

use globset::Glob;
use serde::{Deserialize, Serialize};

use crate::config::TreeSettings;
use crate::core::{validate_sequence, Entry, RenderError};

pub use error::ScanError;
pub use source::{ReplaySource, ScanSource};

/// Body of a scan request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanRequest {
    pub path: String,
    pub show_size: bool,
    /// Always `true`; kept for wire compatibility with the scanner.
    pub human_readable: bool,
    /// `-1` means unlimited.
    pub max_depth: i32,
    pub exclude_patterns: Vec<String>,
}

impl ScanRequest {
    /// Builds a request for `path` from the user's settings.
    ///
    /// Rejects an empty path and any exclude pattern that does not compile as
    /// a glob, so the scanner never receives a request it cannot honor.
    pub fn from_settings(path: &str, settings: &TreeSettings) -> Result<Self, ScanError> {
        let path = path.trim();
        if path.is_empty() {
            return Err(ScanError::MissingPath);
        }

        for pattern in &settings.exclude_patterns {
            Glob::new(pattern)?;
        }

        Ok(Self {
            path: path.to_string(),
            show_size: settings.show_size,
            human_readable: true,
            max_depth: settings.max_depth,
            exclude_patterns: settings.exclude_patterns.clone(),
        })
    }
}

/// One entry as it appears on the wire.
///
/// Depth and size are kept as raw JSON numbers until validation so that
/// negative or fractional values can be reported instead of failing
/// deserialization with an opaque message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireEntry {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    pub is_directory: bool,
    pub depth: serde_json::Number,
    #[serde(default = "zero")]
    pub size: serde_json::Number,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_formatted: Option<String>,
}

fn zero() -> serde_json::Number {
    serde_json::Number::from(0u64)
}

/// The scanner's response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub file_count: usize,
    #[serde(default)]
    pub files: Vec<WireEntry>,
}

impl ScanResponse {
    /// Validates the response and converts it into a [`ScanResult`].
    pub fn into_result(self) -> Result<ScanResult, ScanError> {
        if !self.success {
            return Err(ScanError::Rejected(self.message));
        }

        let entries = self
            .files
            .into_iter()
            .enumerate()
            .map(|(index, wire)| wire.into_entry(index))
            .collect::<Result<Vec<_>, _>>()?;
        validate_sequence(&entries)?;

        if self.file_count != entries.len() {
            tracing::warn!(
                "Scanner reported {} entries but sent {}",
                self.file_count,
                entries.len()
            );
        }

        Ok(ScanResult {
            root_path: self.path,
            entries,
        })
    }
}

impl WireEntry {
    fn into_entry(self, index: usize) -> Result<Entry, RenderError> {
        let invalid_depth = || RenderError::InvalidDepth {
            index,
            value: self.depth.to_string(),
        };
        let depth = match self.depth.as_u64() {
            Some(0) => return Err(RenderError::ZeroDepth { index }),
            Some(depth) => usize::try_from(depth).map_err(|_| invalid_depth())?,
            None => return Err(invalid_depth()),
        };
        let size = self.size.as_u64().ok_or_else(|| RenderError::InvalidSize {
            index,
            value: self.size.to_string(),
        })?;

        Ok(Entry {
            name: self.name,
            depth,
            is_directory: self.is_directory,
            size,
        })
    }
}

/// A validated scan, ready to be rendered or cached.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResult {
    pub root_path: String,
    pub entries: Vec<Entry>,
}

impl ScanResult {
    pub fn file_count(&self) -> usize {
        self.entries.len()
    }

    /// Sum of all entry sizes in bytes.
    pub fn total_size(&self) -> u64 {
        self.entries
            .iter()
            .fold(0u64, |sum, entry| sum.saturating_add(entry.size))
    }
}
