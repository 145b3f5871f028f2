//! Pure tree-rendering core: entries in, tree text out.

pub mod error;
pub mod indent;
pub mod sequence;
pub mod size;
pub mod tree_generator;

use serde::{Deserialize, Serialize};

/// A single scanned filesystem object, as produced by the scanner.
///
/// Entries arrive in pre-order: a directory's descendants follow it directly,
/// before any of its later siblings. `depth` is relative to the scanned root,
/// so the root's children are at depth 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub name: String,
    pub depth: usize,
    pub is_directory: bool,
    #[serde(default)]
    pub size: u64,
}

impl Entry {
    pub fn file(name: impl Into<String>, depth: usize, size: u64) -> Self {
        Self {
            name: name.into(),
            depth,
            is_directory: false,
            size,
        }
    }

    pub fn directory(name: impl Into<String>, depth: usize) -> Self {
        Self {
            name: name.into(),
            depth,
            is_directory: true,
            size: 0,
        }
    }

    /// The name as shown in the tree: directories carry a trailing `/`.
    pub fn display_name(&self) -> String {
        if self.is_directory {
            format!("{}/", self.name)
        } else {
            self.name.clone()
        }
    }
}

/// Per-render options. Depth limits and exclude patterns are applied by the
/// scanner, so the renderer only needs to know about size annotations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    pub show_size: bool,
}

/// Selects the decoration applied to each tree line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputMode {
    /// Undecorated text for clipboard and file export.
    PlainText,
    /// Icons and names wrapped in `<span>` containers for on-screen display.
    Markup,
}

/// Both representations of a single render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedTree {
    pub plain_text: String,
    pub markup: String,
}

pub use error::RenderError;
pub use indent::IndentGuides;
pub use sequence::{is_last_sibling, last_sibling_flags, validate_sequence};
pub use size::format_size;
pub use tree_generator::{root_label, TreeGenerator};
