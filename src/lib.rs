// Declare all modules as public so they can be used by the binary and tests.
pub mod app;
pub mod config;
pub mod core;
pub mod scan;
pub mod utils;

pub use crate::core::{format_size, Entry, OutputMode, RenderOptions, RenderedTree, TreeGenerator};

/// Renders `entries` scanned from `root_path` into plain text and markup.
pub fn render(
    entries: &[Entry],
    root_path: &str,
    options: RenderOptions,
) -> Result<RenderedTree, crate::core::RenderError> {
    TreeGenerator::render(entries, root_path, options)
}
