//! Defines the session state of the application.

use serde::{Deserialize, Serialize};

use crate::config::TreeSettings;
use crate::core::{format_size, Entry, OutputMode, RenderError, RenderedTree, TreeGenerator};
use crate::scan::ScanResult;

/// Shown in the tree panel before anything has been scanned.
pub const TREE_PLACEHOLDER: &str =
    "Select a folder and click \"Generate Tree\" to see the file structure here.";
/// Shown in the summary when no folder is loaded.
pub const NO_FOLDER_SELECTED: &str = "No folder selected";

/// Holds the complete session state: the user's inputs, their settings and
/// the most recent scan.
///
/// Operations take the state by value or by reference and hand back a new
/// value; there is no hidden shared state. The whole struct serializes to
/// JSON so a session can be cached and replayed later without rescanning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionState {
    /// The path as typed by the user.
    pub path_input: String,
    /// The tree settings in force.
    pub settings: TreeSettings,
    /// The root path reported by the last scan.
    pub current_path: String,
    /// The entries returned by the last scan.
    pub current_files: Vec<Entry>,
    /// Sum of all entry sizes of the last scan.
    pub total_size: u64,
}

/// The figures shown above the tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanSummary {
    pub current_path: String,
    pub file_count: usize,
    pub total_size: String,
}

/// One row of the file table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRow {
    pub name: String,
    pub kind: &'static str,
    pub size: String,
    pub depth: usize,
}

impl SessionState {
    pub fn new(settings: TreeSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    pub fn has_files(&self) -> bool {
        !self.current_files.is_empty()
    }

    /// Replaces the scan data with a fresh result.
    pub fn with_scan(self, result: ScanResult) -> Self {
        let total_size = result.total_size();
        tracing::info!(
            "Loaded scan of {:?}: {} entries, {}",
            result.root_path,
            result.file_count(),
            format_size(total_size)
        );
        Self {
            current_path: result.root_path,
            current_files: result.entries,
            total_size,
            ..self
        }
    }

    pub fn with_settings(self, settings: TreeSettings) -> Self {
        Self { settings, ..self }
    }

    /// Renders the current scan in both output modes.
    pub fn render(&self) -> Result<RenderedTree, RenderError> {
        TreeGenerator::render(
            &self.current_files,
            &self.current_path,
            self.settings.render_options(),
        )
    }

    /// The markup for the tree panel, or the placeholder when nothing is loaded.
    pub fn display_markup(&self) -> Result<String, RenderError> {
        if !self.has_files() {
            return Ok(TREE_PLACEHOLDER.to_string());
        }
        TreeGenerator::generate_tree(
            &self.current_files,
            &self.current_path,
            self.settings.render_options(),
            OutputMode::Markup,
        )
    }

    /// The plain-text tree for the clipboard, or `None` if there is nothing
    /// to copy.
    pub fn clipboard_text(&self) -> Result<Option<String>, RenderError> {
        if !self.has_files() {
            return Ok(None);
        }
        TreeGenerator::generate_tree(
            &self.current_files,
            &self.current_path,
            self.settings.render_options(),
            OutputMode::PlainText,
        )
        .map(Some)
    }

    /// Drops the scan data; the path input and settings are kept.
    pub fn clear_results(self) -> Self {
        Self {
            current_path: String::new(),
            current_files: Vec::new(),
            total_size: 0,
            ..self
        }
    }

    /// Resets everything, settings included.
    pub fn clear_all(self) -> Self {
        Self::default()
    }

    pub fn summary(&self) -> ScanSummary {
        ScanSummary {
            current_path: if self.current_path.is_empty() {
                NO_FOLDER_SELECTED.to_string()
            } else {
                self.current_path.clone()
            },
            file_count: self.current_files.len(),
            total_size: format_size(self.total_size),
        }
    }

    /// Rows for the file table, in scan order.
    pub fn file_table(&self) -> Vec<FileRow> {
        self.current_files
            .iter()
            .map(|entry| FileRow {
                name: entry.name.clone(),
                kind: if entry.is_directory { "Directory" } else { "File" },
                size: format_size(entry.size),
                depth: entry.depth,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::test_helpers::entries;

    fn scanned_state() -> SessionState {
        let result = ScanResult {
            root_path: "/x/y".to_string(),
            entries: entries(&[
                ("a", 1, true, 0),
                ("b", 2, false, 100),
                ("c", 2, false, 200),
                ("d", 1, false, 50),
            ]),
        };
        SessionState::new(TreeSettings::default()).with_scan(result)
    }

    #[test]
    fn test_with_scan_computes_totals() {
        let state = scanned_state();
        assert_eq!(state.total_size, 350);
        assert_eq!(
            state.summary(),
            ScanSummary {
                current_path: "/x/y".to_string(),
                file_count: 4,
                total_size: "350 B".to_string(),
            }
        );
    }

    #[test]
    fn test_render_uses_settings() {
        let state = scanned_state();
        let rendered = state.render().unwrap();
        assert_eq!(
            rendered.plain_text,
            "y/\n├── a/\n│   ├── b (100 B)\n│   └── c (200 B)\n└── d (50 B)\n"
        );

        let hidden = state.with_settings(TreeSettings {
            show_size: false,
            ..TreeSettings::default()
        });
        assert_eq!(
            hidden.render().unwrap().plain_text,
            "y/\n├── a/\n│   ├── b\n│   └── c\n└── d\n"
        );
    }

    #[test]
    fn test_empty_state_has_nothing_to_copy() {
        let state = SessionState::default();
        assert_eq!(state.clipboard_text().unwrap(), None);
        assert_eq!(state.display_markup().unwrap(), TREE_PLACEHOLDER);
        assert_eq!(state.summary().current_path, NO_FOLDER_SELECTED);
        assert_eq!(state.summary().total_size, "0 B");
    }

    #[test]
    fn test_clear_results_keeps_inputs() {
        let mut state = scanned_state();
        state.path_input = "/x/y".to_string();
        state.settings.max_depth = 3;

        let cleared = state.clear_results();
        assert!(!cleared.has_files());
        assert_eq!(cleared.total_size, 0);
        assert_eq!(cleared.path_input, "/x/y");
        assert_eq!(cleared.settings.max_depth, 3);

        let reset = cleared.clear_all();
        assert_eq!(reset, SessionState::default());
    }

    #[test]
    fn test_file_table_rows() {
        let rows = scanned_state().file_table();
        assert_eq!(rows.len(), 4);
        assert_eq!(
            rows[0],
            FileRow {
                name: "a".to_string(),
                kind: "Directory",
                size: "0 B".to_string(),
                depth: 1,
            }
        );
        assert_eq!(rows[2].kind, "File");
        assert_eq!(rows[2].size, "200 B");
    }
}
