//! Generates an ASCII representation of a directory tree.

use super::indent::{connector, IndentGuides};
use super::sequence::{last_sibling_flags, validate_sequence};
use super::size::format_size;
use super::{Entry, OutputMode, RenderError, RenderOptions, RenderedTree};

/// Plain-text output for a scan that returned nothing.
pub const EMPTY_TREE_TEXT: &str = "No files found.";
/// Root label used when no segment can be taken from the scanned path.
pub const ROOT_PLACEHOLDER: &str = "root";

const FOLDER_ICON: &str = "📁";
const FILE_ICON: &str = "📄";

/// A utility struct for generating an ASCII directory tree.
///
/// This struct is stateless and provides methods as associated functions.
/// Each call builds its own indentation state, so renders are independent
/// of one another.
pub struct TreeGenerator;

impl TreeGenerator {
    /// Renders `entries` in both plain-text and markup form.
    ///
    /// The sequence is validated first; input that breaks the pre-order depth
    /// contract is rejected rather than drawn.
    pub fn render(
        entries: &[Entry],
        root_path: &str,
        options: RenderOptions,
    ) -> Result<RenderedTree, RenderError> {
        validate_sequence(entries)?;
        tracing::debug!(
            "Rendering tree for {:?} with {} entries (show_size: {})",
            root_path,
            entries.len(),
            options.show_size
        );

        Ok(RenderedTree {
            plain_text: Self::render_validated(entries, root_path, options, OutputMode::PlainText),
            markup: Self::render_validated(entries, root_path, options, OutputMode::Markup),
        })
    }

    /// Renders `entries` in a single output mode.
    pub fn generate_tree(
        entries: &[Entry],
        root_path: &str,
        options: RenderOptions,
        mode: OutputMode,
    ) -> Result<String, RenderError> {
        validate_sequence(entries)?;
        Ok(Self::render_validated(entries, root_path, options, mode))
    }

    fn render_validated(
        entries: &[Entry],
        root_path: &str,
        options: RenderOptions,
        mode: OutputMode,
    ) -> String {
        if entries.is_empty() {
            return match mode {
                OutputMode::PlainText => EMPTY_TREE_TEXT.to_string(),
                OutputMode::Markup => String::new(),
            };
        }

        let formatter = LineFormatter { mode, options };
        let last_flags = last_sibling_flags(entries);
        let mut guides = IndentGuides::new();
        let mut result = String::new();

        formatter.write_root(&mut result, &root_label(root_path));

        for (entry, &is_last) in entries.iter().zip(&last_flags) {
            // Descendants read this flag when drawing their guides.
            guides.mark(entry.depth, is_last);
            guides.write_prefix(&mut result, entry.depth);
            result.push_str(connector(is_last));
            formatter.write_entry(&mut result, entry);
        }

        result
    }
}

/// Derives the label of the synthetic root line from the scanned path.
///
/// Takes the last non-empty segment (either separator style) and appends `/`.
/// Paths with no usable segment, such as `.` or an empty string, fall back to
/// [`ROOT_PLACEHOLDER`]; a bare filesystem root like `/` keeps its separator.
pub fn root_label(root_path: &str) -> String {
    let segment = root_path
        .split(['/', '\\'])
        .filter(|segment| !segment.is_empty() && *segment != ".")
        .last();

    match segment {
        Some(name) => format!("{name}/"),
        None => match root_path.chars().next() {
            Some(sep @ ('/' | '\\')) => sep.to_string(),
            _ => format!("{ROOT_PLACEHOLDER}/"),
        },
    }
}

/// Assembles individual lines for one output mode.
struct LineFormatter {
    mode: OutputMode,
    options: RenderOptions,
}

impl LineFormatter {
    fn write_root(&self, out: &mut String, label: &str) {
        match self.mode {
            OutputMode::PlainText => out.push_str(label),
            OutputMode::Markup => {
                out.push_str(&format!(
                    "<span class=\"tree-icon\">{FOLDER_ICON}</span> \
                     <span class=\"tree-item-name\" style=\"font-weight:bold\">{}</span>",
                    escape_markup(label)
                ));
            }
        }
        out.push('\n');
    }

    fn write_entry(&self, out: &mut String, entry: &Entry) {
        let name = entry.display_name();
        match self.mode {
            OutputMode::PlainText => out.push_str(&name),
            OutputMode::Markup => {
                let icon = if entry.is_directory { FOLDER_ICON } else { FILE_ICON };
                out.push_str(&format!(
                    "<span class=\"tree-icon\">{icon}</span> \
                     <span class=\"tree-item-name\">{}</span>",
                    escape_markup(&name)
                ));
            }
        }

        // Directories without a computed size carry no annotation.
        if self.options.show_size && !(entry.is_directory && entry.size == 0) {
            out.push_str(&format!(" ({})", format_size(entry.size)));
        }
        out.push('\n');
    }
}

/// Escapes the characters that would otherwise be read as markup.
fn escape_markup(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
