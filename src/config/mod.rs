pub mod settings;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::core::RenderOptions;

/// Sentinel for "no depth limit", as understood by the scanner.
pub const UNLIMITED_DEPTH: i32 = -1;

/// User-adjustable tree settings.
///
/// `max_depth` and `exclude_patterns` are forwarded to the scanner; only
/// `show_size` affects rendering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TreeSettings {
    pub show_size: bool,
    pub max_depth: i32,
    pub exclude_patterns: Vec<String>,
}

impl TreeSettings {
    pub fn load() -> Result<Self> {
        settings::load_settings(None)
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            show_size: self.show_size,
        }
    }

    /// The depth limit, or `None` when unlimited.
    pub fn depth_limit(&self) -> Option<u32> {
        u32::try_from(self.max_depth).ok().filter(|depth| *depth > 0)
    }
}

impl Default for TreeSettings {
    fn default() -> Self {
        Self {
            show_size: true,
            max_depth: UNLIMITED_DEPTH,
            exclude_patterns: Vec::new(),
        }
    }
}

/// Splits a comma-separated pattern list, trimming blanks and dropping empties.
pub fn parse_exclude_patterns(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|pattern| !pattern.is_empty())
        .map(str::to_string)
        .collect()
}

/// Joins patterns back into the form shown in the settings field.
pub fn display_exclude_patterns(patterns: &[String]) -> String {
    patterns.join(", ")
}

/// Parses the max-depth field. Anything that is not a positive integer means
/// unlimited.
pub fn parse_max_depth(input: &str) -> i32 {
    match input.trim().parse::<i32>() {
        Ok(depth) if depth > 0 => depth,
        _ => UNLIMITED_DEPTH,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_exclude_patterns() {
        assert_eq!(
            parse_exclude_patterns(" node_modules, *.log,,  .git ,"),
            vec!["node_modules", "*.log", ".git"]
        );
        assert!(parse_exclude_patterns("  ").is_empty());
    }

    #[test]
    fn test_exclude_patterns_round_trip_through_display() {
        let patterns = parse_exclude_patterns("target,*.tmp");
        assert_eq!(display_exclude_patterns(&patterns), "target, *.tmp");
        assert_eq!(
            parse_exclude_patterns(&display_exclude_patterns(&patterns)),
            patterns
        );
    }

    #[test]
    fn test_parse_max_depth() {
        assert_eq!(parse_max_depth("3"), 3);
        assert_eq!(parse_max_depth(" 12 "), 12);
        assert_eq!(parse_max_depth("0"), UNLIMITED_DEPTH);
        assert_eq!(parse_max_depth("-4"), UNLIMITED_DEPTH);
        assert_eq!(parse_max_depth("deep"), UNLIMITED_DEPTH);
        assert_eq!(parse_max_depth(""), UNLIMITED_DEPTH);
    }

    #[test]
    fn test_defaults_and_depth_limit() {
        let settings = TreeSettings::default();
        assert!(settings.show_size);
        assert_eq!(settings.depth_limit(), None);
        assert!(settings.render_options().show_size);

        let limited = TreeSettings {
            max_depth: 2,
            ..TreeSettings::default()
        };
        assert_eq!(limited.depth_limit(), Some(2));
    }
}
