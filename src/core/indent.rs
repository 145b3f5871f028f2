//! Vertical indentation guides for tree lines.

/// Guide drawn for an ancestor level whose subtree is still open.
pub const GUIDE_OPEN: &str = "│   ";
/// Filler for an ancestor level whose subtree has already closed.
pub const GUIDE_CLOSED: &str = "    ";
/// Connector for an entry that has later siblings.
pub const CONNECTOR_BRANCH: &str = "├── ";
/// Connector for the last entry among its siblings.
pub const CONNECTOR_LAST: &str = "└── ";

/// Tracks, per depth level, whether the most recent entry seen at that level
/// was the last of its siblings.
///
/// The table grows on demand, so trees of any depth are handled. A fresh
/// instance is created for every render; nothing is shared between renders.
#[derive(Debug, Default, Clone)]
pub struct IndentGuides {
    closed: Vec<bool>,
}

impl IndentGuides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the last-sibling flag for the entry just reached at `depth`.
    ///
    /// Must be called before [`IndentGuides::write_prefix`] for the same entry
    /// so that its descendants see the correct ancestor state.
    pub fn mark(&mut self, depth: usize, is_last: bool) {
        if self.closed.len() <= depth {
            self.closed.resize(depth + 1, false);
        }
        self.closed[depth] = is_last;
    }

    /// Whether the level at `depth` has closed. Unseen levels count as open.
    pub fn is_closed(&self, depth: usize) -> bool {
        self.closed.get(depth).copied().unwrap_or(false)
    }

    /// Appends the guide prefix for an entry at `depth`: one group per
    /// ancestor level `1..depth`.
    pub fn write_prefix(&self, out: &mut String, depth: usize) {
        for level in 1..depth {
            out.push_str(if self.is_closed(level) {
                GUIDE_CLOSED
            } else {
                GUIDE_OPEN
            });
        }
    }

    pub fn prefix(&self, depth: usize) -> String {
        let mut out = String::new();
        self.write_prefix(&mut out, depth);
        out
    }
}

/// The connector glyph for an entry.
pub fn connector(is_last: bool) -> &'static str {
    if is_last {
        CONNECTOR_LAST
    } else {
        CONNECTOR_BRANCH
    }
}
