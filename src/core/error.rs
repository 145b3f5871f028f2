//! Defines the custom error type for the `core` module.

use thiserror::Error;

/// The primary error type for the `core` module.
///
/// Every variant describes input that breaks the scanner's contract. The
/// renderer never repairs such input; it reports it and stops.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// The first entry of a non-empty sequence must sit directly below the root.
    #[error("First entry must have depth 1, found depth {depth}")]
    InvalidFirstDepth { depth: usize },

    /// Depth 0 is reserved for the synthetic root label.
    #[error("Entry {index} has depth 0, which is reserved for the root")]
    ZeroDepth { index: usize },

    /// A depth that is not a positive integer, or does not fit in `usize`.
    #[error("Entry {index} has an invalid depth: {value}")]
    InvalidDepth { index: usize, value: String },

    /// Depth may only grow by one level from one entry to the next.
    #[error("Entry {index} jumps from depth {previous} to depth {depth}")]
    DepthJump {
        index: usize,
        previous: usize,
        depth: usize,
    },

    /// A size that is negative, fractional or otherwise not a byte count.
    #[error("Entry {index} has an invalid size: {value}")]
    InvalidSize { index: usize, value: String },

    /// An entry without a name cannot be drawn.
    #[error("Entry {index} has an empty name")]
    EmptyName { index: usize },
}
