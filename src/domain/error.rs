//! Error types for the puzzle engine.
//!
//! None of these are fatal: the engine either rejects the request and keeps
//! its previous state, or degrades to an inert board.

use derive_more::{Display, Error};

/// Rejected engine request.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum PuzzleError {
    /// Grid with a zero-length side.
    #[display("grid must have at least one row and one column, got {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },
}

/// Failure to obtain the source image.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum LoadError {
    /// The image could not be read or decoded.
    #[display("image {path} could not be loaded: {reason}")]
    Unreadable { path: String, reason: String },

    /// The image decoded but has no pixels to cut into tiles.
    #[display("image {path} is empty")]
    Empty { path: String },
}

impl LoadError {
    pub fn unreadable(path: impl Into<String>, reason: impl ToString) -> Self {
        Self::Unreadable {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}
