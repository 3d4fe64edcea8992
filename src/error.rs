//! Error types for wordtally.

use crate::page_size::PageSizeError;

/// Errors that can occur while fetching or analyzing content.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The character stream is shorter than the requested position.
    ///
    /// This is an expected outcome for short documents, not a defect.
    #[error("content has {available} non-whitespace characters, position {required} requested")]
    InsufficientLength {
        /// The 1-based position that was requested.
        required: usize,
        /// How many characters the stream actually holds.
        available: usize,
    },

    /// The content source could not deliver the document.
    #[error("content unavailable: {0}")]
    ContentUnavailable(String),

    /// Invalid stride (must be > 0).
    #[error("invalid stride: {0} (must be > 0)")]
    InvalidStride(usize),

    /// Invalid page size configuration.
    #[error(transparent)]
    PageSize(#[from] PageSizeError),
}

/// Result type for wordtally operations.
pub type Result<T> = std::result::Result<T, Error>;
