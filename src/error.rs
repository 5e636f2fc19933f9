//! Error types for the segmenter.
//!
//! This module defines all error types that can occur while analyzing a
//! document's whitespace structure and writing out its segments.

/// Result type alias for segmenter operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during segmentation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The document does not contain enough significant whitespace gaps to
    /// honor the requested segment count. Raised before any output is
    /// written.
    #[error(
        "not enough whitespace to split into {requested} segments: \
         {needed} gaps needed, {available} found"
    )]
    InsufficientGaps {
        /// Number of segments the caller asked for
        requested: usize,
        /// Number of cut points that count implies (requested - 1)
        needed: usize,
        /// Number of significant gaps actually detected
        available: usize,
    },

    /// The requested segment count was zero.
    #[error("segment count must be at least 1")]
    InvalidSegmentCount,

    /// A page group referenced a page number the source document lacks
    #[error("page {0} not found in source document")]
    MissingPage(u32),

    /// Text layout extraction failed
    #[error("text extraction failed: {0}")]
    Extraction(#[from] pdf_extract::OutputError),

    /// Underlying PDF object error (load, object graph access, save)
    #[error("PDF error: {0}")]
    Pdf(#[from] pdf_extract::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Report serialization error
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
