//! # PDF Segmenter
//!
//! Splits a PDF into standalone documents at the largest vertical whitespace
//! gaps in its text layout.
//!
//! ## How it works
//!
//! - **Extraction**: [`FragmentCollector`] rides the text layout engine and
//!   records one positioned [`TextFragment`] per word, in reading order.
//! - **Detection**: [`detect_gaps`] measures the vertical whitespace before
//!   every fragment; gaps above [`MIN_GAP_HEIGHT`] become cut candidates.
//! - **Selection**: [`select_largest`] keeps the N-1 largest candidates for
//!   an N-segment split.
//! - **Partitioning**: [`partition_pages`] applies the cuts in document
//!   order; each cut ends a segment at the page its gap occurs on.
//! - **Writing**: every page group is saved as a standalone PDF named
//!   `segment_<k>.pdf`.
//!
//! Cuts are whole-page: content within a page is never redistributed.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pdf_segmenter::segment_document;
//!
//! # fn main() -> Result<(), pdf_segmenter::Error> {
//! let report = segment_document("input.pdf", "segments/", 3)?;
//! println!("{}", report.to_json()?);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

// Error handling
pub mod error;

// Fragment extraction (layout engine boundary)
pub mod extractor;

// Whitespace analysis
pub mod gaps;
pub mod segmenter;

// Segment output
pub mod writer;

// High-level API
pub mod api;

// Re-exports
pub use api::{segment_document, SegmentFile, SegmentationReport};
pub use error::{Error, Result};
pub use extractor::{extract_fragments, FragmentCollector, TextFragment};
pub use gaps::{detect_gaps, select_largest, WhitespaceGap, MIN_GAP_HEIGHT};
pub use segmenter::{partition_pages, PageGroup};
pub use writer::{segment_file_name, write_segments};

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
