//! High-level segmentation entry point.
//!
//! [`segment_document`] wires the pipeline together: load, extract
//! fragments, detect and select gaps, partition pages, write segments.
//! Validation happens before anything touches the output directory.

use std::path::{Path, PathBuf};

use pdf_extract::Document;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::extractor::extract_fragments;
use crate::gaps::{detect_gaps, select_largest};
use crate::segmenter::partition_pages;
use crate::writer::write_segments;

/// One written segment file and the source pages it contains.
///
/// Page indices are 0-based positions in the SOURCE document; file names are
/// 1-based (`segment_1.pdf` holds the first group).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentFile {
    /// Path of the written file
    pub path: PathBuf,
    /// First source page in the segment (0-based)
    pub first_page: usize,
    /// Last source page in the segment (0-based, inclusive)
    pub last_page: usize,
    /// Number of pages in the segment
    pub page_count: usize,
}

/// Summary of a segmentation run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SegmentationReport {
    /// Written segments in output order. Empty when the document carried no
    /// extractable text and nothing was written.
    pub segments: Vec<SegmentFile>,
}

impl SegmentationReport {
    /// True when the run wrote no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Export to JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Splits the PDF at `input` into `segment_count` standalone documents
/// written to `output_dir`.
///
/// Cut points are the `segment_count - 1` largest vertical whitespace gaps
/// in the document's text layout; each cut ends a segment at the page the
/// gap occurs on. A document without extractable text logs a warning and
/// returns an empty report without writing anything. A document with fewer
/// significant gaps than needed fails with [`Error::InsufficientGaps`]
/// before any file is written.
///
/// # Example
///
/// ```no_run
/// use pdf_segmenter::segment_document;
///
/// let report = segment_document("report.pdf", "out", 3)?;
/// for segment in &report.segments {
///     println!("{} ({} pages)", segment.path.display(), segment.page_count);
/// }
/// # Ok::<(), pdf_segmenter::Error>(())
/// ```
pub fn segment_document(
    input: impl AsRef<Path>,
    output_dir: impl AsRef<Path>,
    segment_count: usize,
) -> Result<SegmentationReport> {
    if segment_count == 0 {
        return Err(Error::InvalidSegmentCount);
    }
    let input = input.as_ref();

    let doc = Document::load(input)?;
    let fragments = extract_fragments(&doc)?;
    if fragments.is_empty() {
        log::warn!("no text content extracted from {}", input.display());
        return Ok(SegmentationReport::default());
    }

    let gaps = detect_gaps(&fragments);
    let needed = segment_count - 1;
    if gaps.len() < needed {
        return Err(Error::InsufficientGaps {
            requested: segment_count,
            needed,
            available: gaps.len(),
        });
    }

    let selected = select_largest(gaps, needed);
    let total_pages = doc.get_pages().len();
    let groups = partition_pages(total_pages, &selected);
    let paths = write_segments(&doc, &groups, output_dir.as_ref())?;

    let segments = groups
        .iter()
        .zip(paths)
        .map(|(group, path)| SegmentFile {
            path,
            first_page: group.first_page,
            last_page: group.last_page,
            page_count: group.page_count(),
        })
        .collect();
    Ok(SegmentationReport { segments })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_segment_count_is_rejected_before_io() {
        // The input path does not exist; validation must fire first.
        let result = segment_document("/nonexistent/input.pdf", "/nonexistent/out", 0);
        assert!(matches!(result, Err(Error::InvalidSegmentCount)));
    }

    #[test]
    fn test_missing_input_is_reported() {
        let result = segment_document("/nonexistent/input.pdf", "/nonexistent/out", 1);
        assert!(result.is_err());
    }

    #[test]
    fn test_report_to_json_includes_page_ranges() {
        let report = SegmentationReport {
            segments: vec![SegmentFile {
                path: PathBuf::from("out/segment_1.pdf"),
                first_page: 0,
                last_page: 2,
                page_count: 3,
            }],
        };
        let json = report.to_json().unwrap();
        assert!(json.contains("segment_1.pdf"));
        assert!(json.contains("\"first_page\": 0"));
        assert!(json.contains("\"page_count\": 3"));
    }

    #[test]
    fn test_empty_report_is_empty() {
        assert!(SegmentationReport::default().is_empty());
    }
}
