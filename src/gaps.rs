//! Whitespace gap detection and selection.
//!
//! A gap is the vertical distance between the bottom of one text fragment and
//! the top of the next in reading order. Gaps larger than [`MIN_GAP_HEIGHT`]
//! are candidate cut points; the selector keeps the largest N of them.

use std::cmp::Ordering;

use crate::extractor::TextFragment;

/// Significance threshold in page units. Gaps must be STRICTLY larger than
/// this to become cut candidates; anything at or below it is ordinary line
/// spacing.
pub const MIN_GAP_HEIGHT: f32 = 5.0;

/// A significant vertical whitespace gap between two consecutive fragments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WhitespaceGap {
    /// Measured vertical extent of the gap, always > [`MIN_GAP_HEIGHT`]
    pub height: f32,
    /// Page of the fragment FOLLOWING the gap (0-based)
    pub page_index: usize,
    /// Position of the following fragment in the extraction stream.
    /// Traceability and tie-breaking only, never geometry.
    pub sequence_index: usize,
}

/// Measures the vertical gap preceding every fragment after the first and
/// returns the significant ones in detection order.
///
/// Fragments must arrive in reading order. The first fragment only seeds the
/// running state. For each following fragment the gap is:
///
/// - same page as the previous fragment: `top_y - previous bottom`
///   (`bottom = top_y + height`);
/// - page crossed: the fragment's raw `top_y`, i.e. its distance from the
///   top edge of the new page.
///
/// Overlapping fragments measure a negative gap and are never emitted, but
/// they still advance the running state like any other fragment.
pub fn detect_gaps(fragments: &[TextFragment]) -> Vec<WhitespaceGap> {
    let mut gaps = Vec::new();
    let Some(first) = fragments.first() else {
        return gaps;
    };

    let mut last_bottom = first.top_y + first.height;
    let mut last_page = first.page_index;

    for (sequence_index, fragment) in fragments.iter().enumerate().skip(1) {
        let height = if fragment.page_index == last_page {
            fragment.top_y - last_bottom
        } else {
            fragment.top_y
        };

        if height > MIN_GAP_HEIGHT {
            gaps.push(WhitespaceGap {
                height,
                page_index: fragment.page_index,
                sequence_index,
            });
        }

        last_bottom = fragment.top_y + fragment.height;
        last_page = fragment.page_index;
    }

    log::debug!(
        "detected {} significant gaps across {} fragments",
        gaps.len(),
        fragments.len()
    );
    gaps
}

/// Returns the `count` largest gaps, height-descending.
///
/// The sort is stable, so gaps of equal height keep their detection order.
/// When fewer than `count` gaps exist the whole input is returned; callers
/// that require exactly `count` must check beforehand.
pub fn select_largest(mut gaps: Vec<WhitespaceGap>, count: usize) -> Vec<WhitespaceGap> {
    gaps.sort_by(|a, b| {
        b.height
            .partial_cmp(&a.height)
            .unwrap_or(Ordering::Equal)
    });
    gaps.truncate(count);
    log::debug!("selected {} cut candidates", gaps.len());
    gaps
}
