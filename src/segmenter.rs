//! Page partitioning at selected cut points.
//!
//! Selected gaps arrive in height order; partitioning puts them back into
//! document order and walks the page range once, closing a group at every
//! cut. Cuts are whole-page: a gap on page `p` ends the current group with
//! page `p` included.

use crate::gaps::WhitespaceGap;

/// A contiguous, non-empty run of 0-based page indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageGroup {
    /// First page of the group (0-based, inclusive)
    pub first_page: usize,
    /// Last page of the group (0-based, inclusive)
    pub last_page: usize,
}

impl PageGroup {
    /// Number of pages in the group, always at least 1.
    pub fn page_count(&self) -> usize {
        self.last_page - self.first_page + 1
    }

    /// Iterates the group's page indices in order.
    pub fn pages(&self) -> std::ops::RangeInclusive<usize> {
        self.first_page..=self.last_page
    }
}

/// Splits `0..total_pages` into contiguous groups at the selected gaps.
///
/// Gaps are applied in document order (ascending `page_index`, ties by
/// ascending `sequence_index`) regardless of the order they are passed in.
/// Each applied gap closes the current group at `gap.page_index` inclusive.
/// A gap pointing at a page the cursor has already passed (a second cut on
/// the same page) is skipped so that no empty group is ever produced. Pages
/// after the last cut form a final group only when at least one remains.
///
/// Callers must only pass gaps whose `page_index` is below `total_pages`;
/// gaps come from fragments, and every fragment belongs to a real page.
pub fn partition_pages(total_pages: usize, selected: &[WhitespaceGap]) -> Vec<PageGroup> {
    let mut ordered: Vec<&WhitespaceGap> = selected.iter().collect();
    ordered.sort_by_key(|gap| (gap.page_index, gap.sequence_index));

    let mut groups = Vec::new();
    let mut cursor = 0;

    for gap in ordered {
        if gap.page_index < cursor {
            continue;
        }
        groups.push(PageGroup {
            first_page: cursor,
            last_page: gap.page_index,
        });
        cursor = gap.page_index + 1;
    }

    if cursor < total_pages {
        groups.push(PageGroup {
            first_page: cursor,
            last_page: total_pages - 1,
        });
    }

    log::debug!(
        "partitioned {} pages into {} groups",
        total_pages,
        groups.len()
    );
    groups
}
