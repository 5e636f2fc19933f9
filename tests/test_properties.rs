//! Pipeline invariants over synthetic fragment streams.
//!
//! These properties hold for every fragment stream, not just well-behaved
//! documents: fragments may overlap, share coordinates, or skip pages, and
//! the partition must still account for every page exactly once.

use pdf_segmenter::{
    detect_gaps, partition_pages, select_largest, PageGroup, TextFragment, WhitespaceGap,
    MIN_GAP_HEIGHT,
};
use proptest::prelude::*;

/// Streams of up to 80 fragments over up to a handful of pages. Page indices
/// are nondecreasing with occasional jumps, like engine output for documents
/// with empty pages.
fn fragment_stream() -> impl Strategy<Value = Vec<TextFragment>> {
    prop::collection::vec((0.0f32..800.0, 1.0f32..40.0, 0usize..3), 0..80).prop_map(|raw| {
        let mut page_index = 0;
        raw.into_iter()
            .map(|(top_y, height, step)| {
                page_index += step;
                TextFragment {
                    top_y,
                    height,
                    page_index,
                }
            })
            .collect()
    })
}

fn total_pages(fragments: &[TextFragment]) -> usize {
    fragments.last().map(|f| f.page_index + 1).unwrap_or(0)
}

proptest! {
    #[test]
    fn prop_groups_reconstruct_the_page_range(
        fragments in fragment_stream(),
        count in 0usize..6,
    ) {
        let total = total_pages(&fragments);
        let selected = select_largest(detect_gaps(&fragments), count);
        let groups = partition_pages(total, &selected);

        let pages: Vec<usize> = groups.iter().flat_map(PageGroup::pages).collect();
        prop_assert_eq!(pages, (0..total).collect::<Vec<_>>());
    }

    #[test]
    fn prop_group_count_follows_applied_cuts(
        fragments in fragment_stream(),
        count in 0usize..6,
    ) {
        let total = total_pages(&fragments);
        let selected = select_largest(detect_gaps(&fragments), count);
        let groups = partition_pages(total, &selected);

        // One group per distinct cut page, plus a trailing group unless the
        // last cut consumed the final page.
        let mut cut_pages: Vec<usize> = selected.iter().map(|g| g.page_index).collect();
        cut_pages.sort_unstable();
        cut_pages.dedup();
        let trailing = match cut_pages.last() {
            Some(&last) if last + 1 >= total => 0,
            _ if total == 0 => 0,
            _ => 1,
        };
        prop_assert_eq!(groups.len(), cut_pages.len() + trailing);
    }

    #[test]
    fn prop_no_selected_gap_at_or_below_threshold(
        fragments in fragment_stream(),
        count in 0usize..6,
    ) {
        let selected = select_largest(detect_gaps(&fragments), count);
        prop_assert!(selected.iter().all(|gap| gap.height > MIN_GAP_HEIGHT));
    }

    #[test]
    fn prop_selection_reordered_equals_document_order_filter(
        fragments in fragment_stream(),
        count in 0usize..6,
    ) {
        let candidates = detect_gaps(&fragments);
        let mut selected = select_largest(candidates.clone(), count);
        selected.sort_by_key(|gap| (gap.page_index, gap.sequence_index));

        // Sequence indices are unique, so they identify selection members.
        let chosen: Vec<usize> = selected.iter().map(|g| g.sequence_index).collect();
        let filtered: Vec<WhitespaceGap> = candidates
            .into_iter()
            .filter(|g| chosen.contains(&g.sequence_index))
            .collect();
        prop_assert_eq!(selected, filtered);
    }

    #[test]
    fn prop_selection_is_deterministic(
        fragments in fragment_stream(),
        count in 0usize..6,
    ) {
        let candidates = detect_gaps(&fragments);
        let once = select_largest(candidates.clone(), count);
        let twice = select_largest(candidates, count);
        prop_assert_eq!(once, twice);
    }
}

/// The worked six-page example: raw gaps [2, 8, 3, 12, 1] at pages 0..=4,
/// split into three segments. Only the 8 and the 12 are significant, both
/// get selected, and the cuts land after pages 1 and 3.
#[test]
fn test_six_page_example_end_to_end() {
    let frag = |top_y: f32, height: f32, page_index: usize| TextFragment {
        top_y,
        height,
        page_index,
    };
    let fragments = [
        frag(10.0, 10.0, 0),
        frag(22.0, 8.0, 0),
        frag(8.0, 10.0, 1),
        frag(3.0, 10.0, 2),
        frag(12.0, 10.0, 3),
        frag(1.0, 10.0, 4),
    ];

    let candidates = detect_gaps(&fragments);
    assert_eq!(candidates.len(), 2);

    let selected = select_largest(candidates, 2);
    assert_eq!(selected[0].height, 12.0);
    assert_eq!(selected[1].height, 8.0);

    let groups = partition_pages(6, &selected);
    let ranges: Vec<(usize, usize)> = groups
        .iter()
        .map(|g| (g.first_page, g.last_page))
        .collect();
    assert_eq!(ranges, vec![(0, 1), (2, 3), (4, 5)]);
}
