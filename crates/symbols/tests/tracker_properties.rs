// Chunk: docs/chunks/symbol_tracking - Property tests for span partitioning and navigation
//!
//! Invariants of `ActiveSymbolTracker` over generated symbol layouts:
//! spans partition the document, activity is exactly span membership, and
//! navigation is circular.

use codemap_symbols::{ActiveSymbolTracker, Step};
use proptest::prelude::*;

/// Ascending start lines (first at 0) and a total line count past the last.
fn layout_strategy() -> impl Strategy<Value = (Vec<usize>, usize)> {
    (prop::collection::vec(1usize..8, 0..12), 1usize..8).prop_map(|(gaps, tail)| {
        let mut starts = vec![0];
        for gap in gaps {
            let next = starts[starts.len() - 1] + gap;
            starts.push(next);
        }
        let total = starts[starts.len() - 1] + tail;
        (starts, total)
    })
}

proptest! {
    #[test]
    fn spans_partition_the_document((starts, total) in layout_strategy()) {
        let tracker = ActiveSymbolTracker::new(starts.clone(), total);
        for i in 0..tracker.len() {
            let span = tracker.span(i);
            if i + 1 < tracker.len() {
                prop_assert_eq!(span.end, tracker.span(i + 1).start);
            } else {
                prop_assert_eq!(span.end, total);
            }
        }
        prop_assert_eq!(tracker.span(0).start, 0);
    }

    #[test]
    fn active_means_span_contains_a_selected_line(
        (starts, total) in layout_strategy(),
        selection in prop::collection::vec(0usize..120, 0..4),
    ) {
        let tracker = ActiveSymbolTracker::new(starts, total);
        for i in 0..tracker.len() {
            let span = tracker.span(i);
            let expected = selection.iter().any(|line| span.contains(line));
            prop_assert_eq!(tracker.is_active(i, &selection), expected);
        }
    }

    #[test]
    fn every_line_is_owned_by_exactly_one_symbol((starts, total) in layout_strategy()) {
        let tracker = ActiveSymbolTracker::new(starts, total);
        for line in 0..total {
            let owners = (0..tracker.len()).filter(|&i| tracker.is_active(i, &[line])).count();
            prop_assert_eq!(owners, 1);
        }
    }

    #[test]
    fn next_n_times_returns_to_start(
        (starts, total) in layout_strategy(),
        line_seed in 0usize..1000,
    ) {
        let tracker = ActiveSymbolTracker::new(starts, total);
        let start_line = line_seed % total;
        let origin = tracker.first_active(&[start_line]).unwrap();

        let mut line = start_line;
        for _ in 0..tracker.len() {
            let target = tracker.navigate(&[line], Step::Next).unwrap();
            // Jumping puts the caret on the target's start line.
            line = tracker.span(target).start;
        }

        prop_assert!(tracker.span(origin).contains(&line));
    }

    #[test]
    fn previous_undoes_next(
        (starts, total) in layout_strategy(),
        line_seed in 0usize..1000,
    ) {
        let tracker = ActiveSymbolTracker::new(starts, total);
        let line = line_seed % total;
        let origin = tracker.first_active(&[line]).unwrap();

        let next = tracker.navigate(&[line], Step::Next).unwrap();
        let back = tracker.navigate(&[tracker.span(next).start], Step::Previous).unwrap();
        prop_assert_eq!(back, origin);
    }
}
