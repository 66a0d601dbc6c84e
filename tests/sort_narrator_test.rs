// Integration tests for the sort narrator

use dsviz::narrator::{
    Algorithm, AnimationSpeed, CancelToken, Narrator, NoDelay, Pacer, PacingConfig, SortSteps,
    SpeedControl, StepEvent, StepKind, TerminalOutcome,
};
use dsviz::sequence::Sequence;
use proptest::prelude::*;
use std::time::Duration;

/// Keeps every requested delay instead of sleeping
#[derive(Default)]
struct PauseLog {
    pauses: Vec<Duration>,
}

impl Pacer for PauseLog {
    fn pause(&mut self, delay: Duration) {
        self.pauses.push(delay);
    }
}

fn collect(values: &[i64], algorithm: Algorithm) -> Vec<StepEvent> {
    SortSteps::new(Sequence::from_values(values), algorithm).collect()
}

fn run_to_end(values: &[i64], algorithm: Algorithm) -> (TerminalOutcome, Vec<StepEvent>) {
    let narrator = Narrator::default();
    let mut events = Vec::new();
    let outcome = narrator.run(
        Sequence::from_values(values),
        algorithm,
        |e| events.push(e.clone()),
        || false,
        &mut NoDelay,
    );
    (outcome, events)
}

#[test]
fn test_bubble_sort_example() {
    let events = collect(&[5, 2, 4, 1], Algorithm::BubbleSort);

    let swaps: Vec<_> = events
        .iter()
        .filter_map(|e| match e.kind {
            StepKind::Swap { i, j } => Some((i, j)),
            _ => None,
        })
        .collect();
    assert_eq!(swaps, vec![(0, 1), (1, 2), (2, 3), (1, 2), (0, 1)]);

    let compares = events
        .iter()
        .filter(|e| matches!(e.kind, StepKind::Compare { .. }))
        .count();
    assert_eq!(compares, 6);

    let last = events.last().unwrap();
    assert_eq!(last.kind, StepKind::SortComplete);
    assert_eq!(last.snapshot.values(), vec![1, 2, 4, 5]);
}

#[test]
fn test_first_swap_snapshot() {
    let events = collect(&[5, 2, 4, 1], Algorithm::BubbleSort);
    let first_swap = events
        .iter()
        .find(|e| matches!(e.kind, StepKind::Swap { .. }))
        .unwrap();
    assert_eq!(first_swap.snapshot.values(), vec![2, 5, 4, 1]);
    assert_eq!(first_swap.highlights, vec![0, 1]);
}

#[test]
fn test_sorting_keeps_element_identity() {
    let input = Sequence::from_values(&[3, 1, 2]);
    let ids: Vec<_> = input.iter().map(|e| (e.value, e.id)).collect();
    for algorithm in [Algorithm::BubbleSort, Algorithm::QuickSort] {
        let outcome = Narrator::default().run(
            input.clone(),
            algorithm,
            |_| {},
            || false,
            &mut NoDelay,
        );
        for element in outcome.sequence() {
            assert!(ids.contains(&(element.value, element.id)));
        }
    }
}

#[test]
fn test_trivial_inputs_only_complete() {
    for algorithm in [Algorithm::BubbleSort, Algorithm::QuickSort] {
        for values in [vec![], vec![42]] {
            let events = collect(&values, algorithm);
            assert_eq!(events.len(), 1);
            assert_eq!(events[0].kind, StepKind::SortComplete);
        }
    }
}

#[test]
fn test_cancel_returns_last_snapshot() {
    let narrator = Narrator::default();
    let token = CancelToken::new();
    let mut swaps = 0;
    let outcome = narrator.run(
        Sequence::from_values(&[5, 2, 4, 1]),
        Algorithm::BubbleSort,
        |e| {
            if matches!(e.kind, StepKind::Swap { .. }) {
                swaps += 1;
                token.cancel();
            }
        },
        || token.is_cancelled(),
        &mut NoDelay,
    );

    assert_eq!(swaps, 1);
    assert!(outcome.is_cancelled());
    assert_eq!(outcome.sequence().values(), vec![2, 5, 4, 1]);
}

#[test]
fn test_pacing_follows_speed() {
    let pacing = PacingConfig::default();
    let speed = SpeedControl::new(AnimationSpeed::clamped(50));
    let narrator = Narrator::new(pacing, speed);
    let mut pacer = PauseLog::default();
    let outcome = narrator.run(
        Sequence::from_values(&[2, 1]),
        Algorithm::BubbleSort,
        |_| {},
        || false,
        &mut pacer,
    );

    // One pause after every step except the final SortComplete
    assert_eq!(pacer.pauses.len(), outcome.steps() - 1);
    assert!(pacer
        .pauses
        .iter()
        .all(|d| *d == Duration::from_millis(500)));
}

#[test]
fn test_quick_sort_ties_with_pivot_go_right() {
    let events = collect(&[2, 1, 2], Algorithm::QuickSort);
    let first_partition: Vec<(StepKind, Vec<i64>)> = events
        .iter()
        .take(6)
        .map(|e| (e.kind, e.snapshot.values()))
        .collect();

    // The leading 2 equals the pivot, so comparing it moves nothing
    assert_eq!(
        first_partition,
        vec![
            (StepKind::PivotSelected { index: 2 }, vec![2, 1, 2]),
            (StepKind::Compare { i: 0, j: 2 }, vec![2, 1, 2]),
            (StepKind::Compare { i: 1, j: 2 }, vec![2, 1, 2]),
            (StepKind::Swap { i: 0, j: 1 }, vec![1, 2, 2]),
            (StepKind::Swap { i: 1, j: 2 }, vec![1, 2, 2]),
            (StepKind::PartitionDone { pivot_index: 1 }, vec![1, 2, 2]),
        ]
    );
    assert_eq!(events.last().map(|e| e.kind), Some(StepKind::SortComplete));
}

#[test]
fn test_bubble_runs_one_pass_per_element() {
    let events = collect(&[3, 2, 1], Algorithm::BubbleSort);
    let passes: Vec<usize> = events
        .iter()
        .filter_map(|e| match e.kind {
            StepKind::PassDone { pass } => Some(pass),
            _ => None,
        })
        .collect();
    assert_eq!(passes, vec![0, 1, 2]);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(96))]

    #[test]
    fn sorted_output_is_ordered_permutation(
        values in prop::collection::vec(-50i64..50, 0..24),
        quick in any::<bool>(),
    ) {
        let algorithm = if quick { Algorithm::QuickSort } else { Algorithm::BubbleSort };
        let (outcome, events) = run_to_end(&values, algorithm);

        let mut expected = values.clone();
        expected.sort();
        prop_assert_eq!(outcome.sequence().values(), expected);
        prop_assert!(!outcome.is_cancelled());
        prop_assert_eq!(events.last().map(|e| e.kind), Some(StepKind::SortComplete));
        prop_assert_eq!(
            events.iter().filter(|e| e.kind == StepKind::SortComplete).count(),
            1
        );
    }

    #[test]
    fn swaps_and_snapshots_agree(
        values in prop::collection::vec(-50i64..50, 0..16),
        quick in any::<bool>(),
    ) {
        let algorithm = if quick { Algorithm::QuickSort } else { Algorithm::BubbleSort };
        let mut current = values.clone();
        for event in collect(&values, algorithm) {
            if let StepKind::Swap { i, j } = event.kind {
                current.swap(i, j);
            }
            prop_assert_eq!(event.snapshot.values(), current.clone());
        }
    }

    #[test]
    fn bubble_compare_count_is_bounded(values in prop::collection::vec(-50i64..50, 0..24)) {
        let n = values.len();
        let compares = collect(&values, Algorithm::BubbleSort)
            .iter()
            .filter(|e| matches!(e.kind, StepKind::Compare { .. }))
            .count();
        prop_assert!(compares <= n * n.saturating_sub(1) / 2);
    }

    #[test]
    fn sorting_sorted_input_never_swaps(values in prop::collection::vec(-50i64..50, 0..24)) {
        let mut sorted = values;
        sorted.sort();
        for algorithm in [Algorithm::BubbleSort, Algorithm::QuickSort] {
            let (outcome, events) = run_to_end(&sorted, algorithm);
            prop_assert_eq!(outcome.sequence().values(), sorted.clone());
            if algorithm == Algorithm::BubbleSort {
                prop_assert!(!events.iter().any(|e| matches!(e.kind, StepKind::Swap { .. })), "expected no Swap events");
            }
        }
    }
}
