//! Sorts as resumable step machines
//!
//! [`SortSteps`] owns a working copy of the sequence and performs exactly one
//! observable step per call to [`Iterator::next`]. Between calls the working
//! copy is always a complete, consistent array, which is what makes
//! cancellation at a step boundary safe.
//!
//! Quick sort keeps its pending subranges on an explicit stack instead of
//! recursing, so input size never affects call depth. Ranges are pushed
//! right-then-left, which visits partitions in the same order as the
//! recursive formulation.

use super::event::{StepEvent, StepKind};
use super::Algorithm;
use crate::sequence::{Element, Sequence};
use std::iter::FusedIterator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Start,
    BubbleLead {
        pass: usize,
    },
    BubbleCompare {
        pass: usize,
        j: usize,
    },
    BubbleSwap {
        pass: usize,
        j: usize,
    },
    BubblePassDone {
        pass: usize,
    },
    QuickNextRange,
    QuickPivot {
        low: usize,
        high: usize,
    },
    // `store` is the Lomuto boundary plus one: the next slot for a value
    // smaller than the pivot.
    QuickScan {
        low: usize,
        high: usize,
        store: usize,
        j: usize,
    },
    QuickSwap {
        low: usize,
        high: usize,
        store: usize,
        j: usize,
    },
    QuickPlacePivot {
        low: usize,
        high: usize,
        store: usize,
    },
    QuickPartitionDone {
        low: usize,
        high: usize,
        pivot: usize,
    },
    Complete,
    Finished,
}

/// Step-by-step execution of one sort
#[derive(Debug, Clone)]
pub struct SortSteps {
    algorithm: Algorithm,
    data: Vec<Element>,
    settled: Vec<bool>,
    ranges: Vec<(usize, usize)>,
    phase: Phase,
    emitted: usize,
}

impl SortSteps {
    pub fn new(sequence: Sequence, algorithm: Algorithm) -> Self {
        let data = sequence.into_elements();
        let settled = vec![false; data.len()];
        SortSteps {
            algorithm,
            data,
            settled,
            ranges: Vec::new(),
            phase: Phase::Start,
            emitted: 0,
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// The working copy as of the last emitted step
    pub fn snapshot(&self) -> Sequence {
        Sequence::from_elements(self.data.clone())
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    /// Number of steps produced so far
    pub fn emitted(&self) -> usize {
        self.emitted
    }

    fn value(&self, index: usize) -> i64 {
        self.data[index].value
    }

    fn emit(&mut self, kind: StepKind, narration: String) -> StepEvent {
        self.emitted += 1;
        StepEvent {
            kind,
            highlights: kind.indices(),
            narration,
            snapshot: self.snapshot(),
            settled: self
                .settled
                .iter()
                .enumerate()
                .filter(|(_, done)| **done)
                .map(|(i, _)| i)
                .collect(),
        }
    }

    fn after_bubble_compare(&self, pass: usize, j: usize) -> Phase {
        if j + 1 < self.data.len() - 1 - pass {
            Phase::BubbleCompare { pass, j: j + 1 }
        } else {
            Phase::BubblePassDone { pass }
        }
    }

    fn advance(&mut self) -> Option<StepEvent> {
        let n = self.data.len();
        loop {
            match self.phase {
                Phase::Start => {
                    self.phase = if n < 2 {
                        Phase::Complete
                    } else {
                        match self.algorithm {
                            Algorithm::BubbleSort => Phase::BubbleLead { pass: 0 },
                            Algorithm::QuickSort => {
                                self.ranges.push((0, n - 1));
                                Phase::QuickNextRange
                            }
                        }
                    };
                }

                Phase::BubbleLead { pass } => {
                    let boundary = n - 1 - pass;
                    let (narration, next) = if boundary > 0 {
                        (
                            format!(
                                "Pass {}: carry the largest unsorted value up to index {}",
                                pass + 1,
                                boundary
                            ),
                            Phase::BubbleCompare { pass, j: 0 },
                        )
                    } else {
                        // Final pass: a single unsorted slot, nothing to compare
                        (
                            format!("Pass {}: only index 0 is left, nothing to compare", pass + 1),
                            Phase::BubblePassDone { pass },
                        )
                    };
                    self.phase = next;
                    return Some(self.emit(StepKind::PassStarted { pass }, narration));
                }

                Phase::BubbleCompare { pass, j } => {
                    let (a, b) = (self.value(j), self.value(j + 1));
                    // Strict `>`: equal neighbours keep their order
                    let narration = if a > b {
                        format!("Compare {} and {}: {} > {}, so they swap", a, b, a, b)
                    } else {
                        format!("Compare {} and {}: already in order", a, b)
                    };
                    self.phase = if a > b {
                        Phase::BubbleSwap { pass, j }
                    } else {
                        self.after_bubble_compare(pass, j)
                    };
                    return Some(self.emit(StepKind::Compare { i: j, j: j + 1 }, narration));
                }

                Phase::BubbleSwap { pass, j } => {
                    self.data.swap(j, j + 1);
                    let narration =
                        format!("Swapped {} and {}", self.value(j + 1), self.value(j));
                    self.phase = self.after_bubble_compare(pass, j);
                    return Some(self.emit(StepKind::Swap { i: j, j: j + 1 }, narration));
                }

                Phase::BubblePassDone { pass } => {
                    let boundary = n - 1 - pass;
                    self.settled[boundary] = true;
                    let narration = format!(
                        "Pass {} complete: {} is in its final position",
                        pass + 1,
                        self.value(boundary)
                    );
                    self.phase = if pass + 1 < n {
                        Phase::BubbleLead { pass: pass + 1 }
                    } else {
                        Phase::Complete
                    };
                    return Some(self.emit(StepKind::PassDone { pass }, narration));
                }

                Phase::QuickNextRange => {
                    self.phase = match self.ranges.pop() {
                        Some((low, high)) => Phase::QuickPivot { low, high },
                        None => Phase::Complete,
                    };
                }

                Phase::QuickPivot { low, high } => {
                    let narration = format!(
                        "Partition indices {} to {}: pivot is {} (the last element)",
                        low,
                        high,
                        self.value(high)
                    );
                    self.phase = Phase::QuickScan {
                        low,
                        high,
                        store: low,
                        j: low,
                    };
                    return Some(self.emit(StepKind::PivotSelected { index: high }, narration));
                }

                Phase::QuickScan {
                    low,
                    high,
                    store,
                    j,
                } => {
                    if j == high {
                        self.phase = Phase::QuickPlacePivot { low, high, store };
                        continue;
                    }
                    let (a, pivot) = (self.value(j), self.value(high));
                    // Strict `<`: values equal to the pivot stay on the right
                    let (narration, next) = if a < pivot {
                        (
                            format!(
                                "Compare {} with pivot {}: smaller, so it belongs on the left",
                                a, pivot
                            ),
                            Phase::QuickSwap {
                                low,
                                high,
                                store,
                                j,
                            },
                        )
                    } else {
                        (
                            format!(
                                "Compare {} with pivot {}: not smaller, so it stays on the right",
                                a, pivot
                            ),
                            Phase::QuickScan {
                                low,
                                high,
                                store,
                                j: j + 1,
                            },
                        )
                    };
                    self.phase = next;
                    return Some(self.emit(StepKind::Compare { i: j, j: high }, narration));
                }

                Phase::QuickSwap {
                    low,
                    high,
                    store,
                    j,
                } => {
                    self.data.swap(store, j);
                    let narration = if store == j {
                        format!("{} is already on the left side", self.value(store))
                    } else {
                        format!("Swapped {} and {}", self.value(j), self.value(store))
                    };
                    self.phase = Phase::QuickScan {
                        low,
                        high,
                        store: store + 1,
                        j: j + 1,
                    };
                    return Some(self.emit(StepKind::Swap { i: store, j }, narration));
                }

                Phase::QuickPlacePivot { low, high, store } => {
                    self.data.swap(store, high);
                    let narration = if store == high {
                        format!("Pivot {} stays at index {}", self.value(store), store)
                    } else {
                        format!("Moved pivot {} to index {}", self.value(store), store)
                    };
                    self.phase = Phase::QuickPartitionDone {
                        low,
                        high,
                        pivot: store,
                    };
                    return Some(self.emit(StepKind::Swap { i: store, j: high }, narration));
                }

                Phase::QuickPartitionDone { low, high, pivot } => {
                    self.settled[pivot] = true;
                    if pivot + 1 < high {
                        self.ranges.push((pivot + 1, high));
                    } else if pivot + 1 == high {
                        self.settled[high] = true;
                    }
                    if pivot > low + 1 {
                        self.ranges.push((low, pivot - 1));
                    } else if pivot == low + 1 {
                        self.settled[low] = true;
                    }
                    let narration = format!(
                        "Partition done: pivot {} is in its final position at index {}",
                        self.value(pivot),
                        pivot
                    );
                    self.phase = Phase::QuickNextRange;
                    return Some(
                        self.emit(StepKind::PartitionDone { pivot_index: pivot }, narration),
                    );
                }

                Phase::Complete => {
                    self.settled.iter_mut().for_each(|done| *done = true);
                    self.phase = Phase::Finished;
                    let narration = if n == 0 {
                        "Nothing to sort".to_string()
                    } else {
                        format!("Sort complete: {}", self.snapshot())
                    };
                    return Some(self.emit(StepKind::SortComplete, narration));
                }

                Phase::Finished => return None,
            }
        }
    }
}

impl Iterator for SortSteps {
    type Item = StepEvent;

    fn next(&mut self) -> Option<StepEvent> {
        self.advance()
    }
}

impl FusedIterator for SortSteps {}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(values: &[i64], algorithm: Algorithm) -> Vec<StepKind> {
        SortSteps::new(Sequence::from_values(values), algorithm)
            .map(|e| e.kind)
            .collect()
    }

    #[test]
    fn test_bubble_first_pass_trace() {
        let events: Vec<StepEvent> =
            SortSteps::new(Sequence::from_values(&[5, 2, 4, 1]), Algorithm::BubbleSort).collect();

        let first_pass: Vec<(StepKind, Vec<i64>)> = events
            .iter()
            .take_while(|e| !matches!(e.kind, StepKind::PassDone { .. }))
            .map(|e| (e.kind, e.snapshot.values()))
            .collect();

        assert_eq!(
            first_pass,
            vec![
                (StepKind::PassStarted { pass: 0 }, vec![5, 2, 4, 1]),
                (StepKind::Compare { i: 0, j: 1 }, vec![5, 2, 4, 1]),
                (StepKind::Swap { i: 0, j: 1 }, vec![2, 5, 4, 1]),
                (StepKind::Compare { i: 1, j: 2 }, vec![2, 5, 4, 1]),
                (StepKind::Swap { i: 1, j: 2 }, vec![2, 4, 5, 1]),
                (StepKind::Compare { i: 2, j: 3 }, vec![2, 4, 5, 1]),
                (StepKind::Swap { i: 2, j: 3 }, vec![2, 4, 1, 5]),
            ]
        );

        let last = events.last().expect("no events");
        assert_eq!(last.kind, StepKind::SortComplete);
        assert_eq!(last.snapshot.values(), vec![1, 2, 4, 5]);
        assert_eq!(last.settled, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_bubble_pass_structure() {
        let trace = kinds(&[3, 2, 1], Algorithm::BubbleSort);
        let passes_done: Vec<_> = trace
            .iter()
            .filter_map(|k| match k {
                StepKind::PassDone { pass } => Some(*pass),
                _ => None,
            })
            .collect();
        assert_eq!(passes_done, vec![0, 1, 2]);
        assert_eq!(trace.last(), Some(&StepKind::SortComplete));
    }

    #[test]
    fn test_bubble_final_pass_has_no_compares() {
        let trace = kinds(&[3, 2, 1], Algorithm::BubbleSort);
        let tail: Vec<_> = trace.iter().rev().take(3).rev().copied().collect();
        assert_eq!(
            tail,
            vec![
                StepKind::PassStarted { pass: 2 },
                StepKind::PassDone { pass: 2 },
                StepKind::SortComplete,
            ]
        );
    }

    #[test]
    fn test_quick_sort_pivot_ties_stay_right() {
        // Strict `<`: the leading 2 equals the pivot and is not moved left
        let trace = kinds(&[2, 1, 2], Algorithm::QuickSort);
        assert_eq!(
            &trace[..6],
            &[
                StepKind::PivotSelected { index: 2 },
                StepKind::Compare { i: 0, j: 2 },
                StepKind::Compare { i: 1, j: 2 },
                StepKind::Swap { i: 0, j: 1 },
                StepKind::Swap { i: 1, j: 2 },
                StepKind::PartitionDone { pivot_index: 1 },
            ]
        );
        let done = SortSteps::new(Sequence::from_values(&[2, 1, 2]), Algorithm::QuickSort)
            .last()
            .expect("no events");
        assert_eq!(done.snapshot.values(), vec![1, 2, 2]);
    }

    #[test]
    fn test_quick_sort_lomuto_trace() {
        let trace = kinds(&[3, 1, 2], Algorithm::QuickSort);
        assert_eq!(
            trace,
            vec![
                StepKind::PivotSelected { index: 2 },
                StepKind::Compare { i: 0, j: 2 },
                StepKind::Compare { i: 1, j: 2 },
                StepKind::Swap { i: 0, j: 1 },
                StepKind::Swap { i: 1, j: 2 },
                StepKind::PartitionDone { pivot_index: 1 },
                StepKind::SortComplete,
            ]
        );
    }

    #[test]
    fn test_quick_sort_visits_left_before_right() {
        let events: Vec<StepEvent> =
            SortSteps::new(Sequence::from_values(&[4, 6, 2, 9, 5]), Algorithm::QuickSort)
                .collect();
        let pivots: Vec<usize> = events
            .iter()
            .filter_map(|e| match e.kind {
                StepKind::PivotSelected { index } => Some(index),
                _ => None,
            })
            .collect();
        // [4,6,2,9,5] partitions around 5 into [4,2] 5 [9,6]
        assert_eq!(pivots, vec![4, 1, 4]);
        assert_eq!(
            events.last().map(|e| e.snapshot.values()),
            Some(vec![2, 4, 5, 6, 9])
        );
    }

    #[test]
    fn test_small_inputs_only_complete() {
        for algorithm in [Algorithm::BubbleSort, Algorithm::QuickSort] {
            assert_eq!(kinds(&[], algorithm), vec![StepKind::SortComplete]);
            assert_eq!(kinds(&[7], algorithm), vec![StepKind::SortComplete]);
        }
    }

    #[test]
    fn test_duplicates_keep_relative_order_in_bubble_sort() {
        let seq = Sequence::from_values(&[2, 1, 2, 1]);
        let ids_of_twos: Vec<_> = seq
            .iter()
            .filter(|e| e.value == 2)
            .map(|e| e.id)
            .collect();
        let done = SortSteps::new(seq, Algorithm::BubbleSort)
            .last()
            .expect("no events");
        assert_eq!(done.snapshot.values(), vec![1, 1, 2, 2]);
        let sorted_twos: Vec<_> = done
            .snapshot
            .iter()
            .filter(|e| e.value == 2)
            .map(|e| e.id)
            .collect();
        assert_eq!(sorted_twos, ids_of_twos);
    }

    #[test]
    fn test_equal_values_never_swap_in_bubble_sort() {
        let trace = kinds(&[4, 4, 4], Algorithm::BubbleSort);
        assert!(!trace.iter().any(|k| k.is_mutation()));
    }

    #[test]
    fn test_iterator_is_fused() {
        let mut steps = SortSteps::new(Sequence::from_values(&[1]), Algorithm::QuickSort);
        assert!(steps.next().is_some());
        assert!(steps.is_finished());
        assert!(steps.next().is_none());
        assert!(steps.next().is_none());
    }
}
