//! Renderer-independent frames
//!
//! [`FrameView`] is what every structure pane draws: one [`Cell`] per element
//! with its scaled height, its highlight [`Role`], and how it got there
//! ([`Transition`]) compared with the previous frame. Building a frame never
//! touches the sequence it describes.

use crate::narrator::{StepEvent, StepKind};
use crate::sequence::{ElementId, Sequence};
use rustc_hash::FxHashMap;

/// Highlight role of one position, in decreasing priority
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Swapped,
    Compared,
    Pivot,
    Found,
    Peeked,
    Settled,
    Normal,
}

/// How an element relates to the previous frame, matched by identity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Inserted,
    Moved { from: usize },
    Unchanged,
}

/// Positions to emphasize in a frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Highlights {
    pub compared: Vec<usize>,
    pub swapped: Vec<usize>,
    pub pivot: Option<usize>,
    pub found: Option<usize>,
    pub peeked: Option<usize>,
    pub settled: Vec<usize>,
}

impl Highlights {
    pub fn from_step(step: &StepEvent) -> Self {
        let mut highlights = Highlights {
            settled: step.settled.clone(),
            ..Highlights::default()
        };
        match step.kind {
            StepKind::Compare { .. } => highlights.compared = step.highlights.clone(),
            StepKind::Swap { .. } => highlights.swapped = step.highlights.clone(),
            StepKind::PivotSelected { index } => highlights.pivot = Some(index),
            StepKind::PartitionDone { pivot_index } => highlights.pivot = Some(pivot_index),
            StepKind::PassStarted { .. } | StepKind::PassDone { .. } | StepKind::SortComplete => {}
        }
        highlights
    }

    pub fn role(&self, index: usize) -> Role {
        if self.swapped.contains(&index) {
            Role::Swapped
        } else if self.compared.contains(&index) {
            Role::Compared
        } else if self.pivot == Some(index) {
            Role::Pivot
        } else if self.found == Some(index) {
            Role::Found
        } else if self.peeked == Some(index) {
            Role::Peeked
        } else if self.settled.contains(&index) {
            Role::Settled
        } else {
            Role::Normal
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub value: i64,
    pub id: ElementId,
    /// Height relative to the largest value, in `0.0..=1.0`
    pub height: f64,
    pub role: Role,
    pub transition: Transition,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FrameView {
    pub cells: Vec<Cell>,
}

impl FrameView {
    pub fn build(
        current: &Sequence,
        previous: Option<&Sequence>,
        highlights: &Highlights,
    ) -> Self {
        // Scale against the largest value, never below 1
        let max = current.max_value().unwrap_or(1).max(1) as f64;

        let previous_positions: Option<FxHashMap<ElementId, usize>> = previous.map(|prev| {
            prev.iter()
                .enumerate()
                .map(|(index, element)| (element.id, index))
                .collect()
        });

        let cells = current
            .iter()
            .enumerate()
            .map(|(index, element)| {
                let transition = match &previous_positions {
                    None => Transition::Unchanged,
                    Some(positions) => match positions.get(&element.id) {
                        None => Transition::Inserted,
                        Some(&from) if from != index => Transition::Moved { from },
                        Some(_) => Transition::Unchanged,
                    },
                };
                Cell {
                    value: element.value,
                    id: element.id,
                    height: (element.value as f64 / max).clamp(0.0, 1.0),
                    role: highlights.role(index),
                    transition,
                }
            })
            .collect();

        FrameView { cells }
    }

    pub fn values(&self) -> Vec<i64> {
        self.cells.iter().map(|c| c.value).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::narrator::{Algorithm, SortSteps};
    use crate::ops;

    #[test]
    fn test_frame_reflects_sequence() {
        let seq = Sequence::from_values(&[25, 50, 100, -5]);
        let frame = FrameView::build(&seq, None, &Highlights::default());
        assert_eq!(frame.values(), vec![25, 50, 100, -5]);
        let heights: Vec<f64> = frame.cells.iter().map(|c| c.height).collect();
        assert_eq!(heights, vec![0.25, 0.5, 1.0, 0.0]);
        assert!(frame.cells.iter().all(|c| c.role == Role::Normal));
    }

    #[test]
    fn test_all_negative_values_scale_against_one() {
        let seq = Sequence::from_values(&[-3, -1]);
        let frame = FrameView::build(&seq, None, &Highlights::default());
        assert!(frame.cells.iter().all(|c| c.height == 0.0));
    }

    #[test]
    fn test_transitions_track_identity() {
        let before = Sequence::from_values(&[1, 2]);
        let (after, _) = ops::push_front(&before, 0);
        let frame = FrameView::build(&after, Some(&before), &Highlights::default());
        let transitions: Vec<Transition> = frame.cells.iter().map(|c| c.transition).collect();
        assert_eq!(
            transitions,
            vec![
                Transition::Inserted,
                Transition::Moved { from: 0 },
                Transition::Moved { from: 1 },
            ]
        );
    }

    #[test]
    fn test_step_highlights() {
        let mut steps = SortSteps::new(Sequence::from_values(&[2, 1]), Algorithm::BubbleSort);
        steps.next(); // pass lead-in
        let compare = steps.next().expect("compare step");
        let swap = steps.next().expect("swap step");

        let frame = FrameView::build(&compare.snapshot, None, &Highlights::from_step(&compare));
        assert_eq!(frame.cells[0].role, Role::Compared);
        assert_eq!(frame.cells[1].role, Role::Compared);

        let frame = FrameView::build(
            &swap.snapshot,
            Some(&compare.snapshot),
            &Highlights::from_step(&swap),
        );
        assert_eq!(frame.values(), vec![1, 2]);
        assert_eq!(frame.cells[0].role, Role::Swapped);
        assert_eq!(frame.cells[0].transition, Transition::Moved { from: 1 });
    }

    #[test]
    fn test_role_priority() {
        let highlights = Highlights {
            compared: vec![0],
            swapped: vec![0],
            found: Some(1),
            settled: vec![1, 2],
            ..Highlights::default()
        };
        assert_eq!(highlights.role(0), Role::Swapped);
        assert_eq!(highlights.role(1), Role::Found);
        assert_eq!(highlights.role(2), Role::Settled);
        assert_eq!(highlights.role(3), Role::Normal);
    }
}
