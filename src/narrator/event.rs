//! Observable sort steps

use crate::sequence::Sequence;

/// What happened in one step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    /// Narration lead-in before a bubble sort pass
    PassStarted { pass: usize },
    Compare { i: usize, j: usize },
    /// Positions `i` and `j` were exchanged (may be equal in quick sort)
    Swap { i: usize, j: usize },
    PivotSelected { index: usize },
    PartitionDone { pivot_index: usize },
    PassDone { pass: usize },
    SortComplete,
}

impl StepKind {
    /// Positions this step touches (zero to two)
    pub fn indices(&self) -> Vec<usize> {
        match *self {
            StepKind::Compare { i, j } | StepKind::Swap { i, j } => vec![i, j],
            StepKind::PivotSelected { index } => vec![index],
            StepKind::PartitionDone { pivot_index } => vec![pivot_index],
            StepKind::PassStarted { .. } | StepKind::PassDone { .. } | StepKind::SortComplete => {
                Vec::new()
            }
        }
    }

    pub fn is_mutation(&self) -> bool {
        matches!(self, StepKind::Swap { .. })
    }

    pub fn label(&self) -> &'static str {
        match self {
            StepKind::PassStarted { .. } => "pass",
            StepKind::Compare { .. } => "compare",
            StepKind::Swap { .. } => "swap",
            StepKind::PivotSelected { .. } => "pivot",
            StepKind::PartitionDone { .. } => "partition",
            StepKind::PassDone { .. } => "pass done",
            StepKind::SortComplete => "complete",
        }
    }
}

/// One narrated moment of a sort
///
/// `snapshot` is the full sequence after this step's mutation was applied,
/// never a half-swapped state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepEvent {
    pub kind: StepKind,
    pub highlights: Vec<usize>,
    pub narration: String,
    pub snapshot: Sequence,
    /// Positions already holding their final value
    pub settled: Vec<usize>,
}

impl StepEvent {
    /// Rough heap footprint, used to bound step history
    pub fn estimated_size(&self) -> usize {
        std::mem::size_of::<Self>()
            + self.narration.len()
            + self.snapshot.len() * std::mem::size_of::<crate::sequence::Element>()
            + (self.highlights.len() + self.settled.len()) * std::mem::size_of::<usize>()
    }
}
