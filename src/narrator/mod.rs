//! Stepwise sort narrator
//!
//! This module turns a sort into a stream of observable, narrated steps:
//! - [`event`]: [`StepEvent`] and its [`StepKind`]
//! - [`steps`]: [`SortSteps`], the resumable bubble/quick sort machine
//! - [`pacing`]: [`AnimationSpeed`], the delay curve, and the [`Pacer`] seam
//!
//! # Driving a sort
//!
//! Callers either pull steps themselves (the TUI advances one step per
//! elapsed delay) or hand control to [`Narrator::run`], which emits every
//! step through a callback and pauses between them:
//!
//! ```text
//! loop {
//!     cancelled?  → Cancelled(last applied state)
//!     next step   → emit(step)
//!     complete?   → Completed(final state)
//!     pause(delay(speed))
//! }
//! ```
//!
//! Cancellation is only observed between steps, so the returned sequence is
//! always one that some step actually emitted (or the input, if none did).

pub mod event;
pub mod pacing;
pub mod steps;

pub use event::{StepEvent, StepKind};
pub use pacing::{AnimationSpeed, NoDelay, Pacer, PacingConfig, SleepPacer, SpeedControl};
pub use steps::SortSteps;

use crate::sequence::Sequence;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    #[value(name = "bubble")]
    BubbleSort,
    #[value(name = "quick")]
    QuickSort,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::BubbleSort => write!(f, "Bubble Sort"),
            Algorithm::QuickSort => write!(f, "Quick Sort"),
        }
    }
}

/// How a run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalOutcome {
    Completed { sequence: Sequence, steps: usize },
    Cancelled { sequence: Sequence, steps: usize },
}

impl TerminalOutcome {
    pub fn sequence(&self) -> &Sequence {
        match self {
            TerminalOutcome::Completed { sequence, .. }
            | TerminalOutcome::Cancelled { sequence, .. } => sequence,
        }
    }

    pub fn into_sequence(self) -> Sequence {
        match self {
            TerminalOutcome::Completed { sequence, .. }
            | TerminalOutcome::Cancelled { sequence, .. } => sequence,
        }
    }

    pub fn steps(&self) -> usize {
        match self {
            TerminalOutcome::Completed { steps, .. } | TerminalOutcome::Cancelled { steps, .. } => {
                *steps
            }
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, TerminalOutcome::Cancelled { .. })
    }
}

/// Cooperative cancellation flag
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// Runs sorts to completion at a configurable pace
#[derive(Debug, Clone, Default)]
pub struct Narrator {
    pacing: PacingConfig,
    speed: SpeedControl,
}

impl Narrator {
    pub fn new(pacing: PacingConfig, speed: SpeedControl) -> Self {
        Narrator { pacing, speed }
    }

    /// Sort `sequence`, emitting every step and pausing between steps
    ///
    /// `is_cancelled` is polled before each step. The speed is re-read at
    /// every pause so it can be changed while the run is in flight.
    pub fn run<E, C, P>(
        &self,
        sequence: Sequence,
        algorithm: Algorithm,
        mut emit: E,
        is_cancelled: C,
        pacer: &mut P,
    ) -> TerminalOutcome
    where
        E: FnMut(&StepEvent),
        C: Fn() -> bool,
        P: Pacer + ?Sized,
    {
        tracing::info!(%algorithm, len = sequence.len(), "starting sort");
        let mut steps = SortSteps::new(sequence, algorithm);

        loop {
            if is_cancelled() {
                tracing::info!(%algorithm, steps = steps.emitted(), "sort cancelled");
                return TerminalOutcome::Cancelled {
                    sequence: steps.snapshot(),
                    steps: steps.emitted(),
                };
            }

            let Some(event) = steps.next() else {
                break;
            };
            tracing::trace!(step = event.kind.label(), narration = %event.narration);
            emit(&event);

            if event.kind == StepKind::SortComplete {
                tracing::info!(%algorithm, steps = steps.emitted(), "sort complete");
                return TerminalOutcome::Completed {
                    sequence: event.snapshot,
                    steps: steps.emitted(),
                };
            }

            pacer.pause(self.pacing.delay(self.speed.get()));
        }

        TerminalOutcome::Completed {
            sequence: steps.snapshot(),
            steps: steps.emitted(),
        }
    }
}
