//! # Introduction
//!
//! dsviz is a terminal visualizer for four elementary data structures (array,
//! stack, queue and singly linked list) with a stepwise narrator for bubble
//! sort and quick sort. Every comparison and swap is emitted as an event with
//! a plain-language explanation, and the sorted array is redrawn one step at a
//! time through a terminal UI built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Key → Operation Engine → SequenceStore → FrameView → TUI
//!                     Sort Narrator ↗ (one StepEvent per step)
//! ```
//!
//! 1. [`sequence`]: the ordered [`sequence::Element`] collection shared by all
//!    four structures, and the single-writer [`sequence::SequenceStore`].
//! 2. [`ops`]: pure structure operations. Each returns the next sequence and
//!    an effect or an [`error::OpError`]; the input is never modified.
//! 3. [`narrator`]: sort algorithms as resumable step iterators, plus the
//!    paced [`narrator::Narrator`] driver with cooperative cancellation.
//! 4. [`history`]: memory-bounded step history for reviewing a finished sort.
//! 5. [`config`]: TOML configuration (seeds, speed, pacing).
//! 6. [`ui`]: ratatui-based TUI; not part of the stable library API.

pub mod config;
pub mod error;
pub mod history;
pub mod narrator;
pub mod ops;
pub mod sequence;
pub mod ui;

pub use error::{Result, VizError};
