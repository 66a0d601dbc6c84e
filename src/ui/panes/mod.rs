//! TUI pane rendering modules
//!
//! Stateless render functions, one per visible region. Each takes the
//! [`Frame`](ratatui::Frame), its area, and a `*RenderData` struct carrying
//! everything it draws.
//!
//! # Pane Modules
//!
//! - [`structure`]: the active structure (bars, stack, queue, or list nodes)
//! - [`narration`]: the current sort step explained in plain words
//! - [`info`]: structure facts, speed gauge, and value input
//! - [`status`]: status bar with keybindings and playback state
//! - `style`: shared role colors and border styles

mod style;

pub mod info;
pub mod narration;
pub mod status;
pub mod structure;

// Re-export render functions for convenience
pub use info::{render_info_pane, InfoRenderData};
pub use narration::{render_narration_pane, NarrationRenderData};
pub use status::{render_status_bar, PlaybackState, StatusRenderData};
pub use structure::{render_structure_pane, StructureRenderData};
