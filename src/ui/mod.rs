//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into four layers:
//!
//! - **[`app`]**: application state, keyboard event loop, sort playback and review
//! - **[`view`]**: renderer-independent frames (bar heights, highlight roles,
//!   identity-matched transitions)
//! - **[`panes`]**: stateless render functions for each visible pane
//! - **[`theme`]**: dark and light palettes used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a
//! [`VisualizerConfig`] and call [`App::run`] to start the event loop.
//!
//! [`VisualizerConfig`]: crate::config::VisualizerConfig
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;
pub mod view;

pub use app::App;
