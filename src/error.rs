//! Error types
//!
//! Nothing in the visualizer is fatal. [`OpError`] covers the recoverable
//! outcomes of user actions and is surfaced as a transient status message.
//! [`StoreError`] guards the single-writer discipline of the sequence store,
//! and [`ConfigError`] covers startup configuration. [`VizError`] is the
//! umbrella used by the binary.
//!
//! A cancelled sort is not an error; see
//! [`TerminalOutcome`](crate::narrator::TerminalOutcome).

use std::path::PathBuf;

/// Failure of an Operation Engine call. The sequence is never modified.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OpError {
    /// Text input that is empty or not an integer
    #[error("'{text}' is not a whole number")]
    InvalidInput { text: String },

    /// Pop, peek or dequeue on an empty collection
    #[error("collection is empty")]
    EmptyCollection,

    /// Search miss
    #[error("{value} not found")]
    NotFound { value: i64 },

    /// A sort currently owns the sequence
    #[error("a sort is in progress")]
    Busy,

    /// The active structure has no such operation
    #[error("{structure} does not support {action}")]
    Unsupported {
        structure: &'static str,
        action: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("sequence is locked by an active sort")]
    Locked,

    #[error("run ticket {generation} is no longer active")]
    StaleTicket { generation: u64 },
}

impl From<StoreError> for OpError {
    fn from(_: StoreError) -> Self {
        OpError::Busy
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Top-level error for the binary
#[derive(Debug, thiserror::Error)]
pub enum VizError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Op(#[from] OpError),

    #[error("{0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, VizError>;
