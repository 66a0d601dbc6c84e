//! Values with a stable identity token

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ELEMENT_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque identity of one logical node
///
/// Minted once when a value enters a sequence and never handed out again for
/// the lifetime of the process. Only used to match elements across frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(u64);

impl ElementId {
    pub fn fresh() -> Self {
        ElementId(NEXT_ELEMENT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single value in a sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Element {
    pub value: i64,
    pub id: ElementId,
}

impl Element {
    pub fn new(value: i64) -> Self {
        Element {
            value,
            id: ElementId::fresh(),
        }
    }
}
