//! Operation Engine
//!
//! Pure functions over a [`Sequence`]. Every operation is total: it returns
//! the resulting sequence together with a result descriptor, and on failure
//! the returned sequence is an unmodified copy of the input.
//!
//! - [`structure`]: per-structure action vocabulary, messages, and info panels
//!
//! # Ends
//!
//! "Back" is the highest index (array end, stack top, queue rear, list tail).
//! "Front" is index 0 (queue front, list head).

pub mod structure;

pub use structure::{apply, Action, StructureKind};

use crate::error::OpError;
use crate::sequence::{Element, ElementId, Sequence};
use rand::Rng;

/// Successful result descriptor of an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Inserted {
        value: i64,
        index: usize,
        id: ElementId,
    },
    Removed {
        value: i64,
        id: ElementId,
    },
    Peeked {
        value: i64,
        index: usize,
    },
    Found {
        value: i64,
        index: usize,
    },
    Shuffled,
    Reset,
}

/// Sequence after the operation paired with its result
pub type OpOutcome = (Sequence, Result<Effect, OpError>);

/// Parse user text into a value
///
/// Surrounding whitespace is ignored. Anything else that is not a complete
/// signed integer (empty text, `"12abc"`, `"1.5"`) is rejected.
pub fn parse_value(text: &str) -> Result<i64, OpError> {
    text.trim()
        .parse::<i64>()
        .map_err(|_| OpError::InvalidInput {
            text: text.to_string(),
        })
}

pub fn push_back(seq: &Sequence, value: i64) -> OpOutcome {
    let element = Element::new(value);
    let mut next = seq.clone();
    next.elements_mut().push(element);
    let index = next.len() - 1;
    (
        next,
        Ok(Effect::Inserted {
            value,
            index,
            id: element.id,
        }),
    )
}

pub fn push_front(seq: &Sequence, value: i64) -> OpOutcome {
    let element = Element::new(value);
    let mut next = seq.clone();
    next.elements_mut().insert(0, element);
    (
        next,
        Ok(Effect::Inserted {
            value,
            index: 0,
            id: element.id,
        }),
    )
}

pub fn pop_back(seq: &Sequence) -> OpOutcome {
    let mut next = seq.clone();
    match next.elements_mut().pop() {
        Some(removed) => (
            next,
            Ok(Effect::Removed {
                value: removed.value,
                id: removed.id,
            }),
        ),
        None => (next, Err(OpError::EmptyCollection)),
    }
}

pub fn pop_front(seq: &Sequence) -> OpOutcome {
    if seq.is_empty() {
        return (seq.clone(), Err(OpError::EmptyCollection));
    }
    let mut next = seq.clone();
    let removed = next.elements_mut().remove(0);
    (
        next,
        Ok(Effect::Removed {
            value: removed.value,
            id: removed.id,
        }),
    )
}

pub fn peek_front(seq: &Sequence) -> OpOutcome {
    let result = seq
        .first()
        .map(|e| Effect::Peeked {
            value: e.value,
            index: 0,
        })
        .ok_or(OpError::EmptyCollection);
    (seq.clone(), result)
}

pub fn peek_back(seq: &Sequence) -> OpOutcome {
    let result = seq
        .last()
        .map(|e| Effect::Peeked {
            value: e.value,
            index: seq.len() - 1,
        })
        .ok_or(OpError::EmptyCollection);
    (seq.clone(), result)
}

/// Lowest index holding `value`
pub fn linear_search(seq: &Sequence, value: i64) -> OpOutcome {
    let result = seq
        .iter()
        .position(|e| e.value == value)
        .map(|index| Effect::Found { value, index })
        .ok_or(OpError::NotFound { value });
    (seq.clone(), result)
}

/// Fisher–Yates shuffle driven by `rng`
pub fn shuffle<R: Rng + ?Sized>(seq: &Sequence, rng: &mut R) -> OpOutcome {
    let mut next = seq.clone();
    let elements = next.elements_mut();
    for i in (1..elements.len()).rev() {
        let j = rng.random_range(0..=i);
        elements.swap(i, j);
    }
    (next, Ok(Effect::Shuffled))
}

/// Seed values with fresh identities; ids of removed elements never come back
pub fn reset_to_seed(seed: &Sequence) -> OpOutcome {
    (Sequence::from_values(&seed.values()), Ok(Effect::Reset))
}
