//! Structure adapters over the Operation Engine
//!
//! Each [`StructureKind`] exposes a subset of [`Action`]s and maps them onto
//! the pure operations in the parent module:
//!
//! | Structure   | Insert              | Remove                  | Read          |
//! |-------------|---------------------|-------------------------|---------------|
//! | Array       | push back           | pop back                | search        |
//! | Stack       | push back (top)     | pop back (top)          | peek back     |
//! | Queue       | push back (rear)    | pop front (front)       | peek front    |
//! | Linked list | push front / back   | pop front / back        | search        |
//!
//! Shuffle is array-only; reset applies everywhere.

use super::{
    linear_search, peek_back, peek_front, pop_back, pop_front, push_back, push_front,
    reset_to_seed, shuffle, Effect, OpOutcome,
};
use crate::error::OpError;
use crate::sequence::Sequence;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Which structure view is active
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum StructureKind {
    #[default]
    Array,
    Stack,
    Queue,
    LinkedList,
}

/// A user-triggered operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    PushBack(i64),
    PushFront(i64),
    PopBack,
    PopFront,
    PeekFront,
    PeekBack,
    Search(i64),
    Shuffle,
    Reset,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::PushBack(_) => "push back",
            Action::PushFront(_) => "push front",
            Action::PopBack => "pop back",
            Action::PopFront => "pop front",
            Action::PeekFront => "peek front",
            Action::PeekBack => "peek back",
            Action::Search(_) => "search",
            Action::Shuffle => "shuffle",
            Action::Reset => "reset",
        }
    }

    /// Whether the action changes the sequence when it succeeds
    pub fn is_mutating(&self) -> bool {
        !matches!(
            self,
            Action::PeekFront | Action::PeekBack | Action::Search(_)
        )
    }
}

impl StructureKind {
    pub const ALL: [StructureKind; 4] = [
        StructureKind::Array,
        StructureKind::Stack,
        StructureKind::Queue,
        StructureKind::LinkedList,
    ];

    /// Next tab (wraps around)
    pub fn next(self) -> Self {
        match self {
            StructureKind::Array => StructureKind::Stack,
            StructureKind::Stack => StructureKind::Queue,
            StructureKind::Queue => StructureKind::LinkedList,
            StructureKind::LinkedList => StructureKind::Array,
        }
    }

    /// Previous tab (wraps around)
    pub fn prev(self) -> Self {
        match self {
            StructureKind::Array => StructureKind::LinkedList,
            StructureKind::Stack => StructureKind::Array,
            StructureKind::Queue => StructureKind::Stack,
            StructureKind::LinkedList => StructureKind::Queue,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            StructureKind::Array => "Array",
            StructureKind::Stack => "Stack",
            StructureKind::Queue => "Queue",
            StructureKind::LinkedList => "Linked List",
        }
    }

    /// Short name used in messages ("Stack is empty", "List reset to default")
    pub fn noun(self) -> &'static str {
        match self {
            StructureKind::Array => "Array",
            StructureKind::Stack => "Stack",
            StructureKind::Queue => "Queue",
            StructureKind::LinkedList => "List",
        }
    }

    pub fn default_seed(self) -> Vec<i64> {
        match self {
            StructureKind::Array => vec![25, 45, 10, 85, 30, 60, 15, 70],
            StructureKind::Stack => vec![40, 30, 20, 10],
            StructureKind::Queue | StructureKind::LinkedList => vec![10, 20, 30, 40],
        }
    }

    pub fn supports(self, action: &Action) -> bool {
        match (self, action) {
            (_, Action::Reset) => true,
            (StructureKind::Array, a) => matches!(
                a,
                Action::PushBack(_) | Action::PopBack | Action::Search(_) | Action::Shuffle
            ),
            (StructureKind::Stack, a) => {
                matches!(a, Action::PushBack(_) | Action::PopBack | Action::PeekBack)
            }
            (StructureKind::Queue, a) => {
                matches!(a, Action::PushBack(_) | Action::PopFront | Action::PeekFront)
            }
            (StructureKind::LinkedList, a) => matches!(
                a,
                Action::PushBack(_)
                    | Action::PushFront(_)
                    | Action::PopBack
                    | Action::PopFront
                    | Action::Search(_)
            ),
        }
    }

    /// Sorting is offered on the array view only
    pub fn supports_sorting(self) -> bool {
        self == StructureKind::Array
    }

    /// Status message for a finished action
    pub fn describe(self, action: &Action, result: &Result<Effect, OpError>) -> String {
        let noun = self.noun();
        match result {
            Err(OpError::EmptyCollection) => format!("{} is empty", noun),
            Err(OpError::NotFound { value }) => match self {
                StructureKind::LinkedList => format!("{} not found in the list", value),
                _ => format!("{} not found in the {}", value, noun.to_lowercase()),
            },
            Err(err) => err.to_string(),
            Ok(Effect::Reset) => format!("{} reset to default", noun),
            Ok(Effect::Shuffled) => format!("{} shuffled", noun),
            Ok(Effect::Found { value, index }) => match self {
                StructureKind::LinkedList => format!("Found {} at position {}", value, index),
                _ => format!("Found {} at index {}", value, index),
            },
            Ok(Effect::Peeked { value, .. }) => match self {
                StructureKind::Stack => format!("Top element is {}", value),
                _ => format!("Front element is {}", value),
            },
            Ok(Effect::Inserted { value, .. }) => match (self, action) {
                (StructureKind::Stack, _) => format!("Pushed {} onto the stack", value),
                (StructureKind::Queue, _) => format!("Enqueued {} to the queue", value),
                (StructureKind::LinkedList, Action::PushFront(_)) => {
                    format!("Added {} to the head", value)
                }
                (StructureKind::LinkedList, _) => format!("Added {} to the tail", value),
                (StructureKind::Array, _) => format!("Added {} to the array", value),
            },
            Ok(Effect::Removed { value, .. }) => match (self, action) {
                (StructureKind::Stack, _) => format!("Popped {} from the stack", value),
                (StructureKind::Queue, _) => format!("Dequeued {} from the queue", value),
                (StructureKind::LinkedList, Action::PopFront) => {
                    format!("Removed {} from the head", value)
                }
                (StructureKind::LinkedList, _) => format!("Removed {} from the tail", value),
                (StructureKind::Array, _) => format!("Removed {} from the array", value),
            },
        }
    }

    /// Label/value rows for the information panel
    pub fn info(self, seq: &Sequence) -> Vec<(&'static str, String)> {
        let show = |v: Option<i64>| v.map_or_else(|| "N/A".to_string(), |v| v.to_string());
        let first = seq.first().map(|e| e.value);
        let last = seq.last().map(|e| e.value);
        match self {
            StructureKind::Array => vec![
                ("Length", seq.len().to_string()),
                ("Min Value", show(seq.min_value())),
                ("Max Value", show(seq.max_value())),
            ],
            StructureKind::Stack => vec![
                ("Size", seq.len().to_string()),
                ("Top Element", show(last)),
            ],
            StructureKind::Queue => vec![
                ("Size", seq.len().to_string()),
                ("Front Element", show(first)),
                ("Rear Element", show(last)),
            ],
            StructureKind::LinkedList => vec![
                ("Length", seq.len().to_string()),
                ("Head Value", show(first)),
                ("Tail Value", show(last)),
            ],
        }
    }
}

/// Apply `action` to `seq` as the given structure
///
/// `seed` is only read by [`Action::Reset`] and `rng` only by
/// [`Action::Shuffle`].
pub fn apply<R: Rng + ?Sized>(
    kind: StructureKind,
    seq: &Sequence,
    seed: &Sequence,
    action: Action,
    rng: &mut R,
) -> OpOutcome {
    if !kind.supports(&action) {
        return (
            seq.clone(),
            Err(OpError::Unsupported {
                structure: kind.title(),
                action: action.name(),
            }),
        );
    }

    let outcome = match action {
        Action::PushBack(value) => push_back(seq, value),
        Action::PushFront(value) => push_front(seq, value),
        Action::PopBack => pop_back(seq),
        Action::PopFront => pop_front(seq),
        Action::PeekFront => peek_front(seq),
        Action::PeekBack => peek_back(seq),
        Action::Search(value) => linear_search(seq, value),
        Action::Shuffle => shuffle(seq, rng),
        Action::Reset => reset_to_seed(seed),
    };

    tracing::debug!(
        structure = kind.title(),
        action = action.name(),
        ok = outcome.1.is_ok(),
        len = outcome.0.len(),
        "applied operation"
    );
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn run(kind: StructureKind, values: &[i64], action: Action) -> OpOutcome {
        let seq = Sequence::from_values(values);
        let seed = Sequence::from_values(&kind.default_seed());
        let mut rng = StdRng::seed_from_u64(1);
        apply(kind, &seq, &seed, action, &mut rng)
    }

    #[test]
    fn test_stack_pops_from_top() {
        let (after, result) = run(StructureKind::Stack, &[40, 30, 20], Action::PopBack);
        assert_eq!(after.values(), vec![40, 30]);
        assert_eq!(
            StructureKind::Stack.describe(&Action::PopBack, &result),
            "Popped 20 from the stack"
        );
    }

    #[test]
    fn test_queue_dequeues_from_front() {
        let (after, result) = run(StructureKind::Queue, &[10, 20, 30], Action::PopFront);
        assert_eq!(after.values(), vec![20, 30]);
        assert_eq!(
            StructureKind::Queue.describe(&Action::PopFront, &result),
            "Dequeued 10 from the queue"
        );
    }

    #[test]
    fn test_unsupported_action_is_rejected_without_mutation() {
        let (after, result) = run(StructureKind::Queue, &[1, 2], Action::PopBack);
        assert_eq!(after.values(), vec![1, 2]);
        assert!(matches!(result, Err(OpError::Unsupported { .. })));

        let (_, result) = run(StructureKind::Stack, &[1, 2], Action::Shuffle);
        assert!(matches!(result, Err(OpError::Unsupported { .. })));
    }

    #[test]
    fn test_empty_messages_use_structure_noun() {
        let (_, result) = run(StructureKind::LinkedList, &[], Action::PopFront);
        assert_eq!(
            StructureKind::LinkedList.describe(&Action::PopFront, &result),
            "List is empty"
        );
        let (_, result) = run(StructureKind::Stack, &[], Action::PeekBack);
        assert_eq!(
            StructureKind::Stack.describe(&Action::PeekBack, &result),
            "Stack is empty"
        );
    }

    #[test]
    fn test_list_search_messages() {
        let (_, found) = run(StructureKind::LinkedList, &[10, 20, 30], Action::Search(20));
        assert_eq!(
            StructureKind::LinkedList.describe(&Action::Search(20), &found),
            "Found 20 at position 1"
        );
        let (_, missing) = run(StructureKind::LinkedList, &[10], Action::Search(99));
        assert_eq!(
            StructureKind::LinkedList.describe(&Action::Search(99), &missing),
            "99 not found in the list"
        );
    }

    #[test]
    fn test_reset_uses_seed() {
        let (after, result) = run(StructureKind::Stack, &[1], Action::Reset);
        assert_eq!(after.values(), vec![40, 30, 20, 10]);
        assert_eq!(
            StructureKind::Stack.describe(&Action::Reset, &result),
            "Stack reset to default"
        );
    }

    #[test]
    fn test_info_panels() {
        let seq = Sequence::from_values(&[3, 9, 1]);
        assert_eq!(
            StructureKind::Array.info(&seq),
            vec![
                ("Length", "3".to_string()),
                ("Min Value", "1".to_string()),
                ("Max Value", "9".to_string()),
            ]
        );
        assert_eq!(
            StructureKind::Stack.info(&Sequence::new()),
            vec![("Size", "0".to_string()), ("Top Element", "N/A".to_string())]
        );
    }

    #[test]
    fn test_tab_cycle_visits_every_structure() {
        let mut kind = StructureKind::Array;
        for _ in 0..StructureKind::ALL.len() {
            assert_eq!(kind.next().prev(), kind);
            kind = kind.next();
        }
        assert_eq!(kind, StructureKind::Array);
    }
}
