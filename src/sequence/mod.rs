//! Sequence model shared by every structure view
//!
//! This module provides the data the rest of the crate operates on:
//! - [`element`]: [`Element`] values tagged with an opaque [`ElementId`]
//! - [`store`]: the authoritative [`SequenceStore`] with its exclusive-run flag
//!
//! # Ordering
//!
//! A [`Sequence`] is always read front to back:
//!
//! ```text
//! array   index 0 → index n-1
//! stack   bottom  → top
//! queue   front   → rear
//! list    head    → tail
//! ```
//!
//! Identity tokens travel with their values when a sort reorders them, so the
//! renderer can tell which node moved where.

pub mod element;
pub mod store;

pub use element::{Element, ElementId};
pub use store::{RunTicket, SequenceStore};

use std::fmt;

/// An ordered collection of elements backing one structure view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sequence {
    elements: Vec<Element>,
}

impl Sequence {
    pub fn new() -> Self {
        Sequence {
            elements: Vec::new(),
        }
    }

    /// Build a sequence from raw values, minting a fresh identity per value
    pub fn from_values(values: &[i64]) -> Self {
        Sequence {
            elements: values.iter().map(|&v| Element::new(v)).collect(),
        }
    }

    pub fn from_elements(elements: Vec<Element>) -> Self {
        Sequence { elements }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn get(&self, index: usize) -> Option<&Element> {
        self.elements.get(index)
    }

    pub fn first(&self) -> Option<&Element> {
        self.elements.first()
    }

    pub fn last(&self) -> Option<&Element> {
        self.elements.last()
    }

    /// Values in order, without identities
    pub fn values(&self) -> Vec<i64> {
        self.elements.iter().map(|e| e.value).collect()
    }

    pub fn min_value(&self) -> Option<i64> {
        self.elements.iter().map(|e| e.value).min()
    }

    pub fn max_value(&self) -> Option<i64> {
        self.elements.iter().map(|e| e.value).max()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Element> {
        self.elements.iter()
    }

    pub(crate) fn elements_mut(&mut self) -> &mut Vec<Element> {
        &mut self.elements
    }

    pub fn into_elements(self) -> Vec<Element> {
        self.elements
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, element) in self.elements.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", element.value)?;
        }
        write!(f, "]")
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a Element;
    type IntoIter = std::slice::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_lists_values_in_order() {
        let seq = Sequence::from_values(&[3, -1, 7]);
        assert_eq!(seq.to_string(), "[3, -1, 7]");
        assert_eq!(Sequence::new().to_string(), "[]");
    }

    #[test]
    fn test_from_values_mints_distinct_ids() {
        let seq = Sequence::from_values(&[1, 1, 1]);
        let ids: Vec<_> = seq.iter().map(|e| e.id).collect();
        assert_ne!(ids[0], ids[1]);
        assert_ne!(ids[1], ids[2]);
        assert_ne!(ids[0], ids[2]);
    }

    #[test]
    fn test_min_max_on_empty() {
        let seq = Sequence::new();
        assert_eq!(seq.min_value(), None);
        assert_eq!(seq.max_value(), None);
    }
}
