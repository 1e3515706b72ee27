//! Term identifiers and compact term-count containers.
//!
//! A [`TermId`] is an opaque handle assigned to a distinct string by a
//! dictionary (a [`crate::automaton::WordAutomaton`] or a
//! [`crate::space::TermSpace`]). Documents accumulate identifiers into
//! a [`TermBag`] (unordered, counted) or a [`TermVector`] (ordered,
//! duplicates preserved), both of which freeze into self-contained
//! varint byte buffers for persistence and interchange.

pub mod bag;
pub mod vector;
pub(crate) mod varint;

use std::fmt;

pub use self::bag::{TermBag, TermBagBuilder};
pub use self::vector::{TermVector, TermVectorBuilder};

/// Opaque identifier of a distinct term within one identifier space.
///
/// Identifiers are dense non-negative integers; comparison and hashing
/// follow the integer value. "Not found" is always an explicit `None`,
/// never a sentinel value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct TermId(u32);

impl TermId {
    /// Wrap a raw identifier value.
    #[inline]
    pub const fn new(value: u32) -> Self {
        TermId(value)
    }

    /// The raw identifier value.
    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for TermId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for TermId {
    fn from(value: u32) -> Self {
        TermId(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_follows_value() {
        assert!(TermId::new(3) < TermId::new(10));
        assert_eq!(TermId::new(7), TermId::from(7));
        assert_eq!(TermId::new(7).value(), 7);
    }

    #[test]
    fn displays_as_plain_integer() {
        assert_eq!(TermId::new(42).to_string(), "42");
    }
}
