//! # termlex
//!
//! Minimal-automaton string dictionary with stable term identifiers,
//! plus compact byte-encoded term-count containers.
//!
//! The centerpiece is [`automaton::WordAutomaton`], a minimized acyclic
//! word graph (DAWG) over a fixed [`alphabet::Alphabet`]. Each stored
//! string receives a dense zero-based [`terms::TermId`] along a fixed
//! canonical traversal, so the automaton answers both `string → id` and
//! `id → string` without an auxiliary table. Document representations
//! accumulate identifiers into a [`terms::TermBag`] (bag of words) or a
//! [`terms::TermVector`] (order-preserving sequence), both of which
//! freeze into self-contained varint byte buffers. For vocabularies
//! discovered incrementally, [`space::TermSpaceRegistry`] hands out
//! named, concurrently growable identifier spaces.
//!
//! ## Example
//!
//! ```rust,ignore
//! use termlex::prelude::*;
//!
//! let alphabet = Alphabet::new('a'..='z')?;
//! let automaton = WordAutomaton::build(alphabet, ["span", "spanning"])?;
//!
//! let mut bag = TermBagBuilder::new();
//! for token in ["span", "spanning", "span"] {
//!     if let Some(id) = automaton.index_of(token) {
//!         bag.add_term(id);
//!     }
//! }
//! let bytes = bag.build().to_bytes();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod alphabet;
pub mod automaton;
pub mod error;
pub mod space;
pub mod terms;

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::alphabet::Alphabet;
    pub use crate::automaton::{AutomatonIndex, AutomatonNode, WordAutomaton};
    pub use crate::error::{AlphabetError, BuildError, DecodeError};
    pub use crate::space::{TermSpace, TermSpaceRegistry};
    pub use crate::terms::{
        TermBag, TermBagBuilder, TermId, TermVector, TermVectorBuilder,
    };
}
