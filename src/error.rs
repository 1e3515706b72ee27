//! Error types for alphabet construction, automaton builds, and byte
//! decoding.
//!
//! Lookup misses ("term not in the dictionary", "identifier out of
//! range") are *not* errors in this crate: out-of-vocabulary terms are a
//! normal, frequent outcome in token streams, so every lookup returns an
//! `Option` instead. The enums here cover the failures that abort an
//! operation outright: bad alphabet input, a build fed characters
//! outside the alphabet, and byte buffers that do not decode into a
//! consistent container. None of the failing operations returns a
//! partially built structure.

use thiserror::Error;

/// Errors raised while constructing a [`crate::alphabet::Alphabet`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AlphabetError {
    /// The same character was supplied twice.
    #[error("duplicate character {0:?} in alphabet")]
    DuplicateCharacter(char),

    /// More than 256 characters were supplied.
    ///
    /// Transition labels are single bytes, so an alphabet cannot index
    /// more than 256 distinct characters.
    #[error("more than 256 characters supplied; alphabet indices are single bytes")]
    TooLarge,
}

/// Errors raised while building a [`crate::automaton::WordAutomaton`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// An input term contains a character outside the alphabet.
    ///
    /// The build is aborted; no partial automaton is returned.
    #[error("term {term:?} contains character {ch:?} not in the alphabet")]
    UnknownCharacter {
        /// The offending input term.
        term: String,
        /// The character missing from the alphabet.
        ch: char,
    },

    /// Deriving an alphabet from the input batch failed.
    ///
    /// Raised by [`crate::automaton::WordAutomaton::from_terms`] when
    /// the batch uses more distinct characters than an alphabet holds.
    #[error("cannot derive alphabet: {0}")]
    Alphabet(#[from] AlphabetError),
}

/// Errors raised while decoding a byte-encoded term container.
///
/// Each variant names the decode step that failed, so a corrupted
/// persisted buffer produces one clear diagnostic rather than a generic
/// crash.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The buffer ended in the middle of the named field.
    #[error("buffer truncated while decoding {0}")]
    Truncated(&'static str),

    /// A varint ran past the longest encoding of a 64-bit value.
    #[error("varint for {0} exceeds maximum length")]
    VarintOverflow(&'static str),

    /// A TermBag entry decoded to an identifier not strictly greater
    /// than its predecessor.
    #[error("term identifiers not strictly ascending at entry {entry}")]
    NonAscendingIds {
        /// Zero-based index of the offending entry.
        entry: usize,
    },

    /// The declared total count disagrees with the sum of entry counts.
    #[error("declared size {declared} but entry counts sum to {actual}")]
    LengthMismatch {
        /// Total count stored in the header.
        declared: u64,
        /// Sum of the decoded per-term counts.
        actual: u64,
    },

    /// Bytes remained after the declared entries were consumed.
    #[error("{0} trailing bytes after final entry")]
    TrailingBytes(usize),

    /// A decoded value does not fit the identifier or count domain.
    #[error("value {value} out of range for {field}")]
    ValueOutOfRange {
        /// The field being decoded.
        field: &'static str,
        /// The decoded value.
        value: u64,
    },
}
