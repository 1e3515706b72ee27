//! Ordered sequence of term identifiers.
//!
//! A `TermVector` is the sequence-sensitive counterpart of
//! [`crate::terms::TermBag`]: identifiers appear in their original
//! order, duplicates preserved. The byte encoding is a varint length
//! header followed by each identifier as a varint in order. There is no
//! gap coding, since sorting would destroy the order the container
//! exists to keep.

use crate::error::DecodeError;
use crate::terms::varint;
use crate::terms::TermId;

/// Immutable, index-addressable sequence of term identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct TermVector {
    terms: Vec<u32>,
}

impl TermVector {
    /// Decode a vector from its byte encoding.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] naming the failing step on truncated
    /// varints, identifiers outside the `u32` domain, or trailing
    /// bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
        let mut pos = 0;

        let (length, n) = varint::decode(&bytes[pos..], "vector length")?;
        pos += n;
        let length = usize::try_from(length).map_err(|_| DecodeError::ValueOutOfRange {
            field: "vector length",
            value: length,
        })?;

        // Each identifier takes at least one byte.
        let mut terms = Vec::with_capacity(length.min(bytes.len()));
        for _ in 0..length {
            let (id, n) = varint::decode_u32(&bytes[pos..], "term identifier")?;
            pos += n;
            terms.push(id);
        }

        if pos != bytes.len() {
            return Err(DecodeError::TrailingBytes(bytes.len() - pos));
        }

        Ok(TermVector { terms })
    }

    /// Encode the vector, preserving exact order.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        varint::encode(self.terms.len() as u64, &mut buf);
        for &id in &self.terms {
            varint::encode(u64::from(id), &mut buf);
        }
        buf
    }

    /// Number of identifiers in the sequence.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// `true` if the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// The identifier at position `i`, `None` if out of range.
    pub fn get(&self, i: usize) -> Option<TermId> {
        self.terms.get(i).copied().map(TermId::new)
    }

    /// Iterate identifiers in sequence order.
    pub fn iter(&self) -> impl Iterator<Item = TermId> + '_ {
        self.terms.iter().copied().map(TermId::new)
    }
}

/// Single-writer accumulator for a [`TermVector`].
#[derive(Debug, Default)]
pub struct TermVectorBuilder {
    terms: Vec<u32>,
}

impl TermVectorBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `id` to the sequence.
    pub fn add_term(&mut self, id: TermId) {
        self.terms.push(id.value());
    }

    /// Freeze the sequence into an immutable vector.
    pub fn build(self) -> TermVector {
        TermVector { terms: self.terms }
    }
}
