//! Sparse bag of term identifiers with counts.
//!
//! A `TermBag` is the bag-of-words form of a document: an unordered
//! mapping from term identifier to occurrence count. Bags freeze into a
//! self-contained byte buffer: header varints for the unique-term
//! count and total size, then per distinct identifier in ascending
//! order its gap from the previous identifier and its count. The
//! encoding is canonical: a pure function of the (id, count) multiset,
//! independent of the order terms were added.

use rustc_hash::FxHashMap;

use crate::error::DecodeError;
use crate::terms::varint;
use crate::terms::TermId;

/// Immutable multiset of term identifiers with counts.
///
/// Built through [`TermBagBuilder`] or decoded from bytes; never
/// mutated afterward. Adding to a frozen bag means building a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct TermBag {
    /// (identifier, count), sorted by identifier ascending.
    entries: Vec<(u32, u64)>,
    /// Sum of all counts.
    total: u64,
}

impl TermBag {
    /// Decode a bag from its byte encoding.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] naming the failing step on truncated
    /// varints, identifiers out of ascending order, a header total that
    /// disagrees with the entry counts, or trailing bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
        let mut pos = 0;

        let (unique, n) = varint::decode(&bytes[pos..], "unique-term count")?;
        pos += n;
        let (declared_total, n) = varint::decode(&bytes[pos..], "total size")?;
        pos += n;

        let unique = usize::try_from(unique).map_err(|_| DecodeError::ValueOutOfRange {
            field: "unique-term count",
            value: unique,
        })?;

        // Capacity clamped by the bytes actually present (each entry
        // takes at least two), so a corrupt header cannot force a huge
        // allocation before the truncation is noticed.
        let mut entries = Vec::with_capacity(unique.min(bytes.len() / 2 + 1));
        let mut previous: Option<u32> = None;
        let mut actual_total: u64 = 0;

        for entry in 0..unique {
            let (gap, n) = varint::decode_u32(&bytes[pos..], "identifier gap")?;
            pos += n;
            let (count, n) = varint::decode(&bytes[pos..], "term count")?;
            pos += n;

            let id = match previous {
                None => gap,
                // Ids are strictly ascending, so later gaps are >= 1.
                Some(prev) => {
                    if gap == 0 {
                        return Err(DecodeError::NonAscendingIds { entry });
                    }
                    prev.checked_add(gap)
                        .ok_or(DecodeError::NonAscendingIds { entry })?
                }
            };
            previous = Some(id);

            if count == 0 {
                return Err(DecodeError::ValueOutOfRange {
                    field: "term count",
                    value: 0,
                });
            }
            actual_total = actual_total
                .checked_add(count)
                .ok_or(DecodeError::LengthMismatch {
                    declared: declared_total,
                    actual: u64::MAX,
                })?;
            entries.push((id, count));
        }

        if actual_total != declared_total {
            return Err(DecodeError::LengthMismatch {
                declared: declared_total,
                actual: actual_total,
            });
        }
        if pos != bytes.len() {
            return Err(DecodeError::TrailingBytes(bytes.len() - pos));
        }

        Ok(TermBag {
            entries,
            total: actual_total,
        })
    }

    /// Encode the bag into its canonical byte form.
    ///
    /// `TermBag::from_bytes(bag.to_bytes())` reproduces the bag
    /// exactly, and re-encoding yields identical bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        varint::encode(self.entries.len() as u64, &mut buf);
        varint::encode(self.total, &mut buf);

        let mut previous: Option<u32> = None;
        for &(id, count) in &self.entries {
            let gap = match previous {
                None => id,
                Some(prev) => id - prev,
            };
            previous = Some(id);
            varint::encode(u64::from(gap), &mut buf);
            varint::encode(count, &mut buf);
        }
        buf
    }

    /// Occurrence count of `id`; 0 if absent.
    pub fn count_of(&self, id: TermId) -> u64 {
        self.entries
            .binary_search_by_key(&id.value(), |&(id, _)| id)
            .map(|pos| self.entries[pos].1)
            .unwrap_or(0)
    }

    /// Number of distinct identifiers with count > 0.
    pub fn unique_terms(&self) -> usize {
        self.entries.len()
    }

    /// Total number of occurrences (sum of all counts).
    pub fn len(&self) -> usize {
        self.total as usize
    }

    /// `true` if the bag holds no terms.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Iterate `(id, count)` pairs in ascending identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (TermId, u64)> + '_ {
        self.entries
            .iter()
            .map(|&(id, count)| (TermId::new(id), count))
    }
}

/// Single-writer accumulator for a [`TermBag`].
///
/// `build` consumes the builder, so the frozen bag cannot be mutated
/// through it afterward.
#[derive(Debug, Default)]
pub struct TermBagBuilder {
    counts: FxHashMap<u32, u64>,
}

impl TermBagBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `id`.
    pub fn add_term(&mut self, id: TermId) {
        *self.counts.entry(id.value()).or_insert(0) += 1;
    }

    /// Record `n` occurrences of `id` at once.
    pub fn add_term_n(&mut self, id: TermId, n: u64) {
        if n > 0 {
            *self.counts.entry(id.value()).or_insert(0) += n;
        }
    }

    /// Freeze the accumulated counts into an immutable bag.
    pub fn build(self) -> TermBag {
        let mut entries: Vec<(u32, u64)> = self.counts.into_iter().collect();
        entries.sort_unstable_by_key(|&(id, _)| id);
        let total = entries.iter().map(|&(_, count)| count).sum();
        TermBag { entries, total }
    }
}
