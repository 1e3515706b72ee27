//! Named, incrementally growable term identifier spaces.
//!
//! A [`TermSpace`] assigns dense identifiers to strings as they first
//! appear. It is the lightweight mutable counterpart of the batch-built
//! [`crate::automaton::WordAutomaton`], for pipelines that discover
//! vocabulary on the fly. Spaces grow monotonically; terms are never
//! removed.
//!
//! A [`TermSpaceRegistry`] tracks independent spaces by name. It is an
//! ordinary value the caller owns and shares (typically behind `Arc`),
//! not process-global state; the one-space-per-name guarantee is
//! first-writer-wins on the registry's concurrent map.

use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::terms::TermId;

/// A growable string↔identifier mapping.
///
/// Reads take a shared lock and run concurrently; only the append of a
/// genuinely new term takes the exclusive lock, after a shared-lock
/// existence check so the common "already known" path never serializes.
#[derive(Debug, Default)]
pub struct TermSpace {
    inner: RwLock<SpaceInner>,
}

#[derive(Debug, Default)]
struct SpaceInner {
    indices: FxHashMap<String, u32>,
    terms: Vec<String>,
}

impl TermSpace {
    /// Create an empty space.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the identifier for `term`, registering it if new.
    ///
    /// Idempotent: re-adding an existing term returns the same
    /// identifier. Under concurrent first-time calls for the same term,
    /// exactly one writer registers it and every caller observes that
    /// one identifier.
    pub fn add_term(&self, term: &str) -> TermId {
        if let Some(&id) = self.inner.read().indices.get(term) {
            return TermId::new(id);
        }

        let mut inner = self.inner.write();
        // Double-check: another writer may have won the race between
        // the read unlock and the write lock.
        if let Some(&id) = inner.indices.get(term) {
            return TermId::new(id);
        }
        let id = inner.terms.len() as u32;
        inner.terms.push(term.to_string());
        inner.indices.insert(term.to_string(), id);
        TermId::new(id)
    }

    /// Identifier of `term`, `None` if the term was never added.
    pub fn index_of(&self, term: &str) -> Option<TermId> {
        self.inner.read().indices.get(term).copied().map(TermId::new)
    }

    /// Term registered under `id`, `None` if `id` is out of range.
    pub fn term(&self, id: TermId) -> Option<String> {
        self.inner.read().terms.get(id.value() as usize).cloned()
    }

    /// Number of registered terms.
    pub fn len(&self) -> usize {
        self.inner.read().terms.len()
    }

    /// `true` if no terms are registered.
    pub fn is_empty(&self) -> bool {
        self.inner.read().terms.is_empty()
    }
}

/// Registry of independent [`TermSpace`]s keyed by name.
///
/// Spaces are created lazily on first reference and live as long as the
/// registry. Creation is first-writer-wins: under concurrent
/// [`get_space`](Self::get_space) calls for a new name, one instance
/// survives and every caller receives it.
#[derive(Debug, Default)]
pub struct TermSpaceRegistry {
    spaces: DashMap<String, Arc<TermSpace>>,
}

impl TermSpaceRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the space named `name`, creating it if absent.
    pub fn get_space(&self, name: &str) -> Arc<TermSpace> {
        if let Some(space) = self.spaces.get(name) {
            return Arc::clone(&space);
        }
        Arc::clone(
            &self
                .spaces
                .entry(name.to_string())
                .or_insert_with(|| Arc::new(TermSpace::new())),
        )
    }

    /// Number of spaces created so far.
    pub fn len(&self) -> usize {
        self.spaces.len()
    }

    /// `true` if no space has been created yet.
    pub fn is_empty(&self) -> bool {
        self.spaces.is_empty()
    }
}
