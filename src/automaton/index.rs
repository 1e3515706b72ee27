//! Map-style adapter over [`WordAutomaton`].
//!
//! Consumers that turn surface tokens into identifiers mostly want
//! key-value semantics rather than the automaton's vocabulary-specific
//! vocabulary of methods. `AutomatonIndex` exposes exactly that: a
//! read-only `get`/`contains_key`/`iter` surface that faithfully
//! reflects the wrapped automaton and adds no state of its own.

use super::WordAutomaton;
use crate::terms::TermId;

/// Read-only string→identifier mapping backed by a [`WordAutomaton`].
#[derive(Debug, Clone)]
pub struct AutomatonIndex {
    automaton: WordAutomaton,
}

impl AutomatonIndex {
    /// Wrap an automaton in map-style clothing.
    pub fn new(automaton: WordAutomaton) -> Self {
        AutomatonIndex { automaton }
    }

    /// The wrapped automaton.
    pub fn automaton(&self) -> &WordAutomaton {
        &self.automaton
    }

    /// Identifier for `term`, `None` if out of vocabulary.
    pub fn get(&self, term: &str) -> Option<TermId> {
        self.automaton.index_of(term)
    }

    /// Term stored under `id`, `None` if `id` is out of range.
    pub fn term(&self, id: TermId) -> Option<String> {
        self.automaton.for_index(id)
    }

    /// Whether `term` is a key of this mapping.
    pub fn contains_key(&self, term: &str) -> bool {
        self.automaton.contains(term)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.automaton.len()
    }

    /// `true` if the mapping holds no entries.
    pub fn is_empty(&self) -> bool {
        self.automaton.is_empty()
    }

    /// Iterate entries as `(term, id)` pairs in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (String, TermId)> + '_ {
        self.automaton
            .iter()
            .enumerate()
            .map(|(i, term)| (term, TermId::new(i as u32)))
    }
}

impl From<WordAutomaton> for AutomatonIndex {
    fn from(automaton: WordAutomaton) -> Self {
        AutomatonIndex::new(automaton)
    }
}
