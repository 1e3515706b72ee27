//! Minimal acyclic word automaton (DAWG) with stable term identifiers.
//!
//! A DAWG is a minimized trie that shares both prefixes and suffixes.
//! This implementation additionally assigns every stored string a dense
//! zero-based identifier, so the automaton doubles as a bidirectional
//! string↔id dictionary without an auxiliary string table.
//!
//! Construction inserts the input batch into a trie, then minimizes it
//! bottom-up: nodes with identical acceptance flag and identical
//! (already-minimized) child edges collapse into one. Nodes live in an
//! arena addressed by index; children always refer to arena entries
//! finalized earlier, so the graph cannot contain cycles.
//!
//! # Identifier order
//!
//! Identifiers follow the canonical depth-first traversal: children in
//! ascending transition-label order (the alphabet's own character
//! order), a node's own acceptance numbered before its subtrees. The
//! traversal is a pure function of the stored string set, so rebuilding
//! from the same terms in any input order reproduces the same ids.

pub mod index;
pub mod iter;

use std::sync::Arc;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::alphabet::Alphabet;
use crate::error::BuildError;
use crate::terms::TermId;

pub use self::index::AutomatonIndex;
pub use self::iter::{AutomatonNode, Nodes, Strings};

/// Edge list type: (transition label, arena index of child).
///
/// SmallVec keeps nodes with few edges (the common case) off the heap.
pub(crate) type EdgeList = SmallVec<[(u8, u32); 4]>;

/// A node in the minimized automaton arena.
#[derive(Debug, Clone)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub(crate) struct Node {
    /// Outgoing edges, sorted by label ascending.
    pub(crate) edges: EdgeList,
    /// True if the path reaching this node spells a stored string.
    pub(crate) is_final: bool,
    /// Number of stored strings in the sub-automaton rooted here,
    /// counting this node's own acceptance.
    pub(crate) words_below: u32,
}

/// Find the child reached via `label`, if any.
///
/// Linear scan is cache-friendly for short edge lists; binary search
/// wins past ~16 edges.
#[inline]
pub(crate) fn find_edge(edges: &[(u8, u32)], label: u8) -> Option<u32> {
    if edges.len() < 16 {
        edges.iter().find(|(l, _)| *l == label).map(|(_, idx)| *idx)
    } else {
        edges
            .binary_search_by_key(&label, |(l, _)| *l)
            .ok()
            .map(|pos| edges[pos].1)
    }
}

/// A minimized acyclic word automaton over a fixed alphabet.
///
/// Built once from a finite batch of strings, immutable afterward. All
/// read operations are lock-free and safe for unlimited concurrent
/// readers; clones share the node arena via `Arc`.
#[derive(Debug, Clone)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct WordAutomaton {
    alphabet: Alphabet,
    nodes: Arc<Vec<Node>>,
    term_count: usize,
}

impl WordAutomaton {
    /// Build an automaton from a batch of terms.
    ///
    /// Terms may arrive in any order; duplicates collapse to one stored
    /// string. Every character of every term must be in `alphabet`.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::UnknownCharacter`] naming the offending
    /// term; no partial automaton is returned.
    pub fn build<I, S>(alphabet: Alphabet, terms: I) -> Result<Self, BuildError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Trie::new();
        for term in terms {
            trie.insert(&alphabet, term.as_ref())?;
        }
        Ok(trie.minimize(alphabet))
    }

    /// Build an automaton from terms, deriving the alphabet from their
    /// distinct characters in first-occurrence order.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::Alphabet`] if the batch uses more than 256
    /// distinct characters. [`BuildError::UnknownCharacter`] cannot
    /// occur here: the alphabet covers every character of these terms.
    pub fn from_terms<I, S>(terms: I) -> Result<Self, BuildError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let terms: Vec<String> = terms.into_iter().map(|t| t.as_ref().to_string()).collect();
        let alphabet = Alphabet::from_terms(&terms)?;
        Self::build(alphabet, &terms)
    }

    /// The alphabet this automaton was built over.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Number of stored strings (equivalently, assigned identifiers).
    pub fn len(&self) -> usize {
        self.term_count
    }

    /// `true` if no strings are stored.
    pub fn is_empty(&self) -> bool {
        self.term_count == 0
    }

    /// Number of distinct nodes in the minimized arena, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Look up the identifier assigned to `term`.
    ///
    /// Returns `None` if `term` is not stored, including when it
    /// contains a character outside the alphabet.
    pub fn index_of(&self, term: &str) -> Option<TermId> {
        let mut node = 0u32;
        let mut rank = 0u32;

        for ch in term.chars() {
            let label = self.alphabet.index_of(ch)?;
            let current = &self.nodes[node as usize];
            if current.is_final {
                rank += 1;
            }
            let mut next = None;
            for &(l, child) in &current.edges {
                if l < label {
                    rank += self.nodes[child as usize].words_below;
                } else if l == label {
                    next = Some(child);
                    break;
                } else {
                    break;
                }
            }
            node = next?;
        }

        if self.nodes[node as usize].is_final {
            Some(TermId::new(rank))
        } else {
            None
        }
    }

    /// Reconstruct the term assigned identifier `id`.
    ///
    /// Returns `None` if `id` is outside `0..len()`. Exact inverse of
    /// [`index_of`](Self::index_of): re-walks the automaton consuming
    /// per-node word counts along the canonical traversal order.
    pub fn for_index(&self, id: TermId) -> Option<String> {
        if id.value() as usize >= self.term_count {
            return None;
        }

        let mut remaining = id.value();
        let mut node = 0u32;
        let mut term = String::new();

        loop {
            let current = &self.nodes[node as usize];
            if current.is_final {
                if remaining == 0 {
                    return Some(term);
                }
                remaining -= 1;
            }

            let mut descended = false;
            for &(label, child) in &current.edges {
                let below = self.nodes[child as usize].words_below;
                if remaining < below {
                    // char_at cannot miss: labels are alphabet indices.
                    term.push(self.alphabet.char_at(label)?);
                    node = child;
                    descended = true;
                    break;
                }
                remaining -= below;
            }

            if !descended {
                // Unreachable while words_below is consistent.
                return None;
            }
        }
    }

    /// Check whether `term` is stored.
    ///
    /// Same walk as [`index_of`](Self::index_of) without rank
    /// accounting; never fails, unknown characters simply miss.
    pub fn contains(&self, term: &str) -> bool {
        let mut node = 0u32;
        for ch in term.chars() {
            let label = match self.alphabet.index_of(ch) {
                Some(label) => label,
                None => return false,
            };
            match find_edge(&self.nodes[node as usize].edges, label) {
                Some(child) => node = child,
                None => return false,
            }
        }
        self.nodes[node as usize].is_final
    }

    /// Lazily enumerate all stored strings in identifier order.
    ///
    /// Restartable: each call yields a fresh traversal.
    pub fn iter(&self) -> Strings<'_> {
        Strings::new(self)
    }

    /// Lazily enumerate the distinct nodes of the arena, each exactly
    /// once, regardless of how many paths share it.
    pub fn nodes(&self) -> Nodes {
        Nodes::new(Arc::clone(&self.nodes))
    }

    pub(crate) fn arena(&self) -> &[Node] {
        &self.nodes
    }
}

/// Mutable trie accumulated during [`WordAutomaton::build`].
struct Trie {
    nodes: Vec<TrieNode>,
}

struct TrieNode {
    edges: EdgeList,
    is_final: bool,
}

impl Trie {
    fn new() -> Self {
        Trie {
            nodes: vec![TrieNode {
                edges: EdgeList::new(),
                is_final: false,
            }],
        }
    }

    fn insert(&mut self, alphabet: &Alphabet, term: &str) -> Result<(), BuildError> {
        let mut node = 0usize;
        for ch in term.chars() {
            let label = alphabet
                .index_of(ch)
                .ok_or_else(|| BuildError::UnknownCharacter {
                    term: term.to_string(),
                    ch,
                })?;

            node = match self.nodes[node]
                .edges
                .binary_search_by_key(&label, |(l, _)| *l)
            {
                Ok(pos) => self.nodes[node].edges[pos].1 as usize,
                Err(pos) => {
                    let child = self.nodes.len() as u32;
                    self.nodes.push(TrieNode {
                        edges: EdgeList::new(),
                        is_final: false,
                    });
                    self.nodes[node].edges.insert(pos, (label, child));
                    child as usize
                }
            };
        }
        self.nodes[node].is_final = true;
        Ok(())
    }

    /// Minimize bottom-up and freeze into an immutable automaton.
    ///
    /// Post-order over the trie guarantees children are finalized
    /// before their parents, so structural signatures compare minimized
    /// child identities. Equivalent nodes merge through the signature
    /// cache and share their suffix continuations.
    fn minimize(self, alphabet: Alphabet) -> WordAutomaton {
        let mut arena: Vec<Node> = Vec::new();
        let mut cache: FxHashMap<(bool, EdgeList), u32> = FxHashMap::default();
        // trie index -> minimized arena index
        let mut remap: Vec<u32> = vec![0; self.nodes.len()];

        // Iterative post-order: (trie index, next edge to descend).
        let mut stack: Vec<(usize, usize)> = vec![(0, 0)];
        while let Some((trie_idx, edge_pos)) = stack.pop() {
            let trie_node = &self.nodes[trie_idx];
            if edge_pos < trie_node.edges.len() {
                let child = trie_node.edges[edge_pos].1 as usize;
                stack.push((trie_idx, edge_pos + 1));
                stack.push((child, 0));
                continue;
            }

            let edges: EdgeList = trie_node
                .edges
                .iter()
                .map(|&(label, child)| (label, remap[child as usize]))
                .collect();
            let signature = (trie_node.is_final, edges.clone());
            let min_idx = *cache.entry(signature).or_insert_with(|| {
                let words_below = u32::from(trie_node.is_final)
                    + edges
                        .iter()
                        .map(|&(_, child)| arena[child as usize].words_below)
                        .sum::<u32>();
                arena.push(Node {
                    edges,
                    is_final: trie_node.is_final,
                    words_below,
                });
                (arena.len() - 1) as u32
            });
            remap[trie_idx] = min_idx;
        }

        // Renumber in canonical DFS pre-order so the root sits at index
        // 0 and arena order matches the traversal that assigns ids.
        let arena = renumber_preorder(arena, remap[0]);

        let term_count = arena[0].words_below as usize;
        WordAutomaton {
            alphabet,
            nodes: Arc::new(arena),
            term_count,
        }
    }
}

/// Rebuild the arena with nodes in first-visit order of the canonical
/// depth-first traversal from `root`.
fn renumber_preorder(arena: Vec<Node>, root: u32) -> Vec<Node> {
    const UNVISITED: u32 = u32::MAX;
    let mut order: Vec<u32> = vec![UNVISITED; arena.len()];
    let mut visit: Vec<u32> = Vec::with_capacity(arena.len());
    let mut stack = vec![root];

    while let Some(idx) = stack.pop() {
        if order[idx as usize] != UNVISITED {
            continue;
        }
        order[idx as usize] = visit.len() as u32;
        visit.push(idx);
        // Reverse push keeps ascending-label children first in DFS.
        for &(_, child) in arena[idx as usize].edges.iter().rev() {
            if order[child as usize] == UNVISITED {
                stack.push(child);
            }
        }
    }

    visit
        .into_iter()
        .map(|old| {
            let node = &arena[old as usize];
            Node {
                edges: node
                    .edges
                    .iter()
                    .map(|&(label, child)| (label, order[child as usize]))
                    .collect(),
                is_final: node.is_final,
                words_below: node.words_below,
            }
        })
        .collect()
}
