//! Lazy enumeration over automaton strings and nodes.
//!
//! Both iterators are cheap to create and restartable: each call to
//! [`WordAutomaton::iter`] or [`WordAutomaton::nodes`] starts a fresh
//! traversal. String enumeration performs depth-first traversal in
//! ascending transition-label order, so strings appear exactly in
//! identifier order; node enumeration walks the arena directly, so each
//! distinct node appears exactly once however many strings share it.

use std::sync::Arc;

use super::{Node, WordAutomaton};

/// Iterator over all stored strings, in identifier order.
///
/// Uses an explicit DFS stack with one shared character path; frames
/// record the depth to truncate back to, so path work stays
/// proportional to the traversal instead of per-string copies.
pub struct Strings<'a> {
    automaton: &'a WordAutomaton,
    /// (arena index, path depth before this node's label, label).
    stack: Vec<(u32, usize, Option<u8>)>,
    path: Vec<char>,
}

impl<'a> Strings<'a> {
    pub(crate) fn new(automaton: &'a WordAutomaton) -> Self {
        Strings {
            automaton,
            stack: vec![(0, 0, None)],
            path: Vec::new(),
        }
    }
}

impl Iterator for Strings<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        let arena = self.automaton.arena();
        let alphabet = self.automaton.alphabet();

        while let Some((idx, depth, label)) = self.stack.pop() {
            self.path.truncate(depth);
            if let Some(label) = label {
                // Labels are alphabet indices; char_at cannot miss.
                self.path.push(alphabet.char_at(label)?);
            }

            let node = &arena[idx as usize];
            // Reverse push keeps ascending-label children first out.
            for &(label, child) in node.edges.iter().rev() {
                self.stack.push((child, self.path.len(), Some(label)));
            }

            if node.is_final {
                return Some(self.path.iter().collect());
            }
        }
        None
    }
}

/// A lightweight handle onto one node of the automaton arena.
///
/// Clones are cheap (`Arc` reference counting) and handles stay valid
/// for the lifetime of the arena, independent of the automaton value
/// they came from.
#[derive(Clone)]
pub struct AutomatonNode {
    nodes: Arc<Vec<Node>>,
    idx: u32,
}

impl AutomatonNode {
    /// True if the path reaching this node spells a stored string.
    pub fn is_final(&self) -> bool {
        self.nodes[self.idx as usize].is_final
    }

    /// Number of outgoing transitions.
    pub fn edge_count(&self) -> usize {
        self.nodes[self.idx as usize].edges.len()
    }

    /// Number of stored strings in the sub-automaton rooted here.
    pub fn term_count(&self) -> usize {
        self.nodes[self.idx as usize].words_below as usize
    }

    /// Follow the transition labeled with the given alphabet index.
    pub fn transition(&self, label: u8) -> Option<AutomatonNode> {
        super::find_edge(&self.nodes[self.idx as usize].edges, label).map(|child| {
            AutomatonNode {
                nodes: Arc::clone(&self.nodes),
                idx: child,
            }
        })
    }

    /// Iterate outgoing edges as (label, child) pairs, labels ascending.
    pub fn edges(&self) -> impl Iterator<Item = (u8, AutomatonNode)> + '_ {
        self.nodes[self.idx as usize].edges.iter().map(|&(label, child)| {
            (
                label,
                AutomatonNode {
                    nodes: Arc::clone(&self.nodes),
                    idx: child,
                },
            )
        })
    }
}

impl std::fmt::Debug for AutomatonNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AutomatonNode")
            .field("idx", &self.idx)
            .field("is_final", &self.is_final())
            .field("edge_count", &self.edge_count())
            .finish()
    }
}

/// Iterator over the distinct nodes of the arena, each exactly once.
pub struct Nodes {
    nodes: Arc<Vec<Node>>,
    next: u32,
}

impl Nodes {
    pub(crate) fn new(nodes: Arc<Vec<Node>>) -> Self {
        Nodes { nodes, next: 0 }
    }
}

impl Iterator for Nodes {
    type Item = AutomatonNode;

    fn next(&mut self) -> Option<Self::Item> {
        if (self.next as usize) < self.nodes.len() {
            let handle = AutomatonNode {
                nodes: Arc::clone(&self.nodes),
                idx: self.next,
            };
            self.next += 1;
            Some(handle)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.nodes.len() - self.next as usize;
        (remaining, Some(remaining))
    }
}

#[cfg(test)]
mod tests {
    use crate::alphabet::Alphabet;
    use crate::automaton::WordAutomaton;

    fn build(terms: &[&str]) -> WordAutomaton {
        WordAutomaton::build(Alphabet::new('a'..='z').unwrap(), terms).unwrap()
    }

    #[test]
    fn strings_in_identifier_order() {
        let automaton = build(&["walk", "run", "walking", "ran"]);
        let strings: Vec<String> = automaton.iter().collect();
        assert_eq!(strings, ["ran", "run", "walk", "walking"]);
        for (i, term) in strings.iter().enumerate() {
            assert_eq!(automaton.index_of(term).unwrap().value() as usize, i);
        }
    }

    #[test]
    fn enumeration_is_restartable() {
        let automaton = build(&["one", "two"]);
        let first: Vec<String> = automaton.iter().collect();
        let second: Vec<String> = automaton.iter().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn each_node_exactly_once() {
        let automaton = build(&["tap", "top", "tip"]);
        assert_eq!(automaton.nodes().count(), automaton.node_count());
    }

    #[test]
    fn node_transitions_mirror_lookups() {
        let automaton = build(&["at", "an"]);
        let alphabet = automaton.alphabet();
        let root = automaton.nodes().next().unwrap();

        let a = root.transition(alphabet.index_of('a').unwrap()).unwrap();
        assert!(!a.is_final());
        assert_eq!(a.edge_count(), 2);
        assert_eq!(a.term_count(), 2);

        let t = a.transition(alphabet.index_of('t').unwrap()).unwrap();
        assert!(t.is_final());
        assert_eq!(t.edge_count(), 0);
    }

    #[test]
    fn empty_automaton_yields_nothing() {
        let automaton = build(&[]);
        assert_eq!(automaton.iter().count(), 0);
        assert_eq!(automaton.nodes().count(), 1);
    }
}
