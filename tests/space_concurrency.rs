//! Concurrency tests for the term-space registry.
//!
//! Verifies the first-writer-wins contracts: one surviving space per
//! name under racing `get_space` calls, and one surviving identifier
//! per term under racing `add_term` calls.

use std::collections::HashSet;
use std::sync::{Arc, Barrier};
use std::thread;

use termlex::prelude::*;

const NUM_THREADS: usize = 8;

#[test]
fn racing_get_space_yields_one_instance() {
    let registry = Arc::new(TermSpaceRegistry::new());
    let barrier = Arc::new(Barrier::new(NUM_THREADS));

    let handles: Vec<_> = (0..NUM_THREADS)
        .map(|_| {
            let registry = Arc::clone(&registry);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                registry.get_space("shared")
            })
        })
        .collect();

    let spaces: Vec<Arc<TermSpace>> =
        handles.into_iter().map(|h| h.join().unwrap()).collect();
    for space in &spaces {
        assert!(Arc::ptr_eq(space, &spaces[0]));
    }
    assert_eq!(registry.len(), 1);
}

#[test]
fn racing_add_term_yields_one_identifier() {
    let space = Arc::new(TermSpace::new());
    let barrier = Arc::new(Barrier::new(NUM_THREADS));

    let handles: Vec<_> = (0..NUM_THREADS)
        .map(|_| {
            let space = Arc::clone(&space);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                space.add_term("contested")
            })
        })
        .collect();

    let ids: HashSet<u32> = handles
        .into_iter()
        .map(|h| h.join().unwrap().value())
        .collect();
    assert_eq!(ids.len(), 1);
    assert_eq!(space.len(), 1);
}

#[test]
fn concurrent_writers_to_disjoint_terms() {
    let space = Arc::new(TermSpace::new());
    let barrier = Arc::new(Barrier::new(NUM_THREADS));
    const TERMS_PER_THREAD: usize = 200;

    let handles: Vec<_> = (0..NUM_THREADS)
        .map(|t| {
            let space = Arc::clone(&space);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                for i in 0..TERMS_PER_THREAD {
                    let term = format!("thread{t}-term{i}");
                    let id = space.add_term(&term);
                    // Every later observation agrees with the first.
                    assert_eq!(space.index_of(&term), Some(id));
                    assert_eq!(space.term(id).as_deref(), Some(term.as_str()));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(space.len(), NUM_THREADS * TERMS_PER_THREAD);
    // Identifiers are dense: every value in 0..len is assigned.
    let ids: HashSet<u32> = (0..space.len() as u32)
        .filter(|&i| space.term(TermId::new(i)).is_some())
        .collect();
    assert_eq!(ids.len(), space.len());
}

#[test]
fn readers_run_alongside_writers() {
    let space = Arc::new(TermSpace::new());
    for i in 0..100 {
        space.add_term(&format!("seed{i}"));
    }

    let barrier = Arc::new(Barrier::new(NUM_THREADS));
    let handles: Vec<_> = (0..NUM_THREADS)
        .map(|t| {
            let space = Arc::clone(&space);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                for i in 0..100 {
                    if t % 2 == 0 {
                        space.add_term(&format!("writer{t}-{i}"));
                    } else {
                        assert!(space.index_of(&format!("seed{i}")).is_some());
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
    assert_eq!(space.len(), 100 + (NUM_THREADS / 2) * 100);
}
