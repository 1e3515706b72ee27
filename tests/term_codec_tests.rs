//! Byte-encoding round-trip tests for TermBag and TermVector.

use std::collections::BTreeMap;

use proptest::prelude::*;
use termlex::prelude::*;

fn bag_of(ids: &[u32]) -> TermBag {
    let mut builder = TermBagBuilder::new();
    for &id in ids {
        builder.add_term(TermId::new(id));
    }
    builder.build()
}

fn vector_of(ids: &[u32]) -> TermVector {
    let mut builder = TermVectorBuilder::new();
    for &id in ids {
        builder.add_term(TermId::new(id));
    }
    builder.build()
}

#[test]
fn bag_counts_match_additions() {
    // {5: 2, 6: 1, 10: 1}
    let bag = bag_of(&[5, 6, 5, 10]);
    assert_eq!(bag.len(), 4);
    assert_eq!(bag.unique_terms(), 3);

    let decoded = TermBag::from_bytes(&bag.to_bytes()).unwrap();
    assert_eq!(decoded.count_of(TermId::new(5)), 2);
    assert_eq!(decoded.count_of(TermId::new(6)), 1);
    assert_eq!(decoded.count_of(TermId::new(10)), 1);
    assert_eq!(decoded.count_of(TermId::new(0)), 0);
}

#[test]
fn vector_order_survives_round_trip() {
    let vector = vector_of(&[5, 5, 6, 10]);
    assert_eq!(vector.len(), 4);

    let decoded = TermVector::from_bytes(&vector.to_bytes()).unwrap();
    for (i, expected) in [5u32, 5, 6, 10].into_iter().enumerate() {
        assert_eq!(vector.get(i), Some(TermId::new(expected)));
        assert_eq!(decoded.get(i), Some(TermId::new(expected)));
    }
}

#[test]
fn bag_encoding_is_canonical() {
    let forward = bag_of(&[1, 2, 3, 2, 1]);
    let backward = bag_of(&[2, 1, 1, 3, 2]);
    assert_eq!(forward.to_bytes(), backward.to_bytes());
}

#[test]
fn automaton_ids_flow_into_containers() {
    let automaton = WordAutomaton::build(
        Alphabet::new('a'..='z').unwrap(),
        ["patient", "status", "normal"],
    )
    .unwrap();

    let tokens = ["patient", "status", "patient", "unknownword", "normal"];
    let mut bag = TermBagBuilder::new();
    let mut vector = TermVectorBuilder::new();
    for token in tokens {
        // Out-of-vocabulary tokens are skipped, not errors.
        if let Some(id) = automaton.index_of(token) {
            bag.add_term(id);
            vector.add_term(id);
        }
    }

    let bag = TermBag::from_bytes(&bag.build().to_bytes()).unwrap();
    let vector = TermVector::from_bytes(&vector.build().to_bytes()).unwrap();

    assert_eq!(bag.len(), 4);
    assert_eq!(bag.unique_terms(), 3);
    assert_eq!(bag.count_of(automaton.index_of("patient").unwrap()), 2);

    let decoded: Vec<String> = vector
        .iter()
        .map(|id| automaton.for_index(id).unwrap())
        .collect();
    assert_eq!(decoded, ["patient", "status", "patient", "normal"]);
}

// ============================================================================
// Property Tests
// ============================================================================

fn id_sequence_strategy() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(0u32..5_000, 0..60)
}

proptest! {
    #[test]
    fn prop_bag_round_trip(ids in id_sequence_strategy()) {
        let bag = bag_of(&ids);
        let decoded = TermBag::from_bytes(&bag.to_bytes()).unwrap();

        let mut expected: BTreeMap<u32, u64> = BTreeMap::new();
        for id in &ids {
            *expected.entry(*id).or_insert(0) += 1;
        }

        prop_assert_eq!(decoded.len() as u64, ids.len() as u64);
        prop_assert_eq!(decoded.unique_terms(), expected.len());
        for (&id, &count) in &expected {
            prop_assert_eq!(decoded.count_of(TermId::new(id)), count);
        }
        prop_assert_eq!(decoded.to_bytes(), bag.to_bytes());
    }

    #[test]
    fn prop_vector_round_trip(ids in id_sequence_strategy()) {
        let vector = vector_of(&ids);
        let decoded = TermVector::from_bytes(&vector.to_bytes()).unwrap();

        prop_assert_eq!(decoded.len(), ids.len());
        for (i, &id) in ids.iter().enumerate() {
            prop_assert_eq!(decoded.get(i), Some(TermId::new(id)));
        }
    }

    #[test]
    fn prop_truncated_bag_never_decodes(ids in id_sequence_strategy(), cut_frac in 0.0f64..1.0) {
        let bytes = bag_of(&ids).to_bytes();
        let cut = ((bytes.len() as f64) * cut_frac) as usize;
        if cut < bytes.len() {
            prop_assert!(TermBag::from_bytes(&bytes[..cut]).is_err());
        }
    }

    #[test]
    fn prop_truncated_vector_never_decodes(ids in id_sequence_strategy(), cut_frac in 0.0f64..1.0) {
        let bytes = vector_of(&ids).to_bytes();
        let cut = ((bytes.len() as f64) * cut_frac) as usize;
        if cut < bytes.len() {
            prop_assert!(TermVector::from_bytes(&bytes[..cut]).is_err());
        }
    }
}
