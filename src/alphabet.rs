//! Dense character↔index table for automaton transitions.
//!
//! Vocabulary strings draw from a small, closed character set. Mapping
//! each accepted character to a dense index lets automaton nodes keep
//! their transitions as single-byte labels, and lets enumeration rebuild
//! strings from label paths without consulting the input terms.

use rustc_hash::FxHashMap;

use crate::error::AlphabetError;

/// An ordered set of accepted characters with dense indices.
///
/// Each character maps to an index in `0..len()`, assigned in the order
/// the characters were supplied. The alphabet is immutable once built
/// and cheap to clone.
///
/// Transition labels in the automaton are `u8`, so an alphabet holds at
/// most 256 characters.
#[derive(Debug, Clone)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Alphabet {
    chars: Vec<char>,
    indices: FxHashMap<char, u8>,
}

impl Alphabet {
    /// Build an alphabet from characters in index order.
    ///
    /// # Errors
    ///
    /// Returns [`AlphabetError::DuplicateCharacter`] if a character
    /// appears twice, or [`AlphabetError::TooLarge`] past 256 entries.
    pub fn new<I>(chars: I) -> Result<Self, AlphabetError>
    where
        I: IntoIterator<Item = char>,
    {
        let mut ordered = Vec::new();
        let mut indices = FxHashMap::default();

        for ch in chars {
            if ordered.len() == 256 {
                return Err(AlphabetError::TooLarge);
            }
            if indices.insert(ch, ordered.len() as u8).is_some() {
                return Err(AlphabetError::DuplicateCharacter(ch));
            }
            ordered.push(ch);
        }

        Ok(Alphabet {
            chars: ordered,
            indices,
        })
    }

    /// Derive an alphabet from the distinct characters of a term batch,
    /// in first-occurrence order.
    ///
    /// Convenience for callers without a curated character set: the
    /// resulting alphabet accepts exactly the characters the batch uses,
    /// so a subsequent [`crate::automaton::WordAutomaton::build`] over
    /// the same batch cannot fail on an unknown character.
    ///
    /// # Errors
    ///
    /// Returns [`AlphabetError::TooLarge`] if the batch uses more than
    /// 256 distinct characters.
    pub fn from_terms<I, S>(terms: I) -> Result<Self, AlphabetError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut ordered = Vec::new();
        let mut indices = FxHashMap::default();

        for term in terms {
            for ch in term.as_ref().chars() {
                if indices.contains_key(&ch) {
                    continue;
                }
                if ordered.len() == 256 {
                    return Err(AlphabetError::TooLarge);
                }
                indices.insert(ch, ordered.len() as u8);
                ordered.push(ch);
            }
        }

        Ok(Alphabet {
            chars: ordered,
            indices,
        })
    }

    /// Look up the dense index of a character.
    ///
    /// Returns `None` for characters outside the alphabet.
    #[inline]
    pub fn index_of(&self, ch: char) -> Option<u8> {
        self.indices.get(&ch).copied()
    }

    /// Look up the character at a dense index.
    #[inline]
    pub fn char_at(&self, index: u8) -> Option<char> {
        self.chars.get(index as usize).copied()
    }

    /// Number of characters in the alphabet.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// `true` if the alphabet holds no characters.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Iterate over the characters in index order.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_follow_supply_order() {
        let alphabet = Alphabet::new("zya".chars()).unwrap();
        assert_eq!(alphabet.index_of('z'), Some(0));
        assert_eq!(alphabet.index_of('y'), Some(1));
        assert_eq!(alphabet.index_of('a'), Some(2));
        assert_eq!(alphabet.len(), 3);
    }

    #[test]
    fn unknown_character_is_none() {
        let alphabet = Alphabet::new("abc".chars()).unwrap();
        assert_eq!(alphabet.index_of('x'), None);
        assert_eq!(alphabet.char_at(7), None);
    }

    #[test]
    fn duplicate_character_rejected() {
        let err = Alphabet::new("aba".chars()).unwrap_err();
        assert_eq!(err, AlphabetError::DuplicateCharacter('a'));
    }

    #[test]
    fn round_trips_index_and_char() {
        let alphabet = Alphabet::new('a'..='z').unwrap();
        for ch in 'a'..='z' {
            let idx = alphabet.index_of(ch).unwrap();
            assert_eq!(alphabet.char_at(idx), Some(ch));
        }
    }

    #[test]
    fn from_terms_first_occurrence_order() {
        let alphabet = Alphabet::from_terms(["ba", "cab"]).unwrap();
        assert_eq!(alphabet.index_of('b'), Some(0));
        assert_eq!(alphabet.index_of('a'), Some(1));
        assert_eq!(alphabet.index_of('c'), Some(2));
    }

    #[test]
    fn empty_alphabet() {
        let alphabet = Alphabet::new(std::iter::empty()).unwrap();
        assert!(alphabet.is_empty());
        assert_eq!(alphabet.index_of('a'), None);
    }

    #[test]
    fn rejects_more_than_256_characters() {
        let chars = (0..300u32).filter_map(char::from_u32);
        assert!(matches!(
            Alphabet::new(chars),
            Err(AlphabetError::TooLarge)
        ));
    }
}
