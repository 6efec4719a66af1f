// src/core/counter.rs
use crate::core::types::LetterCounts;

/// Extracts the sign-board letters out of free-form text.
///
/// The board only stocks the Latin alphabet, so counting is case-insensitive
/// and everything that is not A-Z after folding (digits, punctuation,
/// whitespace, accented or non-Latin letters) is skipped.
pub struct LetterCounter;

impl LetterCounter {
    pub fn new() -> Self {
        Self
    }

    /// Counts the letters in `text`. Total over any input: a string with no
    /// letters yields an empty map. O(n) in the input length.
    pub fn count(&self, text: &str) -> LetterCounts {
        let mut letters = LetterCounts::new();
        // Fold the whole string first, then classify char by char.
        for c in text.to_uppercase().chars() {
            if c.is_ascii_uppercase() {
                *letters.entry(c).or_insert(0) += 1;
            }
        }
        letters
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn counts_repeated_letters() {
        let counter = LetterCounter::new();
        assert_eq!(
            counter.count("HELLO"),
            HashMap::from([('H', 1), ('E', 1), ('L', 2), ('O', 1)])
        );
    }

    #[test]
    fn folds_case_before_counting() {
        let counter = LetterCounter::new();
        assert_eq!(counter.count("Cat"), counter.count("cAt"));
        assert_eq!(counter.count("Cat"), counter.count("CAT"));
    }

    #[test]
    fn ignores_everything_but_ascii_letters() {
        let counter = LetterCounter::new();
        assert_eq!(
            counter.count("Open 9am! (Sun)"),
            HashMap::from([
                ('O', 1),
                ('P', 1),
                ('E', 1),
                ('N', 2),
                ('A', 1),
                ('M', 1),
                ('S', 1),
                ('U', 1),
            ])
        );
        assert_eq!(counter.count("café"), HashMap::from([('C', 1), ('A', 1), ('F', 1)]));
    }

    #[test]
    fn empty_and_letter_free_input_yield_empty_counts() {
        let counter = LetterCounter::new();
        assert!(counter.count("").is_empty());
        assert!(counter.count("123 ?!").is_empty());
    }
}
