// src/core/multiset.rs
use crate::core::types::LetterCounts;

/// Per-letter minimum over the letters present in BOTH inputs.
///
/// A letter missing from either side is dropped entirely, not clamped to
/// zero: this models "letters already on the sign that can stay, limited by
/// how many of that letter the new sign still needs". The keys-in-both
/// behavior is intentional.
pub fn min_intersection(a: &LetterCounts, b: &LetterCounts) -> LetterCounts {
    let mut output = LetterCounts::new();
    for (&letter, &count) in a {
        if let Some(&other) = b.get(&letter) {
            output.insert(letter, count.min(other));
        }
    }
    output
}

/// Per-letter subtraction clipped at zero: for every letter of `a`, subtract
/// `b`'s count (0 when absent) and keep only strictly positive remainders.
/// Letters absent from `a` never appear in the output.
pub fn clipped_difference(a: &LetterCounts, b: &LetterCounts) -> LetterCounts {
    let mut output = LetterCounts::new();
    for (&letter, &count) in a {
        let covered = b.get(&letter).copied().unwrap_or(0);
        if count > covered {
            output.insert(letter, count - covered);
        }
    }
    output
}

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn min_intersection_keeps_only_shared_letters_at_min_count() {
        let a = HashMap::from([('H', 1), ('E', 1), ('L', 2), ('O', 1)]);
        let b = HashMap::from([('W', 1), ('O', 1), ('R', 1), ('L', 1), ('D', 1)]);
        assert_eq!(min_intersection(&a, &b), HashMap::from([('L', 1), ('O', 1)]));
    }

    #[test]
    fn min_intersection_drops_one_sided_letters_instead_of_zeroing() {
        let a = HashMap::from([('A', 3), ('B', 1)]);
        let b = HashMap::from([('A', 1)]);
        assert_eq!(min_intersection(&a, &b), HashMap::from([('A', 1)]));
    }

    #[test]
    fn min_intersection_of_empty_is_empty() {
        let a = HashMap::from([('A', 2)]);
        assert!(min_intersection(&a, &LetterCounts::new()).is_empty());
        assert!(min_intersection(&LetterCounts::new(), &a).is_empty());
    }

    #[test]
    fn clipped_difference_keeps_strictly_positive_remainders() {
        let a = HashMap::from([('A', 3), ('B', 1), ('C', 2)]);
        let b = HashMap::from([('A', 1), ('B', 1), ('D', 5)]);
        assert_eq!(clipped_difference(&a, &b), HashMap::from([('A', 2), ('C', 2)]));
    }

    #[test]
    fn clipped_difference_never_invents_letters() {
        let b = HashMap::from([('Z', 9)]);
        assert!(clipped_difference(&LetterCounts::new(), &b).is_empty());
    }

    #[test]
    fn inputs_are_left_untouched() {
        let a = HashMap::from([('A', 2)]);
        let b = HashMap::from([('A', 1)]);
        min_intersection(&a, &b);
        clipped_difference(&a, &b);
        assert_eq!(a, HashMap::from([('A', 2)]));
        assert_eq!(b, HashMap::from([('A', 1)]));
    }
}
