// src/core/types.rs
use serde::Serialize;
use std::collections::HashMap;

/// A single sign-board letter, always stored uppercase A-Z.
pub type Letter = char;

/// Multiset of letters on (or wanted for) a sign: letter -> occurrence count.
/// Entries are always strictly positive; a letter with no occurrences is
/// absent from the map, never stored with a zero count. Iteration order is
/// unspecified.
pub type LetterCounts = HashMap<Letter, usize>;

/// One row of a rendered letter list, e.g. "L × 2".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LetterEntry {
    pub letter: Letter,
    pub count: usize,
}

/// Letter entries sorted ascending by letter, one entry per letter.
pub type LetterList = Vec<LetterEntry>;
