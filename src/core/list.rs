// src/core/list.rs
use crate::core::types::{LetterCounts, LetterEntry, LetterList};

/// Turns a letter multiset into the ordered list a view can render directly.
pub struct LetterListBuilder;

impl LetterListBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Projects each (letter, count) pair into a `LetterEntry` and sorts
    /// ascending by letter. Letters are unique keys, so no tie-break is
    /// needed. An empty multiset yields an empty list, which views treat as
    /// "section not applicable".
    pub fn build(&self, counts: &LetterCounts) -> LetterList {
        let mut entries: LetterList = counts
            .iter()
            .map(|(&letter, &count)| LetterEntry { letter, count })
            .collect();
        entries.sort_by_key(|entry| entry.letter);
        entries
    }
}
