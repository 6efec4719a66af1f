// src/core/planner.rs
use crate::core::counter::LetterCounter;
use crate::core::list::LetterListBuilder;
use crate::core::multiset::{clipped_difference, min_intersection};
use crate::core::types::LetterList;
use serde::Serialize;

// The planner is composed of the counting and list-building components.
// It holds no state of its own: every plan() call starts from scratch.
pub struct SignPlanner {
    counter: LetterCounter,
    list_builder: LetterListBuilder,
}

/// The three letter lists produced for one old/new sign pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignPlan {
    /// Letters that stay on the board, capped at the smaller of the two
    /// signs' occurrence counts.
    pub keep: LetterList,
    /// Letters (or excess counts) to fetch from storage for the new sign.
    pub grab: LetterList,
    /// Letters (or excess counts) to remove from the board and put away.
    pub take: LetterList,
}

impl SignPlan {
    pub fn is_empty(&self) -> bool {
        self.keep.is_empty() && self.grab.is_empty() && self.take.is_empty()
    }
}

impl SignPlanner {
    pub fn new() -> Self {
        Self {
            counter: LetterCounter::new(),
            list_builder: LetterListBuilder::new(),
        }
    }

    /// Computes the keep/grab/take lists for swapping `old_sign` out for
    /// `new_sign`. Pure and synchronous; callers re-run it in full on every
    /// edit rather than patching a previous result.
    pub fn plan(&self, old_sign: &str, new_sign: &str) -> SignPlan {
        let old_letters = self.counter.count(old_sign);
        let new_letters = self.counter.count(new_sign);

        SignPlan {
            keep: self
                .list_builder
                .build(&min_intersection(&old_letters, &new_letters)),
            grab: self
                .list_builder
                .build(&clipped_difference(&new_letters, &old_letters)),
            take: self
                .list_builder
                .build(&clipped_difference(&old_letters, &new_letters)),
        }
    }
}
