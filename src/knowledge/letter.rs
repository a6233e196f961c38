//! Per-letter belief record

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// What the player believes about one letter
///
/// `letter_count` never drops below the number of pinned positions. A known
/// letter with a zero count is believed absent; unpinning the last counted
/// occurrence forgets the letter again.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LetterInfo {
    /// The player has decided something about this letter (absent unless counted)
    #[serde(default)]
    pub known: bool,
    /// How many times the player believes the letter occurs in the solution
    #[serde(default)]
    pub letter_count: usize,
    /// Positions the player has pinned as correct
    #[serde(default)]
    pub correct_positions: BTreeSet<usize>,
}

impl LetterInfo {
    /// Whether the count covers every pinned position
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.letter_count >= self.correct_positions.len()
    }

    /// Fix up a record read from outside
    ///
    /// Positions at or beyond `word_len` are dropped and the count is raised
    /// to cover the pinned positions that remain.
    pub(crate) fn repair(&mut self, word_len: usize) {
        self.correct_positions.retain(|&pos| pos < word_len);
        self.letter_count = self.letter_count.max(self.correct_positions.len());
    }
}
