//! Player belief over the whole alphabet
//!
//! Each submitted cell can be clicked to advance the belief about its letter
//! through a four-step cycle:
//!
//! | cell shows | effect on the letter                                   |
//! |------------|--------------------------------------------------------|
//! | Unknown    | mark known (absent)                                    |
//! | Absent     | count one more occurrence, clear known                 |
//! | Present    | pin this position as correct, raising count if needed  |
//! | Correct    | unpin this position, count one fewer                   |
//!
//! Four clicks on the same cell with no other clicks on that letter in
//! between bring the letter back to where it started.

use super::LetterInfo;
use crate::core::CellColor;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const ALPHABET_SIZE: usize = 26;

/// Belief records for `a` through `z`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<char, LetterInfo>", into = "BTreeMap<char, LetterInfo>")]
pub struct LetterKnowledge {
    letters: [LetterInfo; ALPHABET_SIZE],
}

impl LetterKnowledge {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Belief record for `letter`, if it is `a`-`z`
    #[must_use]
    pub fn get(&self, letter: u8) -> Option<&LetterInfo> {
        letter_index(letter).map(|i| &self.letters[i])
    }

    /// Iterate over `(letter, record)` pairs in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = (char, &LetterInfo)> {
        self.letters
            .iter()
            .enumerate()
            .map(|(i, info)| (char::from(b'a' + i as u8), info))
    }

    /// Restore every letter to its default record
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Colors the player's belief assigns to the cells of `guess`
    ///
    /// Pinned positions are Correct. Remaining cells of a letter are Present
    /// while the letter still has believed occurrences left over after its
    /// Correct cells in this guess, then Absent if the letter is known and
    /// Unknown otherwise.
    #[must_use]
    pub fn project(&self, guess: &str) -> Vec<CellColor> {
        let bytes = guess.as_bytes();
        let mut colors = vec![CellColor::Unknown; bytes.len()];
        let mut used = [0usize; ALPHABET_SIZE];

        for (pos, &letter) in bytes.iter().enumerate() {
            if let Some(i) = letter_index(letter)
                && self.letters[i].correct_positions.contains(&pos)
            {
                colors[pos] = CellColor::Correct;
                used[i] += 1;
            }
        }

        for (pos, &letter) in bytes.iter().enumerate() {
            if colors[pos] == CellColor::Correct {
                continue;
            }
            let Some(i) = letter_index(letter) else {
                continue;
            };
            let info = &self.letters[i];
            colors[pos] = if used[i] < info.letter_count {
                used[i] += 1;
                CellColor::Present
            } else if info.known {
                CellColor::Absent
            } else {
                CellColor::Unknown
            };
        }

        colors
    }

    /// Advance the belief about `letter` after a click on the cell at
    /// `position` that currently shows `current`
    ///
    /// Non-letters are ignored.
    pub fn toggle(&mut self, letter: u8, position: usize, current: CellColor) {
        let Some(i) = letter_index(letter) else {
            return;
        };
        let info = &mut self.letters[i];

        match current {
            CellColor::Unknown => {
                info.known = true;
            }
            CellColor::Absent => {
                info.letter_count += 1;
                info.known = false;
            }
            CellColor::Present => {
                info.correct_positions.insert(position);
                info.letter_count = info.letter_count.max(info.correct_positions.len());
            }
            CellColor::Correct => {
                if info.correct_positions.remove(&position) {
                    info.letter_count -= 1;
                }
                if info.letter_count == 0 {
                    info.known = false;
                }
            }
        }

        debug_assert!(info.is_consistent(), "belief invariant broken for {}", letter as char);
    }

    /// Restore invariants on every record, e.g. after loading from storage
    pub(crate) fn repair(&mut self, word_len: usize) {
        for info in &mut self.letters {
            info.repair(word_len);
        }
    }
}

fn letter_index(letter: u8) -> Option<usize> {
    letter
        .is_ascii_lowercase()
        .then(|| usize::from(letter - b'a'))
}

impl From<BTreeMap<char, LetterInfo>> for LetterKnowledge {
    fn from(map: BTreeMap<char, LetterInfo>) -> Self {
        let mut knowledge = Self::default();
        for (letter, info) in map {
            if let Ok(byte) = u8::try_from(letter)
                && let Some(i) = letter_index(byte)
            {
                knowledge.letters[i] = info;
            }
        }
        knowledge
    }
}

impl From<LetterKnowledge> for BTreeMap<char, LetterInfo> {
    fn from(knowledge: LetterKnowledge) -> Self {
        knowledge
            .iter()
            .map(|(letter, info)| (letter, info.clone()))
            .collect()
    }
}
