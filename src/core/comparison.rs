//! Guess comparison against the solution
//!
//! Produces the ground-truth classification of a guess:
//! - correct positions (right letter, right place)
//! - wrong-position matches (letter appears elsewhere in the solution)
//!
//! Every solution letter can be claimed by at most one guess letter and
//! every guess letter claims at most one solution letter, so repeated
//! letters are never double counted.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Result of comparing one guess to the solution
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Comparison {
    /// Positions where the guess letter equals the solution letter
    pub correct: BTreeSet<usize>,
    /// Positions whose letter matched an unclaimed solution letter elsewhere
    pub wrong_position: BTreeSet<usize>,
}

impl Comparison {
    /// Whether every position is correct
    #[must_use]
    pub fn is_solved(&self, len: usize) -> bool {
        self.correct.len() == len
    }

    /// Collapse the comparison into the per-row score
    #[must_use]
    pub fn feedback(&self) -> GuessFeedback {
        GuessFeedback {
            correct: self.correct.len(),
            wrong_position: self.wrong_position.len(),
        }
    }
}

/// Compare `guess` to `solution`
///
/// Both must have the same length and contain only lowercase letters.
///
/// # Algorithm
/// 1. First pass: mark exact matches and consume both slots
/// 2. Second pass: for each unconsumed guess slot, claim the first unconsumed
///    solution slot (other than its own) holding the same letter, then stop
///
/// # Examples
/// ```
/// use wordle_belief::core::compare;
///
/// let result = compare("robot", "floor");
/// assert_eq!(result.correct.into_iter().collect::<Vec<_>>(), vec![3]);
/// assert_eq!(result.wrong_position.into_iter().collect::<Vec<_>>(), vec![0, 1]);
/// ```
#[must_use]
pub fn compare(guess: &str, solution: &str) -> Comparison {
    debug_assert_eq!(guess.len(), solution.len(), "guess and solution lengths differ");

    let guess = guess.as_bytes();
    let solution = solution.as_bytes();
    let len = guess.len().min(solution.len());

    let mut result = Comparison::default();
    let mut guess_used = vec![false; len];
    let mut solution_used = vec![false; len];

    for i in 0..len {
        if guess[i] == solution[i] {
            result.correct.insert(i);
            guess_used[i] = true;
            solution_used[i] = true;
        }
    }

    for i in 0..len {
        if guess_used[i] {
            continue;
        }
        let claimed = (0..len).find(|&j| j != i && !solution_used[j] && guess[i] == solution[j]);
        if let Some(j) = claimed {
            result.wrong_position.insert(i);
            guess_used[i] = true;
            solution_used[j] = true;
        }
    }

    result
}

/// Per-row score: how many letters are correct and how many are misplaced
///
/// Stored as a two-element array, `[correct, wrong_position]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[usize; 2]", into = "[usize; 2]")]
pub struct GuessFeedback {
    pub correct: usize,
    pub wrong_position: usize,
}

impl From<[usize; 2]> for GuessFeedback {
    fn from([correct, wrong_position]: [usize; 2]) -> Self {
        Self {
            correct,
            wrong_position,
        }
    }
}

impl From<GuessFeedback> for [usize; 2] {
    fn from(feedback: GuessFeedback) -> Self {
        [feedback.correct, feedback.wrong_position]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[usize]) -> BTreeSet<usize> {
        items.iter().copied().collect()
    }

    /// Letter-count oracle: greens first, then yellows from the leftover pool
    fn oracle(guess: &str, solution: &str) -> Comparison {
        let g = guess.as_bytes();
        let s = solution.as_bytes();
        let mut pool = [0usize; 26];
        let mut result = Comparison::default();

        for i in 0..g.len() {
            if g[i] == s[i] {
                result.correct.insert(i);
            } else {
                pool[(s[i] - b'a') as usize] += 1;
            }
        }
        for i in 0..g.len() {
            let slot = &mut pool[(g[i] - b'a') as usize];
            if !result.correct.contains(&i) && *slot > 0 {
                result.wrong_position.insert(i);
                *slot -= 1;
            }
        }
        result
    }

    #[test]
    fn identical_words_are_all_correct() {
        let result = compare("abcde", "abcde");
        assert_eq!(result.correct, set(&[0, 1, 2, 3, 4]));
        assert!(result.wrong_position.is_empty());
        assert!(result.is_solved(5));
    }

    #[test]
    fn disjoint_letters_match_nothing() {
        let result = compare("zzzzz", "abcde");
        assert!(result.correct.is_empty());
        assert!(result.wrong_position.is_empty());
    }

    #[test]
    fn repeated_letters_are_consumed_once() {
        let result = compare("aabbb", "ababa");
        assert_eq!(result.correct, set(&[0, 3]));
        assert_eq!(result.wrong_position, set(&[1, 2]));
        assert_eq!(result, oracle("aabbb", "ababa"));
    }

    #[test]
    fn single_guess_letter_claims_one_slot() {
        // The first 'e' must leave the second solution 'e' for the last guess 'e'
        let result = compare("ezzze", "yeyez");
        assert!(result.correct.is_empty());
        assert_eq!(result.wrong_position, set(&[0, 1, 4]));
        assert_eq!(result, oracle("ezzze", "yeyez"));
    }

    #[test]
    fn green_takes_priority_over_yellow() {
        // SPEED vs ERASE: S, E, E misplaced
        let result = compare("speed", "erase");
        assert!(result.correct.is_empty());
        assert_eq!(result.wrong_position, set(&[0, 2, 3]));

        // ROBOT vs FLOOR: second O is green, first O and R misplaced
        let result = compare("robot", "floor");
        assert_eq!(result.correct, set(&[3]));
        assert_eq!(result.wrong_position, set(&[0, 1]));
    }

    #[test]
    fn matches_oracle_on_every_pair_of_small_words() {
        let alphabet = [b'a', b'b', b'c'];
        let mut words = Vec::new();
        for &x in &alphabet {
            for &y in &alphabet {
                for &z in &alphabet {
                    words.push(String::from_utf8(vec![x, y, z]).unwrap());
                }
            }
        }

        for guess in &words {
            for solution in &words {
                let result = compare(guess, solution);
                assert_eq!(result, oracle(guess, solution), "{guess} vs {solution}");
                assert!(result.correct.is_disjoint(&result.wrong_position));
            }
        }
    }

    #[test]
    fn feedback_counts_and_serializes_as_pair() {
        let feedback = compare("crane", "slate").feedback();
        assert_eq!(
            feedback,
            GuessFeedback {
                correct: 2,
                wrong_position: 0
            }
        );
        assert_eq!(serde_json::to_string(&feedback).unwrap(), "[2,0]");
        let parsed: GuessFeedback = serde_json::from_str("[1,3]").unwrap();
        assert_eq!(parsed.wrong_position, 3);
    }
}
