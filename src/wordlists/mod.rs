//! Dictionary and daily solutions
//!
//! The game only needs two questions answered: is a word an accepted guess,
//! and which word is the solution on a given day.

mod embedded;
pub mod loader;

pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};

use crate::core::Word;
use crate::error::WordListError;
use rustc_hash::FxHashSet;

/// Source of accepted guesses and daily solutions
pub trait Dictionary {
    /// Whether `word` may be submitted as a guess
    fn is_valid_guess(&self, word: &str) -> bool;

    /// Solution for `day`; deterministic for a given day
    fn solution_for_day(&self, day: i64) -> &Word;
}

/// Answer list plus accepted-guess set
#[derive(Debug, Clone)]
pub struct WordList {
    answers: Vec<Word>,
    accepted: FxHashSet<String>,
}

impl WordList {
    /// Build a word list; every answer is also an accepted guess
    ///
    /// # Errors
    /// Returns `WordListError` if `answers` is empty or its words differ in
    /// length.
    pub fn new(answers: Vec<Word>, allowed: Vec<Word>) -> Result<Self, WordListError> {
        let Some(first) = answers.first() else {
            return Err(WordListError::NoAnswers);
        };
        let len = first.len();
        if let Some(odd) = answers.iter().find(|w| w.len() != len) {
            return Err(WordListError::MixedLengths {
                word: odd.text().to_string(),
                expected: len,
                actual: odd.len(),
            });
        }

        let accepted = answers
            .iter()
            .chain(allowed.iter())
            .map(|w| w.text().to_string())
            .collect();

        Ok(Self { answers, accepted })
    }

    /// The lists compiled into the binary
    ///
    /// # Panics
    /// Panics if the embedded answer list is empty, which the build data
    /// rules out.
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(
            loader::words_from_slice(ANSWERS),
            loader::words_from_slice(ALLOWED),
        )
        .expect("embedded answer list is non-empty and uniform")
    }

    /// Number of distinct daily solutions
    #[must_use]
    pub fn answer_count(&self) -> usize {
        self.answers.len()
    }

    /// Number of accepted guesses
    #[must_use]
    pub fn accepted_count(&self) -> usize {
        self.accepted.len()
    }
}

impl Dictionary for WordList {
    fn is_valid_guess(&self, word: &str) -> bool {
        self.accepted.contains(word)
    }

    fn solution_for_day(&self, day: i64) -> &Word {
        let index = day.rem_euclid(self.answers.len() as i64) as usize;
        &self.answers[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn answers_count_matches_const() {
        assert_eq!(ANSWERS.len(), ANSWERS_COUNT);
        assert_eq!(ALLOWED.len(), ALLOWED_COUNT);
    }

    #[test]
    fn embedded_answers_are_valid_words() {
        for &word in ANSWERS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn embedded_answers_are_accepted_guesses() {
        let list = WordList::embedded();
        assert_eq!(list.answer_count(), ANSWERS_COUNT);
        for &answer in ANSWERS {
            assert!(list.is_valid_guess(answer), "Answer '{answer}' not accepted");
        }
        assert!(list.is_valid_guess("crane"));
        assert!(!list.is_valid_guess("qqqqq"));
    }

    #[test]
    fn solution_for_day_wraps() {
        let list = WordList::new(words_from_slice(&["alpha", "bravo", "delta"]), Vec::new()).unwrap();
        assert_eq!(list.solution_for_day(0).text(), "alpha");
        assert_eq!(list.solution_for_day(4).text(), "bravo");
        assert_eq!(list.solution_for_day(-1).text(), "delta");
    }

    #[test]
    fn rejects_empty_and_mixed_answer_lists() {
        assert!(matches!(
            WordList::new(Vec::new(), words_from_slice(&["crane"])),
            Err(WordListError::NoAnswers)
        ));
        assert!(matches!(
            WordList::new(words_from_slice(&["crane", "cat"]), Vec::new()),
            Err(WordListError::MixedLengths { expected: 5, actual: 3, .. })
        ));
    }
}
