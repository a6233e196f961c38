//! Board color projection
//!
//! Board colors are never edited in place. They are rebuilt in full from
//! the submitted guesses and either the player's belief (while playing) or
//! the solution (once the round is over).

use crate::core::{CellColor, compare};
use crate::knowledge::LetterKnowledge;

/// Belief colors for every submitted row
#[must_use]
pub fn project_all<G: AsRef<str>>(guesses: &[G], knowledge: &LetterKnowledge) -> Vec<Vec<CellColor>> {
    guesses
        .iter()
        .map(|guess| knowledge.project(guess.as_ref()))
        .collect()
}

/// Ground-truth colors for every submitted row
#[must_use]
pub fn reveal_true<G: AsRef<str>>(guesses: &[G], solution: &str) -> Vec<Vec<CellColor>> {
    guesses
        .iter()
        .map(|guess| reveal_row(guess.as_ref(), solution))
        .collect()
}

/// Ground-truth colors for one row: Correct, Present, everything else Absent
#[must_use]
pub fn reveal_row(guess: &str, solution: &str) -> Vec<CellColor> {
    let comparison = compare(guess, solution);
    let mut colors = vec![CellColor::Absent; guess.len()];
    for &pos in &comparison.correct {
        colors[pos] = CellColor::Correct;
    }
    for &pos in &comparison.wrong_position {
        colors[pos] = CellColor::Present;
    }
    colors
}

#[cfg(test)]
mod tests {
    use super::*;
    use CellColor::{Absent, Correct, Present, Unknown};

    #[test]
    fn reveal_row_marks_ground_truth() {
        assert_eq!(
            reveal_row("robot", "floor"),
            vec![Present, Present, Absent, Correct, Absent]
        );
        assert_eq!(reveal_row("zzzzz", "abcde"), vec![Absent; 5]);
    }

    #[test]
    fn reveal_true_ignores_belief() {
        let guesses = ["crane", "slate"];
        let mut knowledge = LetterKnowledge::new();
        knowledge.toggle(b'c', 0, Present);

        assert_eq!(project_all(&guesses, &knowledge)[0][0], Correct);
        let revealed = reveal_true(&guesses, "slate");
        assert_eq!(revealed[0], vec![Absent, Absent, Correct, Absent, Correct]);
        assert_eq!(revealed[1], vec![Correct; 5]);
    }

    #[test]
    fn project_all_follows_knowledge() {
        let guesses = vec!["crane".to_string(), "trace".to_string()];
        let mut knowledge = LetterKnowledge::new();
        knowledge.toggle(b'r', 1, Absent);

        let colors = project_all(&guesses, &knowledge);
        assert_eq!(colors[0], vec![Unknown, Present, Unknown, Unknown, Unknown]);
        assert_eq!(colors[1], vec![Unknown, Present, Unknown, Unknown, Unknown]);
    }
}
