//! Ground-truth comparison of a single guess

use crate::core::{CellColor, Comparison, Word, compare};
use crate::error::WordError;
use crate::game::reveal_row;

/// Result of comparing one guess to a chosen solution
#[derive(Debug, Clone)]
pub struct CompareResult {
    pub guess: Word,
    pub solution: Word,
    pub comparison: Comparison,
    /// Per-cell ground-truth colors
    pub colors: Vec<CellColor>,
}

/// Compare `guess` to `solution` without a dictionary check
///
/// # Errors
/// Returns `WordError` if either word is not made of letters or the lengths
/// differ.
pub fn compare_words(guess: &str, solution: &str) -> Result<CompareResult, WordError> {
    let solution = Word::new(solution)?;
    let guess = Word::with_length(guess, solution.len())?;

    let comparison = compare(guess.text(), solution.text());
    let colors = reveal_row(guess.text(), solution.text());

    Ok(CompareResult {
        guess,
        solution,
        comparison,
        colors,
    })
}
