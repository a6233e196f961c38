//! Formatting utilities for terminal output

use crate::core::{CellColor, GuessFeedback};
use colored::{ColoredString, Colorize};

/// One board cell: the letter on a background matching its color
#[must_use]
pub fn paint_cell(letter: char, color: CellColor) -> ColoredString {
    let tile = format!(" {} ", letter.to_ascii_uppercase());
    match color {
        CellColor::Unknown => tile.black().on_white(),
        CellColor::Absent => tile.white().on_bright_black(),
        CellColor::Present => tile.black().on_yellow(),
        CellColor::Correct => tile.black().on_green(),
    }
}

/// Score column: correct letters, then misplaced letters
#[must_use]
pub fn feedback_label(feedback: GuessFeedback) -> String {
    format!("{} correct, {} misplaced", feedback.correct, feedback.wrong_position)
}
