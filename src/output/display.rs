//! Display functions for line-mode play

use super::formatters::{feedback_label, paint_cell};
use crate::commands::CompareResult;
use crate::core::Word;
use crate::game::{RoundState, Snapshot};
use colored::Colorize;

/// Print the whole board: submitted rows, the row being typed, empty rows
pub fn print_board(snapshot: &Snapshot) {
    println!("\n{}", "─".repeat(60).cyan());

    for (row, guess) in snapshot.submitted_guesses.iter().enumerate() {
        let cells: String = guess
            .chars()
            .zip(&snapshot.display_colors[row])
            .map(|(letter, &color)| paint_cell(letter, color).to_string())
            .collect();
        println!(
            "{:>2}. {}  {}",
            row + 1,
            cells,
            feedback_label(snapshot.guess_feedback[row]).bright_black()
        );
    }

    let filled = snapshot.submitted_guesses.len();
    if filled < snapshot.max_rounds && snapshot.round_state == RoundState::Playing {
        let typed: String = snapshot
            .current_guess
            .chars()
            .map(|c| format!(" {} ", c.to_ascii_uppercase()))
            .chain(std::iter::repeat_n(
                " _ ".to_string(),
                snapshot.solution_length - snapshot.current_guess.len(),
            ))
            .collect();
        println!("{:>2}. {}", filled + 1, typed.bold());
    }

    if snapshot.round_state == RoundState::Playing {
        let left = snapshot.max_rounds - filled;
        println!(
            "{}",
            format!("    {left} {} left", if left == 1 { "guess" } else { "guesses" }).bright_black()
        );
    }
    println!("{}", "─".repeat(60).cyan());
}

/// Print the end-of-round banner
pub fn print_round_end(state: RoundState, solution: Option<&Word>, rounds: usize) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    match state {
        RoundState::Won => println!(
            "{}",
            format!(
                "🎉 Solved in {rounds} {}!",
                if rounds == 1 { "guess" } else { "guesses" }
            )
            .bright_green()
            .bold()
        ),
        RoundState::Lost => println!(
            "{} {}",
            "The answer was:".bright_red().bold(),
            solution
                .map(|w| w.text().to_uppercase())
                .unwrap_or_default()
                .bright_yellow()
                .bold()
        ),
        RoundState::Playing => {}
    }
    println!("{}", "═".repeat(60).bright_cyan());
}

/// Print the ground-truth comparison of one guess
pub fn print_comparison(result: &CompareResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Guess {} against {}",
        result.guess.text().to_uppercase().bright_yellow().bold(),
        result.solution.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    let cells: String = result
        .guess
        .text()
        .chars()
        .zip(&result.colors)
        .map(|(letter, &color)| paint_cell(letter, color).to_string())
        .collect();
    println!("\n  {cells}");
    println!("\n  Correct positions:  {:?}", result.comparison.correct);
    println!("  Wrong positions:    {:?}", result.comparison.wrong_position);
    println!("  Score:              {}", feedback_label(result.comparison.feedback()));
    println!();
}
