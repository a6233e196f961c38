//! Simple interactive CLI mode
//!
//! Line-based play without the TUI. Each line is either a guess or a command.

use crate::calendar;
use crate::config::GameConfig;
use crate::core::Word;
use crate::game::{GameSession, KeyInput, RoundState, SubmitOutcome};
use crate::output::{print_board, print_round_end};
use crate::storage::KeyValueStore;
use crate::wordlists::Dictionary;
use colored::Colorize;
use std::io::{self, Write};
use tracing::debug;

/// One parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineCommand {
    /// Submit this word
    Guess(String),
    /// Cycle the belief color of a submitted cell (zero-based)
    Toggle { row: usize, position: usize },
    /// Forget every belief
    Clear,
    /// Redraw the board
    Board,
    Help,
    Quit,
}

impl LineCommand {
    /// Parse a line
    ///
    /// `:t ROW COL` takes one-based coordinates as shown on the board.
    ///
    /// # Errors
    /// Returns a message describing what was wrong with the line.
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let mut parts = line.split_whitespace();

        match parts.next() {
            None => Ok(Self::Board),
            Some("quit" | "q" | "exit" | ":q") => Ok(Self::Quit),
            Some(":c" | ":clear") => Ok(Self::Clear),
            Some(":b" | ":board") => Ok(Self::Board),
            Some(":h" | ":help" | "help") => Ok(Self::Help),
            Some(":t" | ":toggle") => {
                let mut coordinate = |name: &str| {
                    parts
                        .next()
                        .and_then(|s| s.parse::<usize>().ok())
                        .and_then(|n| n.checked_sub(1))
                        .ok_or_else(|| format!("Expected a {name} number starting at 1"))
                };
                let row = coordinate("row")?;
                let position = coordinate("column")?;
                Ok(Self::Toggle { row, position })
            }
            Some(cmd) if cmd.starts_with(':') => Err(format!("Unknown command '{cmd}'")),
            Some(_) => Ok(Self::Guess(line.to_string())),
        }
    }
}

/// Run the simple interactive CLI mode
///
/// With `follow_calendar` set, the day is re-checked before every line and
/// a new day starts a fresh round.
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<D: Dictionary + ?Sized, S: KeyValueStore>(
    session: &mut GameSession<'_, D, S>,
    config: &GameConfig,
    follow_calendar: bool,
) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                   Wordle - Line Mode                         ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    print_help();

    print_board(&session.snapshot());
    if session.state().is_terminal() {
        print_round_end(
            session.state(),
            session.revealed_solution(),
            session.submitted_guesses().len(),
        );
    }

    loop {
        let Some(line) = get_user_input(&format!("Guess {}", session.submitted_guesses().len() + 1))?
        else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        if follow_calendar {
            let today = calendar::today_index(config.start_date);
            if today != session.day() {
                session.on_day_change(today);
                println!("\n📅 A new day has started: day {today}");
                print_board(&session.snapshot());
            }
        }

        let command = match LineCommand::parse(&line) {
            Ok(command) => command,
            Err(message) => {
                println!("❌ {message}\n");
                continue;
            }
        };

        match command {
            LineCommand::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            LineCommand::Help => print_help(),
            LineCommand::Board => print_board(&session.snapshot()),
            LineCommand::Clear => {
                session.clear_letter_colors();
                print_board(&session.snapshot());
            }
            LineCommand::Toggle { row, position } => {
                if row >= session.submitted_guesses().len() || position >= session.solution_length()
                {
                    println!("❌ No submitted cell at row {} column {}\n", row + 1, position + 1);
                    continue;
                }
                session.change_letter_color(row, position);
                print_board(&session.snapshot());
            }
            LineCommand::Guess(word) => {
                let outcome = submit_word(session, &word);
                report(session, outcome, &word, config);
            }
        }
    }
}

/// Replace the in-progress guess with `word` and submit it
///
/// A line that is not exactly one word of the solution's length is ignored
/// whole; it is never trimmed or filtered into a different guess.
pub fn submit_word<D: Dictionary + ?Sized, S: KeyValueStore>(
    session: &mut GameSession<'_, D, S>,
    word: &str,
) -> SubmitOutcome {
    if let Err(e) = Word::with_length(word, session.solution_length()) {
        debug!(line = word, error = %e, "Ignoring malformed guess");
        return SubmitOutcome::Ignored;
    }
    while !session.current_guess().is_empty() {
        session.handle_key(KeyInput::Backspace);
    }
    for key in word.chars().filter_map(KeyInput::from_char) {
        session.handle_key(key);
    }
    session
        .handle_key(KeyInput::Enter)
        .unwrap_or(SubmitOutcome::Ignored)
}

fn report<D: Dictionary + ?Sized, S: KeyValueStore>(
    session: &mut GameSession<'_, D, S>,
    outcome: SubmitOutcome,
    word: &str,
    config: &GameConfig,
) {
    match outcome {
        SubmitOutcome::Ignored => {
            if session.state() == RoundState::Playing {
                println!(
                    "❌ Guesses must be exactly {} letters (a-z)\n",
                    session.solution_length()
                );
            } else {
                println!("The round is over. Come back tomorrow!\n");
            }
        }
        SubmitOutcome::InvalidWord { .. } => {
            println!(
                "{}\n",
                format!("❌ '{}' is not in the word list", word.to_uppercase()).red()
            );
            session.clear_invalid_word();
        }
        SubmitOutcome::Accepted => print_board(&session.snapshot()),
        SubmitOutcome::Won | SubmitOutcome::Lost => {
            std::thread::sleep(config.reveal_delay());
            print_board(&session.snapshot());
            print_round_end(
                session.state(),
                session.revealed_solution(),
                session.submitted_guesses().len(),
            );
        }
    }
}

fn print_help() {
    println!("Type a word and press Enter to guess. Colors show what YOU believe:");
    println!("  ':t ROW COL'  cycle a cell: unknown → absent → present → correct");
    println!("  ':c'          clear all letter colors");
    println!("  ':b'          show the board");
    println!("  'quit'        exit\n");
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok((read > 0).then(|| input.trim().to_string()))
}
