//! Wordle Belief
//!
//! A Wordle-style daily puzzle where the board shows what the player believes
//! about each letter, not what the game knows. Ground truth is only revealed
//! once the round ends; until then each row carries a score of correct and
//! misplaced letters.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_belief::core::compare;
//!
//! let result = compare("crane", "slate");
//! assert_eq!(result.feedback().correct, 2);
//! assert_eq!(result.feedback().wrong_position, 0);
//! ```

// Core domain types
pub mod core;

// Player letter beliefs
pub mod knowledge;

// Round state machine
pub mod game;

// Key-value persistence
pub mod storage;

// Word lists
pub mod wordlists;

// Day numbering
pub mod calendar;

// Settings
pub mod config;

// Error types
pub mod error;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
