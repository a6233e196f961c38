//! Terminal output formatting
//!
//! Display utilities for line-mode play and the compare command.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_comparison, print_round_end};
