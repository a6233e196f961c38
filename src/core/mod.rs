//! Core domain types
//!
//! Words, cell colors and the ground-truth guess comparison. Everything here
//! is pure and has no knowledge of sessions or storage.

mod color;
mod comparison;
mod word;

pub use color::CellColor;
pub use comparison::{Comparison, GuessFeedback, compare};
pub use word::{Word, is_lowercase_word};
