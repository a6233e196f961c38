//! Player-maintained letter knowledge
//!
//! While a round is being played the board shows what the player believes,
//! not what the evaluator knows. This module owns that belief.

mod letter;
mod model;

pub use letter::LetterInfo;
pub use model::LetterKnowledge;
