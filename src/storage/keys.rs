//! Keys under which session state is stored

pub const SUBMITTED_GUESSES: &str = "submittedGuesses";
pub const ROUND_STATE: &str = "gameState";
pub const DISPLAY_COLORS: &str = "letterColors";
pub const GUESS_FEEDBACK: &str = "guessFeedback";
pub const LETTER_KNOWLEDGE: &str = "guessedLetterColors";
pub const LAST_PLAYED_DAY: &str = "day";
