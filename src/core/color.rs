//! Cell colors shown on the board
//!
//! Persisted as small integers so the saved board stays a plain JSON matrix:
//! - 0 = Unknown (no belief yet)
//! - 1 = Absent (letter not in the word)
//! - 2 = Present (letter in the word, position unknown)
//! - 3 = Correct (letter in this position)

use serde::{Deserialize, Serialize};

/// Color of one cell of a submitted row
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum CellColor {
    #[default]
    Unknown = 0,
    Absent = 1,
    Present = 2,
    Correct = 3,
}

impl CellColor {
    /// Get the raw ordinal (0-3)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Build a color from its ordinal
    #[must_use]
    pub const fn from_value(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Unknown),
            1 => Some(Self::Absent),
            2 => Some(Self::Present),
            3 => Some(Self::Correct),
            _ => None,
        }
    }
}

impl From<CellColor> for u8 {
    fn from(color: CellColor) -> Self {
        color.value()
    }
}

impl TryFrom<u8> for CellColor {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_value(value).ok_or_else(|| format!("Invalid cell color: {value}"))
    }
}
