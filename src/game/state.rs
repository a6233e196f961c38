//! Round lifecycle

use serde::{Deserialize, Serialize};

/// Where the current round stands
///
/// `Playing` is the only state that accepts moves. `Won` and `Lost` are
/// terminal until the day changes. Persisted as its ordinal (0, 1, 2).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum RoundState {
    #[default]
    Playing = 0,
    Won = 1,
    Lost = 2,
}

impl RoundState {
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

impl From<RoundState> for u8 {
    fn from(state: RoundState) -> Self {
        state as u8
    }
}

impl TryFrom<u8> for RoundState {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Playing),
            1 => Ok(Self::Won),
            2 => Ok(Self::Lost),
            _ => Err(format!("Invalid round state: {value}")),
        }
    }
}
