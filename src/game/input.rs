//! Discrete player input

/// One key event, already stripped of any terminal specifics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    Letter(char),
    Backspace,
    Enter,
}

impl KeyInput {
    /// Map a typed character to a key; letters are lowercased, anything
    /// else is dropped
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '\n' | '\r' => Some(Self::Enter),
            '\u{8}' | '\u{7f}' => Some(Self::Backspace),
            c if c.is_ascii_alphabetic() => Some(Self::Letter(c.to_ascii_lowercase())),
            _ => None,
        }
    }
}
