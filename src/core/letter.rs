//! Per-letter feedback

/// Feedback color for one letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// Letter sits at exactly this position in the answer (green)
    Correct,
    /// Letter is in the answer but not at this position (yellow)
    Present,
    /// Letter is not in the answer (gray)
    Absent,
    /// Not yet resolved; only seen while a token is being parsed
    Unknown,
}

/// One letter of a guessed word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Letter {
    pub character: u8,
    pub position: usize,
    pub status: Status,
}

impl Letter {
    #[must_use]
    pub const fn new(character: u8, position: usize, status: Status) -> Self {
        Self {
            character,
            position,
            status,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_char(&self) -> char {
        char::from(self.character)
    }
}
