//! Game configuration
//!
//! The word length and the two feedback markers used in guess tokens.

use std::fmt;

/// Default word length for Wordle
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// Default marker for a letter in the correct position (green)
pub const DEFAULT_CORRECT_MARKER: char = '*';

/// Default marker for a letter present elsewhere in the word (yellow)
pub const DEFAULT_PRESENT_MARKER: char = '+';

/// Immutable configuration shared by the parser, the constraint builder
/// and the dictionary loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    word_length: usize,
    correct_marker: char,
    present_marker: char,
}

/// Error type for invalid configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    ZeroLength,
    /// Markers must not collide with the letters of a guess
    MarkerIsLetter(char),
    SameMarkers(char),
}

impl fmt::Display for RulesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroLength => write!(f, "Word length must be at least 1"),
            Self::MarkerIsLetter(c) => {
                write!(f, "Marker '{c}' is a lowercase letter and cannot be used")
            }
            Self::SameMarkers(c) => {
                write!(f, "Correct and present markers must differ (both are '{c}')")
            }
        }
    }
}

impl std::error::Error for RulesError {}

impl Rules {
    /// Create a validated configuration
    ///
    /// # Errors
    /// Returns `RulesError` if the length is zero, a marker is a lowercase
    /// ASCII letter, or both markers are the same character.
    pub fn new(
        word_length: usize,
        correct_marker: char,
        present_marker: char,
    ) -> Result<Self, RulesError> {
        if word_length == 0 {
            return Err(RulesError::ZeroLength);
        }

        for marker in [correct_marker, present_marker] {
            if marker.is_ascii_lowercase() {
                return Err(RulesError::MarkerIsLetter(marker));
            }
        }

        if correct_marker == present_marker {
            return Err(RulesError::SameMarkers(correct_marker));
        }

        Ok(Self {
            word_length,
            correct_marker,
            present_marker,
        })
    }

    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    #[inline]
    #[must_use]
    pub const fn correct_marker(&self) -> char {
        self.correct_marker
    }

    #[inline]
    #[must_use]
    pub const fn present_marker(&self) -> char {
        self.present_marker
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            word_length: DEFAULT_WORD_LENGTH,
            correct_marker: DEFAULT_CORRECT_MARKER,
            present_marker: DEFAULT_PRESENT_MARKER,
        }
    }
}
