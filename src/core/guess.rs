//! Guess token parsing
//!
//! A guess token is a word with in-band feedback markers: a marker right
//! after a letter colors that letter, a letter with no marker is absent.
//! With the default rules `a+bout` means `a` is present elsewhere and
//! `b`, `o`, `u`, `t` are absent; `shine*` means `e` is correct.

use super::letter::{Letter, Status};
use super::rules::Rules;
use std::fmt;

/// A parsed guess: the original token plus one resolved Letter per position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessWord {
    raw: String,
    letters: Vec<Letter>,
}

/// Error type for malformed guess tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Neither a lowercase letter nor one of the two markers
    InvalidCharacter { character: char, index: usize },
    /// A marker appeared before any letter
    MarkerWithoutLetter { marker: char },
    InvalidLength { expected: usize, found: usize },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCharacter { character, index } => {
                write!(f, "'{character}' at index {index} is an invalid character")
            }
            Self::MarkerWithoutLetter { marker } => {
                write!(f, "Marker '{marker}' must follow a letter")
            }
            Self::InvalidLength { expected, found } => {
                write!(f, "Guess must have exactly {expected} letters, got {found}")
            }
        }
    }
}

impl std::error::Error for ParseError {}

impl GuessWord {
    /// Parse a guess token
    ///
    /// Letters are appended left to right; a marker recolors the most recent
    /// letter (the last marker wins if several follow one letter). Letters
    /// left without a marker resolve to `Absent`.
    ///
    /// # Errors
    /// Returns `ParseError` on an unknown character, a leading marker, or a
    /// letter count different from the configured word length.
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::{GuessWord, Rules, Status};
    ///
    /// let guess = GuessWord::parse("a+bout", &Rules::default()).unwrap();
    /// assert_eq!(guess.word(), "about");
    /// assert_eq!(guess.letters()[0].status, Status::Present);
    /// assert_eq!(guess.letters()[1].status, Status::Absent);
    ///
    /// assert!(GuessWord::parse("Crane", &Rules::default()).is_err());
    /// ```
    pub fn parse(token: &str, rules: &Rules) -> Result<Self, ParseError> {
        let mut letters: Vec<Letter> = Vec::with_capacity(rules.word_length());

        for (index, ch) in token.chars().enumerate() {
            let marker_status = if ch == rules.correct_marker() {
                Some(Status::Correct)
            } else if ch == rules.present_marker() {
                Some(Status::Present)
            } else {
                None
            };

            if let Some(status) = marker_status {
                let last = letters
                    .last_mut()
                    .ok_or(ParseError::MarkerWithoutLetter { marker: ch })?;
                last.status = status;
            } else if ch.is_ascii_lowercase() {
                letters.push(Letter::new(ch as u8, letters.len(), Status::Unknown));
            } else {
                return Err(ParseError::InvalidCharacter {
                    character: ch,
                    index,
                });
            }
        }

        if letters.len() != rules.word_length() {
            return Err(ParseError::InvalidLength {
                expected: rules.word_length(),
                found: letters.len(),
            });
        }

        for letter in &mut letters {
            if letter.status == Status::Unknown {
                letter.status = Status::Absent;
            }
        }

        Ok(Self {
            raw: token.to_string(),
            letters,
        })
    }

    /// The token exactly as it was entered
    #[inline]
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    /// The guessed word without markers
    #[must_use]
    pub fn word(&self) -> String {
        self.letters.iter().map(Letter::as_char).collect()
    }

    /// Whether any position holds `character` with the given status
    #[must_use]
    pub fn has_status(&self, character: u8, status: Status) -> bool {
        self.letters
            .iter()
            .any(|l| l.character == character && l.status == status)
    }

    /// Canonical token: each letter followed by its marker, if any
    #[must_use]
    pub fn encode(&self, rules: &Rules) -> String {
        let mut token = String::with_capacity(self.letters.len() * 2);
        for letter in &self.letters {
            token.push(letter.as_char());
            match letter.status {
                Status::Correct => token.push(rules.correct_marker()),
                Status::Present => token.push(rules.present_marker()),
                Status::Absent | Status::Unknown => {}
            }
        }
        token
    }
}

impl fmt::Display for GuessWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}
