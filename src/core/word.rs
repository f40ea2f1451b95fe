//! Dictionary word representation
//!
//! A Word stores a validated lowercase word together with a bitmask of the
//! letters it contains, so containment checks are a single AND.

use super::rules::DEFAULT_WORD_LENGTH;
use std::fmt;

/// Bit for a lowercase ASCII letter in a 26-bit letter set
#[inline]
#[must_use]
pub const fn letter_bit(letter: u8) -> u32 {
    1 << (letter - b'a')
}

/// A dictionary word with letter-set tracking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    letters: Box<[u8]>,
    letter_mask: u32,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength { expected: usize, found: usize },
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { expected, found } => {
                write!(f, "Word must be exactly {expected} letters, got {found}")
            }
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new five-letter Word from a string
    ///
    /// Input is lowercased before validation.
    ///
    /// # Errors
    /// Returns `WordError` if the length is not 5 or the word contains
    /// anything other than ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::Word;
    ///
    /// let word = Word::new("Crane").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        Self::with_length(text, DEFAULT_WORD_LENGTH)
    }

    /// Create a Word of an arbitrary fixed length
    ///
    /// # Errors
    /// Returns `WordError` on a length mismatch or non-letter characters.
    pub fn with_length(text: impl Into<String>, length: usize) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if text.len() != length {
            return Err(WordError::InvalidLength {
                expected: length,
                found: text.len(),
            });
        }

        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let letters: Box<[u8]> = text.as_bytes().into();
        let letter_mask = letters.iter().fold(0, |mask, &b| mask | letter_bit(b));

        Ok(Self {
            text,
            letters,
            letter_mask,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as bytes
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        &self.letters
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if position is out of range
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> u8 {
        self.letters[position]
    }

    /// Set of letters in the word, one bit per letter
    #[inline]
    #[must_use]
    pub const fn letter_mask(&self) -> u32 {
        self.letter_mask
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub const fn has_letter(&self, letter: u8) -> bool {
        letter.is_ascii_lowercase() && self.letter_mask & letter_bit(letter) != 0
    }

    /// Distinct letters in order of first occurrence
    pub fn distinct_letters(&self) -> impl Iterator<Item = u8> + '_ {
        let mut seen = 0u32;
        self.letters.iter().copied().filter(move |&b| {
            let bit = letter_bit(b);
            let fresh = seen & bit == 0;
            seen |= bit;
            fresh
        })
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.text(), "crane");
        assert_eq!(word.letters(), b"crane");
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("CRANE").unwrap();
        assert_eq!(word.text(), "crane");

        let word2 = Word::new("CrAnE").unwrap();
        assert_eq!(word2.text(), "crane");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert_eq!(
            Word::new("too long"),
            Err(WordError::InvalidLength {
                expected: 5,
                found: 8
            })
        );
        assert!(matches!(
            Word::new("shrt"),
            Err(WordError::InvalidLength { found: 4, .. })
        ));
        assert!(matches!(
            Word::new(""),
            Err(WordError::InvalidLength { found: 0, .. })
        ));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("cran3"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cran "), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cran!"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("crané"), Err(WordError::NonAscii));
    }

    #[test]
    fn word_custom_length() {
        let word = Word::with_length("planet", 6).unwrap();
        assert_eq!(word.len(), 6);
        assert!(Word::with_length("crane", 6).is_err());
    }

    #[test]
    fn word_letter_at() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.letter_at(0), b'c');
        assert_eq!(word.letter_at(2), b'a');
        assert_eq!(word.letter_at(4), b'e');
    }

    #[test]
    fn word_has_letter() {
        let word = Word::new("crane").unwrap();
        assert!(word.has_letter(b'c'));
        assert!(word.has_letter(b'e'));
        assert!(!word.has_letter(b'z'));
        assert!(!word.has_letter(b'*'));
    }

    #[test]
    fn word_letter_mask() {
        let word = Word::new("aaaab").unwrap();
        assert_eq!(word.letter_mask(), 0b11);
    }

    #[test]
    fn distinct_letters_keep_first_occurrence_order() {
        let word = Word::new("speed").unwrap();
        let distinct: Vec<u8> = word.distinct_letters().collect();
        assert_eq!(distinct, b"sped");

        let word = Word::new("aaaaa").unwrap();
        assert_eq!(word.distinct_letters().count(), 1);
    }

    #[test]
    fn word_display() {
        let word = Word::new("crane").unwrap();
        assert_eq!(format!("{word}"), "crane");
    }
}
