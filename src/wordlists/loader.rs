//! Word list loading utilities
//!
//! Loads dictionaries from plain-text files (one word per line) or JSON
//! arrays of strings, and converts embedded constants to Words.

use crate::core::{Rules, Word};
use log::{debug, warn};
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Error type for dictionary loading
#[derive(Debug)]
pub enum DictionaryError {
    Io(io::Error),
    Json(serde_json::Error),
    /// No usable word of the configured length was found
    Empty { source: String },
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Failed to read dictionary: {e}"),
            Self::Json(e) => write!(f, "Dictionary is not a JSON array of strings: {e}"),
            Self::Empty { source } => write!(f, "Dictionary {source} contains no usable words"),
        }
    }
}

impl std::error::Error for DictionaryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::Empty { .. } => None,
        }
    }
}

impl From<io::Error> for DictionaryError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for DictionaryError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

/// Load a dictionary from a file
///
/// Files ending in `.json` are read as a JSON array of strings; anything
/// else as one word per line. Entries are lowercased; entries of the wrong
/// length or with non-letters are skipped. The result is sorted.
///
/// # Errors
///
/// Returns `DictionaryError` if the file cannot be read, the JSON is
/// malformed, or no usable word remains.
///
/// # Examples
/// ```no_run
/// use wordle_assist::core::Rules;
/// use wordle_assist::wordlists::loader::load_from_file;
///
/// let words = load_from_file("words.json", &Rules::default()).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, rules: &Rules) -> Result<Vec<Word>, DictionaryError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let mut words = if is_json {
        let entries: Vec<String> = serde_json::from_str(&content)?;
        parse_entries(entries.iter().map(String::as_str), rules)
    } else {
        parse_entries(content.lines(), rules)
    };

    if words.is_empty() {
        return Err(DictionaryError::Empty {
            source: path.display().to_string(),
        });
    }

    words.sort_by(|a, b| a.text().cmp(b.text()));
    debug!("loaded {} words from {}", words.len(), path.display());

    Ok(words)
}

/// Convert raw entries to Words of the configured length, skipping bad ones
pub fn parse_entries<'s>(entries: impl Iterator<Item = &'s str>, rules: &Rules) -> Vec<Word> {
    entries
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return None;
            }
            match Word::with_length(trimmed, rules.word_length()) {
                Ok(word) => Some(word),
                Err(e) => {
                    warn!("skipping dictionary entry '{trimmed}': {e}");
                    None
                }
            }
        })
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_assist::wordlists::loader::words_from_slice;
/// use wordle_assist::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
