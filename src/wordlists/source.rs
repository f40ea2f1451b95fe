//! Dictionary sources
//!
//! The assistant only needs an ordered list of valid words; where the list
//! comes from is decided here.

use super::embedded::WORDS;
use super::loader::{DictionaryError, load_from_file, parse_entries};
use crate::core::{Rules, Word};
use std::path::PathBuf;

/// Anything that can supply the dictionary
pub trait DictionarySource {
    /// Return the dictionary in its canonical order
    ///
    /// # Errors
    /// Returns `DictionaryError` if the words cannot be obtained.
    fn get_words(&self) -> Result<Vec<Word>, DictionaryError>;

    /// Human-readable origin, for messages
    fn describe(&self) -> String;
}

/// The list compiled into the binary
pub struct EmbeddedSource {
    rules: Rules,
}

impl EmbeddedSource {
    #[must_use]
    pub const fn new(rules: Rules) -> Self {
        Self { rules }
    }
}

impl DictionarySource for EmbeddedSource {
    fn get_words(&self) -> Result<Vec<Word>, DictionaryError> {
        let words = parse_entries(WORDS.iter().copied(), &self.rules);
        if words.is_empty() {
            return Err(DictionaryError::Empty {
                source: self.describe(),
            });
        }
        Ok(words)
    }

    fn describe(&self) -> String {
        format!("embedded ({} words)", WORDS.len())
    }
}

/// A plain-text or JSON word list on disk
pub struct FileSource {
    path: PathBuf,
    rules: Rules,
}

impl FileSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, rules: Rules) -> Self {
        Self {
            path: path.into(),
            rules,
        }
    }
}

impl DictionarySource for FileSource {
    fn get_words(&self) -> Result<Vec<Word>, DictionaryError> {
        load_from_file(&self.path, &self.rules)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Pick a source from the `--wordlist` value: `embedded` or a file path
#[must_use]
pub fn source_from_name(name: &str, rules: Rules) -> Box<dyn DictionarySource> {
    match name {
        "embedded" => Box::new(EmbeddedSource::new(rules)),
        path => Box::new(FileSource::new(path, rules)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_source_returns_all_words() {
        let words = EmbeddedSource::new(Rules::default()).get_words().unwrap();
        assert_eq!(words.len(), WORDS.len());
        assert_eq!(words[0].text(), WORDS[0]);
    }

    #[test]
    fn embedded_source_with_other_length_is_empty() {
        let rules = Rules::new(6, '*', '+').unwrap();
        let result = EmbeddedSource::new(rules).get_words();
        assert!(matches!(result, Err(DictionaryError::Empty { .. })));
    }

    #[test]
    fn source_from_name_selects_kind() {
        let embedded = source_from_name("embedded", Rules::default());
        assert!(embedded.describe().starts_with("embedded"));

        let file = source_from_name("/tmp/words.txt", Rules::default());
        assert_eq!(file.describe(), "/tmp/words.txt");
    }
}
