//! Main assistant interface
//!
//! Runs the whole pipeline for one set of guesses:
//! tokens → guesses → predicate → candidates → letter stats → recommendations.

use super::constraint::Predicate;
use super::filter::filter_candidates;
use super::recommend::{Recommendation, Recommender};
use super::stats::LetterStats;
use crate::core::{GuessWord, ParseError, Rules, Word};
use log::{debug, warn};
use rustc_hash::FxHashSet;

/// Everything derived from one set of guesses
#[derive(Debug, Clone)]
pub struct Analysis<'a> {
    /// Dictionary words consistent with all feedback, in dictionary order
    pub candidates: Vec<&'a Word>,
    pub stats: LetterStats,
    /// Best next guesses from the full dictionary, highest score first
    pub recommendations: Vec<Recommendation<'a>>,
}

/// Wordle assistant over a fixed dictionary
///
/// Holds no per-game state: every call rebuilds its results from the
/// guesses it is given.
pub struct Assistant<'a> {
    rules: Rules,
    dictionary: &'a [Word],
    known_words: FxHashSet<&'a str>,
    recommender: Recommender,
}

impl<'a> Assistant<'a> {
    /// Create an assistant over a dictionary
    ///
    /// # Parameters
    /// - `rules`: word length and feedback markers
    /// - `dictionary`: every valid word, in the order ties should resolve
    /// - `recommender`: how many recommendations to expose
    #[must_use]
    pub fn new(rules: Rules, dictionary: &'a [Word], recommender: Recommender) -> Self {
        let known_words = dictionary.iter().map(Word::text).collect();
        Self {
            rules,
            dictionary,
            known_words,
            recommender,
        }
    }

    #[inline]
    #[must_use]
    pub const fn rules(&self) -> &Rules {
        &self.rules
    }

    #[inline]
    #[must_use]
    pub const fn dictionary(&self) -> &'a [Word] {
        self.dictionary
    }

    /// Whether a word is in the dictionary
    #[must_use]
    pub fn knows(&self, word: &str) -> bool {
        self.known_words.contains(word)
    }

    /// Parse a single guess token with this assistant's rules
    ///
    /// # Errors
    /// Returns `ParseError` for malformed tokens.
    pub fn parse_guess(&self, token: &str) -> Result<GuessWord, ParseError> {
        let guess = GuessWord::parse(token, &self.rules)?;
        if !self.knows(&guess.word()) {
            warn!("guess '{}' is not in the dictionary", guess.word());
        }
        Ok(guess)
    }

    /// Parse every token, stopping at the first malformed one
    ///
    /// # Errors
    /// Returns the first `ParseError` encountered.
    pub fn parse_guesses<S: AsRef<str>>(&self, tokens: &[S]) -> Result<Vec<GuessWord>, ParseError> {
        tokens.iter().map(|t| self.parse_guess(t.as_ref())).collect()
    }

    /// Dictionary words consistent with every guess
    #[must_use]
    pub fn candidates(&self, guesses: &[GuessWord]) -> Vec<&'a Word> {
        let predicate = Predicate::build(guesses, self.rules.word_length());
        let candidates = filter_candidates(&predicate, self.dictionary);
        debug!(
            "{} of {} words match {} guesses",
            candidates.len(),
            self.dictionary.len(),
            guesses.len()
        );
        candidates
    }

    /// Run the full pipeline
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::{Rules, Word};
    /// use wordle_assist::solver::{Assistant, Recommender};
    /// use wordle_assist::wordlists::loader::words_from_slice;
    ///
    /// let dictionary = words_from_slice(&["grade", "shine", "about", "crane", "drape"]);
    /// let assistant = Assistant::new(Rules::default(), &dictionary, Recommender::default());
    ///
    /// let guesses = assistant.parse_guesses(&["a+bout"]).unwrap();
    /// let analysis = assistant.analyze(&guesses);
    ///
    /// let candidates: Vec<&str> = analysis.candidates.iter().map(|w| w.text()).collect();
    /// assert_eq!(candidates, ["grade", "crane", "drape"]);
    /// assert_eq!(analysis.recommendations[0].word.text(), "grade");
    /// ```
    #[must_use]
    pub fn analyze(&self, guesses: &[GuessWord]) -> Analysis<'a> {
        for guess in guesses {
            debug!(
                "constraint for {}: {}",
                guess.raw(),
                super::Constraint::from_guess(guess)
            );
        }

        let candidates = self.candidates(guesses);
        let stats = LetterStats::build(guesses, &candidates);
        let recommendations = self
            .recommender
            .recommend(&stats, self.dictionary, &candidates);
        debug!("{} recommendations", recommendations.len());

        Analysis {
            candidates,
            stats,
            recommendations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::LetterStatus;
    use crate::wordlists::loader::words_from_slice;

    fn setup_dictionary() -> Vec<Word> {
        words_from_slice(&["grade", "shine", "about", "crane", "drape"])
    }

    fn texts(words: &[&Word]) -> Vec<String> {
        words.iter().map(|w| w.text().to_string()).collect()
    }

    #[test]
    fn zero_guesses_use_full_dictionary() {
        let dict = setup_dictionary();
        let assistant = Assistant::new(Rules::default(), &dict, Recommender::default());

        let analysis = assistant.analyze(&[]);
        assert_eq!(analysis.candidates.len(), dict.len());
        assert!(analysis.stats.iter().all(|(_, s)| s.status == LetterStatus::Unused));
        assert_eq!(analysis.stats.get(b'e').frequency, 4);
        assert_eq!(analysis.recommendations.len(), dict.len());
    }

    #[test]
    fn unmarked_shine_leaves_about() {
        let dict = setup_dictionary();
        let assistant = Assistant::new(Rules::default(), &dict, Recommender::default());

        let guesses = assistant.parse_guesses(&["shine"]).unwrap();
        let analysis = assistant.analyze(&guesses);
        assert_eq!(texts(&analysis.candidates), vec!["about"]);
    }

    #[test]
    fn present_a_narrows_and_ranks_r_and_d_words_first() {
        let dict = setup_dictionary();
        let assistant = Assistant::new(Rules::default(), &dict, Recommender::default());

        let guesses = assistant.parse_guesses(&["a+bout"]).unwrap();
        let analysis = assistant.analyze(&guesses);

        assert_eq!(texts(&analysis.candidates), vec!["grade", "crane", "drape"]);
        assert_eq!(analysis.stats.get(b'r').status, LetterStatus::Unused);
        assert_eq!(analysis.stats.get(b'r').frequency, 3);
        assert_eq!(analysis.stats.get(b'd').frequency, 2);

        let ranked: Vec<&str> = analysis
            .recommendations
            .iter()
            .map(|r| r.word.text())
            .collect();
        assert_eq!(ranked, vec!["grade", "drape", "crane", "shine", "about"]);
    }

    #[test]
    fn contradictory_feedback_is_not_an_error() {
        let dict = setup_dictionary();
        let assistant = Assistant::new(Rules::default(), &dict, Recommender::default());

        let guesses = assistant.parse_guesses(&["shine", "a+bout"]).unwrap();
        let analysis = assistant.analyze(&guesses);

        assert!(analysis.candidates.is_empty());
        assert!(analysis.stats.is_exhausted());
        assert!(analysis.recommendations.is_empty());
    }

    #[test]
    fn all_green_guess() {
        let dict = setup_dictionary();
        let assistant = Assistant::new(Rules::default(), &dict, Recommender::default());

        let guesses = assistant.parse_guesses(&["d*r*a*p*e*"]).unwrap();
        assert_eq!(texts(&assistant.candidates(&guesses)), vec!["drape"]);

        let unknown = assistant.parse_guesses(&["s*t*a*r*e*"]).unwrap();
        assert!(assistant.candidates(&unknown).is_empty());
    }

    #[test]
    fn parse_guesses_reports_first_error() {
        let dict = setup_dictionary();
        let assistant = Assistant::new(Rules::default(), &dict, Recommender::default());

        let result = assistant.parse_guesses(&["shine", "ab#ut", "cr4ne"]);
        assert_eq!(
            result,
            Err(ParseError::InvalidCharacter {
                character: '#',
                index: 2
            })
        );
    }

    #[test]
    fn recommendation_limit_is_respected() {
        let dict = setup_dictionary();
        let assistant = Assistant::new(Rules::default(), &dict, Recommender::new(3));

        assert_eq!(assistant.analyze(&[]).recommendations.len(), 3);
    }

    #[test]
    fn knows_dictionary_words() {
        let dict = setup_dictionary();
        let assistant = Assistant::new(Rules::default(), &dict, Recommender::default());

        assert!(assistant.knows("crane"));
        assert!(!assistant.knows("zzzzz"));
    }
}
