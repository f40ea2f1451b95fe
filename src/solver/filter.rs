//! Candidate filtering
//!
//! Narrows the dictionary to words consistent with every guess.

use super::constraint::Predicate;
use crate::core::Word;

/// Return every dictionary word satisfying the predicate, in dictionary order
///
/// Pure: the dictionary is not modified and the same inputs always give the
/// same output. An empty result is a normal outcome for contradictory
/// feedback.
#[must_use]
pub fn filter_candidates<'a>(predicate: &Predicate, dictionary: &'a [Word]) -> Vec<&'a Word> {
    if predicate.is_contradictory() {
        return Vec::new();
    }

    dictionary
        .iter()
        .filter(|word| predicate.matches(word))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GuessWord, Rules};
    use crate::wordlists::loader::words_from_slice;

    fn dictionary() -> Vec<Word> {
        words_from_slice(&["grade", "shine", "about", "crane", "drape"])
    }

    fn texts<'a>(words: &[&'a Word]) -> Vec<&'a str> {
        words.iter().map(|w| w.text()).collect()
    }

    fn predicate(tokens: &[&str]) -> Predicate {
        let rules = Rules::default();
        let guesses: Vec<GuessWord> = tokens
            .iter()
            .map(|t| GuessWord::parse(t, &rules).unwrap())
            .collect();
        Predicate::build(&guesses, rules.word_length())
    }

    #[test]
    fn no_guesses_keeps_whole_dictionary() {
        let dict = dictionary();
        let candidates = filter_candidates(&predicate(&[]), &dict);
        assert_eq!(
            texts(&candidates),
            vec!["grade", "shine", "about", "crane", "drape"]
        );
    }

    #[test]
    fn unmarked_guess_removes_words_sharing_letters() {
        let dict = dictionary();
        let guess_letters = b"shine";

        let candidates = filter_candidates(&predicate(&["shine"]), &dict);
        let expected: Vec<&str> = dict
            .iter()
            .filter(|w| !guess_letters.iter().any(|&c| w.has_letter(c)))
            .map(Word::text)
            .collect();

        assert_eq!(texts(&candidates), expected);
        assert_eq!(texts(&candidates), vec!["about"]);
    }

    #[test]
    fn present_letter_keeps_dictionary_order() {
        let dict = dictionary();
        let candidates = filter_candidates(&predicate(&["a+bout"]), &dict);
        assert_eq!(texts(&candidates), vec!["grade", "crane", "drape"]);
    }

    #[test]
    fn over_constrained_feedback_yields_empty_set() {
        let dict = dictionary();
        let candidates = filter_candidates(&predicate(&["shine", "a+bout"]), &dict);
        assert!(candidates.is_empty());
    }

    #[test]
    fn filtering_is_idempotent() {
        let dict = dictionary();
        let p = predicate(&["a+bout", "r+ough"]);
        let first = filter_candidates(&p, &dict);
        let second = filter_candidates(&p, &dict);
        assert_eq!(first, second);
        assert_eq!(texts(&first), vec!["crane", "drape"]);
    }

    #[test]
    fn all_green_guess_selects_single_word() {
        let dict = dictionary();
        let found = filter_candidates(&predicate(&["c*r*a*n*e*"]), &dict);
        assert_eq!(texts(&found), vec!["crane"]);

        let missing = filter_candidates(&predicate(&["c*r*a*t*e*"]), &dict);
        assert!(missing.is_empty());
    }
}
