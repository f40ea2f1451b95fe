//! Next-guess recommendations
//!
//! Scores every dictionary word, not only the candidates: a word that can't
//! be the answer may still probe the most unknown letters.

use super::stats::LetterStats;
use crate::core::Word;
use rayon::prelude::*;
use rustc_hash::FxHashSet;

/// Default number of recommendations exposed
pub const DEFAULT_RECOMMENDATIONS: usize = 10;

/// A scored suggestion for the next guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recommendation<'a> {
    pub word: &'a Word,
    pub score: usize,
    /// The word is itself still a possible answer
    pub is_candidate: bool,
}

/// Greedy single-step ranking of guesses by letter scores
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recommender {
    limit: usize,
}

impl Default for Recommender {
    fn default() -> Self {
        Self {
            limit: DEFAULT_RECOMMENDATIONS,
        }
    }
}

/// Sum of letter scores, each distinct letter counted once
#[must_use]
pub fn score_word(stats: &LetterStats, word: &Word) -> usize {
    word.distinct_letters().map(|c| stats.score(c)).sum()
}

impl Recommender {
    /// Create a recommender exposing at most `limit` words
    #[must_use]
    pub const fn new(limit: usize) -> Self {
        Self { limit }
    }

    #[inline]
    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }

    /// Rank the dictionary by score, highest first
    ///
    /// Ties keep dictionary order. Words scoring zero reveal nothing and are
    /// left out, so an exhausted `LetterStats` gives an empty list.
    #[must_use]
    pub fn recommend<'a>(
        &self,
        stats: &LetterStats,
        dictionary: &'a [Word],
        candidates: &[&Word],
    ) -> Vec<Recommendation<'a>> {
        let candidate_set: FxHashSet<&str> = candidates.iter().map(|w| w.text()).collect();

        let mut scored: Vec<Recommendation<'a>> = dictionary
            .par_iter()
            .map(|word| Recommendation {
                word,
                score: score_word(stats, word),
                is_candidate: candidate_set.contains(word.text()),
            })
            .filter(|r| r.score > 0)
            .collect();

        // Stable sort keeps dictionary order among equal scores
        scored.sort_by(|a, b| b.score.cmp(&a.score));
        scored.truncate(self.limit);
        scored
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GuessWord, Rules};
    use crate::solver::{Predicate, filter_candidates};
    use crate::wordlists::loader::words_from_slice;

    fn ranking(tokens: &[&str], dictionary: &[Word]) -> Vec<(String, usize, bool)> {
        let rules = Rules::default();
        let guesses: Vec<GuessWord> = tokens
            .iter()
            .map(|t| GuessWord::parse(t, &rules).unwrap())
            .collect();
        let predicate = Predicate::build(&guesses, rules.word_length());
        let candidates = filter_candidates(&predicate, dictionary);
        let stats = LetterStats::build(&guesses, &candidates);

        Recommender::default()
            .recommend(&stats, dictionary, &candidates)
            .into_iter()
            .map(|r| (r.word.text().to_string(), r.score, r.is_candidate))
            .collect()
    }

    #[test]
    fn repeated_letters_count_once() {
        let words = words_from_slice(&["eerie", "crane"]);
        let refs: Vec<&Word> = words.iter().collect();
        let stats = LetterStats::build(&[], &refs);

        // e(2+3) + r(2+3) + i(1+3)
        assert_eq!(score_word(&stats, &words[0]), 14);
    }

    #[test]
    fn unknown_frequent_letters_rank_first() {
        let dict = words_from_slice(&["grade", "shine", "about", "crane", "drape"]);
        let ranked = ranking(&["a+bout"], &dict);

        assert_eq!(
            ranked,
            vec![
                ("grade".to_string(), 23, true),
                ("drape".to_string(), 23, true),
                ("crane".to_string(), 22, true),
                ("shine".to_string(), 10, false),
                ("about".to_string(), 2, false),
            ]
        );
    }

    #[test]
    fn probing_word_outside_candidates_can_lead() {
        let dict = words_from_slice(&["crane", "crate", "craze", "crave", "waltz"]);
        let ranked = ranking(&["c*r*a*ne*"], &dict);

        // crate/craze/crave remain; waltz tests both t and z without being an answer
        assert_eq!(ranked[0], ("waltz".to_string(), 9, false));
        assert_eq!(ranked[1], ("crate".to_string(), 8, true));
    }

    #[test]
    fn empty_candidates_give_no_recommendation() {
        let dict = words_from_slice(&["grade", "shine", "about", "crane", "drape"]);
        assert!(ranking(&["shine", "a+bout"], &dict).is_empty());
    }

    #[test]
    fn zero_guesses_rank_by_dictionary_frequency() {
        let dict = words_from_slice(&["aaaaa", "stare", "tears", "qajaq"]);
        let ranked = ranking(&[], &dict);

        // stare and tears share letters and score; dictionary order breaks the tie
        assert_eq!(ranked[0].0, "stare");
        assert_eq!(ranked[1].0, "tears");
        assert_eq!(ranked[0].1, ranked[1].1);
        assert!(ranked.iter().all(|r| r.2));
    }

    #[test]
    fn limit_truncates() {
        let dict = words_from_slice(&["grade", "shine", "about", "crane", "drape"]);
        let refs: Vec<&Word> = dict.iter().collect();
        let stats = LetterStats::build(&[], &refs);

        let top = Recommender::new(2).recommend(&stats, &dict, &refs);
        assert_eq!(top.len(), 2);
    }
}
