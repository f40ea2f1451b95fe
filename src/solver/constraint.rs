//! Constraint derivation from guess feedback
//!
//! Each guess is turned into a list of fragments, one or two per letter.
//! Fragments from all guesses are folded into a single [`Predicate`] that
//! checks a word in one pass over its letters.
//!
//! # Fragment rules
//! - `Correct` at `p`: the letter must be at `p`.
//! - `Present` at `p`: the letter must not be at `p`, and must occur somewhere.
//! - `Absent`: the letter must not occur anywhere, unless the same guess also
//!   has that letter `Correct`. In that case the gray copy only says there is
//!   no additional occurrence and emits nothing.

use crate::core::{GuessWord, Status, Word, letter_bit};
use std::fmt;

/// One atomic condition a candidate must satisfy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fragment {
    At { letter: u8, position: usize },
    NotAt { letter: u8, position: usize },
    Contains(u8),
    Excludes(u8),
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::At { letter, position } => write!(f, "{}@{position}", char::from(letter)),
            Self::NotAt { letter, position } => write!(f, "!{}@{position}", char::from(letter)),
            Self::Contains(letter) => write!(f, "+{}", char::from(letter)),
            Self::Excludes(letter) => write!(f, "-{}", char::from(letter)),
        }
    }
}

/// Fragments derived from a single guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraint {
    fragments: Vec<Fragment>,
}

impl Constraint {
    /// Derive the fragments for one guess
    #[must_use]
    pub fn from_guess(guess: &GuessWord) -> Self {
        let mut fragments = Vec::with_capacity(guess.letters().len() * 2);

        for letter in guess.letters() {
            let (c, p) = (letter.character, letter.position);
            match letter.status {
                Status::Correct => fragments.push(Fragment::At {
                    letter: c,
                    position: p,
                }),
                Status::Present => {
                    fragments.push(Fragment::NotAt {
                        letter: c,
                        position: p,
                    });
                    fragments.push(Fragment::Contains(c));
                }
                Status::Absent | Status::Unknown => {
                    // Gray twin of a green letter: no extra copy, nothing else to say
                    if !guess.has_status(c, Status::Correct) {
                        fragments.push(Fragment::Excludes(c));
                    }
                }
            }
        }

        Self { fragments }
    }

    #[inline]
    #[must_use]
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, fragment) in self.fragments.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{fragment}")?;
        }
        Ok(())
    }
}

/// Requirements on a single position
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct PositionRule {
    required: Option<u8>,
    forbidden: u32,
}

/// Conjunction of every fragment from every guess
///
/// Contradictory fragments are not an error; the predicate just matches
/// nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate {
    positions: Vec<PositionRule>,
    must_contain: u32,
    excluded: u32,
    contradictory: bool,
}

impl Predicate {
    /// A predicate matching every word of the given length
    #[must_use]
    pub fn any(word_length: usize) -> Self {
        Self {
            positions: vec![PositionRule::default(); word_length],
            must_contain: 0,
            excluded: 0,
            contradictory: false,
        }
    }

    /// Build the combined predicate for all guesses
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::{GuessWord, Rules, Word};
    /// use wordle_assist::solver::Predicate;
    ///
    /// let rules = Rules::default();
    /// let guesses = vec![GuessWord::parse("a+bout", &rules).unwrap()];
    /// let predicate = Predicate::build(&guesses, rules.word_length());
    ///
    /// assert!(predicate.matches(&Word::new("crane").unwrap()));
    /// assert!(!predicate.matches(&Word::new("about").unwrap()));
    /// ```
    #[must_use]
    pub fn build(guesses: &[GuessWord], word_length: usize) -> Self {
        guesses
            .iter()
            .map(Constraint::from_guess)
            .fold(Self::any(word_length), |predicate, constraint| {
                predicate.and(&constraint)
            })
    }

    /// Add one guess's fragments to this predicate
    #[must_use]
    pub fn and(mut self, constraint: &Constraint) -> Self {
        for &fragment in constraint.fragments() {
            match fragment {
                Fragment::At { letter, position } => match self.positions.get_mut(position) {
                    Some(rule) => match rule.required {
                        Some(existing) if existing != letter => self.contradictory = true,
                        _ => rule.required = Some(letter),
                    },
                    None => self.contradictory = true,
                },
                Fragment::NotAt { letter, position } => match self.positions.get_mut(position) {
                    Some(rule) => rule.forbidden |= letter_bit(letter),
                    None => self.contradictory = true,
                },
                Fragment::Contains(letter) => self.must_contain |= letter_bit(letter),
                Fragment::Excludes(letter) => self.excluded |= letter_bit(letter),
            }
        }
        self
    }

    /// Whether no word can ever satisfy this predicate
    #[must_use]
    pub fn is_contradictory(&self) -> bool {
        self.contradictory
            || self.must_contain & self.excluded != 0
            || self.positions.iter().any(|rule| match rule.required {
                Some(letter) => {
                    rule.forbidden & letter_bit(letter) != 0 || self.excluded & letter_bit(letter) != 0
                }
                None => false,
            })
    }

    /// Check a word against every condition, linear in word length
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        if self.contradictory || word.len() != self.positions.len() {
            return false;
        }

        let mask = word.letter_mask();
        if mask & self.excluded != 0 || mask & self.must_contain != self.must_contain {
            return false;
        }

        self.positions
            .iter()
            .zip(word.letters())
            .all(|(rule, &letter)| {
                rule.required.is_none_or(|required| required == letter)
                    && rule.forbidden & letter_bit(letter) == 0
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Rules;

    fn guess(token: &str) -> GuessWord {
        GuessWord::parse(token, &Rules::default()).unwrap()
    }

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn predicate(tokens: &[&str]) -> Predicate {
        let guesses: Vec<GuessWord> = tokens.iter().map(|t| guess(t)).collect();
        Predicate::build(&guesses, 5)
    }

    #[test]
    fn correct_letter_emits_position_fragment() {
        let constraint = Constraint::from_guess(&guess("c*loud"));
        assert_eq!(
            constraint.fragments()[0],
            Fragment::At {
                letter: b'c',
                position: 0
            }
        );
    }

    #[test]
    fn present_letter_emits_two_fragments() {
        let constraint = Constraint::from_guess(&guess("a+bout"));
        assert_eq!(
            &constraint.fragments()[..2],
            &[
                Fragment::NotAt {
                    letter: b'a',
                    position: 0
                },
                Fragment::Contains(b'a')
            ]
        );
        assert_eq!(constraint.to_string(), "!a@0 +a -b -o -u -t");
    }

    #[test]
    fn gray_twin_of_green_letter_is_dropped() {
        let constraint = Constraint::from_guess(&guess("spe*ed"));
        assert_eq!(constraint.to_string(), "-s -p e@2 -d");
        assert!(!constraint.fragments().contains(&Fragment::Excludes(b'e')));
    }

    #[test]
    fn gray_twin_of_yellow_letter_still_excludes() {
        let constraint = Constraint::from_guess(&guess("spe+ed"));
        assert!(constraint.fragments().contains(&Fragment::Excludes(b'e')));
        assert!(predicate(&["spe+ed"]).is_contradictory());
    }

    #[test]
    fn duplicate_letter_allows_single_occurrence() {
        let p = predicate(&["spe*ed"]);
        assert!(p.matches(&word("cheat")));
        assert!(p.matches(&word("bleak")));
        // A second e is neither required nor forbidden
        assert!(p.matches(&word("wheel")));
        // The green e is still required in place
        assert!(!p.matches(&word("crate")));
        assert!(!p.matches(&word("chant")));
        // Other gray letters remain banned
        assert!(!p.matches(&word("theds")));
    }

    #[test]
    fn no_markers_excludes_every_guessed_letter() {
        let p = predicate(&["shine"]);
        assert!(p.matches(&word("about")));
        assert!(!p.matches(&word("grade")));
        assert!(!p.matches(&word("crane")));
    }

    #[test]
    fn present_forbids_its_own_position() {
        let p = predicate(&["a+bout"]);
        assert!(p.matches(&word("grade")));
        assert!(p.matches(&word("crane")));
        assert!(!p.matches(&word("acred")));
        assert!(!p.matches(&word("cried")));
    }

    #[test]
    fn fragments_combine_across_guesses() {
        let p = predicate(&["a+bout", "c*lerk"]);
        assert!(p.matches(&word("chang")));
        assert!(!p.matches(&word("crane")));
        assert!(!p.matches(&word("grade")));
    }

    #[test]
    fn conflicting_greens_match_nothing() {
        let p = predicate(&["c*rane", "s*hint"]);
        assert!(p.is_contradictory());
        assert!(!p.matches(&word("crane")));
        assert!(!p.matches(&word("shine")));
    }

    #[test]
    fn green_then_globally_absent_matches_nothing() {
        let p = predicate(&["cra*ne", "about"]);
        assert!(p.is_contradictory());
        assert!(!p.matches(&word("drake")));
    }

    #[test]
    fn empty_predicate_matches_everything() {
        let p = Predicate::build(&[], 5);
        assert!(!p.is_contradictory());
        assert!(p.matches(&word("crane")));
        assert!(p.matches(&word("zzzzz")));
    }

    #[test]
    fn all_correct_matches_only_that_word() {
        let p = predicate(&["c*r*a*n*e*"]);
        assert!(p.matches(&word("crane")));
        assert!(!p.matches(&word("crate")));
    }

    #[test]
    fn wrong_length_word_never_matches() {
        let p = Predicate::any(5);
        assert!(!p.matches(&Word::with_length("planet", 6).unwrap()));
    }
}
