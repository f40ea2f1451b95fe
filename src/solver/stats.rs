//! Per-letter statistics
//!
//! For each of the 26 letters: what the feedback says about it, how many
//! remaining candidates still contain it, and the resulting score used to
//! rank recommendations.

use crate::core::{GuessWord, Status, Word, letter_bit};

const ALPHABET_SIZE: usize = 26;

/// Bonus that lifts every unused letter above every known one
const UNUSED_BONUS: usize = 3;

/// What the guesses so far reveal about a letter
///
/// Variants are ordered by precedence: a letter seen green anywhere is
/// `Correct` even if it was also gray or yellow elsewhere.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterStatus {
    #[default]
    Unused,
    Absent,
    Present,
    Correct,
}

impl From<Status> for LetterStatus {
    fn from(status: Status) -> Self {
        match status {
            Status::Correct => Self::Correct,
            Status::Present => Self::Present,
            Status::Absent | Status::Unknown => Self::Absent,
        }
    }
}

/// Status, residual frequency and score of one letter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LetterStat {
    pub status: LetterStatus,
    /// Number of candidates containing the letter at least once
    pub frequency: usize,
    pub score: usize,
}

impl LetterStat {
    /// Score a letter from its status and frequency
    ///
    /// A letter no candidate contains is worth nothing, as is a known-absent
    /// letter. Known letters get a small fixed value; unknown letters are
    /// weighted by how many candidates they would split.
    #[must_use]
    pub const fn score_for(status: LetterStatus, frequency: usize) -> usize {
        if frequency == 0 {
            return 0;
        }
        match status {
            LetterStatus::Absent => 0,
            LetterStatus::Correct => 1,
            LetterStatus::Present => 2,
            LetterStatus::Unused => frequency + UNUSED_BONUS,
        }
    }
}

/// Statistics for the whole alphabet, rebuilt from scratch on every call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterStats {
    letters: [LetterStat; ALPHABET_SIZE],
}

impl LetterStats {
    /// Aggregate guesses and the current candidate set
    #[must_use]
    pub fn build(guesses: &[GuessWord], candidates: &[&Word]) -> Self {
        let mut letters = [LetterStat::default(); ALPHABET_SIZE];

        for letter in guesses.iter().flat_map(GuessWord::letters) {
            let stat = &mut letters[usize::from(letter.character - b'a')];
            stat.status = stat.status.max(LetterStatus::from(letter.status));
        }

        for candidate in candidates {
            let mask = candidate.letter_mask();
            for (index, stat) in letters.iter_mut().enumerate() {
                if mask & (1 << index) != 0 {
                    stat.frequency += 1;
                }
            }
        }

        for stat in &mut letters {
            stat.score = LetterStat::score_for(stat.status, stat.frequency);
        }

        Self { letters }
    }

    /// Stats for a lowercase ASCII letter
    ///
    /// # Panics
    /// Panics if `letter` is not in `a..=z`
    #[inline]
    #[must_use]
    pub fn get(&self, letter: u8) -> &LetterStat {
        &self.letters[usize::from(letter - b'a')]
    }

    #[inline]
    #[must_use]
    pub fn score(&self, letter: u8) -> usize {
        self.get(letter).score
    }

    /// Letters whose status matches, as a bit set
    #[must_use]
    pub fn mask_with(&self, status: LetterStatus) -> u32 {
        self.iter()
            .filter(|(_, stat)| stat.status == status)
            .fold(0, |mask, (c, _)| mask | letter_bit(c as u8))
    }

    /// All 26 letters in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = (char, &LetterStat)> {
        ('a'..='z').zip(self.letters.iter())
    }

    /// Whether every letter scores zero (nothing left to learn)
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.letters.iter().all(|stat| stat.score == 0)
    }
}
