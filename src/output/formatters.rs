//! Formatting utilities for terminal output

use crate::core::{GuessWord, Status, letter_bit};
use crate::solver::LetterStatus;
use colored::{ColoredString, Colorize};

/// Color one letter the way the game shows it
#[must_use]
pub fn colorize_letter(letter: char, status: Status) -> ColoredString {
    let text = letter.to_string();
    match status {
        Status::Correct => text.black().on_green(),
        Status::Present => text.black().on_yellow(),
        Status::Absent | Status::Unknown => text.normal(),
    }
}

/// Render a guess with green and yellow backgrounds
#[must_use]
pub fn colorize_guess(guess: &GuessWord) -> String {
    guess
        .letters()
        .iter()
        .map(|l| colorize_letter(l.as_char(), l.status).to_string())
        .collect()
}

/// Render a letter according to what is known about it
#[must_use]
pub fn colorize_known_letter(letter: char, status: LetterStatus) -> ColoredString {
    let text = letter.to_string();
    match status {
        LetterStatus::Correct => text.black().on_green(),
        LetterStatus::Present => text.black().on_yellow(),
        LetterStatus::Absent => text.bright_black().strikethrough(),
        LetterStatus::Unused => text.bold(),
    }
}

#[must_use]
pub const fn status_label(status: LetterStatus) -> &'static str {
    match status {
        LetterStatus::Unused => "unused",
        LetterStatus::Absent => "absent",
        LetterStatus::Present => "present",
        LetterStatus::Correct => "correct",
    }
}

/// Space-separated letters of a letter set, alphabetical
#[must_use]
pub fn letters_in_mask(mask: u32) -> String {
    let letters: Vec<String> = ('a'..='z')
        .filter(|&c| mask & letter_bit(c as u8) != 0)
        .map(String::from)
        .collect();
    letters.join(" ")
}

/// Create a bar string proportional to `value / max`
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Rules;

    #[test]
    fn colorize_guess_plain_without_colors() {
        colored::control::set_override(false);
        let guess = GuessWord::parse("a+bou*t", &Rules::default()).unwrap();
        assert_eq!(colorize_guess(&guess), "about");
        colored::control::unset_override();
    }

    #[test]
    fn letters_in_mask_lists_alphabetically() {
        let mask = letter_bit(b't') | letter_bit(b'b') | letter_bit(b'o');
        assert_eq!(letters_in_mask(mask), "b o t");
        assert_eq!(letters_in_mask(0), "");
    }

    #[test]
    fn status_labels() {
        assert_eq!(status_label(LetterStatus::Unused), "unused");
        assert_eq!(status_label(LetterStatus::Correct), "correct");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
