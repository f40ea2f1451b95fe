//! Core domain types for the Wordle assistant
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure and immutable once constructed.

mod guess;
mod letter;
mod rules;
mod word;

pub use guess::{GuessWord, ParseError};
pub use letter::{Letter, Status};
pub use rules::{
    DEFAULT_CORRECT_MARKER, DEFAULT_PRESENT_MARKER, DEFAULT_WORD_LENGTH, Rules, RulesError,
};
pub use word::{Word, WordError, letter_bit};
