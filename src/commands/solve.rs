//! One-shot solve command
//!
//! Takes every guess token at once and reports candidates and
//! recommendations.

use crate::core::{GuessWord, ParseError};
use crate::solver::{Analysis, Assistant};

/// Configuration for a one-shot solve
pub struct SolveConfig {
    pub tokens: Vec<String>,
    pub show_letters: bool,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(tokens: Vec<String>) -> Self {
        Self {
            tokens,
            show_letters: false,
        }
    }
}

/// Result of a one-shot solve
pub struct SolveReport<'a> {
    pub guesses: Vec<GuessWord>,
    pub analysis: Analysis<'a>,
    pub show_letters: bool,
}

/// Parse the tokens and run the full analysis
///
/// # Errors
///
/// Returns the first `ParseError` if any token is malformed; nothing is
/// analyzed in that case.
pub fn solve_guesses<'a>(
    config: SolveConfig,
    assistant: &Assistant<'a>,
) -> Result<SolveReport<'a>, ParseError> {
    let guesses = assistant.parse_guesses(&config.tokens)?;
    let analysis = assistant.analyze(&guesses);

    Ok(SolveReport {
        guesses,
        analysis,
        show_letters: config.show_letters,
    })
}
