//! Candidate narrowing and guess recommendation
//!
//! This module turns guess feedback into constraints, filters the dictionary
//! and ranks next guesses by letter information value.

mod constraint;
mod engine;
mod filter;
mod recommend;
mod stats;

pub use constraint::{Constraint, Fragment, Predicate};
pub use engine::{Analysis, Assistant};
pub use filter::filter_candidates;
pub use recommend::{DEFAULT_RECOMMENDATIONS, Recommendation, Recommender, score_word};
pub use stats::{LetterStat, LetterStats, LetterStatus};
