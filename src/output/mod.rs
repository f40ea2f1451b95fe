//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_candidates, print_guesses, print_letter_stats, print_recommendations, print_solve_report,
    print_usage,
};
