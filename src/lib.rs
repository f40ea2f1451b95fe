//! Wordle Assistant
//!
//! Narrows a dictionary to the words consistent with Wordle feedback and ranks
//! next guesses by how many unknown, frequent letters they would test.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_assist::core::Rules;
//! use wordle_assist::solver::{Assistant, Recommender};
//! use wordle_assist::wordlists::loader::words_from_slice;
//!
//! let dictionary = words_from_slice(&["grade", "shine", "about", "crane", "drape"]);
//! let assistant = Assistant::new(Rules::default(), &dictionary, Recommender::default());
//!
//! // '*' follows a green letter, '+' a yellow one; unmarked letters are gray
//! let guesses = assistant.parse_guesses(&["a+bout"]).unwrap();
//! let analysis = assistant.analyze(&guesses);
//!
//! println!("{} candidates", analysis.candidates.len());
//! for r in &analysis.recommendations {
//!     println!("{} {}", r.word, r.score);
//! }
//! ```

// Core domain types
pub mod core;

// Constraint, filtering and scoring engine
pub mod solver;

// Dictionaries
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
