//! Dictionaries for the Wordle assistant
//!
//! Provides the embedded dictionary compiled into the binary plus loaders for
//! plain-text and JSON word list files.

mod embedded;
pub mod loader;
pub mod source;

pub use embedded::{WORDS, WORDS_COUNT};
pub use loader::DictionaryError;
pub use source::{DictionarySource, EmbeddedSource, FileSource, source_from_name};
