//! Word lists for hangman rounds
//!
//! Provides the embedded vocabulary and the word sources rounds draw from.

mod embedded;
pub mod loader;
mod source;

pub use embedded::{WORDS, WORDS_COUNT};
pub use loader::{Vocabulary, VocabularyError};
pub use source::{FixedWords, RandomWords, WordSource};
