//! Hangman
//!
//! A terminal word-guessing game: uncover the hidden word one letter at a time
//! before the gallows drawing is complete.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::{Round, SecretWord, Status};
//!
//! let mut round = Round::new(SecretWord::new("cat").unwrap());
//! for raw in ["C", "a", "t"] {
//!     let letter = round.validate(raw).unwrap();
//!     round.apply_guess(letter).unwrap();
//! }
//! assert_eq!(round.status(), Status::Won);
//! assert_eq!(round.masked(), "c a t");
//! ```

// Core domain types
pub mod core;

// Gallows drawings
pub mod art;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Player input
pub mod interactive;
