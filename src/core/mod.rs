//! Core domain types for a hangman round
//!
//! This module holds the round state machine and the types flowing through it.
//! Nothing here touches the terminal; rendering and input live elsewhere.

mod guess;
mod round;
mod word;

pub use guess::{GuessError, Letter, validate_guess};
pub use round::{GuessOutcome, MAX_WRONG, Round, RoundError, RoundView, Status};
pub use word::{SecretWord, WordError};
