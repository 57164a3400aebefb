//! Guess validation
//!
//! Raw player input becomes a `Letter` only through [`validate_guess`], so
//! anything the round engine receives is already normalized.

use std::collections::BTreeSet;
use std::fmt;

/// A single normalized (lowercase) letter that passed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(char);

impl Letter {
    /// Get the underlying character
    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reasons a guess is rejected
///
/// The messages double as the corrective text shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GuessError {
    #[error("Please enter a letter.")]
    EmptyInput,
    #[error("Please enter a single letter.")]
    MultiCharacter,
    #[error("Please enter a letter (a-z).")]
    NonAlphabetic,
    #[error("You've already guessed that letter.")]
    AlreadyGuessed,
}

/// Validate and normalize a raw guess
///
/// Checks run in order: blank input, length, alphabetic, already tried.
///
/// # Errors
/// Returns the first `GuessError` that applies. Never mutates anything, so the
/// caller can simply re-prompt.
///
/// # Examples
/// ```
/// use std::collections::BTreeSet;
/// use hangman::core::{GuessError, validate_guess};
///
/// let tried = BTreeSet::from(['c']);
/// assert_eq!(validate_guess("A", &tried).unwrap().as_char(), 'a');
/// assert_eq!(validate_guess("c", &tried), Err(GuessError::AlreadyGuessed));
/// ```
pub fn validate_guess(raw: &str, already_tried: &BTreeSet<char>) -> Result<Letter, GuessError> {
    let normalized = raw.trim().to_lowercase();

    let mut chars = normalized.chars();
    let Some(letter) = chars.next() else {
        return Err(GuessError::EmptyInput);
    };
    if chars.next().is_some() {
        return Err(GuessError::MultiCharacter);
    }

    if !letter.is_alphabetic() {
        return Err(GuessError::NonAlphabetic);
    }

    if already_tried.contains(&letter) {
        return Err(GuessError::AlreadyGuessed);
    }

    Ok(Letter(letter))
}
