//! Word sources
//!
//! Rounds draw their secret word through `WordSource`, so the randomness can
//! be swapped for a seeded RNG or a fixed script.

use super::Vocabulary;
use crate::core::SecretWord;
use rand::Rng;

/// Supplies the secret word for each new round
pub trait WordSource {
    fn next_word(&mut self) -> SecretWord;
}

/// Uniform random selection from a vocabulary
pub struct RandomWords<R> {
    vocabulary: Vocabulary,
    rng: R,
}

impl<R: Rng> RandomWords<R> {
    #[must_use]
    pub const fn new(vocabulary: Vocabulary, rng: R) -> Self {
        Self { vocabulary, rng }
    }
}

impl<R: Rng> WordSource for RandomWords<R> {
    fn next_word(&mut self) -> SecretWord {
        self.vocabulary.choose(&mut self.rng).clone()
    }
}

/// Cycles through a fixed vocabulary in order
pub struct FixedWords {
    vocabulary: Vocabulary,
    next: usize,
}

impl FixedWords {
    #[must_use]
    pub const fn new(vocabulary: Vocabulary) -> Self {
        Self {
            vocabulary,
            next: 0,
        }
    }
}

impl WordSource for FixedWords {
    fn next_word(&mut self) -> SecretWord {
        let words = self.vocabulary.words();
        let word = words[self.next % words.len()].clone();
        self.next = (self.next + 1) % words.len();
        word
    }
}
