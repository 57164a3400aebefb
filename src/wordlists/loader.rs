//! Vocabulary construction
//!
//! A `Vocabulary` is a non-empty list of secret words; emptiness is rejected
//! when it is built so selection never has to handle it.

use crate::core::SecretWord;
use rand::Rng;

use super::WORDS;

/// Error type for vocabulary construction
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VocabularyError {
    #[error("Vocabulary contains no valid words")]
    Empty,
}

/// Fixed, non-empty set of words a round can be played with
#[derive(Debug, Clone)]
pub struct Vocabulary {
    words: Vec<SecretWord>,
}

impl Vocabulary {
    /// Build a vocabulary, skipping invalid entries
    ///
    /// # Errors
    /// Returns `VocabularyError::Empty` if no valid word remains.
    ///
    /// # Examples
    /// ```
    /// use hangman::wordlists::Vocabulary;
    ///
    /// let vocabulary = Vocabulary::new(["cat", "d0g", "emu"]).unwrap();
    /// assert_eq!(vocabulary.len(), 2);
    ///
    /// assert!(Vocabulary::new(["", "42"]).is_err());
    /// ```
    pub fn new<I, S>(words: I) -> Result<Self, VocabularyError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<SecretWord> = words
            .into_iter()
            .filter_map(|s| SecretWord::new(s).ok())
            .collect();

        if words.is_empty() {
            return Err(VocabularyError::Empty);
        }

        Ok(Self { words })
    }

    /// Vocabulary compiled into the binary
    ///
    /// # Errors
    /// Returns `VocabularyError::Empty` if the embedded list has no valid word.
    pub fn embedded() -> Result<Self, VocabularyError> {
        Self::new(WORDS.iter().copied())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Never true for a constructed vocabulary
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn words(&self) -> &[SecretWord] {
        &self.words
    }

    /// Pick a word uniformly at random
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &SecretWord {
        &self.words[rng.random_range(0..self.words.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn vocabulary_skips_invalid() {
        let vocabulary = Vocabulary::new(["cat", "two words", "", "Emu"]).unwrap();
        let texts: Vec<&str> = vocabulary.words().iter().map(SecretWord::text).collect();
        assert_eq!(texts, vec!["cat", "emu"]);
    }

    #[test]
    fn vocabulary_empty_rejected() {
        let empty: [&str; 0] = [];
        assert_eq!(Vocabulary::new(empty).unwrap_err(), VocabularyError::Empty);
        assert!(Vocabulary::new(["1", "?"]).is_err());
    }

    #[test]
    fn embedded_vocabulary_loads() {
        let vocabulary = Vocabulary::embedded().unwrap();
        assert_eq!(vocabulary.len(), WORDS.len());
        assert!(!vocabulary.is_empty());
    }

    #[test]
    fn choose_is_deterministic_for_seed() {
        let vocabulary = Vocabulary::embedded().unwrap();
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);

        for _ in 0..20 {
            assert_eq!(vocabulary.choose(&mut a), vocabulary.choose(&mut b));
        }
    }

    #[test]
    fn choose_reaches_every_word() {
        let vocabulary = Vocabulary::new(["cat", "dog", "emu"]).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = std::collections::HashSet::new();

        for _ in 0..200 {
            seen.insert(vocabulary.choose(&mut rng).text().to_string());
        }
        assert_eq!(seen.len(), 3);
    }
}
