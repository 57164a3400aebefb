//! Round state machine
//!
//! A round starts with a freshly chosen secret word and two empty letter sets.
//! Every applied guess grows exactly one of them until the word is covered
//! (won) or the wrong-guess bound is reached (lost).

use super::{GuessError, Letter, SecretWord, validate_guess};
use crate::art::STAGES;
use crate::wordlists::WordSource;
use std::collections::BTreeSet;
use std::fmt;
use tracing::debug;

/// Wrong guesses allowed before the round is lost (one per drawing stage after the empty gallows)
pub const MAX_WRONG: usize = STAGES.len() - 1;

/// Placeholder shown for letters not yet uncovered
const PLACEHOLDER: char = '_';

/// Status of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Continue,
    Won,
    Lost,
}

impl Status {
    /// Whether no further guesses are accepted
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Continue)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Continue => write!(f, "in progress"),
            Self::Won => write!(f, "won"),
            Self::Lost => write!(f, "lost"),
        }
    }
}

/// Result of applying a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    Hit(Letter),
    Miss(Letter),
}

impl GuessOutcome {
    #[must_use]
    pub const fn letter(self) -> Letter {
        match self {
            Self::Hit(letter) | Self::Miss(letter) => letter,
        }
    }
}

/// Guesses the round refuses to apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RoundError {
    #[error("round is already over ({0})")]
    Finished(Status),
    #[error("letter '{0}' has already been guessed")]
    Repeated(Letter),
}

/// Everything needed to draw the current state of a round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundView {
    /// Index into the stage table, `min(wrong guesses, MAX_WRONG)`
    pub stage: usize,
    /// Secret word with unknown letters replaced, space separated
    pub masked: String,
    /// Hits, sorted
    pub guessed: Vec<char>,
    /// Misses, sorted
    pub wrong: Vec<char>,
}

/// State of a single round
#[derive(Debug, Clone)]
pub struct Round {
    secret: SecretWord,
    guessed: BTreeSet<char>,
    wrong: BTreeSet<char>,
    max_wrong: usize,
}

impl Round {
    /// Start a round with a word drawn from `source`
    pub fn start<S: WordSource + ?Sized>(source: &mut S) -> Self {
        let round = Self::new(source.next_word());
        debug!(letters = round.secret.text().chars().count(), "round started");
        round
    }

    /// Start a round with a known secret word
    #[must_use]
    pub fn new(secret: SecretWord) -> Self {
        Self {
            secret,
            guessed: BTreeSet::new(),
            wrong: BTreeSet::new(),
            max_wrong: MAX_WRONG,
        }
    }

    /// Start a round with a smaller wrong-guess bound
    #[cfg(test)]
    pub(crate) fn with_max_wrong(secret: SecretWord, max_wrong: usize) -> Self {
        Self {
            max_wrong,
            ..Self::new(secret)
        }
    }

    #[must_use]
    pub const fn secret(&self) -> &SecretWord {
        &self.secret
    }

    #[must_use]
    pub const fn guessed(&self) -> &BTreeSet<char> {
        &self.guessed
    }

    #[must_use]
    pub const fn wrong(&self) -> &BTreeSet<char> {
        &self.wrong
    }

    #[must_use]
    pub const fn max_wrong(&self) -> usize {
        self.max_wrong
    }

    /// Every letter classified so far, hits and misses alike
    #[must_use]
    pub fn tried(&self) -> BTreeSet<char> {
        self.guessed.union(&self.wrong).copied().collect()
    }

    /// Current status
    ///
    /// Win is checked before loss.
    #[must_use]
    pub fn status(&self) -> Status {
        if self
            .secret
            .letters()
            .iter()
            .all(|letter| self.guessed.contains(letter))
        {
            Status::Won
        } else if self.wrong.len() >= self.max_wrong {
            Status::Lost
        } else {
            Status::Continue
        }
    }

    /// Validate raw input against the letters this round has already seen
    ///
    /// # Errors
    /// See [`validate_guess`].
    pub fn validate(&self, raw: &str) -> Result<Letter, GuessError> {
        validate_guess(raw, &self.tried())
    }

    /// Classify a validated letter as a hit or a miss
    ///
    /// # Errors
    /// Returns `RoundError::Finished` once the round is won or lost and
    /// `RoundError::Repeated` for a letter that was already classified. State
    /// is left untouched in both cases.
    pub fn apply_guess(&mut self, letter: Letter) -> Result<GuessOutcome, RoundError> {
        let status = self.status();
        if status.is_terminal() {
            return Err(RoundError::Finished(status));
        }

        let ch = letter.as_char();
        if self.guessed.contains(&ch) || self.wrong.contains(&ch) {
            return Err(RoundError::Repeated(letter));
        }

        let outcome = if self.secret.has_letter(ch) {
            self.guessed.insert(ch);
            GuessOutcome::Hit(letter)
        } else {
            self.wrong.insert(ch);
            GuessOutcome::Miss(letter)
        };

        debug!(
            letter = %letter,
            hit = matches!(outcome, GuessOutcome::Hit(_)),
            wrong = self.wrong.len(),
            "guess applied"
        );

        Ok(outcome)
    }

    /// Secret word with unguessed letters masked, e.g. `c a _`
    #[must_use]
    pub fn masked(&self) -> String {
        let mut masked = String::with_capacity(self.secret.text().len() * 2);
        for (i, ch) in self.secret.text().chars().enumerate() {
            if i > 0 {
                masked.push(' ');
            }
            masked.push(if self.guessed.contains(&ch) {
                ch
            } else {
                PLACEHOLDER
            });
        }
        masked
    }

    /// Snapshot of what should be drawn for the current state
    #[must_use]
    pub fn view(&self) -> RoundView {
        RoundView {
            stage: self.wrong.len().min(self.max_wrong),
            masked: self.masked(),
            guessed: self.guessed.iter().copied().collect(),
            wrong: self.wrong.iter().copied().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn round(word: &str) -> Round {
        Round::new(SecretWord::new(word).unwrap())
    }

    fn guess(round: &mut Round, raw: &str) -> GuessOutcome {
        let letter = round.validate(raw).unwrap();
        round.apply_guess(letter).unwrap()
    }

    #[test]
    fn max_wrong_matches_stage_count() {
        assert_eq!(MAX_WRONG, 6);
    }

    #[test]
    fn fresh_round_is_empty() {
        let round = round("cat");
        assert_eq!(round.status(), Status::Continue);
        assert!(round.guessed().is_empty());
        assert!(round.wrong().is_empty());
        assert_eq!(round.masked(), "_ _ _");
    }

    #[test]
    fn cat_scenario_win() {
        let mut round = round("cat");

        assert_eq!(guess(&mut round, "c").letter().as_char(), 'c');
        assert_eq!(round.status(), Status::Continue);
        assert_eq!(round.masked(), "c _ _");

        guess(&mut round, "a");
        assert_eq!(round.status(), Status::Continue);
        assert_eq!(round.masked(), "c a _");

        guess(&mut round, "t");
        assert_eq!(round.status(), Status::Won);
        assert_eq!(round.masked(), "c a t");
    }

    #[test]
    fn cat_scenario_loss_exactly_at_bound() {
        let mut round = round("cat");

        for (i, raw) in ["x", "y", "z", "q", "w"].iter().enumerate() {
            assert!(matches!(guess(&mut round, raw), GuessOutcome::Miss(_)));
            assert_eq!(round.status(), Status::Continue, "lost early after {}", i + 1);
        }

        guess(&mut round, "e");
        assert_eq!(round.status(), Status::Lost);
        assert_eq!(round.wrong().len(), MAX_WRONG);
    }

    #[test]
    fn terminal_round_refuses_guesses() {
        let mut round = round("a");
        guess(&mut round, "a");
        assert_eq!(round.status(), Status::Won);

        let letter = validate_guess("b", &BTreeSet::new()).unwrap();
        assert_eq!(
            round.apply_guess(letter),
            Err(RoundError::Finished(Status::Won))
        );
        assert!(round.wrong().is_empty());
    }

    #[test]
    fn repeated_letter_refused_by_engine() {
        let mut round = round("cat");
        let letter = validate_guess("c", &BTreeSet::new()).unwrap();
        round.apply_guess(letter).unwrap();

        assert_eq!(round.apply_guess(letter), Err(RoundError::Repeated(letter)));
        assert_eq!(round.guessed().len(), 1);
    }

    #[test]
    fn repeated_letters_in_word_uncovered_together() {
        let mut round = round("hangman");
        guess(&mut round, "a");
        assert_eq!(round.masked(), "_ a _ _ _ a _");
        guess(&mut round, "n");
        assert_eq!(round.masked(), "_ a n _ _ a n");
    }

    #[test]
    fn view_sorts_letters_and_clamps_stage() {
        let mut round = Round::with_max_wrong(SecretWord::new("cat").unwrap(), 2);
        guess(&mut round, "t");
        guess(&mut round, "c");
        guess(&mut round, "z");
        guess(&mut round, "b");

        let view = round.view();
        assert_eq!(view.stage, 2);
        assert_eq!(view.masked, "c _ t");
        assert_eq!(view.guessed, vec!['c', 't']);
        assert_eq!(view.wrong, vec!['b', 'z']);
        assert_eq!(round.status(), Status::Lost);
    }

    #[test]
    fn new_round_uses_stage_bound() {
        let round = round("cat");
        assert_eq!(round.max_wrong(), MAX_WRONG);
        assert_eq!(round.view().stage, 0);
    }

    fn letters() -> impl Strategy<Value = Vec<char>> {
        prop::collection::vec(prop::char::range('a', 'z'), 0..40)
    }

    proptest! {
        #[test]
        fn letter_sets_stay_disjoint_and_bounded(word in "[a-z]{1,12}", guesses in letters()) {
            let mut round = round(&word);
            let mut previous_wrong = 0;

            for ch in guesses {
                let Ok(letter) = round.validate(&ch.to_string()) else {
                    continue;
                };
                if round.apply_guess(letter).is_err() {
                    prop_assert!(round.status().is_terminal());
                    break;
                }

                prop_assert!(round.guessed().is_disjoint(round.wrong()));
                prop_assert!(round.wrong().len() <= MAX_WRONG);
                prop_assert!(round.wrong().len() >= previous_wrong);
                previous_wrong = round.wrong().len();
            }
        }

        #[test]
        fn rejecting_tried_letter_is_idempotent(word in "[a-z]{1,12}", first in prop::char::range('a', 'z')) {
            let mut round = round(&word);
            let letter = round.validate(&first.to_string()).unwrap();
            round.apply_guess(letter).unwrap();

            let guessed = round.guessed().clone();
            let wrong = round.wrong().clone();

            for raw in [first.to_string(), first.to_uppercase().to_string()] {
                prop_assert_eq!(round.validate(&raw), Err(GuessError::AlreadyGuessed));
                prop_assert_eq!(round.guessed(), &guessed);
                prop_assert_eq!(round.wrong(), &wrong);
            }
        }

        #[test]
        fn covering_every_letter_wins(word in "[a-z]{1,12}", misses in 0..MAX_WRONG) {
            let mut round = round(&word);

            let absent: Vec<char> = ('a'..='z')
                .filter(|ch| !word.contains(*ch))
                .take(misses)
                .collect();
            for ch in absent {
                guess(&mut round, &ch.to_string());
            }

            let mut present: Vec<char> = word.chars().collect();
            present.sort_unstable();
            present.dedup();
            for ch in present {
                guess(&mut round, &ch.to_string());
            }

            prop_assert_eq!(round.status(), Status::Won);
            prop_assert!(!round.masked().contains(PLACEHOLDER));
        }
    }
}
