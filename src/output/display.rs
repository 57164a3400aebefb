//! Display functions for round state and feedback

use super::formatters::letter_list;
use crate::art;
use crate::core::{GuessError, GuessOutcome, RoundView, SecretWord, Status};
use colored::Colorize;
use std::io::{self, Write};

/// Print the welcome banner
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_welcome<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", "Welcome to Hangman!".bright_cyan().bold())?;
    writeln!(out)
}

/// Print the stage drawing, masked word and letter lists
///
/// Letter lists are omitted while empty.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_round<W: Write + ?Sized>(out: &mut W, view: &RoundView) -> io::Result<()> {
    writeln!(out, "{}", art::stage(view.stage))?;
    writeln!(out, "Word:  {}", view.masked.bright_white().bold())?;

    if !view.guessed.is_empty() {
        writeln!(out, "Guessed: {}", letter_list(&view.guessed).green())?;
    }
    if !view.wrong.is_empty() {
        writeln!(out, "Wrong guesses: {}", letter_list(&view.wrong).red())?;
    }

    writeln!(out)
}

/// Print hit/miss feedback for an applied guess
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_outcome<W: Write + ?Sized>(out: &mut W, outcome: GuessOutcome) -> io::Result<()> {
    match outcome {
        GuessOutcome::Hit(letter) => {
            writeln!(out, "{}", format!("Good: {letter} is in the word!").green())?;
        }
        GuessOutcome::Miss(letter) => {
            writeln!(out, "{}", format!("Nope: {letter} is not in the word.").red())?;
        }
    }
    writeln!(out)
}

/// Print the corrective message for a rejected guess
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_guess_error<W: Write + ?Sized>(out: &mut W, error: GuessError) -> io::Result<()> {
    writeln!(out, "{}", error.to_string().yellow())
}

/// Print the end-of-round message
///
/// A loss redraws the final stage and reveals the word.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_round_end<W: Write + ?Sized>(
    out: &mut W,
    status: Status,
    secret: &SecretWord,
) -> io::Result<()> {
    match status {
        Status::Won => {
            writeln!(
                out,
                "{}",
                "Congratulations, you guessed the word!".bright_green().bold()
            )?;
        }
        Status::Lost => {
            writeln!(out, "{}", art::stage(art::STAGES.len() - 1))?;
            writeln!(
                out,
                "Game over, the word was: {}",
                secret.text().bright_yellow().bold()
            )?;
        }
        Status::Continue => return Ok(()),
    }
    writeln!(out)
}

/// Print the closing message
///
/// An interrupted session starts on a fresh line since the cursor may still
/// sit after a prompt.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_farewell<W: Write + ?Sized>(out: &mut W, interrupted: bool) -> io::Result<()> {
    if interrupted {
        writeln!(out)?;
        writeln!(out, "Goodbye!")
    } else {
        writeln!(out, "Thanks for playing, goodbye!")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Round;

    fn rendered<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        colored::control::set_override(false);
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn fresh_round_hides_letter_lists() {
        let round = Round::new(SecretWord::new("cat").unwrap());
        let text = rendered(|out| print_round(out, &round.view()));

        assert!(text.contains("Word:  _ _ _"));
        assert!(text.starts_with(art::STAGES[0]));
        assert!(!text.contains("Guessed:"));
        assert!(!text.contains("Wrong guesses:"));
    }

    #[test]
    fn round_lists_sorted_letters() {
        let view = RoundView {
            stage: 2,
            masked: "c a _".to_string(),
            guessed: vec!['a', 'c'],
            wrong: vec!['q', 'x'],
        };
        let text = rendered(|out| print_round(out, &view));

        assert!(text.starts_with(art::STAGES[2]));
        assert!(text.contains("Word:  c a _"));
        assert!(text.contains("Guessed: a, c"));
        assert!(text.contains("Wrong guesses: q, x"));
    }

    #[test]
    fn loss_reveals_word() {
        let secret = SecretWord::new("python").unwrap();
        let text = rendered(|out| print_round_end(out, Status::Lost, &secret));

        assert!(text.contains(art::STAGES[6]));
        assert!(text.contains("Game over, the word was: python"));
    }

    #[test]
    fn win_congratulates() {
        let secret = SecretWord::new("python").unwrap();
        let text = rendered(|out| print_round_end(out, Status::Won, &secret));

        assert!(text.contains("Congratulations"));
        assert!(!text.contains("python"));
    }

    #[test]
    fn farewell_variants() {
        assert_eq!(rendered(|out| print_farewell(out, true)), "\nGoodbye!\n");
        assert_eq!(
            rendered(|out| print_farewell(out, false)),
            "Thanks for playing, goodbye!\n"
        );
    }
}
