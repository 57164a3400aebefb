//! Interactive play session
//!
//! Renders the round, asks for a letter until one validates, applies it, and
//! offers a replay once the round is over.

use crate::core::{Round, Status};
use crate::interactive::{LineReader, Reply};
use crate::output::formatters::wants_replay;
use crate::output::{
    print_farewell, print_guess_error, print_outcome, print_round, print_round_end,
    print_welcome,
};
use crate::wordlists::WordSource;
use anyhow::{Context, Result};
use std::io::Write;
use tracing::{debug, info};

const GUESS_PROMPT: &str = "Enter a letter: ";
const REPLAY_PROMPT: &str = "Play again? (y/n): ";

/// How a round stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundEnd {
    /// Reached a terminal status
    Finished(Status),
    /// The player interrupted or closed input mid-round
    Abandoned,
}

/// Totals for a finished session
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub rounds: usize,
    pub wins: usize,
    pub interrupted: bool,
}

/// Run rounds until the player declines a replay or input ends
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_session<S, L, W>(source: &mut S, reader: &mut L, out: &mut W) -> Result<SessionSummary>
where
    S: WordSource + ?Sized,
    L: LineReader + ?Sized,
    W: Write + ?Sized,
{
    let mut summary = SessionSummary::default();
    print_welcome(out)?;

    loop {
        match play_round(source, reader, out)? {
            RoundEnd::Finished(status) => {
                summary.rounds += 1;
                if status == Status::Won {
                    summary.wins += 1;
                }
            }
            RoundEnd::Abandoned => {
                summary.interrupted = true;
                break;
            }
        }

        match prompt(reader, out, REPLAY_PROMPT)? {
            Reply::Line(answer) if wants_replay(&answer) => {}
            Reply::Line(_) => break,
            Reply::Interrupted | Reply::EndOfInput => {
                summary.interrupted = true;
                break;
            }
        }
    }

    print_farewell(out, summary.interrupted)?;
    out.flush()?;

    info!(
        rounds = summary.rounds,
        wins = summary.wins,
        interrupted = summary.interrupted,
        "session finished"
    );
    Ok(summary)
}

/// Play a single round to completion
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn play_round<S, L, W>(source: &mut S, reader: &mut L, out: &mut W) -> Result<RoundEnd>
where
    S: WordSource + ?Sized,
    L: LineReader + ?Sized,
    W: Write + ?Sized,
{
    let mut round = Round::start(source);

    loop {
        print_round(out, &round.view())?;

        let status = round.status();
        if status.is_terminal() {
            print_round_end(out, status, round.secret())?;
            info!(%status, wrong = round.wrong().len(), "round finished");
            return Ok(RoundEnd::Finished(status));
        }

        // Re-prompt until a letter validates
        let letter = loop {
            match prompt(reader, out, GUESS_PROMPT)? {
                Reply::Line(raw) => match round.validate(&raw) {
                    Ok(letter) => break letter,
                    Err(error) => {
                        debug!(%error, "guess rejected");
                        print_guess_error(out, error)?;
                    }
                },
                Reply::Interrupted | Reply::EndOfInput => return Ok(RoundEnd::Abandoned),
            }
        };

        match round.apply_guess(letter) {
            Ok(outcome) => print_outcome(out, outcome)?,
            // Unreachable after validation against the same round
            Err(error) => return Err(error).context("validated guess was refused"),
        }
    }
}

fn prompt<L, W>(reader: &mut L, out: &mut W, message: &str) -> Result<Reply>
where
    L: LineReader + ?Sized,
    W: Write + ?Sized,
{
    write!(out, "{message}")?;
    out.flush()?;
    reader
        .read_line()
        .with_context(|| format!("failed to read input for prompt {message:?}"))
}
