//! Hangman - CLI
//!
//! Starts an interactive hangman session on the current terminal.

use anyhow::Result;
use clap::Parser;
use hangman::{
    commands::run_session,
    interactive::{
        BufferedReader, LineReader, TerminalReader, exit_on_interrupt, wants_raw_input,
    },
    wordlists::{RandomWords, Vocabulary},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{self, IsTerminal};
use tracing::Level;

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Guess the hidden word one letter at a time",
    version,
    author
)]
struct Cli {
    /// Seed for word selection (reproducible sessions)
    #[arg(long)]
    seed: Option<u64>,

    /// Diagnostic logging to stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut source = RandomWords::new(Vocabulary::embedded()?, rng);

    let stdout_is_terminal = io::stdout().is_terminal();
    if !stdout_is_terminal {
        colored::control::set_override(false);
    }

    let mut reader: Box<dyn LineReader> =
        if wants_raw_input(io::stdin().is_terminal(), stdout_is_terminal) {
            Box::new(TerminalReader::new())
        } else {
            exit_on_interrupt()?;
            Box::new(BufferedReader::new(io::stdin().lock()))
        };

    // Left unlocked so the interrupt listener can write the farewell
    let mut stdout = io::stdout();
    run_session(&mut source, reader.as_mut(), &mut stdout)?;
    Ok(())
}
