//! Line input from the player
//!
//! The session only needs "one trimmed line, or a reason there is none". A
//! TTY gets a crossterm-backed reader that can see Ctrl-C and Ctrl-D;
//! anything else is read as plain buffered lines, with Ctrl-C caught by a
//! signal listener instead.

mod signal;
mod terminal;

pub use signal::{exit_on_interrupt, write_interrupt_farewell};
pub use terminal::TerminalReader;

use std::io::{self, BufRead};

/// What a single read produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// A line with surrounding whitespace removed
    Line(String),
    /// Ctrl-C while waiting for input
    Interrupted,
    /// Input stream closed (Ctrl-D, or end of a pipe)
    EndOfInput,
}

impl Reply {
    /// Whether the player can no longer answer
    #[must_use]
    pub const fn is_closed(&self) -> bool {
        matches!(self, Self::Interrupted | Self::EndOfInput)
    }
}

/// Source of player input lines
pub trait LineReader {
    /// Block until the player submits a line or input ends
    ///
    /// # Errors
    ///
    /// Returns an error on an I/O failure other than end of input.
    fn read_line(&mut self) -> io::Result<Reply>;
}

/// Reads lines from any buffered reader (pipes, files, tests)
pub struct BufferedReader<R> {
    inner: R,
}

impl<R: BufRead> BufferedReader<R> {
    #[must_use]
    pub const fn new(inner: R) -> Self {
        Self { inner }
    }
}

impl<R: BufRead> LineReader for BufferedReader<R> {
    fn read_line(&mut self) -> io::Result<Reply> {
        let mut input = String::new();
        if self.inner.read_line(&mut input)? == 0 {
            return Ok(Reply::EndOfInput);
        }
        Ok(Reply::Line(input.trim().to_string()))
    }
}

/// Whether input should go through the raw-mode [`TerminalReader`]
///
/// Typed characters are echoed to stdout, so both ends must be a terminal.
#[must_use]
pub const fn wants_raw_input(stdin_is_terminal: bool, stdout_is_terminal: bool) -> bool {
    stdin_is_terminal && stdout_is_terminal
}
