//! Raw-mode line editing for an interactive terminal

use super::{LineReader, Reply};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use std::io::{self, Write};
use tracing::warn;

/// Restores cooked mode when dropped, including on early return
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(err) = disable_raw_mode() {
            warn!(%err, "failed to restore terminal mode");
        }
    }
}

/// Effect of one key press on the line being edited
#[derive(Debug, PartialEq, Eq)]
enum Edit {
    Push(char),
    Pop,
    Submit,
    Finish(Reply),
    Ignore,
}

fn edit_for(key: KeyEvent, buffer_empty: bool) -> Edit {
    // Only process key press events (fixes Windows double-input bug)
    if key.kind != KeyEventKind::Press {
        return Edit::Ignore;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Edit::Finish(Reply::Interrupted)
        }
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            if buffer_empty {
                Edit::Finish(Reply::EndOfInput)
            } else {
                Edit::Ignore
            }
        }
        KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::CONTROL) => Edit::Ignore,
        KeyCode::Char(c) => Edit::Push(c),
        KeyCode::Backspace => Edit::Pop,
        KeyCode::Enter => Edit::Submit,
        _ => Edit::Ignore,
    }
}

/// Reads one line at a time from the controlling terminal
///
/// Raw mode is held only while a line is being typed, so everything the
/// session prints in between behaves like normal terminal output.
#[derive(Default)]
pub struct TerminalReader {
    buffer: String,
}

impl TerminalReader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl LineReader for TerminalReader {
    fn read_line(&mut self) -> io::Result<Reply> {
        self.buffer.clear();
        let mut stdout = io::stdout();
        let _guard = RawModeGuard::enable()?;

        loop {
            let Event::Key(key) = event::read()? else {
                continue;
            };

            match edit_for(key, self.buffer.is_empty()) {
                Edit::Push(c) => {
                    self.buffer.push(c);
                    write!(stdout, "{c}")?;
                }
                Edit::Pop => {
                    if self.buffer.pop().is_some() {
                        write!(stdout, "\u{8} \u{8}")?;
                    }
                }
                Edit::Submit => {
                    write!(stdout, "\r\n")?;
                    stdout.flush()?;
                    return Ok(Reply::Line(self.buffer.trim().to_string()));
                }
                Edit::Finish(reply) => {
                    stdout.flush()?;
                    return Ok(reply);
                }
                Edit::Ignore => continue,
            }
            stdout.flush()?;
        }
    }
}
