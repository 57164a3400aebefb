//! Ctrl-C handling for piped input
//!
//! A blocked `read_line` on a pipe never sees Ctrl-C as a key, so a listener
//! thread waits for SIGINT and ends the session from there.

use crate::output::print_farewell;
use std::io::{self, Write};
use std::thread;
use tracing::{info, warn};

/// Write the farewell shown when the player interrupts
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_interrupt_farewell<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    print_farewell(out, true)?;
    out.flush()
}

/// Say goodbye and exit with status 0 on the first Ctrl-C
///
/// Stdout must not be held locked by the reading thread, or the farewell
/// would block behind it.
///
/// # Errors
///
/// Returns an error if the signal runtime or listener thread cannot be created.
pub fn exit_on_interrupt() -> io::Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    thread::Builder::new()
        .name("interrupt".to_string())
        .spawn(move || {
            if let Err(err) = runtime.block_on(tokio::signal::ctrl_c()) {
                warn!(%err, "interrupt listener stopped");
                return;
            }

            info!("interrupted");
            if let Err(err) = write_interrupt_farewell(&mut io::stdout()) {
                warn!(%err, "failed to write farewell");
            }
            std::process::exit(0);
        })?;

    Ok(())
}
