//! Command implementations

pub mod play;

pub use play::{RoundEnd, SessionSummary, play_round, run_session};
