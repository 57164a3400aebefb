//! Terminal output formatting
//!
//! Display utilities for rounds, guess feedback and session messages.

pub mod display;
pub mod formatters;

pub use display::{
    print_farewell, print_guess_error, print_outcome, print_round, print_round_end,
    print_welcome,
};
