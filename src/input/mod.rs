//! Input collaborators
//!
//! This module owns everything read from the terminal: the duration prompt
//! asked once at startup and the command reader that runs for the lifetime
//! of the countdown. All validation and re-prompting lives here; the
//! controller only ever sees well-formed values.

pub mod commands;
pub mod prompt;

// Re-export main functions
pub use commands::{command_loop, parse_command};
pub use prompt::{prompt_for_duration, DurationInput};

use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

/// Shared line reader over stdin, created once so the duration prompt and
/// the command loop do not race over buffered input.
pub type StdinLines = Lines<BufReader<Stdin>>;

/// Build the line reader both input collaborators consume from.
pub fn stdin_lines() -> StdinLines {
    BufReader::new(tokio::io::stdin()).lines()
}
