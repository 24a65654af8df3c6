//! Command reader loop

use anyhow::{bail, Context, Result};
use std::io::Write;
use tokio::sync::mpsc;
use tracing::debug;

use super::StdinLines;
use crate::controller::Command;

/// Read commands from stdin and forward them to the controller, one at a
/// time, re-prompting after each. An explicit loop rather than recursion,
/// so arbitrarily many commands never grow the call stack.
///
/// Returns `Ok(())` once the controller side has shut down and the channel
/// is closed. Stdin closing while the timer is still being driven is an
/// unrecoverable input failure and surfaces as an error.
pub async fn command_loop(mut lines: StdinLines, commands: mpsc::Sender<Command>) -> Result<()> {
    loop {
        print!("What would you like to do? [pause/resume/stop] ");
        std::io::stdout().flush().context("flushing command prompt")?;

        let line = match lines.next_line().await.context("reading command input")? {
            Some(line) => line,
            None => bail!("command input closed while the timer was running"),
        };

        let Some(command) = parse_command(&line) else {
            println!("Unrecognized command; enter pause, resume, or stop");
            continue;
        };

        debug!("Forwarding command: {:?}", command);
        if commands.send(command).await.is_err() {
            // Controller already finished; nothing left to drive
            return Ok(());
        }
    }
}

/// Parse one line of user input into a command. Case-insensitive; accepts
/// full words and single-letter shortcuts.
pub fn parse_command(input: &str) -> Option<Command> {
    match input.trim().to_ascii_lowercase().as_str() {
        "pause" | "p" => Some(Command::Pause),
        "resume" | "r" => Some(Command::Resume),
        "stop" | "s" => Some(Command::Stop),
        _ => None,
    }
}
