//! Configuration and CLI argument handling

use clap::Parser;

use crate::input::DurationInput;

/// CLI argument parsing structure
#[derive(Parser)]
#[command(name = "hourglass")]
#[command(about = "An interactive countdown timer for the terminal")]
#[command(version = "0.1.0")]
pub struct Config {
    /// Countdown hours (skips the interactive prompt when set)
    #[arg(long)]
    pub hours: Option<u64>,

    /// Countdown minutes, 0-59 (skips the interactive prompt when set)
    #[arg(long, value_parser = clap::value_parser!(u64).range(0..=59))]
    pub minutes: Option<u64>,

    /// Countdown seconds, 0-59 (skips the interactive prompt when set)
    #[arg(long, value_parser = clap::value_parser!(u64).range(0..=59))]
    pub seconds: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Duration supplied on the command line, if any component was given.
    /// Missing components default to zero.
    pub fn duration(&self) -> Option<DurationInput> {
        if self.hours.is_none() && self.minutes.is_none() && self.seconds.is_none() {
            return None;
        }
        Some(DurationInput {
            hours: self.hours.unwrap_or(0),
            minutes: self.minutes.unwrap_or(0),
            seconds: self.seconds.unwrap_or(0),
        })
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}
