//! Interactive duration prompt

use anyhow::{anyhow, Context, Result};
use std::io::Write;
use tracing::debug;

use super::StdinLines;

/// Validated countdown duration as entered by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationInput {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl DurationInput {
    /// Total countdown length in seconds.
    pub fn total_seconds(&self) -> u64 {
        self.hours
            .saturating_mul(3600)
            .saturating_add(self.minutes * 60 + self.seconds)
    }
}

/// Ask for hours, minutes, and seconds, re-prompting until each field is a
/// valid number in range. Minutes and seconds must be between 0 and 59;
/// hours only need to be non-negative.
pub async fn prompt_for_duration(lines: &mut StdinLines) -> Result<DurationInput> {
    let hours = prompt_field(lines, "hours", None).await?;
    let minutes = prompt_field(lines, "minutes", Some(59)).await?;
    let seconds = prompt_field(lines, "seconds", Some(59)).await?;

    let duration = DurationInput {
        hours,
        minutes,
        seconds,
    };
    debug!("Duration entered: {}s total", duration.total_seconds());
    Ok(duration)
}

/// Prompt for one numeric field until the input parses and fits the bound.
async fn prompt_field(lines: &mut StdinLines, label: &str, max: Option<u64>) -> Result<u64> {
    loop {
        print!("Please enter {}: ", label);
        std::io::stdout().flush().context("flushing prompt")?;

        let line = lines
            .next_line()
            .await
            .context("reading duration input")?
            .ok_or_else(|| anyhow!("input closed while prompting for {}", label))?;

        match line.trim().parse::<u64>() {
            Ok(value) => match max {
                Some(limit) if value > limit => {
                    println!("Value must be between 0 and {}", limit);
                }
                _ => return Ok(value),
            },
            Err(_) => println!("Please enter a valid number"),
        }
    }
}
