//! Countdown rendering for standard output

use crate::controller::TimerEvent;

/// Split a remaining-seconds value into an (hours, minutes, seconds) triple.
pub fn split_clock(remaining_seconds: u64) -> (u64, u64, u64) {
    let hours = remaining_seconds / 3600;
    let minutes = (remaining_seconds % 3600) / 60;
    let seconds = remaining_seconds % 60;
    (hours, minutes, seconds)
}

/// Format a remaining-seconds value as `HH : MM : SS` with zero-padded
/// two-digit fields.
pub fn format_clock(remaining_seconds: u64) -> String {
    let (hours, minutes, seconds) = split_clock(remaining_seconds);
    format!("{:02} : {:02} : {:02}", hours, minutes, seconds)
}

/// Print one line per controller event.
pub fn render(event: &TimerEvent) {
    match event {
        TimerEvent::Tick {
            hours,
            minutes,
            seconds,
        } => println!("{:02} : {:02} : {:02}", hours, minutes, seconds),
        TimerEvent::Paused => println!("Timer paused"),
        TimerEvent::Resumed => println!("Timer resumed"),
        TimerEvent::Stopped => println!("Timer stopped"),
        TimerEvent::Expired => println!("Timer has expired"),
    }
}
