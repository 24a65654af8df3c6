//! Countdown state machine

use chrono::{DateTime, Duration, Utc};

/// Lifecycle phase of the countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Running,
    Paused,
    Stopped,
}

/// Pure countdown state: remaining time, lifecycle phase, and the absolute
/// deadline at which the countdown is due to hit zero.
///
/// The deadline is an absolute timestamp rather than a decrementing counter,
/// so every tick recomputes remaining time from the wall clock and cumulative
/// drift stays bounded. It is present exactly while the timer is running and
/// is rebuilt on every resume to absorb pause gaps.
///
/// Transitions called outside their required source state are deliberate
/// no-ops rather than errors, so callers can issue commands without checking
/// the current phase first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerState {
    remaining_seconds: u64,
    status: Status,
    deadline: Option<DateTime<Utc>>,
}

impl TimerState {
    /// Create a new timer that has not been started yet.
    pub fn new() -> Self {
        Self {
            remaining_seconds: 0,
            status: Status::Stopped,
            deadline: None,
        }
    }

    /// Begin the countdown with `total_seconds` on the clock.
    pub fn start(&mut self, total_seconds: u64, now: DateTime<Utc>) {
        self.remaining_seconds = total_seconds;
        self.status = Status::Running;
        self.deadline = Some(now + seconds(total_seconds));
    }

    /// Recompute remaining time from the absolute deadline.
    ///
    /// Returns the raw signed delta so the caller can detect expiry; the
    /// stored remaining value is clamped at zero. A delta of zero or less
    /// stops the countdown. When the timer is not running this mutates
    /// nothing and returns the current remaining value.
    pub fn tick(&mut self, now: DateTime<Utc>) -> i64 {
        if self.status != Status::Running {
            return self.remaining_seconds as i64;
        }
        let Some(deadline) = self.deadline else {
            return self.remaining_seconds as i64;
        };

        let delta = (deadline - now).num_seconds();
        if delta <= 0 {
            self.remaining_seconds = 0;
            self.status = Status::Stopped;
            self.deadline = None;
        } else {
            self.remaining_seconds = delta as u64;
        }
        delta
    }

    /// Pause a running countdown, keeping the last computed remaining value
    /// as the snapshot to resume from. No-op unless running.
    pub fn pause(&mut self) {
        if self.status != Status::Running {
            return;
        }
        self.status = Status::Paused;
        self.deadline = None;
    }

    /// Resume a paused countdown, rebasing the deadline on the current time
    /// so time spent paused does not count. No-op unless paused.
    pub fn resume(&mut self, now: DateTime<Utc>) {
        if self.status != Status::Paused {
            return;
        }
        self.deadline = Some(now + seconds(self.remaining_seconds));
        self.status = Status::Running;
    }

    /// Stop the countdown from any active phase. No-op if already stopped.
    pub fn stop(&mut self) {
        if self.status == Status::Stopped {
            return;
        }
        self.status = Status::Stopped;
        self.deadline = None;
    }

    /// Seconds left on the clock.
    pub fn remaining_seconds(&self) -> u64 {
        self.remaining_seconds
    }

    /// Current lifecycle phase.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Absolute expiry instant, present only while running.
    pub fn deadline(&self) -> Option<DateTime<Utc>> {
        self.deadline
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new()
    }
}

fn seconds(value: u64) -> Duration {
    Duration::seconds(i64::try_from(value).unwrap_or(i64::MAX))
}
