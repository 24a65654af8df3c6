//! Countdown controller
//!
//! Owns the timer state, the 1-second tick schedule, and command dispatch.
//! Everything runs inside one task loop, so tick handling and command
//! handling are serialized and can never interleave mid-transition.

use chrono::{DateTime, Utc};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{self, Instant, Interval, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::display;
use crate::state::{Status, TimerState};

const TICK_PERIOD: Duration = Duration::from_secs(1);

/// User-issued control actions accepted while the countdown runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Pause,
    Resume,
    Stop,
}

/// State-change notifications emitted by the controller, one per transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerEvent {
    /// Remaining time after a tick, split into clock fields.
    Tick { hours: u64, minutes: u64, seconds: u64 },
    Paused,
    Resumed,
    Stopped,
    /// The countdown reached zero; no further ticks will be delivered.
    Expired,
}

type Clock = Box<dyn Fn() -> DateTime<Utc> + Send>;

/// Drives one countdown to completion.
///
/// Commands arrive over an mpsc channel and are applied one at a time;
/// events go out over an unbounded channel, one per state change. The
/// controller task completing is the termination signal the driver waits
/// on, so expiry never exits the process from inside timer logic.
pub struct TimerController {
    state: TimerState,
    commands: mpsc::Receiver<Command>,
    events: mpsc::UnboundedSender<TimerEvent>,
    clock: Clock,
}

impl TimerController {
    /// Create a controller using the system wall clock.
    pub fn new(
        commands: mpsc::Receiver<Command>,
        events: mpsc::UnboundedSender<TimerEvent>,
    ) -> Self {
        Self::with_clock(commands, events, Utc::now)
    }

    /// Create a controller with an injected time source. Tests use this to
    /// keep deadline arithmetic in step with paused tokio time.
    pub fn with_clock(
        commands: mpsc::Receiver<Command>,
        events: mpsc::UnboundedSender<TimerEvent>,
        clock: impl Fn() -> DateTime<Utc> + Send + 'static,
    ) -> Self {
        Self {
            state: TimerState::new(),
            commands,
            events,
            clock: Box::new(clock),
        }
    }

    /// Run the countdown until it expires or is stopped.
    ///
    /// While running, the loop races the next scheduled tick against the
    /// next command; while paused there is no tick schedule and only
    /// commands are awaited. Dropping the interval on pause or stop cancels
    /// the schedule before any further handler runs, so no two tick sources
    /// can ever be active at once.
    pub async fn run(mut self, total_seconds: u64) {
        self.state.start(total_seconds, (self.clock)());
        info!("Countdown started: {}s total", total_seconds);

        let mut ticker = Some(schedule_ticks());

        loop {
            let command = match ticker.as_mut() {
                Some(interval) => tokio::select! {
                    _ = interval.tick() => {
                        if self.handle_tick() {
                            break;
                        }
                        continue;
                    }
                    command = self.commands.recv() => command,
                },
                None => self.commands.recv().await,
            };

            // A closed command channel means the input side is gone; wind
            // down as if the user had asked to stop.
            let command = command.unwrap_or(Command::Stop);
            if self.apply(command, &mut ticker) {
                break;
            }
        }
    }

    /// Advance the countdown by one tick. Returns true on expiry.
    fn handle_tick(&mut self) -> bool {
        let delta = self.state.tick((self.clock)());
        debug!("Tick: {}s to deadline", delta);

        if self.state.status() == Status::Stopped {
            info!("Countdown expired");
            self.emit(TimerEvent::Expired);
            return true;
        }

        let (hours, minutes, seconds) = display::split_clock(self.state.remaining_seconds());
        self.emit(TimerEvent::Tick {
            hours,
            minutes,
            seconds,
        });
        false
    }

    /// Apply one command. Out-of-state commands are silent no-ops and emit
    /// no duplicate events. Returns true when the controller should exit.
    fn apply(&mut self, command: Command, ticker: &mut Option<Interval>) -> bool {
        match command {
            Command::Pause => {
                if self.state.status() == Status::Running {
                    *ticker = None;
                    self.state.pause();
                    info!(
                        "Countdown paused with {}s remaining",
                        self.state.remaining_seconds()
                    );
                    self.emit(TimerEvent::Paused);
                }
                false
            }
            Command::Resume => {
                if self.state.status() == Status::Paused {
                    self.state.resume((self.clock)());
                    *ticker = Some(schedule_ticks());
                    info!(
                        "Countdown resumed with {}s remaining",
                        self.state.remaining_seconds()
                    );
                    self.emit(TimerEvent::Resumed);
                }
                false
            }
            Command::Stop => {
                *ticker = None;
                let was_active = self.state.status() != Status::Stopped;
                self.state.stop();
                if was_active {
                    info!("Countdown stopped by command");
                    self.emit(TimerEvent::Stopped);
                }
                true
            }
        }
    }

    fn emit(&self, event: TimerEvent) {
        if self.events.send(event).is_err() {
            warn!("Event receiver dropped, discarding event");
        }
    }
}

/// Schedule ticks one second apart, the first one a full second from now.
fn schedule_ticks() -> Interval {
    let mut ticks = time::interval_at(Instant::now() + TICK_PERIOD, TICK_PERIOD);
    ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);
    ticks
}
