//! Controller scenarios driven with paused tokio time.
//!
//! The controller gets a clock derived from the paused runtime's `Instant`,
//! so deadline arithmetic advances exactly with the test clock.

use chrono::{DateTime, Duration as ChronoDuration, TimeZone, Utc};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{advance, Duration, Instant};

use hourglass::controller::{Command, TimerController, TimerEvent};

fn tick(hours: u64, minutes: u64, seconds: u64) -> TimerEvent {
    TimerEvent::Tick {
        hours,
        minutes,
        seconds,
    }
}

fn spawn_controller(
    total_seconds: u64,
) -> (
    mpsc::Sender<Command>,
    mpsc::UnboundedReceiver<TimerEvent>,
    JoinHandle<()>,
) {
    let (command_tx, command_rx) = mpsc::channel(8);
    let (event_tx, events) = mpsc::unbounded_channel();

    let epoch: DateTime<Utc> = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let origin = Instant::now();
    let clock = move || epoch + ChronoDuration::from_std(origin.elapsed()).unwrap();

    let controller = TimerController::with_clock(command_rx, event_tx, clock);
    let task = tokio::spawn(controller.run(total_seconds));
    (command_tx, events, task)
}

#[tokio::test(start_paused = true)]
async fn counts_down_to_expiry() {
    let (_commands, mut events, task) = spawn_controller(3);

    assert_eq!(events.recv().await, Some(tick(0, 0, 2)));
    assert_eq!(events.recv().await, Some(tick(0, 0, 1)));
    assert_eq!(events.recv().await, Some(TimerEvent::Expired));

    // Expiry closes the event channel; no further ticks can arrive
    assert_eq!(events.recv().await, None);
    task.await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn zero_duration_expires_on_first_tick() {
    let (_commands, mut events, task) = spawn_controller(0);

    assert_eq!(events.recv().await, Some(TimerEvent::Expired));
    assert_eq!(events.recv().await, None);
    task.await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn tick_splits_remaining_into_clock_fields() {
    let (commands, mut events, task) = spawn_controller(3662);

    assert_eq!(events.recv().await, Some(tick(1, 1, 1)));

    commands.send(Command::Stop).await.unwrap();
    assert_eq!(events.recv().await, Some(TimerEvent::Stopped));
    assert_eq!(events.recv().await, None);
    task.await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn pause_freezes_the_countdown_and_resume_rebases_it() {
    let (commands, mut events, task) = spawn_controller(10);

    // One second in, nine remain
    assert_eq!(events.recv().await, Some(tick(0, 0, 9)));

    commands.send(Command::Pause).await.unwrap();
    assert_eq!(events.recv().await, Some(TimerEvent::Paused));

    // A long gap while paused must not count against the countdown
    advance(Duration::from_secs(100)).await;

    commands.send(Command::Resume).await.unwrap();
    assert_eq!(events.recv().await, Some(TimerEvent::Resumed));

    // The next tick lands one second after the resume, with the snapshot
    // decremented by exactly one
    assert_eq!(events.recv().await, Some(tick(0, 0, 8)));

    commands.send(Command::Stop).await.unwrap();
    assert_eq!(events.recv().await, Some(TimerEvent::Stopped));
    assert_eq!(events.recv().await, None);
    task.await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn out_of_state_commands_emit_nothing() {
    let (commands, mut events, task) = spawn_controller(30);

    // Resume while already running: silent no-op
    commands.send(Command::Resume).await.unwrap();
    assert_eq!(events.recv().await, Some(tick(0, 0, 29)));

    commands.send(Command::Pause).await.unwrap();
    // Second pause while already paused: silent no-op
    commands.send(Command::Pause).await.unwrap();
    commands.send(Command::Resume).await.unwrap();

    assert_eq!(events.recv().await, Some(TimerEvent::Paused));
    assert_eq!(events.recv().await, Some(TimerEvent::Resumed));

    commands.send(Command::Stop).await.unwrap();
    assert_eq!(events.recv().await, Some(TimerEvent::Stopped));
    assert_eq!(events.recv().await, None);
    task.await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn stop_cancels_scheduled_ticks_immediately() {
    let (commands, mut events, task) = spawn_controller(60);

    assert_eq!(events.recv().await, Some(tick(0, 0, 59)));

    commands.send(Command::Stop).await.unwrap();
    assert_eq!(events.recv().await, Some(TimerEvent::Stopped));

    // The controller has exited, so no tick can ever follow the stop and a
    // second stop has nowhere to go
    assert_eq!(events.recv().await, None);
    task.await.unwrap();
    assert!(commands.send(Command::Stop).await.is_err());
}

#[tokio::test(start_paused = true)]
async fn closed_command_channel_stops_cleanly() {
    let (commands, mut events, task) = spawn_controller(60);
    drop(commands);

    assert_eq!(events.recv().await, Some(TimerEvent::Stopped));
    assert_eq!(events.recv().await, None);
    task.await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn pausing_stops_tick_delivery() {
    let (commands, mut events, task) = spawn_controller(20);

    assert_eq!(events.recv().await, Some(tick(0, 0, 19)));
    commands.send(Command::Pause).await.unwrap();
    assert_eq!(events.recv().await, Some(TimerEvent::Paused));

    // Paused: even with time moving, no ticks arrive
    advance(Duration::from_secs(10)).await;
    assert!(events.try_recv().is_err());

    commands.send(Command::Stop).await.unwrap();
    assert_eq!(events.recv().await, Some(TimerEvent::Stopped));
    assert_eq!(events.recv().await, None);
    task.await.unwrap();
}
