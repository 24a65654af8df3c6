//! Hourglass - an interactive countdown timer for the terminal
//!
//! This is the main entry point: it collects a duration, spawns the
//! controller, and renders its events until the countdown ends.

use tokio::sync::mpsc;
use tracing::info;

use hourglass::{
    config::Config,
    controller::{Command, TimerController},
    display, input,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("hourglass={}", config.log_level()))
        .init();

    let mut lines = input::stdin_lines();
    let duration = match config.duration() {
        Some(duration) => duration,
        None => input::prompt_for_duration(&mut lines).await?,
    };

    println!(
        "Starting countdown for {} hours, {} minutes, and {} seconds...",
        duration.hours, duration.minutes, duration.seconds
    );
    info!("Countdown configured: {}s total", duration.total_seconds());

    let (command_tx, command_rx) = mpsc::channel(8);
    let (event_tx, mut events) = mpsc::unbounded_channel();

    let controller = TimerController::new(command_rx, event_tx);
    let controller_task = tokio::spawn(controller.run(duration.total_seconds()));

    let mut input_task = tokio::spawn(input::command_loop(lines, command_tx.clone()));

    // Translate SIGINT/SIGTERM into a Stop command so the controller winds
    // down through its normal path
    let signal_tx = command_tx.clone();
    tokio::spawn(async move {
        shutdown_signal().await;
        let _ = signal_tx.send(Command::Stop).await;
    });
    drop(command_tx);

    tokio::select! {
        // Render every event until the controller stops and closes the channel
        _ = async {
            while let Some(event) = events.recv().await {
                display::render(&event);
            }
        } => {
            input_task.abort();
        }
        // The command reader failing (e.g. stdin closed mid-countdown) is
        // fatal: propagate so the process exits non-zero
        result = &mut input_task => {
            result??;
        }
    }

    // Drain anything still queued if the input side finished first
    while let Ok(event) = events.try_recv() {
        display::render(&event);
    }

    controller_task.await?;
    info!("Countdown finished");
    Ok(())
}
