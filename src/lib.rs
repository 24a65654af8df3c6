//! Hourglass - an interactive countdown timer for the terminal
//!
//! This library exposes the countdown state machine and the controller that
//! drives it, so the core stays testable without a real terminal attached.
//! The binary wires the controller to stdin prompts and stdout rendering.

pub mod config;
pub mod controller;
pub mod display;
pub mod input;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use controller::{Command, TimerController, TimerEvent};
pub use state::{Status, TimerState};
pub use utils::signals::shutdown_signal;
