//! State management module
//!
//! This module contains the countdown state machine and its transition rules.

pub mod timer_state;

// Re-export main types
pub use timer_state::{Status, TimerState};
