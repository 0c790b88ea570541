//! HOLDOUT host application.
//!
//! Wires the simulation and renderer into a fixed-rate loop thread, maps raw
//! input to player commands, and provides frame sinks and a demo pilot for
//! headless runs.

pub mod autopilot;
pub mod cli;
pub mod error;
pub mod game_loop;
pub mod input;
pub mod sink;
pub mod state;

pub use error::AppError;
pub use game_loop::{spawn_game_loop, GameLoopHandle};
pub use holdout_core as core;
