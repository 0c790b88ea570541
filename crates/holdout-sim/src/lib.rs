//! Simulation engine for HOLDOUT.
//!
//! Owns the hecs ECS world, runs systems once per tick in a fixed order,
//! and produces GameStateSnapshots for the renderer and UI.

pub mod cooldown;
pub mod engine;
pub mod particles;
pub mod systems;
pub mod world_setup;

pub use engine::SimulationEngine;
pub use holdout_core as core;

#[cfg(test)]
mod tests;
