//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are pure functions that take `&mut World` (or `&World` for read-only).
//! They do not own state; state lives in components and in the engine.

pub mod cleanup;
pub mod enemies;
pub mod projectiles;
pub mod snapshot;
pub mod spawner;
pub mod weapons;
