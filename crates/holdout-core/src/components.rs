//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::{Color, Position, Velocity};

/// An approaching enemy. Always paired with `Position`, `Health` and `DamageFlash`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    /// Session-unique id.
    pub id: u32,
    pub width: f32,
    pub height: f32,
    /// Ground speed in world units per tick (> 0).
    pub speed: f32,
    /// Phase offset of the idle bob.
    pub wobble_phase: f32,
    pub color: Color,
    /// Set during a step; the entity is despawned at the end of that step.
    pub dead: bool,
}

/// Hit points. `current` may go below zero before the death check consumes it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    pub current: f32,
    pub max: f32,
}

/// Ticks remaining of the white hit flash.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct DamageFlash {
    pub remaining_ticks: u32,
}

/// A projectile in flight. Always paired with `Position` and `Velocity`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    pub kind: ProjectileKind,
    /// Collision/draw radius.
    pub radius: f32,
    /// Set when the projectile has hit something; despawned at the end of the pass.
    pub spent: bool,
}

/// Short-lived visual effect. Stored outside the ECS world; never read by gameplay.
///
/// For `ParticleKind::Beam` the velocity holds the beam endpoint on the ground
/// plane rather than a motion vector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub id: u32,
    pub kind: ParticleKind,
    pub position: Position,
    pub velocity: Velocity,
    /// Remaining life, starts at `max_life` and removed once <= 0.
    pub life: f32,
    pub max_life: f32,
    pub size: f32,
    pub color: Color,
}
