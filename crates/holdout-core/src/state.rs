//! Game state snapshot: the complete visible state handed to the renderer
//! and the surrounding UI after each tick.

use serde::{Deserialize, Serialize};

use crate::components::Particle;
use crate::enums::*;
use crate::events::GameEvent;
use crate::projection::Viewport;
use crate::types::{Color, Position, SimTime, Velocity};

/// Complete game state produced after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    /// Frame counter; drives idle animation and advances every tick, paused or not.
    pub frame: u64,
    /// Drawing surface the pointer coordinates refer to.
    pub viewport: Viewport,
    pub scoreboard: Scoreboard,
    /// One entry per weapon, in `WeaponKind::ALL` order.
    pub cooldowns: Vec<CooldownView>,
    pub pointer: PointerView,
    pub enemies: Vec<EnemyView>,
    pub projectiles: Vec<ProjectileView>,
    pub particles: Vec<Particle>,
    pub events: Vec<GameEvent>,
}

/// Numbers shared with the surrounding UI. Only the simulation writes them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scoreboard {
    /// Monotonically non-decreasing within a session.
    pub score: u64,
    /// Not clamped internally; may dip below zero on the final hit.
    pub health: i32,
    pub max_health: i32,
    /// Always >= 1, never decreases within a session.
    pub wave: u32,
    pub selected_weapon: WeaponKind,
    pub phase: GamePhase,
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self::new(crate::constants::PLAYER_MAX_HEALTH)
    }
}

impl Scoreboard {
    pub fn new(max_health: i32) -> Self {
        Self {
            score: 0,
            health: max_health,
            max_health,
            wave: 1,
            selected_weapon: WeaponKind::default(),
            phase: GamePhase::default(),
        }
    }

    /// Health as displayed: floored at zero.
    pub fn display_health(&self) -> i32 {
        self.health.max(0)
    }

    pub fn is_running(&self) -> bool {
        matches!(self.phase, GamePhase::Active | GamePhase::Paused)
    }

    pub fn is_paused(&self) -> bool {
        self.phase == GamePhase::Paused
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}

/// Per-weapon cooldown state for the cooldown-ring display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CooldownView {
    pub weapon: WeaponKind,
    pub remaining_ticks: u32,
    pub total_ticks: u32,
    /// remaining / total in [0, 1]; 0 means ready.
    pub ratio: f32,
}

/// Last sampled pointer state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PointerView {
    pub x: f32,
    pub y: f32,
    pub fire_held: bool,
}

/// A live enemy as seen by the renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: u32,
    pub position: Position,
    pub width: f32,
    pub height: f32,
    pub health: f32,
    pub max_health: f32,
    pub flash_ticks: u32,
    pub color: Color,
}

/// A projectile in flight as seen by the renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: u32,
    pub kind: ProjectileKind,
    pub position: Position,
    pub velocity: Velocity,
    pub radius: f32,
}
