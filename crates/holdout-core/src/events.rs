//! Events emitted by the simulation for UI feedback.
//!
//! Nothing in the simulation reads these back.

use serde::{Deserialize, Serialize};

use crate::enums::WeaponKind;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A weapon discharged this tick (its cooldown was reset).
    WeaponFired { weapon: WeaponKind },
    /// An enemy's health crossed zero; `score` is the new total.
    EnemyKilled { enemy_id: u32, score: u64 },
    /// An enemy reached the defender; `health` is the remaining value.
    DefenderHit { health: i32 },
    WaveAdvanced { wave: u32 },
    GameOver { score: u64, wave: u32 },
}
