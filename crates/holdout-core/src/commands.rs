//! Player commands sent from the surrounding UI to the simulation.
//!
//! Commands are queued and applied at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// All possible player actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Session control ---
    /// Start a fresh session from the main menu (or after game over).
    StartGame,
    /// Reinitialize every store and start again.
    Restart,
    /// Return to the main menu.
    Quit,
    Pause,
    Resume,
    TogglePause,

    // --- Combat input ---
    SelectWeapon { weapon: WeaponKind },
    /// Pointer position in screen pixels.
    SetPointer { x: f32, y: f32 },
    /// Whether the fire button is held.
    SetFireHeld { held: bool },

    // --- Surface ---
    /// Drawing surface was resized (pixels).
    Resize { width: f32, height: f32 },
}
