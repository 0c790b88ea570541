//! Raw host input to `PlayerCommand`s.
//!
//! Entry point for an interactive host: forward its key and pointer events
//! here and send the results through `GameLoopHandle::send_all`.
//!
//! Keys use DOM-style names ("1", "Escape"). Weapon and pause keys are
//! ignored on the main menu; pointer input is always forwarded.

use holdout_core::commands::PlayerCommand;
use holdout_core::enums::{GamePhase, WeaponKind};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Move { x: f32, y: f32 },
    Press { x: f32, y: f32 },
    Release,
    /// Pointer left the drawing surface.
    Leave,
}

pub fn map_key(key: &str, phase: GamePhase) -> Option<PlayerCommand> {
    if phase == GamePhase::MainMenu {
        return None;
    }
    let weapon = match key {
        "1" => WeaponKind::Pistol,
        "2" => WeaponKind::Grenade,
        "3" => WeaponKind::Flamethrower,
        "4" => WeaponKind::Repulsor,
        "Escape" => return Some(PlayerCommand::TogglePause),
        _ => return None,
    };
    Some(PlayerCommand::SelectWeapon { weapon })
}

pub fn map_pointer(event: PointerEvent) -> Vec<PlayerCommand> {
    match event {
        PointerEvent::Move { x, y } => vec![PlayerCommand::SetPointer { x, y }],
        PointerEvent::Press { x, y } => vec![
            PlayerCommand::SetPointer { x, y },
            PlayerCommand::SetFireHeld { held: true },
        ],
        PointerEvent::Release | PointerEvent::Leave => {
            vec![PlayerCommand::SetFireHeld { held: false }]
        }
    }
}
