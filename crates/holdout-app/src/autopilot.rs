//! Demo pilot that plays the game from snapshots alone.

use holdout_core::commands::PlayerCommand;
use holdout_core::enums::{GamePhase, WeaponKind};
use holdout_core::projection::project;
use holdout_core::state::{EnemyView, GameStateSnapshot};

/// Ground distance under which the nearest enemy triggers the repulsor.
const REPULSOR_TRIGGER: f32 = 400.0;
/// Crowd check for the grenade.
const CROWD_RADIUS: f32 = 800.0;
const CROWD_SIZE: usize = 3;

#[derive(Debug, Default)]
pub struct Autopilot;

impl Autopilot {
    pub fn new() -> Self {
        Self
    }

    /// Commands to send for the next frame, given the latest snapshot.
    pub fn decide(&self, snapshot: &GameStateSnapshot) -> Vec<PlayerCommand> {
        let board = &snapshot.scoreboard;
        match board.phase {
            GamePhase::MainMenu | GamePhase::GameOver => return Vec::new(),
            GamePhase::Paused => return vec![PlayerCommand::Resume],
            GamePhase::Active => {}
        }

        let Some(target) = nearest(&snapshot.enemies) else {
            return if snapshot.pointer.fire_held {
                vec![PlayerCommand::SetFireHeld { held: false }]
            } else {
                Vec::new()
            };
        };

        let mut commands = Vec::with_capacity(3);
        let weapon = self.choose_weapon(snapshot, target);
        if weapon != board.selected_weapon {
            commands.push(PlayerCommand::SelectWeapon { weapon });
        }
        let aim = project(
            &snapshot.viewport,
            target.position.x,
            0.0,
            target.position.z,
        );
        commands.push(PlayerCommand::SetPointer {
            x: aim.x(),
            y: aim.y(),
        });
        if !snapshot.pointer.fire_held {
            commands.push(PlayerCommand::SetFireHeld { held: true });
        }
        commands
    }

    fn choose_weapon(&self, snapshot: &GameStateSnapshot, nearest: &EnemyView) -> WeaponKind {
        let crowd = snapshot
            .enemies
            .iter()
            .filter(|e| ground_range(e) < CROWD_RADIUS)
            .count();
        let wanted = if ground_range(nearest) < REPULSOR_TRIGGER {
            WeaponKind::Repulsor
        } else if crowd >= CROWD_SIZE {
            WeaponKind::Grenade
        } else {
            WeaponKind::Pistol
        };

        // Fall back to the sidearm rather than wait out a long cooldown.
        let ready = snapshot
            .cooldowns
            .iter()
            .find(|c| c.weapon == wanted)
            .map_or(true, |c| c.remaining_ticks == 0);
        if ready {
            wanted
        } else {
            WeaponKind::Pistol
        }
    }
}

fn ground_range(enemy: &EnemyView) -> f32 {
    enemy.position.ground().length()
}

fn nearest(enemies: &[EnemyView]) -> Option<&EnemyView> {
    enemies.iter().min_by(|a, b| {
        ground_range(a)
            .partial_cmp(&ground_range(b))
            .unwrap_or(std::cmp::Ordering::Equal)
    })
}
