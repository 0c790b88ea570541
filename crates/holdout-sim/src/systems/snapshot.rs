//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! Read-only: never modifies the world.

use hecs::World;

use holdout_core::components::*;
use holdout_core::events::GameEvent;
use holdout_core::projection::Viewport;
use holdout_core::state::*;
use holdout_core::types::{Position, SimTime, Velocity};

/// Everything outside the world that goes into a snapshot.
pub struct SnapshotInputs<'a> {
    pub time: SimTime,
    pub frame: u64,
    pub viewport: Viewport,
    pub scoreboard: Scoreboard,
    pub cooldowns: Vec<CooldownView>,
    pub pointer: PointerView,
    pub particles: &'a [Particle],
    pub events: Vec<GameEvent>,
}

pub fn build_snapshot(world: &World, inputs: SnapshotInputs<'_>) -> GameStateSnapshot {
    GameStateSnapshot {
        time: inputs.time,
        frame: inputs.frame,
        viewport: inputs.viewport,
        scoreboard: inputs.scoreboard,
        cooldowns: inputs.cooldowns,
        pointer: inputs.pointer,
        enemies: build_enemies(world),
        projectiles: build_projectiles(world),
        particles: inputs.particles.to_vec(),
        events: inputs.events,
    }
}

fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = world
        .query::<(&Enemy, &Position, &Health, &DamageFlash)>()
        .iter()
        .map(|(_, (enemy, pos, health, flash))| EnemyView {
            id: enemy.id,
            position: *pos,
            width: enemy.width,
            height: enemy.height,
            health: health.current,
            max_health: health.max,
            flash_ticks: flash.remaining_ticks,
            color: enemy.color,
        })
        .collect();
    enemies.sort_by_key(|e| e.id);
    enemies
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    let mut projectiles: Vec<ProjectileView> = world
        .query::<(&Projectile, &Position, &Velocity)>()
        .iter()
        .map(|(_, (projectile, pos, vel))| ProjectileView {
            id: projectile.id,
            kind: projectile.kind,
            position: *pos,
            velocity: *vel,
            radius: projectile.radius,
        })
        .collect();
    projectiles.sort_by_key(|p| p.id);
    projectiles
}
