//! Entity spawn factories for the simulation world.
//!
//! Enemies carry `(Enemy, Position, Health, DamageFlash)`;
//! projectiles carry `(Projectile, Position, Velocity)`.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use holdout_core::components::*;
use holdout_core::constants::*;
use holdout_core::enums::ProjectileKind;
use holdout_core::types::{Position, Velocity};

/// Stats an enemy is created with.
#[derive(Debug, Clone, Copy)]
pub struct EnemyTemplate {
    pub position: Position,
    pub speed: f32,
    pub max_health: f32,
    pub wobble_phase: f32,
}

impl EnemyTemplate {
    /// Roll a fresh enemy on the spawn arc, scaled to `wave`.
    pub fn roll(rng: &mut ChaCha8Rng, wave: u32) -> Self {
        let angle = (rng.gen::<f32>() - 0.5) * 2.0 * SPAWN_HALF_ARC;
        let x = angle.sin() * ENEMY_SPAWN_Z * SPAWN_LATERAL_SPREAD;
        let wave = wave as f32;
        let speed = ENEMY_BASE_SPEED + wave * ENEMY_SPEED_PER_WAVE + rng.gen::<f32>() * ENEMY_SPEED_JITTER;
        let max_health = ENEMY_BASE_HEALTH + wave * ENEMY_HEALTH_PER_WAVE;
        let wobble_phase = rng.gen::<f32>() * std::f32::consts::TAU;
        Self {
            position: Position::new(x, 0.0, ENEMY_SPAWN_Z),
            speed,
            max_health,
            wobble_phase,
        }
    }
}

pub fn spawn_enemy(world: &mut World, id: u32, template: EnemyTemplate) -> Entity {
    world.spawn((
        Enemy {
            id,
            width: ENEMY_WIDTH,
            height: ENEMY_HEIGHT,
            speed: template.speed,
            wobble_phase: template.wobble_phase,
            color: ENEMY_COLOR,
            dead: false,
        },
        template.position,
        Health {
            current: template.max_health,
            max: template.max_health,
        },
        DamageFlash::default(),
    ))
}

pub fn spawn_projectile(
    world: &mut World,
    id: u32,
    kind: ProjectileKind,
    position: Position,
    velocity: Velocity,
    radius: f32,
) -> Entity {
    world.spawn((
        Projectile {
            id,
            kind,
            radius,
            spent: false,
        },
        position,
        velocity,
    ))
}

/// Live enemies in creation order (ascending id).
///
/// hecs iteration order shifts as entities are despawned, so anything that
/// depends on "first enemy hit" or on sequential updates goes through this.
pub fn enemies_in_order(world: &World) -> Vec<Entity> {
    let mut roster: Vec<(u32, Entity)> = world
        .query::<&Enemy>()
        .iter()
        .map(|(entity, enemy)| (enemy.id, entity))
        .collect();
    roster.sort_unstable_by_key(|(id, _)| *id);
    roster.into_iter().map(|(_, entity)| entity).collect()
}

/// Projectiles in creation order (ascending id).
pub fn projectiles_in_order(world: &World) -> Vec<Entity> {
    let mut roster: Vec<(u32, Entity)> = world
        .query::<&Projectile>()
        .iter()
        .map(|(entity, projectile)| (projectile.id, entity))
        .collect();
    roster.sort_unstable_by_key(|(id, _)| *id);
    roster.into_iter().map(|(_, entity)| entity).collect()
}
