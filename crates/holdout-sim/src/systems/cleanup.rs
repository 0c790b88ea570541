//! Cleanup system: despawns dead enemies and spent or fallen projectiles.

use hecs::{Entity, World};

use holdout_core::components::{Enemy, Projectile};
use holdout_core::constants::PROJECTILE_DESPAWN_Y;
use holdout_core::types::Position;

/// Remove every flagged entity. Uses a caller-owned buffer to avoid per-tick allocation.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, enemy) in world.query_mut::<&Enemy>() {
        if enemy.dead {
            despawn_buffer.push(entity);
        }
    }

    for (entity, (projectile, pos)) in world.query_mut::<(&Projectile, &Position)>() {
        if projectile.spent || pos.y <= PROJECTILE_DESPAWN_Y {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
