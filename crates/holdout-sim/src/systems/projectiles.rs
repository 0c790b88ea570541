//! Projectile system: integration, gravity, detonation and bullet hits.

use hecs::World;

use holdout_core::components::{DamageFlash, Enemy, Health, Projectile};
use holdout_core::config::WeaponTable;
use holdout_core::constants::*;
use holdout_core::enums::{ParticleKind, ProjectileKind};
use holdout_core::types::{Position, Velocity};

use crate::particles::ParticleSystem;
use crate::systems::weapons;
use crate::world_setup;

/// Move every projectile one tick and resolve what it hits.
///
/// Spent projectiles are flagged; cleanup removes them along with anything
/// that fell below the despawn height.
pub fn run(world: &mut World, weapons_table: &WeaponTable, particles: &mut ParticleSystem) {
    for entity in world_setup::projectiles_in_order(world) {
        let Ok((projectile, pos, vel)) =
            world.query_one_mut::<(&Projectile, &mut Position, &mut Velocity)>(entity)
        else {
            continue;
        };
        pos.integrate(vel);
        let kind = projectile.kind;
        let here = *pos;

        let spent = match kind {
            ProjectileKind::Arcing => {
                vel.y -= GRAVITY;
                if here.y <= GROUND_Y {
                    weapons::detonate_charge(
                        world,
                        here.x,
                        here.z,
                        &weapons_table.grenade,
                        particles,
                    );
                    true
                } else {
                    false
                }
            }
            ProjectileKind::Ballistic => {
                let forward = vel.z;
                bullet_hit(world, here, weapons_table, particles)
                    || bullet_out_of_bounds(here, forward)
            }
        };

        if spent {
            if let Ok(mut projectile) = world.get::<&mut Projectile>(entity) {
                projectile.spent = true;
            }
        }
    }
}

/// Behind the defender, past the far end, off to the side, or stalled.
pub fn bullet_out_of_bounds(at: Position, forward_speed: f32) -> bool {
    at.z <= 0.0
        || at.z > BULLET_MAX_DEPTH
        || at.x.abs() > BULLET_MAX_LATERAL
        || forward_speed < BULLET_MIN_FORWARD_SPEED
}

/// Damage the first enemy (in creation order) whose ground box contains the bullet.
fn bullet_hit(
    world: &mut World,
    at: Position,
    weapons_table: &WeaponTable,
    particles: &mut ParticleSystem,
) -> bool {
    let stats = &weapons_table.pistol;
    for entity in world_setup::enemies_in_order(world) {
        let Ok((_enemy, pos, health, flash)) =
            world.query_one_mut::<(&Enemy, &Position, &mut Health, &mut DamageFlash)>(entity)
        else {
            continue;
        };
        if (at.x - pos.x).abs() < BULLET_HIT_HALF_EXTENT
            && (at.z - pos.z).abs() < BULLET_HIT_HALF_EXTENT
        {
            weapons::apply_hit(health, flash, stats.damage, stats.flash_ticks);
            particles.burst(ParticleKind::Blood, at, BULLET_BLOOD_COUNT);
            return true;
        }
    }
    false
}
