//! Weapon system: discharges the selected weapon and resolves its effects.
//!
//! The sidearm and lobbed charge only create projectiles here; their hits are
//! resolved by the projectile system. The beam and repulsor act instantly.

use glam::Vec2;
use hecs::World;
use log::debug;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use holdout_core::components::{DamageFlash, Enemy, Health};
use holdout_core::config::{WeaponStats, WeaponTable};
use holdout_core::constants::*;
use holdout_core::enums::{ParticleKind, ProjectileKind, WeaponKind};
use holdout_core::projection::GroundTarget;
use holdout_core::types::{Position, Velocity};

use crate::particles::{ParticleOverrides, ParticleSystem};
use crate::world_setup;

/// Subtract damage and restart the hit flash. The flash is reset, never stacked.
pub fn apply_hit(health: &mut Health, flash: &mut DamageFlash, damage: f32, flash_ticks: u32) {
    health.current -= damage;
    flash.remaining_ticks = flash_ticks;
}

/// Discharge `weapon` toward `target`.
pub fn fire(
    world: &mut World,
    weapon: WeaponKind,
    weapons: &WeaponTable,
    target: GroundTarget,
    rng: &mut ChaCha8Rng,
    particles: &mut ParticleSystem,
    next_entity_id: &mut u32,
) {
    let stats = weapons.get(weapon);
    match weapon {
        WeaponKind::Pistol => fire_sidearm(world, target, next_entity_id),
        WeaponKind::Grenade => lob_charge(world, target, next_entity_id),
        WeaponKind::Flamethrower => {
            let hits = fire_beam(world, target, stats, particles);
            debug!("beam hit {hits} enemies");
        }
        WeaponKind::Repulsor => {
            let pushed = fire_repulsor(world, stats, rng, particles);
            debug!("repulsor pushed {pushed} enemies");
        }
    }
}

fn fire_sidearm(world: &mut World, target: GroundTarget, next_entity_id: &mut u32) {
    let (mx, my, mz) = BULLET_MUZZLE;
    let velocity = Velocity::new(
        target.x * BULLET_SPEED_FACTOR,
        0.0,
        target.z * BULLET_SPEED_FACTOR,
    );
    world_setup::spawn_projectile(
        world,
        *next_entity_id,
        ProjectileKind::Ballistic,
        Position::new(mx, my, mz),
        velocity,
        BULLET_RADIUS,
    );
    *next_entity_id += 1;
}

/// Launch velocity for a fixed-flight-time lob toward `target`.
pub fn lob_velocity(target: GroundTarget) -> Velocity {
    Velocity::new(
        target.x / GRENADE_FLIGHT_TICKS,
        GRENADE_LAUNCH_VY,
        target.z / GRENADE_FLIGHT_TICKS,
    )
}

fn lob_charge(world: &mut World, target: GroundTarget, next_entity_id: &mut u32) {
    let (lx, ly, lz) = GRENADE_LAUNCH;
    world_setup::spawn_projectile(
        world,
        *next_entity_id,
        ProjectileKind::Arcing,
        Position::new(lx, ly, lz),
        lob_velocity(target),
        GRENADE_RADIUS,
    );
    *next_entity_id += 1;
}

/// Ground-plane endpoint of a beam aimed at `target`.
pub fn beam_endpoint(target: GroundTarget) -> Vec2 {
    let angle = target.x.atan2(target.z);
    Vec2::new(angle.sin() * BEAM_LENGTH, angle.cos() * BEAM_LENGTH)
}

/// Distance from `point` to the segment from the defender to `end` (ground plane).
pub fn distance_to_beam(point: Vec2, end: Vec2) -> f32 {
    let length_sq = end.length_squared();
    if length_sq <= f32::EPSILON {
        return point.length();
    }
    let t = (point.dot(end) / length_sq).clamp(0.0, 1.0);
    point.distance(end * t)
}

/// Line damage against every enemy near the beam. No falloff: each hit takes full damage.
fn fire_beam(
    world: &mut World,
    target: GroundTarget,
    stats: &WeaponStats,
    particles: &mut ParticleSystem,
) -> usize {
    let end = beam_endpoint(target);
    particles.burst_with(
        ParticleKind::Beam,
        Position::new(0.0, BEAM_ORIGIN_Y, 0.0),
        1,
        ParticleOverrides {
            velocity: Some(Velocity::new(end.x, 0.0, end.y)),
            life: Some(BEAM_LIFE),
            size: Some(BEAM_SIZE),
            color: Some(stats.color),
        },
    );

    let mut hits = 0;
    for entity in world_setup::enemies_in_order(world) {
        let Ok((enemy, pos, health, flash)) =
            world.query_one_mut::<(&Enemy, &Position, &mut Health, &mut DamageFlash)>(entity)
        else {
            continue;
        };
        if distance_to_beam(pos.ground(), end) < enemy.width + BEAM_HIT_MARGIN {
            apply_hit(health, flash, stats.damage, stats.flash_ticks);
            let burn_at = Position::new(pos.x, pos.y + BEAM_FIRE_HEIGHT, pos.z);
            particles.burst(ParticleKind::Fire, burn_at, BEAM_FIRE_COUNT);
            hits += 1;
        }
    }
    hits
}

/// Push every enemy back with a little lateral scatter. Deals no damage.
fn fire_repulsor(
    world: &mut World,
    stats: &WeaponStats,
    rng: &mut ChaCha8Rng,
    particles: &mut ParticleSystem,
) -> usize {
    let roster = world_setup::enemies_in_order(world);
    for &entity in &roster {
        if let Ok((pos, flash)) = world.query_one_mut::<(&mut Position, &mut DamageFlash)>(entity) {
            pos.z += stats.pushback;
            pos.x += (rng.gen::<f32>() - 0.5) * REPULSOR_JITTER;
            flash.remaining_ticks = stats.flash_ticks;
        }
    }

    let (sx, sy, sz) = SHOCKWAVE_ORIGIN;
    particles.burst_with(
        ParticleKind::Shockwave,
        Position::new(sx, sy, sz),
        1,
        ParticleOverrides {
            life: Some(SHOCKWAVE_LIFE),
            size: Some(SHOCKWAVE_SIZE),
            color: Some(stats.color),
            ..Default::default()
        },
    );
    roster.len()
}

/// Ground detonation of a lobbed charge at `(x, z)`.
///
/// Every enemy strictly inside the blast radius takes full damage and is
/// knocked away from the defender. Returns the number of enemies caught.
pub fn detonate_charge(
    world: &mut World,
    x: f32,
    z: f32,
    stats: &WeaponStats,
    particles: &mut ParticleSystem,
) -> usize {
    let at = Position::new(x, GROUND_Y, z);
    particles.burst(ParticleKind::Explosion, at, GRENADE_EXPLOSION_COUNT);
    particles.burst(ParticleKind::Smoke, at, GRENADE_SMOKE_COUNT);
    particles.burst(ParticleKind::Fire, at, GRENADE_FIRE_COUNT);

    let mut caught = 0;
    for entity in world_setup::enemies_in_order(world) {
        let Ok((pos, health, flash)) =
            world.query_one_mut::<(&mut Position, &mut Health, &mut DamageFlash)>(entity)
        else {
            continue;
        };
        if pos.ground_distance_to(&at) < stats.radius {
            apply_hit(health, flash, stats.damage, stats.flash_ticks);
            pos.z += stats.pushback;
            caught += 1;
        }
    }
    debug!("charge detonated at ({x:.0}, {z:.0}), caught {caught}");
    caught
}
