//! Enemy system: steering, separation, idle bob, flash decay, reaching the
//! defender and death.
//!
//! Enemies are updated one at a time in creation order, and each one sees the
//! positions its predecessors already moved to this tick.

use glam::Vec2;
use hecs::World;
use log::debug;

use holdout_core::components::{DamageFlash, Enemy, Health};
use holdout_core::constants::*;
use holdout_core::enums::ParticleKind;
use holdout_core::events::GameEvent;
use holdout_core::state::Scoreboard;
use holdout_core::types::Position;

use crate::particles::ParticleSystem;
use crate::world_setup;

/// Offset of the blood burst above an enemy's feet.
const BLOOD_HEIGHT: f32 = 30.0;

/// Unit step toward the defender at the origin, scaled by `speed`.
pub fn steer(pos: Vec2, speed: f32) -> Vec2 {
    let to_origin = -pos;
    let dist = to_origin.length();
    if dist > 0.0 {
        to_origin / dist * speed
    } else {
        Vec2::ZERO
    }
}

/// Push away from a single neighbour. Coincident enemies exert no push.
pub fn separation(pos: Vec2, other: Vec2) -> Vec2 {
    let away = pos - other;
    let dist = away.length();
    if dist > 0.0 && dist < SEPARATION_RADIUS {
        away / dist * SEPARATION_PUSH
    } else {
        Vec2::ZERO
    }
}

/// Height of the idle bob at `frame`.
pub fn wobble(frame: u64, phase: f32) -> f32 {
    ((frame as f32) * WOBBLE_RATE + phase).sin().abs() * WOBBLE_AMPLITUDE
}

/// Move every live enemy one tick and settle contact and death.
///
/// Enemies that die here are only flagged; cleanup removes them.
pub fn run(
    world: &mut World,
    frame: u64,
    scoreboard: &mut Scoreboard,
    particles: &mut ParticleSystem,
    events: &mut Vec<GameEvent>,
) {
    let order = world_setup::enemies_in_order(world);
    // Ground positions of the whole roster, updated in place as the pass goes.
    let mut ground: Vec<Vec2> = order
        .iter()
        .map(|&e| world.get::<&Position>(e).map(|p| p.ground()).unwrap_or_default())
        .collect();

    for (i, &entity) in order.iter().enumerate() {
        let Ok((enemy, pos, health, flash)) = world
            .query_one_mut::<(&mut Enemy, &mut Position, &Health, &mut DamageFlash)>(entity)
        else {
            continue;
        };
        if enemy.dead {
            continue;
        }

        let mut here = ground[i] + steer(ground[i], enemy.speed);
        for (j, &other) in ground.iter().enumerate() {
            if j != i {
                here += separation(here, other);
            }
        }
        ground[i] = here;
        pos.x = here.x;
        pos.z = here.y;
        pos.y = wobble(frame, enemy.wobble_phase);

        flash.remaining_ticks = flash.remaining_ticks.saturating_sub(1);

        let blood_at = Position::new(pos.x, pos.y + BLOOD_HEIGHT, pos.z);

        if pos.z < ENEMY_ATTACK_Z {
            enemy.dead = true;
            scoreboard.health -= REACH_LINE_DAMAGE;
            particles.burst(ParticleKind::Blood, blood_at, REACH_LINE_BLOOD_COUNT);
            events.push(GameEvent::DefenderHit {
                health: scoreboard.health,
            });
            debug!("enemy {} reached the line, health {}", enemy.id, scoreboard.health);
        }

        if health.current <= 0.0 {
            enemy.dead = true;
            scoreboard.score += KILL_SCORE;
            particles.burst(ParticleKind::Blood, blood_at, KILL_BLOOD_COUNT);
            events.push(GameEvent::EnemyKilled {
                enemy_id: enemy.id,
                score: scoreboard.score,
            });
        }
    }
}
