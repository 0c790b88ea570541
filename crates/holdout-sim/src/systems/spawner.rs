//! Spawner system: timer-driven enemy bursts scaled by wave.

use hecs::World;
use log::debug;
use rand_chacha::ChaCha8Rng;

use holdout_core::constants::*;

use crate::world_setup::{self, EnemyTemplate};

/// Ticks since the last burst.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpawnTimer {
    pub ticks: u32,
}

/// Ticks the timer must exceed before a burst at `wave`.
pub fn spawn_interval(wave: u32) -> u32 {
    SPAWN_INTERVAL_BASE
        .saturating_sub(wave.saturating_mul(SPAWN_INTERVAL_PER_WAVE))
        .max(SPAWN_INTERVAL_MIN)
}

/// Enemies per burst at `wave`.
pub fn burst_size(wave: u32) -> u32 {
    1 + wave / WAVES_PER_EXTRA_SPAWN
}

/// Advance the timer; spawn a burst when it passes the interval. Returns the number spawned.
pub fn run(
    world: &mut World,
    timer: &mut SpawnTimer,
    rng: &mut ChaCha8Rng,
    next_entity_id: &mut u32,
    wave: u32,
) -> u32 {
    timer.ticks += 1;
    if timer.ticks <= spawn_interval(wave) {
        return 0;
    }

    let count = burst_size(wave);
    for _ in 0..count {
        let template = EnemyTemplate::roll(rng, wave);
        world_setup::spawn_enemy(world, *next_entity_id, template);
        *next_entity_id += 1;
    }
    timer.ticks = 0;
    debug!("spawned {count} enemies (wave {wave})");
    count
}
