//! Simulation constants and tuning parameters.
//!
//! All distances are world units, all durations are ticks, and all
//! velocities are world units per tick.

use crate::types::Color;

/// Default tick rate (Hz). One tick = one rendered frame.
pub const TICK_RATE: u32 = 60;

// --- Camera / projection ---

/// Focal length of the perspective projection.
pub const FOV: f32 = 400.0;

/// Camera height above the ground plane.
pub const VIEW_HEIGHT: f32 = 150.0;

/// Screen-space offset (pixels) of the horizon below the viewport centre.
pub const HORIZON_OFFSET: f32 = 150.0;

/// Ground plane height.
pub const GROUND_Y: f32 = 0.0;

/// Aim target used when the pointer is at or above the horizon.
pub const SKY_TARGET_Z: f32 = 10_000.0;

// --- Defender ---

/// Starting and maximum defender health.
pub const PLAYER_MAX_HEALTH: i32 = 100;

/// Health lost each time an enemy reaches the line.
pub const REACH_LINE_DAMAGE: i32 = 1;

// --- Enemies ---

/// Depth at which new enemies appear.
pub const ENEMY_SPAWN_Z: f32 = 2500.0;

/// Depth below which an enemy has reached the defender.
pub const ENEMY_ATTACK_Z: f32 = 100.0;

/// Half-angle of the spawn arc (radians, +/- 72 degrees).
pub const SPAWN_HALF_ARC: f32 = std::f32::consts::PI * 0.4;

/// Lateral widening applied to the spawn arc.
pub const SPAWN_LATERAL_SPREAD: f32 = 1.5;

pub const ENEMY_WIDTH: f32 = 45.0;
pub const ENEMY_HEIGHT: f32 = 75.0;
pub const ENEMY_COLOR: Color = Color::rgb(0x84cc16);
pub const ENEMY_EYE_COLOR: Color = Color::rgb(0xffffff);
pub const ENEMY_MOUTH_COLOR: Color = Color::rgb(0x1a2e05);

/// Base speed plus per-wave increment; a uniform [0, SPEED_JITTER) is added on top.
pub const ENEMY_BASE_SPEED: f32 = 1.5;
pub const ENEMY_SPEED_PER_WAVE: f32 = 0.15;
pub const ENEMY_SPEED_JITTER: f32 = 0.5;

pub const ENEMY_BASE_HEALTH: f32 = 40.0;
pub const ENEMY_HEALTH_PER_WAVE: f32 = 10.0;

/// Neighbours closer than this push each other apart.
pub const SEPARATION_RADIUS: f32 = 60.0;

/// Push distance per neighbour per tick.
pub const SEPARATION_PUSH: f32 = 1.0;

/// Idle bob: |sin(frame * rate + phase)| * amplitude.
pub const WOBBLE_RATE: f32 = 0.1;
pub const WOBBLE_AMPLITUDE: f32 = 10.0;

/// Score awarded per kill.
pub const KILL_SCORE: u64 = 100;

/// Blood particles when an enemy reaches the line.
pub const REACH_LINE_BLOOD_COUNT: usize = 10;

/// Blood particles on a kill.
pub const KILL_BLOOD_COUNT: usize = 15;

// --- Spawner / waves ---

/// Spawn interval is max(SPAWN_INTERVAL_MIN, SPAWN_INTERVAL_BASE - wave * SPAWN_INTERVAL_PER_WAVE).
pub const SPAWN_INTERVAL_BASE: u32 = 60;
pub const SPAWN_INTERVAL_PER_WAVE: u32 = 4;
pub const SPAWN_INTERVAL_MIN: u32 = 15;

/// One extra enemy per burst every this many waves.
pub const WAVES_PER_EXTRA_SPAWN: u32 = 4;

/// Wave advances once score exceeds wave * this.
pub const SCORE_PER_WAVE: u64 = 1200;

// --- Projectiles ---

/// Downward acceleration applied to arcing projectiles each tick.
pub const GRAVITY: f32 = 0.8;

/// Projectiles below this height are discarded.
pub const PROJECTILE_DESPAWN_Y: f32 = -100.0;

pub const BULLET_MUZZLE: (f32, f32, f32) = (10.0, 30.0, 0.0);
pub const BULLET_SPEED_FACTOR: f32 = 0.15;
pub const BULLET_RADIUS: f32 = 3.0;
/// Half-extent of the bullet hit box on each ground axis.
pub const BULLET_HIT_HALF_EXTENT: f32 = 35.0;
pub const BULLET_MAX_DEPTH: f32 = 3000.0;
/// Bullets wider than this from the defender's line have left the field.
pub const BULLET_MAX_LATERAL: f32 = 4000.0;
/// Slower forward drift than this never reaches anything; the bullet is dropped.
pub const BULLET_MIN_FORWARD_SPEED: f32 = 1.0;
pub const BULLET_BLOOD_COUNT: usize = 4;
pub const BULLET_STREAK_COLOR: Color = Color::rgb(0xfbbf24);

pub const GRENADE_LAUNCH: (f32, f32, f32) = (0.0, 40.0, 0.0);
/// Ticks the lob is tuned to take to reach the target.
pub const GRENADE_FLIGHT_TICKS: f32 = 40.0;
pub const GRENADE_LAUNCH_VY: f32 = 15.0;
pub const GRENADE_RADIUS: f32 = 6.0;
pub const GRENADE_EXPLOSION_COUNT: usize = 30;
pub const GRENADE_SMOKE_COUNT: usize = 20;
pub const GRENADE_FIRE_COUNT: usize = 15;

// --- Beam ---

pub const BEAM_LENGTH: f32 = 2000.0;
/// Extra clearance added to enemy width for the beam hit test.
pub const BEAM_HIT_MARGIN: f32 = 20.0;
pub const BEAM_ORIGIN_Y: f32 = 30.0;
pub const BEAM_LIFE: f32 = 0.2;
pub const BEAM_SIZE: f32 = 5.0;
pub const BEAM_FIRE_COUNT: usize = 5;
/// Fire particles appear this far above the hit enemy's position.
pub const BEAM_FIRE_HEIGHT: f32 = 40.0;

// --- Repulsor ---

/// Lateral jitter range (total width) applied to repulsed enemies.
pub const REPULSOR_JITTER: f32 = 100.0;
pub const SHOCKWAVE_ORIGIN: (f32, f32, f32) = (0.0, 20.0, 200.0);
pub const SHOCKWAVE_LIFE: f32 = 0.5;
pub const SHOCKWAVE_SIZE: f32 = 10.0;

// --- Particles ---

pub const PARTICLE_SPEED: f32 = 5.0;
pub const EXPLOSION_PARTICLE_SPEED: f32 = 15.0;
pub const FIRE_LIFT: f32 = 3.0;
pub const PARTICLE_FADE: f32 = 0.02;
pub const BEAM_FADE: f32 = 0.1;
pub const SHOCKWAVE_FADE: f32 = 0.05;
pub const SHOCKWAVE_GROWTH: f32 = 30.0;
pub const FIRE_DRIFT_Z: f32 = 10.0;
/// Total width of the per-tick lateral jitter on fire particles.
pub const FIRE_JITTER_X: f32 = 8.0;
pub const FIRE_GROWTH: f32 = 0.5;

pub const FIRE_COLOR: Color = Color::rgb(0xf97316);
pub const BLOOD_COLOR: Color = Color::rgb(0x10b981);

// --- Backdrop palette ---

pub const SKY_TOP: Color = Color::rgb(0x020617);
pub const SKY_BOTTOM: Color = Color::rgb(0x1e1b4b);
pub const GROUND_FAR: Color = Color::rgb(0x000000);
pub const ROAD: Color = Color::rgb(0x292524);
pub const ROAD_MARKING: Color = Color::rgb(0xfbbf24);
pub const RUIN_DARK: Color = Color::rgb(0x1c1917);
pub const BUILDING_BASE: Color = Color::rgb(0x0f172a);
pub const BUILDING_ACCENT: Color = Color::rgb(0x1e293b);
pub const WINDOW_LIT: Color = Color::rgb(0xfef3c7);
