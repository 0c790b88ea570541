//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! runs all systems, and produces `GameStateSnapshot`s. Completely headless
//! (no drawing surface), enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use log::{debug, info, warn};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use holdout_core::commands::PlayerCommand;
use holdout_core::config::GameConfig;
use holdout_core::constants::SCORE_PER_WAVE;
use holdout_core::enums::GamePhase;
use holdout_core::events::GameEvent;
use holdout_core::projection::{self, Viewport};
use holdout_core::state::{GameStateSnapshot, PointerView, Scoreboard};
use holdout_core::types::SimTime;

use crate::cooldown::CooldownTable;
use crate::particles::ParticleSystem;
use crate::systems;
use crate::systems::snapshot::SnapshotInputs;
use crate::systems::spawner::SpawnTimer;

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    config: GameConfig,
    viewport: Viewport,
    time: SimTime,
    /// Advances every tick in every phase; drives the idle bob and road scroll.
    frame: u64,
    scoreboard: Scoreboard,
    rng: ChaCha8Rng,
    particles: ParticleSystem,
    cooldowns: CooldownTable,
    spawn_timer: SpawnTimer,
    pointer: PointerView,
    next_entity_id: u32,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,
}

impl SimulationEngine {
    /// Create a new engine waiting at the main menu.
    pub fn new(config: GameConfig) -> Self {
        Self {
            world: World::new(),
            viewport: config.viewport,
            time: SimTime::default(),
            frame: 0,
            scoreboard: Scoreboard::new(config.max_health),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            particles: ParticleSystem::new(config.seed),
            cooldowns: CooldownTable::default(),
            spawn_timer: SpawnTimer::default(),
            pointer: PointerView::default(),
            next_entity_id: 0,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            config,
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if self.scoreboard.phase == GamePhase::Active {
            self.run_systems();
            self.time.advance(self.config.tick_rate);
        }

        let snapshot = self.snapshot();
        self.frame += 1;
        snapshot
    }

    pub fn phase(&self) -> GamePhase {
        self.scoreboard.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn cooldowns(&self) -> &CooldownTable {
        &self.cooldowns
    }

    pub fn particles(&self) -> &ParticleSystem {
        &self.particles
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        let phase = self.scoreboard.phase;
        match command {
            PlayerCommand::StartGame => {
                if matches!(phase, GamePhase::MainMenu | GamePhase::GameOver) {
                    self.reset_session();
                    self.scoreboard.phase = GamePhase::Active;
                    info!("session started (seed {})", self.config.seed);
                } else {
                    warn!("StartGame ignored in {phase:?}");
                }
            }
            PlayerCommand::Restart => {
                if phase == GamePhase::MainMenu {
                    warn!("Restart ignored before a session has started");
                } else {
                    self.reset_session();
                    self.scoreboard.phase = GamePhase::Active;
                    info!("session restarted");
                }
            }
            PlayerCommand::Quit => {
                self.reset_session();
                info!("returned to main menu");
            }
            PlayerCommand::Pause => {
                if phase == GamePhase::Active {
                    self.scoreboard.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if phase == GamePhase::Paused {
                    self.scoreboard.phase = GamePhase::Active;
                }
            }
            PlayerCommand::TogglePause => match phase {
                GamePhase::Active => self.scoreboard.phase = GamePhase::Paused,
                GamePhase::Paused => self.scoreboard.phase = GamePhase::Active,
                _ => {}
            },
            PlayerCommand::SelectWeapon { weapon } => {
                self.scoreboard.selected_weapon = weapon;
            }
            PlayerCommand::SetPointer { x, y } => {
                self.pointer.x = x;
                self.pointer.y = y;
            }
            PlayerCommand::SetFireHeld { held } => {
                self.pointer.fire_held = held;
            }
            PlayerCommand::Resize { width, height } => {
                if width > 0.0 && height > 0.0 {
                    self.viewport = Viewport::new(width, height);
                } else {
                    warn!("ignoring degenerate resize {width}x{height}");
                }
            }
        }
    }

    /// Clear every store back to the initial configuration. Leaves the phase at MainMenu.
    fn reset_session(&mut self) {
        self.world.clear();
        self.particles.clear();
        self.cooldowns.reset();
        self.spawn_timer = SpawnTimer::default();
        self.scoreboard = Scoreboard::new(self.config.max_health);
        self.time = SimTime::default();
        self.frame = 0;
        self.next_entity_id = 0;
        self.events.clear();
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Weapon input: the selected weapon fires if held and ready
        self.fire_selected_weapon();
        // 2. Cooldowns
        self.cooldowns.tick();
        // 3. Spawner
        systems::spawner::run(
            &mut self.world,
            &mut self.spawn_timer,
            &mut self.rng,
            &mut self.next_entity_id,
            self.scoreboard.wave,
        );
        // 4. Enemies (steer, separate, bob, flash, contact, death)
        systems::enemies::run(
            &mut self.world,
            self.frame,
            &mut self.scoreboard,
            &mut self.particles,
            &mut self.events,
        );
        // 5. Remove enemies flagged dead
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
        // 6. Projectiles (integration, detonation, bullet hits)
        systems::projectiles::run(&mut self.world, &self.config.weapons, &mut self.particles);
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
        // 7. Particles
        self.particles.update();
        // 8. Wave and game over
        self.check_progress();
    }

    fn fire_selected_weapon(&mut self) {
        let weapon = self.scoreboard.selected_weapon;
        if !self.pointer.fire_held || !self.cooldowns.is_ready(weapon) {
            return;
        }
        let target = projection::unproject_ground(&self.viewport, self.pointer.x, self.pointer.y);
        systems::weapons::fire(
            &mut self.world,
            weapon,
            &self.config.weapons,
            target,
            &mut self.rng,
            &mut self.particles,
            &mut self.next_entity_id,
        );
        self.cooldowns
            .trigger(weapon, self.config.weapons.get(weapon).cooldown_ticks);
        self.events.push(GameEvent::WeaponFired { weapon });
        debug!(
            "{weapon:?} fired at ({:.0}, {:.0}) on tick {}",
            target.x, target.z, self.time.tick
        );
    }

    fn check_progress(&mut self) {
        let board = &mut self.scoreboard;
        if board.score > u64::from(board.wave) * SCORE_PER_WAVE {
            board.wave += 1;
            self.events.push(GameEvent::WaveAdvanced { wave: board.wave });
            info!("wave {} (score {})", board.wave, board.score);
        }

        if board.health <= 0 && board.phase != GamePhase::GameOver {
            board.phase = GamePhase::GameOver;
            self.events.push(GameEvent::GameOver {
                score: board.score,
                wave: board.wave,
            });
            info!("game over: score {} at wave {}", board.score, board.wave);
        }
    }

    fn snapshot(&mut self) -> GameStateSnapshot {
        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            SnapshotInputs {
                time: self.time,
                frame: self.frame,
                viewport: self.viewport,
                scoreboard: self.scoreboard,
                cooldowns: self.cooldowns.views(&self.config.weapons),
                pointer: self.pointer,
                particles: self.particles.particles(),
                events,
            },
        )
    }
}

// --- Test hooks ---

#[cfg(test)]
impl SimulationEngine {
    /// Place an enemy directly; returns its id.
    pub fn spawn_test_enemy(&mut self, x: f32, z: f32, speed: f32, max_health: f32) -> u32 {
        let id = self.next_entity_id;
        self.next_entity_id += 1;
        crate::world_setup::spawn_enemy(
            &mut self.world,
            id,
            crate::world_setup::EnemyTemplate {
                position: holdout_core::types::Position::new(x, 0.0, z),
                speed,
                max_health,
                wobble_phase: 0.0,
            },
        );
        id
    }

    pub fn set_score(&mut self, score: u64) {
        self.scoreboard.score = score;
    }

    pub fn set_health(&mut self, health: i32) {
        self.scoreboard.health = health;
    }

    /// Restart the spawn countdown so no burst lands for a full interval.
    pub fn hold_spawner(&mut self) {
        self.spawn_timer = SpawnTimer::default();
    }

    pub fn selected_weapon(&self) -> holdout_core::enums::WeaponKind {
        self.scoreboard.selected_weapon
    }
}
