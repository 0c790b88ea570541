//! Game loop thread: runs the engine at the configured tick rate, renders
//! each frame and hands it to a `FrameSink`.
//!
//! The engine and renderer are created inside the thread, which owns them
//! for its whole life. Commands arrive via an `mpsc` channel and are applied
//! at the start of the next frame.

use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use log::{debug, info};

use holdout_core::commands::PlayerCommand;
use holdout_core::config::GameConfig;
use holdout_render::{Renderer, Scene};
use holdout_sim::SimulationEngine;

use crate::error::AppError;
use crate::sink::FrameSink;
use crate::state::{GameLoopCommand, SharedState};

/// Frames the loop may fall behind before it gives up catching up.
const MAX_LAG_FRAMES: u32 = 2;

pub fn tick_duration(tick_rate: u32) -> Duration {
    Duration::from_nanos(1_000_000_000 / u64::from(tick_rate.max(1)))
}

/// Owner of the loop thread. Dropping it stops the loop and joins.
pub struct GameLoopHandle {
    tx: mpsc::Sender<GameLoopCommand>,
    thread: Option<JoinHandle<()>>,
}

impl GameLoopHandle {
    pub fn send(&self, command: PlayerCommand) -> Result<(), AppError> {
        self.tx
            .send(GameLoopCommand::Player(command))
            .map_err(|_| AppError::LoopStopped)
    }

    pub fn send_all(&self, commands: impl IntoIterator<Item = PlayerCommand>) -> Result<(), AppError> {
        commands.into_iter().try_for_each(|c| self.send(c))
    }

    pub fn is_running(&self) -> bool {
        self.thread.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Stop the loop and wait for the thread. Idempotent.
    pub fn shutdown(&mut self) {
        let _ = self.tx.send(GameLoopCommand::Shutdown);
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                log::error!("game loop thread panicked");
            }
        }
    }
}

impl Drop for GameLoopHandle {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Spawn the loop thread. The config is assumed validated.
pub fn spawn_game_loop(
    config: GameConfig,
    sink: Box<dyn FrameSink>,
    shared: SharedState,
) -> Result<GameLoopHandle, AppError> {
    let (tx, rx) = mpsc::channel::<GameLoopCommand>();

    let thread = std::thread::Builder::new()
        .name("holdout-game-loop".into())
        .spawn(move || run_game_loop(config, sink, rx, &shared))?;

    Ok(GameLoopHandle {
        tx,
        thread: Some(thread),
    })
}

/// Runs until a Shutdown command or channel disconnect.
fn run_game_loop(
    config: GameConfig,
    mut sink: Box<dyn FrameSink>,
    rx: mpsc::Receiver<GameLoopCommand>,
    shared: &SharedState,
) {
    let frame_time = tick_duration(config.tick_rate);
    let renderer = Renderer::new(&config);
    let mut engine = SimulationEngine::new(config);
    let mut scene = Scene::default();
    let mut next_frame = Instant::now();
    info!("game loop started");

    loop {
        loop {
            match rx.try_recv() {
                Ok(GameLoopCommand::Player(cmd)) => engine.queue_command(cmd),
                Ok(GameLoopCommand::Shutdown) | Err(mpsc::TryRecvError::Disconnected) => {
                    info!("game loop stopped at frame {}", engine.frame());
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
            }
        }

        let snapshot = engine.tick();
        renderer.render_into(&snapshot, &mut scene);
        sink.present(&snapshot, &scene);
        shared.publish(snapshot);

        next_frame += frame_time;
        let now = Instant::now();
        if next_frame > now {
            std::thread::sleep(next_frame - now);
        } else if now - next_frame > frame_time * MAX_LAG_FRAMES {
            debug!("game loop fell behind, resetting deadline");
            next_frame = now;
        }
    }
}
