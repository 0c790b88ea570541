//! State shared between the game loop thread and whoever drives it.

use std::sync::{Arc, Mutex};

use holdout_core::commands::PlayerCommand;
use holdout_core::state::{GameStateSnapshot, Scoreboard};

/// Commands sent from the host to the game loop thread.
#[derive(Debug, Clone, PartialEq)]
pub enum GameLoopCommand {
    /// Forwarded to the engine; applied at the next tick boundary.
    Player(PlayerCommand),
    /// Stop the loop after the current frame.
    Shutdown,
}

/// Latest frame published by the loop thread.
///
/// Cloning shares the same slot. The loop is the only writer; readers get a
/// copy of whatever was last published.
#[derive(Debug, Clone, Default)]
pub struct SharedState {
    latest: Arc<Mutex<Option<GameStateSnapshot>>>,
}

impl SharedState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn publish(&self, snapshot: GameStateSnapshot) {
        if let Ok(mut lock) = self.latest.lock() {
            *lock = Some(snapshot);
        }
    }

    pub fn latest(&self) -> Option<GameStateSnapshot> {
        self.latest.lock().ok().and_then(|lock| lock.clone())
    }

    /// Just the HUD numbers, without cloning entity lists.
    pub fn scoreboard(&self) -> Option<Scoreboard> {
        self.latest
            .lock()
            .ok()
            .and_then(|lock| lock.as_ref().map(|s| s.scoreboard))
    }
}
