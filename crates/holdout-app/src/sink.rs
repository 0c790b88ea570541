//! Frame sinks: where the loop hands each rendered frame.

use std::io::{self, Write};

use serde::Serialize;

use holdout_core::state::GameStateSnapshot;
use holdout_render::Scene;

/// Receives every frame the loop produces, on the loop thread.
pub trait FrameSink: Send {
    fn present(&mut self, snapshot: &GameStateSnapshot, scene: &Scene);
}

/// Discards frames. Used when only the shared state is of interest.
#[derive(Debug, Default)]
pub struct NullSink;

impl FrameSink for NullSink {
    fn present(&mut self, _snapshot: &GameStateSnapshot, _scene: &Scene) {}
}

#[derive(Serialize)]
struct FrameLine<'a> {
    snapshot: &'a GameStateSnapshot,
    scene: &'a Scene,
}

/// Writes one JSON object per frame, newline-delimited.
pub struct JsonLinesSink<W: Write + Send> {
    out: W,
    failed: bool,
}

impl JsonLinesSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> JsonLinesSink<W> {
    pub fn new(out: W) -> Self {
        Self { out, failed: false }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_frame(&mut self, snapshot: &GameStateSnapshot, scene: &Scene) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, &FrameLine { snapshot, scene })?;
        self.out.write_all(b"\n")?;
        self.out.flush()
    }
}

impl<W: Write + Send> FrameSink for JsonLinesSink<W> {
    fn present(&mut self, snapshot: &GameStateSnapshot, scene: &Scene) {
        if self.failed {
            return;
        }
        if let Err(e) = self.write_frame(snapshot, scene) {
            // A closed pipe should not take the game down; stop writing.
            log::warn!("frame output failed, disabling: {e}");
            self.failed = true;
        }
    }
}
