//! Backend-agnostic 2D draw list.
//!
//! A `Scene` is an ordered list of primitives in screen pixels. Whatever
//! presents the frame replays it front to back; later commands paint over
//! earlier ones.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use holdout_core::types::Color;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op")]
pub enum DrawCommand {
    FillRect {
        origin: Vec2,
        size: Vec2,
        color: Color,
    },
    /// Rectangle filled with a vertical gradient running from `top` at
    /// `from_y` to `bottom` at `to_y`, clamped outside that span.
    GradientRect {
        origin: Vec2,
        size: Vec2,
        from_y: f32,
        to_y: f32,
        top: Color,
        bottom: Color,
    },
    FillRoundRect {
        origin: Vec2,
        size: Vec2,
        radius: f32,
        color: Color,
    },
    FillPolygon {
        points: Vec<Vec2>,
        color: Color,
    },
    /// Disconnected segments sharing one stroke.
    StrokeSegments {
        segments: Vec<[Vec2; 2]>,
        width: f32,
        color: Color,
    },
    StrokeLine {
        from: Vec2,
        to: Vec2,
        width: f32,
        color: Color,
    },
    FillCircle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    /// Arc stroke; angles in radians, clockwise in screen space from +x.
    StrokeArc {
        center: Vec2,
        radius: f32,
        start: f32,
        end: f32,
        width: f32,
        color: Color,
    },
    /// Filled elliptical sector between `start` and `end`.
    FillEllipse {
        center: Vec2,
        radii: Vec2,
        start: f32,
        end: f32,
        color: Color,
    },
    StrokeEllipse {
        center: Vec2,
        radii: Vec2,
        width: f32,
        color: Color,
    },
    Text {
        at: Vec2,
        text: String,
        size_px: f32,
        color: Color,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub width: f32,
    pub height: f32,
    pub commands: Vec<DrawCommand>,
}

impl Scene {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    /// Start a new frame, keeping the allocation.
    pub fn reset(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.commands.clear();
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter()
    }
}
