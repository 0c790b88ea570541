//! Perspective projection between world space and screen space.
//!
//! The camera sits at height `VIEW_HEIGHT` above the defender looking down
//! +z. Depth shrinks everything by `FOV / (FOV + z)`, so distant objects
//! converge on the horizon row `height / 2 + HORIZON_OFFSET`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::constants::{FOV, HORIZON_OFFSET, SKY_TARGET_Z, VIEW_HEIGHT};

/// Size of the drawing surface in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
        }
    }
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center_x(&self) -> f32 {
        self.width / 2.0
    }

    /// Screen row of the horizon (where z -> infinity converges).
    pub fn horizon_y(&self) -> f32 {
        self.height / 2.0 + HORIZON_OFFSET
    }
}

/// A projected point: screen position plus the perspective scale at that depth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    pub screen: Vec2,
    pub scale: f32,
}

impl Projected {
    pub fn x(&self) -> f32 {
        self.screen.x
    }

    pub fn y(&self) -> f32 {
        self.screen.y
    }
}

/// Ground-plane aim point (y = 0).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroundTarget {
    pub x: f32,
    pub z: f32,
}

impl GroundTarget {
    /// Far downrange, straight ahead. Used whenever no ground is under the pointer.
    pub const SKY: GroundTarget = GroundTarget {
        x: 0.0,
        z: SKY_TARGET_Z,
    };

    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.x, self.z)
    }
}

/// Perspective scale factor at depth `z`. Requires `FOV + z > 0`, which holds for z >= 0.
#[inline]
pub fn scale_at(z: f32) -> f32 {
    FOV / (FOV + z)
}

/// Map a world point to screen coordinates.
pub fn project(viewport: &Viewport, x: f32, y: f32, z: f32) -> Projected {
    let scale = scale_at(z);
    let screen_x = x * scale + viewport.center_x();
    let screen_y = (y - VIEW_HEIGHT) * scale + viewport.horizon_y();
    Projected {
        screen: Vec2::new(screen_x, screen_y),
        scale,
    }
}

/// Invert the ground-plane case of [`project`].
///
/// Pointers at or below the horizon row see no ground and resolve to
/// [`GroundTarget::SKY`] instead of failing.
pub fn unproject_ground(viewport: &Viewport, screen_x: f32, screen_y: f32) -> GroundTarget {
    let y_offset = screen_y - viewport.horizon_y();
    if y_offset >= 0.0 {
        return GroundTarget::SKY;
    }

    let scale = y_offset / -VIEW_HEIGHT;
    if scale <= 0.0 || !scale.is_finite() {
        return GroundTarget::SKY;
    }

    GroundTarget {
        x: (screen_x - viewport.center_x()) / scale,
        z: FOV / scale - FOV,
    }
}
