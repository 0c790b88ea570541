//! Static backdrop: sky, skyline, ground, road and ruins.
//!
//! The skyline is rolled once per session from the seed and never changes.
//! Only the road markings move, scrolling with the frame counter.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use glam::Vec2;
use holdout_core::constants::*;
use holdout_core::projection::{project, Viewport};
use holdout_core::types::Color;

use crate::scene::{DrawCommand, Scene};

/// Stream index for skyline generation (gameplay 0, particles 1).
const BACKDROP_STREAM: u64 = 2;

const SKYLINE_SPACING: f32 = 300.0;
const SKYLINE_NEAR_Z: f32 = 3000.0;
const SKYLINE_DEPTH_SPREAD: f32 = 500.0;
const WINDOW_CELL: Vec2 = Vec2::new(40.0, 50.0);
const WINDOW_INSET: f32 = 10.0;
const WINDOW_SIZE: Vec2 = Vec2::new(20.0, 30.0);
const ROAD_HALF_WIDTH: f32 = 600.0;
const ROAD_LENGTH: f32 = 3000.0;
const MARKING_SPACING: f32 = 400.0;
const MARKING_LENGTH: f32 = 200.0;
const MARKING_SCROLL: f32 = 2.0;
const MARKING_WIDTH: f32 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Window {
    /// Offset from the building's top-left corner, world units.
    pub x: f32,
    pub y: f32,
    pub lit: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Building {
    pub x: f32,
    pub z: f32,
    pub width: f32,
    pub height: f32,
    pub color: Color,
    pub windows: Vec<Window>,
}

/// A dark block sitting on the ground between the road and the skyline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ruin {
    pub x: f32,
    pub z: f32,
    pub width: f32,
    pub height: f32,
}

pub const RUINS: [Ruin; 3] = [
    Ruin { x: -1000.0, z: 800.0, width: 400.0, height: 300.0 },
    Ruin { x: 1200.0, z: 1200.0, width: 300.0, height: 500.0 },
    Ruin { x: -900.0, z: 1800.0, width: 500.0, height: 200.0 },
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Backdrop {
    pub buildings: Vec<Building>,
}

impl Backdrop {
    /// Roll the skyline: 30 buildings spread across the far distance.
    pub fn generate(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        rng.set_stream(BACKDROP_STREAM);

        let buildings = (-15..15)
            .map(|i| {
                let z = SKYLINE_NEAR_Z + rng.gen::<f32>() * SKYLINE_DEPTH_SPREAD;
                let width = 200.0 + rng.gen::<f32>() * 200.0;
                let height = 600.0 + rng.gen::<f32>() * 800.0;
                let x = i as f32 * SKYLINE_SPACING + rng.gen::<f32>() * 100.0;

                let rows = (height / WINDOW_CELL.y).floor() as u32;
                let cols = (width / WINDOW_CELL.x).floor() as u32;
                let mut windows = Vec::new();
                for r in 0..rows {
                    for c in 0..cols {
                        if rng.gen::<f32>() > 0.6 {
                            windows.push(Window {
                                x: c as f32 * WINDOW_CELL.x + WINDOW_INSET,
                                y: r as f32 * WINDOW_CELL.y + WINDOW_INSET,
                                lit: rng.gen::<f32>() > 0.3,
                            });
                        }
                    }
                }

                let color = if rng.gen::<f32>() > 0.5 {
                    BUILDING_BASE
                } else {
                    BUILDING_ACCENT
                };
                Building {
                    x,
                    z,
                    width,
                    height,
                    color,
                    windows,
                }
            })
            .collect();

        Self { buildings }
    }

    /// Paint the whole backdrop. Drawn before, and independent of, the entity pass.
    pub fn draw(&self, scene: &mut Scene, viewport: &Viewport, frame: u64) {
        let (w, h) = (viewport.width, viewport.height);
        let horizon = viewport.horizon_y();

        scene.push(DrawCommand::FillRect {
            origin: Vec2::ZERO,
            size: Vec2::new(w, h),
            color: SKY_TOP,
        });
        scene.push(DrawCommand::GradientRect {
            origin: Vec2::ZERO,
            size: Vec2::new(w, horizon),
            from_y: 0.0,
            to_y: h / 2.0,
            top: SKY_TOP,
            bottom: SKY_BOTTOM,
        });

        for building in &self.buildings {
            self.draw_building(scene, viewport, building);
        }

        scene.push(DrawCommand::FillRect {
            origin: Vec2::new(0.0, horizon),
            size: Vec2::new(w, h),
            color: GROUND_FAR,
        });

        let corners = [
            (-ROAD_HALF_WIDTH, 0.0),
            (ROAD_HALF_WIDTH, 0.0),
            (ROAD_HALF_WIDTH, ROAD_LENGTH),
            (-ROAD_HALF_WIDTH, ROAD_LENGTH),
        ];
        scene.push(DrawCommand::FillPolygon {
            points: corners
                .iter()
                .map(|&(x, z)| project(viewport, x, 0.0, z).screen)
                .collect(),
            color: ROAD,
        });

        let scroll = (frame as f32 * MARKING_SCROLL) % MARKING_SPACING;
        let mut segments = Vec::new();
        let mut z = 0.0;
        while z < ROAD_LENGTH {
            let start = project(viewport, 0.0, 0.0, z + scroll);
            let end = project(viewport, 0.0, 0.0, z + scroll + MARKING_LENGTH);
            // Skip anything that has converged onto the horizon row.
            if start.y() < horizon {
                segments.push([start.screen, end.screen]);
            }
            z += MARKING_SPACING;
        }
        scene.push(DrawCommand::StrokeSegments {
            segments,
            width: MARKING_WIDTH,
            color: ROAD_MARKING,
        });

        for ruin in &RUINS {
            let p = project(viewport, ruin.x, 0.0, ruin.z);
            let size = Vec2::new(ruin.width, ruin.height) * p.scale;
            scene.push(DrawCommand::FillRect {
                origin: Vec2::new(p.x() - size.x / 2.0, p.y() - size.y),
                size,
                color: RUIN_DARK,
            });
        }
    }

    fn draw_building(&self, scene: &mut Scene, viewport: &Viewport, b: &Building) {
        let p = project(viewport, b.x, 0.0, b.z);
        let size = Vec2::new(b.width, b.height) * p.scale;
        let top_left = Vec2::new(p.x() - size.x / 2.0, p.y() - size.y);
        scene.push(DrawCommand::FillRect {
            origin: top_left,
            size,
            color: b.color,
        });

        for window in b.windows.iter().filter(|w| w.lit) {
            scene.push(DrawCommand::FillRect {
                origin: top_left + Vec2::new(window.x, window.y) * p.scale,
                size: WINDOW_SIZE * p.scale,
                color: WINDOW_LIT,
            });
        }
    }
}
