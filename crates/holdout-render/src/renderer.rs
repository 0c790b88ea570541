//! Snapshot renderer: backdrop, depth-sorted entities, crosshair.
//!
//! There is no depth buffer, so entities are painted farthest first. The
//! renderer only reads the snapshot; it never feeds anything back.

use std::f32::consts::{FRAC_PI_2, PI, TAU};

use glam::Vec2;

use holdout_core::config::{GameConfig, WeaponTable};
use holdout_core::constants::*;
use holdout_core::components::Particle;
use holdout_core::enums::{ParticleKind, ProjectileKind};
use holdout_core::projection::{project, Viewport};
use holdout_core::state::{EnemyView, GameStateSnapshot, PointerView, ProjectileView};
use holdout_core::types::Color;

use crate::backdrop::Backdrop;
use crate::scene::{DrawCommand, Scene};

const CROSSHAIR_RADIUS: f32 = 15.0;
const CROSSHAIR_DOT: f32 = 2.0;
const COOLDOWN_RING_RADIUS: f32 = 20.0;
const COOLDOWN_RING_COLOR: Color = Color::rgba(255, 255, 255, 204);
/// Weapons with a longer cooldown also show the seconds remaining.
const COOLDOWN_TEXT_MIN_TICKS: u32 = 40;
const COOLDOWN_TEXT_OFFSET: f32 = 25.0;
const STREAK_TAIL_TICKS: f32 = 3.0;
const PUPIL_COLOR: Color = Color::BLACK;

/// One entry of the painter's list.
enum Drawable<'a> {
    Enemy(&'a EnemyView),
    Projectile(&'a ProjectileView),
    Particle(&'a Particle),
}

impl Drawable<'_> {
    fn depth(&self) -> f32 {
        match self {
            Drawable::Enemy(e) => e.position.z,
            Drawable::Projectile(p) => p.position.z,
            Drawable::Particle(p) => p.position.z,
        }
    }
}

pub struct Renderer {
    backdrop: Backdrop,
    weapons: WeaponTable,
    tick_rate: u32,
}

impl Renderer {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            backdrop: Backdrop::generate(config.seed),
            weapons: config.weapons.clone(),
            tick_rate: config.tick_rate,
        }
    }

    pub fn backdrop(&self) -> &Backdrop {
        &self.backdrop
    }

    pub fn render(&self, snapshot: &GameStateSnapshot) -> Scene {
        let mut scene = Scene::default();
        self.render_into(snapshot, &mut scene);
        scene
    }

    /// Redraw the whole frame into `scene`, reusing its allocation.
    pub fn render_into(&self, snapshot: &GameStateSnapshot, scene: &mut Scene) {
        let viewport = snapshot.viewport;
        scene.reset(viewport.width, viewport.height);

        self.backdrop.draw(scene, &viewport, snapshot.frame);

        let mut drawables: Vec<Drawable<'_>> = Vec::with_capacity(
            snapshot.enemies.len() + snapshot.projectiles.len() + snapshot.particles.len(),
        );
        drawables.extend(snapshot.enemies.iter().map(Drawable::Enemy));
        drawables.extend(snapshot.projectiles.iter().map(Drawable::Projectile));
        drawables.extend(snapshot.particles.iter().map(Drawable::Particle));
        // Stable: equal depths keep enemy, projectile, particle order.
        drawables.sort_by(|a, b| b.depth().total_cmp(&a.depth()));

        for drawable in &drawables {
            match drawable {
                Drawable::Enemy(e) => draw_enemy(scene, &viewport, e, snapshot.frame),
                Drawable::Projectile(p) => self.draw_projectile(scene, &viewport, p),
                Drawable::Particle(p) => draw_particle(scene, &viewport, p),
            }
        }

        if !snapshot.scoreboard.is_game_over() {
            self.draw_crosshair(scene, snapshot);
        }
    }

    fn draw_projectile(&self, scene: &mut Scene, vp: &Viewport, p: &ProjectileView) {
        let at = project(vp, p.position.x, p.position.y, p.position.z);
        match p.kind {
            ProjectileKind::Arcing => {
                let r = p.radius * at.scale;
                scene.push(DrawCommand::FillCircle {
                    center: Vec2::new(at.x(), at.y() - r),
                    radius: r,
                    color: self.weapons.grenade.color,
                });
            }
            ProjectileKind::Ballistic => {
                // The tail never reaches behind the defender's plane.
                let back = if p.velocity.z > 0.0 {
                    STREAK_TAIL_TICKS.min(p.position.z.max(0.0) / p.velocity.z)
                } else {
                    0.0
                };
                let tail = p.position.as_vec3() - p.velocity.as_vec3() * back;
                let tail = project(vp, tail.x, tail.y, tail.z);
                scene.push(DrawCommand::StrokeLine {
                    from: tail.screen,
                    to: at.screen,
                    width: 3.0 * at.scale,
                    color: BULLET_STREAK_COLOR,
                });
            }
        }
    }

    fn draw_crosshair(&self, scene: &mut Scene, snapshot: &GameStateSnapshot) {
        let PointerView { x, y, .. } = snapshot.pointer;
        let center = Vec2::new(x, y);
        let weapon = snapshot.scoreboard.selected_weapon;
        let color = self.weapons.get(weapon).color;

        scene.push(DrawCommand::StrokeArc {
            center,
            radius: CROSSHAIR_RADIUS,
            start: 0.0,
            end: TAU,
            width: 2.0,
            color,
        });
        scene.push(DrawCommand::FillCircle {
            center,
            radius: CROSSHAIR_DOT,
            color,
        });

        let Some(cooldown) = snapshot.cooldowns.iter().find(|c| c.weapon == weapon) else {
            return;
        };
        if cooldown.remaining_ticks == 0 {
            return;
        }
        let start = -FRAC_PI_2;
        scene.push(DrawCommand::StrokeArc {
            center,
            radius: COOLDOWN_RING_RADIUS,
            start,
            end: start + TAU * cooldown.ratio,
            width: 4.0,
            color: COOLDOWN_RING_COLOR,
        });
        if cooldown.total_ticks > COOLDOWN_TEXT_MIN_TICKS {
            let seconds = cooldown.remaining_ticks as f32 / self.tick_rate.max(1) as f32;
            scene.push(DrawCommand::Text {
                at: center + Vec2::new(COOLDOWN_TEXT_OFFSET, 0.0),
                text: format!("{seconds:.1}"),
                size_px: 12.0,
                color: Color::WHITE,
            });
        }
    }
}

fn draw_enemy(scene: &mut Scene, vp: &Viewport, e: &EnemyView, frame: u64) {
    let p = project(vp, e.position.x, e.position.y, e.position.z);
    let size = e.width * p.scale;
    let h = e.height * p.scale;
    let flashing = e.flash_ticks > 0;

    scene.push(DrawCommand::FillRoundRect {
        origin: Vec2::new(p.x() - size / 2.0, p.y() - h),
        size: Vec2::new(size, h),
        radius: 10.0 * p.scale,
        color: if flashing { Color::WHITE } else { e.color },
    });
    if flashing {
        return;
    }

    let eye_radius = size * 0.25;
    let eye_offset = size * 0.25;
    let eye_y = p.y() - h + h * 0.3;
    let sway = (frame as f32 * 0.2).sin() * 2.0;
    for side in [-1.0, 1.0] {
        scene.push(DrawCommand::FillCircle {
            center: Vec2::new(p.x() + side * eye_offset, eye_y),
            radius: eye_radius,
            color: ENEMY_EYE_COLOR,
        });
    }
    for side in [-1.0, 1.0] {
        scene.push(DrawCommand::FillCircle {
            center: Vec2::new(p.x() + side * eye_offset + sway, eye_y),
            radius: eye_radius / 3.0,
            color: PUPIL_COLOR,
        });
    }
    scene.push(DrawCommand::FillEllipse {
        center: Vec2::new(p.x(), p.y() - h * 0.4),
        radii: Vec2::new(size * 0.2, size * 0.1),
        start: 0.0,
        end: PI,
        color: ENEMY_MOUTH_COLOR,
    });
}

fn draw_particle(scene: &mut Scene, vp: &Viewport, part: &Particle) {
    let p = project(vp, part.position.x, part.position.y, part.position.z);
    let color = part.color.with_alpha(part.life);
    match part.kind {
        ParticleKind::Shockwave => {
            let r = part.size * p.scale;
            scene.push(DrawCommand::StrokeEllipse {
                center: p.screen,
                radii: Vec2::new(r * 2.0, r * 0.5),
                width: 5.0 * p.scale,
                color,
            });
        }
        ParticleKind::Beam => {
            let start = project(vp, 0.0, 0.0, 0.0);
            let end = project(vp, part.velocity.x, 0.0, part.velocity.z);
            scene.push(DrawCommand::StrokeLine {
                from: start.screen,
                to: end.screen,
                width: part.size * p.scale * 4.0,
                color,
            });
        }
        _ => {
            scene.push(DrawCommand::FillCircle {
                center: p.screen,
                radius: part.size * p.scale * part.life,
                color,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use holdout_core::enums::{GamePhase, WeaponKind};
    use holdout_core::state::CooldownView;
    use holdout_core::types::{Position, Velocity};

    fn enemy_view(id: u32, z: f32, flash_ticks: u32) -> EnemyView {
        EnemyView {
            id,
            position: Position::new(0.0, 0.0, z),
            width: ENEMY_WIDTH,
            height: ENEMY_HEIGHT,
            health: 50.0,
            max_health: 50.0,
            flash_ticks,
            color: ENEMY_COLOR,
        }
    }

    fn active_snapshot() -> GameStateSnapshot {
        let mut snapshot = GameStateSnapshot::default();
        snapshot.scoreboard.phase = GamePhase::Active;
        snapshot
    }

    fn body_colors(scene: &Scene) -> Vec<Color> {
        scene
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillRoundRect { color, .. } => Some(*color),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_far_enemies_are_painted_first() {
        let renderer = Renderer::new(&GameConfig::default());
        let mut snapshot = active_snapshot();
        let mut near = enemy_view(0, 200.0, 0);
        near.color = Color::rgb(0x000001);
        let mut far = enemy_view(1, 2000.0, 0);
        far.color = Color::rgb(0x000002);
        snapshot.enemies = vec![near, far];

        let scene = renderer.render(&snapshot);
        assert_eq!(
            body_colors(&scene),
            vec![Color::rgb(0x000002), Color::rgb(0x000001)]
        );
    }

    #[test]
    fn test_flashing_enemy_is_white_without_face() {
        let renderer = Renderer::new(&GameConfig::default());
        let mut snapshot = active_snapshot();
        snapshot.enemies = vec![enemy_view(0, 500.0, 3)];
        let flashing = renderer.render(&snapshot);
        assert_eq!(body_colors(&flashing), vec![Color::WHITE]);
        assert!(!flashing
            .iter()
            .any(|c| matches!(c, DrawCommand::FillEllipse { .. })));

        snapshot.enemies = vec![enemy_view(0, 500.0, 0)];
        let idle = renderer.render(&snapshot);
        assert_eq!(body_colors(&idle), vec![ENEMY_COLOR]);
        assert!(idle
            .iter()
            .any(|c| matches!(c, DrawCommand::FillEllipse { color, .. } if *color == ENEMY_MOUTH_COLOR)));
    }

    #[test]
    fn test_enemy_shrinks_with_depth() {
        let renderer = Renderer::new(&GameConfig::default());
        let mut snapshot = active_snapshot();
        snapshot.enemies = vec![enemy_view(0, 0.0, 0), enemy_view(1, 400.0, 0)];
        let scene = renderer.render(&snapshot);
        let sizes: Vec<Vec2> = scene
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillRoundRect { size, .. } => Some(*size),
                _ => None,
            })
            .collect();
        // Far one (z = 400, scale 0.5) first.
        assert!((sizes[0].x - ENEMY_WIDTH * 0.5).abs() < 1e-4);
        assert!((sizes[1].x - ENEMY_WIDTH).abs() < 1e-4);
    }

    #[test]
    fn test_bullet_streak_and_beam() {
        let renderer = Renderer::new(&GameConfig::default());
        let mut snapshot = active_snapshot();
        snapshot.projectiles = vec![ProjectileView {
            id: 0,
            kind: ProjectileKind::Ballistic,
            position: Position::new(10.0, 30.0, 300.0),
            velocity: Velocity::new(0.0, 0.0, 75.0),
            radius: BULLET_RADIUS,
        }];
        snapshot.particles = vec![Particle {
            id: 0,
            kind: ParticleKind::Beam,
            position: Position::new(0.0, BEAM_ORIGIN_Y, 0.0),
            velocity: Velocity::new(0.0, 0.0, BEAM_LENGTH),
            life: 0.1,
            max_life: BEAM_LIFE,
            size: BEAM_SIZE,
            color: FIRE_COLOR,
        }];
        let scene = renderer.render(&snapshot);
        let lines: Vec<&DrawCommand> = scene
            .iter()
            .filter(|c| matches!(c, DrawCommand::StrokeLine { .. }))
            .collect();
        assert_eq!(lines.len(), 2);
        // The streak (z = 300) is farther than the beam (z = 0), so it comes first.
        match lines[0] {
            DrawCommand::StrokeLine { color, .. } => assert_eq!(*color, BULLET_STREAK_COLOR),
            _ => unreachable!(),
        }
        match lines[1] {
            DrawCommand::StrokeLine { width, color, .. } => {
                assert!((width - BEAM_SIZE * 4.0).abs() < 1e-4);
                assert_eq!(color.a, 26, "alpha follows remaining life");
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_fast_streak_tail_stays_in_front_of_camera() {
        let renderer = Renderer::new(&GameConfig::default());
        let mut snapshot = active_snapshot();
        snapshot.projectiles = vec![ProjectileView {
            id: 0,
            kind: ProjectileKind::Ballistic,
            position: Position::new(0.0, 30.0, 1500.0),
            velocity: Velocity::new(0.0, 0.0, 1500.0),
            radius: BULLET_RADIUS,
        }];
        let scene = renderer.render(&snapshot);
        let (from, to) = scene
            .iter()
            .find_map(|c| match c {
                DrawCommand::StrokeLine { from, to, .. } => Some((*from, *to)),
                _ => None,
            })
            .unwrap();
        let origin = project(&snapshot.viewport, 0.0, 30.0, 0.0).screen;
        assert!((from - origin).length() < 1e-3, "tail clamped to z = 0");
        assert!(to.is_finite());
    }

    #[test]
    fn test_crosshair_cooldown_ring_and_text() {
        let renderer = Renderer::new(&GameConfig::default());
        let mut snapshot = active_snapshot();
        snapshot.pointer = PointerView {
            x: 300.0,
            y: 200.0,
            fire_held: false,
        };
        snapshot.scoreboard.selected_weapon = WeaponKind::Grenade;
        snapshot.cooldowns = vec![CooldownView {
            weapon: WeaponKind::Grenade,
            remaining_ticks: 90,
            total_ticks: 120,
            ratio: 0.75,
        }];
        let scene = renderer.render(&snapshot);
        let ring = scene.iter().find_map(|c| match c {
            DrawCommand::StrokeArc { radius, start, end, .. } if *radius == COOLDOWN_RING_RADIUS => {
                Some(end - start)
            }
            _ => None,
        });
        assert!((ring.unwrap() - TAU * 0.75).abs() < 1e-4);
        let text = scene.iter().find_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.clone()),
            _ => None,
        });
        assert_eq!(text.as_deref(), Some("1.5"));
    }

    #[test]
    fn test_short_cooldown_has_no_text_and_game_over_hides_crosshair() {
        let renderer = Renderer::new(&GameConfig::default());
        let mut snapshot = active_snapshot();
        snapshot.cooldowns = vec![CooldownView {
            weapon: WeaponKind::Pistol,
            remaining_ticks: 5,
            total_ticks: 8,
            ratio: 0.625,
        }];
        let scene = renderer.render(&snapshot);
        assert!(!scene.iter().any(|c| matches!(c, DrawCommand::Text { .. })));
        assert!(scene
            .iter()
            .any(|c| matches!(c, DrawCommand::StrokeArc { radius, .. } if *radius == COOLDOWN_RING_RADIUS)));

        snapshot.scoreboard.phase = GamePhase::GameOver;
        let over = renderer.render(&snapshot);
        assert!(!over
            .iter()
            .any(|c| matches!(c, DrawCommand::StrokeArc { .. })));
    }
}
