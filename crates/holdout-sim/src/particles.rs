//! Cosmetic particle effects.
//!
//! Particles live outside the ECS world and draw from their own RNG stream,
//! so spawning or aging them never shifts gameplay randomness.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use holdout_core::components::Particle;
use holdout_core::constants::*;
use holdout_core::enums::ParticleKind;
use holdout_core::types::{Color, Position, Velocity};

/// Stream index used for the particle RNG (gameplay uses stream 0).
const PARTICLE_STREAM: u64 = 1;

/// Optional overrides for a burst. Anything left `None` gets the kind's default.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParticleOverrides {
    pub velocity: Option<Velocity>,
    pub life: Option<f32>,
    pub size: Option<f32>,
    pub color: Option<Color>,
}

pub struct ParticleSystem {
    particles: Vec<Particle>,
    rng: ChaCha8Rng,
    next_id: u32,
}

impl ParticleSystem {
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        rng.set_stream(PARTICLE_STREAM);
        Self {
            particles: Vec::new(),
            rng,
            next_id: 0,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn count_kind(&self, kind: ParticleKind) -> usize {
        self.particles.iter().filter(|p| p.kind == kind).count()
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    /// Emit `count` particles of `kind` at `at` with default motion, size and color.
    pub fn burst(&mut self, kind: ParticleKind, at: Position, count: usize) {
        self.burst_with(kind, at, count, ParticleOverrides::default());
    }

    pub fn burst_with(
        &mut self,
        kind: ParticleKind,
        at: Position,
        count: usize,
        overrides: ParticleOverrides,
    ) {
        self.particles.reserve(count);
        for _ in 0..count {
            let particle = self.make(kind, at, &overrides);
            self.particles.push(particle);
        }
    }

    fn make(&mut self, kind: ParticleKind, at: Position, overrides: &ParticleOverrides) -> Particle {
        let speed = if kind == ParticleKind::Explosion {
            EXPLOSION_PARTICLE_SPEED
        } else {
            PARTICLE_SPEED
        };
        let velocity = match overrides.velocity {
            Some(v) => v,
            None => {
                let lift = if kind == ParticleKind::Fire { FIRE_LIFT } else { 0.0 };
                Velocity::new(
                    (self.rng.gen::<f32>() - 0.5) * speed,
                    (self.rng.gen::<f32>() - 0.5) * speed + lift,
                    (self.rng.gen::<f32>() - 0.5) * speed,
                )
            }
        };
        let life = overrides.life.unwrap_or(1.0);
        let size = match overrides.size {
            Some(s) => s,
            None if kind == ParticleKind::Explosion => 20.0 + self.rng.gen::<f32>() * 20.0,
            None => 5.0 + self.rng.gen::<f32>() * 5.0,
        };
        let color = overrides.color.unwrap_or(match kind {
            ParticleKind::Fire => FIRE_COLOR,
            ParticleKind::Blood => BLOOD_COLOR,
            _ => Color::WHITE,
        });

        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        Particle {
            id,
            kind,
            position: at,
            velocity,
            life,
            max_life: life,
            size,
            color,
        }
    }

    /// Age every particle by one tick and drop the expired ones.
    pub fn update(&mut self) {
        let rng = &mut self.rng;
        for p in &mut self.particles {
            match p.kind {
                ParticleKind::Shockwave => {
                    p.size += SHOCKWAVE_GROWTH;
                    p.life -= SHOCKWAVE_FADE;
                }
                // Velocity holds the endpoint; the beam never moves.
                ParticleKind::Beam => p.life -= BEAM_FADE,
                _ => {
                    p.position.integrate(&p.velocity);
                    p.life -= PARTICLE_FADE;
                    if p.kind == ParticleKind::Fire {
                        p.position.z += FIRE_DRIFT_Z;
                        p.position.x += (rng.gen::<f32>() - 0.5) * FIRE_JITTER_X;
                        p.size += FIRE_GROWTH;
                    }
                }
            }
        }
        self.particles.retain(|p| p.life > 0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_burst_properties() {
        let mut ps = ParticleSystem::new(1);
        ps.burst(ParticleKind::Explosion, Position::new(0.0, 0.0, 500.0), 50);
        assert_eq!(ps.len(), 50);
        for p in ps.particles() {
            assert!((20.0..40.0).contains(&p.size));
            assert!(p.velocity.x.abs() <= 7.5 && p.velocity.z.abs() <= 7.5);
            assert_eq!(p.life, 1.0);
            assert_eq!(p.color, Color::WHITE);
        }

        ps.clear();
        ps.burst(ParticleKind::Fire, Position::default(), 50);
        for p in ps.particles() {
            assert!((5.0..10.0).contains(&p.size));
            assert!(p.velocity.y >= 0.5 && p.velocity.y <= 5.5, "fire gets lift");
            assert_eq!(p.color, FIRE_COLOR);
        }
    }

    #[test]
    fn test_ids_are_unique() {
        let mut ps = ParticleSystem::new(3);
        ps.burst(ParticleKind::Blood, Position::default(), 10);
        ps.burst(ParticleKind::Smoke, Position::default(), 10);
        let mut ids: Vec<u32> = ps.particles().iter().map(|p| p.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), 20);
    }

    #[test]
    fn test_generic_particle_lives_fifty_ticks() {
        let mut ps = ParticleSystem::new(7);
        ps.burst(ParticleKind::Smoke, Position::default(), 1);
        let mut ticks = 0;
        while !ps.is_empty() {
            ps.update();
            ticks += 1;
            assert!(ticks < 100, "particle never expired");
        }
        // 1.0 / 0.02 with float accumulation lands on 50 or 51.
        assert!((50..=51).contains(&ticks), "lived {ticks} ticks");
    }

    #[test]
    fn test_shockwave_grows_and_fades_fast() {
        let mut ps = ParticleSystem::new(7);
        ps.burst_with(
            ParticleKind::Shockwave,
            Position::new(0.0, 20.0, 200.0),
            1,
            ParticleOverrides {
                life: Some(SHOCKWAVE_LIFE),
                size: Some(SHOCKWAVE_SIZE),
                ..Default::default()
            },
        );
        ps.update();
        let p = &ps.particles()[0];
        assert_eq!(p.size, SHOCKWAVE_SIZE + SHOCKWAVE_GROWTH);
        assert!((p.life - 0.45).abs() < 1e-6);
        assert_eq!(p.position, Position::new(0.0, 20.0, 200.0), "shockwave stays put");

        for _ in 0..10 {
            ps.update();
        }
        assert!(ps.is_empty());
    }

    #[test]
    fn test_beam_keeps_endpoint() {
        let mut ps = ParticleSystem::new(7);
        let end = Velocity::new(300.0, 0.0, 1900.0);
        ps.burst_with(
            ParticleKind::Beam,
            Position::new(0.0, BEAM_ORIGIN_Y, 0.0),
            1,
            ParticleOverrides {
                velocity: Some(end),
                life: Some(BEAM_LIFE),
                size: Some(BEAM_SIZE),
                color: Some(FIRE_COLOR),
            },
        );
        ps.update();
        assert_eq!(ps.particles()[0].velocity, end);
        assert_eq!(ps.particles()[0].position.x, 0.0);
        ps.update();
        assert!(ps.is_empty(), "0.2 life at 0.1 per tick is gone after two ticks");
    }

    #[test]
    fn test_fire_drifts_away_and_grows() {
        let mut ps = ParticleSystem::new(9);
        ps.burst_with(
            ParticleKind::Fire,
            Position::default(),
            1,
            ParticleOverrides {
                velocity: Some(Velocity::default()),
                ..Default::default()
            },
        );
        let size0 = ps.particles()[0].size;
        ps.update();
        let p = &ps.particles()[0];
        assert_eq!(p.position.z, FIRE_DRIFT_Z);
        assert!(p.position.x.abs() <= FIRE_JITTER_X / 2.0);
        assert_eq!(p.size, size0 + FIRE_GROWTH);
    }

    #[test]
    fn test_same_seed_same_particles() {
        let mut a = ParticleSystem::new(11);
        let mut b = ParticleSystem::new(11);
        for ps in [&mut a, &mut b] {
            ps.burst(ParticleKind::Explosion, Position::new(5.0, 0.0, 900.0), 30);
            ps.burst(ParticleKind::Fire, Position::new(5.0, 0.0, 900.0), 15);
            for _ in 0..10 {
                ps.update();
            }
        }
        let pa: Vec<_> = a.particles().iter().map(|p| (p.position, p.size)).collect();
        let pb: Vec<_> = b.particles().iter().map(|p| (p.position, p.size)).collect();
        assert_eq!(pa, pb);
    }
}
