//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// The four defender weapons, each gated by its own cooldown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponKind {
    /// Rapid sidearm: single ballistic shot.
    #[default]
    Pistol,
    /// Lobbed area charge: arcing projectile that detonates on ground contact.
    Grenade,
    /// Penetrating beam: instantaneous line damage.
    Flamethrower,
    /// Area repulsor: pushes every enemy back, no damage.
    Repulsor,
}

impl WeaponKind {
    /// All weapons in selection order (keys 1-4).
    pub const ALL: [WeaponKind; 4] = [
        WeaponKind::Pistol,
        WeaponKind::Grenade,
        WeaponKind::Flamethrower,
        WeaponKind::Repulsor,
    ];

    /// Stable index into per-weapon tables.
    pub fn index(self) -> usize {
        match self {
            WeaponKind::Pistol => 0,
            WeaponKind::Grenade => 1,
            WeaponKind::Flamethrower => 2,
            WeaponKind::Repulsor => 3,
        }
    }
}

/// Projectile flight model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectileKind {
    /// Straight-line bullet, hit-tested against enemy boxes.
    Ballistic,
    /// Gravity-affected charge, detonates on reaching the ground.
    Arcing,
}

/// Cosmetic particle category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParticleKind {
    Fire,
    Explosion,
    Smoke,
    Blood,
    Shockwave,
    Beam,
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// No session running; waiting for a start.
    #[default]
    MainMenu,
    Active,
    Paused,
    /// Terminal: health reached zero. Only a restart leaves this phase.
    GameOver,
}
