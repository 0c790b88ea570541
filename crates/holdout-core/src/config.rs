//! Session configuration: seed, cadence, surface size and weapon tables.
//!
//! Every field has a default, so a partial JSON file only overrides what it names.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::{PLAYER_MAX_HEALTH, TICK_RATE};
use crate::enums::WeaponKind;
use crate::error::ConfigError;
use crate::projection::Viewport;
use crate::types::Color;

/// Tuning for a single weapon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeaponStats {
    pub name: String,
    pub description: String,
    pub damage: f32,
    /// Ticks before the weapon may fire again.
    pub cooldown_ticks: u32,
    /// Ticks of white hit flash applied to struck enemies.
    pub flash_ticks: u32,
    /// Blast radius (area weapons only).
    #[serde(default)]
    pub radius: f32,
    /// Depth push applied to struck enemies (charge blast and repulsor).
    #[serde(default)]
    pub pushback: f32,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeaponTable {
    pub pistol: WeaponStats,
    pub grenade: WeaponStats,
    pub flamethrower: WeaponStats,
    pub repulsor: WeaponStats,
}

impl Default for WeaponTable {
    fn default() -> Self {
        Self {
            pistol: WeaponStats {
                name: "Pea Shooter".into(),
                description: "Rapid fire, low damage.".into(),
                damage: 35.0,
                cooldown_ticks: 8,
                flash_ticks: 3,
                radius: 0.0,
                pushback: 0.0,
                color: Color::rgb(0x3b82f6),
            },
            grenade: WeaponStats {
                name: "Pineapple".into(),
                description: "Lobbed charge, area damage and knockback.".into(),
                damage: 120.0,
                cooldown_ticks: 120,
                flash_ticks: 5,
                radius: 200.0,
                pushback: 80.0,
                color: Color::rgb(0x10b981),
            },
            flamethrower: WeaponStats {
                name: "Fire Lance".into(),
                description: "Burns everything along the line.".into(),
                damage: 80.0,
                cooldown_ticks: 50,
                flash_ticks: 5,
                radius: 0.0,
                pushback: 0.0,
                color: Color::rgb(0xf97316),
            },
            repulsor: WeaponStats {
                name: "Repulsor".into(),
                description: "Shoves every enemy back. No damage.".into(),
                damage: 0.0,
                cooldown_ticks: 300,
                flash_ticks: 10,
                radius: 0.0,
                pushback: 600.0,
                color: Color::rgb(0xa855f7),
            },
        }
    }
}

impl WeaponTable {
    pub fn get(&self, weapon: WeaponKind) -> &WeaponStats {
        match weapon {
            WeaponKind::Pistol => &self.pistol,
            WeaponKind::Grenade => &self.grenade,
            WeaponKind::Flamethrower => &self.flamethrower,
            WeaponKind::Repulsor => &self.repulsor,
        }
    }

    /// Cooldowns in `WeaponKind::ALL` order.
    pub fn cooldowns(&self) -> [u32; 4] {
        WeaponKind::ALL.map(|w| self.get(w).cooldown_ticks)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Seeds the gameplay, particle and backdrop random streams.
    pub seed: u64,
    pub tick_rate: u32,
    pub viewport: Viewport,
    pub max_health: i32,
    pub weapons: WeaponTable,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            tick_rate: TICK_RATE,
            viewport: Viewport::default(),
            max_health: PLAYER_MAX_HEALTH,
            weapons: WeaponTable::default(),
        }
    }
}

impl GameConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_rate == 0 {
            return Err(ConfigError::Invalid("tick_rate must be > 0".into()));
        }
        if !(self.viewport.width > 0.0 && self.viewport.height > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "viewport must be positive, got {}x{}",
                self.viewport.width, self.viewport.height
            )));
        }
        if self.max_health <= 0 {
            return Err(ConfigError::Invalid("max_health must be > 0".into()));
        }
        for weapon in WeaponKind::ALL {
            let stats = self.weapons.get(weapon);
            if stats.cooldown_ticks == 0 {
                return Err(ConfigError::Invalid(format!(
                    "{weapon:?} cooldown must be at least one tick"
                )));
            }
            if stats.damage < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{weapon:?} damage must not be negative"
                )));
            }
        }
        Ok(())
    }
}
