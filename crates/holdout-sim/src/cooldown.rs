//! Per-weapon cooldown bookkeeping.

use holdout_core::config::WeaponTable;
use holdout_core::enums::WeaponKind;
use holdout_core::state::CooldownView;

/// Ticks remaining until each weapon may fire again, indexed by `WeaponKind::index`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CooldownTable {
    remaining: [u32; 4],
}

impl CooldownTable {
    pub fn is_ready(&self, weapon: WeaponKind) -> bool {
        self.remaining[weapon.index()] == 0
    }

    pub fn remaining(&self, weapon: WeaponKind) -> u32 {
        self.remaining[weapon.index()]
    }

    /// Restart the weapon's cooldown after a discharge.
    pub fn trigger(&mut self, weapon: WeaponKind, ticks: u32) {
        self.remaining[weapon.index()] = ticks;
    }

    /// One tick passes for every weapon, floored at zero.
    pub fn tick(&mut self) {
        for r in &mut self.remaining {
            *r = r.saturating_sub(1);
        }
    }

    pub fn reset(&mut self) {
        self.remaining = [0; 4];
    }

    pub fn views(&self, weapons: &WeaponTable) -> Vec<CooldownView> {
        WeaponKind::ALL
            .iter()
            .map(|&weapon| {
                let total = weapons.get(weapon).cooldown_ticks;
                let remaining = self.remaining(weapon);
                let ratio = if total == 0 {
                    0.0
                } else {
                    (remaining as f32 / total as f32).clamp(0.0, 1.0)
                };
                CooldownView {
                    weapon,
                    remaining_ticks: remaining,
                    total_ticks: total,
                    ratio,
                }
            })
            .collect()
    }
}
